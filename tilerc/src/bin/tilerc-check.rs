use anyhow::{bail, Result};
use clap::{arg, command};
use tilerc::utils::file_handler::check_config_file;
use tilerc::{Config, Issue};

fn main() -> Result<()> {
    let matches = command!("tilerc-check")
        .about("Checks syntax and consistency of the configuration file")
        .help_template(tilerc::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!([INPUT] "Sets the input file to use. Uses the XDG config file otherwise."),
        ])
        .get_matches();

    let config_file = matches.get_one::<String>("INPUT").map(String::as_str);
    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m tilerc version: {}",
        env!("CARGO_PKG_VERSION")
    );
    let features = env!("TILERC_FEATURES");
    if verbose && !features.trim().is_empty() {
        println!("\x1b[0;94m::\x1b[0m Enabled features:{features}");
    }

    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    let config = match check_config_file(config_file, verbose) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            if verbose {
                dbg!(&config);
            }
            config
        }
        Err(e) => {
            println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m Configuration failed. Reason: {e:?}\x1b[0m");
            bail!("configuration could not be loaded");
        }
    };

    let mut errors = 0;
    for (title, issues) in sections(&config, verbose) {
        println!("\x1b[0;94m::\x1b[0m Checking {title} . . .");
        if issues.iter().all(|issue| !issue.is_error()) {
            println!("\x1b[0;92m    -> All {title} OK\x1b[0m");
        }
        for issue in &issues {
            println!("{issue}");
        }
        errors += issues.iter().filter(|issue| issue.is_error()).count();
    }

    if errors > 0 {
        bail!("{errors} error(s) found in the configuration");
    }
    Ok(())
}

fn sections(config: &Config, verbose: bool) -> [(&'static str, Vec<Issue>); 8] {
    [
        ("log level", config.check_log_level(verbose)),
        ("keybinds", config.check_keybinds(verbose)),
        ("mouse bindings", config.check_mouse(verbose)),
        ("groups", config.check_groups(verbose)),
        ("colors", config.check_colors(verbose)),
        ("layouts", config.check_layouts(verbose)),
        ("widgets", config.check_widgets(verbose)),
        ("screens", config.check_screens(verbose)),
    ]
}
