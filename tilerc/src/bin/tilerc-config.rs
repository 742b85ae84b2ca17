use anyhow::{bail, Context, Result};
use clap::{arg, command, ArgGroup};
use std::env;
use std::process::Command;
use tilerc::utils::file_handler::{
    find_config_file, get_default_path, load_from_path, write_to_file,
};
use tilerc::Config;

fn main() -> Result<()> {
    let matches = command!("tilerc-config")
        .about("Edit, regenerate or export the configuration")
        .help_template(tilerc::utils::get_help_template())
        .args(&[
            arg!(-n --new "Only generate a new config file"),
            arg!(-d --dump "Print the resolved configuration the host reads, as JSON"),
            arg!(-e --edit "Edit the config with $EDITOR (the default)"),
        ])
        .group(ArgGroup::new("mode").args(["new", "dump", "edit"]))
        .get_matches();

    if matches.get_flag("new") {
        generate_new_config()
    } else if matches.get_flag("dump") {
        dump_config()
    } else {
        run_editor()
    }
}

fn current_config() -> Result<Config> {
    match find_config_file()? {
        Some(path) => load_from_path(&path),
        None => Ok(Config::default()),
    }
}

//will not overwrite an existing config unless confirmed
fn generate_new_config() -> Result<()> {
    let path = get_default_path()?;

    if path.exists() {
        println!(
            "\x1b[0;94m::\x1b[0m A config file already exists, do you want to override it? [y/N]"
        );
        let mut line = String::new();
        std::io::stdin()
            .read_line(&mut line)
            .context("Failed to read line")?;
        if !(line.contains('y') || line.contains('Y')) {
            return Ok(());
        }
    }
    write_to_file(&path, &Config::default())?;
    println!("\x1b[0;92m    -> Wrote {}\x1b[0m", path.display());
    Ok(())
}

fn dump_config() -> Result<()> {
    let host = current_config()?.host_config()?;
    println!("{}", serde_json::to_string_pretty(&host)?);
    Ok(())
}

fn run_editor() -> Result<()> {
    let editor = env::var("EDITOR").context("EDITOR is not set")?;
    let config_path = match find_config_file()? {
        Some(path) => path,
        None => {
            let path = get_default_path()?;
            write_to_file(&path, &Config::default())?;
            path
        }
    };

    let status = Command::new(&editor).arg(&config_path).status()?;
    if !status.success() {
        bail!("Failed to run {editor}");
    }
    Ok(())
}
