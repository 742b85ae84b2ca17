use anyhow::Result;
use clap::command;
use tilerc::utils::log::setup_logging;
use tilerc_core::child_process::ProcessSpawner;

fn main() -> Result<()> {
    command!("tilerc-autostart")
        .about("Runs the configured autostart script once")
        .help_template(tilerc::utils::get_help_template())
        .get_matches();

    let config = tilerc::load();
    setup_logging(&config.log_level);

    match config.startup_hook() {
        Some(hook) => {
            hook.fire(&ProcessSpawner);
        }
        None => tracing::info!("No autostart script configured."),
    }
    Ok(())
}
