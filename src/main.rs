//! `order` binary.

use std::fs::OpenOptions;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use order::{commands, Cli, CliError, Config};

/// Filter defaults to `warn`; `ORDER_LOG_FILE` redirects logs off stderr so
/// they never land on top of the game screen.
fn init_logging(config: &Config) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::new().filter_or("ORDER_LOG", "warn"));
    if let Some(path) = &config.log_file {
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        builder
            .format_timestamp_micros()
            .target(env_logger::Target::Pipe(Box::new(log_file)));
    }
    builder.init();
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_env();

    if let Err(e) = init_logging(&config) {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }
    debug!("{config:?}");

    match commands::run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<CliError>() {
            Some(cli_err) => {
                eprintln!("{cli_err}");
                ExitCode::from(cli_err.exit_code())
            }
            None => {
                eprintln!("Error: {e:#}");
                ExitCode::FAILURE
            }
        },
    }
}
