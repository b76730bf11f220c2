//! Subcommand implementations and the dispatcher.

pub mod calendar;
pub mod clock;
pub mod device;
pub mod ping;
pub mod pong;
pub mod random;
pub mod text;
pub mod weather;

use std::io::{self, Write};

use anyhow::Result;
use chrono::{Datelike, Local};
use log::{debug, warn};

use crate::cli::Command;
use crate::config::Config;
use crate::usage::{report_lines, UsageLog};

/// Bump the counter for `name`. Failures are logged, never returned.
pub fn record_usage(name: &str, config: &Config) {
    if config.usage_disabled {
        return;
    }
    let Some(path) = &config.usage_file else {
        debug!("no usage file configured");
        return;
    };
    match UsageLog::new(path).record(name) {
        Ok(n) => debug!("{name} run {n} times"),
        Err(e) => warn!("could not record usage for {name}: {e:#}"),
    }
}

fn print_lines<I, S>(lines: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = io::stdout().lock();
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    out.flush()?;
    Ok(())
}

pub fn run(command: Command, config: &Config) -> Result<()> {
    debug!("dispatching {}", command.name());
    record_usage(command.name(), config);

    match command {
        Command::Hello { name } => print_lines([text::greeting(&name)]),
        Command::Echo { text } => print_lines([text::echo(&text)]),
        Command::Reverse { text } => print_lines([text::reverse(&text)]),
        Command::Random { min, max } => {
            let (min, max) = random::bounds(min, max)?;
            print_lines([random::pick(&mut rand::thread_rng(), min, max).to_string()])
        }
        Command::Ping { host } => print_lines([ping::run(host.as_deref())?]),
        Command::Weather { city, imperial } => {
            print_lines(["Fetching weather information..."])?;
            print_lines(weather::run(&city, imperial, config)?)
        }
        Command::Clock => match clock::run()? {
            Some(line) => print_lines([line]),
            None => Ok(()),
        },
        Command::Calendar { month, year } => {
            let today = Local::now().date_naive();
            let month = month.unwrap_or_else(|| today.month());
            let year = year.unwrap_or_else(|| today.year());
            print_lines(calendar::render_month(year, month)?)
        }
        Command::Device => print_lines(device::DeviceInfo::collect().lines()),
        Command::Usage => {
            let counts = match &config.usage_file {
                Some(path) => UsageLog::new(path).load()?,
                None => Default::default(),
            };
            print_lines(report_lines(&counts))
        }
        Command::Pong { difficulty } => pong::run(difficulty.as_deref(), config),
    }
}
