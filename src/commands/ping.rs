//! `ping [host]` via the OS ping binary.

use std::process::Command;

use crossterm::style::Stylize;
use log::debug;

use crate::error::CliError;

pub const DEFAULT_HOST: &str = "google.com";

/// Program and arguments for a single echo request.
pub fn ping_args(host: &str, windows: bool) -> (&'static str, Vec<String>) {
    let count_flag = if windows { "-n" } else { "-c" };
    ("ping", vec![count_flag.to_string(), "1".to_string(), host.to_string()])
}

/// Round-trip time as printed by ping, without the unit.
///
/// Unix prints `time=12.3 ms`; Windows prints `time=12ms` or `time<1ms`.
pub fn parse_time(output: &str, windows: bool) -> Option<String> {
    if windows {
        let lower = output.to_lowercase();
        lower.match_indices("time").find_map(|(i, _)| {
            let rest = &lower[i + "time".len()..];
            let rest = rest.strip_prefix('=').or_else(|| rest.strip_prefix('<'))?;
            let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
            (!digits.is_empty() && rest[digits.len()..].starts_with("ms")).then_some(digits)
        })
    } else {
        output.match_indices("time=").find_map(|(i, _)| {
            let rest = &output[i + "time=".len()..];
            let num: String = rest
                .chars()
                .take_while(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            (!num.is_empty() && rest[num.len()..].starts_with(" ms")).then_some(num)
        })
    }
}

/// Line printed on success.
pub fn pong_line(time: Option<&str>) -> String {
    let label = "🏓 PONG!".bold().green();
    match time {
        Some(t) => format!("{label} {t} ms"),
        None => format!("{label} (time not found)"),
    }
}

pub fn run(host: Option<&str>) -> Result<String, CliError> {
    let host = host.unwrap_or(DEFAULT_HOST);
    if host.is_empty() || host.starts_with('-') {
        return Err(CliError::Usage(format!("usage: order ping [host] (bad host {host:?})")));
    }

    let windows = cfg!(windows);
    let (program, args) = ping_args(host, windows);
    debug!("running {program} {args:?}");

    let output = Command::new(program)
        .args(&args)
        .output()
        .map_err(|e| CliError::Failed(format!("Ping failed: {e}")))?;
    debug!("ping exited with {}", output.status);

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = if stderr.trim().is_empty() {
            output.status.to_string()
        } else {
            stderr.trim().to_string()
        };
        return Err(CliError::Failed(format!("Ping failed: {reason}")));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(pong_line(parse_time(&stdout, windows).as_deref()))
}
