//! `pong <difficulty>`

use std::io;

use anyhow::Result;
use log::info;

use order_engine::core::GameState;
use order_engine::types::Difficulty;

use crate::config::Config;
use crate::error::CliError;

pub const USAGE: &str = "usage: order pong <easy|medium|hard|impossible>";

pub fn parse_difficulty(arg: Option<&str>) -> Result<Difficulty, CliError> {
    let arg = arg.ok_or_else(|| CliError::Usage(USAGE.to_string()))?;
    Difficulty::from_str(arg)
        .ok_or_else(|| CliError::Usage(format!("unknown difficulty {arg:?}\n{USAGE}")))
}

pub fn run(difficulty: Option<&str>, config: &Config) -> Result<()> {
    let difficulty = parse_difficulty(difficulty)?;
    if !order_engine::is_interactive() {
        return Err(CliError::Environment(
            "pong needs an interactive terminal (stdin and stdout must be a TTY)".to_string(),
        )
        .into());
    }

    let seed = config.pong_seed.unwrap_or_else(rand::random);
    info!("pong: {} (seed {seed})", difficulty.as_str());
    let report = order_engine::play(GameState::new(difficulty, seed))?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    order_engine::finish(&report, &mut input, &mut out)?;
    Ok(())
}
