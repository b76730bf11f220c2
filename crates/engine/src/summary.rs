//! End-of-match summary and the clear-terminal prompt.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::session::MatchReport;
use crate::term::clear_screen;

pub const CLEAR_PROMPT: &str = "Clear the terminal? (y/N) ";

/// One-line result, e.g. `You win! Final score: You 5 - 2 Bot`.
pub fn summary_line(report: &MatchReport) -> String {
    format!(
        "{} Final score: You {} - {} Bot",
        report.outcome.headline(),
        report.player_score,
        report.bot_score
    )
}

/// `y` or `yes` in any case; everything else is a no.
pub fn wants_clear(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Ask whether to clear the terminal and do it on a yes.
///
/// Blocks until a line (or EOF) is read. Returns whether the screen was
/// cleared.
pub fn prompt_clear<R, W>(input: &mut R, out: &mut W) -> Result<bool>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    out.write_all(CLEAR_PROMPT.as_bytes())?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    let yes = wants_clear(&answer);
    if yes {
        clear_screen(out)?;
    }
    Ok(yes)
}

/// Print the summary, then run the clear prompt.
pub fn finish<R, W>(report: &MatchReport, input: &mut R, out: &mut W) -> Result<bool>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "{}", summary_line(report))?;
    prompt_clear(input, out)
}
