//! `random [min] [max]`

use rand::Rng;

use crate::error::CliError;

pub const DEFAULT_MIN: i64 = 1;
pub const DEFAULT_MAX: i64 = 100;

/// Resolve the optional bounds into an inclusive range.
pub fn bounds(min: Option<i64>, max: Option<i64>) -> Result<(i64, i64), CliError> {
    let min = min.unwrap_or(DEFAULT_MIN);
    let max = max.unwrap_or(DEFAULT_MAX);
    if min > max {
        return Err(CliError::Usage(format!(
            "usage: order random [min] [max] (min {min} is greater than max {max})"
        )));
    }
    Ok((min, max))
}

pub fn pick<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.gen_range(min..=max)
}
