//! `calendar [month] [year]`

use chrono::{Datelike, NaiveDate};

use crate::error::CliError;

pub const WEEKDAYS: &str = "Su Mo Tu We Th Fr Sa";
const WIDTH: usize = 20;

fn usage(detail: &str) -> CliError {
    CliError::Usage(format!("usage: order calendar [month 1-12] [year] ({detail})"))
}

/// Lines of a Sunday-first month grid.
pub fn render_month(year: i32, month: u32) -> Result<Vec<String>, CliError> {
    if !(1..=12).contains(&month) {
        return Err(usage(&format!("month {month} out of range")));
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| usage(&format!("year {year} out of range")))?;
    let days = days_in_month(first).ok_or_else(|| usage(&format!("year {year} out of range")))?;

    let title = format!("{} {}", first.format("%B"), year);
    let mut lines = vec![
        format!("{title:^WIDTH$}").trim_end().to_string(),
        WEEKDAYS.to_string(),
    ];

    let offset = first.weekday().num_days_from_sunday() as usize;
    let mut cells: Vec<String> = vec!["  ".to_string(); offset];
    cells.extend((1..=days).map(|d| format!("{d:>2}")));

    lines.extend(cells.chunks(7).map(|week| week.join(" ")));
    Ok(lines)
}

fn days_in_month(first: NaiveDate) -> Option<u32> {
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)?
    };
    Some((next - first).num_days() as u32)
}
