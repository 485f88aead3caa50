//! Console output formatting with colored display

use owo_colors::OwoColorize;

use crate::config::display::{FAIR_AVERAGE, GOOD_AVERAGE};
use crate::roster::RosterSummary;
use crate::student::Record;

use super::ExportRow;

/// Format one record as a console line.
///
/// With `color` set, the average is colored by band.
pub fn format_record_console(row: &ExportRow<'_>, color: bool) -> String {
    let average = format!("{:.2}", row.average);
    let average = if color {
        colored_average(row.average, &average)
    } else {
        average
    };

    format!(
        "{:>3}. {:<24} Math: {:>2}  Physics: {:>2}  Chemistry: {:>2}  Average: {}",
        row.position, row.name, row.math, row.physics, row.chemistry, average
    )
}

pub fn export_console<'a, I>(records: I, color: bool) -> String
where
    I: IntoIterator<Item = &'a Record>,
{
    super::rows(records)
        .iter()
        .map(|row| format_record_console(row, color))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_summary_console(summary: &RosterSummary) -> String {
    let fmt = |value: Option<f64>| value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"));
    [
        format!("Students : {}", summary.count),
        format!("Mean     : {}", fmt(summary.mean_average)),
        format!("Highest  : {}", fmt(summary.highest_average)),
        format!("Lowest   : {}", fmt(summary.lowest_average)),
    ]
    .join("\n")
}

fn colored_average(average: f64, text: &str) -> String {
    if average >= GOOD_AVERAGE {
        text.green().to_string()
    } else if average >= FAIR_AVERAGE {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}
