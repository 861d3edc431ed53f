//! Cell formatters and header decorators for the standard report tables.
//!
//! Formatters pick their rule by column index. Text cells always pass
//! through unchanged.

use crate::data::CellValue;
use crate::output::HeaderSection;

/// Format a number with a fixed number of decimals.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

fn unit(count: u64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Render a millisecond duration as days, hours, minutes, seconds and ms,
/// omitting zero components (`1500` -> `1 sec 500 ms`).
pub fn format_duration(millis: f64) -> String {
    if !millis.is_finite() || millis < 0.0 {
        return CellValue::number(millis).to_string();
    }

    let whole = millis.trunc() as u64;
    let fraction = millis - millis.trunc();

    let days = whole / 86_400_000;
    let hours = whole % 86_400_000 / 3_600_000;
    let minutes = whole % 3_600_000 / 60_000;
    let seconds = whole % 60_000 / 1_000;
    let rest = (whole % 1_000) as f64 + fraction;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(unit(days, "day", "days"));
    }
    if hours > 0 {
        parts.push(unit(hours, "hour", "hours"));
    }
    if minutes > 0 {
        parts.push(format!("{} min", minutes));
    }
    if seconds > 0 {
        parts.push(format!("{} sec", seconds));
    }
    if rest > 0.0 || parts.is_empty() {
        parts.push(format!("{} ms", CellValue::number(rest)));
    }
    parts.join(" ")
}

fn fixed(value: &CellValue, decimals: usize) -> String {
    match value {
        CellValue::Number(v) => to_fixed(*v, decimals),
        CellValue::Text(s) => s.clone(),
    }
}

fn percent(value: &CellValue) -> String {
    match value {
        CellValue::Number(v) => format!("{}%", to_fixed(*v, 2)),
        CellValue::Text(s) => s.clone(),
    }
}

/// Apdex table: score with three decimals, thresholds as durations.
pub fn apdex_cell(column: usize, value: &CellValue) -> String {
    match (column, value) {
        (0, _) => fixed(value, 3),
        (1 | 2, CellValue::Number(v)) => format_duration(*v),
        _ => value.to_string(),
    }
}

/// Statistics table: error rate as a percentage, means, percentiles,
/// throughput and network rates with two decimals. Counts, min and max
/// stay raw.
pub fn statistics_cell(column: usize, value: &CellValue) -> String {
    match column {
        3 => percent(value),
        4 | 7..=13 => fixed(value, 2),
        _ => value.to_string(),
    }
}

/// Errors table: both shares as percentages.
pub fn errors_cell(column: usize, value: &CellValue) -> String {
    match column {
        2 | 3 => percent(value),
        _ => value.to_string(),
    }
}

/// Grouping row above the statistics column titles.
pub fn statistics_header(header: &mut HeaderSection) {
    header
        .append_row()
        .mark_non_sortable()
        .append_group("Requests", 1)
        .append_group("Executions", 3)
        .append_group("Response Times (ms)", 7)
        .append_group("Throughput", 1)
        .append_group("Network (KB/sec)", 2);
}
