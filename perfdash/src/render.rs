//! Plain-text layout of rendered tables for terminal output

use perfdashlib::{HeaderRow, ReportTable, Table, TableRow};
use serde::Serialize;

/// Widest the label column may get before names are truncated
const MAX_LABEL_WIDTH: usize = 48;

/// Data context for the table template
#[derive(Debug, Serialize)]
pub struct TableContext {
    /// Section caption (e.g., "Statistics")
    caption: String,
    /// Pre-padded header lines, grouping rows first
    header_rows: Vec<String>,
    /// Separator line (dashes)
    separator: String,
    /// Pre-padded overall row, if any
    summary: Option<String>,
    /// Pre-padded item rows
    rows: Vec<String>,
}

/// Truncate a name to fit within max_len, adding ".." prefix if needed
fn truncate_name(name: &str, max_len: usize) -> String {
    let len = name.chars().count();
    if len > max_len {
        let tail: String = name.chars().skip(len - max_len + 2).collect();
        format!("..{}", tail)
    } else {
        name.to_string()
    }
}

fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Compute one width per column from single-column header cells and every
/// body cell
fn column_widths(table: &Table) -> Vec<usize> {
    let mut widths: Vec<usize> = Vec::new();
    let mut widen = |column: usize, width: usize| {
        if widths.len() <= column {
            widths.resize(column + 1, 0);
        }
        widths[column] = widths[column].max(width);
    };

    for row in table.header_rows() {
        let mut column = 0;
        for cell in &row.cells {
            if cell.colspan == 1 {
                widen(column, text_width(&cell.text));
            }
            column += cell.colspan.max(1);
        }
    }
    for row in table.body_rows() {
        for (column, cell) in row.cells.iter().enumerate() {
            widen(column, text_width(cell));
        }
    }

    if let Some(first) = widths.first_mut() {
        *first = (*first).min(MAX_LABEL_WIDTH);
    }
    widths
}

/// Pad one cell: the label column is left-aligned, statistics right-aligned
fn pad(column: usize, text: &str, width: usize) -> String {
    if column == 0 {
        format!("{:<width$}", truncate_name(text, width), width = width)
    } else {
        format!("{:>width$}", text, width = width)
    }
}

fn format_row(row: &TableRow, widths: &[usize]) -> String {
    row.cells
        .iter()
        .enumerate()
        .map(|(column, cell)| pad(column, cell, widths.get(column).copied().unwrap_or(0)))
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end()
        .to_string()
}

/// Lay out a header row; merged cells take the width of the columns they span
fn format_header_row(row: &HeaderRow, widths: &[usize]) -> String {
    let mut column = 0;
    let mut parts = Vec::new();
    for cell in &row.cells {
        let span = cell.colspan.max(1);
        let spanned: usize = (column..column + span)
            .map(|c| widths.get(c).copied().unwrap_or(0))
            .sum::<usize>()
            + span.saturating_sub(1);
        if span == 1 {
            parts.push(format!("{:<width$}", cell.text, width = spanned));
        } else {
            parts.push(format!("{:^width$}", cell.text, width = spanned));
        }
        column += span;
    }
    parts.join(" ").trim_end().to_string()
}

/// Build the template context for a rendered table
pub fn table_context(kind: ReportTable, table: &Table) -> TableContext {
    let widths = column_widths(table);
    let total_width = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);

    TableContext {
        caption: kind.caption().to_string(),
        header_rows: table
            .header_rows()
            .iter()
            .map(|row| format_header_row(row, &widths))
            .collect(),
        separator: "-".repeat(total_width),
        summary: table.summary_row().map(|row| format_row(row, &widths)),
        rows: table
            .regular_rows()
            .into_iter()
            .map(|row| format_row(row, &widths))
            .collect(),
    }
}
