//! Cell values as they appear in embedded report data.

use serde::{Deserialize, Serialize};

/// A raw table cell: either a number or a piece of text.
///
/// Report data mixes both freely within a row (a label followed by counts,
/// percentages and durations). Formatters dispatch on the column index, not
/// on the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// A numeric statistic
    Number(f64),
    /// A label, error message or pre-formatted value
    Text(String),
}

impl CellValue {
    /// Create a numeric cell
    pub fn number(value: f64) -> Self {
        CellValue::Number(value)
    }

    /// Create a text cell
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

/// Convert a number the way the dashboard page does when it drops a raw
/// value into a cell: integral values lose their fractional part, infinities
/// are spelled out and very large or very small magnitudes use exponent form
/// (`1e+21`, `1e-7`).
fn number_to_string(value: f64) -> String {
    if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        // Also covers -0.0
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let exp = format!("{:e}", value);
        if exp.contains("e-") {
            exp
        } else {
            exp.replacen('e', "e+", 1)
        }
    } else {
        value.to_string()
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CellValue::Number(v) => number_to_string(*v),
            CellValue::Text(s) => s.clone(),
        };

        // Respect width and alignment from the formatter
        if let Some(width) = f.width() {
            if f.align() == Some(std::fmt::Alignment::Left) {
                write!(f, "{:<width$}", s, width = width)
            } else {
                write!(f, "{:>width$}", s, width = width)
            }
        } else {
            write!(f, "{}", s)
        }
    }
}
