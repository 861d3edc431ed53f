//! Filter flags and per-table rendering options.

use serde::{Deserialize, Serialize};

use crate::data::CellValue;
use crate::output::HeaderSection;

/// Formats one raw cell for display, given its column index.
pub type CellFormatter = fn(usize, &CellValue) -> String;

/// Writes extra rows into a table header before the column titles.
pub type HeaderDecorator = fn(&mut HeaderSection);

/// Page-wide filter flags shared by every table render.
///
/// Read-only during rendering; built once from user configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Only show controller rows in tables that distinguish them
    pub show_controllers_only: bool,
    /// Case-insensitive regex on the series column (empty = disabled)
    pub series_filter: String,
    /// Apply the series filter only to tables that distinguish controllers
    pub filters_only_sample_series: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            show_controllers_only: false,
            series_filter: String::new(),
            filters_only_sample_series: true,
        }
    }
}

impl FilterState {
    /// Create the default filter state (no filtering)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: show controller rows only
    pub fn controllers_only(mut self, enabled: bool) -> Self {
        self.show_controllers_only = enabled;
        self
    }

    /// Builder: set the series regex
    pub fn series_filter(mut self, pattern: impl Into<String>) -> Self {
        self.series_filter = pattern.into();
        self
    }

    /// Builder: restrict the series filter to sample tables
    pub fn filters_only_sample_series(mut self, enabled: bool) -> Self {
        self.filters_only_sample_series = enabled;
        self
    }

    /// Whether any row filtering is configured
    pub fn is_active(&self) -> bool {
        self.show_controllers_only || !self.series_filter.is_empty()
    }
}

/// Sort direction, encoded as the sortable widget expects (0 / 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending (A-Z, smallest first)
    #[default]
    Ascending,
    /// Descending (Z-A, largest first)
    Descending,
}

impl SortDirection {
    /// Numeric code used in the widget's sort list
    pub fn code(self) -> u8 {
        match self {
            SortDirection::Ascending => 0,
            SortDirection::Descending => 1,
        }
    }
}

impl TryFrom<u8> for SortDirection {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(SortDirection::Ascending),
            1 => Ok(SortDirection::Descending),
            _ => Err(format!("unknown sort direction code: {}", code)),
        }
    }
}

/// One entry of a table's initial sort order.
///
/// Serializes as the `[column, direction]` pair the widget's sort list uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "(usize, u8)", try_from = "(usize, u8)")]
pub struct SortKey {
    /// Column index
    pub column: usize,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortKey {
    /// Sort by a column, ascending
    pub fn ascending(column: usize) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    /// Sort by a column, descending
    pub fn descending(column: usize) -> Self {
        Self {
            column,
            direction: SortDirection::Descending,
        }
    }
}

impl From<SortKey> for (usize, u8) {
    fn from(key: SortKey) -> Self {
        (key.column, key.direction.code())
    }
}

impl TryFrom<(usize, u8)> for SortKey {
    type Error = String;

    fn try_from((column, code): (usize, u8)) -> Result<Self, Self::Error> {
        Ok(Self {
            column,
            direction: SortDirection::try_from(code)?,
        })
    }
}

/// Per-table rendering options.
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    /// Cell formatter; raw values are shown when absent
    pub formatter: Option<CellFormatter>,
    /// Initial sort order handed to the sortable widget
    pub default_sort: Vec<SortKey>,
    /// Column holding the series name, matched by the series filter
    pub series_column: usize,
    /// Optional extra header rows written before the column titles
    pub header: Option<HeaderDecorator>,
}

impl TableOptions {
    /// Create options with no formatter, no default sort and series column 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the cell formatter
    pub fn formatter(mut self, formatter: CellFormatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Builder: append a key to the default sort order
    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.default_sort.push(key);
        self
    }

    /// Builder: set the series column
    pub fn series_column(mut self, column: usize) -> Self {
        self.series_column = column;
        self
    }

    /// Builder: set the header decorator
    pub fn header(mut self, decorator: HeaderDecorator) -> Self {
        self.header = Some(decorator);
        self
    }

    /// Display value for a cell: the formatter's output, or the raw value
    pub fn format_cell(&self, column: usize, value: &CellValue) -> String {
        match self.formatter {
            Some(format) => format(column, value),
            None => value.to_string(),
        }
    }
}
