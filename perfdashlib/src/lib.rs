//! # perfdashlib
//!
//! Table-population engine for static performance-test dashboards.
//!
//! ## Overview
//!
//! A dashboard page embeds pre-computed statistics (aggregate and per-label
//! latency, throughput and error figures) and projects them into sortable
//! tables plus a pass/fail pie chart. This library performs that projection
//! without touching a browser:
//!
//! - **data**: the embedded report shape (`DatasetDescriptor`, `RowRecord`, `CellValue`)
//! - **query**: filter flags and per-table options (`FilterState`, `TableOptions`)
//! - **output**: the table model, the renderer, the sort activations and HTML
//! - **report**: the standard dashboard tables and their cell formatters
//!
//! Rendering is a pure function of (dataset, filters, formatter). The only
//! failure is a series filter that does not compile as a regular expression.
//!
//! ## Example
//!
//! ```rust
//! use perfdashlib::{render_table, DatasetDescriptor, FilterState, Table, TableOptions, TableSorter};
//!
//! let dataset: DatasetDescriptor = serde_json::from_str(r##"{
//!     "titles": ["Label", "#Samples"],
//!     "overall": {"data": ["Total", 100], "isController": false},
//!     "items": [
//!         {"data": ["A", 10], "isController": false},
//!         {"data": ["B", 20], "isController": true}
//!     ],
//!     "supportsControllersDiscrimination": true
//! }"##).unwrap();
//!
//! let mut table = Table::new("statisticsTable");
//! let mut sorter = TableSorter::new();
//! let filters = FilterState::new().controllers_only(true);
//!
//! render_table(&mut table, &dataset, &TableOptions::new(), &filters, &mut sorter).unwrap();
//!
//! let rows = table.body_rows();
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[0].cells, vec!["Total", "100"]);
//! assert_eq!(rows[1].cells, vec!["B", "20"]);
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod report;

pub use data::{CellValue, DatasetDescriptor, OverallRow, ReportData, RequestsSummary, RowRecord};
pub use error::DashboardError;
pub use output::{
    render_table, BodyKind, BodySection, HeaderCell, HeaderRow, HeaderSection, PieChart,
    PieSlice, SortWidget, Table, TableRow, TableSorter, TableTarget,
};
pub use query::{
    CellFormatter, FilterState, HeaderDecorator, RowFilter, SortDirection, SortKey, TableOptions,
};
pub use report::{render_dashboard, render_report_table, Dashboard, RenderedTable, ReportTable};

/// Result type for perfdashlib operations
pub type Result<T> = std::result::Result<T, DashboardError>;
