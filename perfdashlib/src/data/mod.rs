//! Input data: the pre-computed statistics a dashboard embeds.
//!
//! Everything in this module arrives finished from an upstream aggregation
//! stage and is never mutated here:
//!
//! - **CellValue**: a single table cell (number or text)
//! - **DatasetDescriptor**: titles, optional overall row, item rows
//! - **ReportData**: the full bundle of tables and the pass/fail summary

pub mod cell;
pub mod dataset;
pub mod report;

pub use cell::CellValue;
pub use dataset::{DatasetDescriptor, OverallRow, RowRecord};
pub use report::{ReportData, RequestsSummary};
