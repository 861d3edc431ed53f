//! Output: populate tables and present them.
//!
//! This module handles the final stage of the pipeline - turning a dataset
//! into something a page can show. It provides:
//!
//! - **Table**: the populated table model (header, summary body, regular body)
//! - **render_table**: the population engine
//! - **TableSorter**: sortable-widget activations for a page
//! - **PieChart**: the pass/fail chart configuration
//! - **html**: markup for tables and whole pages

pub mod chart;
pub mod html;
pub mod render;
pub mod sorter;
pub mod table;

pub use chart::{PieChart, PieSlice};
pub use render::render_table;
pub use sorter::{SortActivation, SortWidget, TableSorter};
pub use table::{
    BodyKind, BodySection, HeaderCell, HeaderRow, HeaderSection, Table, TableRow, TableTarget,
};
