//! Query options: what to show and how to sort it.
//!
//! This module holds the immutable configuration a render call reads:
//!
//! - **FilterState**: page-wide filter flags (controllers only, series regex)
//! - **TableOptions**: per-table formatter, default sort and series column
//! - **RowFilter**: the compiled inclusion predicate for one dataset
//!
//! ## Example
//!
//! ```rust,ignore
//! use perfdashlib::query::{FilterState, SortKey, TableOptions};
//!
//! let filters = FilterState::new().series_filter("^login");
//! let options = TableOptions::new().sort_by(SortKey::descending(1));
//! ```

pub mod filter;
pub mod options;

pub use filter::RowFilter;
pub use options::{
    CellFormatter, FilterState, HeaderDecorator, SortDirection, SortKey, TableOptions,
};
