//! Row inclusion predicate.
//!
//! A row is shown iff it passes both the series filter and the controller
//! filter:
//!
//! - series: no regex configured, or the regex only applies to sample tables
//!   and this dataset does not distinguish controllers, or the regex matches
//!   the row's series cell (case-insensitively)
//! - controller: controllers-only is off, or the dataset does not distinguish
//!   controllers, or the row is a controller

use fancy_regex::Regex;

use super::options::FilterState;
use crate::data::{DatasetDescriptor, RowRecord};
use crate::error::DashboardError;
use crate::Result;

/// The inclusion predicate compiled for one dataset.
#[derive(Debug, Clone)]
pub struct RowFilter {
    series: Option<Regex>,
    bypass_series: bool,
    controllers_only: bool,
}

impl RowFilter {
    /// Compile the filter flags against a dataset.
    ///
    /// Fails only when a non-empty series filter is not a valid regex.
    pub fn compile(filters: &FilterState, dataset: &DatasetDescriptor) -> Result<Self> {
        let series = if filters.series_filter.is_empty() {
            None
        } else {
            let pattern = format!("(?i){}", filters.series_filter);
            let regex =
                Regex::new(&pattern).map_err(|e| DashboardError::InvalidSeriesFilter {
                    pattern: filters.series_filter.clone(),
                    message: e.to_string(),
                })?;
            Some(regex)
        };

        let discriminates = dataset.supports_controllers_discrimination;

        Ok(RowFilter {
            series,
            bypass_series: filters.filters_only_sample_series && !discriminates,
            controllers_only: filters.show_controllers_only && discriminates,
        })
    }

    /// Check whether a record should be rendered.
    ///
    /// A series column past the end of the record is matched as empty text.
    pub fn includes(&self, record: &RowRecord, series_column: usize) -> bool {
        self.passes_series(record, series_column) && self.passes_controller(record)
    }

    fn passes_series(&self, record: &RowRecord, series_column: usize) -> bool {
        match &self.series {
            None => true,
            Some(_) if self.bypass_series => true,
            Some(regex) => {
                let name = record
                    .data
                    .get(series_column)
                    .map(|cell| cell.to_string())
                    .unwrap_or_default();
                regex.is_match(&name).unwrap_or_else(|e| {
                    tracing::warn!(series = %name, error = %e, "series filter failed to run");
                    false
                })
            }
        }
    }

    fn passes_controller(&self, record: &RowRecord) -> bool {
        !self.controllers_only || record.is_controller
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CellValue;

    fn dataset(discriminates: bool) -> DatasetDescriptor {
        DatasetDescriptor::new(["Label", "#Samples"]).with_controllers_discrimination(discriminates)
    }

    fn leaf(label: &str) -> RowRecord {
        RowRecord::new(vec![CellValue::text(label), CellValue::number(1.0)])
    }

    fn controller(label: &str) -> RowRecord {
        RowRecord::controller(vec![CellValue::text(label), CellValue::number(1.0)])
    }

    #[test]
    fn test_no_filters_include_everything() {
        let filter = RowFilter::compile(&FilterState::new(), &dataset(true)).unwrap();
        assert!(filter.includes(&leaf("A"), 0));
        assert!(filter.includes(&controller("B"), 0));
    }

    #[test]
    fn test_series_filter_is_case_insensitive() {
        let filters = FilterState::new().series_filter("^login");
        let filter = RowFilter::compile(&filters, &dataset(true)).unwrap();
        assert!(filter.includes(&leaf("Login page"), 0));
        assert!(filter.includes(&leaf("LOGIN"), 0));
        assert!(!filter.includes(&leaf("logout"), 0));
    }

    #[test]
    fn test_series_filter_supports_lookahead() {
        let filters = FilterState::new().series_filter("^(?!login)");
        let filter = RowFilter::compile(&filters, &dataset(true)).unwrap();
        assert!(!filter.includes(&leaf("Login page"), 0));
        assert!(filter.includes(&leaf("Search results"), 0));
    }

    #[test]
    fn test_series_filter_supports_backreferences() {
        let filters = FilterState::new().series_filter("^(\\w)\\1");
        let filter = RowFilter::compile(&filters, &dataset(true)).unwrap();
        assert!(filter.includes(&leaf("AAA"), 0));
        assert!(!filter.includes(&leaf("ABA"), 0));
    }

    #[test]
    fn test_series_filter_matches_numbers_as_text() {
        let filters = FilterState::new().series_filter("^1\\d$");
        let filter = RowFilter::compile(&filters, &dataset(true)).unwrap();
        assert!(!filter.includes(&leaf("A"), 1));
        let record = RowRecord::new(vec![CellValue::text("A"), CellValue::number(12.0)]);
        assert!(filter.includes(&record, 1));
    }

    #[test]
    fn test_series_filter_bypassed_for_sample_only_tables() {
        let filters = FilterState::new().series_filter("^A$");
        let filter = RowFilter::compile(&filters, &dataset(false)).unwrap();
        assert!(filter.includes(&leaf("B"), 0));
    }

    #[test]
    fn test_series_filter_applies_everywhere_when_not_sample_only() {
        let filters = FilterState::new()
            .series_filter("^A$")
            .filters_only_sample_series(false);
        let filter = RowFilter::compile(&filters, &dataset(false)).unwrap();
        assert!(filter.includes(&leaf("A"), 0));
        assert!(!filter.includes(&leaf("B"), 0));
    }

    #[test]
    fn test_series_column_out_of_range_matches_empty() {
        let filters = FilterState::new().series_filter("^$");
        let filter = RowFilter::compile(&filters, &dataset(true)).unwrap();
        assert!(filter.includes(&leaf("A"), 9));

        let filters = FilterState::new().series_filter("A");
        let filter = RowFilter::compile(&filters, &dataset(true)).unwrap();
        assert!(!filter.includes(&leaf("A"), 9));
    }

    #[test]
    fn test_controllers_only() {
        let filters = FilterState::new().controllers_only(true);
        let filter = RowFilter::compile(&filters, &dataset(true)).unwrap();
        assert!(!filter.includes(&leaf("A"), 0));
        assert!(filter.includes(&controller("B"), 0));
    }

    #[test]
    fn test_controllers_only_ignored_without_discrimination() {
        let filters = FilterState::new().controllers_only(true);
        let filter = RowFilter::compile(&filters, &dataset(false)).unwrap();
        assert!(filter.includes(&leaf("A"), 0));
    }

    #[test]
    fn test_both_filters_must_pass() {
        let filters = FilterState::new().controllers_only(true).series_filter("^B");
        let filter = RowFilter::compile(&filters, &dataset(true)).unwrap();
        assert!(filter.includes(&controller("B1"), 0));
        assert!(!filter.includes(&controller("A1"), 0));
        assert!(!filter.includes(&leaf("B2"), 0));
    }

    #[test]
    fn test_invalid_regex() {
        let filters = FilterState::new().series_filter("(unclosed");
        let result = RowFilter::compile(&filters, &dataset(true));

        if let Err(DashboardError::InvalidSeriesFilter { pattern, .. }) = result {
            assert_eq!(pattern, "(unclosed");
        } else {
            panic!("Expected InvalidSeriesFilter error");
        }
    }

    #[test]
    fn test_invalid_regex_fails_even_when_bypassed() {
        let filters = FilterState::new().series_filter("[");
        assert!(RowFilter::compile(&filters, &dataset(false)).is_err());
    }
}
