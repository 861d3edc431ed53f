//! Tabular dataset descriptors.

use serde::{Deserialize, Serialize};

use super::cell::CellValue;

/// One row of a dataset.
///
/// `is_controller` marks an aggregate (transaction controller) entry rather
/// than a leaf request label. An empty `data` is a placeholder that never
/// renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowRecord {
    pub data: Vec<CellValue>,
    #[serde(rename = "isController", default)]
    pub is_controller: bool,
}

impl RowRecord {
    /// Create a leaf row
    pub fn new(data: Vec<CellValue>) -> Self {
        Self {
            data,
            is_controller: false,
        }
    }

    /// Create a controller row
    pub fn controller(data: Vec<CellValue>) -> Self {
        Self {
            data,
            is_controller: true,
        }
    }

    /// Placeholder rows carry no cells and are skipped when rendering
    pub fn is_placeholder(&self) -> bool {
        self.data.is_empty()
    }
}

/// The synthetic summary row shown above the sortable body.
pub type OverallRow = RowRecord;

/// A table as embedded in the report: column titles, an optional overall
/// row and the item rows in upstream order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetDescriptor {
    pub titles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall: Option<OverallRow>,
    #[serde(default)]
    pub items: Vec<RowRecord>,
    #[serde(rename = "supportsControllersDiscrimination", default)]
    pub supports_controllers_discrimination: bool,
}

impl DatasetDescriptor {
    /// Create a dataset with the given column titles and no rows
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Builder: set the overall row
    pub fn with_overall(mut self, overall: OverallRow) -> Self {
        self.overall = Some(overall);
        self
    }

    /// Builder: append an item row
    pub fn with_item(mut self, item: RowRecord) -> Self {
        self.items.push(item);
        self
    }

    /// Builder: mark the dataset as distinguishing controllers from samples
    pub fn with_controllers_discrimination(mut self, supported: bool) -> Self {
        self.supports_controllers_discrimination = supported;
        self
    }

    /// Indices of non-placeholder items whose cell count differs from the
    /// number of titles. Such rows still render, just short or long.
    pub fn shape_mismatches(&self) -> Vec<usize> {
        let width = self.titles.len();
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.is_placeholder() && item.data.len() != width)
            .map(|(index, _)| index)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_embedded_shape() {
        let json = r##"{
            "supportsControllersDiscrimination": true,
            "overall": {"data": ["Total", 100], "isController": false},
            "titles": ["Label", "#Samples"],
            "items": [
                {"data": ["A", 10], "isController": false},
                {"data": ["B", 20], "isController": true}
            ]
        }"##;
        let dataset: DatasetDescriptor = serde_json::from_str(json).unwrap();

        assert_eq!(dataset.titles, vec!["Label", "#Samples"]);
        assert!(dataset.supports_controllers_discrimination);
        assert_eq!(
            dataset.overall.as_ref().unwrap().data[0],
            CellValue::text("Total")
        );
        assert_eq!(dataset.items.len(), 2);
        assert!(!dataset.items[0].is_controller);
        assert!(dataset.items[1].is_controller);
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{"titles": ["Type of error"], "items": [{"data": []}]}"#;
        let dataset: DatasetDescriptor = serde_json::from_str(json).unwrap();

        assert!(dataset.overall.is_none());
        assert!(!dataset.supports_controllers_discrimination);
        assert!(dataset.items[0].is_placeholder());
        assert!(!dataset.items[0].is_controller);
    }

    #[test]
    fn test_shape_mismatches_ignores_placeholders() {
        let dataset = DatasetDescriptor::new(["Label", "#Samples", "FAIL"])
            .with_item(RowRecord::new(vec![
                "A".into(),
                CellValue::number(1.0),
                CellValue::number(0.0),
            ]))
            .with_item(RowRecord::new(vec![]))
            .with_item(RowRecord::new(vec!["B".into(), CellValue::number(2.0)]));

        assert_eq!(dataset.shape_mismatches(), vec![2]);
    }

    #[test]
    fn test_builder() {
        let dataset = DatasetDescriptor::new(["Label"])
            .with_overall(RowRecord::new(vec!["Total".into()]))
            .with_item(RowRecord::controller(vec!["Tx".into()]))
            .with_controllers_discrimination(true);

        assert!(dataset.overall.is_some());
        assert!(dataset.items[0].is_controller);
        assert!(dataset.supports_controllers_discrimination);
    }
}
