//! Sortable-table widget activation.
//!
//! Interactive sorting happens client-side in the table widget. The renderer
//! only registers each table together with its initial sort order;
//! `TableSorter` records those registrations and turns them into the
//! activation script for the page.

use serde::{Deserialize, Serialize};

use crate::query::SortKey;

/// Info-block class the widget leaves untouched when sorting.
pub const NO_SORT_CLASS: &str = "tablesorter-no-sort";

/// Capability of the external sortable-table widget.
pub trait SortWidget {
    /// Hand a populated table to the widget with its initial sort order.
    fn enable_sort(&mut self, table_id: &str, initial: &[SortKey]);
}

/// One registered table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortActivation {
    pub table_id: String,
    pub sort_list: Vec<SortKey>,
}

/// Records widget activations for a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSorter {
    activations: Vec<SortActivation>,
}

impl TableSorter {
    /// Create a sorter with no registered tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered tables, in registration order
    pub fn activations(&self) -> &[SortActivation] {
        &self.activations
    }

    /// The activation script: widget defaults followed by one call per table.
    pub fn script(&self) -> String {
        let mut script = String::new();
        script.push_str("$.extend($.tablesorter.defaults, {\n");
        script.push_str("    theme: 'blue',\n");
        script.push_str(&format!("    cssInfoBlock: \"{}\",\n", NO_SORT_CLASS));
        script.push_str("    widthFixed: true,\n");
        script.push_str("    widgets: ['zebra']\n");
        script.push_str("});\n");

        for activation in &self.activations {
            script.push_str(&format!(
                "$({}).tablesorter({{sortList: {}}});\n",
                js_string(&format!("#{}", activation.table_id)),
                sort_list_literal(&activation.sort_list)
            ));
        }

        script
    }
}

impl SortWidget for TableSorter {
    fn enable_sort(&mut self, table_id: &str, initial: &[SortKey]) {
        self.activations.push(SortActivation {
            table_id: table_id.to_string(),
            sort_list: initial.to_vec(),
        });
    }
}

/// Format a sort order as the widget's nested list, e.g. `[[0, 0], [1, 1]]`.
pub fn sort_list_literal(keys: &[SortKey]) -> String {
    let pairs: Vec<String> = keys
        .iter()
        .map(|k| format!("[{}, {}]", k.column, k.direction.code()))
        .collect();
    format!("[{}]", pairs.join(", "))
}

/// Quote a value as a JavaScript string literal.
fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
