//! Pass/fail pie chart configuration.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::data::{CellValue, RequestsSummary};

/// Slice colour for failed samples.
pub const FAIL_COLOR: &str = "#FF6347";
/// Slice colour for passed samples.
pub const PASS_COLOR: &str = "#9ACD32";

/// One pie slice as the chart library expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub data: f64,
    pub color: String,
}

/// The requests-summary pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// Build the FAIL / PASS chart from the summary percentages.
    pub fn from_summary(summary: &RequestsSummary) -> Self {
        Self {
            slices: vec![
                PieSlice {
                    label: "FAIL".to_string(),
                    data: summary.ko_percent,
                    color: FAIL_COLOR.to_string(),
                },
                PieSlice {
                    label: "PASS".to_string(),
                    data: summary.ok_percent,
                    color: PASS_COLOR.to_string(),
                },
            ],
        }
    }

    /// Share of each slice in percent, in slice order.
    pub fn percentages(&self) -> Vec<f64> {
        let total: f64 = self.slices.iter().map(|s| s.data).sum();
        self.slices
            .iter()
            .map(|s| {
                if total > 0.0 {
                    s.data / total * 100.0
                } else {
                    0.0
                }
            })
            .collect()
    }

    /// Slice captions, e.g. `PASS 97.5%`, percentages rounded to two decimals.
    pub fn slice_labels(&self) -> Vec<String> {
        self.slices
            .iter()
            .zip(self.percentages())
            .map(|(slice, percent)| {
                format!("{} {}%", slice.label, CellValue::number(round_decimals(percent, 2)))
            })
            .collect()
    }

    /// Plot options: a full-radius pie with inner labels and a legend.
    pub fn options(&self) -> serde_json::Value {
        json!({
            "series": {
                "pie": {
                    "show": true,
                    "radius": 1,
                    "label": {
                        "show": true,
                        "radius": 0.75,
                        "background": { "opacity": 0.5, "color": "#000" }
                    }
                }
            },
            "legend": { "show": true }
        })
    }

    /// Script drawing the chart into the element with the given id.
    pub fn script(&self, element_id: &str) -> String {
        let slices = json!(self.slices);
        let mut options = self.options();
        // Placeholder swapped for a JS function after serialization
        options["series"]["pie"]["label"]["formatter"] = json!("__LABEL_FORMATTER__");
        let options = options.to_string().replace(
            "\"__LABEL_FORMATTER__\"",
            "function(label, series) { return '<div style=\"font-size:8pt;text-align:center;padding:2px;color:white;\">' + label + '<br/>' + (Math.round(series.percent * 100) / 100) + '%</div>'; }",
        );
        format!(
            "$.plot($({}), {}, {});\n",
            serde_json::Value::String(format!("#{}", element_id)),
            slices,
            options
        )
    }
}

/// Round half up to `decimals` places, shifting the exponent textually so
/// values like 1.005 round the way they read.
pub fn round_decimals(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let shifted: f64 = format!("{}e{}", value, decimals)
        .parse()
        .unwrap_or(value * 10f64.powi(decimals));
    let rounded = (shifted + 0.5).floor();
    format!("{}e{}", rounded, -decimals)
        .parse()
        .unwrap_or(rounded / 10f64.powi(decimals))
}
