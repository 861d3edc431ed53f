//! The per-report data bundle a dashboard page embeds.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::dataset::DatasetDescriptor;
use crate::error::DashboardError;
use crate::Result;

/// Share of passed and failed samples, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RequestsSummary {
    #[serde(rename = "OkPercent")]
    pub ok_percent: f64,
    #[serde(rename = "KoPercent")]
    pub ko_percent: f64,
}

/// All pre-computed data for one dashboard.
///
/// Every section is optional; a report renders whatever it carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests_summary: Option<RequestsSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apdex_table: Option<DatasetDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics_table: Option<DatasetDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors_table: Option<DatasetDescriptor>,
    #[serde(
        rename = "top5ErrorsBySamplerTable",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub top5_errors_by_sampler_table: Option<DatasetDescriptor>,
}

impl ReportData {
    /// Parse report data from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a report data file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| DashboardError::ReportRead {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = contents.len(), "loaded report data");
        Self::from_json(&contents)
    }
}
