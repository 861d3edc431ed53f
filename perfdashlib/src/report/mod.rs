//! The standard dashboard: its tables, their formatting and the chart.
//!
//! Each `ReportTable` fixes the element id, cell formatter, default sort
//! and series column of one dashboard table. `render_dashboard` renders
//! every table the report carries with one shared filter state and one
//! sortable-widget registry.

pub mod format;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::data::{DatasetDescriptor, ReportData};
use crate::output::{html, render_table, PieChart, Table, TableSorter};
use crate::query::{FilterState, SortKey, TableOptions};
use crate::Result;

/// The tables of a dashboard, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportTable {
    Apdex,
    Statistics,
    Errors,
    Top5Errors,
}

impl ReportTable {
    /// All tables, in page order
    pub const ALL: [ReportTable; 4] = [
        ReportTable::Apdex,
        ReportTable::Statistics,
        ReportTable::Errors,
        ReportTable::Top5Errors,
    ];

    /// Element id of the table
    pub fn id(self) -> &'static str {
        match self {
            ReportTable::Apdex => "apdexTable",
            ReportTable::Statistics => "statisticsTable",
            ReportTable::Errors => "errorsTable",
            ReportTable::Top5Errors => "top5ErrorsBySamplerTable",
        }
    }

    /// Section heading shown above the table
    pub fn caption(self) -> &'static str {
        match self {
            ReportTable::Apdex => "APDEX (Application Performance Index)",
            ReportTable::Statistics => "Statistics",
            ReportTable::Errors => "Errors",
            ReportTable::Top5Errors => "Top 5 Errors by sampler",
        }
    }

    /// Formatter, default sort, series column and header for this table
    pub fn options(self) -> TableOptions {
        match self {
            ReportTable::Apdex => TableOptions::new()
                .formatter(format::apdex_cell)
                .sort_by(SortKey::ascending(0))
                .series_column(3),
            ReportTable::Statistics => TableOptions::new()
                .formatter(format::statistics_cell)
                .sort_by(SortKey::ascending(0))
                .series_column(0)
                .header(format::statistics_header),
            ReportTable::Errors => TableOptions::new()
                .formatter(format::errors_cell)
                .sort_by(SortKey::descending(1))
                .series_column(0),
            ReportTable::Top5Errors => TableOptions::new()
                .sort_by(SortKey::ascending(0))
                .series_column(0),
        }
    }

    /// The dataset for this table, if the report carries one
    pub fn dataset(self, report: &ReportData) -> Option<&DatasetDescriptor> {
        match self {
            ReportTable::Apdex => report.apdex_table.as_ref(),
            ReportTable::Statistics => report.statistics_table.as_ref(),
            ReportTable::Errors => report.errors_table.as_ref(),
            ReportTable::Top5Errors => report.top5_errors_by_sampler_table.as_ref(),
        }
    }
}

impl FromStr for ReportTable {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "apdex" | "apdextable" => Ok(ReportTable::Apdex),
            "statistics" | "stats" | "statisticstable" => Ok(ReportTable::Statistics),
            "errors" | "errorstable" => Ok(ReportTable::Errors),
            "top5" | "top5-errors" | "top5errorsbysamplertable" => Ok(ReportTable::Top5Errors),
            _ => Err(format!("Unknown table: {}", s)),
        }
    }
}

/// A rendered dashboard table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedTable {
    pub kind: ReportTable,
    pub table: Table,
}

/// Every rendered table plus the page-level widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub tables: Vec<RenderedTable>,
    pub sorter: TableSorter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<PieChart>,
}

impl Dashboard {
    /// Look up a rendered table
    pub fn table(&self, kind: ReportTable) -> Option<&Table> {
        self.tables
            .iter()
            .find(|t| t.kind == kind)
            .map(|t| &t.table)
    }

    /// Standalone HTML page for this dashboard
    pub fn to_html(&self, title: &str) -> String {
        html::write_page(title, self)
    }
}

/// Render a single report table, or `None` when the report lacks it.
pub fn render_report_table(
    report: &ReportData,
    kind: ReportTable,
    filters: &FilterState,
    sorter: &mut TableSorter,
) -> Result<Option<Table>> {
    let Some(dataset) = kind.dataset(report) else {
        tracing::debug!(table = kind.id(), "report has no data for table");
        return Ok(None);
    };

    let mut table = Table::new(kind.id());
    render_table(&mut table, dataset, &kind.options(), filters, sorter)?;
    Ok(Some(table))
}

/// Render every table the report carries, plus the summary chart.
pub fn render_dashboard(report: &ReportData, filters: &FilterState) -> Result<Dashboard> {
    let mut sorter = TableSorter::new();
    let mut tables = Vec::new();

    for kind in ReportTable::ALL {
        if let Some(table) = render_report_table(report, kind, filters, &mut sorter)? {
            tables.push(RenderedTable { kind, table });
        }
    }

    let chart = report.requests_summary.as_ref().map(PieChart::from_summary);

    Ok(Dashboard {
        tables,
        sorter,
        chart,
    })
}
