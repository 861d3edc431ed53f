//! # perfdash
//!
//! A CLI that renders static performance-test dashboards from pre-computed
//! report data.
//!
//! ## Overview
//!
//! perfdash is built on top of perfdashlib. It reads a report data file (the
//! statistics, apdex and error tables plus the pass/fail summary), applies
//! the series and controller filters, and writes a self-contained dashboard
//! page with sortable tables and a requests-summary pie chart.
//!
//! ## Usage
//!
//! ```bash
//! # Write dashboard.html from report data
//! perfdash render report.json
//!
//! # Only show transaction controllers
//! perfdash render report.json --controllers-only -o controllers.html
//!
//! # Only show labels matching a regex, in every table
//! perfdash render report.json --series-filter '^login' --filter-all-series
//!
//! # Print one table in the terminal, or as JSON
//! perfdash table report.json --table statistics
//! perfdash table report.json --table errors --output json
//! ```
//!
//! Set `RUST_LOG=perfdashlib=debug` to see per-table rendering details.

mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use console::Style;
use outstanding::cli::{App, CommandContext, HandlerResult, Output, RunResult};
use outstanding::Theme;
use perfdashlib::{
    render_dashboard, render_report_table, FilterState, ReportData, ReportTable, TableSorter,
};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Include templates at compile time
const TABLE_TEMPLATE: &str = include_str!("../templates/table.jinja");
const RENDER_SUMMARY_TEMPLATE: &str = include_str!("../templates/render_summary.jinja");

/// Default page title
const DEFAULT_TITLE: &str = "Performance Test Dashboard";

/// One line per rendered table in the render summary
#[derive(Debug, Serialize)]
struct TableSummary {
    id: String,
    line: String,
}

/// Data context for the render summary template
#[derive(Debug, Serialize)]
struct RenderSummaryContext {
    output: String,
    tables: Vec<TableSummary>,
    chart: Option<String>,
    filters: Option<String>,
}

/// Filter flags shared by every subcommand
fn filter_args() -> [Arg; 3] {
    [
        Arg::new("controllers-only")
            .long("controllers-only")
            .action(ArgAction::SetTrue)
            .help("Only show transaction controller rows"),
        Arg::new("series-filter")
            .short('s')
            .long("series-filter")
            .value_name("REGEX")
            .help("Only show series whose label matches this case-insensitive regex"),
        Arg::new("filter-all-series")
            .long("filter-all-series")
            .action(ArgAction::SetTrue)
            .help("Apply the series filter to tables without controllers too"),
    ]
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("perfdash")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render static performance-test dashboards from report data")
        .subcommand(
            Command::new("render")
                .about("Write an HTML dashboard page")
                .arg(Arg::new("report").required(true).help("Report data file (JSON)"))
                .arg(
                    Arg::new("out")
                        .short('o')
                        .long("out")
                        .default_value("dashboard.html")
                        .help("Path of the HTML page to write"),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .default_value(DEFAULT_TITLE)
                        .help("Page title"),
                )
                .args(filter_args()),
        )
        .subcommand(
            Command::new("table")
                .about("Print a single dashboard table")
                .arg(Arg::new("report").required(true).help("Report data file (JSON)"))
                .arg(
                    Arg::new("table")
                        .short('t')
                        .long("table")
                        .default_value("statistics")
                        .value_parser(["apdex", "statistics", "errors", "top5-errors"])
                        .help("Table to print"),
                )
                .args(filter_args()),
        )
}

/// Build filter state from matches
fn extract_filters(matches: &ArgMatches) -> FilterState {
    let series = matches
        .get_one::<String>("series-filter")
        .cloned()
        .unwrap_or_default();

    FilterState::new()
        .controllers_only(matches.get_flag("controllers-only"))
        .series_filter(series)
        .filters_only_sample_series(!matches.get_flag("filter-all-series"))
}

/// Describe active filters for the summary, if any
fn describe_filters(filters: &FilterState) -> Option<String> {
    if !filters.is_active() {
        return None;
    }
    let mut parts = Vec::new();
    if filters.show_controllers_only {
        parts.push("controllers only".to_string());
    }
    if !filters.series_filter.is_empty() {
        let scope = if filters.filters_only_sample_series {
            "sample tables"
        } else {
            "all tables"
        };
        parts.push(format!("series /{}/ ({})", filters.series_filter, scope));
    }
    Some(parts.join(", "))
}

/// Load report data named by the "report" argument
fn load_report(matches: &ArgMatches) -> Result<ReportData, anyhow::Error> {
    let path = matches
        .get_one::<String>("report")
        .ok_or_else(|| anyhow::anyhow!("missing report data file"))?;
    Ok(ReportData::from_path(path)?)
}

/// Handler for render command
fn render_handler(matches: &ArgMatches, ctx: &CommandContext) -> HandlerResult<serde_json::Value> {
    let report = load_report(matches)?;
    let filters = extract_filters(matches);
    let out = matches
        .get_one::<String>("out")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dashboard.html"));
    let title = matches
        .get_one::<String>("title")
        .map(|s| s.as_str())
        .unwrap_or(DEFAULT_TITLE);

    let dashboard = render_dashboard(&report, &filters)?;
    std::fs::write(&out, dashboard.to_html(title))?;
    tracing::info!(path = %out.display(), tables = dashboard.tables.len(), "wrote dashboard");

    // For JSON mode, return the rendered dashboard
    if ctx.output_mode.is_structured() {
        return Ok(Output::Render(serde_json::to_value(&dashboard)?));
    }

    let tables = dashboard
        .tables
        .iter()
        .map(|rendered| {
            let overall = if rendered.table.summary_row().is_some() {
                " + overall"
            } else {
                ""
            };
            TableSummary {
                id: rendered.kind.id().to_string(),
                line: format!(
                    "  {:<26} {:>5} rows{}",
                    rendered.kind.id(),
                    rendered.table.regular_rows().len(),
                    overall
                ),
            }
        })
        .collect();

    let chart = dashboard
        .chart
        .as_ref()
        .map(|chart| format!("  requests summary: {}", chart.slice_labels().join(", ")));

    let context = RenderSummaryContext {
        output: out.display().to_string(),
        tables,
        chart,
        filters: describe_filters(&filters),
    };
    Ok(Output::Render(serde_json::to_value(&context)?))
}

/// Handler for table command
fn table_handler(matches: &ArgMatches, ctx: &CommandContext) -> HandlerResult<serde_json::Value> {
    let report = load_report(matches)?;
    let filters = extract_filters(matches);
    let kind: ReportTable = matches
        .get_one::<String>("table")
        .map(|s| s.as_str())
        .unwrap_or("statistics")
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let mut sorter = TableSorter::new();
    let table = render_report_table(&report, kind, &filters, &mut sorter)?
        .ok_or_else(|| anyhow::anyhow!("report has no data for table '{}'", kind.id()))?;

    // For JSON mode, return the table model
    if ctx.output_mode.is_structured() {
        return Ok(Output::Render(serde_json::to_value(&table)?));
    }

    let context = render::table_context(kind, &table);
    Ok(Output::Render(serde_json::to_value(&context)?))
}

/// Create the theme with styles
fn create_theme() -> Theme {
    Theme::new().add("category", Style::new().bold())
}

/// Log to stderr so stdout stays clean for rendered output
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "perfdash=warn,perfdashlib=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let mut cmd = build_command();
    let theme = create_theme();

    // Build the outstanding app with command handlers and run
    let result = App::builder()
        .theme(theme)
        .command("render", render_handler, RENDER_SUMMARY_TEMPLATE)
        .command("table", table_handler, TABLE_TEMPLATE)
        .run_to_string(cmd.clone(), std::env::args());

    match result {
        RunResult::Handled(output) => {
            if !output.is_empty() {
                // Check if it's an error message from handler
                if output.starts_with("Error:") {
                    eprintln!("{}", output);
                    return ExitCode::FAILURE;
                }
                print!("{}", output);
            }
            ExitCode::SUCCESS
        }
        RunResult::Binary(_, _) => {
            // Not used in perfdash
            ExitCode::SUCCESS
        }
        RunResult::NoMatch(_) => {
            // No subcommand given
            let _ = cmd.print_help();
            ExitCode::FAILURE
        }
    }
}
