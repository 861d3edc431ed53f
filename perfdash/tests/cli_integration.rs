//! Integration tests for perfdash CLI

use std::fs;
use std::process::Command;

use tempfile::tempdir;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/report.json");

fn run_perfdash(args: &[&str]) -> (String, String, bool) {
    let mut cmd_args = vec!["run", "-q", "-p", "perfdash", "--"];
    cmd_args.extend(args);

    let output = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Extract the markup of one table from a page
fn table_markup<'a>(page: &'a str, id: &str) -> &'a str {
    let start = page
        .find(&format!("<table id=\"{}\"", id))
        .expect("table missing from page");
    let end = page[start..].find("</table>").expect("unterminated table") + start;
    &page[start..end]
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_perfdash(&["--help"]);

    assert!(success);
    assert!(stdout.contains("perfdash"));
    assert!(stdout.contains("render"));
    assert!(stdout.contains("table"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_perfdash(&["--version"]);

    assert!(success);
    assert!(stdout.contains("perfdash"));
}

#[test]
fn test_render_writes_dashboard() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("dashboard.html");
    let out_str = out.to_string_lossy().to_string();

    let (stdout, _, success) = run_perfdash(&["render", FIXTURE, "-o", &out_str]);

    assert!(success);
    assert!(stdout.contains("Dashboard written to"));
    assert!(stdout.contains("statisticsTable"));

    let page = fs::read_to_string(&out).unwrap();
    assert!(page.contains("<title>Performance Test Dashboard</title>"));
    for id in [
        "apdexTable",
        "statisticsTable",
        "errorsTable",
        "top5ErrorsBySamplerTable",
    ] {
        assert!(page.contains(&format!("<table id=\"{}\"", id)));
    }
    assert!(page.contains("$(\"#errorsTable\").tablesorter({sortList: [[1, 1]]});"));
    assert!(page.contains("$.plot($(\"#flot-requests-summary\")"));

    let stats = table_markup(&page, "statisticsTable");
    assert!(stats.contains("<th data-sorter=\"false\" colspan=\"7\">Response Times (ms)</th>"));
    assert!(stats.contains("<td>Total</td><td>20</td><td>2</td><td>10.00%</td><td>120.50</td>"));
    assert!(stats.contains("<td>Login page</td>"));
    assert!(stats.contains("<td>Search results</td>"));
    assert!(stats.contains("<td>Checkout flow</td>"));

    let apdex = table_markup(&page, "apdexTable");
    assert!(apdex.contains("<td>0.850</td><td>500 ms</td><td>1 sec 500 ms</td><td>Total</td>"));
}

#[test]
fn test_render_controllers_only() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("controllers.html");
    let out_str = out.to_string_lossy().to_string();

    let (_, _, success) = run_perfdash(&[
        "render",
        FIXTURE,
        "-o",
        &out_str,
        "--controllers-only",
    ]);
    assert!(success);

    let page = fs::read_to_string(&out).unwrap();
    let stats = table_markup(&page, "statisticsTable");
    assert!(stats.contains("<td>Total</td>"));
    assert!(stats.contains("<td>Checkout flow</td>"));
    assert!(!stats.contains("<td>Login page</td>"));
    assert!(!stats.contains("<td>Search results</td>"));

    // Tables without controllers are not affected
    let top5 = table_markup(&page, "top5ErrorsBySamplerTable");
    assert!(top5.contains("<td>Search results</td>"));
}

#[test]
fn test_render_series_filter() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("login.html");
    let out_str = out.to_string_lossy().to_string();

    let (stdout, _, success) = run_perfdash(&[
        "render",
        FIXTURE,
        "-o",
        &out_str,
        "--series-filter",
        "^LOGIN",
    ]);
    assert!(success);
    assert!(stdout.contains("Filters:"));

    let page = fs::read_to_string(&out).unwrap();
    let stats = table_markup(&page, "statisticsTable");
    assert!(stats.contains("<td>Total</td>"));
    assert!(stats.contains("<td>Login page</td>"));
    assert!(!stats.contains("<td>Search results</td>"));

    // Filter only targets sample tables by default
    let top5 = table_markup(&page, "top5ErrorsBySamplerTable");
    assert!(top5.contains("<td>Search results</td>"));
}

#[test]
fn test_render_series_filter_all_tables() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("all.html");
    let out_str = out.to_string_lossy().to_string();

    let (_, _, success) = run_perfdash(&[
        "render",
        FIXTURE,
        "-o",
        &out_str,
        "--series-filter",
        "^checkout",
        "--filter-all-series",
    ]);
    assert!(success);

    let page = fs::read_to_string(&out).unwrap();
    let top5 = table_markup(&page, "top5ErrorsBySamplerTable");
    assert!(top5.contains("<td>Checkout flow</td>"));
    assert!(!top5.contains("<td>Search results</td>"));
}

#[test]
fn test_render_invalid_series_filter() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("broken.html");
    let out_str = out.to_string_lossy().to_string();

    let (_, stderr, success) = run_perfdash(&[
        "render",
        FIXTURE,
        "-o",
        &out_str,
        "--series-filter",
        "(",
    ]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(!out.exists());
}

#[test]
fn test_table_text_output() {
    let (stdout, _, success) = run_perfdash(&["table", FIXTURE, "--table", "statistics"]);

    assert!(success);
    assert!(stdout.contains("Statistics"));
    assert!(stdout.contains("Response Times (ms)"));
    assert!(stdout.contains("Label"));
    assert!(stdout.contains("Login page"));
    assert!(stdout.contains("16.67%"));
}

#[test]
fn test_table_json_output() {
    let (stdout, _, success) = run_perfdash(&[
        "table",
        FIXTURE,
        "--table",
        "errors",
        "--output",
        "json",
    ]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed["id"], "errorsTable");
    let bodies = parsed["bodies"].as_array().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["kind"], "regular");
    assert_eq!(bodies[0]["rows"][0]["cells"][2], "50.00%");
}

#[test]
fn test_missing_report() {
    let (_, stderr, success) = run_perfdash(&["table", "/nonexistent/report.json"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
}
