//! HTML serialization of rendered tables and dashboard pages.

use std::fmt::Write;

use super::sorter::NO_SORT_CLASS;
use super::table::{BodyKind, HeaderRow, Table};
use crate::report::Dashboard;

/// Element id of the requests-summary chart placeholder.
pub const CHART_ELEMENT_ID: &str = "flot-requests-summary";

/// Escape text for element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn write_header_row(out: &mut String, row: &HeaderRow) {
    if row.sortable {
        out.push_str("<tr>");
    } else {
        let _ = write!(out, "<tr class=\"{}\">", NO_SORT_CLASS);
    }
    for cell in &row.cells {
        out.push_str("<th");
        if !cell.sortable {
            out.push_str(" data-sorter=\"false\"");
        }
        if cell.colspan != 1 {
            let _ = write!(out, " colspan=\"{}\"", cell.colspan);
        }
        let _ = write!(out, ">{}</th>", escape(&cell.text));
    }
    out.push_str("</tr>\n");
}

/// Serialize a table as `<table>` markup.
///
/// The summary body carries the widget's no-sort class so the overall row
/// stays on top when the user re-sorts.
pub fn write_table(table: &Table) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<table id=\"{}\" class=\"table table-bordered table-condensed tablesorter\">",
        escape(&table.id)
    );

    if let Some(header) = &table.header {
        out.push_str("<thead>\n");
        for row in &header.rows {
            write_header_row(&mut out, row);
        }
        out.push_str("</thead>\n");
    }

    for body in &table.bodies {
        match body.kind {
            BodyKind::Summary => {
                let _ = writeln!(out, "<tbody class=\"{}\">", NO_SORT_CLASS);
            }
            BodyKind::Regular => out.push_str("<tbody>\n"),
        }
        for row in &body.rows {
            out.push_str("<tr>");
            for cell in &row.cells {
                let _ = write!(out, "<td>{}</td>", escape(cell));
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</tbody>\n");
    }

    out.push_str("</table>\n");
    out
}

/// Assemble a standalone dashboard page.
///
/// Scripts and stylesheets are referenced relative to the page, the way a
/// generated report directory ships them.
pub fn write_page(title: &str, dashboard: &Dashboard) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape(title));
    out.push_str("<link rel=\"stylesheet\" href=\"content/css/dashboard.css\">\n");
    out.push_str("<link rel=\"stylesheet\" href=\"content/css/theme.blue.css\">\n");
    out.push_str("</head>\n<body>\n");
    let _ = writeln!(out, "<h1>{}</h1>", escape(title));

    if dashboard.chart.is_some() {
        out.push_str("<section>\n<h2>Requests Summary</h2>\n");
        let _ = writeln!(
            out,
            "<div id=\"{}\" style=\"height: 300px;\"></div>",
            CHART_ELEMENT_ID
        );
        out.push_str("</section>\n");
    }

    for rendered in &dashboard.tables {
        let _ = writeln!(out, "<section>\n<h2>{}</h2>", escape(rendered.kind.caption()));
        out.push_str(&write_table(&rendered.table));
        out.push_str("</section>\n");
    }

    out.push_str("<script src=\"sbadmin2-1.0.7/bower_components/jquery/dist/jquery.min.js\"></script>\n");
    out.push_str("<script src=\"content/js/jquery.tablesorter.min.js\"></script>\n");
    out.push_str("<script src=\"sbadmin2-1.0.7/bower_components/flot/jquery.flot.js\"></script>\n");
    out.push_str("<script src=\"sbadmin2-1.0.7/bower_components/flot/jquery.flot.pie.js\"></script>\n");
    out.push_str("<script>\n$(document).ready(function() {\n");
    out.push_str(&dashboard.sorter.script());
    if let Some(chart) = &dashboard.chart {
        out.push_str(&chart.script(CHART_ELEMENT_ID));
    }
    out.push_str("});\n</script>\n</body>\n</html>\n");
    out
}
