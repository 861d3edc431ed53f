//! The table-population engine.
//!
//! `render_table` projects a dataset into a table target in one pass:
//!
//! 1. optional header decorator rows, then the column-title row
//! 2. the overall row in its own non-sortable body, never filtered
//! 3. the item rows that pass the filters, in their original order
//! 4. registration with the sortable widget using the default sort
//!
//! The dataset and filter state are only read. The only failure is a series
//! filter that does not compile, and it is raised before the target is
//! touched.

use crate::data::{DatasetDescriptor, RowRecord};
use crate::query::{FilterState, RowFilter, TableOptions};
use crate::Result;

use super::sorter::SortWidget;
use super::table::{BodyKind, BodySection, TableTarget};

/// Populate `target` from `dataset` and hand it to the sortable widget.
pub fn render_table<T, W>(
    target: &mut T,
    dataset: &DatasetDescriptor,
    options: &TableOptions,
    filters: &FilterState,
    sorter: &mut W,
) -> Result<()>
where
    T: TableTarget + ?Sized,
    W: SortWidget + ?Sized,
{
    let filter = RowFilter::compile(filters, dataset)?;

    for index in dataset.shape_mismatches() {
        tracing::warn!(
            table = target.id(),
            row = index,
            cells = dataset.items[index].data.len(),
            titles = dataset.titles.len(),
            "row length does not match column titles"
        );
    }

    let header = target.create_header_section();
    if let Some(decorate) = options.header {
        decorate(header);
    }
    let title_row = header.append_row();
    for title in &dataset.titles {
        title_row.append_cell(title.as_str());
    }

    if let Some(overall) = dataset.overall.as_ref().filter(|o| !o.is_placeholder()) {
        let summary = target.create_body_section(BodyKind::Summary);
        append_record(summary, overall, options);
    }

    let body = target.create_body_section(BodyKind::Regular);
    let mut skipped = 0;
    for item in &dataset.items {
        if item.is_placeholder() {
            continue;
        }
        if !filter.includes(item, options.series_column) {
            skipped += 1;
            continue;
        }
        append_record(body, item, options);
    }
    let rendered = body.rows.len();

    tracing::debug!(
        table = target.id(),
        rendered,
        filtered_out = skipped,
        overall = dataset.overall.is_some(),
        "rendered table"
    );

    let id = target.id().to_string();
    sorter.enable_sort(&id, &options.default_sort);

    Ok(())
}

/// Append one row, formatting every cell with its own column index.
fn append_record(section: &mut BodySection, record: &RowRecord, options: &TableOptions) {
    let row = section.append_row();
    for (column, value) in record.data.iter().enumerate() {
        row.append_cell(options.format_cell(column, value));
    }
}
