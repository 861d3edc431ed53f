//! In-memory table model and the target capability the renderer writes to.
//!
//! The model mirrors what a sortable HTML table needs: a header section
//! (possibly with grouping rows above the column titles), an optional
//! non-sortable summary body and the regular body. It is serializable so
//! the same structure can be emitted as JSON or markup.

use serde::{Deserialize, Serialize};

/// A header cell; grouping cells span several columns and never sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderCell {
    pub text: String,
    pub colspan: usize,
    pub sortable: bool,
}

/// A row in the header section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderRow {
    pub cells: Vec<HeaderCell>,
    /// Grouping rows are excluded from sorting as a whole
    pub sortable: bool,
}

impl Default for HeaderRow {
    fn default() -> Self {
        Self {
            cells: Vec::new(),
            sortable: true,
        }
    }
}

impl HeaderRow {
    /// Append a single-column title cell
    pub fn append_cell(&mut self, text: impl Into<String>) -> &mut Self {
        self.cells.push(HeaderCell {
            text: text.into(),
            colspan: 1,
            sortable: true,
        });
        self
    }

    /// Append a merged, non-sortable cell spanning `colspan` columns
    pub fn append_group(&mut self, text: impl Into<String>, colspan: usize) -> &mut Self {
        self.cells.push(HeaderCell {
            text: text.into(),
            colspan,
            sortable: false,
        });
        self
    }

    /// Exclude the whole row from sorting
    pub fn mark_non_sortable(&mut self) -> &mut Self {
        self.sortable = false;
        self
    }

    /// Number of columns covered by this row
    pub fn span(&self) -> usize {
        self.cells.iter().map(|c| c.colspan).sum()
    }
}

/// The header section of a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderSection {
    pub rows: Vec<HeaderRow>,
}

impl HeaderSection {
    /// Append an empty header row
    pub fn append_row(&mut self) -> &mut HeaderRow {
        self.rows.push(HeaderRow::default());
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }
}

/// A body row of formatted cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<String>,
}

impl TableRow {
    /// Append a formatted cell
    pub fn append_cell(&mut self, text: impl Into<String>) {
        self.cells.push(text.into());
    }
}

/// Which kind of body section a row group lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    /// Non-sortable section holding the overall row
    Summary,
    /// Sortable section holding the item rows
    Regular,
}

/// A body section of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodySection {
    pub kind: BodyKind,
    pub rows: Vec<TableRow>,
}

impl BodySection {
    /// Create an empty section
    pub fn new(kind: BodyKind) -> Self {
        Self {
            kind,
            rows: Vec::new(),
        }
    }

    /// Append an empty row
    pub fn append_row(&mut self) -> &mut TableRow {
        self.rows.push(TableRow::default());
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }
}

/// What a renderer needs from the table it populates.
pub trait TableTarget {
    /// Identifier the sortable widget uses to find the table
    fn id(&self) -> &str;

    /// The header section, created on first use
    fn create_header_section(&mut self) -> &mut HeaderSection;

    /// Append a new body section of the given kind
    fn create_body_section(&mut self, kind: BodyKind) -> &mut BodySection;
}

/// A rendered table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderSection>,
    pub bodies: Vec<BodySection>,
}

impl Table {
    /// Create an empty table
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: None,
            bodies: Vec::new(),
        }
    }

    /// All header rows, top to bottom
    pub fn header_rows(&self) -> &[HeaderRow] {
        self.header.as_ref().map(|h| h.rows.as_slice()).unwrap_or(&[])
    }

    /// The column-title row (the last header row)
    pub fn column_titles(&self) -> Option<&HeaderRow> {
        self.header_rows().last()
    }

    /// Every body row in document order, summary rows first
    pub fn body_rows(&self) -> Vec<&TableRow> {
        self.bodies.iter().flat_map(|b| b.rows.iter()).collect()
    }

    /// The overall row, if one was rendered
    pub fn summary_row(&self) -> Option<&TableRow> {
        self.bodies
            .iter()
            .filter(|b| b.kind == BodyKind::Summary)
            .flat_map(|b| b.rows.iter())
            .next()
    }

    /// The filtered item rows
    pub fn regular_rows(&self) -> Vec<&TableRow> {
        self.bodies
            .iter()
            .filter(|b| b.kind == BodyKind::Regular)
            .flat_map(|b| b.rows.iter())
            .collect()
    }
}

impl TableTarget for Table {
    fn id(&self) -> &str {
        &self.id
    }

    fn create_header_section(&mut self) -> &mut HeaderSection {
        self.header.get_or_insert_with(HeaderSection::default)
    }

    fn create_body_section(&mut self, kind: BodyKind) -> &mut BodySection {
        self.bodies.push(BodySection::new(kind));
        let last = self.bodies.len() - 1;
        &mut self.bodies[last]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_section_is_reused() {
        let mut table = Table::new("t");
        table.create_header_section().append_row().append_cell("A");
        table.create_header_section().append_row().append_cell("B");

        assert_eq!(table.header_rows().len(), 2);
        assert_eq!(table.column_titles().unwrap().cells[0].text, "B");
    }

    #[test]
    fn test_group_cells() {
        let mut section = HeaderSection::default();
        let row = section.append_row();
        row.mark_non_sortable()
            .append_group("Requests", 1)
            .append_group("Executions", 3);

        assert!(!section.rows[0].sortable);
        assert_eq!(section.rows[0].span(), 4);
        assert!(section.rows[0].cells.iter().all(|c| !c.sortable));
    }

    #[test]
    fn test_body_rows_order() {
        let mut table = Table::new("t");
        table
            .create_body_section(BodyKind::Summary)
            .append_row()
            .append_cell("Total");
        let body = table.create_body_section(BodyKind::Regular);
        body.append_row().append_cell("A");
        body.append_row().append_cell("B");

        let rows: Vec<&str> = table
            .body_rows()
            .iter()
            .map(|r| r.cells[0].as_str())
            .collect();
        assert_eq!(rows, vec!["Total", "A", "B"]);
        assert_eq!(table.summary_row().unwrap().cells, vec!["Total"]);
        assert_eq!(table.regular_rows().len(), 2);
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new("t");
        assert!(table.header_rows().is_empty());
        assert!(table.column_titles().is_none());
        assert!(table.summary_row().is_none());
        assert!(table.body_rows().is_empty());
    }

    #[test]
    fn test_serialize() {
        let mut table = Table::new("errorsTable");
        table.create_body_section(BodyKind::Regular);
        let json = serde_json::to_value(&table).unwrap();

        assert_eq!(json["id"], "errorsTable");
        assert!(json.get("header").is_none());
        assert_eq!(json["bodies"][0]["kind"], "regular");
    }
}
