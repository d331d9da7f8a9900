//! Column-aligned text table.

use crate::document::Document;

/// Left margin reserved for the selection marker.
pub const MARKER_WIDTH: usize = 2;

/// Rows of field values laid out in aligned columns.
///
/// Every column is as wide as its longest value (header included) plus one
/// separating space. Widths are counted in characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given column names.
    pub fn new(columns: Vec<String>) -> Self {
        Table {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row holding the document's value for every column.
    /// Missing fields are blank.
    pub fn add_document(&mut self, document: &Document) {
        let row = self
            .columns
            .iter()
            .map(|c| document.field(c).unwrap_or_default().to_string())
            .collect();
        self.rows.push(row);
    }

    /// Append a row of raw values, one per column.
    pub fn add_row(&mut self, values: Vec<String>) {
        self.rows.push(values);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Width of every column.
    pub fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|value| display_width(value))
                    .fold(display_width(column), usize::max)
            })
            .collect()
    }

    /// The header row, aligned.
    pub fn header_line(&self, widths: &[usize]) -> String {
        format_row(&self.columns, widths)
    }

    /// A data row, aligned. Out-of-range indices give an empty string.
    pub fn row_line(&self, index: usize, widths: &[usize]) -> String {
        self.rows
            .get(index)
            .map(|row| format_row(row, widths))
            .unwrap_or_default()
    }
}

fn display_width(text: &str) -> usize {
    text.chars().count()
}

fn format_row(values: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, width) in widths.iter().enumerate() {
        let value = values.get(i).map(String::as_str).unwrap_or_default();
        line.push_str(value);
        let padding = (width + 1).saturating_sub(display_width(value));
        line.extend(std::iter::repeat_n(' ', padding));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_are_aligned() {
        let mut table = Table::new(vec!["name".to_string(), "id".to_string()]);
        table.add_row(vec!["ada".to_string(), "1".to_string()]);
        table.add_row(vec!["grace".to_string(), "1234".to_string()]);

        let widths = table.widths();
        assert_eq!(widths, vec![5, 4]);
        assert_eq!(table.header_line(&widths), "name  id   ");
        assert_eq!(table.row_line(0, &widths), "ada   1    ");
        assert_eq!(table.row_line(1, &widths), "grace 1234 ");
        assert_eq!(table.row_line(2, &widths), "");
    }

    #[test]
    fn test_documents_fill_missing_fields_with_blanks() {
        let mut table = Table::new(vec!["a".to_string(), "b".to_string()]);
        table.add_document(&Document::builder("x").add_text("a", "1").build());

        let widths = table.widths();
        assert_eq!(table.len(), 1);
        assert_eq!(table.row_line(0, &widths), "1   ");
    }

    #[test]
    fn test_widths_count_characters() {
        let mut table = Table::new(vec!["k".to_string()]);
        table.add_row(vec!["ñandú".to_string()]);
        assert_eq!(table.widths(), vec![5]);
        assert!(!table.is_empty());
    }
}
