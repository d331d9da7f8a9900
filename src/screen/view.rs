//! A renderable snapshot of the search state.

use std::sync::Arc;

use crate::document::Document;
use crate::events::SearchState;
use crate::screen::table::{MARKER_WIDTH, Table};
use crate::search::{SharedSearcher, SortOrder};

/// Lines at the bottom of the screen that are not result rows: the header
/// row, the counter line and the query line.
const CHROME_LINES: usize = 3;

/// How a screen line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Plain,
    Selected,
    Bold,
}

/// One line of text at one row of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLine {
    pub text: String,
    pub style: LineStyle,
}

impl ScreenLine {
    pub fn new<S: Into<String>>(text: S, style: LineStyle) -> Self {
        ScreenLine {
            text: text.into(),
            style,
        }
    }

    /// An empty plain line.
    pub fn blank() -> Self {
        Self::new(String::new(), LineStyle::Plain)
    }
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone)]
pub struct View {
    pub query: String,
    pub selected: usize,
    /// Number of documents matching the query.
    pub matched: usize,
    /// Number of documents ingested so far.
    pub total: usize,
    pub headers: Vec<String>,
    /// Matching documents in display order.
    pub rows: Vec<Arc<Document>>,
}

impl View {
    /// Resolve a state against the searcher's current content.
    pub fn build(
        state: &SearchState,
        searcher: &SharedSearcher,
        order: SortOrder,
        headers: &[String],
    ) -> Self {
        let rows = state.filtered(searcher, order);
        // Documents are only ever added, so this is never below `rows.len()`.
        let total = searcher.count();
        View {
            query: state.query.clone(),
            selected: state.selected,
            matched: rows.len(),
            total,
            headers: headers.to_vec(),
            rows,
        }
    }

    /// Lay the view out on a `width` x `height` screen, top row first.
    ///
    /// The query line `"> query"` sits on the bottom row with the counter
    /// line `"  n/N "` above it. Result rows grow upwards from there, rank 0
    /// nearest the counter, with `"> "` marking the selected row and `"  "`
    /// the others. The aligned header row sits above the topmost result.
    /// When the selection is beyond the rows that fit, the rows scroll so
    /// that it stays visible.
    pub fn render(&self, width: usize, height: usize) -> Vec<ScreenLine> {
        if height == 0 {
            return Vec::new();
        }

        let mut lines = Vec::with_capacity(height);
        lines.push(ScreenLine::new(format!("> {}", self.query), LineStyle::Bold));
        let margin = " ".repeat(MARKER_WIDTH);
        lines.push(ScreenLine::new(
            format!("{margin}{}/{} ", self.matched, self.total),
            LineStyle::Bold,
        ));

        let capacity = height.saturating_sub(CHROME_LINES).max(1);
        let offset = (self.selected + 1).saturating_sub(capacity);

        let mut table = Table::new(self.headers.clone());
        for document in self.rows.iter().skip(offset).take(capacity) {
            table.add_document(document);
        }
        let widths = table.widths();

        for i in 0..table.len() {
            let rank = offset + i;
            let (marker, style) = if rank == self.selected {
                (format!("{:<width$}", ">", width = MARKER_WIDTH), LineStyle::Selected)
            } else {
                (margin.clone(), LineStyle::Plain)
            };
            lines.push(ScreenLine::new(
                format!("{marker}{}", table.row_line(i, &widths)),
                style,
            ));
        }
        lines.push(ScreenLine::new(
            format!("{margin}{}", table.header_line(&widths)),
            LineStyle::Bold,
        ));

        lines.truncate(height);
        lines.reverse();

        let mut screen = vec![ScreenLine::blank(); height - lines.len()];
        screen.extend(lines);
        for line in &mut screen {
            if let Some((cut, _)) = line.text.char_indices().nth(width) {
                line.text.truncate(cut);
            }
        }
        screen
    }
}
