//! Table rendering utilities for CLI outputs.

use crate::models::table::Table;
use crate::utils::formatting::pad_right;
use unicode_width::UnicodeWidthStr;

/// Cells longer than this are cut with an ellipsis on screen (exports keep them).
const MAX_CELL_WIDTH: usize = 40;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct TextTable {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        let columns = headers
            .iter()
            .map(|h| Column {
                header: h.as_ref().to_string(),
                width: UnicodeWidthStr::width(h.as_ref()),
            })
            .collect();
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Widens columns as needed; missing cells render empty.
    pub fn add_row(&mut self, row: Vec<String>) {
        let row: Vec<String> = row.into_iter().map(|c| clip(&c)).collect();
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(UnicodeWidthStr::width(cell.as_str()));
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_right(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');
        for col in &self.columns {
            out.push_str(&"-".repeat(col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad_right(cell, col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

impl From<&Table> for TextTable {
    fn from(table: &Table) -> Self {
        let mut out = TextTable::new(table.columns());
        for values in table.rows() {
            out.add_row(values.iter().map(|v| v.to_string()).collect());
        }
        out
    }
}

fn clip(cell: &str) -> String {
    if UnicodeWidthStr::width(cell) <= MAX_CELL_WIDTH {
        return cell.to_string();
    }
    let mut out = String::new();
    for ch in cell.chars() {
        if UnicodeWidthStr::width(out.as_str()) >= MAX_CELL_WIDTH - 1 {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}
