//! Markdown-style table rendering.

use std::fmt::Write as _;

use crate::record::{BusinessRecord, COLUMNS};

/// Renders the Record Set as a column-aligned markdown grid.
///
/// Column order matches the query's SELECT list; each column is padded
/// to its widest cell. An empty Record Set renders as the header and
/// separator rows only.
pub fn render(records: &[BusinessRecord]) -> String {
    let rows: Vec<[&str; 8]> = records.iter().map(BusinessRecord::row).collect();

    let mut widths: [usize; 8] = COLUMNS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &COLUMNS, &widths);
    push_separator(&mut out, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[&str; 8], widths: &[usize; 8]) {
    for (cell, width) in cells.iter().zip(widths.iter()) {
        let pad = width - cell.chars().count();
        let _ = write!(out, "| {cell}{} ", " ".repeat(pad));
    }
    out.push_str("|\n");
}

fn push_separator(out: &mut String, widths: &[usize; 8]) {
    for width in widths {
        let _ = write!(out, "|:{}", "-".repeat(width + 1));
    }
    out.push_str("|\n");
}
