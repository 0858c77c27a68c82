//! Raw-row pager.

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::error::SessionResult;
use crate::types::{DataSet, Value};

/// Rows shown per page.
pub const PAGE_SIZE: usize = 5;

/// Rows `[offset, offset + len)`, clamped to the end of the dataset.
pub fn window(dataset: &DataSet, offset: usize, len: usize) -> &[Vec<Value>] {
    let start = offset.min(dataset.row_count());
    let end = offset.saturating_add(len).min(dataset.row_count());
    &dataset.rows[start..end]
}

/// Render rows as an aligned table with a header line and 0-based row indices.
pub fn format_rows(dataset: &DataSet, offset: usize, rows: &[Vec<Value>]) -> String {
    let mut header = vec![String::new()];
    header.extend(dataset.schema.field_names().map(str::to_string));

    let mut lines: Vec<Vec<String>> = vec![header];
    for (i, row) in rows.iter().enumerate() {
        let mut cells = vec![(offset + i).to_string()];
        cells.extend(row.iter().map(Value::to_string));
        lines.push(cells);
    }

    let columns = lines.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            lines
                .iter()
                .filter_map(|l| l.get(c))
                .map(|s| s.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for line in &lines {
        let padded: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:>w$}"))
            .collect();
        out.push_str(padded.join("  ").trim_end());
        out.push('\n');
    }
    out
}

/// Offer to show raw rows, then page through them [`PAGE_SIZE`] at a time.
///
/// Stops when the user declines or the last row has been shown.
pub fn display<R: BufRead, W: Write>(console: &mut Console<R, W>, dataset: &DataSet) -> SessionResult<()> {
    if !console.ask_yes_no("\ndo you want to see raw data? Enter yes or no: ")? {
        return Ok(());
    }
    if dataset.is_empty() {
        return console.say("No raw data to display.");
    }

    let mut offset = 0;
    loop {
        let rows = window(dataset, offset, PAGE_SIZE);
        let end = offset + rows.len();
        console.say(format!("Raw data [{offset}, {end}]:"))?;
        write!(console.out(), "{}", format_rows(dataset, offset, rows))?;

        if end >= dataset.row_count() {
            tracing::debug!(rows = dataset.row_count(), "pager reached end of data");
            return Ok(());
        }
        if !console.ask_yes_no("do you want to see more 5 lines of raw data? Enter yes or no: ")? {
            return Ok(());
        }
        offset += PAGE_SIZE;
    }
}
