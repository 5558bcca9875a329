use std::fmt::Write;

use super::{HEADERS, OutputFormatter, table_cells};
use crate::error::RenderResult;
use crate::theme::Theme;
use crate::types::Row;

/// Spaces between columns.
const COLUMN_GAP: usize = 2;

pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format(rows: &[Row], _theme: Theme) -> RenderResult<String> {
        let lines: Vec<[&str; 5]> = std::iter::once(HEADERS)
            .chain(rows.iter().map(table_cells))
            .collect();

        // The last column is never padded.
        let mut widths = [0usize; 4];
        for line in &lines {
            for (width, cell) in widths.iter_mut().zip(line.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        for line in &lines {
            for (cell, width) in line.iter().zip(widths) {
                write!(out, "{:<w$}", cell, w = width + COLUMN_GAP)?;
            }
            writeln!(out, "{}", line[4])?;
        }
        Ok(out)
    }
}
