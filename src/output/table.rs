#![forbid(unsafe_code)]

//! Borderless, left-aligned text table
//!
//! Cells are padded to their column width and columns are joined with a
//! fixed separator. Widths are terminal columns, so wide characters count
//! double. Cells wider than the width cap wrap at whitespace; a single word
//! longer than the cap is left to overflow on its own line.

use std::io;
use termcolor::{ColorSpec, WriteColor};
use unicode_width::UnicodeWidthStr;

/// Widest a column may grow before its cells wrap
pub const MAX_COLUMN_WIDTH: usize = 150;

/// Separator written between adjacent columns
pub const COLUMN_PADDING: &str = "\t\t";

/// A table of text rows
#[derive(Debug, Clone)]
pub struct Table {
    rows: Vec<Vec<String>>,
    max_width: usize,
}

impl Table {
    /// Creates an empty table with the default width cap
    pub fn new() -> Self {
        Table {
            rows: Vec::new(),
            max_width: MAX_COLUMN_WIDTH,
        }
    }

    /// Overrides the column width cap
    #[cfg(test)]
    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width.max(1);
        self
    }

    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the table, styling column `i` with `styles[i]` when present
    ///
    /// The last column is not padded, so lines carry no trailing spaces.
    pub fn write<W: WriteColor>(&self, out: &mut W, styles: &[ColorSpec]) -> io::Result<()> {
        let wrapped: Vec<Vec<Vec<String>>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|cell| wrap(cell, self.max_width)).collect())
            .collect();

        let columns = wrapped.iter().map(Vec::len).max().unwrap_or(0);
        let mut widths = vec![0usize; columns];
        for row in &wrapped {
            for (i, cell) in row.iter().enumerate() {
                for line in cell {
                    widths[i] = widths[i].max(display_width(line));
                }
            }
        }

        for row in &wrapped {
            let height = row.iter().map(Vec::len).max().unwrap_or(0);
            for line_index in 0..height {
                let last_filled = (0..row.len())
                    .rev()
                    .find(|&i| row[i].get(line_index).is_some_and(|s| !s.is_empty()))
                    .unwrap_or(0);

                for column in 0..=last_filled {
                    if column > 0 {
                        write!(out, "{}", COLUMN_PADDING)?;
                    }
                    let text = row
                        .get(column)
                        .and_then(|cell| cell.get(line_index))
                        .map(String::as_str)
                        .unwrap_or("");

                    match styles.get(column) {
                        Some(spec) if !spec.is_none() && !text.is_empty() => {
                            out.set_color(spec)?;
                            write!(out, "{}", text)?;
                            out.reset()?;
                        }
                        _ => write!(out, "{}", text)?,
                    }

                    if column < last_filled {
                        let fill = widths[column].saturating_sub(display_width(text));
                        write!(out, "{:fill$}", "")?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

fn display_width(text: &str) -> usize {
    text.width()
}

/// Split `text` into lines no wider than `width` where whitespace allows
///
/// Lines that already fit are kept verbatim, including inner spacing.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for raw in text.lines() {
        if display_width(raw) <= width {
            lines.push(raw.to_string());
            continue;
        }

        let mut current = String::new();
        for word in raw.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
            } else if display_width(&current) + 1 + display_width(word) <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
