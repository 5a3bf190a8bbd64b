//! Column-aligned text tables.
//!
//! Every column but the last is padded to its widest cell plus [`PADDING`]
//! spaces and closed with [`SEPARATOR`]. The last column is written as-is.
//! Cell contents are never truncated or escaped.

use std::io::Write;

use crate::{constants::TABLE_HEADER, error::RenderError, Establishments};

pub const PADDING: usize = 1;
pub const SEPARATOR: char = '|';

#[derive(Debug, Default)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn with_header<S: AsRef<str>>(header: &[S]) -> Self {
        let mut table = Self::default();
        table.push_row(header);
        table
    }

    pub fn push_row<S: AsRef<str>>(&mut self, cells: &[S]) {
        self.rows
            .push(cells.iter().map(|cell| cell.as_ref().to_string()).collect());
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths = Vec::new();
        for row in &self.rows {
            let padded_cells = row.len().saturating_sub(1);
            if widths.len() < padded_cells {
                widths.resize(padded_cells, 0);
            }
            for (width, cell) in widths.iter_mut().zip(&row[..padded_cells]) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> Result<(), RenderError> {
        let widths = self.column_widths();
        for row in &self.rows {
            let mut line = String::new();
            if let Some((last, padded)) = row.split_last() {
                for (cell, width) in padded.iter().zip(&widths) {
                    line.push_str(cell);
                    let fill = width + PADDING - cell.chars().count();
                    line.extend(std::iter::repeat(' ').take(fill));
                    line.push(SEPARATOR);
                }
                line.push_str(last);
            }
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        Ok(())
    }
}

impl From<&Establishments> for Table {
    fn from(establishments: &Establishments) -> Self {
        let mut table = Table::with_header(&TABLE_HEADER);
        for establishment in establishments {
            table.push_row(&[
                &establishment.name,
                &establishment.rating_value,
                &establishment.address,
                &establishment.local_authority,
            ]);
        }
        table
    }
}

impl Establishments {
    /// Write the response count line followed by the results table.
    pub fn write_report<W: Write>(&self, mut out: W) -> Result<(), RenderError> {
        writeln!(out, "Number of responses: {}", self.len())?;
        Table::from(self).write_to(out)
    }
}
