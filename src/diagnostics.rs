//! Tabular diagnostics for configured boundary conditions.
//!
//! Every coupled boundary condition contributes one row describing its
//! configuration. Multi-valued fields are rendered as a single
//! comma-separated cell.
//!
//! # Example
//! ```
//! use coupled_bc::diagnostics::{InfoTable, list_from_vec};
//!
//! let mut table = InfoTable::new(["Type", "Boundaries"]);
//! table
//!     .add_row(vec!["FixedValue".to_string(), list_from_vec(&["inlet", "wall"])])
//!     .unwrap();
//! assert!(table.to_string().contains("inlet, wall"));
//! ```

use std::fmt;

use crate::error::{BcError, BcResult};

/// Join items into one human-readable cell, separated by `", "`.
pub fn list_from_vec<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Text table with a fixed header; every row has the header's width.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InfoTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl InfoTable {
    /// Create an empty table with the given column headers.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Standard table for coupled boundary conditions.
    pub fn coupled_bc() -> Self {
        Self::new(["Type", "Variable", "Boundaries", "Parameters"])
    }

    /// Append one row.
    ///
    /// # Errors
    /// `BcError::InfoRowWidth` if the row does not match the header.
    pub fn add_row(&mut self, row: Vec<String>) -> BcResult<()> {
        if row.len() != self.headers.len() {
            return Err(BcError::InfoRowWidth {
                expected: self.headers.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Column headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }
        widths
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    write!(f, "|")?;
    for (cell, &w) in cells.iter().zip(widths) {
        write!(f, " {cell:<w$} |")?;
    }
    writeln!(f)
}

fn write_rule(f: &mut fmt::Formatter<'_>, widths: &[usize]) -> fmt::Result {
    write!(f, "+")?;
    for &w in widths {
        write!(f, "{}+", "-".repeat(w + 2))?;
    }
    writeln!(f)
}

impl fmt::Display for InfoTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        write_rule(f, &widths)?;
        write_line(f, &self.headers, &widths)?;
        write_rule(f, &widths)?;
        for row in &self.rows {
            write_line(f, row, &widths)?;
        }
        write_rule(f, &widths)
    }
}
