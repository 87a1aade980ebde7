//! The module grid and everything that reads from it
//!
//! A [`ModuleGrid`] is validated once at construction and then only
//! borrowed. Lookups take signed indices so that probing past any edge is
//! simply "inactive".

pub mod context;
pub mod neighbors;

pub use context::RenderContext;
pub use neighbors::{probe, Compass, Neighbors};

use crate::error::GridError;

/// Characters accepted as dark modules in a text grid
const ACTIVE_CHARS: &[char] = &['#', '1', 'X', 'x', '█'];
/// Characters accepted as light modules in a text grid
const INACTIVE_CHARS: &[char] = &['.', '0', '-', '_', ' '];

/// Immutable, rectangular, row-major table of module states
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl ModuleGrid {
    /// Build a grid from rows of booleans, rejecting empty or ragged input
    pub fn new(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::ragged(index, cols, row.len()));
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            cells,
            rows: rows.len(),
            cols,
        })
    }

    /// Parse a grid drawn as text, one row per non-empty line
    ///
    /// Only a trailing `\r` is stripped; spaces are light modules wherever
    /// they appear, so a row of spaces is a row.
    pub fn from_text(source: &str) -> Result<Self, GridError> {
        let mut rows: Vec<Vec<bool>> = Vec::new();
        let mut expected: Option<usize> = None;
        let mut offset = 0;

        for (line_index, raw_line) in source.split('\n').enumerate() {
            let line_start = offset;
            offset += raw_line.len() + 1;

            let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
            if line.is_empty() {
                continue;
            }

            let mut row = Vec::with_capacity(line.len());
            for (column, (byte, ch)) in line.char_indices().enumerate() {
                let active = if ACTIVE_CHARS.contains(&ch) {
                    true
                } else if INACTIVE_CHARS.contains(&ch) {
                    false
                } else {
                    let start = line_start + byte;
                    return Err(GridError::invalid_cell(
                        line_index + 1,
                        column + 1,
                        ch,
                        start..start + ch.len_utf8(),
                    ));
                };
                row.push(active);
            }

            match expected {
                None => expected = Some(row.len()),
                Some(cols) if cols != row.len() => {
                    return Err(GridError::ragged(rows.len(), cols, row.len())
                        .with_span(line_start..line_start + line.len()));
                }
                Some(_) => {}
            }
            rows.push(row);
        }

        Self::new(rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Module state at a signed position; anything outside the grid is inactive
    pub fn is_active(&self, row: i64, col: i64) -> bool {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(row), Ok(col)) if row < self.rows && col < self.cols => {
                self.cells[row * self.cols + col]
            }
            _ => false,
        }
    }

    /// One row of module states
    pub fn row(&self, row: usize) -> &[bool] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Number of dark modules
    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|active| **active).count()
    }

    /// Render the grid back into its text form (`#` dark, `.` light)
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in 0..self.rows {
            for &active in self.row(row) {
                out.push(if active { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}

/// What the pipeline hands a drawer for one module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleState {
    Inactive,
    /// Active, without neighbour information
    Active,
    /// Active, with flags for the directions the drawer asked for
    ActiveWithNeighbors(Neighbors),
}

impl ModuleState {
    pub fn is_active(&self) -> bool {
        !matches!(self, ModuleState::Inactive)
    }

    /// Neighbour flags; missing information reads as "all inactive"
    pub fn neighbors(&self) -> Neighbors {
        match self {
            ModuleState::ActiveWithNeighbors(neighbors) => *neighbors,
            _ => Neighbors::default(),
        }
    }
}
