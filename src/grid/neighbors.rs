//! Neighbour inspection around a module

use super::ModuleGrid;

/// The eight compass directions around a module (screen orientation, north is up)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compass {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Compass {
    pub const ALL: [Compass; 8] = [
        Compass::N,
        Compass::NE,
        Compass::E,
        Compass::SE,
        Compass::S,
        Compass::SW,
        Compass::W,
        Compass::NW,
    ];

    /// `(row, col)` step towards this direction
    pub fn offset(self) -> (i64, i64) {
        match self {
            Compass::N => (-1, 0),
            Compass::NE => (-1, 1),
            Compass::E => (0, 1),
            Compass::SE => (1, 1),
            Compass::S => (1, 0),
            Compass::SW => (1, -1),
            Compass::W => (0, -1),
            Compass::NW => (-1, -1),
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Active flags for the directions a drawer asked about
///
/// Directions that were never probed read as inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Neighbors {
    active: u8,
}

impl Neighbors {
    /// Flags with exactly the given directions active
    pub fn from_active(directions: &[Compass]) -> Self {
        directions
            .iter()
            .fold(Self::default(), |flags, &dir| flags.with(dir, true))
    }

    pub fn with(mut self, direction: Compass, active: bool) -> Self {
        if active {
            self.active |= direction.bit();
        } else {
            self.active &= !direction.bit();
        }
        self
    }

    pub fn get(&self, direction: Compass) -> bool {
        self.active & direction.bit() != 0
    }

    pub fn n(&self) -> bool {
        self.get(Compass::N)
    }

    pub fn e(&self) -> bool {
        self.get(Compass::E)
    }

    pub fn s(&self) -> bool {
        self.get(Compass::S)
    }

    pub fn w(&self) -> bool {
        self.get(Compass::W)
    }
}

/// Probe the requested directions around `(row, col)`
///
/// Out-of-grid positions are inactive; this never panics, even at the
/// extremes of `i64`.
pub fn probe(grid: &ModuleGrid, row: i64, col: i64, directions: &[Compass]) -> Neighbors {
    directions.iter().fold(Neighbors::default(), |flags, &dir| {
        let (dr, dc) = dir.offset();
        let active = match (row.checked_add(dr), col.checked_add(dc)) {
            (Some(r), Some(c)) => grid.is_active(r, c),
            _ => false,
        };
        flags.with(dir, active)
    })
}
