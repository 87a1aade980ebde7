//! Module geometry: pixel boxes and shrink-adjusted coordinates
//!
//! All arithmetic is done on [`Decimal`] so that the edges of neighbouring
//! modules land on exactly the same value, however many modules a symbol has.

use rust_decimal::Decimal;

/// A point in unscaled pixel space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: Decimal,
    pub y: Decimal,
}

impl Point {
    pub fn new(x: Decimal, y: Decimal) -> Self {
        Self { x, y }
    }
}

/// The pixel box a pipeline assigns to one module, before style adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleBox {
    /// Top-left corner
    pub near: Point,
    /// Bottom-right corner (exclusive)
    pub far: Point,
}

impl ModuleBox {
    pub fn new(near: Point, far: Point) -> Self {
        Self { near, far }
    }

    /// Box of the module at `(row, col)`, offset by `border` quiet-zone modules
    pub fn for_cell(row: usize, col: usize, box_size: Decimal, border: u32) -> Self {
        let x = Decimal::from(col + border as usize) * box_size;
        let y = Decimal::from(row + border as usize) * box_size;
        Self {
            near: Point::new(x, y),
            far: Point::new(x + box_size, y + box_size),
        }
    }

    pub fn width(&self) -> Decimal {
        self.far.x - self.near.x
    }

    pub fn height(&self) -> Decimal {
        self.far.y - self.near.y
    }
}

/// Shrink-and-center adjusted rectangle of one module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coords {
    pub x0: Decimal,
    pub y0: Decimal,
    pub x1: Decimal,
    pub y1: Decimal,
    pub xh: Decimal,
    pub yh: Decimal,
}

impl Coords {
    pub fn top_left(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.x1, self.y0)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.x0, self.y1)
    }

    pub fn center(&self) -> Point {
        Point::new(self.xh, self.yh)
    }

    pub fn width(&self) -> Decimal {
        self.x1 - self.x0
    }

    pub fn height(&self) -> Decimal {
        self.y1 - self.y0
    }
}

/// Per-drawer constants derived once from the cell size and size ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Inward margin applied on every side of the cell
    pub box_delta: Decimal,
    /// Side length of the shrunk module
    pub box_size: Decimal,
    /// Half of `box_size`
    pub box_half: Decimal,
}

impl Geometry {
    /// Callers guarantee `0 < size_ratio <= 1` and a positive `cell_size`.
    pub fn new(cell_size: Decimal, size_ratio: Decimal) -> Self {
        let box_delta = (Decimal::ONE - size_ratio) * cell_size / Decimal::TWO;
        let box_size = cell_size * size_ratio;
        Self {
            box_delta,
            box_size,
            box_half: box_size / Decimal::TWO,
        }
    }

    pub fn coords(&self, module: &ModuleBox) -> Coords {
        let x = module.near.x + self.box_delta;
        let y = module.near.y + self.box_delta;
        Coords {
            x0: x,
            y0: y,
            x1: x + self.box_size,
            y1: y + self.box_size,
            xh: x + self.box_half,
            yh: y + self.box_half,
        }
    }
}

/// Compute the adjusted coordinates of one module box
pub fn coords(module: &ModuleBox, cell_size: Decimal, size_ratio: Decimal) -> Coords {
    Geometry::new(cell_size, size_ratio).coords(module)
}
