//! Per-pass render context: cell size and quiet-zone border

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::ModuleGrid;
use crate::error::ConfigError;
use crate::geometry::ModuleBox;

/// Cell size and border for one render pass; never mutated during the pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    box_size: Decimal,
    border: u32,
}

impl RenderContext {
    pub fn try_new(box_size: Decimal, border: u32) -> Result<Self, ConfigError> {
        if box_size <= Decimal::ZERO {
            return Err(ConfigError::BoxSize(box_size));
        }
        Ok(Self { box_size, border })
    }

    pub fn box_size(&self) -> Decimal {
        self.box_size
    }

    pub fn border(&self) -> u32 {
        self.border
    }

    /// Pixel box of the module at `(row, col)`
    pub fn module_box(&self, row: usize, col: usize) -> ModuleBox {
        ModuleBox::for_cell(row, col, self.box_size, self.border)
    }

    /// Grid position of a module box, recovered from its near corner
    ///
    /// Boxes too far away to index land at `i64::MIN`, which every grid
    /// treats as outside.
    pub fn locate(&self, module: &ModuleBox) -> (i64, i64) {
        let border = i64::from(self.border);
        let index = |v: Decimal| {
            (v / self.box_size)
                .floor()
                .to_i64()
                .map_or(i64::MIN, |i| i.saturating_sub(border))
        };
        (index(module.near.y), index(module.near.x))
    }

    /// Symbol size in pixels as `(width, height)`, quiet zone included
    ///
    /// Every module coordinate is bounded by this size, so a symbol that fits
    /// here can be drawn without overflow.
    pub fn pixel_size(&self, grid: &ModuleGrid) -> Result<(Decimal, Decimal), ConfigError> {
        let margin = 2 * u64::from(self.border);
        let side = |modules: usize| {
            u64::try_from(modules)
                .ok()
                .and_then(|m| m.checked_add(margin))
                .and_then(|m| Decimal::from(m).checked_mul(self.box_size))
                .ok_or(ConfigError::out_of_range("box_size", self.box_size))
        };
        Ok((side(grid.cols())?, side(grid.rows())?))
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            box_size: Decimal::TEN,
            border: 4,
        }
    }
}
