//! Module sweep: walk the grid, draw every active module, feed the sink
//!
//! Drawing a module only reads the grid and the drawer's constants, so rows
//! can be drawn in parallel. Results are always committed to the sink in
//! row-major order, whichever sweep produced them.

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use serde::Deserialize;

use crate::drawers::{Drawer, Drawn};
use crate::geometry::ModuleBox;
use crate::grid::{probe, Compass, ModuleGrid, ModuleState, RenderContext};
use crate::log::debug;
use crate::renderer::SvgBuilder;

/// How rows are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sweep {
    #[default]
    Sequential,
    /// Rows drawn on the rayon thread pool
    Parallel,
}

impl fmt::Display for Sweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sweep::Sequential => write!(f, "sequential"),
            Sweep::Parallel => write!(f, "parallel"),
        }
    }
}

impl FromStr for Sweep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sequential" => Ok(Sweep::Sequential),
            "parallel" => Ok(Sweep::Parallel),
            other => Err(format!(
                "unknown sweep '{}' (expected sequential or parallel)",
                other
            )),
        }
    }
}

/// State of the module occupying `module`, with the requested neighbour flags
///
/// The grid position is recovered from the box itself, so any box produced
/// by `context` can be inspected.
pub fn inspect(
    grid: &ModuleGrid,
    context: &RenderContext,
    module: &ModuleBox,
    directions: &[Compass],
) -> ModuleState {
    let (row, col) = context.locate(module);
    if !grid.is_active(row, col) {
        ModuleState::Inactive
    } else if directions.is_empty() {
        ModuleState::Active
    } else {
        ModuleState::ActiveWithNeighbors(probe(grid, row, col, directions))
    }
}

fn draw_row(grid: &ModuleGrid, context: &RenderContext, drawer: &Drawer, row: usize) -> Vec<Drawn> {
    let directions = drawer.directions();
    (0..grid.cols())
        .filter_map(|col| {
            let module = context.module_box(row, col);
            let state = inspect(grid, context, &module, directions);
            drawer.draw(&module, &state)
        })
        .collect()
}

/// Draw every module of `grid`, in row-major order
pub fn draw_modules(
    grid: &ModuleGrid,
    context: &RenderContext,
    drawer: &Drawer,
    sweep: Sweep,
) -> Vec<Drawn> {
    let rows: Vec<Vec<Drawn>> = match sweep {
        Sweep::Sequential => (0..grid.rows())
            .map(|row| draw_row(grid, context, drawer, row))
            .collect(),
        Sweep::Parallel => (0..grid.rows())
            .into_par_iter()
            .map(|row| draw_row(grid, context, drawer, row))
            .collect(),
    };

    rows.into_iter().flatten().collect()
}

/// Draw every module and append the results to `sink`; returns how many were drawn
pub fn render_modules(
    grid: &ModuleGrid,
    context: &RenderContext,
    drawer: &Drawer,
    sweep: Sweep,
    sink: &mut SvgBuilder,
) -> usize {
    let drawn = draw_modules(grid, context, drawer, sweep);
    for item in &drawn {
        sink.append(item);
    }

    debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        drawn = drawn.len(),
        %sweep,
        style = %drawer.style(),
        "render pass finished"
    );

    drawn.len()
}
