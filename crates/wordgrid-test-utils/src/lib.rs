//! Test utilities and mock types for wordgrid development.
//!
//! Provides mock implementations of the layout and projection traits
//! ([`LookupLayout`], [`OffsetProjection`]) plus standard configuration
//! fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashMap;

use wordgrid_board::CellLayout;
use wordgrid_core::{GridPos, WorldPos};
use wordgrid_select::SurfaceProjection;

pub mod fixtures;

/// Mock implementation of [`CellLayout`].
///
/// Backed by a `HashMap<GridPos, WorldPos>` for flexible test setup.
/// Pre-populate cells with [`set_cell`](LookupLayout::set_cell) before
/// passing to code under test; unknown cells map to a sentinel far off
/// any reasonable board.
pub struct LookupLayout {
    cells: HashMap<GridPos, WorldPos>,
}

impl LookupLayout {
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
        }
    }

    /// Pre-populate a cell's world position for testing.
    pub fn set_cell(&mut self, cell: GridPos, pos: WorldPos) {
        self.cells.insert(cell, pos);
    }
}

impl Default for LookupLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl CellLayout for LookupLayout {
    fn world_pos(&self, cell: GridPos) -> WorldPos {
        self.cells
            .get(&cell)
            .copied()
            .unwrap_or(WorldPos::new(1e9, 1e9))
    }
}

/// Projection that translates every point by a fixed offset.
///
/// Useful for verifying that render geometry is computed in
/// surface-local space rather than raw world space.
#[derive(Clone, Copy, Debug)]
pub struct OffsetProjection {
    pub dx: f64,
    pub dy: f64,
}

impl OffsetProjection {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

impl SurfaceProjection for OffsetProjection {
    fn project(&self, p: WorldPos) -> WorldPos {
        WorldPos::new(p.x + self.dx, p.y + self.dy)
    }
}
