//! The finished letter grid.

use std::fmt;
use wordgrid_core::GridPos;

/// An N×N grid of resolved letters.
///
/// Produced by [`GridBuilder::finish()`](crate::GridBuilder::finish);
/// every cell holds exactly one letter (placed-word letter or filler)
/// and the grid is immutable thereafter. Storage is row-major:
/// `cells[y * size + x]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: u32,
    cells: Vec<char>,
}

impl Board {
    pub(crate) fn new(size: u32, cells: Vec<char>) -> Self {
        debug_assert_eq!(cells.len(), (size as usize) * (size as usize));
        Self { size, cells }
    }

    /// Grid dimension N.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total number of cells (N²).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `pos` addresses a cell on this board.
    pub fn in_bounds(&self, pos: GridPos) -> bool {
        let n = self.size as i32;
        pos.x >= 0 && pos.x < n && pos.y >= 0 && pos.y < n
    }

    /// The letter at `pos`, or `None` when out of bounds.
    pub fn letter(&self, pos: GridPos) -> Option<char> {
        if !self.in_bounds(pos) {
            return None;
        }
        let idx = (pos.y as usize) * (self.size as usize) + (pos.x as usize);
        Some(self.cells[idx])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[char] {
        &self.cells
    }
}

impl fmt::Display for Board {
    /// Renders rows top-down (largest `y` first), matching the usual
    /// on-screen orientation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size as i32;
        for y in (0..n).rev() {
            for x in 0..n {
                let letter = self.letter(GridPos::new(x, y)).unwrap_or('?');
                write!(f, "{letter}")?;
            }
            if y > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
