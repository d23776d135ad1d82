//! Grid and world coordinate types.
//!
//! [`GridPos`] is an integer cell coordinate on the letter grid.
//! [`WorldPos`] is a continuous 2D position in the host's world space
//! (pointer positions, tile centres, selection-line endpoints).
//! [`Rect`] is an axis-aligned rectangle used for the playable-region
//! bounds check when snapping.

use crate::direction::Direction;
use std::fmt;

// ── GridPos ─────────────────────────────────────────────────────

/// An integer cell coordinate on the letter grid.
///
/// `x` is the column, `y` is the row. Valid cells lie in
/// `[0, size) x [0, size)`; out-of-range values are representable so
/// that placement runs can be bounds-checked after offsetting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPos {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl GridPos {
    /// Create a grid position from column and row indices.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position `steps` cells away in `direction`.
    pub fn offset(self, direction: Direction, steps: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * steps,
            y: self.y + dy * steps,
        }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── WorldPos ────────────────────────────────────────────────────

/// A continuous 2D position in the host's world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldPos {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl WorldPos {
    /// Create a world position from its components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Whether `other` lies within `tolerance` of `self`.
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        self.distance(other) < tolerance
    }
}

impl fmt::Display for WorldPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Rect ────────────────────────────────────────────────────────

/// An axis-aligned rectangle in world space, inclusive on all edges.
///
/// Used as the playable-region bound for grid snapping: snapped points
/// falling outside the rectangle are rejected so a drag endpoint cannot
/// escape the visible board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Minimum (bottom-left) corner.
    pub min: WorldPos,
    /// Maximum (top-right) corner.
    pub max: WorldPos,
}

impl Rect {
    /// Create a rectangle from its corners.
    pub const fn new(min: WorldPos, max: WorldPos) -> Self {
        Self { min, max }
    }

    /// Whether `p` lies inside the rectangle (edges inclusive).
    pub fn contains(&self, p: WorldPos) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Whether the rectangle has positive or zero extent on both axes.
    pub fn is_well_formed(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }
}
