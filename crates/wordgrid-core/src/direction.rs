//! The eight canonical placement and selection directions.

use std::fmt;

/// All 8 directions in placement-table order: E, W, N, S, NE, NW, SE, SW.
pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::East,
    Direction::West,
    Direction::North,
    Direction::South,
    Direction::NorthEast,
    Direction::NorthWest,
    Direction::SouthEast,
    Direction::SouthWest,
];

/// One of the eight directions a word may run in on the grid.
///
/// Four axis-aligned and four diagonal. `y` grows northward, matching
/// the world-space convention used for tile layout, so `North` is
/// `(0, 1)` and `South` is `(0, -1)`.
///
/// These are exactly the directions a drag selection may take: the
/// angle constraint in `wordgrid-select` admits only segments within
/// tolerance of one of these eight headings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `(1, 0)` — left to right.
    East,
    /// `(-1, 0)` — right to left.
    West,
    /// `(0, 1)` — upward.
    North,
    /// `(0, -1)` — downward.
    South,
    /// `(1, 1)` diagonal.
    NorthEast,
    /// `(-1, 1)` diagonal.
    NorthWest,
    /// `(1, -1)` diagonal.
    SouthEast,
    /// `(-1, -1)` diagonal.
    SouthWest,
}

impl Direction {
    /// Per-cell `(dx, dy)` step for this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::East => (1, 0),
            Self::West => (-1, 0),
            Self::North => (0, 1),
            Self::South => (0, -1),
            Self::NorthEast => (1, 1),
            Self::NorthWest => (-1, 1),
            Self::SouthEast => (1, -1),
            Self::SouthWest => (-1, -1),
        }
    }

    /// Heading of this direction in degrees, as `atan2(dy, dx)` would
    /// report it: East is 0°, North 90°, West 180°, South -90°.
    pub fn angle_deg(self) -> f64 {
        let (dx, dy) = self.delta();
        (dy as f64).atan2(dx as f64).to_degrees()
    }

    /// Compass abbreviation, e.g. `"NE"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::East => "E",
            Self::West => "W",
            Self::North => "N",
            Self::South => "S",
            Self::NorthEast => "NE",
            Self::NorthWest => "NW",
            Self::SouthEast => "SE",
            Self::SouthWest => "SW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_directions_are_distinct_unit_steps() {
        for (i, a) in ALL_DIRECTIONS.iter().enumerate() {
            let (dx, dy) = a.delta();
            assert!(dx.abs() <= 1 && dy.abs() <= 1);
            assert!((dx, dy) != (0, 0));
            for b in &ALL_DIRECTIONS[i + 1..] {
                assert_ne!(a.delta(), b.delta());
            }
        }
    }

    #[test]
    fn cardinal_angles() {
        assert_eq!(Direction::East.angle_deg(), 0.0);
        assert_eq!(Direction::North.angle_deg(), 90.0);
        assert_eq!(Direction::West.angle_deg(), 180.0);
        assert_eq!(Direction::South.angle_deg(), -90.0);
    }

    #[test]
    fn diagonal_angles() {
        assert!((Direction::NorthEast.angle_deg() - 45.0).abs() < 1e-12);
        assert!((Direction::SouthWest.angle_deg() - -135.0).abs() < 1e-12);
    }
}
