//! Nearest-grid-point snapping.

use std::fmt;
use wordgrid_core::{Rect, WorldPos};

/// Errors from [`GridSnapper`] construction.
#[derive(Clone, Debug, PartialEq)]
pub enum SnapError {
    /// Spacing is not finite and positive.
    InvalidSpacing {
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for SnapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSpacing { value } => {
                write!(f, "spacing must be finite and positive, got {value}")
            }
        }
    }
}

impl std::error::Error for SnapError {}

/// Maps continuous positions to the nearest point on a fixed-origin,
/// fixed-spacing grid.
///
/// Snapping is per axis: `round((pos - origin) / spacing) * spacing +
/// origin`. The function is idempotent — snapping an already-snapped
/// point returns the same point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSnapper {
    origin: WorldPos,
    spacing: f64,
}

impl GridSnapper {
    /// Create a snapper, validating the spacing.
    pub fn new(origin: WorldPos, spacing: f64) -> Result<Self, SnapError> {
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(SnapError::InvalidSpacing { value: spacing });
        }
        Ok(Self { origin, spacing })
    }

    /// The grid origin.
    pub fn origin(&self) -> WorldPos {
        self.origin
    }

    /// The grid spacing.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Snap `p` to the nearest grid point.
    pub fn snap(&self, p: WorldPos) -> WorldPos {
        WorldPos::new(self.snap_axis(p.x, self.origin.x), self.snap_axis(p.y, self.origin.y))
    }

    /// Snap `p` and reject the result if it falls outside `bounds`.
    ///
    /// This is the variant used for drag endpoints: it prevents the
    /// selection from escaping the playable region. Returns `None`
    /// when the snapped point is out of bounds.
    pub fn snap_within(&self, p: WorldPos, bounds: &Rect) -> Option<WorldPos> {
        let snapped = self.snap(p);
        if bounds.contains(snapped) {
            Some(snapped)
        } else {
            None
        }
    }

    fn snap_axis(&self, pos: f64, origin: f64) -> f64 {
        ((pos - origin) / self.spacing).round() * self.spacing + origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn snapper(ox: f64, oy: f64, spacing: f64) -> GridSnapper {
        GridSnapper::new(WorldPos::new(ox, oy), spacing).unwrap()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_rejects_bad_spacing() {
        for spacing in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            match GridSnapper::new(WorldPos::new(0.0, 0.0), spacing) {
                Err(SnapError::InvalidSpacing { .. }) => {}
                other => panic!("expected InvalidSpacing for {spacing}, got {other:?}"),
            }
        }
    }

    // ── Snapping ────────────────────────────────────────────────

    #[test]
    fn snaps_to_nearest_point() {
        let s = snapper(0.0, 0.0, 1.0);
        assert_eq!(s.snap(WorldPos::new(0.4, 0.6)), WorldPos::new(0.0, 1.0));
        assert_eq!(s.snap(WorldPos::new(-1.4, 2.5)), WorldPos::new(-1.0, 3.0));
    }

    #[test]
    fn snap_respects_offset_origin() {
        let s = snapper(-2.685, 4.25, 0.95);
        let snapped = s.snap(WorldPos::new(-2.5, 4.0));
        assert_eq!(snapped, WorldPos::new(-2.685, 4.25));
    }

    #[test]
    fn snap_within_rejects_outside_bounds() {
        let s = snapper(0.0, 0.0, 1.0);
        let bounds = Rect::new(WorldPos::new(-3.0, -5.0), WorldPos::new(6.0, 5.0));
        assert_eq!(
            s.snap_within(WorldPos::new(5.9, 0.1), &bounds),
            Some(WorldPos::new(6.0, 0.0))
        );
        assert_eq!(s.snap_within(WorldPos::new(6.6, 0.0), &bounds), None);
        assert_eq!(s.snap_within(WorldPos::new(0.0, -5.6), &bounds), None);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn snap_is_idempotent(
            px in -1000.0f64..1000.0, py in -1000.0f64..1000.0,
            ox in -10.0f64..10.0, oy in -10.0f64..10.0,
            spacing in 0.05f64..10.0,
        ) {
            let s = snapper(ox, oy, spacing);
            let once = s.snap(WorldPos::new(px, py));
            let twice = s.snap(once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn snapped_point_is_closest_on_each_axis(
            px in -100.0f64..100.0, py in -100.0f64..100.0,
            spacing in 0.1f64..5.0,
        ) {
            let s = snapper(0.0, 0.0, spacing);
            let snapped = s.snap(WorldPos::new(px, py));
            prop_assert!((snapped.x - px).abs() <= spacing / 2.0 + 1e-9);
            prop_assert!((snapped.y - py).abs() <= spacing / 2.0 + 1e-9);
        }

        #[test]
        fn snap_within_never_escapes_bounds(
            px in -50.0f64..50.0, py in -50.0f64..50.0,
        ) {
            let s = snapper(0.0, 0.0, 0.95);
            let bounds = Rect::new(WorldPos::new(-3.0, -5.0), WorldPos::new(6.0, 5.0));
            if let Some(snapped) = s.snap_within(WorldPos::new(px, py), &bounds) {
                prop_assert!(bounds.contains(snapped));
            }
        }
    }
}
