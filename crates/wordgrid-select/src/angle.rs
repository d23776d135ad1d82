//! The eight-direction canonical angle constraint.
//!
//! A selection segment is only representable when its heading lies
//! within a small tolerance of one of the eight canonical angles —
//! the same eight directions words are placed in.

use wordgrid_core::WorldPos;

/// The canonical headings in degrees. ±180 both appear so that a
/// westward segment passes regardless of the sign `atan2` reports.
pub const CANONICAL_ANGLES_DEG: [f64; 9] =
    [0.0, 45.0, 90.0, 135.0, 180.0, -45.0, -90.0, -135.0, -180.0];

/// Default tolerance around a canonical heading, in degrees.
pub const DEFAULT_ANGLE_TOLERANCE_DEG: f64 = 1.0;

/// Heading of the segment `from -> to` in degrees, via `atan2`.
///
/// A zero-length segment reports 0°, which counts as canonical: a drag
/// that has not left its anchor cell is always representable.
pub fn segment_angle_deg(from: WorldPos, to: WorldPos) -> f64 {
    (to.y - from.y).atan2(to.x - from.x).to_degrees()
}

/// Signed shortest angular difference `b - a`, wrapped to (-180, 180].
pub fn delta_angle_deg(a: f64, b: f64) -> f64 {
    let d = (b - a).rem_euclid(360.0);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

/// Whether `angle_deg` lies within `tolerance_deg` of a canonical heading.
pub fn is_canonical(angle_deg: f64, tolerance_deg: f64) -> bool {
    CANONICAL_ANGLES_DEG
        .iter()
        .any(|&canonical| delta_angle_deg(angle_deg, canonical).abs() <= tolerance_deg)
}

/// Whether the segment `from -> to` has a canonical heading.
pub fn is_canonical_segment(from: WorldPos, to: WorldPos, tolerance_deg: f64) -> bool {
    is_canonical(segment_angle_deg(from, to), tolerance_deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordgrid_core::direction::ALL_DIRECTIONS;

    #[test]
    fn all_eight_directions_pass_at_zero_deviation() {
        let origin = WorldPos::new(0.0, 0.0);
        for direction in ALL_DIRECTIONS {
            let (dx, dy) = direction.delta();
            let to = WorldPos::new(dx as f64 * 3.0, dy as f64 * 3.0);
            assert!(
                is_canonical_segment(origin, to, DEFAULT_ANGLE_TOLERANCE_DEG),
                "direction {direction} rejected"
            );
            assert!(is_canonical(direction.angle_deg(), 0.0));
        }
    }

    #[test]
    fn ten_degree_deviation_is_rejected() {
        // 10° off East and further from every other canonical heading.
        assert!(!is_canonical(10.0, DEFAULT_ANGLE_TOLERANCE_DEG));
        assert!(!is_canonical(-55.0, DEFAULT_ANGLE_TOLERANCE_DEG));
        assert!(!is_canonical(170.0, DEFAULT_ANGLE_TOLERANCE_DEG));
    }

    #[test]
    fn within_one_degree_is_accepted() {
        assert!(is_canonical(0.9, DEFAULT_ANGLE_TOLERANCE_DEG));
        assert!(is_canonical(-45.9, DEFAULT_ANGLE_TOLERANCE_DEG));
        assert!(is_canonical(179.5, DEFAULT_ANGLE_TOLERANCE_DEG));
        assert!(is_canonical(-179.5, DEFAULT_ANGLE_TOLERANCE_DEG));
    }

    #[test]
    fn delta_wraps_across_the_discontinuity() {
        assert!((delta_angle_deg(179.0, -179.0) - 2.0).abs() < 1e-12);
        assert!((delta_angle_deg(-179.0, 179.0) + 2.0).abs() < 1e-12);
        assert_eq!(delta_angle_deg(90.0, 90.0), 0.0);
    }

    #[test]
    fn zero_length_segment_is_canonical() {
        let p = WorldPos::new(2.0, 2.0);
        assert!(is_canonical_segment(p, p, DEFAULT_ANGLE_TOLERANCE_DEG));
    }
}
