//! Display geometry for the selection line.
//!
//! The host renders the connecting segment from a [`LineSprite`]:
//! an anchored position, a length, and a rotation. The sprite is
//! computed in the display surface's local coordinate space; hosts
//! whose surface is not world-aligned supply a [`SurfaceProjection`].

use wordgrid_core::WorldPos;

/// Default overshoot distance behind the segment start.
pub const DEFAULT_OVERSHOOT: f64 = 25.0;

/// Default visual padding added to the segment length.
pub const DEFAULT_PADDING: f64 = 25.0;

/// Visual tuning for the selection line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    /// Distance the sprite extends behind the start point, along the
    /// reversed direction vector.
    pub overshoot: f64,
    /// Extra length added beyond the overshoot-adjusted distance.
    pub padding: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            overshoot: DEFAULT_OVERSHOOT,
            padding: DEFAULT_PADDING,
        }
    }
}

/// Projects world-space points into the display surface's local space.
pub trait SurfaceProjection {
    /// Local position of the world-space point `p`.
    fn project(&self, p: WorldPos) -> WorldPos;
}

/// The trivial projection for hosts whose surface is world-aligned.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityProjection;

impl SurfaceProjection for IdentityProjection {
    fn project(&self, p: WorldPos) -> WorldPos {
        p
    }
}

/// Placement of the selection-line sprite in surface-local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSprite {
    /// Anchored position: the start point pushed back by the overshoot.
    pub anchor: WorldPos,
    /// Sprite length along its rotated axis.
    pub length: f64,
    /// Rotation in degrees, the heading of the segment.
    pub angle_deg: f64,
}

impl LineSprite {
    /// The collapsed sprite shown when no drag is in progress.
    pub fn hidden() -> Self {
        Self {
            anchor: WorldPos::new(0.0, 0.0),
            length: 0.0,
            angle_deg: 0.0,
        }
    }

    /// Whether the sprite is collapsed.
    pub fn is_hidden(&self) -> bool {
        self.length == 0.0
    }

    /// Geometry for a segment from `a` to `b` in surface-local space.
    ///
    /// The anchor is `a` pushed back by `style.overshoot` along the
    /// reversed direction; the length spans from there to `b` plus
    /// `style.padding`. A zero-length segment uses a zero direction
    /// vector, leaving the anchor at `a`.
    pub fn between(a: WorldPos, b: WorldPos, style: &LineStyle) -> Self {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let distance = a.distance(b);
        let (nx, ny) = if distance > 0.0 {
            (dx / distance, dy / distance)
        } else {
            (0.0, 0.0)
        };
        let anchor = WorldPos::new(a.x - nx * style.overshoot, a.y - ny * style.overshoot);
        Self {
            anchor,
            length: anchor.distance(b) + style.padding,
            angle_deg: dy.atan2(dx).to_degrees(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(overshoot: f64, padding: f64) -> LineStyle {
        LineStyle { overshoot, padding }
    }

    #[test]
    fn horizontal_segment_geometry() {
        let sprite = LineSprite::between(
            WorldPos::new(0.0, 0.0),
            WorldPos::new(10.0, 0.0),
            &style(2.0, 3.0),
        );
        assert_eq!(sprite.anchor, WorldPos::new(-2.0, 0.0));
        assert!((sprite.length - 15.0).abs() < 1e-12);
        assert_eq!(sprite.angle_deg, 0.0);
    }

    #[test]
    fn diagonal_segment_rotation() {
        let sprite = LineSprite::between(
            WorldPos::new(0.0, 0.0),
            WorldPos::new(1.0, 1.0),
            &LineStyle::default(),
        );
        assert!((sprite.angle_deg - 45.0).abs() < 1e-9);
    }

    #[test]
    fn overshoot_extends_behind_the_start() {
        let sprite = LineSprite::between(
            WorldPos::new(0.0, 0.0),
            WorldPos::new(0.0, 5.0),
            &style(1.0, 0.0),
        );
        assert_eq!(sprite.anchor, WorldPos::new(0.0, -1.0));
        assert!((sprite.length - 6.0).abs() < 1e-12);
        assert!((sprite.angle_deg - 90.0).abs() < 1e-9);
    }

    #[test]
    fn zero_length_segment_stays_at_start() {
        let p = WorldPos::new(3.0, 4.0);
        let sprite = LineSprite::between(p, p, &style(2.0, 5.0));
        assert_eq!(sprite.anchor, p);
        assert!((sprite.length - 5.0).abs() < 1e-12);
        assert_eq!(sprite.angle_deg, 0.0);
    }

    #[test]
    fn hidden_sprite_is_collapsed() {
        let sprite = LineSprite::hidden();
        assert!(sprite.is_hidden());
        assert_eq!(sprite.length, 0.0);
    }

    #[test]
    fn identity_projection_passes_through() {
        let p = WorldPos::new(-7.0, 2.5);
        assert_eq!(IdentityProjection.project(p), p);
    }
}
