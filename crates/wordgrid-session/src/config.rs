//! Session configuration, validation, and defaults.

use crate::error::SessionConfigError;
use std::fmt;
use wordgrid_board::BoardConfig;
use wordgrid_core::{Rect, WorldPos};
use wordgrid_select::angle::DEFAULT_ANGLE_TOLERANCE_DEG;
use wordgrid_select::line::{IdentityProjection, LineStyle, SurfaceProjection};
use wordgrid_select::matcher::DEFAULT_MATCH_TOLERANCE;

/// Complete configuration for constructing a [`PuzzleSession`](crate::PuzzleSession).
///
/// Plain public fields; [`validate()`](SessionConfig::validate) checks
/// all structural invariants at construction time.
pub struct SessionConfig {
    /// Board generation parameters (dimension, words, seed, ...).
    pub board: BoardConfig,
    /// World position of grid cell `(0, 0)`.
    pub origin: WorldPos,
    /// Distance between adjacent cell centres; also the snap spacing.
    pub spacing: f64,
    /// Playable region; snapped drag endpoints may not leave it.
    pub bounds: Rect,
    /// Tolerance around the eight canonical headings, degrees. Default: 1.
    pub angle_tolerance_deg: f64,
    /// Distance tolerance for endpoint matching. Default: 0.1.
    pub match_tolerance: f64,
    /// Visual tuning for the selection line.
    pub line: LineStyle,
    /// Projection from world space into the display surface's local
    /// space. Defaults to the identity.
    pub projection: Box<dyn SurfaceProjection>,
}

impl SessionConfig {
    /// Create a config with default tolerances, line style, and the
    /// identity projection.
    pub fn new(board: BoardConfig, origin: WorldPos, spacing: f64, bounds: Rect) -> Self {
        Self {
            board,
            origin,
            spacing,
            bounds,
            angle_tolerance_deg: DEFAULT_ANGLE_TOLERANCE_DEG,
            match_tolerance: DEFAULT_MATCH_TOLERANCE,
            line: LineStyle::default(),
            projection: Box::new(IdentityProjection),
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), SessionConfigError> {
        self.board.validate()?;
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(SessionConfigError::InvalidSpacing {
                value: self.spacing,
            });
        }
        if !self.bounds.is_well_formed() {
            return Err(SessionConfigError::InvalidBounds);
        }
        if !self.angle_tolerance_deg.is_finite() || self.angle_tolerance_deg < 0.0 {
            return Err(SessionConfigError::InvalidAngleTolerance {
                value: self.angle_tolerance_deg,
            });
        }
        if !self.match_tolerance.is_finite() || self.match_tolerance <= 0.0 {
            return Err(SessionConfigError::InvalidMatchTolerance {
                value: self.match_tolerance,
            });
        }
        if !self.line.overshoot.is_finite() || self.line.overshoot < 0.0 {
            return Err(SessionConfigError::InvalidLineStyle {
                reason: format!("overshoot must be finite and >= 0, got {}", self.line.overshoot),
            });
        }
        if !self.line.padding.is_finite() || self.line.padding < 0.0 {
            return Err(SessionConfigError::InvalidLineStyle {
                reason: format!("padding must be finite and >= 0, got {}", self.line.padding),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("board", &self.board)
            .field("origin", &self.origin)
            .field("spacing", &self.spacing)
            .field("bounds", &self.bounds)
            .field("angle_tolerance_deg", &self.angle_tolerance_deg)
            .field("match_tolerance", &self.match_tolerance)
            .field("line", &self.line)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordgrid_board::BoardConfigError;

    fn valid_config() -> SessionConfig {
        SessionConfig::new(
            BoardConfig::new(5, vec!["cat".into()]),
            WorldPos::new(0.0, 0.0),
            1.0,
            Rect::new(WorldPos::new(-0.5, -0.5), WorldPos::new(4.5, 4.5)),
        )
    }

    #[test]
    fn validate_valid_config_succeeds() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn validate_bad_board_fails() {
        let mut cfg = valid_config();
        cfg.board.size = 0;
        match cfg.validate() {
            Err(SessionConfigError::Board(BoardConfigError::EmptyGrid)) => {}
            other => panic!("expected Board(EmptyGrid), got {other:?}"),
        }
    }

    #[test]
    fn validate_bad_spacing_fails() {
        let mut cfg = valid_config();
        cfg.spacing = f64::NAN;
        match cfg.validate() {
            Err(SessionConfigError::InvalidSpacing { .. }) => {}
            other => panic!("expected InvalidSpacing, got {other:?}"),
        }
    }

    #[test]
    fn validate_inverted_bounds_fails() {
        let mut cfg = valid_config();
        cfg.bounds = Rect::new(WorldPos::new(1.0, 0.0), WorldPos::new(0.0, 1.0));
        match cfg.validate() {
            Err(SessionConfigError::InvalidBounds) => {}
            other => panic!("expected InvalidBounds, got {other:?}"),
        }
    }

    #[test]
    fn validate_negative_angle_tolerance_fails() {
        let mut cfg = valid_config();
        cfg.angle_tolerance_deg = -1.0;
        match cfg.validate() {
            Err(SessionConfigError::InvalidAngleTolerance { .. }) => {}
            other => panic!("expected InvalidAngleTolerance, got {other:?}"),
        }
    }

    #[test]
    fn validate_zero_match_tolerance_fails() {
        let mut cfg = valid_config();
        cfg.match_tolerance = 0.0;
        match cfg.validate() {
            Err(SessionConfigError::InvalidMatchTolerance { .. }) => {}
            other => panic!("expected InvalidMatchTolerance, got {other:?}"),
        }
    }

    #[test]
    fn validate_negative_overshoot_fails() {
        let mut cfg = valid_config();
        cfg.line.overshoot = -5.0;
        match cfg.validate() {
            Err(SessionConfigError::InvalidLineStyle { reason }) => {
                assert!(reason.contains("overshoot"));
            }
            other => panic!("expected InvalidLineStyle, got {other:?}"),
        }
    }
}
