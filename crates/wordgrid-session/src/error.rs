//! Error types for session configuration and lifecycle.

use std::fmt;
use wordgrid_board::BoardConfigError;

/// Errors detected during [`SessionConfig::validate()`](crate::SessionConfig::validate).
#[derive(Debug, PartialEq)]
pub enum SessionConfigError {
    /// The board configuration is invalid.
    Board(BoardConfigError),
    /// Grid spacing is not finite and positive.
    InvalidSpacing {
        /// The offending value.
        value: f64,
    },
    /// The playable-region rectangle is inverted.
    InvalidBounds,
    /// The angle tolerance is not finite and non-negative.
    InvalidAngleTolerance {
        /// The offending value.
        value: f64,
    },
    /// The match distance tolerance is not finite and positive.
    InvalidMatchTolerance {
        /// The offending value.
        value: f64,
    },
    /// A line-style field is not finite and non-negative.
    InvalidLineStyle {
        /// Description of which field was invalid.
        reason: String,
    },
}

impl fmt::Display for SessionConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Board(e) => write!(f, "board: {e}"),
            Self::InvalidSpacing { value } => {
                write!(f, "spacing must be finite and positive, got {value}")
            }
            Self::InvalidBounds => write!(f, "playable bounds rectangle is inverted"),
            Self::InvalidAngleTolerance { value } => {
                write!(f, "angle tolerance must be finite and >= 0, got {value}")
            }
            Self::InvalidMatchTolerance { value } => {
                write!(f, "match tolerance must be finite and positive, got {value}")
            }
            Self::InvalidLineStyle { reason } => write!(f, "invalid line style: {reason}"),
        }
    }
}

impl std::error::Error for SessionConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Board(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BoardConfigError> for SessionConfigError {
    fn from(e: BoardConfigError) -> Self {
        Self::Board(e)
    }
}

/// Errors from session lifecycle misuse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// `tick()` or a resolved-word query was called before
    /// `finish_layout()`.
    LayoutPending,
    /// `finish_layout()` was called a second time.
    LayoutAlreadyResolved,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LayoutPending => write!(f, "screen layout has not been resolved yet"),
            Self::LayoutAlreadyResolved => write!(f, "screen layout was already resolved"),
        }
    }
}

impl std::error::Error for SessionError {}
