//! Error types for board configuration, placement, and layout.

use std::fmt;
use wordgrid_core::GridPos;

/// Errors detected during [`BoardConfig::validate()`](crate::BoardConfig::validate).
#[derive(Clone, Debug, PartialEq)]
pub enum BoardConfigError {
    /// Grid dimension is zero.
    EmptyGrid,
    /// Grid dimension exceeds the coordinate range.
    DimensionTooLarge {
        /// The configured dimension.
        value: u32,
        /// The maximum supported dimension.
        max: u32,
    },
    /// The filler alphabet is empty.
    EmptyAlphabet,
    /// The placement retry bound is zero.
    ZeroAttempts,
    /// A configured word is empty.
    EmptyWord {
        /// Index of the offending word in the configured list.
        index: usize,
    },
}

impl fmt::Display for BoardConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { value, max } => {
                write!(f, "grid dimension {value} exceeds maximum {max}")
            }
            Self::EmptyAlphabet => write!(f, "filler alphabet must not be empty"),
            Self::ZeroAttempts => write!(f, "max_attempts must be at least 1"),
            Self::EmptyWord { index } => write!(f, "word at index {index} is empty"),
        }
    }
}

impl std::error::Error for BoardConfigError {}

/// Errors from a single placement attempt on a [`GridBuilder`](crate::GridBuilder).
///
/// These are rejection signals, not failures: the randomized generator
/// treats them as "try another start/direction".
#[derive(Clone, Debug, PartialEq)]
pub enum PlacementError {
    /// The word has no letters.
    EmptyWord,
    /// The run of cells leaves the grid.
    OutOfBounds {
        /// First cell of the run.
        start: GridPos,
        /// Last cell of the run.
        end: GridPos,
    },
    /// A covered cell already holds a different letter.
    Conflict {
        /// The conflicting cell.
        pos: GridPos,
        /// Letter already committed at that cell.
        existing: char,
        /// Letter the word needs there.
        wanted: char,
    },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWord => write!(f, "cannot place an empty word"),
            Self::OutOfBounds { start, end } => {
                write!(f, "run {start} -> {end} leaves the grid")
            }
            Self::Conflict {
                pos,
                existing,
                wanted,
            } => {
                write!(f, "cell {pos} holds '{existing}', word needs '{wanted}'")
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// Errors from [`GridLayout`](crate::GridLayout) construction.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutError {
    /// Spacing is not finite and positive.
    InvalidSpacing {
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSpacing { value } => {
                write!(f, "spacing must be finite and positive, got {value}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
