//! Reusable configuration fixtures.
//!
//! Standard setups for session and board tests:
//!
//! - [`unit_layout`] — origin `(0, 0)`, spacing `1`, so grid and world
//!   coordinates coincide.
//! - [`small_board_config`] — an 8x8 board with a few short words and a
//!   fixed seed.
//! - [`small_session_config`] — the matching session config with bounds
//!   half a cell beyond the board edge.

use wordgrid_board::{BoardConfig, GridLayout};
use wordgrid_core::{Rect, WorldPos};
use wordgrid_session::SessionConfig;

/// Layout where cell `(x, y)` sits at world `(x, y)`.
pub fn unit_layout() -> GridLayout {
    GridLayout::new(WorldPos::new(0.0, 0.0), 1.0)
        .unwrap_or_else(|e| panic!("unit layout must be valid: {e}"))
}

/// An 8x8 board with a fixed seed and words short enough to always fit.
pub fn small_board_config() -> BoardConfig {
    let mut config = BoardConfig::new(
        8,
        vec!["cat".into(), "dog".into(), "fish".into(), "heron".into()],
    );
    config.seed = 42;
    config
}

/// Session config matching [`small_board_config`] under [`unit_layout`],
/// with default tolerances and bounds half a cell past the board edge.
pub fn small_session_config() -> SessionConfig {
    SessionConfig::new(
        small_board_config(),
        WorldPos::new(0.0, 0.0),
        1.0,
        Rect::new(WorldPos::new(-0.5, -0.5), WorldPos::new(7.5, 7.5)),
    )
}
