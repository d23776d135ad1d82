//! Wordgrid: a word-search puzzle engine.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all wordgrid sub-crates. For most users, adding `wordgrid` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use wordgrid::prelude::*;
//!
//! // Configure a 10x10 board with a fixed seed.
//! let mut board = BoardConfig::new(10, vec!["compass".into(), "needle".into()]);
//! board.seed = 7;
//!
//! // One world unit per cell, bounds half a cell past the edge.
//! let config = SessionConfig::new(
//!     board,
//!     WorldPos::new(0.0, 0.0),
//!     1.0,
//!     Rect::new(WorldPos::new(-0.5, -0.5), WorldPos::new(9.5, 9.5)),
//! );
//! let mut session = PuzzleSession::new(config).unwrap();
//!
//! // Second phase: the host's layout is final, resolve screen endpoints.
//! let layout = GridLayout::new(WorldPos::new(0.0, 0.0), 1.0).unwrap();
//! session.finish_layout(&layout).unwrap();
//!
//! // Drag along a placed word, one pointer sample per tick.
//! let word = session.resolved_words().unwrap()[0].clone();
//! session.tick(word.screen_start, false).unwrap();
//! session.tick(word.screen_start, true).unwrap();
//! session.tick(word.screen_end, true).unwrap();
//! let result = session.tick(word.screen_end, false).unwrap();
//! assert_eq!(result.matches[0].text, word.text);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `wordgrid-core` | Grid/world coordinates, directions, IDs |
//! | [`board`] | `wordgrid-board` | Board generation, placement, layout resolution |
//! | [`select`] | `wordgrid-select` | Snapping, drag tracking, line geometry, matching |
//! | [`session`] | `wordgrid-session` | The frame-driven [`session::PuzzleSession`] |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core coordinate and ID types (`wordgrid-core`).
///
/// Contains [`types::GridPos`], [`types::WorldPos`], [`types::Rect`],
/// the eight [`types::Direction`]s, and [`types::WordId`].
pub use wordgrid_core as types;

/// Board generation and word placement (`wordgrid-board`).
///
/// [`board::generate`] turns a [`board::BoardConfig`] into a
/// [`board::Puzzle`]; [`board::resolve_words`] converts placements into
/// screen-space endpoints once the host layout is final.
pub use wordgrid_board as board;

/// Drag-selection geometry and match detection (`wordgrid-select`).
///
/// [`select::GridSnapper`], [`select::DragTracker`],
/// [`select::LineSprite`], and [`select::MatchChecker`].
pub use wordgrid_select as select;

/// The frame-driven puzzle session (`wordgrid-session`).
///
/// [`session::PuzzleSession`] wires the sub-crates together behind a
/// single per-frame [`session::PuzzleSession::tick`] call.
pub use wordgrid_session as session;

/// Common imports for typical wordgrid usage.
///
/// ```rust
/// use wordgrid::prelude::*;
/// ```
///
/// This imports the most frequently used types: session and board
/// configuration, coordinates, the session itself, and the per-tick
/// result types.
pub mod prelude {
    // Coordinates and IDs
    pub use wordgrid_core::{Direction, GridPos, Rect, WordId, WorldPos};

    // Board generation
    pub use wordgrid_board::{
        BoardConfig, GenerationReport, GridLayout, PlacedWord, Puzzle, ResolvedWord,
    };

    // Errors
    pub use wordgrid_board::{BoardConfigError, LayoutError, PlacementError};
    pub use wordgrid_session::{SessionConfigError, SessionError};

    // Selection
    pub use wordgrid_select::{DragSegment, LineSprite, LineStyle, MatchEvent, SurfaceProjection};

    // Session
    pub use wordgrid_session::{PuzzleSession, SessionConfig, TickResult};
}
