//! Frame-driven puzzle session.
//!
//! [`PuzzleSession`] is the primary user-facing API. It wires the board
//! generator, drag tracker, line geometry, and match checker together
//! and is driven by the host one [`tick()`](PuzzleSession::tick) per
//! frame with the current pointer sample.
//!
//! # Two-phase start
//!
//! Construction generates the puzzle synchronously; screen-space word
//! endpoints can only exist once the host has laid the grid out, so
//! [`finish_layout()`](PuzzleSession::finish_layout) is a separate call
//! the host makes when layout has stabilized. Ticking before that
//! returns [`SessionError::LayoutPending`].
//!
//! # Ownership model
//!
//! The session owns all puzzle state and hands out references; the
//! match checker and drag tracker receive their data at construction.
//! There is no process-wide "current game" — hosts running two boards
//! simply hold two sessions.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod session;

pub use config::SessionConfig;
pub use error::{SessionConfigError, SessionError};
pub use session::{PuzzleSession, TickResult};
