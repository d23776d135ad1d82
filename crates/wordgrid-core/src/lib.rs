//! Core types for the wordgrid puzzle engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary used throughout the wordgrid workspace:
//! grid and world coordinates, the eight placement directions, and
//! strongly-typed word identifiers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod geom;
pub mod id;

pub use direction::Direction;
pub use geom::{GridPos, Rect, WorldPos};
pub use id::WordId;
