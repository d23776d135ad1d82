//! Board generation and word placement for the wordgrid puzzle engine.
//!
//! The pipeline has two explicit phases:
//!
//! 1. [`generate()`] consumes a validated [`BoardConfig`] and produces a
//!    [`Puzzle`]: a fully lettered [`Board`], the list of
//!    [`PlacedWord`]s, and a [`GenerationReport`] describing any words
//!    that could not be placed.
//! 2. Once the host has laid out the grid on screen,
//!    [`resolve_words()`](layout::resolve_words) converts grid
//!    coordinates into persistent screen-space endpoints
//!    ([`ResolvedWord`]) for match checking.
//!
//! Placement is best-effort: a word that cannot be placed within the
//! retry bound is dropped and recorded in the report, never an error.
//!
//! Generation is deterministic: the RNG is a ChaCha8 stream seeded from
//! `config.seed`, so identical configs produce identical puzzles.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod config;
pub mod error;
pub mod generate;
pub mod layout;
pub mod placement;

pub use board::Board;
pub use config::BoardConfig;
pub use error::{BoardConfigError, LayoutError, PlacementError};
pub use generate::{generate, GenerationReport, Puzzle};
pub use layout::{resolve_words, CellLayout, GridLayout, ResolvedWord};
pub use placement::{GridBuilder, PlacedWord};
