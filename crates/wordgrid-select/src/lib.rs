//! Drag-selection geometry and match detection.
//!
//! Converts per-frame pointer samples into grid-aligned selection
//! segments and checks completed segments against the puzzle's placed
//! words:
//!
//! - [`GridSnapper`] — nearest-grid-point rounding with a bounds-checked
//!   variant that keeps drag endpoints on the visible board.
//! - [`angle`] — the eight-direction canonical angle constraint.
//! - [`DragTracker`] — the Idle/Dragging state machine fed one pointer
//!   sample per tick.
//! - [`LineSprite`] — display geometry for the connecting segment.
//! - [`MatchChecker`] — endpoint comparison against resolved words with
//!   a found-set so repeat discoveries stay idempotent.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod angle;
pub mod drag;
pub mod line;
pub mod matcher;
pub mod snap;

pub use drag::{DragSegment, DragState, DragTracker};
pub use line::{IdentityProjection, LineSprite, LineStyle, SurfaceProjection};
pub use matcher::{MatchChecker, MatchEvent};
pub use snap::{GridSnapper, SnapError};
