//! The drag-gesture state machine.
//!
//! Fed one pointer sample per tick by the host. Two states:
//!
//! - **Idle**: the anchor endpoint tracks the snapped hover position.
//! - **Dragging** (entered on the pointer-down edge): the anchor holds
//!   its position and the tip follows the bounds-snapped pointer,
//!   updating only when the anchor-to-candidate heading passes the
//!   canonical angle constraint — otherwise the tip keeps its previous
//!   value for the frame.
//!
//! The pointer-up edge returns the completed [`DragSegment`] for match
//! checking, then the tracker re-enters Idle.

use crate::angle;
use crate::snap::GridSnapper;
use wordgrid_core::{Rect, WorldPos};

/// Gesture tracker state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragState {
    /// No button held; anchor follows the snapped hover position.
    Idle,
    /// Button held; tip follows the snapped, angle-constrained pointer.
    Dragging,
}

/// A completed selection segment, reported on the pointer-up edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSegment {
    /// Endpoint fixed at the start of the drag.
    pub anchor: WorldPos,
    /// Endpoint as of release.
    pub tip: WorldPos,
}

/// Converts per-tick pointer samples into grid-aligned drag segments.
///
/// Owns no word data; construction takes only the snapping geometry.
/// Both endpoints start at the grid origin.
#[derive(Clone, Debug)]
pub struct DragTracker {
    snapper: GridSnapper,
    bounds: Rect,
    angle_tolerance_deg: f64,
    state: DragState,
    anchor: WorldPos,
    tip: WorldPos,
    was_pressed: bool,
}

impl DragTracker {
    /// Create a tracker over the given snapping grid and playable bounds.
    pub fn new(snapper: GridSnapper, bounds: Rect, angle_tolerance_deg: f64) -> Self {
        let origin = snapper.origin();
        Self {
            snapper,
            bounds,
            angle_tolerance_deg,
            state: DragState::Idle,
            anchor: origin,
            tip: origin,
            was_pressed: false,
        }
    }

    /// Current state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Current anchor endpoint.
    pub fn anchor(&self) -> WorldPos {
        self.anchor
    }

    /// Current tip endpoint.
    pub fn tip(&self) -> WorldPos {
        self.tip
    }

    /// Advance one tick with the current pointer position and button
    /// state. Edges are detected internally; returns the completed
    /// segment on the pointer-up edge, captured before the tracker
    /// resumes hover tracking.
    pub fn update(&mut self, pointer: WorldPos, pressed: bool) -> Option<DragSegment> {
        let was_pressed = self.was_pressed;
        self.was_pressed = pressed;

        let mut completed = None;
        if pressed && !was_pressed {
            self.state = DragState::Dragging;
        } else if !pressed && was_pressed {
            if self.state == DragState::Dragging {
                completed = Some(DragSegment {
                    anchor: self.anchor,
                    tip: self.tip,
                });
            }
            self.state = DragState::Idle;
        }

        match self.state {
            DragState::Dragging => {
                if let Some(candidate) = self.snapper.snap_within(pointer, &self.bounds) {
                    if angle::is_canonical_segment(self.anchor, candidate, self.angle_tolerance_deg)
                    {
                        self.tip = candidate;
                    }
                }
                // The anchor was set while idle; keep it on-grid.
                if let Some(snapped) = self.snapper.snap_within(self.anchor, &self.bounds) {
                    self.anchor = snapped;
                }
            }
            DragState::Idle => {
                if let Some(snapped) = self.snapper.snap_within(pointer, &self.bounds) {
                    self.anchor = snapped;
                }
            }
        }

        completed
    }
}
