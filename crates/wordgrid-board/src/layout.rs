//! Screen-position resolution for placed words.
//!
//! Grid coordinates are converted to persistent screen/world endpoints
//! only after the host has laid out the tile grid — an explicit second
//! phase, not a scheduled callback. The host supplies the per-cell
//! position query as a [`CellLayout`]; [`GridLayout`] is the standard
//! fixed-origin, fixed-spacing implementation.

use crate::error::LayoutError;
use crate::placement::PlacedWord;
use wordgrid_core::{GridPos, WordId, WorldPos};

/// Per-cell world-position query, implemented by the host layout.
pub trait CellLayout {
    /// World position of the centre of `cell`.
    fn world_pos(&self, cell: GridPos) -> WorldPos;
}

/// A uniform grid layout: `origin + spacing * cell`, per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    /// World position of cell `(0, 0)`.
    pub origin: WorldPos,
    /// Distance between adjacent cell centres.
    pub spacing: f64,
}

impl GridLayout {
    /// Create a layout, validating the spacing.
    ///
    /// Returns `Err(LayoutError::InvalidSpacing)` unless `spacing` is
    /// finite and positive.
    pub fn new(origin: WorldPos, spacing: f64) -> Result<Self, LayoutError> {
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(LayoutError::InvalidSpacing { value: spacing });
        }
        Ok(Self { origin, spacing })
    }
}

impl CellLayout for GridLayout {
    fn world_pos(&self, cell: GridPos) -> WorldPos {
        WorldPos::new(
            self.origin.x + self.spacing * cell.x as f64,
            self.origin.y + self.spacing * cell.y as f64,
        )
    }
}

/// A placed word with resolved screen-space endpoints.
///
/// Immutable once resolved; read by the match checker for the life of
/// the session.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedWord {
    /// The word's placement ID.
    pub id: WordId,
    /// The word text as committed to the grid.
    pub text: String,
    /// Grid coordinate of the first letter.
    pub start: GridPos,
    /// Grid coordinate of the last letter.
    pub end: GridPos,
    /// Screen/world position of the first letter's tile.
    pub screen_start: WorldPos,
    /// Screen/world position of the last letter's tile.
    pub screen_end: WorldPos,
}

/// Resolve screen endpoints for every placement under `layout`.
///
/// Call once, after the host layout has stabilized.
pub fn resolve_words(placements: &[PlacedWord], layout: &dyn CellLayout) -> Vec<ResolvedWord> {
    placements
        .iter()
        .map(|placed| ResolvedWord {
            id: placed.id,
            text: placed.text.clone(),
            start: placed.start,
            end: placed.end,
            screen_start: layout.world_pos(placed.start),
            screen_end: layout.world_pos(placed.end),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::GridBuilder;
    use wordgrid_core::Direction;

    #[test]
    fn grid_layout_maps_cells_linearly() {
        let layout = GridLayout::new(WorldPos::new(-2.0, 4.0), 0.5).unwrap();
        assert_eq!(layout.world_pos(GridPos::new(0, 0)), WorldPos::new(-2.0, 4.0));
        assert_eq!(layout.world_pos(GridPos::new(2, 1)), WorldPos::new(-1.0, 4.5));
    }

    #[test]
    fn grid_layout_rejects_bad_spacing() {
        for spacing in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            match GridLayout::new(WorldPos::new(0.0, 0.0), spacing) {
                Err(LayoutError::InvalidSpacing { .. }) => {}
                other => panic!("expected InvalidSpacing for {spacing}, got {other:?}"),
            }
        }
    }

    #[test]
    fn resolve_words_projects_both_endpoints() {
        let mut builder = GridBuilder::new(5).unwrap();
        builder
            .place("CAT", GridPos::new(0, 0), Direction::East)
            .unwrap();
        let layout = GridLayout::new(WorldPos::new(0.0, 0.0), 1.0).unwrap();
        let resolved = resolve_words(builder.placements(), &layout);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].text, "CAT");
        assert_eq!(resolved[0].screen_start, WorldPos::new(0.0, 0.0));
        assert_eq!(resolved[0].screen_end, WorldPos::new(2.0, 0.0));
    }
}
