//! Match detection for completed drag segments.

use crate::drag::DragSegment;
use indexmap::IndexSet;
use wordgrid_board::ResolvedWord;
use wordgrid_core::WordId;

/// Default distance tolerance for endpoint comparison.
pub const DEFAULT_MATCH_TOLERANCE: f64 = 0.1;

/// A word discovered by a completed drag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchEvent {
    /// The word's placement ID.
    pub id: WordId,
    /// The word text.
    pub text: String,
}

/// Compares completed segments against the puzzle's resolved words.
///
/// A segment matches a word when its endpoints approximately equal the
/// word's screen endpoints in either order. Every distinct word
/// matching one release is reported; repeat discoveries of an
/// already-found word are suppressed via an insertion-ordered
/// found-set, so discovery is idempotent.
///
/// Receives the word list at construction — there is no global puzzle
/// registry to consult.
#[derive(Clone, Debug)]
pub struct MatchChecker {
    words: Vec<ResolvedWord>,
    tolerance: f64,
    found: IndexSet<WordId>,
}

impl MatchChecker {
    /// Create a checker over `words` with the given distance tolerance.
    pub fn new(words: Vec<ResolvedWord>, tolerance: f64) -> Self {
        Self {
            words,
            tolerance,
            found: IndexSet::new(),
        }
    }

    /// The words under consideration.
    pub fn words(&self) -> &[ResolvedWord] {
        &self.words
    }

    /// IDs of found words, in discovery order.
    pub fn found(&self) -> impl Iterator<Item = WordId> + '_ {
        self.found.iter().copied()
    }

    /// Whether `id` has already been found.
    pub fn is_found(&self, id: WordId) -> bool {
        self.found.contains(&id)
    }

    /// Evaluate a completed segment, reporting newly found words.
    pub fn check(&mut self, segment: &DragSegment) -> Vec<MatchEvent> {
        let mut events = Vec::new();
        for word in &self.words {
            let forward = word.screen_start.approx_eq(segment.anchor, self.tolerance)
                && word.screen_end.approx_eq(segment.tip, self.tolerance);
            let reverse = word.screen_start.approx_eq(segment.tip, self.tolerance)
                && word.screen_end.approx_eq(segment.anchor, self.tolerance);
            if (forward || reverse) && self.found.insert(word.id) {
                events.push(MatchEvent {
                    id: word.id,
                    text: word.text.clone(),
                });
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordgrid_core::{GridPos, WorldPos};

    fn word(id: u32, text: &str, start: (f64, f64), end: (f64, f64)) -> ResolvedWord {
        ResolvedWord {
            id: WordId(id),
            text: text.to_string(),
            start: GridPos::new(0, 0),
            end: GridPos::new(0, 0),
            screen_start: WorldPos::new(start.0, start.1),
            screen_end: WorldPos::new(end.0, end.1),
        }
    }

    fn segment(anchor: (f64, f64), tip: (f64, f64)) -> DragSegment {
        DragSegment {
            anchor: WorldPos::new(anchor.0, anchor.1),
            tip: WorldPos::new(tip.0, tip.1),
        }
    }

    #[test]
    fn matches_forward_endpoint_order() {
        let mut checker = MatchChecker::new(
            vec![word(0, "CAT", (0.0, 0.0), (2.0, 0.0))],
            DEFAULT_MATCH_TOLERANCE,
        );
        let events = checker.check(&segment((0.0, 0.0), (2.0, 0.0)));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].text, "CAT");
    }

    #[test]
    fn matches_reverse_endpoint_order() {
        let mut checker = MatchChecker::new(
            vec![word(0, "CAT", (0.0, 0.0), (2.0, 0.0))],
            DEFAULT_MATCH_TOLERANCE,
        );
        let events = checker.check(&segment((2.0, 0.0), (0.0, 0.0)));
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn matches_within_tolerance_only() {
        let mut checker = MatchChecker::new(
            vec![word(0, "CAT", (0.0, 0.0), (2.0, 0.0))],
            DEFAULT_MATCH_TOLERANCE,
        );
        assert_eq!(
            checker.check(&segment((0.05, 0.05), (2.0, -0.05))).len(),
            1
        );
        assert!(checker
            .check(&segment((0.0, 0.2), (2.0, 0.0)))
            .is_empty());
    }

    #[test]
    fn near_miss_on_one_endpoint_is_no_match() {
        let mut checker = MatchChecker::new(
            vec![word(0, "CAT", (0.0, 0.0), (2.0, 0.0))],
            DEFAULT_MATCH_TOLERANCE,
        );
        assert!(checker.check(&segment((0.0, 0.0), (3.0, 0.0))).is_empty());
    }

    #[test]
    fn all_simultaneous_matches_are_reported() {
        // Two words sharing both endpoints (same run, both orientations).
        let mut checker = MatchChecker::new(
            vec![
                word(0, "DRAW", (0.0, 0.0), (3.0, 0.0)),
                word(1, "WARD", (3.0, 0.0), (0.0, 0.0)),
            ],
            DEFAULT_MATCH_TOLERANCE,
        );
        let events = checker.check(&segment((0.0, 0.0), (3.0, 0.0)));
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn repeat_discovery_is_suppressed() {
        let mut checker = MatchChecker::new(
            vec![word(0, "CAT", (0.0, 0.0), (2.0, 0.0))],
            DEFAULT_MATCH_TOLERANCE,
        );
        assert_eq!(checker.check(&segment((0.0, 0.0), (2.0, 0.0))).len(), 1);
        assert!(checker.check(&segment((0.0, 0.0), (2.0, 0.0))).is_empty());
        assert!(checker.check(&segment((2.0, 0.0), (0.0, 0.0))).is_empty());
        assert!(checker.is_found(WordId(0)));
        assert_eq!(checker.found().collect::<Vec<_>>(), vec![WordId(0)]);
    }
}
