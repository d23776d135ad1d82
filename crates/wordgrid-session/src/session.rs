//! The session object and its per-tick result.

use crate::config::SessionConfig;
use crate::error::{SessionConfigError, SessionError};
use std::fmt;
use wordgrid_board::{
    generate, resolve_words, Board, CellLayout, GenerationReport, PlacedWord, Puzzle, ResolvedWord,
};
use wordgrid_core::{WordId, WorldPos};
use wordgrid_select::drag::DragTracker;
use wordgrid_select::line::{LineSprite, LineStyle, SurfaceProjection};
use wordgrid_select::matcher::{MatchChecker, MatchEvent};
use wordgrid_select::snap::{GridSnapper, SnapError};

/// What one tick produced: render geometry and any newly found words.
#[derive(Clone, Debug, PartialEq)]
pub struct TickResult {
    /// Selection-line geometry for this frame. Collapsed while no drag
    /// is in progress.
    pub line: LineSprite,
    /// Words newly discovered by a drag completed this tick.
    pub matches: Vec<MatchEvent>,
}

/// One running puzzle: generated board, gesture tracking, and match
/// state, driven by the host one tick per frame.
///
/// Construction generates the puzzle; [`finish_layout()`](Self::finish_layout)
/// resolves screen endpoints once the host layout is final. Only then
/// does [`tick()`](Self::tick) accept pointer samples.
pub struct PuzzleSession {
    puzzle: Puzzle,
    tracker: DragTracker,
    checker: Option<MatchChecker>,
    line_style: LineStyle,
    match_tolerance: f64,
    projection: Box<dyn SurfaceProjection>,
}

impl PuzzleSession {
    /// Validate `config` and generate the puzzle.
    pub fn new(config: SessionConfig) -> Result<Self, SessionConfigError> {
        config.validate()?;
        let puzzle = generate(&config.board)?;
        let snapper = GridSnapper::new(config.origin, config.spacing)
            .map_err(|SnapError::InvalidSpacing { value }| SessionConfigError::InvalidSpacing {
                value,
            })?;
        let tracker = DragTracker::new(snapper, config.bounds, config.angle_tolerance_deg);
        Ok(Self {
            puzzle,
            tracker,
            checker: None,
            line_style: config.line,
            match_tolerance: config.match_tolerance,
            projection: config.projection,
        })
    }

    /// Resolve screen endpoints for every placed word under `layout`
    /// and arm the match checker.
    ///
    /// Returns [`SessionError::LayoutAlreadyResolved`] on a second call;
    /// resolved endpoints are immutable for the life of the session.
    pub fn finish_layout(&mut self, layout: &dyn CellLayout) -> Result<(), SessionError> {
        if self.checker.is_some() {
            return Err(SessionError::LayoutAlreadyResolved);
        }
        let words = resolve_words(&self.puzzle.placements, layout);
        self.checker = Some(MatchChecker::new(words, self.match_tolerance));
        Ok(())
    }

    /// Advance one frame with the current pointer position and button
    /// state.
    ///
    /// Returns [`SessionError::LayoutPending`] until
    /// [`finish_layout()`](Self::finish_layout) has been called.
    pub fn tick(&mut self, pointer: WorldPos, pressed: bool) -> Result<TickResult, SessionError> {
        let checker = self.checker.as_mut().ok_or(SessionError::LayoutPending)?;

        let completed = self.tracker.update(pointer, pressed);
        let matches = match completed {
            Some(segment) => checker.check(&segment),
            None => Vec::new(),
        };

        let line = if self.tracker.is_dragging() {
            LineSprite::between(
                self.projection.project(self.tracker.tip()),
                self.projection.project(self.tracker.anchor()),
                &self.line_style,
            )
        } else {
            LineSprite::hidden()
        };

        Ok(TickResult { line, matches })
    }

    /// The generated board.
    pub fn board(&self) -> &Board {
        &self.puzzle.board
    }

    /// Successfully placed words in placement order.
    pub fn placements(&self) -> &[PlacedWord] {
        &self.puzzle.placements
    }

    /// What happened during generation.
    pub fn report(&self) -> &GenerationReport {
        &self.puzzle.report
    }

    /// Words with resolved screen endpoints.
    ///
    /// Returns [`SessionError::LayoutPending`] until layout has been
    /// resolved.
    pub fn resolved_words(&self) -> Result<&[ResolvedWord], SessionError> {
        self.checker
            .as_ref()
            .map(|c| c.words())
            .ok_or(SessionError::LayoutPending)
    }

    /// IDs of found words, in discovery order. Empty until layout has
    /// been resolved.
    pub fn found(&self) -> Vec<WordId> {
        match &self.checker {
            Some(checker) => checker.found().collect(),
            None => Vec::new(),
        }
    }
}

impl fmt::Debug for PuzzleSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PuzzleSession")
            .field("puzzle", &self.puzzle)
            .field("tracker", &self.tracker)
            .field("checker", &self.checker)
            .field("line_style", &self.line_style)
            .field("match_tolerance", &self.match_tolerance)
            .finish()
    }
}
