//! Low-level word placement onto a partially filled grid.
//!
//! [`GridBuilder`] is the placement surface shared by the randomized
//! generator and by callers that need forced placements (tests,
//! hand-authored puzzles). It tracks which cells are committed and
//! rejects runs that leave the grid or contradict an earlier letter.

use crate::board::Board;
use crate::error::{BoardConfigError, PlacementError};
use rand::prelude::*;
use smallvec::SmallVec;
use wordgrid_core::{Direction, GridPos, WordId};

/// A word committed to the grid.
///
/// Immutable once recorded. Screen-space endpoints are resolved
/// separately after host layout, see [`crate::layout`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedWord {
    /// Sequential ID in placement order.
    pub id: WordId,
    /// The word text as committed (letters match the grid cells).
    pub text: String,
    /// First cell of the run.
    pub start: GridPos,
    /// Last cell of the run.
    pub end: GridPos,
    /// Direction the run takes from `start` to `end`.
    pub direction: Direction,
}

impl PlacedWord {
    /// Number of cells the word covers.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Always `false`: empty words are rejected at placement.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The cells covered by the run, from `start` to `end`.
    pub fn path(&self) -> SmallVec<[GridPos; 16]> {
        (0..self.len() as i32)
            .map(|i| self.start.offset(self.direction, i))
            .collect()
    }
}

/// A partially filled grid accepting word placements.
///
/// Cells start unset; each successful [`place()`](GridBuilder::place)
/// commits the word's letters. [`finish()`](GridBuilder::finish) fills
/// the remaining cells with random letters and produces the immutable
/// [`Board`].
#[derive(Clone, Debug)]
pub struct GridBuilder {
    size: u32,
    cells: Vec<Option<char>>,
    placements: Vec<PlacedWord>,
}

impl GridBuilder {
    /// Create an empty builder for an N×N grid.
    ///
    /// Returns `Err(BoardConfigError::EmptyGrid)` for a zero dimension,
    /// or `Err(BoardConfigError::DimensionTooLarge)` when the dimension
    /// does not fit the `i32` coordinate range.
    pub fn new(size: u32) -> Result<Self, BoardConfigError> {
        if size == 0 {
            return Err(BoardConfigError::EmptyGrid);
        }
        if size > crate::BoardConfig::MAX_DIM {
            return Err(BoardConfigError::DimensionTooLarge {
                value: size,
                max: crate::BoardConfig::MAX_DIM,
            });
        }
        let n = (size as usize) * (size as usize);
        Ok(Self {
            size,
            cells: vec![None; n],
            placements: Vec::new(),
        })
    }

    /// Grid dimension N.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The committed letter at `pos`, if any.
    pub fn letter(&self, pos: GridPos) -> Option<char> {
        self.index(pos).and_then(|i| self.cells[i])
    }

    /// Words committed so far, in placement order.
    pub fn placements(&self) -> &[PlacedWord] {
        &self.placements
    }

    fn index(&self, pos: GridPos) -> Option<usize> {
        let n = self.size as i32;
        if pos.x < 0 || pos.x >= n || pos.y < 0 || pos.y >= n {
            return None;
        }
        Some((pos.y as usize) * (self.size as usize) + (pos.x as usize))
    }

    /// Try to commit `word` starting at `start` running in `direction`.
    ///
    /// The whole run is checked before anything is written: on any
    /// rejection the grid is unchanged, so a caller may retry freely.
    ///
    /// # Errors
    ///
    /// - [`PlacementError::EmptyWord`] when `word` has no letters.
    /// - [`PlacementError::OutOfBounds`] when the run leaves the grid.
    /// - [`PlacementError::Conflict`] when a covered cell already holds
    ///   a different letter.
    pub fn place(
        &mut self,
        word: &str,
        start: GridPos,
        direction: Direction,
    ) -> Result<WordId, PlacementError> {
        let letters: Vec<char> = word.chars().collect();
        if letters.is_empty() {
            return Err(PlacementError::EmptyWord);
        }
        let end = start.offset(direction, letters.len() as i32 - 1);
        if self.index(start).is_none() || self.index(end).is_none() {
            return Err(PlacementError::OutOfBounds { start, end });
        }

        // Check the whole run before committing anything.
        let mut indices = Vec::with_capacity(letters.len());
        for (i, &wanted) in letters.iter().enumerate() {
            let pos = start.offset(direction, i as i32);
            let idx = self.index(pos).ok_or(PlacementError::OutOfBounds { start, end })?;
            if let Some(existing) = self.cells[idx] {
                if existing != wanted {
                    return Err(PlacementError::Conflict {
                        pos,
                        existing,
                        wanted,
                    });
                }
            }
            indices.push(idx);
        }

        for (idx, &letter) in indices.into_iter().zip(letters.iter()) {
            self.cells[idx] = Some(letter);
        }

        let id = WordId(self.placements.len() as u32);
        self.placements.push(PlacedWord {
            id,
            text: word.to_string(),
            start,
            end,
            direction,
        });
        Ok(id)
    }

    /// Fill every unset cell with a random letter from `alphabet` and
    /// produce the immutable board plus the placement list.
    ///
    /// Returns `Err(BoardConfigError::EmptyAlphabet)` if there is
    /// nothing to fill with.
    pub fn finish<R: Rng>(
        self,
        rng: &mut R,
        alphabet: &[char],
    ) -> Result<(Board, Vec<PlacedWord>), BoardConfigError> {
        if alphabet.is_empty() {
            return Err(BoardConfigError::EmptyAlphabet);
        }
        let cells: Vec<char> = self
            .cells
            .into_iter()
            .map(|cell| match cell {
                Some(letter) => letter,
                None => alphabet[rng.random_range(0..alphabet.len())],
            })
            .collect();
        Ok((Board::new(self.size, cells), self.placements))
    }
}
