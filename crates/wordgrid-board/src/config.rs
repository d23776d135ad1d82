//! Board generation configuration and validation.

use crate::error::BoardConfigError;

/// Default placement retry bound per word.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Complete configuration for generating one puzzle board.
///
/// Plain data with public fields; [`validate()`](BoardConfig::validate)
/// checks all structural invariants before generation. Words are
/// uppercased during generation, so the configured list may be mixed
/// case. Duplicate words are allowed and place independently.
#[derive(Clone, Debug)]
pub struct BoardConfig {
    /// Grid dimension N: the board is N×N cells.
    pub size: u32,
    /// Words to hide in the grid.
    pub words: Vec<String>,
    /// Letters used to fill cells not covered by any word.
    pub alphabet: Vec<char>,
    /// Placement attempts per word before the word is dropped.
    pub max_attempts: u32,
    /// RNG seed. Identical configs with identical seeds produce
    /// identical puzzles.
    pub seed: u64,
}

impl BoardConfig {
    /// Maximum grid dimension: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a config with the default alphabet (`A`–`Z`), the default
    /// retry bound, and seed 0.
    pub fn new(size: u32, words: Vec<String>) -> Self {
        Self {
            size,
            words,
            alphabet: ('A'..='Z').collect(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: 0,
        }
    }

    /// Validate all structural invariants.
    ///
    /// An empty word list is fine (the board is pure filler); an empty
    /// word is not, since it can never form a run of cells.
    pub fn validate(&self) -> Result<(), BoardConfigError> {
        if self.size == 0 {
            return Err(BoardConfigError::EmptyGrid);
        }
        if self.size > Self::MAX_DIM {
            return Err(BoardConfigError::DimensionTooLarge {
                value: self.size,
                max: Self::MAX_DIM,
            });
        }
        if self.alphabet.is_empty() {
            return Err(BoardConfigError::EmptyAlphabet);
        }
        if self.max_attempts == 0 {
            return Err(BoardConfigError::ZeroAttempts);
        }
        for (index, word) in self.words.iter().enumerate() {
            if word.is_empty() {
                return Err(BoardConfigError::EmptyWord { index });
            }
        }
        Ok(())
    }
}
