//! Randomized puzzle generation.
//!
//! For each configured word, up to `max_attempts` placements are tried:
//! a random direction from the eight canonical ones and a random start
//! cell. Out-of-bounds runs and letter conflicts reject the attempt.
//! A word that exhausts its attempts is dropped — recorded in the
//! [`GenerationReport`], never fatal. Remaining cells are then filled
//! with independent random letters from the alphabet.
//!
//! Respects the determinism contract: all randomness comes from a
//! ChaCha8 stream seeded from `config.seed`, so identical configs
//! produce identical puzzles.

use crate::board::Board;
use crate::config::BoardConfig;
use crate::error::BoardConfigError;
use crate::placement::{GridBuilder, PlacedWord};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use wordgrid_core::direction::ALL_DIRECTIONS;
use wordgrid_core::GridPos;

/// Outcome summary for one generation run.
///
/// This is the diagnostic surface for the one failure mode generation
/// has: a word that could not be placed within the retry bound.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Number of words attempted (the configured list length).
    pub attempted: usize,
    /// Number of words successfully placed.
    pub placed: usize,
    /// Words (uppercased) that exhausted their retry bound.
    pub dropped: Vec<String>,
    /// Total placement attempts consumed across all words.
    pub attempts_used: u64,
}

/// A generated puzzle: lettered board, placements, and report.
///
/// The board and placement list are immutable for the life of the
/// puzzle; screen-space endpoints are resolved separately once the
/// host layout is final (see [`crate::layout::resolve_words`]).
#[derive(Clone, Debug)]
pub struct Puzzle {
    /// The fully lettered grid.
    pub board: Board,
    /// Successfully placed words in placement order.
    pub placements: Vec<PlacedWord>,
    /// What happened during generation.
    pub report: GenerationReport,
}

/// Generate a puzzle from a validated configuration.
///
/// Words are uppercased before placement. Placement is best-effort:
/// unplaceable words appear in `report.dropped` and generation
/// continues with the rest.
///
/// # Errors
///
/// Returns [`BoardConfigError`] only for structural config problems
/// (see [`BoardConfig::validate`]); a crowded grid never fails.
pub fn generate(config: &BoardConfig) -> Result<Puzzle, BoardConfigError> {
    config.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut builder = GridBuilder::new(config.size)?;
    let mut report = GenerationReport {
        attempted: config.words.len(),
        ..GenerationReport::default()
    };

    let n = config.size as i32;
    for word in &config.words {
        let word = word.to_uppercase();
        let mut placed = false;
        for _ in 0..config.max_attempts {
            report.attempts_used += 1;
            let direction = ALL_DIRECTIONS[rng.random_range(0..ALL_DIRECTIONS.len())];
            let start = GridPos::new(rng.random_range(0..n), rng.random_range(0..n));
            if builder.place(&word, start, direction).is_ok() {
                placed = true;
                break;
            }
        }
        if !placed {
            report.dropped.push(word);
        }
    }

    let (board, placements) = builder.finish(&mut rng, &config.alphabet)?;
    report.placed = placements.len();
    Ok(Puzzle {
        board,
        placements,
        report,
    })
}
