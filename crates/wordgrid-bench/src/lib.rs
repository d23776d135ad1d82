//! Benchmark profiles for the wordgrid puzzle engine.
//!
//! Provides pre-built [`BoardConfig`] profiles:
//!
//! - [`reference_profile`]: 15x15 grid with a 12-word list, the size of
//!   a typical printed puzzle.
//! - [`stress_profile`]: 50x50 grid with a 100-word list for generation
//!   stress testing.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use wordgrid_board::BoardConfig;

/// Word pool the profiles draw from.
const WORD_POOL: &[&str] = &[
    "anchor", "breeze", "cobalt", "dune", "ember", "fjord", "glacier", "harbor", "island",
    "jetty", "kelp", "lagoon", "marsh", "nectar", "osprey", "pebble", "quarry", "reef",
    "summit", "tundra", "umber", "vapor", "willow", "xenon", "yarrow", "zephyr",
];

/// Build a reference profile: 15x15 grid, 12 words.
pub fn reference_profile(seed: u64) -> BoardConfig {
    let words = WORD_POOL.iter().take(12).map(|w| w.to_string()).collect();
    let mut config = BoardConfig::new(15, words);
    config.seed = seed;
    config
}

/// Build a stress profile: 50x50 grid, 100 words (the pool, cycled).
pub fn stress_profile(seed: u64) -> BoardConfig {
    let words = WORD_POOL
        .iter()
        .cycle()
        .take(100)
        .map(|w| w.to_string())
        .collect();
    let mut config = BoardConfig::new(50, words);
    config.seed = seed;
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_validates() {
        reference_profile(42).validate().unwrap();
    }

    #[test]
    fn stress_profile_validates() {
        stress_profile(42).validate().unwrap();
    }

    #[test]
    fn profiles_are_deterministic() {
        let a = wordgrid_board::generate(&reference_profile(42)).unwrap();
        let b = wordgrid_board::generate(&reference_profile(42)).unwrap();
        assert_eq!(a.placements, b.placements);
    }
}
