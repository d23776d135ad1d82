//! Strongly-typed identifiers.

use std::fmt;

/// Identifies a placed word within a puzzle.
///
/// Words are assigned sequential IDs in placement order during board
/// generation. `WordId(n)` corresponds to the n-th successfully placed
/// word, not the n-th configured word: dropped words consume no ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(pub u32);

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for WordId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
