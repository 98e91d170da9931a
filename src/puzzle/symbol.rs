use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, PuzzleError};

/// A printed mark on one edge of a piece.
///
/// Identity is the `(kind, side)` pair: the kind names the picture (e.g.
/// `"green clover"`) and the side names which half of the matching pair it
/// is (e.g. `"left"` or `"right"`). Two symbols are equal iff both fields
/// match. Exactly two side labels may occur across a whole piece set;
/// [`Puzzle`](crate::puzzle::Puzzle) enforces that at construction.
///
/// Whether a symbol is *rare* is not a property of the symbol itself; the
/// rarity table belongs to the puzzle that derived it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol {
    kind: String,
    side: String,
}

impl Symbol {
    pub fn new(kind: impl Into<String>, side: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            side: side.into(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn side(&self) -> &str {
        &self.side
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.side)
    }
}

impl FromStr for Symbol {
    type Err = Error;

    /// Parses the conventional `"kind/side"` form, e.g. `"green clover/left"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((kind, side)) if !kind.is_empty() && !side.is_empty() => {
                Ok(Self::new(kind, side))
            }
            _ => Err(PuzzleError::MalformedSymbol(s.to_string()).into()),
        }
    }
}
