use serde::{Deserialize, Serialize};

use crate::error::{PuzzleError, Result};
use crate::puzzle::layout::{compass, Direction};
use crate::puzzle::symbol::Symbol;

/// Stable piece identifier, assigned by whoever loads the piece set and
/// used for tie-break ordering in deterministic search mode.
pub type PieceId = u32;

/// A rotatable puzzle piece.
///
/// The direction list fixes the canonical orientation (rotation 0); the
/// symbol list runs parallel to it. Rotating by `r` shifts which physical
/// direction each canonical symbol occupies: rotation `1` on a square
/// piece moves the `n` symbol to `e`. Rotations are always taken modulo
/// the direction count, so any integer is a valid rotation argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Piece {
    id: PieceId,
    directions: Vec<Direction>,
    symbols: Vec<Symbol>,
}

// Hand-rolled so that deserialized pieces pass through [`Piece::new`] and
// its arity check; a derived impl would accept mismatched lists.
impl<'de> Deserialize<'de> for Piece {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            id: PieceId,
            directions: Vec<Direction>,
            symbols: Vec<Symbol>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Piece::new(raw.id, raw.directions, raw.symbols).map_err(serde::de::Error::custom)
    }
}

impl Piece {
    /// # Errors
    ///
    /// `PieceArity` when the direction and symbol lists differ in length.
    pub fn new(id: PieceId, directions: Vec<Direction>, symbols: Vec<Symbol>) -> Result<Self> {
        if directions.len() != symbols.len() {
            return Err(PuzzleError::PieceArity {
                id,
                directions: directions.len(),
                symbols: symbols.len(),
            }
            .into());
        }
        Ok(Self {
            id,
            directions,
            symbols,
        })
    }

    /// A four-sided piece over the clockwise n/e/s/w compass.
    pub fn square(id: PieceId, symbols: [Symbol; 4]) -> Self {
        Self {
            id,
            directions: compass().to_vec(),
            symbols: symbols.to_vec(),
        }
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of sides, which is also the rotation modulus.
    pub fn sides(&self) -> usize {
        self.directions.len()
    }

    /// The symbol physically occupying `direction` when the piece is
    /// rotated by `rotation`. `None` if the piece has no such direction.
    pub fn symbol_at(&self, direction: &Direction, rotation: usize) -> Option<&Symbol> {
        let n = self.directions.len();
        let idx = self.directions.iter().position(|d| d == direction)?;
        Some(&self.symbols[(idx + n - rotation % n) % n])
    }

    /// The direction the first occurrence of `symbol` faces at `rotation`.
    pub fn direction_of(&self, symbol: &Symbol, rotation: usize) -> Option<&Direction> {
        let n = self.directions.len();
        let idx = self.symbols.iter().position(|s| s == symbol)?;
        Some(&self.directions[(idx + rotation) % n])
    }

    /// Every rotation that lands an occurrence of `symbol` onto `target`.
    /// Empty when the piece carries no such symbol (or no such direction);
    /// more than one entry when the symbol repeats across sides.
    pub fn rotations_for(&self, symbol: &Symbol, target: &Direction) -> Vec<usize> {
        let n = self.directions.len();
        let Some(d) = self.directions.iter().position(|dir| dir == target) else {
            return Vec::new();
        };
        self.symbols
            .iter()
            .enumerate()
            .filter(|(_, s)| *s == symbol)
            .map(|(i, _)| (d + n - i) % n)
            .collect()
    }

    /// `(direction, symbol)` pairs as physically oriented at `rotation`.
    pub fn oriented_symbols(&self, rotation: usize) -> impl Iterator<Item = (&Direction, &Symbol)> {
        let n = self.directions.len();
        self.directions
            .iter()
            .enumerate()
            .map(move |(idx, direction)| (direction, &self.symbols[(idx + n - rotation % n) % n]))
    }
}
