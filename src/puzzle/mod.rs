//! The problem-definition layer: layouts, symbols, pieces, and the
//! immutable [`Puzzle`] that ties them together.

pub mod layout;
pub mod piece;
pub mod symbol;

use std::collections::{HashMap, HashSet};

use crate::error::{PuzzleError, Result};
use crate::puzzle::layout::{Coord, Layout};
use crate::puzzle::piece::{Piece, PieceId};
use crate::puzzle::symbol::Symbol;

/// An immutable edge-matching puzzle definition.
///
/// Construction derives everything the search needs exactly once: the
/// frequency of every symbol identity, the pairing map (each symbol's
/// required partner on an interior edge: same kind, opposite side), and
/// the rarity table. Nothing here changes during a search; the solver
/// reads it and keeps all mutable state to itself.
///
/// A symbol is *rare* when it occurs no more often than the fair share
/// implied by the layout's edge capacity (inner edges divided by distinct
/// symbols, inclusive comparison). A rare symbol can never afford to face
/// a boundary, which lets validation reject such placements outright.
#[derive(Debug, Clone)]
pub struct Puzzle<C: Coord> {
    layout: Layout<C>,
    pieces: Vec<Piece>,
    index: HashMap<PieceId, usize>,
    frequency: HashMap<Symbol, usize>,
    pairs: HashMap<Symbol, Symbol>,
    rare: HashSet<Symbol>,
}

impl<C: Coord> Puzzle<C> {
    /// # Errors
    ///
    /// `NoPieces`, `DuplicatePiece`, or `SideCount` when the piece set is
    /// malformed. These indicate a bad puzzle definition, not a search
    /// failure.
    pub fn new(layout: Layout<C>, pieces: Vec<Piece>) -> Result<Self> {
        Self::build(layout, pieces, true)
    }

    /// Like [`Puzzle::new`] with the rare-symbol boundary check disabled:
    /// no symbol is ever classified rare.
    pub fn without_rarity(layout: Layout<C>, pieces: Vec<Piece>) -> Result<Self> {
        Self::build(layout, pieces, false)
    }

    fn build(layout: Layout<C>, pieces: Vec<Piece>, use_rarity: bool) -> Result<Self> {
        if pieces.is_empty() {
            return Err(PuzzleError::NoPieces.into());
        }

        let mut index = HashMap::new();
        for (i, piece) in pieces.iter().enumerate() {
            if index.insert(piece.id(), i).is_some() {
                return Err(PuzzleError::DuplicatePiece(piece.id()).into());
            }
        }

        let mut frequency: HashMap<Symbol, usize> = HashMap::new();
        for piece in &pieces {
            for symbol in piece.symbols() {
                *frequency.entry(symbol.clone()).or_default() += 1;
            }
        }

        let sides: HashSet<&str> = frequency.keys().map(Symbol::side).collect();
        if sides.len() != 2 {
            return Err(PuzzleError::SideCount(sides.len()).into());
        }

        let mut pairs = HashMap::new();
        for sym in frequency.keys() {
            let partner = frequency
                .keys()
                .find(|other| other.kind() == sym.kind() && other.side() != sym.side());
            if let Some(partner) = partner {
                pairs.insert(sym.clone(), partner.clone());
            }
        }

        let mut rare = HashSet::new();
        if use_rarity {
            let threshold = layout.inner_edges() as f64 / frequency.len() as f64;
            for (sym, count) in &frequency {
                if *count as f64 <= threshold {
                    rare.insert(sym.clone());
                }
            }
        }

        Ok(Self {
            layout,
            pieces,
            index,
            frequency,
            pairs,
            rare,
        })
    }

    pub fn layout(&self) -> &Layout<C> {
        &self.layout
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.index.get(&id).map(|&i| &self.pieces[i])
    }

    /// The partner `symbol` must meet across an interior edge, if it has
    /// one. A symbol without a partner can never satisfy an interior edge.
    pub fn partner(&self, symbol: &Symbol) -> Option<&Symbol> {
        self.pairs.get(symbol)
    }

    /// Whether `symbol` is scarce enough that it must face interior edges.
    pub fn is_rare(&self, symbol: &Symbol) -> bool {
        self.rare.contains(symbol)
    }

    /// Occurrences of `symbol` across the whole piece set.
    pub fn frequency(&self, symbol: &Symbol) -> usize {
        self.frequency.get(symbol).copied().unwrap_or(0)
    }

    /// Every distinct symbol identity in the piece set.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.frequency.keys()
    }
}
