//! Tessera is a backtracking solver for edge-matching tile puzzles:
//! square pieces bearing symbols on each side must be placed on a grid,
//! possibly rotated, so that every interior edge joins a symbol with its
//! designated partner on the neighboring piece.
//!
//! The crate splits into a problem-definition layer and a search layer:
//!
//! - **[`puzzle::layout::Layout`]**: the adjacency graph over locations.
//!   Any hashable coordinate type works via the
//!   [`puzzle::layout::Coord`] trait; a rows×cols grid shorthand covers
//!   the common case.
//! - **[`puzzle::piece::Piece`]**: a rotatable assignment of
//!   [`puzzle::symbol::Symbol`]s to canonical directions, with
//!   modular-arithmetic rotation lookups.
//! - **[`puzzle::Puzzle`]**: the immutable problem definition; derives
//!   the symbol-pairing map and the rare-symbol table once at
//!   construction.
//! - **[`solver::board::Board`]**: a candidate configuration that
//!   validates itself incrementally and enumerates its successors over a
//!   structurally shared assignment sequence.
//! - **[`solver::engine::Solver`]**: the memoized, depth-first
//!   backtracking loop over an explicit work stack, with ordered or
//!   seeded-random exploration.
//!
//! # Example: a 2×1 puzzle
//!
//! Two two-sided pieces share one interior edge; the sun halves mate at
//! exactly one relative rotation.
//!
//! ```
//! use tessera::puzzle::layout::{Direction, Layout};
//! use tessera::puzzle::piece::Piece;
//! use tessera::puzzle::symbol::Symbol;
//! use tessera::puzzle::Puzzle;
//! use tessera::solver::engine::Solver;
//!
//! # fn main() -> tessera::error::Result<()> {
//! let east = Direction::new("e");
//! let west = Direction::new("w");
//! let layout = Layout::new(
//!     [(0, 0), (1, 0)],
//!     [(east.clone(), (1, 0)), (west.clone(), (-1, 0))],
//! );
//!
//! let pieces = vec![
//!     Piece::new(
//!         0,
//!         vec![east.clone(), west.clone()],
//!         vec![Symbol::new("sun", "left"), Symbol::new("moon", "left")],
//!     )?,
//!     Piece::new(
//!         1,
//!         vec![east, west],
//!         vec![Symbol::new("sun", "right"), Symbol::new("moon", "right")],
//!     )?,
//! ];
//!
//! let puzzle = Puzzle::new(layout, pieces)?;
//! let mut solver = Solver::new(puzzle);
//! let board = solver.solve()?.expect("this puzzle has a solution");
//!
//! let placements: Vec<_> = board
//!     .assignments()
//!     .map(|a| (a.coord, a.piece, a.rotation))
//!     .collect();
//! assert_eq!(placements, vec![((0, 0), 0, 0), ((1, 0), 1, 1)]);
//! # Ok(())
//! # }
//! ```
pub mod error;
pub mod puzzle;
pub mod solver;
