//! Candidate configurations: assignments, boards, validation, extension.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::error::{PuzzleError, Result};
use crate::puzzle::layout::Coord;
use crate::puzzle::piece::{Piece, PieceId};
use crate::puzzle::Puzzle;

/// A placement of one piece, at one rotation, on one location. Plain
/// immutable value data; validation status lives on the [`Board`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment<C> {
    pub coord: C,
    pub piece: PieceId,
    pub rotation: usize,
}

/// Canonical, order-independent identity of a board configuration: the
/// assignments sorted by piece id (unique within a board). Two boards
/// holding the same assignments in different insertion order produce
/// equal keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardKey<C>(Vec<(PieceId, C, usize)>);

/// A partial or complete candidate configuration.
///
/// Assignments live in a persistent vector, so a child board shares its
/// parent's prefix instead of deep-copying it on every extension. The
/// `validated` counter marks how long a prefix of the sequence has passed
/// edge checks; it only ever grows, and extension appends exactly one
/// unvalidated assignment past a fully validated prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<C: Coord> {
    assignments: Vector<Assignment<C>>,
    validated: usize,
}

impl<C: Coord> Board<C> {
    pub fn new() -> Self {
        Self {
            assignments: Vector::new(),
            validated: 0,
        }
    }

    /// A board holding the given assignments, none validated yet.
    ///
    /// Callers keep the at-most-one-per-location / at-most-one-per-piece
    /// invariant; boards produced by [`Board::extend`] maintain it by
    /// construction.
    pub fn from_assignments(assignments: impl IntoIterator<Item = Assignment<C>>) -> Self {
        Self {
            assignments: assignments.into_iter().collect(),
            validated: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Assignments in insertion order.
    pub fn assignments(&self) -> impl Iterator<Item = &Assignment<C>> {
        self.assignments.iter()
    }

    /// Whether every assignment has passed validation.
    pub fn is_validated(&self) -> bool {
        self.validated == self.assignments.len()
    }

    /// The assignment occupying `coord`, if any.
    pub fn assignment_at(&self, coord: &C) -> Option<&Assignment<C>> {
        self.assignments.iter().find(|a| a.coord == *coord)
    }

    /// Whether `piece` is already placed on this board.
    pub fn uses_piece(&self, piece: PieceId) -> bool {
        self.assignments.iter().any(|a| a.piece == piece)
    }

    /// Checks every not-yet-validated assignment against its already
    /// placed neighbors, advancing the validated prefix as assignments
    /// pass. Returns `false` and stops on the first conflict. Validation
    /// is monotone and idempotent: re-validating a valid board is a no-op.
    ///
    /// An edge with no location behind it is unconstrained unless the
    /// symbol facing it is rare; a rare symbol must always land on an
    /// interior edge. An interior edge whose neighbor location is still
    /// open imposes nothing yet; an occupied one requires the pairing map
    /// to send this symbol to exactly the neighbor's reciprocal symbol.
    pub fn validate(&mut self, puzzle: &Puzzle<C>) -> bool {
        let layout = puzzle.layout();
        while self.validated < self.assignments.len() {
            let assignment = &self.assignments[self.validated];
            let Some(piece) = puzzle.piece(assignment.piece) else {
                return false;
            };
            for (direction, symbol) in piece.oriented_symbols(assignment.rotation) {
                let Some(dest) = layout.neighbor(&assignment.coord, direction) else {
                    if puzzle.is_rare(symbol) {
                        return false;
                    }
                    continue;
                };
                let Some(dest_assignment) = self.assignment_at(dest) else {
                    continue;
                };
                // an unpaired direction imposes no matching constraint
                let Some(paired) = layout.paired(direction) else {
                    continue;
                };
                let Some(dest_piece) = puzzle.piece(dest_assignment.piece) else {
                    return false;
                };
                let dest_symbol = dest_piece.symbol_at(paired, dest_assignment.rotation);
                if puzzle.partner(symbol) != dest_symbol {
                    return false;
                }
            }
            self.validated += 1;
        }
        true
    }

    /// A solved board is fully validated and exhausts either the piece
    /// set or the layout; either way no useful placement remains.
    pub fn solved(&self, puzzle: &Puzzle<C>) -> bool {
        self.is_validated()
            && (self.assignments.len() == puzzle.pieces().len()
                || self.assignments.len() == puzzle.layout().len())
    }

    /// Child boards: one per (open edge, unused piece, fitting rotation).
    ///
    /// For every open edge of every assignment, the required symbol is the
    /// pairing-map partner of the symbol this board already shows there,
    /// and the required direction is the edge's reciprocal at the
    /// neighbor; every unused piece contributes one child per rotation
    /// that lands the required symbol on that direction. Unused pieces are
    /// taken in id order, so the child list is deterministic; a randomized
    /// caller shuffles it before pushing.
    ///
    /// # Errors
    ///
    /// `ExtendUnvalidated` when any assignment has not passed validation:
    /// an unvalidated board has no defined set of successors.
    pub fn extend(&self, puzzle: &Puzzle<C>) -> Result<Vec<Board<C>>> {
        if !self.is_validated() {
            return Err(PuzzleError::ExtendUnvalidated.into());
        }
        let layout = puzzle.layout();
        let mut unused: Vec<&Piece> = puzzle
            .pieces()
            .iter()
            .filter(|piece| !self.uses_piece(piece.id()))
            .collect();
        unused.sort_by_key(|piece| piece.id());

        let mut children = Vec::new();
        for assignment in &self.assignments {
            let Some(piece) = puzzle.piece(assignment.piece) else {
                continue;
            };
            for (direction, symbol) in piece.oriented_symbols(assignment.rotation) {
                let Some(dest) = layout.neighbor(&assignment.coord, direction) else {
                    continue;
                };
                if self.assignment_at(dest).is_some() {
                    continue;
                }
                let Some(paired) = layout.paired(direction) else {
                    continue;
                };
                let Some(wanted) = puzzle.partner(symbol) else {
                    continue;
                };
                for candidate in &unused {
                    for rotation in candidate.rotations_for(wanted, paired) {
                        children.push(self.child(Assignment {
                            coord: dest.clone(),
                            piece: candidate.id(),
                            rotation,
                        }));
                    }
                }
            }
        }
        Ok(children)
    }

    /// The canonical memo key for this configuration.
    pub fn key(&self) -> BoardKey<C> {
        let mut entries: Vec<_> = self
            .assignments
            .iter()
            .map(|a| (a.piece, a.coord.clone(), a.rotation))
            .collect();
        entries.sort_by_key(|(piece, _, _)| *piece);
        BoardKey(entries)
    }

    fn child(&self, assignment: Assignment<C>) -> Board<C> {
        let mut assignments = self.assignments.clone();
        assignments.push_back(assignment);
        Board {
            assignments,
            validated: self.validated,
        }
    }
}

impl<C: Coord> Default for Board<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::{Assignment, Board};
    use crate::error::PuzzleError;
    use crate::puzzle::layout::{Direction, GridCoord, Layout};
    use crate::puzzle::piece::Piece;
    use crate::puzzle::symbol::Symbol;
    use crate::puzzle::Puzzle;

    fn sym(s: &str) -> Symbol {
        s.parse().unwrap()
    }

    fn east_west() -> Vec<Direction> {
        vec![Direction::new("e"), Direction::new("w")]
    }

    fn two_by_one() -> Layout<GridCoord> {
        Layout::new(
            [(0, 0), (1, 0)],
            [
                (Direction::new("e"), (1, 0)),
                (Direction::new("w"), (-1, 0)),
            ],
        )
    }

    /// Two pieces whose sun symbols mate across the shared edge at
    /// exactly one relative rotation.
    fn sun_moon_puzzle() -> Puzzle<GridCoord> {
        let pieces = vec![
            Piece::new(0, east_west(), vec![sym("sun/left"), sym("moon/left")]).unwrap(),
            Piece::new(1, east_west(), vec![sym("sun/right"), sym("moon/right")]).unwrap(),
        ];
        Puzzle::new(two_by_one(), pieces).unwrap()
    }

    fn assignment(coord: GridCoord, piece: u32, rotation: usize) -> Assignment<GridCoord> {
        Assignment {
            coord,
            piece,
            rotation,
        }
    }

    #[test]
    fn test_validate_accepts_matching_edge() {
        let puzzle = sun_moon_puzzle();
        let mut board =
            Board::from_assignments([assignment((0, 0), 0, 0), assignment((1, 0), 1, 1)]);
        assert!(!board.is_validated());
        assert!(board.validate(&puzzle));
        assert!(board.is_validated());
    }

    #[test]
    fn test_validate_rejects_mismatched_edge() {
        let puzzle = sun_moon_puzzle();
        // rotation 0 on piece 1 leaves moon/right facing the sun/left edge
        let mut board =
            Board::from_assignments([assignment((0, 0), 0, 0), assignment((1, 0), 1, 0)]);
        assert!(!board.validate(&puzzle));
        assert!(!board.is_validated());
    }

    #[test]
    fn test_validate_is_idempotent() {
        let puzzle = sun_moon_puzzle();
        let mut board =
            Board::from_assignments([assignment((0, 0), 0, 0), assignment((1, 0), 1, 1)]);
        assert!(board.validate(&puzzle));
        let snapshot = board.clone();
        assert!(board.validate(&puzzle));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_validate_rejects_rare_symbol_on_boundary() {
        // one piece, two symbols, threshold 2/2 = 1.0: both rare
        let pieces =
            vec![Piece::new(0, east_west(), vec![sym("star/left"), sym("star/right")]).unwrap()];
        let puzzle = Puzzle::new(two_by_one(), pieces.clone()).unwrap();
        let mut board = Board::from_assignments([assignment((0, 0), 0, 0)]);
        assert!(!board.validate(&puzzle));

        let relaxed = Puzzle::without_rarity(two_by_one(), pieces).unwrap();
        let mut board = Board::from_assignments([assignment((0, 0), 0, 0)]);
        assert!(board.validate(&relaxed));
    }

    #[test]
    fn test_extend_requires_validation() {
        let puzzle = sun_moon_puzzle();
        let board = Board::from_assignments([assignment((0, 0), 0, 0)]);
        let err = board.extend(&puzzle).unwrap_err();
        assert!(matches!(
            err.puzzle_error(),
            PuzzleError::ExtendUnvalidated
        ));
    }

    #[test]
    fn test_extend_emits_fitting_children() {
        let puzzle = sun_moon_puzzle();
        let mut board = Board::from_assignments([assignment((0, 0), 0, 0)]);
        assert!(board.validate(&puzzle));

        let children = board.extend(&puzzle).unwrap();
        assert_eq!(children.len(), 1);
        let grown: Vec<_> = children[0].assignments().cloned().collect();
        assert_eq!(
            grown,
            vec![assignment((0, 0), 0, 0), assignment((1, 0), 1, 1)]
        );
        // the new assignment is appended unvalidated
        assert!(!children[0].is_validated());
    }

    #[test]
    fn test_extend_on_full_board_yields_nothing() {
        let puzzle = sun_moon_puzzle();
        let mut board =
            Board::from_assignments([assignment((0, 0), 0, 0), assignment((1, 0), 1, 1)]);
        assert!(board.validate(&puzzle));
        assert!(board.solved(&puzzle));
        assert!(board.extend(&puzzle).unwrap().is_empty());
    }

    #[test]
    fn test_solved_requires_exhaustion() {
        let puzzle = sun_moon_puzzle();
        let mut board = Board::from_assignments([assignment((0, 0), 0, 0)]);
        assert!(board.validate(&puzzle));
        assert!(!board.solved(&puzzle));
    }

    #[test]
    fn test_key_is_order_independent() {
        let first = Board::from_assignments([assignment((0, 0), 0, 0), assignment((1, 0), 1, 1)]);
        let second = Board::from_assignments([assignment((1, 0), 1, 1), assignment((0, 0), 0, 0)]);
        assert_eq!(first.key(), second.key());

        let mut visited = HashSet::new();
        assert!(visited.insert(first.key()));
        assert!(!visited.insert(second.key()));

        let different =
            Board::from_assignments([assignment((0, 0), 0, 1), assignment((1, 0), 1, 1)]);
        assert!(visited.insert(different.key()));
    }

    #[test]
    fn test_occupancy_queries() {
        let board = Board::from_assignments([assignment((0, 0), 0, 0)]);
        assert!(board.uses_piece(0));
        assert!(!board.uses_piece(1));
        assert_eq!(board.assignment_at(&(0, 0)), Some(&assignment((0, 0), 0, 0)));
        assert!(board.assignment_at(&(1, 0)).is_none());
    }
}
