//! The backtracking search engine.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::Result;
use crate::puzzle::layout::Coord;
use crate::puzzle::Puzzle;
use crate::solver::{
    board::{Assignment, Board, BoardKey},
    frontier::Frontier,
    stats::SearchStats,
    strategy::{SearchOrder, SolutionMode, SolverConfig},
};

/// Drives the depth-first, stack-based backtracking search over a
/// [`Puzzle`].
///
/// The puzzle is immutable; all search state (the frontier, the memo set
/// of visited configurations, the statistics and the RNG) lives here.
/// The loop seeds the frontier with every (piece, rotation) placement on
/// one starting location, then pops, validates, memo-checks and extends
/// until it finds a solution or runs the frontier dry. Backtracking is
/// simply not revisiting discarded branches; there is no retry machinery.
///
/// Each call to [`Solver::solve`] or [`Solver::solve_all`] runs a fresh
/// search: frontier, memo set and statistics are reset on entry.
pub struct Solver<C: Coord> {
    puzzle: Puzzle<C>,
    config: SolverConfig,
    frontier: Frontier<C>,
    visited: HashSet<BoardKey<C>>,
    stats: SearchStats,
    rng: ChaCha8Rng,
}

impl<C: Coord> Solver<C> {
    pub fn new(puzzle: Puzzle<C>) -> Self {
        Self::with_config(puzzle, SolverConfig::default())
    }

    pub fn with_config(puzzle: Puzzle<C>, config: SolverConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            puzzle,
            config,
            frontier: Frontier::new(),
            visited: HashSet::new(),
            stats: SearchStats::default(),
            rng,
        }
    }

    pub fn puzzle(&self) -> &Puzzle<C> {
        &self.puzzle
    }

    /// Counters from the most recent search run.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Runs the search and returns the first solved board, or `None` when
    /// the frontier drains without one. Draining is a normal outcome, not
    /// an error.
    ///
    /// # Errors
    ///
    /// Only usage-contract failures surface here; an unsolvable puzzle is
    /// `Ok(None)`.
    pub fn solve(&mut self) -> Result<Option<Board<C>>> {
        Ok(self.run(SolutionMode::First)?.into_iter().next())
    }

    /// Runs the search to exhaustion and returns every solved board it
    /// encountered, possibly none.
    pub fn solve_all(&mut self) -> Result<Vec<Board<C>>> {
        self.run(SolutionMode::All)
    }

    fn run(&mut self, mode: SolutionMode) -> Result<Vec<Board<C>>> {
        self.frontier = Frontier::new();
        self.visited.clear();
        self.stats = SearchStats::default();
        self.seed();

        let mut solutions = Vec::new();
        while let Some(mut board) = self.frontier.pop() {
            self.stats.trials += 1;
            if self.config.log_every > 0 && self.stats.trials % self.config.log_every == 0 {
                debug!(
                    trials = self.stats.trials,
                    depth = board.len(),
                    stack = self.frontier.len(),
                    visited = self.visited.len(),
                    revisits = self.stats.revisits,
                    "search progress"
                );
            }
            if !board.validate(&self.puzzle) {
                continue;
            }
            self.stats.valid_boards += 1;
            if self.config.memoize && !self.visited.insert(board.key()) {
                self.stats.revisits += 1;
                continue;
            }
            if board.solved(&self.puzzle) {
                self.stats.solutions += 1;
                debug!(
                    assignments = board.len(),
                    trials = self.stats.trials,
                    "solution found"
                );
                if mode == SolutionMode::First {
                    self.finish();
                    return Ok(vec![board]);
                }
                solutions.push(board.clone());
                // a solved board still flows through extend; with pieces
                // or locations exhausted it has no open edges anyway
            }
            let mut children = board.extend(&self.puzzle)?;
            if self.config.order == SearchOrder::Randomized {
                children.shuffle(&mut self.rng);
            }
            for child in children {
                self.frontier.push(child);
            }
        }
        self.finish();
        Ok(solutions)
    }

    // One single-assignment board per (piece, rotation), anchored at one
    // starting location.
    fn seed(&mut self) {
        let start = match self.config.order {
            SearchOrder::Ordered => self.puzzle.layout().coords().first().cloned(),
            SearchOrder::Randomized => self.puzzle.layout().coords().choose(&mut self.rng).cloned(),
        };
        let Some(start) = start else {
            return;
        };
        let mut seeds = Vec::new();
        for piece in self.puzzle.pieces() {
            for rotation in 0..piece.sides() {
                seeds.push(Board::from_assignments([Assignment {
                    coord: start.clone(),
                    piece: piece.id(),
                    rotation,
                }]));
            }
        }
        match self.config.order {
            // reversed so the first piece at rotation 0 pops first
            SearchOrder::Ordered => seeds.reverse(),
            SearchOrder::Randomized => seeds.shuffle(&mut self.rng),
        }
        for board in seeds {
            self.frontier.push(board);
        }
    }

    fn finish(&mut self) {
        self.stats.peak_stack = self.frontier.peak();
        self.stats.distinct_boards = self.visited.len() as u64;
        debug!(
            trials = self.stats.trials,
            valid = self.stats.valid_boards,
            solutions = self.stats.solutions,
            "search finished"
        );
    }
}
