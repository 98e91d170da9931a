//! Search strategy and configuration knobs.

/// Whether the search explores in a fixed, reproducible order or a
/// randomized one.
///
/// `Ordered` anchors the seed at the layout's first location, keeps
/// unused pieces in id order and pushes children as generated, so the
/// same puzzle always replays the same search, including which of
/// several valid solutions a first-solution run returns. `Randomized`
/// draws the seed location from the engine's RNG and shuffles both the
/// seed boards and each batch of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchOrder {
    #[default]
    Ordered,
    Randomized,
}

/// Whether the search stops at the first solution or runs the frontier
/// dry and accumulates every solution it meets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionMode {
    First,
    All,
}

/// Engine configuration. The defaults match the common case: ordered
/// deterministic exploration, memoization on, a progress line every 2500
/// trials.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Exploration order for seeding and extension.
    pub order: SearchOrder,
    /// Discard boards whose configuration was already visited.
    pub memoize: bool,
    /// RNG seed for [`SearchOrder::Randomized`]; `None` seeds from
    /// entropy, `Some` makes randomized runs reproducible.
    pub seed: Option<u64>,
    /// Emit a progress log line every this many trials; `0` disables.
    pub log_every: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            order: SearchOrder::Ordered,
            memoize: true,
            seed: None,
            log_every: 2500,
        }
    }
}

impl SolverConfig {
    /// Randomized exploration with a fixed seed, for reproducible shuffles.
    pub fn randomized(seed: u64) -> Self {
        Self {
            order: SearchOrder::Randomized,
            seed: Some(seed),
            ..Self::default()
        }
    }
}
