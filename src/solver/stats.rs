use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// Counters accumulated over one search run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Boards popped from the frontier.
    pub trials: u64,
    /// Popped boards that passed validation.
    pub valid_boards: u64,
    /// Valid boards discarded because their configuration had already
    /// been visited.
    pub revisits: u64,
    /// Solved boards encountered.
    pub solutions: u64,
    /// Distinct configurations recorded in the memo set.
    pub distinct_boards: u64,
    /// Deepest the frontier stack grew.
    pub peak_stack: usize,
}

pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));

    for (metric, value) in [
        ("Trials", stats.trials.to_string()),
        ("Valid boards", stats.valid_boards.to_string()),
        ("Revisits", stats.revisits.to_string()),
        ("Solutions", stats.solutions.to_string()),
        ("Distinct configurations", stats.distinct_boards.to_string()),
        ("Peak stack depth", stats.peak_stack.to_string()),
    ] {
        table.add_row(Row::new(vec![Cell::new(metric), Cell::new(&value)]));
    }

    table.to_string()
}
