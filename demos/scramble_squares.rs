//! Solves a nine-piece scramble-squares puzzle on a 3x3 grid: each piece
//! edge carries half of a wizard picture, and every interior edge must
//! join a top half to the matching bottom half.
//!
//! Run with `RUST_LOG=debug` to watch the search progress lines.

use serde::Deserialize;
use tessera::error::Result;
use tessera::puzzle::layout::Layout;
use tessera::puzzle::piece::Piece;
use tessera::puzzle::symbol::Symbol;
use tessera::puzzle::Puzzle;
use tessera::solver::engine::Solver;
use tessera::solver::stats::render_stats_table;

#[derive(Debug, Deserialize)]
struct PieceDef {
    id: u32,
    /// Symbols in clockwise n, e, s, w order, written "kind/side".
    edges: [String; 4],
}

const PIECES: &str = r#"[
  {"id": 1, "edges": ["green wizard/bottom", "green wizard/bottom", "yellow wizard/top", "yellow wizard/top"]},
  {"id": 2, "edges": ["blue wizard/bottom", "blue wizard/top", "yellow wizard/top", "red wizard/bottom"]},
  {"id": 3, "edges": ["red wizard/top", "blue wizard/bottom", "green wizard/top", "blue wizard/bottom"]},
  {"id": 4, "edges": ["red wizard/top", "red wizard/top", "yellow wizard/top", "green wizard/top"]},
  {"id": 5, "edges": ["red wizard/bottom", "green wizard/bottom", "yellow wizard/bottom", "blue wizard/top"]},
  {"id": 6, "edges": ["blue wizard/top", "blue wizard/top", "green wizard/top", "red wizard/bottom"]},
  {"id": 7, "edges": ["green wizard/top", "blue wizard/top", "yellow wizard/top", "yellow wizard/bottom"]},
  {"id": 8, "edges": ["red wizard/bottom", "green wizard/bottom", "green wizard/top", "yellow wizard/bottom"]},
  {"id": 9, "edges": ["red wizard/top", "blue wizard/bottom", "yellow wizard/bottom", "red wizard/top"]}
]"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let defs: Vec<PieceDef> =
        serde_json::from_str(PIECES).expect("embedded piece set is well-formed");

    let mut pieces = Vec::new();
    for def in defs {
        let mut symbols = Vec::new();
        for edge in &def.edges {
            symbols.push(edge.parse::<Symbol>()?);
        }
        pieces.push(Piece::square(
            def.id,
            symbols.try_into().expect("four edges per piece"),
        ));
    }

    let puzzle = Puzzle::new(Layout::grid(3, 3), pieces)?;
    let mut solver = Solver::new(puzzle);

    match solver.solve()? {
        Some(board) => {
            println!("Solved:");
            for a in board.assignments() {
                println!(
                    "  ({}, {}) <- piece {} rotated {}",
                    a.coord.0, a.coord.1, a.piece, a.rotation
                );
            }
        }
        None => println!("No solution found."),
    }

    println!("\n{}", render_stats_table(solver.stats()));
    Ok(())
}
