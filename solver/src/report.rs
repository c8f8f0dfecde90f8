//! Solution and run-report serialization.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

use crate::search::{Outcome, SearchResult};

/// Renders an outcome in the solution file format.
///
/// A solved run (or a timed-out run's partial trace) is the move count on
/// the first line followed by one move per line; a drained frontier is the
/// literal text `No solution` with no trailing newline.
pub fn render_solution(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Solved(moves) | Outcome::Timeout(moves) => {
            let mut text = String::new();
            let _ = writeln!(text, "{}", moves.len());
            for mv in moves {
                let _ = writeln!(text, "{mv}");
            }
            text
        }
        Outcome::Exhausted => "No solution".to_string(),
    }
}

pub fn write_solution(path: &Path, outcome: &Outcome) -> io::Result<()> {
    fs::write(path, render_solution(outcome))
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot serialize run report: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("cannot write run report: {0}")]
    Io(#[from] io::Error),
}

/// A machine-readable summary of one solver run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub algorithm: String,
    pub solved: bool,
    pub timed_out: bool,
    pub move_count: Option<usize>,
    pub states_explored: u64,
    pub states_generated: u64,
    pub states_pruned: u64,
    pub max_depth: u32,
    pub elapsed_ms: u64,
    pub timestamp: String,
}

impl RunReport {
    pub fn new(algorithm: &str, result: &SearchResult) -> Self {
        let move_count = match &result.outcome {
            Outcome::Solved(moves) => Some(moves.len()),
            _ => None,
        };
        Self {
            algorithm: algorithm.to_string(),
            solved: result.outcome.is_solved(),
            timed_out: matches!(result.outcome, Outcome::Timeout(_)),
            move_count,
            states_explored: result.stats.explored,
            states_generated: result.stats.generated,
            states_pruned: result.stats.pruned,
            max_depth: result.stats.max_depth,
            elapsed_ms: result.stats.elapsed.as_millis() as u64,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

pub fn write_run_report(path: &Path, report: &RunReport) -> Result<(), ReportError> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use freecell_engine::card::{Card, Suit};
    use freecell_engine::location::{ColumnIndex, Location, PileIndex};
    use freecell_engine::r#move::Move;

    fn source_move(suit: Suit, rank: u8) -> Move {
        Move {
            card: Card::new(suit, rank),
            from: Location::Column(ColumnIndex::new(0).unwrap()),
            to: Location::Pile(PileIndex::new(0).unwrap()),
            onto: None,
        }
    }

    #[test]
    fn empty_solution_renders_zero_line() {
        assert_eq!(render_solution(&Outcome::Solved(Vec::new())), "0\n");
    }

    #[test]
    fn solution_count_matches_line_count() {
        let outcome = Outcome::Solved(vec![
            source_move(Suit::Hearts, 1),
            source_move(Suit::Diamonds, 1),
        ]);
        let text = render_solution(&outcome);
        assert_eq!(text, "2\nsource H1\nsource D1\n");
        let mut lines = text.lines();
        let count: usize = lines.next().unwrap().parse().unwrap();
        assert_eq!(count, lines.count());
    }

    #[test]
    fn timeout_renders_its_partial_trace() {
        let outcome = Outcome::Timeout(vec![source_move(Suit::Spades, 1)]);
        assert_eq!(render_solution(&outcome), "1\nsource S1\n");
    }

    #[test]
    fn exhausted_renders_no_solution_without_newline() {
        assert_eq!(render_solution(&Outcome::Exhausted), "No solution");
    }
}
