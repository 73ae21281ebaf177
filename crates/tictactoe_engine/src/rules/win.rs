//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Square};
use super::line::{LINES, Line};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A completed line and the mark that completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    mark: Mark,
    line: Line,
}

impl Win {
    /// Creates a win record.
    pub fn new(mark: Mark, line: Line) -> Self {
        Self { mark, line }
    }

    /// The winning mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// The completed line.
    pub fn line(&self) -> Line {
        self.line
    }
}

/// Checks if there is a winner on the board.
///
/// Lines are scanned in [`LINES`] order and the first completed line is
/// reported, so a board with two completed lines (unreachable in normal
/// play) still has a single well-defined answer.
#[instrument(skip(board))]
pub fn evaluate_winner(board: &Board) -> Option<Win> {
    for line in LINES {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.mark().map(|mark| Win::new(mark, line));
        }
    }

    None
}
