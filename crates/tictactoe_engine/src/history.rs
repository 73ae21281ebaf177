//! Board snapshot history supporting undo.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Ordered board snapshots, oldest first.
///
/// Never empty: the oldest snapshot is the empty board and the newest is
/// the current board. The current board is stored apart from the earlier
/// snapshots so there is always one to return.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct History {
    past: Vec<Board>,
    current: Board,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current board.
    pub fn current(&self) -> &Board {
        &self.current
    }

    /// Appends a snapshot, making it current.
    #[instrument(skip(self, board), fields(len = self.len()))]
    pub fn push(&mut self, board: Board) {
        let previous = std::mem::replace(&mut self.current, board);
        self.past.push(previous);
    }

    /// Removes and returns the current snapshot.
    ///
    /// Returns `None` without modifying anything when only the initial
    /// snapshot remains.
    #[instrument(skip(self), fields(len = self.len()))]
    pub fn pop(&mut self) -> Option<Board> {
        match self.past.pop() {
            Some(previous) => Some(std::mem::replace(&mut self.current, previous)),
            None => {
                debug!("Nothing to undo");
                None
            }
        }
    }

    /// Clears back to a single empty board.
    pub fn reset(&mut self) {
        self.past.clear();
        self.current = Board::new();
    }

    /// Number of snapshots (moves played + 1).
    pub fn len(&self) -> usize {
        self.past.len() + 1
    }

    /// History always holds the initial board, so this is always false.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns true when at least one move can be undone.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> impl Iterator<Item = &Board> {
        self.past.iter().chain(std::iter::once(&self.current))
    }
}
