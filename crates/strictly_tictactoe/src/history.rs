//! Snapshot stack backing single-step undo.

use crate::board::Board;
use tracing::{debug, instrument};

/// LIFO stack of board snapshots, one pushed before every applied move.
///
/// Entries are owned copies, so nothing pushed here can change afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    snapshots: Vec<Board>,
}

impl MoveHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the board as it was before a move.
    #[instrument(skip_all, fields(depth = self.snapshots.len() + 1))]
    pub fn push(&mut self, snapshot: Board) {
        self.snapshots.push(snapshot);
    }

    /// Removes and returns the most recent snapshot.
    #[instrument(skip(self), fields(depth = self.snapshots.len()))]
    pub fn pop(&mut self) -> Option<Board> {
        let snapshot = self.snapshots.pop();
        if snapshot.is_none() {
            debug!("History empty, nothing to pop");
        }
        snapshot
    }

    /// Drops every snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if there is nothing to undo.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
