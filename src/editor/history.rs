// SPDX-License-Identifier: MPL-2.0
//! Linear undo/redo log of editor snapshots.

use crate::editor::Snapshot;
use crate::error::{Error, Result};

/// Undo and redo stacks of complete snapshots.
///
/// The top of the undo stack is always the state on display. Once the first
/// snapshot is committed the undo stack never empties again: undoing at a
/// single entry returns that entry without popping it.
#[derive(Debug, Clone, Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
}

impl EditHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new current state and forgets everything that was undone.
    pub fn commit(&mut self, snapshot: Snapshot) -> &Snapshot {
        self.redo_stack.clear();
        self.undo_stack.push(snapshot);
        &self.undo_stack[self.undo_stack.len() - 1]
    }

    /// Steps back one snapshot and returns the new current state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NothingToUndo`] if nothing was ever committed.
    pub fn undo(&mut self) -> Result<&Snapshot> {
        if self.undo_stack.len() > 1 {
            if let Some(top) = self.undo_stack.pop() {
                self.redo_stack.push(top);
            }
        }
        self.undo_stack.last().ok_or(Error::NothingToUndo)
    }

    /// Re-applies the most recently undone snapshot and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NothingToRedo`] if the redo stack is empty.
    pub fn redo(&mut self) -> Result<&Snapshot> {
        let snapshot = self.redo_stack.pop().ok_or(Error::NothingToRedo)?;
        self.undo_stack.push(snapshot);
        Ok(&self.undo_stack[self.undo_stack.len() - 1])
    }

    /// The state currently on display.
    #[must_use]
    pub fn current(&self) -> Option<&Snapshot> {
        self.undo_stack.last()
    }

    /// Whether an undo would move to an earlier snapshot.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }
}
