use std::collections::VecDeque;

use super::TextBuffer;

/// Default number of snapshots kept on each stack.
pub const DEFAULT_UNDO_DEPTH: usize = 50;

/// Edit history for undo/redo.
///
/// Stores whole-buffer snapshots. Both stacks are bounded; pushing past the
/// depth evicts the oldest snapshot.
#[derive(Debug, Clone)]
pub struct UndoHistory {
    /// Snapshots to restore on undo (newest at the back)
    undo_stack: VecDeque<String>,
    /// Snapshots to restore on redo (newest at the back)
    redo_stack: VecDeque<String>,
    /// Maximum snapshots per stack
    depth: usize,
}

impl UndoHistory {
    /// Create a new history
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_UNDO_DEPTH)
    }

    /// Create history with specified depth
    pub fn with_depth(depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::with_capacity(depth),
            redo_stack: VecDeque::with_capacity(depth),
            depth: depth.max(1),
        }
    }

    /// Record the buffer's current (pre-mutation) content.
    ///
    /// Clears the redo stack.
    pub fn record(&mut self, buffer: &TextBuffer) {
        self.push_snapshot(buffer.text().to_string());
    }

    /// Record an already captured pre-mutation snapshot.
    ///
    /// Clears the redo stack.
    pub fn push_snapshot(&mut self, snapshot: String) {
        push_bounded(&mut self.undo_stack, snapshot, self.depth);
        self.redo_stack.clear();
    }

    /// Restore the previous snapshot.
    ///
    /// The current content goes to the redo stack. Returns `false` when there
    /// is nothing to undo.
    pub fn undo(&mut self, buffer: &mut TextBuffer) -> bool {
        let Some(snapshot) = self.undo_stack.pop_back() else {
            return false;
        };
        push_bounded(&mut self.redo_stack, buffer.text().to_string(), self.depth);
        buffer.replace_all(&snapshot);
        true
    }

    /// Re-apply the most recently undone snapshot.
    ///
    /// The current content goes to the undo stack as exactly one entry, and the
    /// rest of the redo stack is kept. Returns `false` when there is nothing to
    /// redo.
    pub fn redo(&mut self, buffer: &mut TextBuffer) -> bool {
        let Some(snapshot) = self.redo_stack.pop_back() else {
            return false;
        };
        push_bounded(&mut self.undo_stack, buffer.text().to_string(), self.depth);
        buffer.replace_all(&snapshot);
        true
    }

    /// Check if undo is possible
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is possible
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of undo snapshots
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of redo snapshots
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new()
    }
}

fn push_bounded(stack: &mut VecDeque<String>, snapshot: String, depth: usize) {
    while stack.len() >= depth {
        stack.pop_front();
    }
    stack.push_back(snapshot);
}
