//! Linear undo/redo over full scene snapshots.
//!
//! Each entry is a complete copy of the scene; there is no structural
//! sharing. The cursor points at the entry matching the live scene.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::consts::MAX_HISTORY;
use crate::doc::Scene;

#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Scene>,
    cursor: usize,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Scene::default())
    }
}

impl History {
    /// Start a history whose only entry is `initial`.
    #[must_use]
    pub fn new(initial: Scene) -> Self {
        Self::with_limit(initial, MAX_HISTORY)
    }

    /// Like [`History::new`] with a custom snapshot cap (at least 1).
    #[must_use]
    pub fn with_limit(initial: Scene, limit: usize) -> Self {
        Self { entries: vec![initial], cursor: 0, limit: limit.max(1) }
    }

    /// Drop everything and start over from `initial`.
    pub fn reset(&mut self, initial: Scene) {
        self.entries.clear();
        self.entries.push(initial);
        self.cursor = 0;
    }

    /// Record a new snapshot after the cursor, discarding any redo tail.
    /// The oldest snapshot is dropped once the cap is exceeded.
    pub fn push(&mut self, scene: Scene) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(scene);
        if self.entries.len() > self.limit {
            let excess = self.entries.len() - self.limit;
            self.entries.drain(..excess);
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Step back and return the snapshot to restore.
    pub fn undo(&mut self) -> Option<&Scene> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Step forward and return the snapshot to restore.
    pub fn redo(&mut self) -> Option<&Scene> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Snapshot at the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&Scene> {
        self.entries.get(self.cursor)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
