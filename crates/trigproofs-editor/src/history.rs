//! Undo/redo history over full-state snapshots.
//!
//! Each entry is a deep, independent copy of the object list and parameter
//! map. At the expected scene scale (tens of objects) a full copy per edit
//! is cheaper than being clever. The history is capacity-bounded; evicting
//! the oldest entry re-bases the cursor.
//!
//! Gestures (slider drags, animation sweeps) collapse to a single undo
//! step: the pre-gesture state is pushed up front, live updates while the
//! gesture is marked active are not pushed, and the gesture end pushes the
//! final state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{ParamId, SceneObject};
use crate::params::Parameter;

/// One undoable state: deep copies of everything the user can edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub objects: Vec<SceneObject>,
    pub parameters: BTreeMap<ParamId, Parameter>,
}

#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Snapshot>,
    cursor: usize,
    capacity: usize,
    active_gesture: Option<ParamId>,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity >= 2, "history needs room for undo");
        Self {
            entries: Vec::new(),
            cursor: 0,
            capacity,
            active_gesture: None,
        }
    }

    /// Appends a snapshot after the cursor, discarding any redo entries,
    /// and evicts the oldest entry beyond capacity.
    pub fn push(&mut self, snapshot: Snapshot) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(snapshot);
        if self.entries.len() > self.capacity {
            let excess = self.entries.len() - self.capacity;
            self.entries.drain(..excess);
            tracing::debug!(evicted = excess, "history capacity reached");
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Marks a gesture as active; live updates to the marked target are not
    /// individually snapshotted until [`History::clear_gesture`].
    pub fn begin_gesture(&mut self, target: ParamId) {
        self.active_gesture = Some(target);
    }

    pub fn clear_gesture(&mut self) {
        self.active_gesture = None;
    }

    pub fn gesture_target(&self) -> Option<ParamId> {
        self.active_gesture
    }

    /// Steps the cursor back and returns the snapshot to restore, or `None`
    /// at the oldest entry.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Steps the cursor forward and returns the snapshot to restore, or
    /// `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
