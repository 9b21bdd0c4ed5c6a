//! Undo/redo integration for editor state.

use super::{DrawingMode, EditorState};
use crate::history::Snapshot;

impl EditorState {
    /// Deep copy of the current undoable state.
    pub(crate) fn current_snapshot(&self) -> Snapshot {
        Snapshot {
            objects: self.objects.snapshot(),
            parameters: self.parameters.snapshot(),
        }
    }

    /// Pushes the current state as a new history entry.
    pub(crate) fn push_history(&mut self) {
        let snapshot = self.current_snapshot();
        self.history.push(snapshot);
    }

    /// Pushes unless a gesture is collapsing updates right now.
    pub(crate) fn maybe_push_history(&mut self) {
        if self.history.gesture_target().is_none() {
            self.push_history();
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Restores the previous snapshot. Returns false at the oldest entry.
    pub fn undo(&mut self) -> bool {
        let snapshot = match self.history.undo() {
            Some(snapshot) => snapshot.clone(),
            None => return false,
        };
        self.restore(snapshot);
        true
    }

    /// Restores the next snapshot. Returns false at the newest entry.
    pub fn redo(&mut self) -> bool {
        let snapshot = match self.history.redo() {
            Some(snapshot) => snapshot.clone(),
            None => return false,
        };
        self.restore(snapshot);
        true
    }

    /// Replaces the live stores wholesale and resets every piece of
    /// transient interaction state: selection, in-progress drawing, and
    /// any active gesture mark.
    fn restore(&mut self, snapshot: Snapshot) {
        self.objects.restore(snapshot.objects);
        self.parameters.restore(snapshot.parameters);
        self.selected = None;
        self.drawing_mode = DrawingMode::None;
        self.drawing_points.clear();
        self.history.clear_gesture();
    }
}
