//! Two-click line and segment drawing.

use serde::{Deserialize, Serialize};

use trigproofs_core::math::Point;

use super::EditorState;
use crate::model::ObjectId;

/// What the next canvas click means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DrawingMode {
    #[default]
    None,
    Line,
    Segment,
}

impl EditorState {
    pub fn drawing_mode(&self) -> DrawingMode {
        self.drawing_mode
    }

    /// Points collected so far for the in-progress line/segment.
    pub fn pending_drawing_points(&self) -> &[Point] {
        &self.drawing_points
    }

    /// Arms (or disarms) point collection. Switching modes drops any
    /// half-collected points.
    pub fn set_drawing_mode(&mut self, mode: DrawingMode) {
        self.drawing_mode = mode;
        self.drawing_points.clear();
    }

    /// Feeds one clicked point to the active drawing mode. The second point
    /// completes the object: it is added, selected, snapshotted, and the
    /// mode resets. Returns the new object's id on completion.
    pub fn add_drawing_point(&mut self, point: Point) -> Option<ObjectId> {
        if self.drawing_mode == DrawingMode::None {
            return None;
        }
        self.drawing_points.push(point);
        if self.drawing_points.len() < 2 {
            return None;
        }

        let p1 = self.drawing_points[0];
        let p2 = self.drawing_points[1];
        let make_segment = self.drawing_mode == DrawingMode::Segment;
        self.drawing_mode = DrawingMode::None;
        self.drawing_points.clear();

        let id = if make_segment {
            self.add_segment(p1, p2)
        } else {
            self.add_line(p1, p2)
        };
        Some(id)
    }
}
