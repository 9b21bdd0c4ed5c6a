use serde::{Deserialize, Serialize};

use trigproofs_core::math::Point;

use super::ObjectId;

/// An infinite line through two points. Rendering extends it to the
/// viewport edges; the two points only fix its direction and position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
    pub show_intersections_with: Vec<ObjectId>,
}

impl Line {
    pub fn new(p1: Point, p2: Point) -> Self {
        Self {
            p1,
            p2,
            show_intersections_with: Vec::new(),
        }
    }
}

/// A bounded segment between two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub p1: Point,
    pub p2: Point,
    pub show_intersections_with: Vec<ObjectId>,
}

impl LineSegment {
    pub fn new(p1: Point, p2: Point) -> Self {
        Self {
            p1,
            p2,
            show_intersections_with: Vec::new(),
        }
    }

    pub fn length(&self) -> f64 {
        self.p1.distance_to(&self.p2)
    }
}
