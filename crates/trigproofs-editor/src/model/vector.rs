use serde::{Deserialize, Serialize};

use trigproofs_core::constants::DEFAULT_DIFFERENTIAL_ARC_ANGLE;

use super::{ObjectId, ParamId};

/// A radius vector anchored on a circle, pointing at the boundary point at
/// its angle parameter's value.
///
/// Both `parent` and `angle_parameter` must resolve to a live circle and
/// parameter; when either is missing the vector derives nothing (the
/// resolver reports `None` and logs an integrity warning, nothing fails).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub parent: ObjectId,
    pub angle_parameter: ParamId,
    pub show_perpendicular: bool,
    pub show_derivative: bool,
    pub show_differentials: bool,
    /// The dθ used for the dx/dy differential visualization.
    pub differential_arc_angle: f64,
}

impl Vector {
    pub fn new(parent: ObjectId, angle_parameter: ParamId) -> Self {
        Self {
            parent,
            angle_parameter,
            show_perpendicular: true,
            show_derivative: false,
            show_differentials: false,
            differential_arc_angle: DEFAULT_DIFFERENTIAL_ARC_ANGLE,
        }
    }
}
