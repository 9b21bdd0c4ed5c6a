use serde::{Deserialize, Serialize};

use super::{ObjectId, ParamId};

/// Radius derivation from a user-supplied expression: the effective radius
/// is `|f(x)|` with `x` read from the driving parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialFunction {
    pub expression: String,
    pub parameter: ParamId,
}

/// Declares that a circle's center tracks another circle's boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CenterOnCurve {
    /// Center rides the parent circle at a free angle parameter.
    Parametric { parent: ObjectId, parameter: ParamId },
    /// Center follows a vector on the parent circle; the angle comes from
    /// that vector's own angle parameter.
    OnVector { parent: ObjectId, vector: ObjectId },
}

impl CenterOnCurve {
    pub fn parent(&self) -> ObjectId {
        match self {
            CenterOnCurve::Parametric { parent, .. } => *parent,
            CenterOnCurve::OnVector { parent, .. } => *parent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Base center, used directly unless `center_on_curve` overrides it.
    pub cx: f64,
    pub cy: f64,
    /// Base radius, used directly unless `radial_function` overrides it.
    pub r: f64,
    /// A fixed-radius circle cannot carry a radial function and its radius
    /// is not editable.
    pub is_fixed_radius: bool,
    pub radial_function: Option<RadialFunction>,
    pub center_on_curve: Option<CenterOnCurve>,
    pub show_discrete_traces: bool,
    pub discrete_trace_steps: u32,
    pub show_intersections_with: Vec<ObjectId>,
}

impl Circle {
    pub fn new(cx: f64, cy: f64, r: f64) -> Self {
        Self {
            cx,
            cy,
            r,
            is_fixed_radius: false,
            radial_function: None,
            center_on_curve: None,
            show_discrete_traces: false,
            discrete_trace_steps: trigproofs_core::constants::DEFAULT_DISCRETE_TRACE_STEPS,
            show_intersections_with: Vec::new(),
        }
    }

    pub fn fixed(cx: f64, cy: f64, r: f64) -> Self {
        Self {
            is_fixed_radius: true,
            ..Self::new(cx, cy, r)
        }
    }
}
