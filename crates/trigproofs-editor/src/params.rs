//! Parameters: the scalar knobs that drive derived geometry.
//!
//! Every parameter is owned by an object feature (a radial function's `x`,
//! a center-on-curve position, a vector angle) and is created, relabelled,
//! and pruned by the reconciler as the owning feature comes and goes.

use std::collections::BTreeMap;
use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use crate::model::{ObjectId, ParamId};

/// What feature a parameter serves on its owning object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterRole {
    /// The `x` fed into a circle's radial function.
    RadialFunctionX,
    /// The angle placing a circle's center on its parent's boundary.
    CenterOnCurvePosition,
    /// A vector's angle on its circle.
    VectorAngle,
    Generic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: ParamId,
    pub label: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// The object whose feature this parameter drives.
    pub object: ObjectId,
    pub role: ParameterRole,
    pub is_animating: bool,
    /// Units per second; defaults to a five-second full sweep on activation.
    pub animation_speed: Option<f64>,
    pub animation_direction: Direction,
    /// Monotonic timestamp (seconds) of the last animation tick. `None`
    /// until the first tick after activation establishes the baseline.
    pub last_frame_time: Option<f64>,
}

impl Parameter {
    /// Creates a parameter with the default range for its role.
    pub fn for_role(id: ParamId, object: ObjectId, role: ParameterRole, label: impl Into<String>) -> Self {
        let (value, min, max, step) = match role {
            ParameterRole::RadialFunctionX => (0.0, -5.0, 5.0, 0.1),
            ParameterRole::CenterOnCurvePosition => (0.0, 0.0, TAU, 0.01),
            ParameterRole::VectorAngle => (PI / 6.0, 0.0, TAU, 0.01),
            ParameterRole::Generic => (0.0, 0.0, 1.0, 0.1),
        };
        Self {
            id,
            label: label.into(),
            value,
            min,
            max,
            step,
            object,
            role,
            is_animating: false,
            animation_speed: None,
            animation_direction: Direction::Forward,
            last_frame_time: None,
        }
    }

    /// Stops any running animation on this parameter.
    pub fn stop_animation(&mut self) {
        self.is_animating = false;
        self.last_frame_time = None;
    }
}

/// Parameter storage, keyed by id.
///
/// A `BTreeMap` rather than a hash map so per-tick iteration order is
/// deterministic. The id counter lives outside history snapshots, same as
/// the object store's.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParameterStore {
    parameters: BTreeMap<ParamId, Parameter>,
    next_id: ParamId,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self {
            parameters: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn generate_id(&mut self) -> ParamId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn insert(&mut self, parameter: Parameter) {
        self.parameters.insert(parameter.id, parameter);
    }

    pub fn get(&self, id: ParamId) -> Option<&Parameter> {
        self.parameters.get(&id)
    }

    pub fn get_mut(&mut self, id: ParamId) -> Option<&mut Parameter> {
        self.parameters.get_mut(&id)
    }

    pub fn remove(&mut self, id: ParamId) -> Option<Parameter> {
        self.parameters.remove(&id)
    }

    pub fn contains(&self, id: ParamId) -> bool {
        self.parameters.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Parameter> {
        self.parameters.values_mut()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Parameters owned by the given object.
    pub fn owned_by(&self, object: ObjectId) -> impl Iterator<Item = &Parameter> {
        self.parameters.values().filter(move |p| p.object == object)
    }

    /// The parameter serving `role` on `object`, if one exists.
    pub fn find_role(&self, object: ObjectId, role: ParameterRole) -> Option<&Parameter> {
        self.parameters
            .values()
            .find(|p| p.object == object && p.role == role)
    }

    /// Removes every parameter owned by the given object.
    pub fn remove_owned_by(&mut self, object: ObjectId) {
        self.parameters.retain(|_, p| p.object != object);
    }

    /// Replaces the full parameter map (undo/redo restore); the id counter
    /// is left alone.
    pub fn restore(&mut self, parameters: BTreeMap<ParamId, Parameter>) {
        self.parameters = parameters;
    }

    /// A deep copy of the parameter map, for history snapshots.
    pub fn snapshot(&self) -> BTreeMap<ParamId, Parameter> {
        self.parameters.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_defaults() {
        let p = Parameter::for_role(1, 10, ParameterRole::CenterOnCurvePosition, "Position for C");
        assert_eq!(p.min, 0.0);
        assert_eq!(p.max, TAU);
        assert_eq!(p.step, 0.01);
        assert!(!p.is_animating);
    }

    #[test]
    fn test_find_role() {
        let mut store = ParameterStore::new();
        let id = store.generate_id();
        store.insert(Parameter::for_role(id, 7, ParameterRole::VectorAngle, "Angle"));
        assert_eq!(store.find_role(7, ParameterRole::VectorAngle).map(|p| p.id), Some(id));
        assert!(store.find_role(7, ParameterRole::RadialFunctionX).is_none());
        assert!(store.find_role(8, ParameterRole::VectorAngle).is_none());
    }
}
