//! Object operations (add, update, delete, cascades) for editor state.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use trigproofs_core::constants::{
    DEFAULT_DISCRETE_TRACE_STEPS, DEFAULT_OBJECT_COLOR, HYPERBOLA_COLOR, MAX_DISCRETE_TRACE_STEPS,
    MIN_CIRCLE_RADIUS, MIN_DISCRETE_TRACE_STEPS, MIN_HYPERBOLA_CONSTANT,
};
use trigproofs_core::error::EditorError;
use trigproofs_core::math::Point;
use trigproofs_core::Result;

use super::EditorState;
use crate::model::{
    CenterOnCurve, Circle, Hyperbola, HyperbolaForm, Line, LineSegment, ObjectId, ObjectType,
    SceneObject, Shape, Vector,
};
use crate::params::{Parameter, ParameterRole};
use crate::reconcile::{reconcile_circle, rename_owned_parameter_labels, CenterSpec};

/// Options for a new circle. Defaults give a unit circle at the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleSpec {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub is_fixed_radius: bool,
    /// Creates the circle with a radial function (and its `x` parameter).
    /// Ignored for fixed-radius circles.
    pub radial_expression: Option<String>,
    /// Creates the circle parametrically centered on this parent circle
    /// (and its position parameter).
    pub center_on_parent: Option<ObjectId>,
    pub show_discrete_traces: bool,
    pub discrete_trace_steps: Option<u32>,
    pub label: Option<String>,
    pub color: Option<String>,
}

impl Default for CircleSpec {
    fn default() -> Self {
        Self {
            cx: 0.0,
            cy: 0.0,
            r: 1.0,
            is_fixed_radius: false,
            radial_expression: None,
            center_on_parent: None,
            show_discrete_traces: false,
            discrete_trace_steps: None,
            label: None,
            color: None,
        }
    }
}

/// Options for a new hyperbola.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HyperbolaSpec {
    pub form: HyperbolaForm,
    pub cx: f64,
    pub cy: f64,
    pub constant_value: f64,
    pub label: Option<String>,
}

impl Default for HyperbolaSpec {
    fn default() -> Self {
        Self {
            form: HyperbolaForm::XSquaredMinusYSquared,
            cx: 0.0,
            cy: 0.0,
            constant_value: 1.0,
            label: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectSpec {
    Circle(CircleSpec),
    Hyperbola(HyperbolaSpec),
}

/// Partial update applied atomically by [`EditorState::update_object`].
///
/// Fields that do not apply to the target object's variant are ignored, the
/// same way unknown keys fall out of a partial update. The doubled options
/// distinguish "leave alone" (`None`) from "clear" (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectPatch {
    pub label: Option<String>,
    pub color: Option<String>,
    // Circle / hyperbola base geometry
    pub cx: Option<f64>,
    pub cy: Option<f64>,
    pub r: Option<f64>,
    pub is_fixed_radius: Option<bool>,
    pub radial_expression: Option<Option<String>>,
    pub center_on_curve: Option<Option<CenterSpec>>,
    pub show_discrete_traces: Option<bool>,
    pub discrete_trace_steps: Option<u32>,
    pub show_intersections_with: Option<Vec<ObjectId>>,
    // Line / segment
    pub p1: Option<Point>,
    pub p2: Option<Point>,
    // Hyperbola
    pub form: Option<HyperbolaForm>,
    pub constant_value: Option<f64>,
    // Vector
    pub show_perpendicular: Option<bool>,
    pub show_derivative: Option<bool>,
    pub show_differentials: Option<bool>,
    pub differential_arc_angle: Option<f64>,
}

impl ObjectPatch {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }
}

impl EditorState {
    /// Adds a circle or hyperbola, selects it, and pushes history. Auto
    /// labels count existing objects of the same type.
    pub fn add_object(&mut self, spec: ObjectSpec) -> ObjectId {
        match spec {
            ObjectSpec::Circle(spec) => self.add_circle_object(spec),
            ObjectSpec::Hyperbola(spec) => self.add_hyperbola_object(spec),
        }
    }

    fn add_circle_object(&mut self, spec: CircleSpec) -> ObjectId {
        let id = self.objects.generate_id();
        let label = spec
            .label
            .unwrap_or_else(|| self.auto_label(ObjectType::Circle));
        let color = spec.color.unwrap_or_else(|| DEFAULT_OBJECT_COLOR.to_string());

        let mut circle = Circle::new(spec.cx, spec.cy, spec.r.max(MIN_CIRCLE_RADIUS));
        circle.is_fixed_radius = spec.is_fixed_radius;
        circle.show_discrete_traces = spec.show_discrete_traces && !spec.is_fixed_radius;
        if let Some(steps) = spec.discrete_trace_steps {
            circle.discrete_trace_steps = clamp_trace_steps(steps);
        }

        let radial = if spec.is_fixed_radius {
            None
        } else {
            spec.radial_expression
        };
        let center = spec
            .center_on_parent
            .map(|parent| CenterSpec::Parametric { parent });
        reconcile_circle(&mut self.parameters, id, &label, &mut circle, radial, center);

        self.objects
            .insert(SceneObject::new(id, label, color, Shape::Circle(circle)));
        self.selected = Some(id);
        self.push_history();
        id
    }

    fn add_hyperbola_object(&mut self, spec: HyperbolaSpec) -> ObjectId {
        let id = self.objects.generate_id();
        let label = spec
            .label
            .unwrap_or_else(|| self.auto_label(ObjectType::Hyperbola));
        let hyperbola = Hyperbola::new(
            spec.form,
            spec.cx,
            spec.cy,
            spec.constant_value.max(MIN_HYPERBOLA_CONSTANT),
        );
        self.objects.insert(SceneObject::new(
            id,
            label,
            HYPERBOLA_COLOR,
            Shape::Hyperbola(hyperbola),
        ));
        self.selected = Some(id);
        self.push_history();
        id
    }

    /// Adds an infinite line through two points.
    pub fn add_line(&mut self, p1: Point, p2: Point) -> ObjectId {
        let id = self.objects.generate_id();
        let label = self.auto_label(ObjectType::Line);
        self.objects.insert(SceneObject::new(
            id,
            label,
            DEFAULT_OBJECT_COLOR,
            Shape::Line(Line::new(p1, p2)),
        ));
        self.selected = Some(id);
        self.push_history();
        id
    }

    /// Adds a bounded segment between two points.
    pub fn add_segment(&mut self, p1: Point, p2: Point) -> ObjectId {
        let id = self.objects.generate_id();
        let label = self.auto_label(ObjectType::LineSegment);
        self.objects.insert(SceneObject::new(
            id,
            label,
            DEFAULT_OBJECT_COLOR,
            Shape::LineSegment(LineSegment::new(p1, p2)),
        ));
        self.selected = Some(id);
        self.push_history();
        id
    }

    /// Adds a radius vector to a circle, along with its angle parameter.
    pub fn add_vector_to_circle(&mut self, circle_id: ObjectId) -> Result<ObjectId> {
        let circle_obj = self
            .objects
            .get(circle_id)
            .ok_or(EditorError::ObjectNotFound { id: circle_id })?;
        if circle_obj.shape.as_circle().is_none() {
            return Err(EditorError::NotACircle { id: circle_id });
        }
        let color = circle_obj.color.clone();
        let label = format!("Vector on {}", circle_obj.label);

        let id = self.objects.generate_id();
        let param_id = self.parameters.generate_id();
        self.parameters.insert(Parameter::for_role(
            param_id,
            id,
            ParameterRole::VectorAngle,
            format!("Angle for {label}"),
        ));
        self.objects.insert(SceneObject::new(
            id,
            label,
            color,
            Shape::Vector(Vector::new(circle_id, param_id)),
        ));
        self.selected = Some(id);
        self.push_history();
        Ok(id)
    }

    /// Applies a partial update atomically: validation (including the cycle
    /// check on center-on-curve reassignment) happens before any mutation,
    /// so a rejected update leaves the scene untouched.
    pub fn update_object(&mut self, id: ObjectId, patch: ObjectPatch) -> Result<()> {
        let current = self
            .objects
            .get(id)
            .ok_or(EditorError::ObjectNotFound { id })?;
        let mut updated = current.clone();
        let old_label = current.label.clone();

        if let Some(label) = patch.label {
            updated.label = label;
        }
        if let Some(color) = patch.color {
            updated.color = color;
        }

        match &mut updated.shape {
            Shape::Circle(circle) => {
                if let Some(cx) = patch.cx {
                    circle.cx = cx;
                }
                if let Some(cy) = patch.cy {
                    circle.cy = cy;
                }
                if let Some(fixed) = patch.is_fixed_radius {
                    circle.is_fixed_radius = fixed;
                }
                if let Some(r) = patch.r {
                    if !circle.is_fixed_radius {
                        circle.r = r.max(MIN_CIRCLE_RADIUS);
                    }
                }
                if let Some(steps) = patch.discrete_trace_steps {
                    circle.discrete_trace_steps = clamp_trace_steps(steps);
                }
                if let Some(show) = patch.show_discrete_traces {
                    circle.show_discrete_traces = show;
                }
                if let Some(list) = patch.show_intersections_with {
                    circle.show_intersections_with = list;
                }

                // Desired feature set after the patch; a fixed-radius
                // circle silently sheds its radial function.
                let mut radial = match patch.radial_expression {
                    Some(requested) => requested,
                    None => circle.radial_function.as_ref().map(|rf| rf.expression.clone()),
                };
                if circle.is_fixed_radius {
                    radial = None;
                    circle.show_discrete_traces = false;
                }

                let center = match patch.center_on_curve {
                    Some(requested) => {
                        if let Some(spec) = &requested {
                            self.validate_center_spec(id, spec)?;
                        }
                        requested
                    }
                    None => circle.center_on_curve.as_ref().map(|coc| match coc {
                        CenterOnCurve::Parametric { parent, .. } => CenterSpec::Parametric {
                            parent: *parent,
                        },
                        CenterOnCurve::OnVector { parent, vector } => CenterSpec::OnVector {
                            parent: *parent,
                            vector: *vector,
                        },
                    }),
                };

                reconcile_circle(
                    &mut self.parameters,
                    id,
                    &updated.label,
                    circle,
                    radial,
                    center,
                );
            }
            Shape::Hyperbola(hyperbola) => {
                if let Some(form) = patch.form {
                    hyperbola.form = form;
                }
                if let Some(cx) = patch.cx {
                    hyperbola.cx = cx;
                }
                if let Some(cy) = patch.cy {
                    hyperbola.cy = cy;
                }
                if let Some(k) = patch.constant_value {
                    hyperbola.constant_value = k.max(MIN_HYPERBOLA_CONSTANT);
                }
            }
            Shape::Line(line) => {
                if let Some(p1) = patch.p1 {
                    line.p1 = p1;
                }
                if let Some(p2) = patch.p2 {
                    line.p2 = p2;
                }
                if let Some(list) = patch.show_intersections_with {
                    line.show_intersections_with = list;
                }
            }
            Shape::LineSegment(segment) => {
                if let Some(p1) = patch.p1 {
                    segment.p1 = p1;
                }
                if let Some(p2) = patch.p2 {
                    segment.p2 = p2;
                }
                if let Some(list) = patch.show_intersections_with {
                    segment.show_intersections_with = list;
                }
            }
            Shape::Vector(vector) => {
                if let Some(show) = patch.show_perpendicular {
                    vector.show_perpendicular = show;
                }
                if let Some(show) = patch.show_derivative {
                    vector.show_derivative = show;
                }
                if let Some(show) = patch.show_differentials {
                    vector.show_differentials = show;
                }
                if let Some(angle) = patch.differential_arc_angle {
                    vector.differential_arc_angle = angle;
                }
            }
        }

        rename_owned_parameter_labels(&mut self.parameters, id, &old_label, &updated.label);
        self.objects.replace(updated);
        self.maybe_push_history();
        Ok(())
    }

    /// Deletes an object with the full cascade: a circle takes its vectors
    /// (and their angle parameters) with it, followers have their
    /// center-on-curve cleared instead of dangling, intersection lists are
    /// scrubbed, and orphaned parameters are removed.
    pub fn delete_object(&mut self, id: ObjectId) -> Result<()> {
        let target = self
            .objects
            .get(id)
            .ok_or(EditorError::ObjectNotFound { id })?;

        let mut removed: HashSet<ObjectId> = HashSet::new();
        removed.insert(id);
        if matches!(target.shape, Shape::Circle(_)) {
            for obj in self.objects.iter() {
                if let Shape::Vector(v) = &obj.shape {
                    if v.parent == id {
                        removed.insert(obj.id);
                    }
                }
            }
        }

        // Clear dependents and scrub intersection lists on the survivors.
        let mut orphaned_params = Vec::new();
        for obj in self.objects.iter_mut() {
            if removed.contains(&obj.id) {
                continue;
            }
            if let Shape::Circle(circle) = &mut obj.shape {
                let clears = match &circle.center_on_curve {
                    Some(CenterOnCurve::Parametric { parent, parameter }) => {
                        if removed.contains(parent) {
                            orphaned_params.push(*parameter);
                            true
                        } else {
                            false
                        }
                    }
                    Some(CenterOnCurve::OnVector { parent, vector }) => {
                        removed.contains(parent) || removed.contains(vector)
                    }
                    None => false,
                };
                if clears {
                    circle.center_on_curve = None;
                }
            }
            if let Some(list) = obj.shape.show_intersections_with_mut() {
                list.retain(|t| !removed.contains(t));
            }
        }

        for param_id in orphaned_params {
            self.parameters.remove(param_id);
        }
        for &removed_id in &removed {
            self.parameters.remove_owned_by(removed_id);
            self.objects.remove(removed_id);
        }
        if self.selected.is_some_and(|sel| removed.contains(&sel)) {
            self.selected = None;
        }
        self.push_history();
        Ok(())
    }

    fn validate_center_spec(&self, editing: ObjectId, spec: &CenterSpec) -> Result<()> {
        let parent = spec.parent();
        let parent_obj = self
            .objects
            .get(parent)
            .ok_or(EditorError::ObjectNotFound { id: parent })?;
        if parent_obj.shape.as_circle().is_none() {
            return Err(EditorError::NotACircle { id: parent });
        }
        if self.resolver().check_cycle(editing, parent) {
            return Err(EditorError::CircularDependency {
                id: editing,
                parent,
            });
        }
        Ok(())
    }

    fn auto_label(&self, object_type: ObjectType) -> String {
        format!(
            "{} {}",
            object_type.display_name(),
            self.objects.count_of_type(object_type) + 1
        )
    }
}

fn clamp_trace_steps(steps: u32) -> u32 {
    if (MIN_DISCRETE_TRACE_STEPS..=MAX_DISCRETE_TRACE_STEPS).contains(&steps) {
        steps
    } else {
        DEFAULT_DISCRETE_TRACE_STEPS
    }
}
