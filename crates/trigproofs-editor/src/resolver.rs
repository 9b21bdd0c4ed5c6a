//! Dependency resolver: derives effective geometry from base fields,
//! parameters, and parent objects.
//!
//! The resolver never mutates state. Rendering and the intersection engine
//! pull it on demand; every dangling reference degrades to the object's
//! static fields with a non-fatal integrity warning. Derivation chains are
//! kept acyclic by [`Resolver::check_cycle`], which the editor runs before
//! accepting any center-on-curve reassignment — the recursive walks here
//! rely on that edit-time guarantee rather than a depth limit.

use std::collections::HashSet;

use trigproofs_core::eval::ExpressionEvaluator;
use trigproofs_core::math::Point;

use crate::model::{CenterOnCurve, Circle, ObjectId, Vector};
use crate::object_store::ObjectStore;
use crate::params::ParameterStore;

/// Geometry derived for a vector, in world coordinates. Plain data for the
/// rendering boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorGeometry {
    /// Effective center of the parent circle.
    pub origin: Point,
    /// Boundary point the vector points at.
    pub tip: Point,
    pub angle: f64,
    pub radius: f64,
    /// Unit tangent at the tip (counter-clockwise); direction of both the
    /// perpendicular marker and the derivative vector.
    pub tangent: Point,
    pub differential: Option<DifferentialGeometry>,
}

/// Endpoints for the dx/dy differential triangle at the vector tip.
#[derive(Debug, Clone, PartialEq)]
pub struct DifferentialGeometry {
    /// Boundary point at θ + dθ.
    pub aux_tip: Point,
    /// Right-angle corner splitting the tip→aux_tip step into dx and dy.
    pub corner: Point,
    pub arc_angle: f64,
}

/// One sampled circle of a discrete radial-function trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceCircle {
    pub center: Point,
    pub radius: f64,
    /// The driving-parameter value this sample was taken at.
    pub x: f64,
}

/// Read-only view resolving effective geometry against the live stores.
pub struct Resolver<'a> {
    objects: &'a ObjectStore,
    parameters: &'a ParameterStore,
    evaluator: &'a dyn ExpressionEvaluator,
}

impl<'a> Resolver<'a> {
    pub fn new(
        objects: &'a ObjectStore,
        parameters: &'a ParameterStore,
        evaluator: &'a dyn ExpressionEvaluator,
    ) -> Self {
        Self {
            objects,
            parameters,
            evaluator,
        }
    }

    /// The circle's drawn radius: `|f(x)|` when a radial function applies,
    /// the base radius otherwise. Evaluation failure falls back to the base
    /// radius; the result is never negative.
    pub fn effective_radius(&self, circle: &Circle) -> f64 {
        if let Some(rf) = &circle.radial_function {
            match self.parameters.get(rf.parameter) {
                Some(param) => match self.evaluator.evaluate(&rf.expression, param.value) {
                    Ok(value) => return value.abs().max(0.0),
                    Err(err) => {
                        tracing::warn!(
                            expression = rf.expression.as_str(),
                            x = param.value,
                            %err,
                            "radial function evaluation failed, using base radius"
                        );
                    }
                },
                None => {
                    tracing::warn!(
                        parameter = rf.parameter,
                        "radial function parameter missing, using base radius"
                    );
                }
            }
        }
        circle.r.max(0.0)
    }

    /// The circle's drawn center: the base center, or a point on the parent
    /// circle's boundary when `center_on_curve` is set. Any dangling
    /// reference falls back to the base center.
    pub fn effective_center(&self, circle: &Circle) -> Point {
        let fallback = Point::new(circle.cx, circle.cy);
        let Some(coc) = &circle.center_on_curve else {
            return fallback;
        };

        let Some(parent_circle) = self
            .objects
            .get(coc.parent())
            .and_then(|o| o.shape.as_circle())
        else {
            tracing::warn!(parent = coc.parent(), "center-on-curve parent is not a live circle");
            return fallback;
        };

        let angle = match coc {
            CenterOnCurve::Parametric { parameter, .. } => {
                match self.parameters.get(*parameter) {
                    Some(param) => param.value,
                    None => {
                        tracing::warn!(parameter, "center-on-curve position parameter missing");
                        return fallback;
                    }
                }
            }
            CenterOnCurve::OnVector { parent, vector } => {
                let followed = self
                    .objects
                    .get(*vector)
                    .and_then(|o| o.shape.as_vector())
                    .filter(|v| v.parent == *parent);
                let Some(followed) = followed else {
                    tracing::warn!(vector, "followed vector missing or on a different circle");
                    return fallback;
                };
                match self.parameters.get(followed.angle_parameter) {
                    Some(param) => param.value,
                    None => {
                        tracing::warn!(
                            parameter = followed.angle_parameter,
                            "followed vector's angle parameter missing"
                        );
                        return fallback;
                    }
                }
            }
        };

        let parent_center = self.effective_center(parent_circle);
        let parent_radius = self.effective_radius(parent_circle);
        parent_center.polar_offset(parent_radius, angle)
    }

    /// Effective (center, radius) for the object, when it is a circle.
    pub fn effective_circle(&self, id: ObjectId) -> Option<(Point, f64)> {
        let circle = self.objects.get(id)?.shape.as_circle()?;
        Some((self.effective_center(circle), self.effective_radius(circle)))
    }

    /// Walks the center-on-curve parent chain from `proposed_parent` and
    /// reports whether attaching `editing` to it would close a cycle. A
    /// repeated node also counts as a cycle.
    pub fn check_cycle(&self, editing: ObjectId, proposed_parent: ObjectId) -> bool {
        let mut visited = HashSet::new();
        let mut current = Some(proposed_parent);
        while let Some(id) = current {
            if id == editing {
                return true;
            }
            if !visited.insert(id) {
                return true;
            }
            current = self
                .objects
                .get(id)
                .and_then(|o| o.shape.as_circle())
                .and_then(|c| c.center_on_curve.as_ref())
                .map(|coc| coc.parent());
        }
        false
    }

    /// Derives a vector's drawable geometry. `None` (plus an integrity
    /// warning) when the parent circle or angle parameter is gone.
    pub fn vector_geometry(&self, vector: &Vector) -> Option<VectorGeometry> {
        let Some(parent) = self
            .objects
            .get(vector.parent)
            .and_then(|o| o.shape.as_circle())
        else {
            tracing::warn!(parent = vector.parent, "vector parent is not a live circle");
            return None;
        };
        let Some(param) = self.parameters.get(vector.angle_parameter) else {
            tracing::warn!(
                parameter = vector.angle_parameter,
                "vector angle parameter missing"
            );
            return None;
        };

        let angle = param.value;
        let origin = self.effective_center(parent);
        let radius = self.effective_radius(parent);
        let tip = origin.polar_offset(radius, angle);
        let tangent = Point::new(-angle.sin(), angle.cos());

        let differential = vector.show_differentials.then(|| {
            let aux_tip = origin.polar_offset(radius, angle + vector.differential_arc_angle);
            DifferentialGeometry {
                aux_tip,
                corner: Point::new(aux_tip.x, tip.y),
                arc_angle: vector.differential_arc_angle,
            }
        });

        Some(VectorGeometry {
            origin,
            tip,
            angle,
            radius,
            tangent,
            differential,
        })
    }

    /// Samples a radial-function circle across its driving parameter's
    /// range. Samples whose evaluation fails are skipped.
    pub fn discrete_trace_centers(&self, circle: &Circle) -> Vec<TraceCircle> {
        let Some(rf) = &circle.radial_function else {
            return Vec::new();
        };
        let Some(param) = self.parameters.get(rf.parameter) else {
            return Vec::new();
        };

        let steps = circle.discrete_trace_steps.max(2) as usize;
        let center = self.effective_center(circle);
        let span = param.max - param.min;
        let mut traces = Vec::with_capacity(steps);
        for i in 0..steps {
            let x = param.min + span * i as f64 / (steps - 1) as f64;
            if let Ok(value) = self.evaluator.evaluate(&rf.expression, x) {
                let radius = value.abs().max(0.0);
                if radius.is_finite() {
                    traces.push(TraceCircle { center, radius, x });
                }
            }
        }
        traces
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RadialFunction, SceneObject, Shape};
    use crate::params::Parameter;
    use std::f64::consts::FRAC_PI_2;
    use trigproofs_core::eval::{EvalError, FnEvaluator, NullEvaluator};
    use trigproofs_core::math::approx_eq;
    use trigproofs_core::Point;

    fn add_circle(objects: &mut ObjectStore, circle: Circle) -> ObjectId {
        let id = objects.generate_id();
        objects.insert(SceneObject::new(id, "c", "#fff", Shape::Circle(circle)));
        id
    }

    #[test]
    fn test_plain_circle_uses_base_fields() {
        let mut objects = ObjectStore::new();
        let params = ParameterStore::new();
        let id = add_circle(&mut objects, Circle::new(2.0, -1.0, 0.75));
        let resolver = Resolver::new(&objects, &params, &NullEvaluator);
        let (center, radius) = resolver.effective_circle(id).unwrap();
        assert_eq!(center, Point::new(2.0, -1.0));
        assert!(approx_eq(radius, 0.75));
    }

    #[test]
    fn test_parametric_center_chain_depth_two() {
        let mut objects = ObjectStore::new();
        let mut params = ParameterStore::new();
        let base = add_circle(&mut objects, Circle::fixed(0.0, 0.0, 1.0));

        let p_mid = params.generate_id();
        let mut mid_param = Parameter::for_role(
            p_mid,
            0,
            crate::params::ParameterRole::CenterOnCurvePosition,
            "Position",
        );
        mid_param.value = 0.0;
        params.insert(mid_param);
        let mut mid_circle = Circle::new(9.0, 9.0, 0.5);
        mid_circle.center_on_curve = Some(CenterOnCurve::Parametric {
            parent: base,
            parameter: p_mid,
        });
        let mid = add_circle(&mut objects, mid_circle);

        let p_top = params.generate_id();
        let mut top_param = Parameter::for_role(
            p_top,
            0,
            crate::params::ParameterRole::CenterOnCurvePosition,
            "Position",
        );
        top_param.value = FRAC_PI_2;
        params.insert(top_param);
        let mut top_circle = Circle::new(0.0, 0.0, 0.25);
        top_circle.center_on_curve = Some(CenterOnCurve::Parametric {
            parent: mid,
            parameter: p_top,
        });
        let top = add_circle(&mut objects, top_circle);

        let resolver = Resolver::new(&objects, &params, &NullEvaluator);
        // mid sits at angle 0 on the unit circle: (1, 0). top sits at π/2 on
        // mid's radius-0.5 boundary: (1, 0.5).
        let (center, _) = resolver.effective_circle(top).unwrap();
        assert!(approx_eq(center.x, 1.0));
        assert!(approx_eq(center.y, 0.5));
    }

    #[test]
    fn test_dangling_parent_falls_back_to_base_center() {
        let mut objects = ObjectStore::new();
        let params = ParameterStore::new();
        let mut circle = Circle::new(3.0, 4.0, 1.0);
        circle.center_on_curve = Some(CenterOnCurve::Parametric {
            parent: 999,
            parameter: 1,
        });
        let id = add_circle(&mut objects, circle);
        let resolver = Resolver::new(&objects, &params, &NullEvaluator);
        let (center, _) = resolver.effective_circle(id).unwrap();
        assert_eq!(center, Point::new(3.0, 4.0));
    }

    #[test]
    fn test_radial_function_and_fallback() {
        let mut objects = ObjectStore::new();
        let mut params = ParameterStore::new();
        let px = params.generate_id();
        let mut x_param =
            Parameter::for_role(px, 0, crate::params::ParameterRole::RadialFunctionX, "x");
        x_param.value = -2.0;
        params.insert(x_param);
        let mut circle = Circle::new(0.0, 0.0, 0.4);
        circle.radial_function = Some(RadialFunction {
            expression: "x".to_string(),
            parameter: px,
        });
        let id = add_circle(&mut objects, circle);

        // |f(-2)| = 2
        let eval = FnEvaluator(|_: &str, x: f64| Ok(x));
        let resolver = Resolver::new(&objects, &params, &eval);
        let (_, radius) = resolver.effective_circle(id).unwrap();
        assert!(approx_eq(radius, 2.0));

        // Evaluation failure falls back to the base radius.
        let failing = FnEvaluator(|_: &str, _: f64| Err(EvalError::Parse("bad".into())));
        let resolver = Resolver::new(&objects, &params, &failing);
        let (_, radius) = resolver.effective_circle(id).unwrap();
        assert!(approx_eq(radius, 0.4));
    }

    #[test]
    fn test_check_cycle_self_and_two_cycle() {
        let mut objects = ObjectStore::new();
        let params = ParameterStore::new();
        let a = add_circle(&mut objects, Circle::new(0.0, 0.0, 1.0));
        let b = add_circle(&mut objects, Circle::new(1.0, 0.0, 1.0));

        {
            let resolver = Resolver::new(&objects, &params, &NullEvaluator);
            assert!(resolver.check_cycle(a, a));
            assert!(!resolver.check_cycle(b, a));
        }

        // Attach B onto A, then attempt A onto B: a 2-cycle.
        objects
            .get_mut(b)
            .unwrap()
            .shape = Shape::Circle({
            let mut c = Circle::new(1.0, 0.0, 1.0);
            c.center_on_curve = Some(CenterOnCurve::Parametric {
                parent: a,
                parameter: 1,
            });
            c
        });
        let resolver = Resolver::new(&objects, &params, &NullEvaluator);
        assert!(resolver.check_cycle(a, b));
    }

    #[test]
    fn test_discrete_trace_skips_failures() {
        let mut objects = ObjectStore::new();
        let mut params = ParameterStore::new();
        let px = params.generate_id();
        params.insert(Parameter::for_role(
            px,
            0,
            crate::params::ParameterRole::RadialFunctionX,
            "x",
        ));
        let mut circle = Circle::new(0.0, 0.0, 1.0);
        circle.radial_function = Some(RadialFunction {
            expression: "1/x".to_string(),
            parameter: px,
        });
        circle.discrete_trace_steps = 11;
        let id = add_circle(&mut objects, circle);

        let eval = FnEvaluator(|_: &str, x: f64| {
            if x == 0.0 {
                Err(EvalError::NonFinite)
            } else {
                Ok(1.0 / x)
            }
        });
        let resolver = Resolver::new(&objects, &params, &eval);
        let circle = objects.get(id).unwrap().shape.as_circle().unwrap();
        let traces = resolver.discrete_trace_centers(circle);
        // The x = 0 sample in [-5, 5] fails and is skipped.
        assert_eq!(traces.len(), 10);
        assert!(traces.iter().all(|t| t.radius.is_finite()));
    }
}
