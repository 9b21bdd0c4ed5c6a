//! Parameter reconciliation for object updates.
//!
//! Each circle feature that needs a driving parameter (radial-function `x`,
//! parametric center-on-curve position) declares its role here. The
//! reconciler reuses the parameter already serving that role on the object,
//! creates one with role defaults otherwise, and prunes parameters whose
//! feature went away — unless another still-active feature on the same
//! object references the same id.
//!
//! Relabelling is a separate, deliberately narrow pass: only labels of the
//! exact form `"<prefix> for <old label>"` follow an object rename. A label
//! the user customized no longer matches and is left untouched; that is
//! intentional, not an oversight.

use serde::{Deserialize, Serialize};

use crate::model::{CenterOnCurve, Circle, ObjectId, ParamId, RadialFunction};
use crate::params::{Parameter, ParameterRole, ParameterStore};

/// A requested center-on-curve configuration, before the engine has
/// assigned the driving parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CenterSpec {
    /// Ride `parent`'s boundary at a free angle parameter (engine-owned).
    Parametric { parent: ObjectId },
    /// Follow a vector on `parent`; the angle comes from the vector.
    OnVector { parent: ObjectId, vector: ObjectId },
}

impl CenterSpec {
    pub fn parent(&self) -> ObjectId {
        match self {
            CenterSpec::Parametric { parent } => *parent,
            CenterSpec::OnVector { parent, .. } => *parent,
        }
    }
}

/// Rewrites the circle's derived-feature fields from the desired
/// configuration, wiring in reused or freshly created parameters, then
/// prunes parameters left without a feature.
pub fn reconcile_circle(
    parameters: &mut ParameterStore,
    id: ObjectId,
    label: &str,
    circle: &mut Circle,
    radial_expression: Option<String>,
    center: Option<CenterSpec>,
) {
    circle.radial_function = radial_expression.map(|expression| {
        let parameter = ensure_role_parameter(
            parameters,
            id,
            ParameterRole::RadialFunctionX,
            format!("x for {label}"),
        );
        RadialFunction {
            expression,
            parameter,
        }
    });

    circle.center_on_curve = center.map(|spec| match spec {
        CenterSpec::Parametric { parent } => {
            let parameter = ensure_role_parameter(
                parameters,
                id,
                ParameterRole::CenterOnCurvePosition,
                format!("Position for {label}"),
            );
            CenterOnCurve::Parametric { parent, parameter }
        }
        CenterSpec::OnVector { parent, vector } => CenterOnCurve::OnVector { parent, vector },
    });

    prune_unreferenced(parameters, id, circle);
}

/// Renames owned parameter labels that follow the `"<prefix> for <label>"`
/// pattern after their object was relabelled.
pub fn rename_owned_parameter_labels(
    parameters: &mut ParameterStore,
    object: ObjectId,
    old_label: &str,
    new_label: &str,
) {
    if old_label == new_label {
        return;
    }
    let suffix = format!(" for {old_label}");
    for param in parameters.iter_mut().filter(|p| p.object == object) {
        if let Some(prefix) = param.label.strip_suffix(suffix.as_str()) {
            param.label = format!("{prefix} for {new_label}");
        }
    }
}

fn ensure_role_parameter(
    parameters: &mut ParameterStore,
    object: ObjectId,
    role: ParameterRole,
    label: String,
) -> ParamId {
    if let Some(existing) = parameters.find_role(object, role) {
        return existing.id;
    }
    let id = parameters.generate_id();
    parameters.insert(Parameter::for_role(id, object, role, label));
    id
}

/// Removes reconciler-managed parameters on `object` that no remaining
/// feature references.
fn prune_unreferenced(parameters: &mut ParameterStore, object: ObjectId, circle: &Circle) {
    let mut required: Vec<ParamId> = Vec::new();
    if let Some(rf) = &circle.radial_function {
        required.push(rf.parameter);
    }
    if let Some(CenterOnCurve::Parametric { parameter, .. }) = &circle.center_on_curve {
        required.push(*parameter);
    }

    let stale: Vec<ParamId> = parameters
        .owned_by(object)
        .filter(|p| {
            matches!(
                p.role,
                ParameterRole::RadialFunctionX | ParameterRole::CenterOnCurvePosition
            ) && !required.contains(&p.id)
        })
        .map(|p| p.id)
        .collect();
    for id in stale {
        parameters.remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reuse_existing_role_parameter() {
        let mut parameters = ParameterStore::new();
        let mut circle = Circle::new(0.0, 0.0, 1.0);

        reconcile_circle(
            &mut parameters,
            5,
            "Circle 1",
            &mut circle,
            Some("sin(x)".into()),
            None,
        );
        let first = circle.radial_function.as_ref().unwrap().parameter;
        assert_eq!(parameters.get(first).unwrap().label, "x for Circle 1");

        // Changing the expression keeps the same driving parameter.
        reconcile_circle(
            &mut parameters,
            5,
            "Circle 1",
            &mut circle,
            Some("cos(x)".into()),
            None,
        );
        assert_eq!(circle.radial_function.as_ref().unwrap().parameter, first);
        assert_eq!(parameters.len(), 1);
    }

    #[test]
    fn test_dropping_feature_prunes_parameter() {
        let mut parameters = ParameterStore::new();
        let mut circle = Circle::new(0.0, 0.0, 1.0);
        reconcile_circle(
            &mut parameters,
            5,
            "C",
            &mut circle,
            Some("x".into()),
            Some(CenterSpec::Parametric { parent: 1 }),
        );
        assert_eq!(parameters.len(), 2);

        reconcile_circle(&mut parameters, 5, "C", &mut circle, None, None);
        assert!(circle.radial_function.is_none());
        assert!(circle.center_on_curve.is_none());
        assert!(parameters.is_empty());
    }

    #[test]
    fn test_switching_to_vector_center_drops_position_parameter() {
        let mut parameters = ParameterStore::new();
        let mut circle = Circle::new(0.0, 0.0, 1.0);
        reconcile_circle(
            &mut parameters,
            5,
            "C",
            &mut circle,
            None,
            Some(CenterSpec::Parametric { parent: 1 }),
        );
        assert_eq!(parameters.len(), 1);

        reconcile_circle(
            &mut parameters,
            5,
            "C",
            &mut circle,
            None,
            Some(CenterSpec::OnVector {
                parent: 1,
                vector: 9,
            }),
        );
        assert!(matches!(
            circle.center_on_curve,
            Some(CenterOnCurve::OnVector { .. })
        ));
        assert!(parameters.is_empty());
    }

    #[test]
    fn test_rename_follows_pattern_only() {
        let mut parameters = ParameterStore::new();
        let a = parameters.generate_id();
        parameters.insert(Parameter::for_role(
            a,
            5,
            ParameterRole::RadialFunctionX,
            "x for Old",
        ));
        let b = parameters.generate_id();
        parameters.insert(Parameter::for_role(
            b,
            5,
            ParameterRole::CenterOnCurvePosition,
            "my own knob",
        ));

        rename_owned_parameter_labels(&mut parameters, 5, "Old", "New");
        assert_eq!(parameters.get(a).unwrap().label, "x for New");
        // Customized label does not match the pattern and stays put.
        assert_eq!(parameters.get(b).unwrap().label, "my own knob");
    }
}
