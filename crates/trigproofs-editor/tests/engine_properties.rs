//! Property-based tests for the geometry and history invariants.

use proptest::prelude::*;

use trigproofs_editor::{
    intersection_points, CenterSpec, Circle, CircleSpec, EditorState, Line, NullEvaluator,
    ObjectPatch, ObjectSpec, ObjectStore, ParameterStore, Point, Resolver, SceneObject, Shape,
};

fn coord() -> impl Strategy<Value = f64> {
    -10.0..10.0f64
}

fn line_object(id: u64, a: (f64, f64), b: (f64, f64)) -> SceneObject {
    SceneObject::new(
        id,
        "l",
        "#fff",
        Shape::Line(Line::new(Point::new(a.0, a.1), Point::new(b.0, b.1))),
    )
}

proptest! {
    /// A reported line×line point lies on both infinite lines.
    #[test]
    fn prop_line_line_point_is_on_both_lines(
        a in (coord(), coord()),
        b in (coord(), coord()),
        c in (coord(), coord()),
        d in (coord(), coord()),
    ) {
        // Skip ill-conditioned near-parallel pairs; the parallel branch is
        // covered by the unit tests.
        let den = (a.0 - b.0) * (c.1 - d.1) - (a.1 - b.1) * (c.0 - d.0);
        prop_assume!(den.abs() > 1e-3);

        let objects = ObjectStore::new();
        let params = ParameterStore::new();
        let resolver = Resolver::new(&objects, &params, &NullEvaluator);
        let l1 = line_object(1, a, b);
        let l2 = line_object(2, c, d);
        let points = intersection_points(&l1, &l2, &resolver);
        prop_assert!(points.len() <= 1);
        for p in points {
            // Cross products against both direction vectors vanish.
            let cross1 = (p.y - a.1) * (b.0 - a.0) - (p.x - a.0) * (b.1 - a.1);
            let cross2 = (p.y - c.1) * (d.0 - c.0) - (p.x - c.0) * (d.1 - c.1);
            prop_assert!(cross1.abs() < 1e-5, "off line 1 by {cross1}");
            prop_assert!(cross2.abs() < 1e-5, "off line 2 by {cross2}");
        }
    }

    /// Circle×circle points lie on both circles; never more than two.
    #[test]
    fn prop_circle_circle_points_lie_on_both(
        c1 in (coord(), coord()),
        c2 in (coord(), coord()),
        r1 in 0.1..5.0f64,
        r2 in 0.1..5.0f64,
    ) {
        let mut objects = ObjectStore::new();
        let params = ParameterStore::new();
        let a = objects.generate_id();
        objects.insert(SceneObject::new(a, "a", "#fff", Shape::Circle(Circle::new(c1.0, c1.1, r1))));
        let b = objects.generate_id();
        objects.insert(SceneObject::new(b, "b", "#fff", Shape::Circle(Circle::new(c2.0, c2.1, r2))));
        let resolver = Resolver::new(&objects, &params, &NullEvaluator);

        let points = intersection_points(
            objects.get(a).unwrap(),
            objects.get(b).unwrap(),
            &resolver,
        );
        prop_assert!(points.len() <= 2);
        for p in points {
            let d1 = p.distance_to(&Point::new(c1.0, c1.1));
            let d2 = p.distance_to(&Point::new(c2.0, c2.1));
            prop_assert!((d1 - r1).abs() < 1e-6, "not on circle 1: {d1} vs {r1}");
            prop_assert!((d2 - r2).abs() < 1e-6, "not on circle 2: {d2} vs {r2}");
        }
    }

    /// Closing any link of a center-on-curve chain back onto its tail is
    /// rejected, no matter the chain length.
    #[test]
    fn prop_chain_cycle_always_rejected(depth in 1usize..8) {
        let mut state = EditorState::new();
        let mut chain = vec![state.add_object(ObjectSpec::Circle(CircleSpec::default()))];
        for _ in 0..depth {
            let parent = *chain.last().unwrap();
            chain.push(state.add_object(ObjectSpec::Circle(CircleSpec {
                center_on_parent: Some(parent),
                ..CircleSpec::default()
            })));
        }
        let head = chain[0];
        let tail = *chain.last().unwrap();
        let patch = ObjectPatch {
            center_on_curve: Some(Some(CenterSpec::Parametric { parent: tail })),
            ..ObjectPatch::default()
        };
        prop_assert!(state.update_object(head, patch).is_err());
    }

    /// Any run of discrete edits fully unwinds: undo × n deep-equals the
    /// initial scene.
    #[test]
    fn prop_undo_unwinds_edit_runs(values in proptest::collection::vec(-3.0..3.0f64, 1..10)) {
        let mut state = EditorState::new();
        let circle = state.add_object(ObjectSpec::Circle(CircleSpec {
            radial_expression: Some("x".to_string()),
            ..CircleSpec::default()
        }));
        let x = state
            .parameters()
            .find(|p| p.object == circle)
            .map(|p| p.id)
            .unwrap();
        let baseline: Vec<_> = state.parameters().cloned().collect();

        for &v in &values {
            state.update_parameter(x, v).unwrap();
        }
        for _ in &values {
            prop_assert!(state.undo());
        }
        let unwound: Vec<_> = state.parameters().cloned().collect();
        prop_assert_eq!(baseline, unwound);
    }
}
