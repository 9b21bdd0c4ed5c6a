//! Editor state manager for the custom-proofs scene.
//! Owns the object and parameter stores and applies every mutation as a
//! named, atomic transaction.
//!
//! This module is split into submodules for better organization:
//! - `objects`: Object creation, update, deletion, cascades
//! - `parameters`: Parameter edits, gestures, animation control
//! - `history`: Undo/redo integration
//! - `drawing`: Two-click line/segment drawing modes

mod drawing;
mod history;
mod objects;
mod parameters;

pub use drawing::DrawingMode;
pub use objects::{CircleSpec, HyperbolaSpec, ObjectPatch, ObjectSpec};

use trigproofs_core::constants::{DEFAULT_OBJECT_COLOR, MAX_HISTORY_LENGTH};
use trigproofs_core::eval::{ExpressionEvaluator, NullEvaluator};
use trigproofs_core::math::Point;

use crate::history::History;
use crate::intersect::{intersection_points, IntersectionPoints};
use crate::model::{Circle, ObjectId, ParamId, SceneObject, Shape};
use crate::object_store::ObjectStore;
use crate::params::{Parameter, ParameterStore};
use crate::resolver::{Resolver, TraceCircle, VectorGeometry};

/// Intersection markers derived for one `show_intersections_with` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionSet {
    pub source: ObjectId,
    pub target: ObjectId,
    pub points: IntersectionPoints,
}

/// The one live application state. All mutation goes through the named
/// operations on this type; the resolver and intersection queries are
/// read-only views over it.
pub struct EditorState {
    pub(crate) objects: ObjectStore,
    pub(crate) parameters: ParameterStore,
    pub(crate) selected: Option<ObjectId>,
    pub(crate) drawing_mode: DrawingMode,
    pub(crate) drawing_points: Vec<Point>,
    pub(crate) history: History,
    evaluator: Box<dyn ExpressionEvaluator>,
}

impl EditorState {
    /// Creates the initial scene: a fixed-radius unit circle at the origin,
    /// selected, with the seed history entry. Radial functions evaluate
    /// through [`NullEvaluator`] until an evaluator is supplied.
    pub fn new() -> Self {
        Self::with_evaluator(Box::new(NullEvaluator))
    }

    /// Same as [`EditorState::new`] with the embedding application's
    /// expression evaluator plugged in.
    pub fn with_evaluator(evaluator: Box<dyn ExpressionEvaluator>) -> Self {
        let mut objects = ObjectStore::new();
        let id = objects.generate_id();
        objects.insert(SceneObject::new(
            id,
            "Unit Circle",
            DEFAULT_OBJECT_COLOR,
            Shape::Circle(Circle::fixed(0.0, 0.0, 1.0)),
        ));

        let mut state = Self {
            objects,
            parameters: ParameterStore::new(),
            selected: Some(id),
            drawing_mode: DrawingMode::None,
            drawing_points: Vec::new(),
            history: History::new(MAX_HISTORY_LENGTH),
            evaluator,
        };
        state.push_history();
        state
    }

    // --- Read-only queries (rendering boundary) ---

    /// Scene objects in z-order, bottom first.
    pub fn objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter()
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id)
    }

    pub fn parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter()
    }

    pub fn parameter(&self, id: ParamId) -> Option<&Parameter> {
        self.parameters.get(id)
    }

    pub fn selected_id(&self) -> Option<ObjectId> {
        self.selected
    }

    /// Selection is transient interaction state: it is not snapshotted and
    /// is cleared by undo/redo.
    pub fn select(&mut self, id: Option<ObjectId>) {
        self.selected = id;
    }

    /// A resolver over the current stores and evaluator.
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.objects, &self.parameters, self.evaluator.as_ref())
    }

    /// Effective (center, radius) for a circle object.
    pub fn effective_circle(&self, id: ObjectId) -> Option<(Point, f64)> {
        self.resolver().effective_circle(id)
    }

    /// Derived drawable geometry for a vector object.
    pub fn vector_geometry(&self, id: ObjectId) -> Option<VectorGeometry> {
        let vector = self.objects.get(id)?.shape.as_vector()?;
        self.resolver().vector_geometry(vector)
    }

    /// Discrete radial-function trace samples for a circle object.
    pub fn discrete_traces(&self, id: ObjectId) -> Vec<TraceCircle> {
        let Some(circle) = self.objects.get(id).and_then(|o| o.shape.as_circle()) else {
            return Vec::new();
        };
        if !circle.show_discrete_traces {
            return Vec::new();
        }
        self.resolver().discrete_trace_centers(circle)
    }

    /// Every intersection marker requested via `show_intersections_with`,
    /// resolved against current effective geometry. Targets that no longer
    /// exist are skipped.
    pub fn visible_intersections(&self) -> Vec<IntersectionSet> {
        let resolver = self.resolver();
        let mut sets = Vec::new();
        for source in self.objects.iter() {
            let Some(targets) = source.shape.show_intersections_with() else {
                continue;
            };
            for &target in targets {
                let Some(target_obj) = self.objects.get(target) else {
                    continue;
                };
                let points = intersection_points(source, target_obj, &resolver);
                if !points.is_empty() {
                    sets.push(IntersectionSet {
                        source: source.id,
                        target,
                        points,
                    });
                }
            }
        }
        sets
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
