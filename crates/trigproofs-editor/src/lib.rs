//! # Trigproofs Editor
//!
//! The scene-state and constraint-resolution engine behind the custom
//! proofs editor: users compose circles, lines, segments, vectors, and
//! hyperbolas whose attributes can be fixed, parameter-driven, animated,
//! or derived from other objects.
//!
//! ## Core Components
//!
//! - **Model**: The tagged object union (circle, hyperbola, line, segment,
//!   vector) with parameter-driven derivations declared on circles
//! - **Resolver**: Derives effective centers/radii through center-on-curve
//!   chains and radial functions; guards the graph against cycles
//! - **Intersections**: Exact line/segment/circle intersection points with
//!   epsilon-based degenerate-case handling
//! - **Parameters**: The scalar knobs driving derivations, reconciled
//!   (created, relabelled, pruned) as object features change
//! - **Animation**: One-shot parameter sweeps advanced from an external
//!   frame loop that runs only while something animates
//! - **History**: Capacity-bounded snapshot undo/redo with gesture
//!   collapsing
//!
//! ## Architecture
//!
//! ```text
//! EditorState (command surface, one writer path)
//!   ├── ObjectStore (z-ordered scene objects)
//!   ├── ParameterStore (knobs, keyed by id)
//!   ├── History (snapshots + cursor + gesture mark)
//!   └── drawing/selection (transient interaction state)
//!
//! Resolver (read-only, pulled on demand)
//!   └── ExpressionEvaluator (external collaborator)
//!
//! intersect (pure functions over resolved geometry)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use trigproofs_editor::{CircleSpec, EditorState, ObjectSpec};
//!
//! let mut state = EditorState::new();
//! let id = state.add_object(ObjectSpec::Circle(CircleSpec {
//!     cx: 1.0,
//!     r: 0.5,
//!     ..CircleSpec::default()
//! }));
//! let (center, radius) = state.effective_circle(id).unwrap();
//! assert_eq!((center.x, radius), (1.0, 0.5));
//! state.undo();
//! ```

pub mod animation;
pub mod editor_state;
pub mod history;
pub mod intersect;
pub mod known_functions;
pub mod model;
pub mod object_store;
pub mod params;
pub mod reconcile;
pub mod resolver;

pub use animation::{has_active, tick, TickReport};
pub use editor_state::{
    CircleSpec, DrawingMode, EditorState, HyperbolaSpec, IntersectionSet, ObjectPatch, ObjectSpec,
};
pub use history::{History, Snapshot};
pub use intersect::{intersection_points, IntersectionPoints};
pub use known_functions::{KnownFunction, KNOWN_RADIAL_FUNCTIONS};
pub use model::{
    CenterOnCurve, Circle, Hyperbola, HyperbolaForm, Line, LineSegment, ObjectId, ObjectType,
    ParamId, RadialFunction, SceneObject, Shape, Vector,
};
pub use object_store::ObjectStore;
pub use params::{Direction, Parameter, ParameterRole, ParameterStore};
pub use reconcile::CenterSpec;
pub use resolver::{DifferentialGeometry, Resolver, TraceCircle, VectorGeometry};

// Re-export the boundary pieces callers wire up.
pub use trigproofs_core::eval::{EvalError, ExpressionEvaluator, FnEvaluator, NullEvaluator};
pub use trigproofs_core::math::Point;
pub use trigproofs_core::{EditorError, ViewTransform};
