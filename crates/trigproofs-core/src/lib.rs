//! # Trigproofs Core
//!
//! Core types and boundary traits for the Trigproofs proof editor.
//! Provides the 2D geometry primitives, the world/screen view transform,
//! the expression-evaluator boundary, and the shared error types that the
//! editor engine builds on.

pub mod constants;
pub mod error;
pub mod eval;
pub mod math;
pub mod view;

pub use error::{EditorError, Result};
pub use eval::{EvalError, ExpressionEvaluator, FnEvaluator, NullEvaluator};
pub use math::{approx_eq, approx_zero, Point, EPSILON};
pub use view::ViewTransform;
