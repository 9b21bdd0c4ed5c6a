//! Expression-evaluator boundary.
//!
//! Radial functions are user-supplied expression strings (`sin(x)`,
//! `sec(x)`, `x^2`, ...). Parsing and evaluating them is the embedding
//! application's job; the engine only needs a way to ask for `f(x)` and a
//! guarantee that failures are reported, not thrown. The dependency
//! resolver treats any error, NaN, or non-finite result as "no value" and
//! falls back to the circle's base radius.

use thiserror::Error;

/// Evaluation failure reported by an [`ExpressionEvaluator`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The expression could not be parsed.
    #[error("Cannot parse expression: {0}")]
    Parse(String),

    /// The expression evaluated to NaN or an infinity.
    #[error("Expression produced a non-finite value")]
    NonFinite,

    /// No evaluator is available in this configuration.
    #[error("No expression evaluator configured")]
    Unavailable,
}

/// Evaluates a single-variable expression at a given `x`.
pub trait ExpressionEvaluator {
    /// Evaluates `expression` with the binding `x`. Implementations must
    /// return `Err(EvalError::NonFinite)` rather than a NaN/infinite value.
    fn evaluate(&self, expression: &str, x: f64) -> Result<f64, EvalError>;
}

/// Adapter turning a plain function or closure into an evaluator.
///
/// Mostly useful in tests and demos, where the "expression language" can be
/// a Rust closure ignoring or interpreting the expression string.
pub struct FnEvaluator<F>(pub F);

impl<F> ExpressionEvaluator for FnEvaluator<F>
where
    F: Fn(&str, f64) -> Result<f64, EvalError>,
{
    fn evaluate(&self, expression: &str, x: f64) -> Result<f64, EvalError> {
        let value = (self.0)(expression, x)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::NonFinite)
        }
    }
}

/// Evaluator that always fails; radial functions fall back to base radii.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEvaluator;

impl ExpressionEvaluator for NullEvaluator {
    fn evaluate(&self, _expression: &str, _x: f64) -> Result<f64, EvalError> {
        Err(EvalError::Unavailable)
    }
}
