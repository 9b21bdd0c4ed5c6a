//! Shared numeric defaults for the proof editor.

/// Pixels per geometric unit at zoom 1.0.
pub const INITIAL_SCALE: f64 = 50.0;

/// Minimum zoom factor applied on top of the base scale.
pub const MIN_ZOOM: f64 = 0.1;

/// Maximum zoom factor applied on top of the base scale.
pub const MAX_ZOOM: f64 = 10.0;

/// Logical viewport size handed to the rendering layer.
pub const VIEWBOX_WIDTH: f64 = 800.0;
pub const VIEWBOX_HEIGHT: f64 = 600.0;

/// Default number of samples for discrete radial-function traces.
pub const DEFAULT_DISCRETE_TRACE_STEPS: u32 = 20;

/// Valid range for user-supplied discrete trace step counts.
pub const MIN_DISCRETE_TRACE_STEPS: u32 = 2;
pub const MAX_DISCRETE_TRACE_STEPS: u32 = 400;

/// Default dθ (radians) for vector differential visualization.
pub const DEFAULT_DIFFERENTIAL_ARC_ANGLE: f64 = 0.1;
pub const MIN_DIFFERENTIAL_ARC_ANGLE: f64 = 0.01;
pub const MAX_DIFFERENTIAL_ARC_ANGLE: f64 = 0.5;

/// Parametric range and sample count used when tracing hyperbola branches.
pub const HYPERBOLA_RENDER_RANGE_T: f64 = 3.0;
pub const HYPERBOLA_POINTS: usize = 50;

/// Smallest radius accepted for an editable (non-fixed) circle.
pub const MIN_CIRCLE_RADIUS: f64 = 0.01;

/// Smallest constant accepted for a hyperbola.
pub const MIN_HYPERBOLA_CONSTANT: f64 = 0.01;

/// Default fill/stroke color assigned to new objects.
pub const DEFAULT_OBJECT_COLOR: &str = "#3b82f6";

/// Color assigned to new hyperbolas.
pub const HYPERBOLA_COLOR: &str = "#ef4444";

/// Maximum number of undo snapshots retained.
pub const MAX_HISTORY_LENGTH: usize = 50;
