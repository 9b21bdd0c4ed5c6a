//! Parameter edits, slider gestures, and animation control.

use trigproofs_core::error::EditorError;
use trigproofs_core::Result;

use super::EditorState;
use crate::animation::{self, TickReport};
use crate::model::ParamId;
use crate::params::Direction;

impl EditorState {
    /// Sets a parameter's value as a discrete edit. Stops any animation on
    /// the parameter. Not snapshotted while the parameter is mid-gesture
    /// (the gesture end takes care of that) or was animating.
    pub fn update_parameter(&mut self, id: ParamId, value: f64) -> Result<()> {
        let in_gesture = self.history.gesture_target() == Some(id);
        let was_animating = {
            let param = self
                .parameters
                .get_mut(id)
                .ok_or(EditorError::ParameterNotFound { id })?;
            let was = param.is_animating;
            param.value = value;
            param.stop_animation();
            was
        };
        if !in_gesture && !was_animating {
            self.push_history();
        }
        Ok(())
    }

    /// Starts a gesture (e.g. a slider drag): pushes the pre-gesture
    /// snapshot and suppresses per-update snapshots until the gesture ends.
    /// The target id may also name an object feature with no backing
    /// parameter; only the snapshot bracketing applies then.
    pub fn begin_gesture(&mut self, target: ParamId) {
        self.push_history();
        self.history.begin_gesture(target);
    }

    /// Ends a gesture: applies the final value and pushes exactly one
    /// post-gesture snapshot. Ignored when `target` is not the active
    /// gesture (e.g. it was cancelled by undo).
    pub fn end_gesture(&mut self, target: ParamId, final_value: f64) {
        if self.history.gesture_target() != Some(target) {
            return;
        }
        self.history.clear_gesture();
        if let Some(param) = self.parameters.get_mut(target) {
            param.value = final_value;
            param.stop_animation();
        }
        self.push_history();
    }

    /// Starts or stops a one-shot animation sweep on the parameter.
    ///
    /// Activation picks the direction away from a bound the value already
    /// sits on, defaults the speed to a five-second full sweep, and pushes
    /// the pre-activation snapshot so the whole sweep undoes in one step.
    /// Stopping is idempotent from the caller's perspective and pushes the
    /// stop-state snapshot.
    pub fn toggle_animation(&mut self, id: ParamId) -> Result<()> {
        let is_animating = self
            .parameters
            .get(id)
            .ok_or(EditorError::ParameterNotFound { id })?
            .is_animating;

        if !is_animating {
            self.push_history();
            if let Some(param) = self.parameters.get_mut(id) {
                if param.value >= param.max {
                    param.animation_direction = Direction::Backward;
                } else if param.value <= param.min {
                    param.animation_direction = Direction::Forward;
                }
                if param.animation_speed.is_none() {
                    param.animation_speed = Some((param.max - param.min) / 5.0);
                }
                param.is_animating = true;
                param.last_frame_time = None;
            }
            tracing::debug!(parameter = id, "animation started");
        } else {
            if let Some(param) = self.parameters.get_mut(id) {
                param.stop_animation();
            }
            tracing::debug!(parameter = id, "animation stopped");
            self.push_history();
        }
        Ok(())
    }

    /// Advances all animating parameters to the given monotonic timestamp
    /// as one atomic batch. When a sweep completes naturally this tick, one
    /// snapshot is pushed for the whole sweep.
    pub fn advance_animation(&mut self, now_seconds: f64) -> TickReport {
        let report = animation::tick(&mut self.parameters, now_seconds);
        if !report.stopped.is_empty() {
            self.push_history();
        }
        report
    }

    /// Whether the embedding application's frame loop has work to do.
    pub fn has_active_animation(&self) -> bool {
        animation::has_active(&self.parameters)
    }
}
