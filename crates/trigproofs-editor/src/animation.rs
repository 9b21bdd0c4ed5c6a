//! Per-tick parameter animation.
//!
//! The engine does not own a timer. The embedding application runs a
//! display-refresh loop only while [`has_active`] reports work to do, and
//! feeds each tick a monotonic timestamp. A tick advances every animating
//! parameter from that one shared timestamp and applies the whole batch at
//! once; an animation is a one-shot sweep that clamps and stops at the
//! first min/max crossing (it never bounces on its own).

use crate::model::ParamId;
use crate::params::{Direction, ParameterStore};

/// What a tick changed, so the caller can decide about redraws and history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Parameters whose value changed this tick.
    pub changed: Vec<ParamId>,
    /// Parameters that reached a bound and stopped this tick.
    pub stopped: Vec<ParamId>,
}

impl TickReport {
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty() && self.stopped.is_empty()
    }
}

/// Whether any parameter is currently animating (drives the external
/// loop's run/stop decision; the loop is fully stopped otherwise).
pub fn has_active(parameters: &ParameterStore) -> bool {
    parameters.iter().any(|p| p.is_animating)
}

/// Advances every animating parameter to `now_seconds` (monotonic).
///
/// The first tick after activation only records the time baseline. A
/// parameter crossing its bound is clamped to the bound and stops.
pub fn tick(parameters: &mut ParameterStore, now_seconds: f64) -> TickReport {
    let mut report = TickReport::default();

    for param in parameters.iter_mut() {
        if !param.is_animating {
            continue;
        }

        let elapsed = match param.last_frame_time {
            Some(last) => (now_seconds - last).max(0.0),
            None => 0.0,
        };
        param.last_frame_time = Some(now_seconds);
        if elapsed == 0.0 {
            continue;
        }

        let speed = param
            .animation_speed
            .unwrap_or((param.max - param.min) / 5.0);
        let before = param.value;
        match param.animation_direction {
            Direction::Forward => {
                param.value += speed * elapsed;
                if param.value >= param.max {
                    param.value = param.max;
                    param.stop_animation();
                    report.stopped.push(param.id);
                }
            }
            Direction::Backward => {
                param.value -= speed * elapsed;
                if param.value <= param.min {
                    param.value = param.min;
                    param.stop_animation();
                    report.stopped.push(param.id);
                }
            }
        }
        if param.value != before {
            report.changed.push(param.id);
        }
    }

    if !report.stopped.is_empty() {
        tracing::debug!(stopped = report.stopped.len(), "animation sweep completed");
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Parameter, ParameterRole};

    fn animating_param(store: &mut ParameterStore, value: f64, direction: Direction) -> ParamId {
        let id = store.generate_id();
        let mut p = Parameter::for_role(id, 0, ParameterRole::Generic, "p");
        p.value = value;
        p.is_animating = true;
        p.animation_speed = Some(0.5);
        p.animation_direction = direction;
        store.insert(p);
        id
    }

    #[test]
    fn test_first_tick_establishes_baseline() {
        let mut store = ParameterStore::new();
        let id = animating_param(&mut store, 0.0, Direction::Forward);
        let report = tick(&mut store, 10.0);
        assert!(report.is_empty());
        assert_eq!(store.get(id).unwrap().value, 0.0);
        assert_eq!(store.get(id).unwrap().last_frame_time, Some(10.0));
    }

    #[test]
    fn test_forward_sweep_clamps_and_stops() {
        let mut store = ParameterStore::new();
        let id = animating_param(&mut store, 0.0, Direction::Forward);
        tick(&mut store, 0.0);
        // 0.5 units/s for 1s each tick; max is 1.0.
        let report = tick(&mut store, 1.0);
        assert_eq!(report.changed, vec![id]);
        assert!(report.stopped.is_empty());

        let report = tick(&mut store, 3.0);
        assert_eq!(report.stopped, vec![id]);
        let param = store.get(id).unwrap();
        assert_eq!(param.value, param.max);
        assert!(!param.is_animating);

        // Idempotent once stopped.
        let report = tick(&mut store, 4.0);
        assert!(report.is_empty());
    }

    #[test]
    fn test_value_never_exceeds_max() {
        let mut store = ParameterStore::new();
        let id = animating_param(&mut store, 0.9, Direction::Forward);
        tick(&mut store, 0.0);
        tick(&mut store, 100.0);
        assert!(store.get(id).unwrap().value <= store.get(id).unwrap().max);
    }

    #[test]
    fn test_backward_sweep_stops_at_min() {
        let mut store = ParameterStore::new();
        let id = animating_param(&mut store, 0.4, Direction::Backward);
        tick(&mut store, 0.0);
        let report = tick(&mut store, 10.0);
        assert_eq!(report.stopped, vec![id]);
        assert_eq!(store.get(id).unwrap().value, 0.0);
    }

    #[test]
    fn test_batch_shares_one_timestamp() {
        let mut store = ParameterStore::new();
        let a = animating_param(&mut store, 0.0, Direction::Forward);
        let b = animating_param(&mut store, 0.0, Direction::Forward);
        tick(&mut store, 5.0);
        tick(&mut store, 5.5);
        assert_eq!(store.get(a).unwrap().last_frame_time, Some(5.5));
        assert_eq!(store.get(b).unwrap().last_frame_time, Some(5.5));
        assert_eq!(store.get(a).unwrap().value, store.get(b).unwrap().value);
    }
}
