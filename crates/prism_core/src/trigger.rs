//! Edge-triggered threshold detection
//!
//! A [`ThresholdTrigger`] fires once when a value rises to or above its
//! threshold and stays quiet while the value remains there. Falling back
//! below re-arms it.

use crate::math::clamp_unit;

/// Which side of the threshold the last observed value was on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TriggerState {
    #[default]
    Below,
    AtOrAbove,
}

/// Two-state machine that reports rising-edge crossings of a threshold
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdTrigger {
    threshold: f32,
    state: TriggerState,
}

impl ThresholdTrigger {
    /// Create a trigger in the `Below` state. The threshold is clamped to `[0, 1]`.
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: clamp_unit(threshold),
            state: TriggerState::Below,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    /// Feed a new value. Returns `true` only on a `Below -> AtOrAbove` transition.
    pub fn update(&mut self, value: f32) -> bool {
        let value = clamp_unit(value);
        let next = if value >= self.threshold {
            TriggerState::AtOrAbove
        } else {
            TriggerState::Below
        };
        let fired = self.state == TriggerState::Below && next == TriggerState::AtOrAbove;
        if fired {
            tracing::trace!(threshold = self.threshold, value, "threshold crossed");
        }
        self.state = next;
        fired
    }

    /// Return to `Below` without firing
    pub fn reset(&mut self) {
        self.state = TriggerState::Below;
    }
}
