//! Symbolic haptic feedback
//!
//! Components never talk to a platform feedback API. They emit a
//! [`HapticFeedback`] into a [`HapticSink`] supplied by the host.

use serde::{Deserialize, Serialize};

/// Feedback intensity or semantic style
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HapticFeedback {
    #[default]
    Light,
    Medium,
    Heavy,
    /// Discrete value change (slider step, picker tick)
    Selection,
    Success,
    Warning,
    Error,
}

/// Consumer of haptic feedback requests
pub trait HapticSink {
    fn emit(&mut self, feedback: HapticFeedback);
}

/// Sink that drops every request
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHaptics;

impl HapticSink for NoopHaptics {
    fn emit(&mut self, _feedback: HapticFeedback) {}
}

/// Sink that records requests in order
#[derive(Clone, Debug, Default)]
pub struct RecordingHaptics {
    events: Vec<HapticFeedback>,
}

impl RecordingHaptics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything emitted so far
    pub fn events(&self) -> &[HapticFeedback] {
        &self.events
    }

    /// Number of times `feedback` was emitted
    pub fn count(&self, feedback: HapticFeedback) -> usize {
        self.events.iter().filter(|f| **f == feedback).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl HapticSink for RecordingHaptics {
    fn emit(&mut self, feedback: HapticFeedback) {
        tracing::trace!("haptic feedback: {:?}", feedback);
        self.events.push(feedback);
    }
}

impl<S: HapticSink + ?Sized> HapticSink for &mut S {
    fn emit(&mut self, feedback: HapticFeedback) {
        (**self).emit(feedback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_counts() {
        let mut sink = RecordingHaptics::new();
        sink.emit(HapticFeedback::Light);
        sink.emit(HapticFeedback::Success);
        sink.emit(HapticFeedback::Light);
        assert_eq!(sink.count(HapticFeedback::Light), 2);
        assert_eq!(sink.events().len(), 3);
        sink.clear();
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&HapticFeedback::Selection).unwrap();
        assert_eq!(json, "\"selection\"");
    }
}
