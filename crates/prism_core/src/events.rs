//! Pointer input
//!
//! Gesture recognition is owned by the host framework. Interactive
//! components only see already-recognized pointer phases in local
//! coordinates (relative to the component's origin).

/// A pointer phase delivered to an interactive component
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up { x: f32, y: f32 },
    /// The host gave up the gesture (e.g. it was claimed by a scroll view)
    Cancel,
}

impl PointerEvent {
    /// Pointer position, if the phase carries one
    pub fn position(&self) -> Option<(f32, f32)> {
        match *self {
            PointerEvent::Down { x, y } | PointerEvent::Move { x, y } | PointerEvent::Up { x, y } => {
                Some((x, y))
            }
            PointerEvent::Cancel => None,
        }
    }

    /// Whether this phase ends the gesture
    pub fn is_terminal(&self) -> bool {
        matches!(self, PointerEvent::Up { .. } | PointerEvent::Cancel)
    }
}
