//! Slider configuration and drag state machine
//!
//! A slider owns one or more thumbs on a horizontal track. The state
//! machine has two phases:
//!
//! ```text
//! Idle ──pointer down on thumb i──▶ Dragging(i)
//! Dragging(i) ──move──▶ Dragging(i)   (value recomputed, snapped, clamped)
//! Dragging(i) ──up / cancel──▶ Idle
//! ```
//!
//! Values of a multi-thumb slider are kept in non-decreasing order: a thumb
//! is clamped between its neighbours and never crosses them.

use crate::error::{check_range, ConfigError, Result};
use prism_core::{clamp_unit, inverse_lerp, Color, HapticFeedback, HapticSink, PointerEvent};
use prism_theme::{FromTheme, Theme};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Slider configuration
///
/// `min <= max` always holds: the range is only settable through validated
/// constructors, and deserialization runs the same check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SliderDocument")]
pub struct SliderConfig {
    min: f32,
    max: f32,
    /// Snap increment; `0` disables snapping
    pub step: f32,
    pub thumb_size: f32,
    pub track_height: f32,
    pub tint: Color,
    pub track_color: Color,
    pub show_value: bool,
    pub haptics_enabled: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            step: 0.0,
            thumb_size: 28.0,
            track_height: 6.0,
            tint: Color::BLUE,
            track_color: Color::WHITE.with_alpha(0.15),
            show_value: false,
            haptics_enabled: true,
        }
    }
}

/// Unvalidated serialized form of [`SliderConfig`]
#[derive(Deserialize)]
#[serde(default)]
struct SliderDocument {
    min: f32,
    max: f32,
    step: f32,
    thumb_size: f32,
    track_height: f32,
    tint: Color,
    track_color: Color,
    show_value: bool,
    haptics_enabled: bool,
}

impl Default for SliderDocument {
    fn default() -> Self {
        let SliderConfig {
            min,
            max,
            step,
            thumb_size,
            track_height,
            tint,
            track_color,
            show_value,
            haptics_enabled,
        } = SliderConfig::default();
        Self {
            min,
            max,
            step,
            thumb_size,
            track_height,
            tint,
            track_color,
            show_value,
            haptics_enabled,
        }
    }
}

impl TryFrom<SliderDocument> for SliderConfig {
    type Error = ConfigError;

    fn try_from(doc: SliderDocument) -> Result<Self> {
        check_range(doc.min, doc.max)?;
        Ok(Self {
            min: doc.min,
            max: doc.max,
            step: doc.step.max(0.0),
            thumb_size: doc.thumb_size,
            track_height: doc.track_height,
            tint: doc.tint,
            track_color: doc.track_color,
            show_value: doc.show_value,
            haptics_enabled: doc.haptics_enabled,
        })
    }
}

impl FromTheme for SliderConfig {
    fn from_theme(theme: &Theme) -> Self {
        Self {
            tint: theme.primary_color(),
            track_color: theme.text_color().with_alpha(0.15),
            haptics_enabled: theme.enable_haptics(),
            ..Self::default()
        }
    }
}

impl SliderConfig {
    /// Slider over `[min, max]`. Fails with `InvalidRange` when `min > max`.
    pub fn new(min: f32, max: f32) -> Result<Self> {
        check_range(min, max)?;
        Ok(Self {
            min,
            max,
            ..Self::default()
        })
    }

    /// 0 to 100 in whole steps, showing the value
    pub fn percent() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            show_value: true,
            ..Self::default()
        }
    }

    /// Continuous 0 to 1
    pub fn unit() -> Self {
        Self::default()
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Replace the range, validating it
    pub fn range(mut self, min: f32, max: f32) -> Result<Self> {
        check_range(min, max)?;
        self.min = min;
        self.max = max;
        Ok(self)
    }

    pub fn step(mut self, step: f32) -> Self {
        self.step = step.max(0.0);
        self
    }

    pub fn thumb_size(mut self, size: f32) -> Self {
        self.thumb_size = size;
        self
    }

    pub fn tint(mut self, color: Color) -> Self {
        self.tint = color;
        self
    }

    pub fn show_value(mut self, show: bool) -> Self {
        self.show_value = show;
        self
    }

    pub fn haptics(mut self, enabled: bool) -> Self {
        self.haptics_enabled = enabled;
        self
    }

    /// Snap to the step grid, then clamp into the range
    pub fn snap(&self, raw: f32) -> f32 {
        let raw = if raw.is_nan() { self.min } else { raw };
        let snapped = if self.step > 0.0 {
            (raw / self.step).round() * self.step
        } else {
            raw
        };
        snapped.clamp(self.min, self.max)
    }

    /// Value under a pointer at `x` on a track `width` points wide
    pub fn value_at(&self, x: f32, width: f32) -> f32 {
        let fraction = if width > 0.0 { clamp_unit(x / width) } else { 0.0 };
        self.snap(self.min + fraction * (self.max - self.min))
    }

    /// Track position of `value`
    pub fn position_of(&self, value: f32, width: f32) -> f32 {
        inverse_lerp(self.min, self.max, value) * width
    }
}

/// Drag phase of a [`SliderState`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Dragging the thumb at this index
    Dragging(usize),
}

/// Interaction state of a single- or multi-thumb slider
#[derive(Clone, Debug)]
pub struct SliderState {
    config: SliderConfig,
    values: SmallVec<[f32; 2]>,
    phase: DragPhase,
    track_width: f32,
}

impl SliderState {
    /// Create a slider with one thumb per initial value. Values are snapped
    /// into range and sorted.
    pub fn new(config: SliderConfig, initial: &[f32], track_width: f32) -> Result<Self> {
        if initial.is_empty() {
            return Err(ConfigError::InvalidThumbCount(0));
        }
        let mut values: SmallVec<[f32; 2]> = initial.iter().map(|v| config.snap(*v)).collect();
        values.sort_by(f32::total_cmp);
        Ok(Self {
            config,
            values,
            phase: DragPhase::Idle,
            track_width: track_width.max(0.0),
        })
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn value(&self) -> f32 {
        self.values[0]
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging(_))
    }

    pub fn set_track_width(&mut self, width: f32) {
        self.track_width = width.max(0.0);
    }

    /// Track position of each thumb
    pub fn thumb_positions(&self) -> SmallVec<[f32; 2]> {
        self.values
            .iter()
            .map(|v| self.config.position_of(*v, self.track_width))
            .collect()
    }

    /// Thumb under `x`, if any
    ///
    /// When several thumbs are equally close (overlapping thumbs) the pick
    /// follows the side of the pointer: left of the thumbs picks the lowest
    /// index, right picks the highest. Dead-centre picks the thumb that still
    /// has room to move.
    pub fn hit_test(&self, x: f32) -> Option<usize> {
        let reach = self.config.thumb_size / 2.0;
        let positions = self.thumb_positions();
        let nearest = positions
            .iter()
            .map(|p| (p - x).abs())
            .fold(f32::INFINITY, f32::min);
        if nearest > reach {
            return None;
        }
        let mut tied = positions
            .iter()
            .enumerate()
            .filter(|(_, p)| (*p - x).abs() == nearest)
            .map(|(i, _)| i);
        let first = tied.next()?;
        let last = tied.last().unwrap_or(first);
        let at = positions[first];
        let pick = if x < at {
            first
        } else if x > at {
            last
        } else if self.values[last] >= self.config.max {
            first
        } else {
            last
        };
        Some(pick)
    }

    /// Feed a pointer phase. Returns `true` when a value changed.
    pub fn handle(&mut self, event: PointerEvent, haptics: &mut impl HapticSink) -> bool {
        match (self.phase, event) {
            (DragPhase::Idle, PointerEvent::Down { x, .. }) => {
                if let Some(index) = self.hit_test(x) {
                    tracing::debug!(index, "slider drag started");
                    self.phase = DragPhase::Dragging(index);
                }
                false
            }
            (DragPhase::Dragging(index), PointerEvent::Move { x, .. }) => {
                self.drag_to(index, x, haptics)
            }
            (DragPhase::Dragging(index), PointerEvent::Up { x, .. }) => {
                let changed = self.drag_to(index, x, haptics);
                tracing::debug!(index, value = self.values[index], "slider drag ended");
                self.phase = DragPhase::Idle;
                changed
            }
            (DragPhase::Dragging(index), PointerEvent::Cancel) => {
                tracing::debug!(index, "slider drag cancelled");
                self.phase = DragPhase::Idle;
                false
            }
            _ => false,
        }
    }

    fn drag_to(&mut self, index: usize, x: f32, haptics: &mut impl HapticSink) -> bool {
        let mut value = self.config.value_at(x, self.track_width);
        if let Some(lower) = index.checked_sub(1).map(|i| self.values[i]) {
            value = value.max(lower);
        }
        if let Some(upper) = self.values.get(index + 1) {
            value = value.min(*upper);
        }
        if value == self.values[index] {
            return false;
        }
        self.values[index] = value;
        tracing::trace!(index, value, "slider value changed");
        if self.config.haptics_enabled {
            haptics.emit(HapticFeedback::Selection);
        }
        true
    }
}
