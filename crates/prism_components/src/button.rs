//! Button configuration and interaction state
//!
//! The configuration resolves colors and metrics from a theme. The
//! interaction state runs the idle/hovered/pressed/disabled machine and
//! springs the press scale.

use prism_animation::{Spring, SpringConfig};
use prism_core::{Color, HapticFeedback, HapticSink, PointerEvent};
use prism_theme::{FontSizeToken, FromTheme, RadiusToken, SpacingToken, Theme};
use serde::{Deserialize, Serialize};

/// Visual role of a button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Destructive,
}

/// Button size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    fn height(&self) -> f32 {
        match self {
            ButtonSize::Small => 32.0,
            ButtonSize::Medium => 44.0,
            ButtonSize::Large => 56.0,
        }
    }

    fn font(&self) -> FontSizeToken {
        match self {
            ButtonSize::Small => FontSizeToken::S,
            ButtonSize::Medium => FontSizeToken::M,
            ButtonSize::Large => FontSizeToken::L,
        }
    }

    fn horizontal_padding(&self) -> SpacingToken {
        match self {
            ButtonSize::Small => SpacingToken::S,
            ButtonSize::Medium => SpacingToken::M,
            ButtonSize::Large => SpacingToken::L,
        }
    }
}

/// Button configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub background: Color,
    pub foreground: Color,
    pub height: f32,
    pub horizontal_padding: f32,
    pub font_size: f32,
    pub corner_radius: f32,
    /// Scale while fully pressed
    pub pressed_scale: f32,
    /// Background opacity while hovered (1.0 = unchanged)
    pub hover_opacity: f32,
    pub disabled_opacity: f32,
    pub haptic: HapticFeedback,
    pub haptics_enabled: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::for_variant(ButtonVariant::Primary, ButtonSize::Medium, Theme::default_ref())
    }
}

impl FromTheme for ButtonConfig {
    fn from_theme(theme: &Theme) -> Self {
        Self::for_variant(ButtonVariant::Primary, ButtonSize::Medium, theme)
    }
}

impl ButtonConfig {
    /// Resolve a variant and size against `theme`
    pub fn for_variant(variant: ButtonVariant, size: ButtonSize, theme: &Theme) -> Self {
        let colors = theme.colors();
        let (background, foreground, haptic) = match variant {
            ButtonVariant::Primary => (colors.primary, Color::WHITE, HapticFeedback::Light),
            ButtonVariant::Secondary => (
                colors.secondary.with_alpha(0.2),
                colors.secondary,
                HapticFeedback::Light,
            ),
            ButtonVariant::Ghost => (Color::TRANSPARENT, colors.primary, HapticFeedback::Light),
            ButtonVariant::Destructive => (colors.error, Color::WHITE, HapticFeedback::Warning),
        };
        Self {
            variant,
            size,
            background,
            foreground,
            height: size.height(),
            horizontal_padding: theme.spacing().get(size.horizontal_padding()),
            font_size: theme.typography().size(size.font()),
            corner_radius: theme.radii().get(RadiusToken::Md),
            pressed_scale: 0.96,
            hover_opacity: 0.9,
            disabled_opacity: 0.4,
            haptic,
            haptics_enabled: theme.enable_haptics(),
        }
    }

    /// Capsule shape
    pub fn pill(mut self) -> Self {
        self.corner_radius = prism_theme::RADIUS_FULL;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn pressed_scale(mut self, scale: f32) -> Self {
        self.pressed_scale = scale;
        self
    }

    pub fn haptic(mut self, feedback: HapticFeedback) -> Self {
        self.haptic = feedback;
        self
    }

    pub fn haptics(mut self, enabled: bool) -> Self {
        self.haptics_enabled = enabled;
        self
    }
}

/// Interaction phase of a button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonPhase {
    #[default]
    Idle,
    Hovered,
    Pressed,
    Disabled,
}

/// Per-button interaction state
#[derive(Clone, Debug)]
pub struct ButtonState {
    phase: ButtonPhase,
    scale_spring: Spring,
    clicked: bool,
}

impl Default for ButtonState {
    fn default() -> Self {
        Self {
            phase: ButtonPhase::Idle,
            scale_spring: Spring::new(SpringConfig::snappy(), 1.0),
            clicked: false,
        }
    }
}

impl ButtonState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ButtonPhase {
        self.phase
    }

    /// Current animated scale
    pub fn scale(&self) -> f32 {
        self.scale_spring.value()
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.phase = match (disabled, self.phase) {
            (true, _) => ButtonPhase::Disabled,
            (false, ButtonPhase::Disabled) => ButtonPhase::Idle,
            (false, phase) => phase,
        };
        if disabled {
            self.scale_spring.set_target(1.0);
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.phase = match (self.phase, hovered) {
            (ButtonPhase::Idle, true) => ButtonPhase::Hovered,
            (ButtonPhase::Hovered, false) => ButtonPhase::Idle,
            (phase, _) => phase,
        };
    }

    /// Feed a pointer phase. `inside` tells whether the pointer is within the
    /// button bounds.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        inside: bool,
        config: &ButtonConfig,
        haptics: &mut impl HapticSink,
    ) {
        if self.phase == ButtonPhase::Disabled {
            return;
        }
        match event {
            PointerEvent::Down { .. } if inside => {
                self.phase = ButtonPhase::Pressed;
                self.scale_spring.set_target(config.pressed_scale);
                if config.haptics_enabled {
                    haptics.emit(config.haptic);
                }
            }
            PointerEvent::Up { .. } if self.phase == ButtonPhase::Pressed => {
                self.clicked = inside;
                self.phase = if inside {
                    ButtonPhase::Hovered
                } else {
                    ButtonPhase::Idle
                };
                self.scale_spring.set_target(1.0);
            }
            PointerEvent::Cancel => {
                self.phase = ButtonPhase::Idle;
                self.scale_spring.set_target(1.0);
            }
            _ => {}
        }
    }

    /// Advance animations (call each frame)
    pub fn update(&mut self, dt: f32) {
        self.scale_spring.step(dt);
    }

    /// Check if was clicked and clear the flag
    pub fn take_clicked(&mut self) -> bool {
        std::mem::take(&mut self.clicked)
    }

    /// Background for the current phase
    pub fn background(&self, config: &ButtonConfig) -> Color {
        let bg = config.background;
        match self.phase {
            ButtonPhase::Hovered => bg.with_alpha(bg.a * config.hover_opacity),
            ButtonPhase::Disabled => bg.with_alpha(bg.a * config.disabled_opacity),
            ButtonPhase::Idle | ButtonPhase::Pressed => bg,
        }
    }
}
