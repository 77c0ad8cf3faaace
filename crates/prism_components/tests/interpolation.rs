//! Monotonicity of every interpolated magnitude across component configs

use prism_components::{
    AdaptiveLayoutConfig, CardConfig, ColorBand, GlassConfig, Interpolation, ProgressConfig,
};
use prism_core::{lerp, Color};
use prism_theme::{FromTheme, ThemePreset};

fn samples() -> impl Iterator<Item = f32> {
    (0..=200).map(|i| i as f32 / 200.0)
}

fn assert_non_decreasing(label: &str, values: impl IntoIterator<Item = f32>) {
    let mut previous = f32::NEG_INFINITY;
    for (i, value) in values.into_iter().enumerate() {
        assert!(
            value >= previous,
            "{label} decreased at sample {i}: {previous} -> {value}"
        );
        previous = value;
    }
}

#[test]
fn scale_scenario() {
    let scale = Interpolation::new(1.0, 1.05);
    assert_eq!(scale.at(0.0), 1.0);
    assert_eq!(scale.at(1.0), 1.05);
    assert!((scale.at(0.5) - 1.025).abs() < 1e-6);
}

#[test]
fn lerp_of_equal_endpoints_is_constant() {
    for x in [-4.0, 0.0, 0.25, 17.0] {
        for t in samples() {
            assert_eq!(lerp(x, x, t), x);
        }
    }
}

#[test]
fn adaptive_layout_is_monotonic_for_every_preset() {
    let mut configs = vec![
        AdaptiveLayoutConfig::default(),
        AdaptiveLayoutConfig::subtle(),
        AdaptiveLayoutConfig::dramatic(),
    ];
    configs.extend(
        ThemePreset::all()
            .iter()
            .map(|preset| AdaptiveLayoutConfig::from_theme(&preset.theme())),
    );

    for config in &configs {
        let resolved: Vec<_> = samples().map(|p| config.resolve(p)).collect();
        assert_non_decreasing("opacity", resolved.iter().map(|a| a.opacity));
        assert_non_decreasing("scale", resolved.iter().map(|a| a.scale));
        assert_non_decreasing("shadow", resolved.iter().map(|a| a.shadow_radius));
        assert_non_decreasing("lift", resolved.iter().map(|a| a.lift));
        assert_non_decreasing("glow", resolved.iter().map(|a| a.glow_radius));
    }
}

#[test]
fn card_hover_is_monotonic() {
    for card in [
        CardConfig::default(),
        CardConfig::compact(),
        CardConfig::prominent(),
        CardConfig::subtle(),
        CardConfig::glass(),
    ] {
        assert_non_decreasing("card scale", samples().map(|t| card.appearance(t, 0.0).scale));
        assert_non_decreasing(
            "card shadow",
            samples().map(|t| card.appearance(t, 0.0).shadow_radius),
        );
    }
}

#[test]
fn progress_glow_is_monotonic() {
    let config = ProgressConfig::from_theme(&ThemePreset::Neon.theme());
    assert_non_decreasing("progress glow", samples().map(|p| config.resolve(p).glow_radius));
}

#[test]
fn glass_intensity_is_monotonic() {
    let glass = GlassConfig::liquid();
    assert_non_decreasing("blur", samples().map(|t| glass.intensity(t).blur_radius));
    assert_non_decreasing("refraction", samples().map(|t| glass.intensity(t).refraction));
}

#[test]
fn color_band_overlay_is_monotonic() {
    let band = ColorBand::new(Color::BLACK, Color::WHITE, 0.3, 0.7);
    assert_non_decreasing("overlay", samples().map(|t| band.active_opacity(t)));
    // Black to white: the red channel follows the overlay opacity
    assert_non_decreasing("red", samples().map(|t| band.resolve(t).r));
}
