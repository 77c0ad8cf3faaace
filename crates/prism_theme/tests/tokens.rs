//! Every named scale must be non-decreasing in its documented order,
//! for the defaults and for every built-in preset.

use prism_theme::{EffectLevel, ThemePreset, RADIUS_FULL};

fn assert_non_decreasing<T: PartialOrd + std::fmt::Debug>(label: &str, values: &[T]) {
    for pair in values.windows(2) {
        assert!(pair[0] <= pair[1], "{label}: {:?} > {:?}", pair[0], pair[1]);
    }
}

#[test]
fn every_preset_has_monotonic_scales() {
    for preset in ThemePreset::all() {
        let theme = preset.theme();
        let label = preset.id();
        assert_non_decreasing(label, &theme.typography().ordered_sizes());
        assert_non_decreasing(label, &theme.typography().ordered_line_heights());
        assert_non_decreasing(label, &theme.spacing().ordered());
        assert_non_decreasing(label, &theme.radii().ordered());
        assert_non_decreasing(label, &theme.effects().ordered_shadows());
        assert_non_decreasing(label, &theme.effects().ordered_blurs());
        assert_non_decreasing(label, &theme.effects().ordered_glows());
        assert_non_decreasing(label, &theme.effects().ordered_durations());
    }
}

#[test]
fn spacing_is_strictly_increasing() {
    let spacing = ThemePreset::Default.theme().spacing().clone();
    for pair in spacing.ordered().windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn full_radius_is_pill_sentinel() {
    for preset in ThemePreset::all() {
        assert_eq!(preset.theme().radii().radius_full, RADIUS_FULL);
    }
}

#[test]
fn typography_weights_increase() {
    let t = ThemePreset::Default.theme().typography().clone();
    assert_non_decreasing(
        "weights",
        &[t.weight_regular, t.weight_medium, t.weight_semibold, t.weight_bold, t.weight_heavy],
    );
}

#[test]
fn scaled_typography_stays_monotonic() {
    let t = ThemePreset::Default.theme().typography().scaled(1.3);
    assert_non_decreasing("scaled", &t.ordered_sizes());
    assert!((t.size_m - 15.0 * 1.3).abs() < 1e-4);
}

#[test]
fn effect_shadows_grow_with_level() {
    let effects = ThemePreset::Default.theme().effects().clone();
    let blurs: Vec<f32> = EffectLevel::all().iter().map(|l| effects.shadow(*l).blur).collect();
    assert_non_decreasing("shadow blur", &blurs);
}
