//! Interaction scenarios: slider drags, progress feedback, themed resolution

use prism_components::{
    AdaptiveLayoutConfig, AdaptiveState, BadgeConfig, ButtonConfig, DragPhase, ProgressConfig,
    ProgressState, SliderConfig, SliderState,
};
use prism_core::{HapticFeedback, NoopHaptics, PointerEvent, RecordingHaptics};
use prism_theme::{FromTheme, Theme, ThemeContext, ThemePreset};

#[test]
fn two_thumb_slider_never_crosses() {
    let config = SliderConfig::new(0.0, 10.0).unwrap().step(0.5);
    let mut state = SliderState::new(config, &[2.0, 8.0], 300.0).unwrap();

    // Sweep both thumbs back and forth across each other
    let targets = [0.0, 300.0, 150.0, 12.0, 290.0, -40.0, 400.0, 151.0];
    for round in 0..targets.len() {
        let positions = state.thumb_positions();
        let thumb = round % 2;
        state.handle(
            PointerEvent::Down {
                x: positions[thumb],
                y: 0.0,
            },
            &mut NoopHaptics,
        );
        assert!(matches!(state.phase(), DragPhase::Dragging(_)));
        for x in targets.iter().cycle().skip(round).take(5) {
            state.handle(PointerEvent::Move { x: *x, y: 0.0 }, &mut NoopHaptics);
            let values = state.values();
            assert!(values[0] <= values[1], "crossed: {values:?}");
        }
        state.handle(PointerEvent::Up { x: 0.0, y: 0.0 }, &mut NoopHaptics);
        assert_eq!(state.phase(), DragPhase::Idle);
        let values = state.values();
        assert!(values[0] <= values[1], "crossed after release: {values:?}");
        assert!(values.iter().all(|v| (0.0..=10.0).contains(v)));
    }
}

#[test]
fn slider_selection_haptics_follow_snapped_changes() {
    let mut haptics = RecordingHaptics::new();
    let mut state = SliderState::new(SliderConfig::percent(), &[0.0], 100.0).unwrap();
    state.handle(PointerEvent::Down { x: 0.0, y: 0.0 }, &mut haptics);
    for x in [0.2, 0.4, 1.0, 1.2, 2.0] {
        state.handle(PointerEvent::Move { x, y: 0.0 }, &mut haptics);
    }
    // 0 -> 1 -> 2
    assert_eq!(haptics.count(HapticFeedback::Selection), 2);
}

#[test]
fn progress_success_feedback_is_edge_triggered() {
    let mut haptics = RecordingHaptics::new();
    let mut state = ProgressState::new(ProgressConfig::default());

    let mut p = 0.0;
    while p <= 1.2 {
        state.set_progress(p, &mut haptics);
        state.tick(1.0 / 60.0);
        p += 0.01;
    }
    assert_eq!(haptics.count(HapticFeedback::Success), 1);
    assert_eq!(haptics.count(HapticFeedback::Light), 1);

    // Hovering around the threshold without dropping below it stays quiet
    for p in [0.96, 0.99, 0.95, 1.0] {
        state.set_progress(p, &mut haptics);
    }
    assert_eq!(haptics.count(HapticFeedback::Success), 1);
}

#[test]
fn disabled_theme_haptics_silence_components() {
    let quiet = Theme::default().with_haptics(false);
    let mut haptics = RecordingHaptics::new();

    let mut progress = ProgressState::new(ProgressConfig::from_theme(&quiet));
    progress.set_progress(1.0, &mut haptics);

    let mut adaptive = AdaptiveState::new(AdaptiveLayoutConfig::from_theme(&quiet));
    adaptive.update(1.0, &mut haptics);

    assert!(haptics.events().is_empty());
}

#[test]
fn components_resolve_against_nearest_theme() {
    let root = ThemeContext::root();
    let neon = ThemePreset::Neon.theme();
    let forest = ThemePreset::Forest.theme();

    let outer = root.provide(&neon);
    let outer_button = ButtonConfig::from_context(&outer);
    assert_eq!(outer_button.background, neon.primary_color());

    outer.scope(&forest, |inner| {
        let badge = BadgeConfig::from_context(inner);
        assert_eq!(badge.color, forest.text_secondary_color());
        assert_eq!(
            ButtonConfig::from_context(inner).background,
            forest.primary_color()
        );
    });

    // Back outside the inner scope
    assert_eq!(
        ButtonConfig::from_context(&outer).background,
        neon.primary_color()
    );
    assert_eq!(
        ButtonConfig::from_context(&root).background,
        Theme::default_ref().primary_color()
    );
}
