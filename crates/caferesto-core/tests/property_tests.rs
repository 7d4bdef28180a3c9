//! Property-based tests for the reveal state machine and the follower ticker
//!
//! Uses proptest to check the visibility and counting invariants over
//! arbitrary configurations and intersection histories.

use caferesto_core::reveal::RATIO_TOLERANCE;
use caferesto_core::{
    format_count, IntersectionSample, MotionEnvironment, MountOutcome, RevealConfig, RevealState,
    Ticker, WatchAction,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

struct Browser;

impl MotionEnvironment for Browser {
    fn prefers_reduced_motion(&self) -> bool {
        false
    }

    fn supports_intersection_watch(&self) -> bool {
        true
    }
}

struct ReducedMotion;

impl MotionEnvironment for ReducedMotion {
    fn prefers_reduced_motion(&self) -> bool {
        true
    }

    fn supports_intersection_watch(&self) -> bool {
        true
    }
}

fn config_strategy() -> impl Strategy<Value = RevealConfig> {
    (
        0u32..2_000,
        1u32..3_000,
        -200i32..200,
        -200i32..200,
        0.0f64..=1.0,
    )
        .prop_map(|(delay, duration, x, y, threshold)| {
            RevealConfig::default()
                .with_delay(delay)
                .with_duration(duration)
                .with_offset(x, y)
                .with_threshold(threshold)
        })
}

fn sample_strategy() -> impl Strategy<Value = IntersectionSample> {
    prop_oneof![
        1 => Just(IntersectionSample::leaving()),
        3 => (0.0f64..=1.0).prop_map(IntersectionSample::entering),
    ]
}

fn history_strategy() -> impl Strategy<Value = Vec<IntersectionSample>> {
    prop::collection::vec(sample_strategy(), 0..40)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// With trigger_once, visibility never goes back to false.
    #[test]
    fn trigger_once_is_monotonic(config in config_strategy(), history in history_strategy()) {
        let mut state = RevealState::new(config.with_trigger_once(true));
        prop_assert_eq!(state.mount(&Browser), MountOutcome::Watch);

        let mut was_visible = false;
        let mut released = false;
        for sample in history {
            let action = state.observe(sample);
            if was_visible {
                prop_assert!(state.is_visible());
                prop_assert_eq!(action, WatchAction::Release);
            }
            if action == WatchAction::Release {
                released = true;
            }
            was_visible = state.is_visible();
        }
        prop_assert_eq!(released, state.is_visible());
    }

    /// Without trigger_once, visibility follows the latest sample exactly.
    #[test]
    fn repeatable_tracks_latest_sample(config in config_strategy(), history in history_strategy()) {
        let threshold = config.threshold();
        let mut state = RevealState::new(config.with_trigger_once(false));
        state.mount(&Browser);

        for sample in history {
            prop_assert_eq!(state.observe(sample), WatchAction::Keep);
            let expected =
                sample.is_intersecting && sample.ratio + RATIO_TOLERANCE >= threshold;
            prop_assert_eq!(state.is_visible(), expected);
        }
    }

    /// Reduced motion reveals at mount with no delay, whatever the config.
    #[test]
    fn reduced_motion_is_immediate(config in config_strategy(), history in history_strategy()) {
        let mut state = RevealState::new(config);
        prop_assert_eq!(state.mount(&ReducedMotion), MountOutcome::ShowImmediately);
        prop_assert!(state.is_visible());
        prop_assert_eq!(state.style().transition, "none");
        prop_assert_eq!(state.style().opacity, 1.0);

        for sample in history {
            state.observe(sample);
            prop_assert!(state.is_visible());
        }
    }

    /// The hidden style always carries the configured offset.
    #[test]
    fn hidden_style_encodes_offset(config in config_strategy()) {
        let state = RevealState::new(config.clone());
        let style = state.style();
        prop_assert_eq!(style.opacity, 0.0);
        prop_assert_eq!(
            style.transform,
            format!("translate3d({}px, {}px, 0)", config.offset_x(), config.offset_y())
        );
    }

    /// The ticker is non-decreasing and finishes exactly on target.
    #[test]
    fn ticker_is_monotonic_and_exact(
        target in prop_oneof![0u64..5_000_000, (u64::MAX - 1_000)..=u64::MAX]
    ) {
        let values: Vec<u64> = Ticker::new(target).collect();
        prop_assert!(values.windows(2).all(|w| w[0] < w[1]));
        if target == 0 {
            prop_assert!(values.is_empty());
        } else {
            prop_assert_eq!(values.last().copied(), Some(target));
            prop_assert!(values.len() as u64 <= 100);
        }
    }

    /// Counts of a thousand or more always use the K form.
    #[test]
    fn format_switches_at_one_thousand(count in 0u64..10_000_000) {
        let text = format_count(count);
        prop_assert_eq!(text.ends_with('K'), count >= 1000);
    }
}
