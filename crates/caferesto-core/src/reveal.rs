//! Scroll-reveal animation state.
//!
//! A revealable element starts transparent and offset from its resting
//! position. Once an intersection watch reports it on screen, it fades and
//! slides into place. This module holds everything about that behaviour that
//! does not need a browser: the configuration, the visibility state machine
//! and the inline style derived from it. The browser binding lives in the UI
//! crate.
//!
//! ## Lifecycle
//!
//! ```text
//! mount ──► reduced motion? ──yes──► visible (no transition), nothing watched
//!              │ no
//!              ▼
//!        intersection API? ──no───► visible (fail-open), nothing watched
//!              │ yes
//!              ▼
//!           watching ──sample──► visible ──(trigger_once)──► released
//!              ▲                    │
//!              └──(!trigger_once)───┘ sample below threshold
//! ```

use std::fmt;

/// Default transition length in milliseconds.
pub const DEFAULT_DURATION_MS: u32 = 600;
/// Default vertical offset in pixels.
pub const DEFAULT_OFFSET_Y: i32 = 20;
/// Default fraction of the element that must be on screen.
pub const DEFAULT_THRESHOLD: f64 = 0.22;
/// Slack allowed below the threshold; browsers report subpixel-rounded
/// ratios such as 0.9999 for a fully visible element.
pub const RATIO_TOLERANCE: f64 = 1e-3;
/// Easing used for the transform half of the transition.
pub const TRANSFORM_EASING: &str = "cubic-bezier(0.22, 1, 0.36, 1)";

/// Configuration of a single revealable element.
///
/// Build with [`RevealConfig::default`] and the `with_*` methods; they keep
/// the fields inside their documented ranges.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    delay_ms: u32,
    duration_ms: u32,
    offset_x: i32,
    offset_y: i32,
    threshold: f64,
    trigger_once: bool,
    root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            delay_ms: 0,
            duration_ms: DEFAULT_DURATION_MS,
            offset_x: 0,
            offset_y: DEFAULT_OFFSET_Y,
            threshold: DEFAULT_THRESHOLD,
            trigger_once: true,
            root_margin: "0px".to_string(),
        }
    }
}

impl RevealConfig {
    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Zero is raised to 1ms so the transition shorthand stays well formed.
    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms.max(1);
        self
    }

    pub fn with_offset(mut self, offset_x: i32, offset_y: i32) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    /// Clamped to `[0, 1]`; NaN falls back to the default.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        self
    }

    pub fn with_trigger_once(mut self, trigger_once: bool) -> Self {
        self.trigger_once = trigger_once;
        self
    }

    /// Blank margins fall back to `"0px"`.
    pub fn with_root_margin(mut self, root_margin: impl Into<String>) -> Self {
        let margin = root_margin.into();
        self.root_margin = if margin.trim().is_empty() {
            "0px".to_string()
        } else {
            margin
        };
        self
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn offset_x(&self) -> i32 {
        self.offset_x
    }

    pub fn offset_y(&self) -> i32 {
        self.offset_y
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn trigger_once(&self) -> bool {
        self.trigger_once
    }

    pub fn root_margin(&self) -> &str {
        &self.root_margin
    }
}

/// Inline style of a revealable element.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub transform: String,
    pub transition: String,
    pub will_change: &'static str,
}

impl RevealStyle {
    /// Render as a CSS declaration list for a `style` attribute.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RevealStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "opacity: {}; transform: {}; transition: {}; will-change: {};",
            self.opacity, self.transform, self.transition, self.will_change
        )
    }
}

/// Style for an element in the given visibility state.
pub fn style_for(is_visible: bool, config: &RevealConfig) -> RevealStyle {
    let transform = if is_visible {
        "translate3d(0,0,0)".to_string()
    } else {
        format!(
            "translate3d({}px, {}px, 0)",
            config.offset_x, config.offset_y
        )
    };

    RevealStyle {
        opacity: if is_visible { 1.0 } else { 0.0 },
        transform,
        transition: transition_spec(config.duration_ms, config.delay_ms),
        will_change: "transform, opacity",
    }
}

fn transition_spec(duration_ms: u32, delay_ms: u32) -> String {
    format!(
        "transform {d}ms {TRANSFORM_EASING} {delay}ms, opacity {d}ms ease {delay}ms",
        d = duration_ms,
        delay = delay_ms
    )
}

/// What the hosting runtime can tell us at mount time.
pub trait MotionEnvironment {
    /// The user asked the platform to minimise motion.
    fn prefers_reduced_motion(&self) -> bool;

    /// A viewport-intersection watch can be registered.
    fn supports_intersection_watch(&self) -> bool;
}

/// Result of mounting a revealable element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountOutcome {
    /// Register an intersection watch with the element's threshold and margin.
    Watch,
    /// Shown at rest straight away; nothing to watch.
    ShowImmediately,
}

/// A single report from the intersection watch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionSample {
    pub fn entering(ratio: f64) -> Self {
        Self {
            is_intersecting: true,
            ratio,
        }
    }

    pub fn leaving() -> Self {
        Self {
            is_intersecting: false,
            ratio: 0.0,
        }
    }
}

/// What the watch owner must do after a sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchAction {
    Keep,
    /// Stop watching; the element will never change again.
    Release,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Unmounted,
    Watching,
    Settled,
}

/// Visibility state machine for one revealable element.
#[derive(Clone, Debug)]
pub struct RevealState {
    config: RevealConfig,
    visible: bool,
    reduced_motion: bool,
    phase: Phase,
}

impl RevealState {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            visible: false,
            reduced_motion: false,
            phase: Phase::Unmounted,
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether an intersection watch should currently be held.
    pub fn is_watching(&self) -> bool {
        self.phase == Phase::Watching
    }

    /// Query the environment once and decide how the element appears.
    ///
    /// Calling this again after the first mount is a no-op that reports the
    /// current phase.
    pub fn mount(&mut self, env: &impl MotionEnvironment) -> MountOutcome {
        match self.phase {
            Phase::Watching => return MountOutcome::Watch,
            Phase::Settled => return MountOutcome::ShowImmediately,
            Phase::Unmounted => {}
        }

        if env.prefers_reduced_motion() {
            tracing::debug!("reduced motion requested, revealing without animation");
            self.reduced_motion = true;
            self.settle_visible();
            return MountOutcome::ShowImmediately;
        }

        if !env.supports_intersection_watch() {
            tracing::debug!("intersection watch unavailable, revealing immediately");
            self.settle_visible();
            return MountOutcome::ShowImmediately;
        }

        self.phase = Phase::Watching;
        MountOutcome::Watch
    }

    /// Registering the watch failed after [`MountOutcome::Watch`].
    pub fn watch_failed(&mut self) {
        tracing::warn!("intersection watch could not be registered, revealing immediately");
        self.settle_visible();
    }

    /// Apply an intersection sample.
    ///
    /// Samples arriving when no watch is held are ignored and answered with
    /// [`WatchAction::Release`].
    pub fn observe(&mut self, sample: IntersectionSample) -> WatchAction {
        if self.phase != Phase::Watching {
            return WatchAction::Release;
        }

        let in_view =
            sample.is_intersecting && sample.ratio + RATIO_TOLERANCE >= self.config.threshold;

        if in_view {
            if !self.visible {
                tracing::debug!(ratio = sample.ratio, "element revealed");
                self.visible = true;
            }
            if self.config.trigger_once {
                self.phase = Phase::Settled;
                return WatchAction::Release;
            }
        } else if !self.config.trigger_once && self.visible {
            tracing::debug!(ratio = sample.ratio, "element hidden again");
            self.visible = false;
        }

        WatchAction::Keep
    }

    /// The element left the document; any held watch must be released.
    pub fn unmount(&mut self) -> WatchAction {
        let action = if self.phase == Phase::Watching {
            WatchAction::Release
        } else {
            WatchAction::Keep
        };
        self.phase = Phase::Settled;
        action
    }

    /// Current inline style.
    ///
    /// With reduced motion the element carries no transition at all.
    pub fn style(&self) -> RevealStyle {
        let mut style = style_for(self.visible, &self.config);
        if self.reduced_motion {
            style.transition = "none".to_string();
        }
        style
    }

    fn settle_visible(&mut self) {
        self.visible = true;
        self.phase = Phase::Settled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Env {
        reduced: bool,
        observer: bool,
    }

    impl MotionEnvironment for Env {
        fn prefers_reduced_motion(&self) -> bool {
            self.reduced
        }

        fn supports_intersection_watch(&self) -> bool {
            self.observer
        }
    }

    const BROWSER: Env = Env {
        reduced: false,
        observer: true,
    };

    #[test]
    fn defaults_match_documented_values() {
        let config = RevealConfig::default();
        assert_eq!(config.delay_ms(), 0);
        assert_eq!(config.duration_ms(), 600);
        assert_eq!(config.offset_x(), 0);
        assert_eq!(config.offset_y(), 20);
        assert_eq!(config.threshold(), 0.22);
        assert!(config.trigger_once());
        assert_eq!(config.root_margin(), "0px");
    }

    #[test]
    fn builder_clamps_out_of_range_values() {
        let config = RevealConfig::default()
            .with_threshold(1.7)
            .with_duration(0)
            .with_root_margin("  ");
        assert_eq!(config.threshold(), 1.0);
        assert_eq!(config.duration_ms(), 1);
        assert_eq!(config.root_margin(), "0px");

        assert_eq!(RevealConfig::default().with_threshold(-0.5).threshold(), 0.0);
        assert_eq!(
            RevealConfig::default().with_threshold(f64::NAN).threshold(),
            DEFAULT_THRESHOLD
        );
    }

    #[test]
    fn hidden_style_uses_offsets() {
        let config = RevealConfig::default()
            .with_offset(-4, 12)
            .with_delay(80)
            .with_duration(500);
        let style = style_for(false, &config);
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.transform, "translate3d(-4px, 12px, 0)");
        assert_eq!(
            style.transition,
            "transform 500ms cubic-bezier(0.22, 1, 0.36, 1) 80ms, opacity 500ms ease 80ms"
        );
        assert_eq!(style.will_change, "transform, opacity");
    }

    #[test]
    fn visible_style_is_at_rest() {
        let style = style_for(true, &RevealConfig::default().with_offset(30, 30));
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.transform, "translate3d(0,0,0)");
    }

    #[test]
    fn css_rendering() {
        let css = style_for(true, &RevealConfig::default()).to_css();
        assert!(css.starts_with("opacity: 1; transform: translate3d(0,0,0);"));
        assert!(css.ends_with("will-change: transform, opacity;"));
    }

    #[test]
    fn mount_starts_hidden_and_watching() {
        let mut state = RevealState::new(RevealConfig::default());
        assert_eq!(state.mount(&BROWSER), MountOutcome::Watch);
        assert!(!state.is_visible());
        assert!(state.is_watching());
    }

    #[test]
    fn reduced_motion_shows_immediately_without_transition() {
        let mut state = RevealState::new(RevealConfig::default().with_delay(240));
        let env = Env {
            reduced: true,
            observer: true,
        };
        assert_eq!(state.mount(&env), MountOutcome::ShowImmediately);
        assert!(state.is_visible());
        assert!(!state.is_watching());
        assert_eq!(state.style().transition, "none");
    }

    #[test]
    fn missing_observer_fails_open() {
        let mut state = RevealState::new(RevealConfig::default());
        let env = Env {
            reduced: false,
            observer: false,
        };
        assert_eq!(state.mount(&env), MountOutcome::ShowImmediately);
        assert!(state.is_visible());
    }

    #[test]
    fn failed_registration_fails_open() {
        let mut state = RevealState::new(RevealConfig::default());
        state.mount(&BROWSER);
        state.watch_failed();
        assert!(state.is_visible());
        assert!(!state.is_watching());
    }

    #[test]
    fn trigger_once_releases_after_first_reveal() {
        let mut state = RevealState::new(RevealConfig::default());
        state.mount(&BROWSER);

        assert_eq!(state.observe(IntersectionSample::entering(0.5)), WatchAction::Release);
        assert!(state.is_visible());

        // Late samples from a slow observer do not hide the element.
        assert_eq!(state.observe(IntersectionSample::leaving()), WatchAction::Release);
        assert!(state.is_visible());
    }

    #[test]
    fn below_threshold_does_not_reveal() {
        let mut state = RevealState::new(RevealConfig::default().with_threshold(0.5));
        state.mount(&BROWSER);
        assert_eq!(state.observe(IntersectionSample::entering(0.3)), WatchAction::Keep);
        assert!(!state.is_visible());
        assert!(state.is_watching());
    }

    #[test]
    fn config_is_fixed_after_mount() {
        let config = RevealConfig::default().with_threshold(0.5).with_trigger_once(false);
        let mut state = RevealState::new(config.clone());
        state.mount(&BROWSER);
        state.observe(IntersectionSample::entering(0.8));
        state.observe(IntersectionSample::leaving());
        assert_eq!(state.config(), &config);
    }

    #[test]
    fn full_threshold_accepts_rounded_ratio() {
        let mut state = RevealState::new(RevealConfig::default().with_threshold(1.0));
        state.mount(&BROWSER);
        assert_eq!(
            state.observe(IntersectionSample::entering(0.9999)),
            WatchAction::Release
        );
        assert!(state.is_visible());
    }

    #[test]
    fn repeatable_reveal_toggles() {
        let mut state = RevealState::new(RevealConfig::default().with_trigger_once(false));
        state.mount(&BROWSER);

        assert_eq!(state.observe(IntersectionSample::entering(0.9)), WatchAction::Keep);
        assert!(state.is_visible());
        assert_eq!(state.observe(IntersectionSample::leaving()), WatchAction::Keep);
        assert!(!state.is_visible());
        assert_eq!(state.observe(IntersectionSample::entering(0.4)), WatchAction::Keep);
        assert!(state.is_visible());
    }

    #[test]
    fn unmount_releases_unrevealed_watch() {
        let mut state = RevealState::new(RevealConfig::default());
        state.mount(&BROWSER);
        assert_eq!(state.unmount(), WatchAction::Release);
        assert!(!state.is_watching());
        assert_eq!(state.unmount(), WatchAction::Keep);
    }

    #[test]
    fn remount_is_idempotent() {
        let mut state = RevealState::new(RevealConfig::default());
        assert_eq!(state.mount(&BROWSER), MountOutcome::Watch);
        let reduced = Env {
            reduced: true,
            observer: true,
        };
        assert_eq!(state.mount(&reduced), MountOutcome::Watch);
        assert!(!state.is_visible());
    }
}
