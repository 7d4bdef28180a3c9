//! Reveal Component
//!
//! Fades and slides its children into place the first time they scroll into
//! view. The visibility rules live in [`caferesto_core::reveal`]; this module
//! binds them to the browser's `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use caferesto_core::reveal::{DEFAULT_DURATION_MS, DEFAULT_OFFSET_Y, DEFAULT_THRESHOLD};
use caferesto_core::{
    IntersectionSample, MotionEnvironment, MountOutcome, RevealConfig, RevealState, SiteError,
    SiteResult, WatchAction,
};
use dioxus::prelude::*;
use dioxus::web::WebEventExt;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Element the reveal wrapper renders as
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RevealTag {
    #[default]
    Div,
    P,
    H1,
    H2,
    H3,
    Li,
    Section,
}

/// Motion capabilities of the current browser, read once per mount.
#[derive(Clone, Copy, Debug)]
struct BrowserMotion {
    reduced_motion: bool,
    intersection_observer: bool,
}

impl BrowserMotion {
    fn detect() -> Self {
        let Some(window) = web_sys::window() else {
            return Self {
                reduced_motion: false,
                intersection_observer: false,
            };
        };

        let reduced_motion = window
            .match_media(REDUCED_MOTION_QUERY)
            .ok()
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false);
        let intersection_observer =
            js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false);

        Self {
            reduced_motion,
            intersection_observer,
        }
    }
}

impl MotionEnvironment for BrowserMotion {
    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn supports_intersection_watch(&self) -> bool {
        self.intersection_observer
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// An active intersection watch on one element.
///
/// Owns the observer and the JS closure it calls; dropping the watch
/// disconnects the observer before the closure is freed.
pub struct IntersectionWatch {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl IntersectionWatch {
    /// Start watching `element` with the threshold and root margin of
    /// `config`. `on_sample` decides, per report, whether to keep watching.
    pub fn observe(
        element: &web_sys::Element,
        config: &RevealConfig,
        mut on_sample: impl FnMut(IntersectionSample) -> WatchAction + 'static,
    ) -> SiteResult<Self> {
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let sample = IntersectionSample {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    if on_sample(sample) == WatchAction::Release {
                        observer.unobserve(&entry.target());
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold()));
        options.set_root_margin(config.root_margin());

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| SiteError::Browser(format!("IntersectionObserver: {:?}", e)))?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Scroll-triggered fade/slide-in wrapper
///
/// # Design Notes
///
/// - Starts transparent at `(x, y)` px from rest
/// - Visitors asking for reduced motion get the content at rest, no transition
/// - Without `IntersectionObserver` the content is shown immediately
/// - `once: false` hides the content again when it scrolls away
/// - The config is read once at mount; later prop changes do not re-register
///   the observer
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Reveal { tag: RevealTag::H2, y: 10, delay: 70, class: "section-title",
///         "Signature Menu"
///     }
/// }
/// ```
#[component]
pub fn Reveal(
    /// Wrapper element
    #[props(default)]
    tag: RevealTag,
    #[props(default)] class: Option<String>,
    #[props(default)] id: Option<String>,
    /// Transition start delay in ms
    #[props(default = 0)]
    delay: u32,
    /// Transition length in ms
    #[props(default = DEFAULT_DURATION_MS)]
    duration: u32,
    /// Initial horizontal offset in px
    #[props(default = 0)]
    x: i32,
    /// Initial vertical offset in px
    #[props(default = DEFAULT_OFFSET_Y)]
    y: i32,
    /// Fraction of the element that must be on screen
    #[props(default = DEFAULT_THRESHOLD)]
    threshold: f64,
    /// Reveal only the first time
    #[props(default = true)]
    once: bool,
    #[props(default = "0px".to_string())] root_margin: String,
    children: Element,
) -> Element {
    let mut state = use_signal(move || {
        RevealState::new(
            RevealConfig::default()
                .with_delay(delay)
                .with_duration(duration)
                .with_offset(x, y)
                .with_threshold(threshold)
                .with_trigger_once(once)
                .with_root_margin(root_margin),
        )
    });
    let watch = use_hook(|| Rc::new(RefCell::new(None::<IntersectionWatch>)));

    {
        let watch = watch.clone();
        use_drop(move || {
            if let Ok(mut s) = state.try_write() {
                s.unmount();
            }
            watch.borrow_mut().take();
        });
    }

    let onmounted = move |event: MountedEvent| {
        let outcome = state.write().mount(&BrowserMotion::detect());
        if outcome != MountOutcome::Watch {
            return;
        }

        let Some(element) = event.data().try_as_web_event() else {
            state.write().watch_failed();
            return;
        };

        let config = state.peek().config().clone();
        match IntersectionWatch::observe(&element, &config, move |sample| {
            state.write().observe(sample)
        }) {
            Ok(guard) => {
                *watch.borrow_mut() = Some(guard);
            }
            Err(e) => {
                tracing::warn!("Reveal falling back to visible: {}", e);
                state.write().watch_failed();
            }
        }
    };

    let style = state.read().style().to_css();
    let class = class.unwrap_or_default();

    match tag {
        RevealTag::Div => rsx! {
            div { id, class: "{class}", style: "{style}", onmounted, {children} }
        },
        RevealTag::P => rsx! {
            p { id, class: "{class}", style: "{style}", onmounted, {children} }
        },
        RevealTag::H1 => rsx! {
            h1 { id, class: "{class}", style: "{style}", onmounted, {children} }
        },
        RevealTag::H2 => rsx! {
            h2 { id, class: "{class}", style: "{style}", onmounted, {children} }
        },
        RevealTag::H3 => rsx! {
            h3 { id, class: "{class}", style: "{style}", onmounted, {children} }
        },
        RevealTag::Li => rsx! {
            li { id, class: "{class}", style: "{style}", onmounted, {children} }
        },
        RevealTag::Section => rsx! {
            section { id, class: "{class}", style: "{style}", onmounted, {children} }
        },
    }
}
