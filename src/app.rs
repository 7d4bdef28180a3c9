use caferesto_core::SiteConfig;
use dioxus::prelude::*;

use crate::context::load_site_config;
use crate::pages::{Home, NotFound};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The single-page site; sections are reached through `#anchors`
/// - anything else - A small not-found page linking home
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, the site configuration context, and routing.
#[component]
pub fn App() -> Element {
    let config: Signal<SiteConfig> = use_signal(load_site_config);
    use_context_provider(|| config);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
