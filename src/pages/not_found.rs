//! Fallback page for unknown paths.

use caferesto_ui::{ButtonVariant, LinkButton};
use dioxus::prelude::*;

/// Shown for any path other than `/`.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::warn!("No page at {}", path);

    rsx! {
        div { class: "not-found",
            h1 { class: "section-title", "Page not found" }
            p { class: "not-found__path", "{path}" }
            LinkButton {
                href: "/".to_string(),
                variant: ButtonVariant::Primary,
                "Back to the caf\u{e9}"
            }
        }
    }
}
