//! Mobile Navigation Component
//!
//! Slide-in menu panel for small screens (< 768px). Every link closes the
//! panel; so does a click on the dark backdrop.

use caferesto_ui::{ButtonVariant, CloseButton, LinkButton};
use dioxus::prelude::*;

use crate::components::nav_header::NavLocation;

#[derive(Props, Clone, PartialEq)]
pub struct MobileNavProps {
    /// Whether the panel is slid in
    pub open: bool,
    /// Called when the panel should close
    pub on_close: EventHandler<()>,
}

#[component]
pub fn MobileNav(props: MobileNavProps) -> Element {
    let close = props.on_close;

    rsx! {
        div { class: if props.open { "mobile-nav open" } else { "mobile-nav" },
            div { class: "mobile-nav__backdrop", onclick: move |_| close.call(()) }

            div { class: "mobile-nav__panel",
                div { class: "mobile-nav__top",
                    CloseButton { onclick: move |_| close.call(()) }
                }

                nav { class: "mobile-nav__links",
                    for location in NavLocation::ALL {
                        a {
                            class: "mobile-nav-item",
                            href: location.href(),
                            onclick: move |_| close.call(()),
                            "{location.display_name()}"
                        }
                    }
                    LinkButton {
                        href: "#reservation".to_string(),
                        variant: ButtonVariant::Caramel,
                        class: "mobile-nav__cta".to_string(),
                        onclick: move |_| close.call(()),
                        "Book a Table"
                    }
                }
            }
        }
    }
}
