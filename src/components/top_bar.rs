//! Top utility bar: opening hours, phone, e-mail and social links.
//! Desktop only (hidden below 1024px by the stylesheet).

use dioxus::prelude::*;

use crate::context::use_site_config;

#[component]
pub fn TopBar() -> Element {
    let site = use_site_config();
    let config = site.read();
    let mailto = format!("mailto:{}", config.contact.email);

    rsx! {
        div { class: "top-bar",
            div { class: "top-bar__inner",
                div { class: "top-bar__group",
                    span { class: "top-bar__item",
                        span { class: "accent-icon", "\u{25F7}" }
                        "{config.hours.top_bar}"
                    }
                    a { class: "top-bar__item", href: "{config.contact.phone_href}",
                        span { class: "accent-icon", "\u{260E}" }
                        "{config.contact.phone_display}"
                    }
                    a { class: "top-bar__item", href: "{mailto}",
                        span { class: "accent-icon", "\u{2709}" }
                        "{config.contact.email}"
                    }
                }
                div { class: "top-bar__group",
                    a {
                        href: "{config.contact.instagram_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "aria-label": "Instagram",
                        "IG"
                    }
                    a {
                        href: "{config.contact.facebook_url}",
                        "aria-label": "Facebook",
                        "FB"
                    }
                }
            }
        }
    }
}
