//! Hero section: looping background video with the welcome copy.

use caferesto_ui::{Button, ButtonVariant, Reveal, RevealTag};
use dioxus::prelude::*;

use crate::browser::scroll_to_section;
use crate::context::use_site_config;

#[component]
pub fn Hero() -> Element {
    let site = use_site_config();
    let config = site.read();

    rsx! {
        section { class: "hero",
            div { class: "hero__media",
                video {
                    class: "hero__video",
                    src: "{config.media.hero_video}",
                    autoplay: true,
                    r#loop: true,
                    muted: true,
                    "playsinline": "true",
                }
                div { class: "hero__shade" }
            }
            div { class: "hero__content",
                Reveal { tag: RevealTag::P, y: 8, class: "eyebrow".to_string(),
                    "Welcome to {config.name} – {config.city}"
                }
                Reveal { tag: RevealTag::H1, y: 10, delay: 80, class: "hero__title".to_string(),
                    "Taste the World"
                    br {}
                    "In the Heart of {config.city}"
                }
                Reveal { tag: RevealTag::P, y: 12, delay: 160, class: "hero__lead".to_string(),
                    "From authentic Tunisian specialties to international favorites, "
                    "enjoy freshly prepared dishes, impeccable service, and a vibrant atmosphere."
                }
                Reveal { y: 14, delay: 240, class: "hero__actions".to_string(),
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| scroll_to_section("menu"),
                        "Explore Menu"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| scroll_to_section("reservation"),
                        "Reserve a Table"
                    }
                }
            }
        }
    }
}
