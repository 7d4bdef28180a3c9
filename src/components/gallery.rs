//! Gallery: an endless horizontal strip of photos.
//!
//! The images are rendered twice in a row and the strip is translated by
//! -50% over 50s, so the second copy lands exactly where the first began.

use caferesto_core::looped_track;
use caferesto_ui::{Reveal, RevealTag};
use dioxus::prelude::*;

use crate::context::use_site_config;

#[component]
pub fn Gallery() -> Element {
    let site = use_site_config();
    let track = looped_track(&site.read().gallery);

    rsx! {
        section { id: "gallery", class: "section gallery",
            div { class: "gallery__inner",
                div { class: "centered",
                    Reveal { tag: RevealTag::H2, y: 10, delay: 70, class: "gallery__title".to_string(),
                        "Gallery"
                    }
                }
                div { class: "gallery__viewport", "aria-label": "Gallery carousel",
                    div { class: "gallery__track",
                        for (i, image) in track.iter().enumerate() {
                            div { key: "{i}", class: "gallery__item",
                                img {
                                    src: "{image.src}",
                                    alt: "{image.alt}",
                                    "loading": if i < 2 { "eager" } else { "lazy" },
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
