//! About section.

use caferesto_ui::{Reveal, RevealTag};
use dioxus::prelude::*;

use crate::context::use_site_config;

#[component]
pub fn About() -> Element {
    let site = use_site_config();
    let config = site.read();

    rsx! {
        section { id: "about", class: "section about",
            div { class: "about__grid",
                div {
                    Reveal { tag: RevealTag::P, y: 8, class: "eyebrow".to_string(), "About Us" }
                    Reveal { tag: RevealTag::H2, y: 10, delay: 70, class: "section-title".to_string(),
                        "A Culinary Journey in the Heart of {config.city}"
                    }
                    Reveal { tag: RevealTag::P, y: 12, delay: 140, class: "body-text".to_string(),
                        "At "
                        strong { "{config.name}" }
                        ", we bring together the rich flavors of Tunisian tradition and the best of "
                        "world cuisine. From freshly grilled meats to artisanal pizzas, vibrant salads, "
                        "and indulgent desserts, every dish is crafted with care and served in a warm, "
                        "elegant setting."
                    }
                    Reveal { y: 14, delay: 210,
                        blockquote { class: "about__quote",
                            p {
                                "\"More than a restaurant — it’s where great food, beautiful ambiance, "
                                "and attentive service come together.\""
                            }
                        }
                    }
                }
                Reveal { y: 12, delay: 120, class: "about__image".to_string(),
                    img {
                        src: "{config.media.about_image}",
                        alt: "Interior of {config.name} in {config.city}",
                        width: "520",
                        height: "520",
                    }
                }
            }
        }
    }
}
