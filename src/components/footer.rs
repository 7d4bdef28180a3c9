//! Site footer: brand blurb, hours, contact details and a small photo grid.

use chrono::Datelike;
use dioxus::prelude::*;

use crate::browser::today;
use crate::context::use_site_config;

/// Number of gallery photos shown in the footer grid
const FOOTER_PHOTOS: usize = 6;

#[component]
pub fn Footer() -> Element {
    let site = use_site_config();
    let config = site.read();
    let year = today().year();
    let mailto = format!("mailto:{}", config.contact.email);

    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer__grid",
                div { class: "site-footer__brand",
                    img { src: "{config.media.logo}", alt: "{config.name} Logo", width: "48", height: "48" }
                    p {
                        "Fresh coffee, homemade pastries and a warm welcome in the heart of {config.city}."
                    }
                }

                div {
                    h4 { "Opening Hours" }
                    p { "{config.hours.footer}" }
                }

                div {
                    h4 { "Contact" }
                    ul { class: "site-footer__list",
                        li { "{config.contact.footer_address}" }
                        li { "{config.contact.footer_phone}" }
                        li { a { href: "{mailto}", "{config.contact.email}" } }
                    }
                }

                div {
                    h4 { "Gallery" }
                    div { class: "site-footer__photos",
                        for image in config.gallery.iter().take(FOOTER_PHOTOS) {
                            img { key: "{image.src}", src: "{image.src}", alt: "{image.alt}", "loading": "lazy" }
                        }
                    }
                }
            }

            div { class: "site-footer__bottom",
                p { "\u{00A9} {year} {config.name}. All rights reserved." }
                div { class: "site-footer__legal",
                    a { href: "#", "Privacy Policy" }
                    a { href: "#", "Terms of Service" }
                }
            }
        }
    }
}
