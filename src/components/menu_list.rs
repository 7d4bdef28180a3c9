//! Signature menu: six dishes with description and price, revealed one after
//! another.

use caferesto_ui::{Button, ButtonVariant, Reveal, RevealTag};
use dioxus::prelude::*;

use crate::context::use_site_config;

/// Stagger between consecutive menu items, in ms.
const ITEM_STAGGER_MS: u32 = 60;

/// Every item but the last gets a divider below it.
fn item_class(index: usize, last: usize) -> String {
    if index < last {
        "menu-item separated".to_string()
    } else {
        "menu-item".to_string()
    }
}

#[component]
pub fn MenuList() -> Element {
    let site = use_site_config();
    let config = site.read();
    let last = config.menu.len().saturating_sub(1);

    rsx! {
        section { id: "menu", class: "section menu",
            div { class: "menu__inner",
                div { class: "centered",
                    Reveal { tag: RevealTag::P, y: 8, class: "eyebrow".to_string(), "Our Best Picks" }
                    Reveal { tag: RevealTag::H2, y: 10, delay: 70, class: "section-title".to_string(),
                        "{config.name} Signature Menu"
                    }
                }

                ul { class: "menu__list",
                    for (i, item) in config.menu.iter().enumerate() {
                        Reveal {
                            key: "{item.name}",
                            tag: RevealTag::Li,
                            y: 14,
                            delay: i as u32 * ITEM_STAGGER_MS,
                            class: item_class(i, last),
                            div { class: "menu-item__head",
                                h3 { class: "menu-item__name", "{item.name}" }
                                div { class: "menu-item__price-wrap",
                                    div { class: "menu-item__rule" }
                                    span { class: "menu-item__price", "{item.price}" }
                                }
                            }
                            p { class: "menu-item__desc", "{item.description}" }
                        }
                    }
                }

                div { class: "centered menu__more",
                    Button { variant: ButtonVariant::Pill, "View Full Menu" }
                }
            }
        }
    }
}
