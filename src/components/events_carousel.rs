//! Special Events Carousel
//!
//! Birthdays, weddings and meetings as background-image slides. Shows one,
//! two or three slides depending on the viewport width, autoplays every
//! 1.5s and keeps autoplaying after a pagination click.

use std::rc::Rc;

use caferesto_core::{slides_per_view, Carousel, AUTOPLAY_DELAY};
use dioxus::prelude::*;
use gloo::events::EventListener;

use crate::browser::{sleep, viewport_width};
use crate::context::use_site_config;

#[component]
pub fn EventsCarousel() -> Element {
    let site = use_site_config();
    let slides = site.read().events.clone();
    let name = site.read().name.clone();
    let slide_count = slides.len();

    let mut carousel =
        use_signal(move || Carousel::new(slide_count, slides_per_view(viewport_width())));

    // Re-layout on resize; the listener is removed when the hook is dropped.
    use_hook(move || {
        Rc::new(web_sys::window().map(|window| {
            EventListener::new(&window, "resize", move |_| {
                let per_view = slides_per_view(viewport_width());
                if carousel.peek().per_view() != per_view {
                    carousel.write().set_per_view(per_view);
                }
            })
        }))
    });

    use_future(move || async move {
        loop {
            sleep(AUTOPLAY_DELAY).await;
            carousel.write().advance();
        }
    });

    let state = carousel();
    let slide_width = state.slide_width_percent();
    let track_style = format!("transform: translateX({}%);", state.offset_percent());

    rsx! {
        section { class: "events",
            div { class: "events__inner",
                h2 { class: "events__title", "Special Events" }
                p { class: "events__lead",
                    "Make your moment unforgettable at "
                    span { class: "accent", "{name}" }
                    " — whether it's a birthday party, a wedding, or a business meeting."
                }

                div { class: "events__viewport",
                    div { class: "events__track", style: "{track_style}",
                        for slide in slides.iter() {
                            div {
                                key: "{slide.title}",
                                class: "event-slide",
                                style: "flex: 0 0 {slide_width}%;",
                                div {
                                    class: "event-slide__card",
                                    style: "background-image: url('{slide.image}');",
                                    div { class: "event-slide__shade" }
                                    div { class: "event-slide__body",
                                        h3 { "{slide.title}" }
                                        p { "{slide.text}" }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "events__pagination",
                    for page in 0..state.pages() {
                        button {
                            key: "{page}",
                            class: if page == state.page() { "bullet active" } else { "bullet" },
                            "aria-label": format!("Go to slide {}", page + 1),
                            onclick: move |_| {
                                carousel.write().go_to(page);
                            },
                        }
                    }
                }
            }
        }
    }
}
