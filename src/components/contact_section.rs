//! Contact Section
//!
//! The form is not submitted anywhere: its fields are turned into a WhatsApp
//! message opened in a new tab, then cleared. Quick contact details and the
//! map sit next to it.

use caferesto_core::ContactMessage;
use caferesto_ui::{Button, ButtonVariant, Input, Reveal, RevealTag, TextArea};
use dioxus::prelude::*;

use crate::browser::open_in_new_tab;
use crate::context::use_site_config;

#[component]
pub fn ContactSection() -> Element {
    let site = use_site_config();
    let mut form = use_signal(ContactMessage::default);
    let mut blocked = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let url = form.read().whatsapp_url(&site.read().contact.whatsapp_phone);

        match open_in_new_tab(&url) {
            Ok(()) => {
                tracing::info!("Contact message handed off to WhatsApp");
                blocked.set(false);
                form.set(ContactMessage::default());
            }
            Err(e) => {
                // Keep the fields so the visitor can retry after allowing popups.
                tracing::error!("Failed to open WhatsApp: {}", e);
                blocked.set(true);
            }
        }
    };

    let config = site.read();
    let fields = form.read();

    rsx! {
        section { id: "contact", class: "section contact",
            div { class: "contact__inner",
                div { class: "centered",
                    Reveal { tag: RevealTag::P, y: 8, class: "eyebrow".to_string(),
                        "We would be delighted to welcome you"
                    }
                    Reveal { tag: RevealTag::H2, y: 10, delay: 70, class: "section-title".to_string(),
                        "Contact {config.name}"
                    }
                    Reveal { tag: RevealTag::P, y: 12, delay: 140, class: "section-lead".to_string(),
                        "Reservations, events, or just want to say hello? "
                        "Write to us or find us on the map."
                    }
                }

                div { class: "contact__grid",
                    Reveal { y: 14,
                        div { class: "card",
                            form { class: "form-grid", onsubmit,
                                Input {
                                    id: "name".to_string(),
                                    name: "name".to_string(),
                                    label: "Name".to_string(),
                                    value: fields.name.clone(),
                                    oninput: move |v| form.write().name = v,
                                    placeholder: "Your name".to_string(),
                                    required: true,
                                }
                                div { class: "form-row",
                                    Input {
                                        id: "email".to_string(),
                                        name: "email".to_string(),
                                        label: "Email".to_string(),
                                        value: fields.email.clone(),
                                        oninput: move |v| form.write().email = v,
                                        input_type: "email".to_string(),
                                        placeholder: "you@example.com".to_string(),
                                        required: true,
                                    }
                                    Input {
                                        id: "phone".to_string(),
                                        name: "phone".to_string(),
                                        label: "Phone".to_string(),
                                        value: fields.phone.clone(),
                                        oninput: move |v| form.write().phone = v,
                                        input_type: "tel".to_string(),
                                        placeholder: "+216 XX XXX XXX".to_string(),
                                    }
                                }
                                TextArea {
                                    id: "message".to_string(),
                                    name: "message".to_string(),
                                    label: "Message".to_string(),
                                    value: fields.message.clone(),
                                    oninput: move |v| form.write().message = v,
                                    placeholder: "How can we help you?".to_string(),
                                    rows: 5,
                                    required: true,
                                }
                                Button {
                                    variant: ButtonVariant::Primary,
                                    button_type: "submit".to_string(),
                                    "Send Message"
                                }
                            }

                            if blocked() {
                                p { class: "form-notice error",
                                    "Your browser blocked the WhatsApp window. Allow pop-ups for this site and try again."
                                }
                            }

                            div { class: "contact__details",
                                div { span { class: "accent-icon", "\u{2316}" } "{config.contact.address}" }
                                div { span { class: "accent-icon", "\u{260E}" } "{config.contact.footer_phone}" }
                                div { span { class: "accent-icon", "\u{2709}" } "{config.contact.email}" }
                            }
                        }
                    }

                    Reveal { y: 14, delay: 120,
                        div { class: "contact__map",
                            iframe {
                                title: "{config.name} {config.city} - Google Map",
                                src: "{config.media.map_embed_url}",
                                "loading": "lazy",
                                "referrerpolicy": "no-referrer-when-downgrade",
                            }
                        }
                        div { class: "contact__note",
                            "Located in the heart of {config.city}, with parking nearby. "
                            "Perfect for a quick lunch or a friendly evening."
                        }
                    }
                }
            }
        }
    }
}
