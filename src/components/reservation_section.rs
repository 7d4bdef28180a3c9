//! Reservation Section
//!
//! Table requests are validated locally, then forwarded to the restaurant's
//! chat bot. The visitor always learns the outcome: a confirmation on
//! success, a notice with the reason on failure.

use caferesto_core::{send_reservation, ReservationForm, SiteError};
use caferesto_ui::{Button, ButtonVariant, Input, Reveal, TextArea};
use dioxus::prelude::*;

use crate::browser::{today, BrowserClient};
use crate::context::use_site_config;

/// Where the current submission stands
#[derive(Clone, Debug, PartialEq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl SubmitState {
    /// Text shown to the visitor for a failed submission
    pub fn failure_message(err: &SiteError) -> String {
        match err {
            SiteError::InvalidReservation(reason) => {
                format!("Please check your request: {}.", reason)
            }
            _ => "We could not send your reservation. Please call us or try again later."
                .to_string(),
        }
    }
}

#[component]
pub fn ReservationSection() -> Element {
    let site = use_site_config();
    let mut form = use_signal(ReservationForm::default);
    let mut status = use_signal(SubmitState::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if status() == SubmitState::Sending {
            return;
        }
        status.set(SubmitState::Sending);

        let request = form();
        let endpoints = site.peek().endpoints.clone();
        spawn(async move {
            match send_reservation(&BrowserClient, &endpoints, &request, today()).await {
                Ok(()) => {
                    status.set(SubmitState::Sent);
                    form.set(ReservationForm::default());
                }
                Err(e) => {
                    tracing::error!("Failed to send reservation: {}", e);
                    status.set(SubmitState::Failed(SubmitState::failure_message(&e)));
                }
            }
        });
    };

    let config = site.read();
    let fields = form.read();
    let min_date = today().format("%Y-%m-%d").to_string();
    let sending = status() == SubmitState::Sending;

    rsx! {
        section {
            id: "reservation",
            class: "section reservation",
            "aria-labelledby": "reservation-title",
            div { class: "reservation__backdrop",
                img { src: "{config.media.reservation_background}", alt: "Coffee shop background" }
                div { class: "reservation__shade" }
            }

            div { class: "reservation__inner",
                Reveal { y: 14, class: "reservation__card".to_string(),
                    div { class: "centered",
                        p { class: "eyebrow caramel", "Plan your visit" }
                        h2 { id: "reservation-title", class: "section-title", "Make a Reservation" }
                        p { class: "section-lead small",
                            "Book your table in seconds. We'll confirm by phone or email."
                        }
                    }

                    form { class: "form-grid reservation__form", onsubmit,
                        div { class: "form-row",
                            Input {
                                id: "res-name".to_string(),
                                name: "name".to_string(),
                                label: "Name".to_string(),
                                value: fields.name.clone(),
                                oninput: move |v| form.write().name = v,
                                placeholder: "Your full name".to_string(),
                                required: true,
                            }
                            Input {
                                id: "res-phone".to_string(),
                                name: "phone".to_string(),
                                label: "Phone".to_string(),
                                value: fields.phone.clone(),
                                oninput: move |v| form.write().phone = v,
                                input_type: "tel".to_string(),
                                placeholder: "+1 234 567 890".to_string(),
                                required: true,
                            }
                        }
                        div { class: "form-row",
                            Input {
                                id: "res-email".to_string(),
                                name: "email".to_string(),
                                label: "Email".to_string(),
                                value: fields.email.clone(),
                                oninput: move |v| form.write().email = v,
                                input_type: "email".to_string(),
                                placeholder: "you@example.com".to_string(),
                                required: true,
                            }
                            Input {
                                id: "res-party".to_string(),
                                name: "party".to_string(),
                                label: "Party size".to_string(),
                                value: fields.party.clone(),
                                oninput: move |v| form.write().party = v,
                                input_type: "number".to_string(),
                                min: "1".to_string(),
                                max: "12".to_string(),
                                step: "1".to_string(),
                                placeholder: "2".to_string(),
                                required: true,
                            }
                        }
                        div { class: "form-row",
                            Input {
                                id: "res-date".to_string(),
                                name: "date".to_string(),
                                label: "Date".to_string(),
                                value: fields.date.clone(),
                                oninput: move |v| form.write().date = v,
                                input_type: "date".to_string(),
                                min: min_date,
                                required: true,
                            }
                            Input {
                                id: "res-time".to_string(),
                                name: "time".to_string(),
                                label: "Time".to_string(),
                                value: fields.time.clone(),
                                oninput: move |v| form.write().time = v,
                                input_type: "time".to_string(),
                                min: "06:30".to_string(),
                                max: "21:30".to_string(),
                                step: "900".to_string(),
                                required: true,
                            }
                        }
                        TextArea {
                            id: "res-notes".to_string(),
                            name: "notes".to_string(),
                            label: "Special requests (optional)".to_string(),
                            value: fields.notes.clone(),
                            oninput: move |v| form.write().notes = v,
                            placeholder: "Allergies, occasion, seating preference...".to_string(),
                            rows: 4,
                        }

                        div { class: "reservation__footer",
                            p { class: "muted small", "{config.hours.reservations}" }
                            Button {
                                variant: ButtonVariant::Caramel,
                                button_type: "submit".to_string(),
                                disabled: sending,
                                if sending { "Sending..." } else { "Request Reservation" }
                            }
                        }
                    }

                    match status() {
                        SubmitState::Sent => rsx! {
                            p { class: "form-notice success", "Your reservation has been sent successfully." }
                        },
                        SubmitState::Failed(message) => rsx! {
                            p { class: "form-notice error", "{message}" }
                        },
                        _ => rsx! {},
                    }
                }
            }
        }
    }
}
