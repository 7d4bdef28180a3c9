//! Input Field Components
//!
//! Labelled text inputs and textareas for the contact and reservation forms.
//! Fields are controlled: the parent owns the value and receives every edit.
//! Native constraints (`required`, `min`, `max`, `step`) are passed straight
//! through so the browser validates before submit.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Element id, also used by the label
    pub id: String,
    /// Form field name
    pub name: String,
    /// Label text
    pub label: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, tel, number, date, time)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default)]
    pub min: Option<String>,
    #[props(default)]
    pub max: Option<String>,
    #[props(default)]
    pub step: Option<String>,
}

/// Labelled input field
///
/// # Example
///
/// ```rust,ignore
/// let mut party = use_signal(String::new);
///
/// rsx! {
///     Input {
///         id: "res-party".to_string(),
///         name: "party".to_string(),
///         label: "Party size".to_string(),
///         value: party(),
///         oninput: move |s| party.set(s),
///         input_type: "number".to_string(),
///         min: "1".to_string(),
///         max: "12".to_string(),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    rsx! {
        div { class: "form-field",
            label { class: "input-label", r#for: "{props.id}", "{props.label}" }
            input {
                id: "{props.id}",
                name: "{props.name}",
                class: "input-field",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                min: props.min.clone(),
                max: props.max.clone(),
                step: props.step.clone(),
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub id: String,
    pub name: String,
    pub label: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,
    #[props(default = false)]
    pub required: bool,
}

/// Multi-line labelled input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        div { class: "form-field",
            label { class: "input-label", r#for: "{props.id}", "{props.label}" }
            textarea {
                id: "{props.id}",
                name: "{props.name}",
                class: "input-field textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
