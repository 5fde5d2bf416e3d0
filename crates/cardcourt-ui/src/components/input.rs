//! Input Field Components
//!
//! Labelled text/number inputs and textareas. Values are controlled by the
//! caller: every keystroke is forwarded as a raw string and the caller
//! decides what the field shows next.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// DOM id, also used for label association
    pub id: String,
    /// Current input value
    pub value: String,
    /// Handler called with the raw value on every input event
    pub oninput: EventHandler<String>,
    /// Label text
    pub label: String,
    /// Input type (text, number, url...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
}

/// Labelled single-line field
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         id: "ataque".to_string(),
///         label: "Ataque".to_string(),
///         input_type: "number".to_string(),
///         value: draft.attack.display(),
///         oninput: move |raw| on_field.call((DraftField::Attack, raw)),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    rsx! {
        div { class: "form-field",
            label {
                class: "input-label",
                r#for: "{props.id}",
                "{props.label}"
            }
            input {
                id: "{props.id}",
                name: "{props.id}",
                class: "input-field",
                r#type: "{props.input_type}",
                value: "{props.value}",
                required: props.required,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub id: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    pub label: String,
    /// Number of visible rows
    #[props(default = 3)]
    pub rows: u32,
    #[props(default = false)]
    pub required: bool,
}

/// Labelled multi-line field
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        div { class: "form-field",
            label {
                class: "input-label",
                r#for: "{props.id}",
                "{props.label}"
            }
            textarea {
                id: "{props.id}",
                name: "{props.id}",
                class: "input-field textarea",
                rows: "{props.rows}",
                required: props.required,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
