//! Labeled form fields with an inline error slot.
//!
//! Each field renders as
//!
//! ```text
//! div.form-group
//!   label[for=id]
//!   input#id | textarea#id
//!   span#<error_id>.error-message
//! ```
//!
//! The error slot is always present so the layout does not jump when a
//! message appears.

use dioxus::prelude::*;

use crate::components::button::join_classes;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Element id, also the form field name
    pub id: String,
    /// Id of the inline error slot
    pub error_id: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Handler called when the field loses focus
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
    /// Inline error text; empty when the field is valid
    #[props(default)]
    pub error: String,
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Locked while the form is being submitted
    #[props(default = false)]
    pub disabled: bool,
}

/// Single-line labeled input
///
/// # Example
///
/// ```rust,ignore
/// let mut name = use_signal(String::new);
///
/// rsx! {
///     Input {
///         id: "name".to_string(),
///         error_id: "nameError".to_string(),
///         value: name(),
///         oninput: move |s| name.set(s),
///         label: "Name".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let class = field_class(&props.error);

    rsx! {
        div { class: "form-group",
            if let Some(label) = &props.label {
                label { r#for: "{props.id}", "{label}" }
            }
            input {
                id: "{props.id}",
                name: "{props.id}",
                class: "{class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
                onblur: move |_| {
                    if let Some(handler) = &props.onblur {
                        handler.call(());
                    }
                },
            }
            span { id: "{props.error_id}", class: "error-message", "{props.error}" }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub id: String,
    pub error_id: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
    #[props(default)]
    pub error: String,
    #[props(default)]
    pub label: Option<String>,
    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,
    #[props(default = false)]
    pub disabled: bool,
}

/// Multi-line labeled input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let class = join_classes(&field_class(&props.error), Some("textarea"));

    rsx! {
        div { class: "form-group",
            if let Some(label) = &props.label {
                label { r#for: "{props.id}", "{label}" }
            }
            textarea {
                id: "{props.id}",
                name: "{props.id}",
                class: "{class}",
                rows: "{props.rows}",
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
                onblur: move |_| {
                    if let Some(handler) = &props.onblur {
                        handler.call(());
                    }
                },
            }
            span { id: "{props.error_id}", class: "error-message", "{props.error}" }
        }
    }
}

/// Hidden input carried along with the form
#[component]
pub fn HiddenInput(name: String, value: String) -> Element {
    rsx! {
        input { r#type: "hidden", name: "{name}", value: "{value}" }
    }
}

fn field_class(error: &str) -> String {
    if error.is_empty() {
        "form-control".to_string()
    } else {
        "form-control invalid".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_fields_get_marker_class() {
        assert_eq!(field_class(""), "form-control");
        assert_eq!(field_class("Name is required"), "form-control invalid");
    }
}
