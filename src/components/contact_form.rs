//! Contact form wired to the form relay.
//!
//! Field values, inline errors, the submit button and the form-wide message
//! all live in signals; [`FormSignals`] exposes them to [`ContactFlow`] as a
//! [`ContactView`].

use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use gloo::timers::callback::Timeout;
use portfolio_core::contact::{
    revalidate, ContactFields, ContactFlow, ContactView, Field, FormMessage, SubmitButton,
    ValidationReport,
};
use portfolio_ui::{Button, ButtonVariant, FormMessageBanner, HiddenInput, Input, TextArea};

use crate::context::use_site_config;
use crate::relay::FetchRelay;

const SUBMIT_LABEL: &str = "Send Message";

#[derive(Clone, Copy)]
struct FormSignals {
    fields: Signal<ContactFields>,
    errors: Signal<ValidationReport>,
    button: Signal<SubmitButton>,
    message: Signal<Option<FormMessage>>,
    hide_timer: Signal<Option<Timeout>>,
}

impl ContactView for FormSignals {
    fn fields(&self) -> ContactFields {
        self.fields.read().clone()
    }

    fn show_errors(&mut self, report: &ValidationReport) {
        self.errors.set(report.clone());
    }

    fn submit_button(&self) -> SubmitButton {
        self.button.read().clone()
    }

    fn set_submit_button(&mut self, button: SubmitButton) {
        self.button.set(button);
    }

    fn show_message(&mut self, message: FormMessage) {
        // a fresh message must not be hidden by an older timer
        self.hide_timer.set(None);
        self.message.set(Some(message));
    }

    fn reset_fields(&mut self) {
        self.fields.write().reset();
    }

    fn hide_message_after(&mut self, after: Duration) {
        let mut message = self.message;
        let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
        self.hide_timer
            .set(Some(Timeout::new(millis, move || message.set(None))));
    }
}

/// Contact form: name, email, subject and message, validated on blur and
/// on submit, delivered through the configured relay.
#[component]
pub fn ContactForm() -> Element {
    let config = use_site_config();

    let hidden = config.relay.hidden_fields();
    let view = FormSignals {
        fields: use_signal(move || ContactFields::with_hidden(hidden)),
        errors: use_signal(ValidationReport::default),
        button: use_signal(|| SubmitButton::idle(SUBMIT_LABEL)),
        message: use_signal(|| None),
        hide_timer: use_signal(|| None),
    };

    let flow = use_hook(|| {
        Rc::new(ContactFlow::new(
            FetchRelay::new(config.relay.endpoint.clone()),
            config.contact_email.clone(),
            config.message_lifetime(),
        ))
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let flow = flow.clone();
        spawn(async move {
            let mut view = view;
            let attempt = flow.submit(&mut view).await;
            tracing::debug!(?attempt, "Contact form submit finished");
        });
    };

    let hidden = view.fields.read().hidden().clone();
    let button = view.button.read().clone();
    let message = view.message.read().clone();

    rsx! {
        form { id: "contactForm", class: "contact-form", novalidate: true, onsubmit,
            for (name, value) in hidden {
                HiddenInput { key: "{name}", name, value }
            }

            {field_input(view, Field::Name, "text")}
            {field_input(view, Field::Email, "email")}
            {field_input(view, Field::Subject, "text")}
            {field_input(view, Field::Message, "textarea")}

            Button {
                variant: ButtonVariant::Primary,
                button_type: "submit".to_string(),
                disabled: button.disabled,
                "{button.label}"
            }

            FormMessageBanner { message }
        }
    }
}

/// One labeled field with its inline error slot.
///
/// `input_type` is the `<input>` type, or `"textarea"` for the message body.
fn field_input(mut view: FormSignals, field: Field, input_type: &'static str) -> Element {
    let value = view.fields.read().value(field).to_string();
    let error = view.errors.read().message(field);
    let id = field.name().to_string();
    let error_id = field.error_slot().to_string();
    let label = field.label().to_string();
    // fields stay locked for as long as the submit button is
    let locked = view.button.read().disabled;

    if input_type == "textarea" {
        return rsx! {
            TextArea {
                id,
                error_id,
                label,
                rows: 6,
                value,
                error,
                disabled: locked,
                oninput: move |value: String| view.fields.write().set(field, value),
                onblur: move |_| {
                    revalidate(&mut view);
                },
            }
        };
    }

    rsx! {
        Input {
            id,
            error_id,
            label,
            input_type: input_type.to_string(),
            value,
            error,
            disabled: locked,
            oninput: move |value: String| view.fields.write().set(field, value),
            onblur: move |_| {
                revalidate(&mut view);
            },
        }
    }
}
