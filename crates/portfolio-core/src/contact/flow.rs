//! Submit-time orchestration for the contact form.
//!
//! ```text
//! idle -> validating -> invalid                       -> idle
//!                    -> valid -> sending -> sent     -> idle
//!                                        -> failed   -> idle
//! ```
//!
//! The flow never touches the page directly. It drives a [`ContactView`],
//! which the page implements over its reactive state and tests implement
//! over plain structs.

use std::cell::Cell;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use super::{validate, ContactFields, FormRelay, RelayError, SubmissionPayload, ValidationReport};

/// Label shown on the submit button while a request is in flight
pub const SENDING_LABEL: &str = "Sending...";

/// Label and enabled state of the submit control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
}

impl SubmitButton {
    pub fn idle(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
        }
    }

    pub fn sending() -> Self {
        Self {
            label: SENDING_LABEL.to_string(),
            disabled: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// CSS classes of the form-wide message slot
    pub fn class(&self) -> &'static str {
        match self {
            MessageKind::Success => "form-message success",
            MessageKind::Error => "form-message error",
        }
    }
}

/// Form-wide feedback shown after a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl FormMessage {
    pub fn sent(name: &str, email: &str) -> Self {
        Self {
            kind: MessageKind::Success,
            text: format!(
                "Thank you, {name}! Your message has been sent successfully. \
                 I will get back to you soon at {email}."
            ),
        }
    }

    pub fn failed(contact_email: &str) -> Self {
        Self {
            kind: MessageKind::Error,
            text: format!(
                "Sorry, there was an error sending your message. \
                 Please try again or contact me directly at {contact_email}"
            ),
        }
    }
}

/// What happened to one submit attempt
#[derive(Debug)]
pub enum SubmitAttempt {
    /// At least one field failed; errors are on display, nothing was sent
    Invalid(ValidationReport),
    /// Another submission from the same form is still in flight
    Busy,
    /// Relay confirmed delivery
    Sent,
    /// Relay refused or could not be reached
    Failed(RelayError),
}

/// Page-side surface the flow reads from and writes to
pub trait ContactView {
    /// Current form values
    fn fields(&self) -> ContactFields;
    /// Replace every inline error slot with the report's messages
    fn show_errors(&mut self, report: &ValidationReport);
    fn submit_button(&self) -> SubmitButton;
    fn set_submit_button(&mut self, button: SubmitButton);
    fn show_message(&mut self, message: FormMessage);
    /// Clear the visible fields after a successful send
    fn reset_fields(&mut self);
    /// Hide the form-wide message once `after` has elapsed
    fn hide_message_after(&mut self, after: Duration);
}

/// Validate the form and display the result without submitting.
///
/// Used for live feedback when a field loses focus.
pub fn revalidate<V: ContactView>(view: &mut V) -> bool {
    let report = validate(&view.fields());
    view.show_errors(&report);
    report.is_valid()
}

/// Claim on the single in-flight slot; released on drop
struct InFlight<'a>(&'a Cell<bool>);

impl<'a> InFlight<'a> {
    fn claim(slot: &'a Cell<bool>) -> Option<Self> {
        if slot.replace(true) {
            None
        } else {
            Some(Self(slot))
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Contact form submission orchestrator
pub struct ContactFlow<R> {
    relay: R,
    contact_email: String,
    message_lifetime: Duration,
    in_flight: Cell<bool>,
}

impl<R: FormRelay> ContactFlow<R> {
    pub fn new(relay: R, contact_email: impl Into<String>, message_lifetime: Duration) -> Self {
        Self {
            relay,
            contact_email: contact_email.into(),
            message_lifetime,
            in_flight: Cell::new(false),
        }
    }

    pub fn relay(&self) -> &R {
        &self.relay
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Run one submit attempt against `view`.
    ///
    /// The submit button is restored to its original label and re-enabled
    /// exactly once for every attempt that got past validation, whatever the
    /// relay answered.
    pub async fn submit<V: ContactView>(&self, view: &mut V) -> SubmitAttempt {
        let Some(_slot) = InFlight::claim(&self.in_flight) else {
            warn!("Contact form submission already in flight, ignoring");
            return SubmitAttempt::Busy;
        };

        let fields = view.fields();
        let report = validate(&fields);
        view.show_errors(&report);
        if !report.is_valid() {
            debug!(errors = report.error_count(), "Contact form failed validation");
            return SubmitAttempt::Invalid(report);
        }

        let original = view.submit_button();
        view.set_submit_button(SubmitButton::sending());

        let payload = fields.payload();
        let attempt = match self.deliver(&payload).await {
            Ok(()) => {
                info!(fields = payload.len(), "Contact form delivered");
                view.show_message(FormMessage::sent(&fields.name, &fields.email));
                view.reset_fields();
                view.hide_message_after(self.message_lifetime);
                SubmitAttempt::Sent
            }
            Err(err) => {
                error!(error = %err, "Form submission error");
                view.show_message(FormMessage::failed(&self.contact_email));
                SubmitAttempt::Failed(err)
            }
        };

        view.set_submit_button(SubmitButton::idle(original.label));
        attempt
    }

    async fn deliver(&self, payload: &SubmissionPayload) -> Result<(), RelayError> {
        self.relay.submit(payload).await?.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_message_interpolates_name_and_email() {
        let msg = FormMessage::sent("Ada", "ada@example.com");
        assert_eq!(msg.kind, MessageKind::Success);
        assert_eq!(
            msg.text,
            "Thank you, Ada! Your message has been sent successfully. \
             I will get back to you soon at ada@example.com."
        );
    }

    #[test]
    fn failure_message_names_fallback_address() {
        let msg = FormMessage::failed("me@example.com");
        assert_eq!(msg.kind.class(), "form-message error");
        assert!(msg.text.ends_with("contact me directly at me@example.com"));
    }

    #[test]
    fn in_flight_slot_is_single() {
        let slot = Cell::new(false);
        let first = InFlight::claim(&slot);
        assert!(first.is_some());
        assert!(InFlight::claim(&slot).is_none());
        drop(first);
        assert!(!slot.get());
        assert!(InFlight::claim(&slot).is_some());
    }

    #[test]
    fn sending_button_is_disabled() {
        let button = SubmitButton::sending();
        assert!(button.disabled);
        assert_eq!(button.label, SENDING_LABEL);
        assert!(!SubmitButton::idle("Send Message").disabled);
    }
}
