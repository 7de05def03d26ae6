//! End-to-end tests of the contact form submission flow
//!
//! Drives `ContactFlow` with a scripted relay and a view that records every
//! call the flow makes, so the tests can assert the full sequence of UI
//! updates for each outcome.

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use portfolio_core::contact::{
    revalidate, ContactFields, ContactFlow, ContactView, Field, FieldError, FormMessage,
    FormRelay, MessageKind, RelayError, RelayReply, SubmissionPayload, SubmitAttempt,
    SubmitButton, ValidationReport, SENDING_LABEL,
};
use pretty_assertions::assert_eq;
use tokio::sync::Notify;

const FALLBACK: &str = "owner@example.com";
const LABEL: &str = "Send Message";

// ============================================================================
// Test doubles
// ============================================================================

/// Relay answering from a queue of scripted replies
#[derive(Default)]
struct ScriptedRelay {
    replies: RefCell<VecDeque<Result<RelayReply, RelayError>>>,
    seen: RefCell<Vec<SubmissionPayload>>,
    gate: Option<Arc<Notify>>,
}

impl ScriptedRelay {
    fn replying(reply: Result<RelayReply, RelayError>) -> Self {
        Self {
            replies: RefCell::new(VecDeque::from([reply])),
            ..Self::default()
        }
    }

    fn calls(&self) -> usize {
        self.seen.borrow().len()
    }
}

impl FormRelay for ScriptedRelay {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<RelayReply, RelayError> {
        self.seen.borrow_mut().push(payload.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(RelayError::Network("no reply scripted".to_string())))
    }
}

/// View recording every update the flow pushes
struct RecordingView {
    fields: ContactFields,
    errors: ValidationReport,
    button: SubmitButton,
    button_history: Vec<SubmitButton>,
    message: Option<FormMessage>,
    hide_after: Option<Duration>,
    resets: usize,
}

impl RecordingView {
    fn new(fields: ContactFields) -> Self {
        Self {
            fields,
            errors: ValidationReport::default(),
            button: SubmitButton::idle(LABEL),
            button_history: Vec::new(),
            message: None,
            hide_after: None,
            resets: 0,
        }
    }

    fn restorations(&self) -> usize {
        self.button_history
            .iter()
            .filter(|b| !b.disabled && b.label == LABEL)
            .count()
    }
}

impl ContactView for RecordingView {
    fn fields(&self) -> ContactFields {
        self.fields.clone()
    }

    fn show_errors(&mut self, report: &ValidationReport) {
        self.errors = report.clone();
    }

    fn submit_button(&self) -> SubmitButton {
        self.button.clone()
    }

    fn set_submit_button(&mut self, button: SubmitButton) {
        self.button_history.push(button.clone());
        self.button = button;
    }

    fn show_message(&mut self, message: FormMessage) {
        self.message = Some(message);
    }

    fn reset_fields(&mut self) {
        self.resets += 1;
        self.fields.reset();
    }

    fn hide_message_after(&mut self, after: Duration) {
        self.hide_after = Some(after);
    }
}

fn valid_fields() -> ContactFields {
    let hidden = BTreeMap::from([("access_key".to_string(), "test-key".to_string())]);
    let mut fields = ContactFields::with_hidden(hidden);
    fields.set(Field::Name, "Grace Hopper");
    fields.set(Field::Email, "grace@example.com");
    fields.set(Field::Subject, "Collaboration");
    fields.set(Field::Message, "Would love to work together on a compiler.");
    fields
}

fn ok_reply() -> Result<RelayReply, RelayError> {
    Ok(RelayReply {
        success: true,
        message: Some("Email sent successfully!".to_string()),
    })
}

fn flow(relay: ScriptedRelay) -> ContactFlow<ScriptedRelay> {
    ContactFlow::new(relay, FALLBACK, Duration::from_millis(7000))
}

// ============================================================================
// Outcomes
// ============================================================================

#[tokio::test]
async fn successful_submission_clears_form_and_restores_button() {
    let _ = tracing_subscriber::fmt::try_init();

    let flow = flow(ScriptedRelay::replying(ok_reply()));
    let mut view = RecordingView::new(valid_fields());

    let attempt = flow.submit(&mut view).await;

    assert!(matches!(attempt, SubmitAttempt::Sent));
    assert_eq!(view.fields.name, "");
    assert_eq!(view.fields.message, "");
    assert_eq!(view.fields.hidden().get("access_key").map(String::as_str), Some("test-key"));
    assert_eq!(view.resets, 1);
    assert_eq!(
        view.message,
        Some(FormMessage::sent("Grace Hopper", "grace@example.com"))
    );
    assert_eq!(view.hide_after, Some(Duration::from_secs(7)));
    assert_eq!(
        view.button_history,
        vec![SubmitButton::sending(), SubmitButton::idle(LABEL)]
    );
    assert_eq!(view.restorations(), 1);
    assert!(!flow.is_in_flight());
}

#[tokio::test]
async fn payload_carries_every_field_once() {
    let flow = flow(ScriptedRelay::replying(ok_reply()));
    let mut view = RecordingView::new(valid_fields());

    flow.submit(&mut view).await;

    let seen = flow.relay().seen.borrow();
    assert_eq!(seen.len(), 1);
    let keys: Vec<_> = seen[0].keys().collect();
    assert_eq!(keys, vec!["access_key", "email", "message", "name", "subject"]);
    assert_eq!(seen[0].get("name"), Some("Grace Hopper"));
}

#[tokio::test]
async fn rejected_reply_keeps_fields_and_shows_fallback() {
    let flow = flow(ScriptedRelay::replying(Ok(RelayReply {
        success: false,
        message: Some("Invalid access key".to_string()),
    })));
    let mut view = RecordingView::new(valid_fields());

    let attempt = flow.submit(&mut view).await;

    assert!(matches!(attempt, SubmitAttempt::Failed(RelayError::Rejected(_))));
    assert_eq!(view.fields, valid_fields());
    assert_eq!(view.resets, 0);
    assert_eq!(view.hide_after, None);
    let message = view.message.clone().expect("error message shown");
    assert_eq!(message.kind, MessageKind::Error);
    assert!(message.text.contains(FALLBACK));
    assert_eq!(view.restorations(), 1);
    assert_eq!(view.button, SubmitButton::idle(LABEL));
}

#[tokio::test]
async fn network_failure_takes_the_same_path() {
    let flow = flow(ScriptedRelay::replying(Err(RelayError::Network(
        "connection refused".to_string(),
    ))));
    let mut view = RecordingView::new(valid_fields());

    let attempt = flow.submit(&mut view).await;

    assert!(matches!(attempt, SubmitAttempt::Failed(RelayError::Network(_))));
    assert_eq!(view.message, Some(FormMessage::failed(FALLBACK)));
    assert_eq!(view.fields, valid_fields());
    assert_eq!(view.restorations(), 1);
}

#[tokio::test]
async fn malformed_reply_takes_the_same_path() {
    let decode = portfolio_core::contact::parse_reply("not json").unwrap_err();
    let flow = flow(ScriptedRelay::replying(Err(decode)));
    let mut view = RecordingView::new(valid_fields());

    let attempt = flow.submit(&mut view).await;

    assert!(matches!(attempt, SubmitAttempt::Failed(RelayError::Decode(_))));
    assert_eq!(view.message, Some(FormMessage::failed(FALLBACK)));
    assert_eq!(view.restorations(), 1);
}

// ============================================================================
// Validation gate
// ============================================================================

#[tokio::test]
async fn invalid_form_never_reaches_the_relay() {
    let flow = flow(ScriptedRelay::replying(ok_reply()));
    let mut fields = valid_fields();
    fields.set(Field::Name, "");
    fields.set(Field::Subject, "Hi");
    let mut view = RecordingView::new(fields);

    let attempt = flow.submit(&mut view).await;

    let SubmitAttempt::Invalid(report) = attempt else {
        panic!("expected validation failure, got {attempt:?}");
    };
    assert_eq!(report.error(Field::Name), Some(FieldError::NameRequired));
    assert_eq!(report.error(Field::Subject), Some(FieldError::SubjectTooShort));
    assert_eq!(view.errors.message(Field::Name), "Name is required");
    assert_eq!(view.errors.message(Field::Subject), "Subject must be at least 3 characters");
    assert_eq!(view.errors.message(Field::Email), "");
    assert_eq!(flow.relay().calls(), 0);
    assert!(view.button_history.is_empty());
    assert_eq!(view.message, None);
}

#[tokio::test]
async fn passing_submission_clears_stale_errors() {
    let flow = flow(ScriptedRelay::replying(ok_reply()));
    let mut view = RecordingView::new(ContactFields::new());
    assert!(!revalidate(&mut view));
    assert_eq!(view.errors.error_count(), 4);

    view.fields = valid_fields();
    flow.submit(&mut view).await;

    assert!(view.errors.is_valid());
}

#[test]
fn revalidate_shows_errors_without_submitting() {
    let mut fields = valid_fields();
    fields.set(Field::Email, "not-an-email");
    let mut view = RecordingView::new(fields);

    assert!(!revalidate(&mut view));
    assert_eq!(view.errors.message(Field::Email), "Please enter a valid email");
    assert!(view.button_history.is_empty());
}

// ============================================================================
// In-flight slot
// ============================================================================

#[tokio::test]
async fn second_submit_while_in_flight_is_busy() {
    let gate = Arc::new(Notify::new());
    let relay = ScriptedRelay {
        gate: Some(gate.clone()),
        ..ScriptedRelay::replying(ok_reply())
    };
    let flow = flow(relay);
    let mut first_view = RecordingView::new(valid_fields());
    let mut second_view = RecordingView::new(valid_fields());

    let first = flow.submit(&mut first_view);
    let second = async {
        tokio::task::yield_now().await;
        assert!(flow.is_in_flight());
        let attempt = flow.submit(&mut second_view).await;
        gate.notify_one();
        attempt
    };
    let (first, second) = tokio::join!(first, second);

    assert!(matches!(first, SubmitAttempt::Sent));
    assert!(matches!(second, SubmitAttempt::Busy));
    assert_eq!(flow.relay().calls(), 1);
    assert!(second_view.button_history.is_empty());
    assert_eq!(first_view.restorations(), 1);
    assert!(!flow.is_in_flight());
}

#[tokio::test]
async fn slot_is_released_after_failure() {
    let relay = ScriptedRelay {
        replies: RefCell::new(VecDeque::from([
            Err(RelayError::Network("offline".to_string())),
            ok_reply(),
        ])),
        ..ScriptedRelay::default()
    };
    let flow = flow(relay);
    let mut view = RecordingView::new(valid_fields());

    assert!(matches!(flow.submit(&mut view).await, SubmitAttempt::Failed(_)));
    assert!(matches!(flow.submit(&mut view).await, SubmitAttempt::Sent));
    assert_eq!(view.restorations(), 2);
    assert_eq!(view.button_history.first().map(|b| b.label.as_str()), Some(SENDING_LABEL));
}

#[tokio::test]
async fn controls_are_locked_exactly_for_the_relay_call() {
    let flow = flow(ScriptedRelay::replying(Err(RelayError::Network(
        "timeout".to_string(),
    ))));
    let mut view = RecordingView::new(valid_fields());

    flow.submit(&mut view).await;

    // the page locks the fields alongside the button, so this sequence is
    // also the fields' lock state
    assert_eq!(
        view.button_history,
        vec![SubmitButton::sending(), SubmitButton::idle(LABEL)]
    );
    assert!(view.button_history[0].disabled);
}
