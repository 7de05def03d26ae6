//! Contact form: validation, payload and the submission flow.
//!
//! ```ignore
//! use portfolio_core::contact::{ContactFlow, SubmitAttempt};
//!
//! let flow = ContactFlow::new(relay, config.contact_email.clone(), config.message_lifetime());
//! match flow.submit(&mut view).await {
//!     SubmitAttempt::Sent => {}
//!     SubmitAttempt::Invalid(report) => tracing::debug!("{} errors", report.error_count()),
//!     SubmitAttempt::Busy | SubmitAttempt::Failed(_) => {}
//! }
//! ```

mod fields;
mod flow;
mod relay;
mod validation;

pub use fields::{ContactFields, SubmissionPayload};
pub use flow::{
    revalidate, ContactFlow, ContactView, FormMessage, MessageKind, SubmitAttempt, SubmitButton,
    SENDING_LABEL,
};
pub use relay::{is_truthy, parse_reply, FormRelay, RelayError, RelayReply};
pub use validation::{is_valid_email, validate, validate_field, Field, FieldError, ValidationReport};
