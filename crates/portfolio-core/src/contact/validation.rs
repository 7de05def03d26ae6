//! Field-level validation rules for the contact form.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use super::ContactFields;

/// A visible, validated field of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// All validated fields, in form order
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Form field name, also the input element id and payload key
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    /// Id of the inline error slot under the input
    pub fn error_slot(&self) -> &'static str {
        match self {
            Field::Name => "nameError",
            Field::Email => "emailError",
            Field::Subject => "subjectError",
            Field::Message => "messageError",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    /// Minimum trimmed length in characters; email uses a pattern instead
    pub fn min_len(&self) -> Option<usize> {
        match self {
            Field::Name => Some(2),
            Field::Email => None,
            Field::Subject => Some(3),
            Field::Message => Some(10),
        }
    }

    fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Subject => 2,
            Field::Message => 3,
        }
    }
}

/// Validation failure for a single field.
///
/// The `Display` text is shown to the visitor verbatim.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email")]
    EmailInvalid,
    #[error("Subject is required")]
    SubjectRequired,
    #[error("Subject must be at least 3 characters")]
    SubjectTooShort,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

impl FieldError {
    fn required(field: Field) -> Self {
        match field {
            Field::Name => FieldError::NameRequired,
            Field::Email => FieldError::EmailRequired,
            Field::Subject => FieldError::SubjectRequired,
            Field::Message => FieldError::MessageRequired,
        }
    }

    fn malformed(field: Field) -> Self {
        match field {
            Field::Name => FieldError::NameTooShort,
            Field::Email => FieldError::EmailInvalid,
            Field::Subject => FieldError::SubjectTooShort,
            Field::Message => FieldError::MessageTooShort,
        }
    }

    /// Field this error belongs to
    pub fn field(&self) -> Field {
        match self {
            FieldError::NameRequired | FieldError::NameTooShort => Field::Name,
            FieldError::EmailRequired | FieldError::EmailInvalid => Field::Email,
            FieldError::SubjectRequired | FieldError::SubjectTooShort => Field::Subject,
            FieldError::MessageRequired | FieldError::MessageTooShort => Field::Message,
        }
    }
}

/// Browser whitespace: Unicode `White_Space` minus U+0085, plus U+FEFF.
///
/// Used for trimming and in the email pattern so both agree with what a
/// form field's value looks like to the page.
fn is_form_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Regex class body matching exactly [`is_form_whitespace`]
const FORM_WHITESPACE_CLASS: &str = r"\t\n\x0B\x0C\r\p{Zs}\x{2028}\x{2029}\x{FEFF}";

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let part = format!("[^{FORM_WHITESPACE_CLASS}@]+");
        Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern compiles")
    })
}

/// Field length in UTF-16 code units, the unit the page measures in.
fn form_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// True when `value` looks like `local@domain.tld`.
pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

/// Validate one raw field value. Surrounding whitespace is ignored.
pub fn validate_field(field: Field, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim_matches(is_form_whitespace);
    if value.is_empty() {
        return Err(FieldError::required(field));
    }

    let ok = match field.min_len() {
        Some(min) => form_len(value) >= min,
        None => is_valid_email(value),
    };

    if ok {
        Ok(())
    } else {
        Err(FieldError::malformed(field))
    }
}

/// Outcome of one validation pass over every field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: [Option<FieldError>; 4],
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.iter().all(Option::is_none)
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors[field.index()]
    }

    /// Text for the field's error slot; empty when the field passed.
    pub fn message(&self, field: Field) -> String {
        self.error(field).map(|e| e.to_string()).unwrap_or_default()
    }

    pub fn error_count(&self) -> usize {
        self.errors.iter().flatten().count()
    }

    /// Failing fields, in form order
    pub fn failures(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.error(field).map(|err| (field, err)))
    }
}

/// Validate every field. Never short-circuits, so all errors surface at once.
pub fn validate(fields: &ContactFields) -> ValidationReport {
    let mut report = ValidationReport::default();
    for field in Field::ALL {
        report.errors[field.index()] = validate_field(field, fields.value(field)).err();
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rules() {
        assert_eq!(validate_field(Field::Name, ""), Err(FieldError::NameRequired));
        assert_eq!(validate_field(Field::Name, "   "), Err(FieldError::NameRequired));
        assert_eq!(validate_field(Field::Name, " A "), Err(FieldError::NameTooShort));
        assert_eq!(validate_field(Field::Name, "Al"), Ok(()));
    }

    #[test]
    fn email_rules() {
        assert_eq!(validate_field(Field::Email, ""), Err(FieldError::EmailRequired));
        assert_eq!(validate_field(Field::Email, "someone"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_field(Field::Email, "a@b"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_field(Field::Email, "a b@c.d"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_field(Field::Email, "a@@b.c"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_field(Field::Email, "  a@b.co  "), Ok(()));
        assert_eq!(validate_field(Field::Email, "first.last@sub.example.org"), Ok(()));
    }

    #[test]
    fn subject_and_message_lengths() {
        assert_eq!(validate_field(Field::Subject, "Hi"), Err(FieldError::SubjectTooShort));
        assert_eq!(validate_field(Field::Subject, "Hey"), Ok(()));
        assert_eq!(
            validate_field(Field::Message, "too short"),
            Err(FieldError::MessageTooShort)
        );
        assert_eq!(validate_field(Field::Message, "long enough"), Ok(()));
    }

    #[test]
    fn length_counts_utf16_units() {
        // one scalar, two UTF-16 units
        assert_eq!(validate_field(Field::Name, "\u{1F600}"), Ok(()));
        // one scalar, one unit, two bytes
        assert_eq!(validate_field(Field::Name, "é"), Err(FieldError::NameTooShort));
        assert_eq!(validate_field(Field::Subject, "a\u{1F600}"), Ok(()));
    }

    #[test]
    fn byte_order_mark_is_whitespace() {
        assert_eq!(validate_field(Field::Name, "\u{FEFF}"), Err(FieldError::NameRequired));
        assert_eq!(validate_field(Field::Name, "\u{FEFF}A\u{FEFF}"), Err(FieldError::NameTooShort));
        assert_eq!(validate_field(Field::Email, "a\u{FEFF}b@c.de"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_field(Field::Email, "\u{FEFF}ab@c.de\u{FEFF}"), Ok(()));
    }

    #[test]
    fn next_line_is_not_whitespace() {
        // U+0085 is Unicode whitespace but not browser whitespace
        assert_eq!(validate_field(Field::Name, "\u{85}"), Err(FieldError::NameTooShort));
        assert!(is_valid_email("a\u{85}b@c.de"));
        assert_eq!(validate_field(Field::Name, "\u{A0}\u{3000}"), Err(FieldError::NameRequired));
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(FieldError::EmailInvalid.to_string(), "Please enter a valid email");
        assert_eq!(
            FieldError::MessageTooShort.to_string(),
            "Message must be at least 10 characters"
        );
    }

    #[test]
    fn error_maps_back_to_field() {
        for field in Field::ALL {
            assert_eq!(FieldError::required(field).field(), field);
            assert_eq!(FieldError::malformed(field).field(), field);
        }
    }

    #[test]
    fn field_ids() {
        assert_eq!(Field::Email.name(), "email");
        assert_eq!(Field::Message.error_slot(), "messageError");
    }
}
