//! Form values and the JSON payload built from them.

use std::collections::BTreeMap;

use serde::Serialize;

use super::Field;

/// Current values of the contact form.
///
/// Hidden inputs (relay access key and similar) are kept apart from the
/// visible fields so a reset clears what the visitor typed but leaves them
/// in place, the same way a form reset restores hidden inputs to their
/// markup values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    hidden: BTreeMap<String, String>,
}

impl ContactFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty form carrying the given hidden inputs
    pub fn with_hidden(hidden: BTreeMap<String, String>) -> Self {
        Self {
            hidden,
            ..Self::default()
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn hidden(&self) -> &BTreeMap<String, String> {
        &self.hidden
    }

    /// Clear the visible fields.
    pub fn reset(&mut self) {
        for field in Field::ALL {
            self.set(field, String::new());
        }
    }

    /// Snapshot every field, hidden ones included, as the relay payload.
    ///
    /// Values are sent as typed, untrimmed. A hidden input sharing a name
    /// with a visible field is shadowed by the visible value.
    pub fn payload(&self) -> SubmissionPayload {
        let mut entries = self.hidden.clone();
        for field in Field::ALL {
            entries.insert(field.name().to_string(), self.value(field).to_string());
        }
        SubmissionPayload(entries)
    }
}

/// Flat `field name -> value` object posted to the relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubmissionPayload(BTreeMap<String, String>);

impl SubmissionPayload {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn hidden() -> BTreeMap<String, String> {
        BTreeMap::from([("access_key".to_string(), "k-1".to_string())])
    }

    #[test]
    fn payload_contains_visible_and_hidden_fields() {
        let mut fields = ContactFields::with_hidden(hidden());
        fields.set(Field::Name, "Ada");
        fields.set(Field::Email, "ada@example.com");
        fields.set(Field::Subject, "Hello");
        fields.set(Field::Message, "  I would like to talk  ");

        let payload = fields.payload();
        let value: serde_json::Value =
            serde_json::from_str(&payload.to_json().unwrap()).unwrap();

        assert_eq!(
            value,
            json!({
                "access_key": "k-1",
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Hello",
                "message": "  I would like to talk  ",
            })
        );
    }

    #[test]
    fn reset_keeps_hidden_inputs() {
        let mut fields = ContactFields::with_hidden(hidden());
        fields.set(Field::Name, "Ada");
        fields.reset();

        assert_eq!(fields.name, "");
        assert_eq!(fields.hidden(), &hidden());
    }

    #[test]
    fn visible_field_shadows_hidden_input_of_same_name() {
        let mut hidden = hidden();
        hidden.insert("subject".to_string(), "from hidden".to_string());
        let mut fields = ContactFields::with_hidden(hidden);
        fields.set(Field::Subject, "typed");

        assert_eq!(fields.payload().get("subject"), Some("typed"));
        assert_eq!(fields.payload().len(), 5);
    }
}
