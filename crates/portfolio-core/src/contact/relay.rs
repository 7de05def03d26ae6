//! Contract with the remote form relay.
//!
//! The relay accepts a JSON object of form fields and answers with a JSON
//! object carrying a loosely typed `success` flag and an optional
//! human-readable `message`. Transport is left to the implementor of
//! [`FormRelay`]; this module only fixes the request/response shape.

use serde_json::Value;
use thiserror::Error;

use super::SubmissionPayload;

/// Why a submission did not go through
#[derive(Error, Debug)]
pub enum RelayError {
    /// Request could not be sent or the response body could not be read
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not JSON
    #[error("Malformed relay reply: {0}")]
    Decode(#[from] serde_json::Error),

    /// Relay answered but did not report success
    #[error("Form submission failed: {0}")]
    Rejected(String),
}

/// Parsed relay response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayReply {
    pub success: bool,
    pub message: Option<String>,
}

impl RelayReply {
    /// Turn a non-success reply into [`RelayError::Rejected`].
    pub fn into_result(self) -> Result<(), RelayError> {
        if self.success {
            Ok(())
        } else {
            Err(RelayError::Rejected(
                self.message.unwrap_or_else(|| "no reason given".to_string()),
            ))
        }
    }
}

/// Parse a relay response body.
///
/// Anything that is valid JSON parses; a missing or falsy `success` simply
/// yields an unsuccessful reply.
pub fn parse_reply(body: &str) -> Result<RelayReply, RelayError> {
    let value: Value = serde_json::from_str(body)?;
    Ok(RelayReply {
        success: value.get("success").is_some_and(is_truthy),
        message: value
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned),
    })
}

/// Loose truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Transport that delivers a payload to the relay.
///
/// The browser build posts with `fetch`; tests script replies directly.
#[allow(async_fn_in_trait)]
pub trait FormRelay {
    /// POST `payload` as JSON and return the parsed reply.
    async fn submit(&self, payload: &SubmissionPayload) -> Result<RelayReply, RelayError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_success_reply() {
        let reply = parse_reply(r#"{"success": true, "message": "Email sent successfully!"}"#)
            .unwrap();
        assert!(reply.success);
        assert_eq!(reply.message.as_deref(), Some("Email sent successfully!"));
        assert!(reply.into_result().is_ok());
    }

    #[test]
    fn failure_reply_becomes_rejection() {
        let reply = parse_reply(r#"{"success": false, "message": "Invalid access key"}"#).unwrap();
        let err = reply.into_result().unwrap_err();
        assert!(matches!(err, RelayError::Rejected(ref m) if m == "Invalid access key"));
    }

    #[test]
    fn missing_success_is_failure() {
        let reply = parse_reply(r#"{"message": 12}"#).unwrap();
        assert!(!reply.success);
        assert_eq!(reply.message, None);
        assert!(!parse_reply("[]").unwrap().success);
    }

    #[test]
    fn non_json_body_is_decode_error() {
        let err = parse_reply("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, RelayError::Decode(_)));
    }

    #[test]
    fn truthiness() {
        for truthy in [json!(true), json!(1), json!(-0.5), json!("true"), json!("false"), json!([]), json!({})] {
            assert!(is_truthy(&truthy), "{truthy} should be truthy");
        }
        for falsy in [json!(false), json!(0), json!(0.0), json!(""), json!(null)] {
            assert!(!is_truthy(&falsy), "{falsy} should be falsy");
        }
    }
}
