//! Structural validation of inbound notification requests.
//!
//! Each field has its own predicate; [`validate_request`] runs all of them and
//! reports every failing field in one [`ValidationError`]. Nothing here logs or
//! touches shared state.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::types::{NotificationRequest, NotificationType};

/// Fixed catalog of messages returned to API callers
pub mod messages {
    pub const BODY_NOT_OBJECT: &str = "Request body must be a JSON object";
    pub const TYPE_REQUIRED: &str = "Notification type is required";
    pub const TYPE_INVALID: &str = "Notification type must be either 'email' or 'sms'";
    pub const RECIPIENT_REQUIRED: &str = "Recipient is required";
    pub const RECIPIENT_NOT_STRING: &str = "Recipient must be a string";
    pub const RECIPIENT_INVALID: &str = "Invalid email or phone number format";
    pub const MESSAGE_REQUIRED: &str = "Message is required";
    pub const MESSAGE_NOT_STRING: &str = "Message must be a string";
    pub const MESSAGE_EMPTY: &str = "Message cannot be empty";
    pub const SUBJECT_NOT_STRING: &str = "Subject must be a string";
}

/// Field name used when the payload as a whole is rejected
pub const BODY_FIELD: &str = "body";

lazy_static! {
    // ECMAScript whitespace: U+FEFF counts, U+0085 does not
    static ref EMAIL_PATTERN: Regex = {
        let part = r"[^@\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+";
        Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern is valid")
    };

    // ASCII digits only; `\d` would admit other Unicode digits
    static ref PHONE_PATTERN: Regex =
        Regex::new(r"^\+?[1-9][0-9]{1,14}$").expect("phone pattern is valid");
}

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldIssue {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// One or more field-level violations of a notification request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_messages(.issues))]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

fn join_messages(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.message)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    fn new(issues: Vec<FieldIssue>) -> Self {
        debug_assert!(!issues.is_empty());
        Self { issues }
    }

    /// All violations, in field order (type, recipient, message, subject)
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Message reported for `field`, if that field failed
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.issues
            .iter()
            .find(|issue| issue.field == field)
            .map(|issue| issue.message)
    }
}

/// Which grammar a recipient satisfied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientKind {
    Email,
    Phone,
}

/// Classify a recipient by dispatching on the presence of `@`.
///
/// Values containing `@` are only ever checked against the email grammar, so a
/// malformed address is never reconsidered as a phone number.
pub fn classify_recipient(value: &str) -> Option<RecipientKind> {
    if value.contains('@') {
        EMAIL_PATTERN
            .is_match(value)
            .then_some(RecipientKind::Email)
    } else {
        PHONE_PATTERN
            .is_match(value)
            .then_some(RecipientKind::Phone)
    }
}

pub fn is_valid_recipient(value: &str) -> bool {
    classify_recipient(value).is_some()
}

/// `type`: required, exactly `email` or `sms`
pub fn validate_type(value: Option<&Value>) -> Result<NotificationType, FieldIssue> {
    let value = value.ok_or(FieldIssue::new("type", messages::TYPE_REQUIRED))?;

    value
        .as_str()
        .and_then(NotificationType::from_wire)
        .ok_or(FieldIssue::new("type", messages::TYPE_INVALID))
}

/// `recipient`: required string that is a plausible email address or phone number
pub fn validate_recipient(value: Option<&Value>) -> Result<String, FieldIssue> {
    let value = value.ok_or(FieldIssue::new("recipient", messages::RECIPIENT_REQUIRED))?;
    let recipient = value
        .as_str()
        .ok_or(FieldIssue::new("recipient", messages::RECIPIENT_NOT_STRING))?;

    if !is_valid_recipient(recipient) {
        return Err(FieldIssue::new("recipient", messages::RECIPIENT_INVALID));
    }

    Ok(recipient.to_string())
}

/// `message`: required non-empty string
pub fn validate_message(value: Option<&Value>) -> Result<String, FieldIssue> {
    let value = value.ok_or(FieldIssue::new("message", messages::MESSAGE_REQUIRED))?;
    let message = value
        .as_str()
        .ok_or(FieldIssue::new("message", messages::MESSAGE_NOT_STRING))?;

    if message.is_empty() {
        return Err(FieldIssue::new("message", messages::MESSAGE_EMPTY));
    }

    Ok(message.to_string())
}

/// `subject`: optional, but a string when present (`null` included)
pub fn validate_subject(value: Option<&Value>) -> Result<Option<String>, FieldIssue> {
    match value {
        None => Ok(None),
        Some(Value::String(subject)) => Ok(Some(subject.clone())),
        Some(_) => Err(FieldIssue::new("subject", messages::SUBJECT_NOT_STRING)),
    }
}

/// Validate an untyped payload into a [`NotificationRequest`].
///
/// Unknown keys are ignored. Every field is checked even after an earlier one
/// fails.
pub fn validate_request(payload: &Value) -> Result<NotificationRequest, ValidationError> {
    let Some(fields) = payload.as_object() else {
        return Err(ValidationError::new(vec![FieldIssue::new(
            BODY_FIELD,
            messages::BODY_NOT_OBJECT,
        )]));
    };

    let notification_type = validate_type(fields.get("type"));
    let recipient = validate_recipient(fields.get("recipient"));
    let message = validate_message(fields.get("message"));
    let subject = validate_subject(fields.get("subject"));

    match (notification_type, recipient, message, subject) {
        (Ok(notification_type), Ok(recipient), Ok(message), Ok(subject)) => {
            Ok(NotificationRequest {
                notification_type,
                recipient,
                message,
                subject,
            })
        }
        (notification_type, recipient, message, subject) => {
            let issues = [
                notification_type.err(),
                recipient.err(),
                message.err(),
                subject.err(),
            ]
            .into_iter()
            .flatten()
            .collect();
            Err(ValidationError::new(issues))
        }
    }
}

/// Stateless handle over [`validate_request`]
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestValidator;

impl RequestValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, payload: &Value) -> Result<NotificationRequest, ValidationError> {
        validate_request(payload)
    }
}
