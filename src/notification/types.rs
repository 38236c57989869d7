use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Delivery channel of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    /// Email delivered through the provider's email API
    Email,
    /// Text message delivered through the provider's SMS API
    Sms,
}

impl NotificationType {
    /// Wire name of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Email => "email",
            NotificationType::Sms => "sms",
        }
    }

    /// Parse the exact wire name (case-sensitive)
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "email" => Some(NotificationType::Email),
            "sms" => Some(NotificationType::Sms),
            _ => None,
        }
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated notification request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    /// Delivery channel
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    /// Email address or phone number of the recipient
    pub recipient: String,
    /// Content of the notification
    pub message: String,
    /// Subject line, only used for email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

/// A notification accepted for delivery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier assigned on acceptance
    pub id: String,
    #[serde(flatten)]
    pub request: NotificationRequest,
    /// When the notification was accepted
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Stamp a validated request with a fresh id and creation time
    pub fn new(request: NotificationRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            request,
            created_at: Utc::now(),
        }
    }

    pub fn notification_type(&self) -> NotificationType {
        self.request.notification_type
    }

    pub fn recipient(&self) -> &str {
        &self.request.recipient
    }

    pub fn message(&self) -> &str {
        &self.request.message
    }

    pub fn subject(&self) -> Option<&str> {
        self.request.subject.as_deref()
    }
}

impl From<NotificationRequest> for Notification {
    fn from(request: NotificationRequest) -> Self {
        Notification::new(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_request() -> NotificationRequest {
        NotificationRequest {
            notification_type: NotificationType::Email,
            recipient: "user@example.com".to_string(),
            message: "Hello".to_string(),
            subject: None,
        }
    }

    #[test]
    fn test_type_wire_names() {
        assert_eq!(NotificationType::from_wire("email"), Some(NotificationType::Email));
        assert_eq!(NotificationType::from_wire("sms"), Some(NotificationType::Sms));
        assert_eq!(NotificationType::from_wire("SMS"), None);
        assert_eq!(NotificationType::Sms.to_string(), "sms");
    }

    #[test]
    fn test_request_serializes_type_key_and_omits_subject() {
        let value = serde_json::to_value(sample_request()).unwrap();
        assert_eq!(
            value,
            json!({"type": "email", "recipient": "user@example.com", "message": "Hello"})
        );
    }

    #[test]
    fn test_notification_gets_unique_ids() {
        let a = Notification::new(sample_request());
        let b = Notification::from(sample_request());

        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
        assert_eq!(a.notification_type(), NotificationType::Email);
        assert_eq!(a.recipient(), "user@example.com");
        assert_eq!(a.subject(), None);
    }

    #[test]
    fn test_notification_flattens_request() {
        let notification = Notification::new(NotificationRequest {
            subject: Some("Hi".to_string()),
            ..sample_request()
        });
        let value = serde_json::to_value(&notification).unwrap();

        assert_eq!(value["type"], "email");
        assert_eq!(value["subject"], "Hi");
        assert_eq!(value["id"], notification.id.as_str());
        assert!(value.get("created_at").is_some());
    }
}
