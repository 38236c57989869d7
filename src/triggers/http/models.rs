use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::delivery::InfobipResponse;

/// Response for a notification accepted by the delivery provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationResponse {
    /// Whether the notification was sent successfully
    pub success: bool,
    /// Unique identifier of the notification
    pub id: String,
    /// Reply from the delivery provider
    pub response: Map<String, Value>,
}

impl NotificationResponse {
    /// Build the caller-facing response from the provider reply
    pub fn from_delivery(
        notification_id: impl Into<String>,
        reply: &InfobipResponse,
    ) -> Result<Self, serde_json::Error> {
        let response = match serde_json::to_value(reply)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        Ok(Self {
            success: reply.is_success(),
            id: notification_id.into(),
            response,
        })
    }
}

/// The only value `ErrorResponse::status` can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorStatus {
    #[serde(rename = "error")]
    Error,
}

/// Uniform envelope for every failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: ErrorStatus,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: ErrorStatus::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::{InfobipMessage, InfobipMessageStatus};
    use serde_json::json;

    #[test]
    fn test_error_response_shape() {
        let value = serde_json::to_value(ErrorResponse::new("Message cannot be empty")).unwrap();
        assert_eq!(value, json!({"status": "error", "message": "Message cannot be empty"}));
    }

    #[test]
    fn test_error_response_rejects_other_status() {
        let ok: Result<ErrorResponse, _> =
            serde_json::from_value(json!({"status": "error", "message": "x"}));
        assert!(ok.is_ok());

        let other: Result<ErrorResponse, _> =
            serde_json::from_value(json!({"status": "ok", "message": "x"}));
        assert!(other.is_err());
    }

    #[test]
    fn test_notification_response_from_delivery() {
        let reply = InfobipResponse {
            bulk_id: "bulk-42".to_string(),
            messages: vec![InfobipMessage {
                to: "user@example.com".to_string(),
                message_id: "msg-1".to_string(),
                status: InfobipMessageStatus {
                    group_id: 1,
                    group_name: "PENDING".to_string(),
                    id: 26,
                    name: "PENDING_ACCEPTED".to_string(),
                    description: "Message accepted".to_string(),
                },
            }],
        };

        let response = NotificationResponse::from_delivery("n-1", &reply).unwrap();
        assert!(response.success);
        assert_eq!(response.id, "n-1");
        assert_eq!(response.response["bulkId"], "bulk-42");
        assert_eq!(response.response["messages"][0]["messageId"], "msg-1");

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["id"], "n-1");
    }
}
