//! Reply shapes of the Infobip send APIs.

use serde::{Deserialize, Serialize};

/// Status group ids Infobip uses for messages that will not be delivered
const FAILURE_GROUPS: [i64; 3] = [
    2, // UNDELIVERABLE
    4, // EXPIRED
    5, // REJECTED
];

/// Per-message status record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfobipMessageStatus {
    pub group_id: i64,
    pub group_name: String,
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl InfobipMessageStatus {
    /// Whether the provider already gave up on this message
    pub fn is_failure(&self) -> bool {
        FAILURE_GROUPS.contains(&self.group_id)
    }
}

/// One destination of a send request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfobipMessage {
    pub to: String,
    pub message_id: String,
    pub status: InfobipMessageStatus,
}

/// Reply to a send request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfobipResponse {
    pub bulk_id: String,
    pub messages: Vec<InfobipMessage>,
}

impl InfobipResponse {
    /// At least one message was accepted and none of them failed
    pub fn is_success(&self) -> bool {
        !self.messages.is_empty() && !self.messages.iter().any(|m| m.status.is_failure())
    }
}
