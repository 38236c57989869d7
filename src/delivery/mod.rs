//! Delivery of accepted notifications to the external provider.
//!
//! The HTTP layer only depends on the [`DeliveryClient`] trait; [`InfobipClient`]
//! is the production implementation.

mod infobip;
mod types;

use async_trait::async_trait;
use thiserror::Error;

use crate::notification::Notification;

pub use infobip::InfobipClient;
pub use types::{InfobipMessage, InfobipMessageStatus, InfobipResponse};

/// Failure reported by the delivery provider or on the way to it
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Delivery provider unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Delivery provider rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Unexpected reply from delivery provider: {0}")]
    Decode(String),
}

/// Sends a validated notification and returns the provider's reply.
///
/// Implementations do not retry.
#[async_trait]
pub trait DeliveryClient: Send + Sync {
    async fn send(&self, notification: &Notification) -> Result<InfobipResponse, DeliveryError>;
}
