//! HTTP notification trigger
//!
//! `POST /api/v1/notifications/send` validates the body, forwards the
//! notification to the delivery provider and answers with either a
//! `NotificationResponse` or an `ErrorResponse`.

mod handlers;
mod models;

pub use handlers::send_notification;
pub use models::{ErrorResponse, ErrorStatus, NotificationResponse};
