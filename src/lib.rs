//! Validating gateway for email/SMS notifications.
//!
//! Requests are checked by [`notification::validate_request`] and, when valid,
//! forwarded to a [`delivery::DeliveryClient`] (Infobip in production).

// Infrastructure layer
pub mod config;
pub mod error;
pub mod telemetry;

// Domain layer
pub mod delivery;
pub mod notification;

// Application layer
pub mod api;
pub mod server;
pub mod triggers;
