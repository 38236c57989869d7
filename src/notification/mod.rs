//! Notification requests and their validation.
//!
//! - `types`: the validated request and the accepted `Notification` record
//! - `validation`: per-field predicates and the aggregating request validator

mod types;
pub mod validation;

pub use types::{Notification, NotificationRequest, NotificationType};
pub use validation::{
    classify_recipient, is_valid_recipient, validate_request, FieldIssue, RecipientKind,
    RequestValidator, ValidationError,
};
