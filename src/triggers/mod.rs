mod http;

pub use http::{send_notification, ErrorResponse, ErrorStatus, NotificationResponse};
