use axum::{
    routing::{get, post},
    Router,
};

use crate::server::AppState;
use crate::triggers::send_notification;

use super::health::health;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest(
            "/api/v1",
            Router::new().route("/notifications/send", post(send_notification)),
        )
}
