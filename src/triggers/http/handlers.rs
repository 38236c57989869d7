//! HTTP notification handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::notification::{validate_request, Notification};
use crate::server::AppState;

use super::models::NotificationResponse;

/// Validate a notification request and forward it to the delivery provider
#[tracing::instrument(name = "http.send_notification", skip(state, payload))]
pub async fn send_notification(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<NotificationResponse>> {
    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let request = validate_request(&payload)?;
    let notification = Notification::new(request);

    tracing::info!(
        notification_id = %notification.id,
        notification_type = %notification.notification_type(),
        "Notification accepted"
    );

    let reply = state.delivery.send(&notification).await?;

    let response = NotificationResponse::from_delivery(notification.id.as_str(), &reply)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    tracing::info!(
        notification_id = %notification.id,
        bulk_id = %reply.bulk_id,
        success = response.success,
        "Notification delivered to provider"
    );

    Ok(Json(response))
}
