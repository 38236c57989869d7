//! Infobip client tests against a local mock server

use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use notification_gateway::config::DeliveryConfig;
use notification_gateway::delivery::{DeliveryClient, DeliveryError, InfobipClient};
use notification_gateway::notification::{Notification, NotificationRequest, NotificationType};

fn client(server: &MockServer) -> InfobipClient {
    InfobipClient::new(DeliveryConfig {
        base_url: server.uri(),
        api_key: Some("test-key".to_string()),
        email_from: "Ara <noreply@ara.example>".to_string(),
        sms_from: Some("Ara".to_string()),
        timeout_seconds: 5,
    })
    .unwrap()
}

fn notification(notification_type: NotificationType, recipient: &str) -> Notification {
    Notification::new(NotificationRequest {
        notification_type,
        recipient: recipient.to_string(),
        message: "Your code is 1234".to_string(),
        subject: Some("Verification".to_string()),
    })
}

fn provider_reply(to: &str) -> serde_json::Value {
    json!({
        "bulkId": "bulk-77",
        "messages": [{
            "to": to,
            "messageId": "msg-77",
            "status": {
                "groupId": 1,
                "groupName": "PENDING",
                "id": 26,
                "name": "PENDING_ACCEPTED",
                "description": "Message sent to next instance"
            }
        }]
    })
}

#[tokio::test]
async fn test_sms_is_posted_as_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sms/2/text/advanced"))
        .and(header("Authorization", "App test-key"))
        .and(body_json(json!({
            "messages": [{
                "destinations": [{"to": "+14155551234"}],
                "from": "Ara",
                "text": "Your code is 1234"
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(provider_reply("14155551234")))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client(&server)
        .send(&notification(NotificationType::Sms, "+14155551234"))
        .await
        .unwrap();

    assert_eq!(reply.bulk_id, "bulk-77");
    assert_eq!(reply.messages[0].message_id, "msg-77");
    assert!(reply.is_success());
}

#[tokio::test]
async fn test_email_is_posted_as_multipart() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/email/3/send"))
        .and(header("Authorization", "App test-key"))
        .and(body_string_contains("user@example.com"))
        .and(body_string_contains("Verification"))
        .and(body_string_contains("noreply@ara.example"))
        .respond_with(ResponseTemplate::new(200).set_body_json(provider_reply("user@example.com")))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client(&server)
        .send(&notification(NotificationType::Email, "user@example.com"))
        .await
        .unwrap();

    assert_eq!(reply.messages[0].to, "user@example.com");
}

#[tokio::test]
async fn test_non_success_status_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sms/2/text/advanced"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid login details"))
        .mount(&server)
        .await;

    let err = client(&server)
        .send(&notification(NotificationType::Sms, "14155551234"))
        .await
        .unwrap_err();

    match err {
        DeliveryError::Rejected { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "Invalid login details");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unexpected_reply_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sms/2/text/advanced"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let err = client(&server)
        .send(&notification(NotificationType::Sms, "14155551234"))
        .await
        .unwrap_err();

    assert!(matches!(err, DeliveryError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_provider_is_transport_error() {
    // a dedicated server, not a pooled one, so dropping it closes the port
    let server = MockServer::builder().start().await;
    let client = client(&server);
    drop(server);

    let err = client
        .send(&notification(NotificationType::Sms, "14155551234"))
        .await
        .unwrap_err();

    assert!(matches!(err, DeliveryError::Transport(_)));
}
