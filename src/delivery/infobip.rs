use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, multipart, Client, RequestBuilder};
use serde::Serialize;

use super::{DeliveryClient, DeliveryError, InfobipResponse};
use crate::config::DeliveryConfig;
use crate::notification::{Notification, NotificationType};

const SMS_PATH: &str = "/sms/2/text/advanced";
const EMAIL_PATH: &str = "/email/3/send";

#[derive(Debug, Serialize)]
struct SmsRequest<'a> {
    messages: [SmsMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct SmsMessage<'a> {
    destinations: [SmsDestination<'a>; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<&'a str>,
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct SmsDestination<'a> {
    to: &'a str,
}

/// Infobip HTTP API client
#[derive(Debug, Clone)]
pub struct InfobipClient {
    client: Client,
    config: DeliveryConfig,
}

impl InfobipClient {
    pub fn new(config: DeliveryConfig) -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.header(header::AUTHORIZATION, format!("App {}", key)),
            None => request,
        }
    }

    fn sms_request(&self, notification: &Notification) -> RequestBuilder {
        let body = SmsRequest {
            messages: [SmsMessage {
                destinations: [SmsDestination {
                    to: notification.recipient(),
                }],
                from: self.config.sms_from.as_deref(),
                text: notification.message(),
            }],
        };

        self.client.post(self.url(SMS_PATH)).json(&body)
    }

    fn email_request(&self, notification: &Notification) -> RequestBuilder {
        let mut form = multipart::Form::new()
            .text("from", self.config.email_from.clone())
            .text("to", notification.recipient().to_string());

        if let Some(subject) = notification.subject() {
            form = form.text("subject", subject.to_string());
        }

        form = form.text("text", notification.message().to_string());

        self.client.post(self.url(EMAIL_PATH)).multipart(form)
    }
}

#[async_trait]
impl DeliveryClient for InfobipClient {
    async fn send(&self, notification: &Notification) -> Result<InfobipResponse, DeliveryError> {
        let request = match notification.notification_type() {
            NotificationType::Sms => self.sms_request(notification),
            NotificationType::Email => self.email_request(notification),
        };

        tracing::debug!(
            notification_id = %notification.id,
            notification_type = %notification.notification_type(),
            "Sending notification to Infobip"
        );

        let response = self
            .authorize(request)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                notification_id = %notification.id,
                status = status.as_u16(),
                "Infobip rejected notification"
            );
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| DeliveryError::Decode(e.to_string()))
    }
}
