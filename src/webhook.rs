//! Webhook delivery
//!
//! One POST per run, no retries. Any transport error or non-2xx status is
//! a [`Error::DeliveryFailed`].

use async_trait::async_trait;

use crate::common::{Error, Result};
use crate::message::NotificationMessage;

/// Destination for a notification
#[async_trait]
pub trait Webhook: Send + Sync {
    /// Post the message once
    async fn deliver(&self, message: &NotificationMessage) -> Result<()>;
}

/// Slack incoming-webhook client
pub struct SlackWebhook {
    url: String,
    http: reqwest::Client,
}

impl SlackWebhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Webhook for SlackWebhook {
    async fn deliver(&self, message: &NotificationMessage) -> Result<()> {
        tracing::debug!(url = %self.url, channel = %message.channel, "Posting notification");

        // `.json()` sets `Content-Type: application/json`
        let response = self.http.post(&self.url).json(message).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body = body.trim();
            return Err(Error::DeliveryFailed(if body.is_empty() {
                format!("webhook returned status {}", status)
            } else {
                format!("webhook returned status {}: {}", status, body)
            }));
        }

        tracing::debug!(status = %status, "Webhook accepted notification");
        Ok(())
    }
}
