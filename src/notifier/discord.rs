// src/notifier/discord.rs

//! Discord notifier posting to an incoming webhook.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::notifier::Notifier;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Posts messages to a Discord channel via webhook URL.
pub struct DiscordNotifier {
    http: reqwest::Client,
    webhook_url: String,
}

#[derive(Serialize)]
struct WebhookPayload<'a> {
    content: &'a str,
}

impl DiscordNotifier {
    pub fn new(webhook_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            webhook_url: webhook_url.into(),
        })
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    async fn post(&self, message: &str) -> Result<()> {
        let payload = WebhookPayload { content: message };

        let response = self
            .http
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::post(format!("failed to reach discord: {e}")))?;

        // Discord answers 204 on success
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::post(format!(
                "discord webhook returned non-2xx status: {status}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let payload = WebhookPayload { content: "hello" };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["content"], "hello");
    }

    #[tokio::test]
    async fn test_post_unreachable_url() {
        let notifier = DiscordNotifier::new("http://127.0.0.1:9/webhook").unwrap();
        let err = notifier.post("test message").await.unwrap_err();
        assert!(matches!(err, AppError::Post(_)));
    }

    // Live test against a real webhook; needs DISCORD_WEBHOOK_URL in the env.
    #[tokio::test]
    #[ignore]
    async fn test_post_integration() {
        let webhook_url = match std::env::var("DISCORD_WEBHOOK_URL") {
            Ok(v) => v,
            Err(_) => return,
        };

        let notifier = DiscordNotifier::new(webhook_url).unwrap();
        notifier
            .post("This is an integration test message from dailybot.")
            .await
            .unwrap();
    }
}
