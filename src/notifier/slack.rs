// src/notifier/slack.rs

//! Slack notifier using the Web API `chat.postMessage` method.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::notifier::Notifier;

const CHAT_POST_MESSAGE_URL: &str = "https://slack.com/api/chat.postMessage";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Posts messages to a Slack channel with a bot token.
pub struct SlackNotifier {
    http: reqwest::Client,
    api_url: String,
    bot_token: String,
    channel_id: String,
}

#[derive(Serialize)]
struct ChatPostMessageBody<'a> {
    channel: &'a str,
    text: &'a str,
}

/// Slack wraps errors in a 200 response; success lives in the `ok` field.
#[derive(Deserialize)]
struct ChatPostMessageResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

impl SlackNotifier {
    pub fn new(bot_token: impl Into<String>, channel_id: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            api_url: CHAT_POST_MESSAGE_URL.to_string(),
            bot_token: bot_token.into(),
            channel_id: channel_id.into(),
        })
    }

    /// Override the API endpoint (used by tests against a local server).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    async fn post(&self, message: &str) -> Result<()> {
        let body = ChatPostMessageBody {
            channel: &self.channel_id,
            text: message,
        };

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.bot_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::post(format!("failed to reach slack: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::post(format!(
                "slack api returned non-2xx status: {status}"
            )));
        }

        let parsed: ChatPostMessageResponse = response
            .json()
            .await
            .map_err(|e| AppError::post(format!("failed to decode slack response: {e}")))?;

        if !parsed.ok {
            return Err(AppError::post(format!(
                "slack api error: {}",
                parsed.error.as_deref().unwrap_or("unknown")
            )));
        }

        Ok(())
    }
}
