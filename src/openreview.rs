// src/openreview.rs

//! OpenReview API client.
//!
//! Talks to the v2 `/notes` endpoint. Field values in v2 responses are
//! wrapped in `{"value": ...}` objects, modeled here as [`ValueField`].

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::Paper;

const DEFAULT_BASE_URL: &str = "https://api2.openreview.net";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the OpenReview API.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Create a configured client with the given User-Agent.
    pub fn new(user_agent: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Override the API base URL (used by tests against a local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch all submissions for a venue.
    pub async fn fetch_submissions(&self, venue: &str) -> Result<Vec<Note>> {
        let endpoint = submissions_url(&self.base_url, venue)?;

        let response = self.http.get(endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::fetch(
                venue,
                format!("unexpected status code: {status}"),
            ));
        }

        let body: ApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::fetch(venue, format!("failed to decode response: {e}")))?;

        Ok(body.notes)
    }
}

/// Build the `/notes` URL querying for a venue's submission invitation.
fn submissions_url(base_url: &str, venue: &str) -> Result<Url> {
    let invitation = format!("{venue}/-/Submission");
    let url = Url::parse_with_params(&format!("{base_url}/notes"), &[("invitation", invitation)])?;
    Ok(url)
}

// --- API Response Structures ---

/// Top-level response of the `/notes` endpoint.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    notes: Vec<Note>,
    #[allow(dead_code)]
    #[serde(default)]
    count: u64,
}

/// One submission note.
#[derive(Debug, Clone, Deserialize)]
pub struct Note {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub cdate: i64,
    #[serde(default)]
    pub content: NoteContent,
}

/// Note content fields, each wrapped in `{"value": ...}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteContent {
    #[serde(default)]
    pub title: ValueField<String>,
    #[serde(default)]
    pub authors: ValueField<Vec<String>>,
    #[serde(default, rename = "abstract")]
    pub abstract_text: ValueField<String>,
    #[serde(default)]
    pub pdf: ValueField<String>,
    #[serde(default, rename = "_bibtex")]
    pub bibtex: ValueField<String>,
}

/// `{"value": T}` wrapper used throughout the v2 API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValueField<T> {
    #[serde(default)]
    pub value: T,
}

impl Paper for Note {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.content.title.value
    }
}
