// src/models/venue.rs

//! Venue configuration data structures.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// A single academic venue the bot may announce papers from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VenueConfig {
    /// Display name, e.g. "ICLR"
    pub name: String,
    /// API venue identifier, e.g. "ICLR.cc/2025/Conference"
    pub venue: String,
    /// Year of the venue
    pub year: i32,
}

impl VenueConfig {
    /// Link to the venue's group page on OpenReview.
    pub fn group_url(&self) -> String {
        format!("https://openreview.net/group?id={}", self.venue)
    }

    /// Load the venue list from a JSON file.
    ///
    /// The file holds a JSON array of venue objects; an empty list is a
    /// configuration error.
    pub fn load_all(path: &Path) -> Result<Vec<VenueConfig>> {
        let bytes = std::fs::read(path).map_err(|e| {
            AppError::config(format!("failed to read venues file {}: {e}", path.display()))
        })?;
        let venues: Vec<VenueConfig> = serde_json::from_slice(&bytes).map_err(|e| {
            AppError::config(format!("failed to parse venues file {}: {e}", path.display()))
        })?;
        if venues.is_empty() {
            return Err(AppError::config(format!(
                "no venues found in {}",
                path.display()
            )));
        }
        Ok(venues)
    }
}
