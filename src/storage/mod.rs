// src/storage/mod.rs

//! Durable posted-record ledger.
//!
//! ## File Layout
//!
//! ```text
//! {
//!   "posted": {
//!     "<paperId>": { "date": "YYYY-MM-DD", "venue": "<venueId>" }
//!   }
//! }
//! ```

mod json;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// Re-export for convenience
pub use json::PostedStore;

/// One previously announced paper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostedEntry {
    /// UTC calendar date of the announcement
    pub date: String,
    /// Venue identifier the paper was announced under
    pub venue: String,
}

/// The full dedup ledger keyed by paper id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostedRecord {
    #[serde(default)]
    pub posted: HashMap<String, PostedEntry>,
}
