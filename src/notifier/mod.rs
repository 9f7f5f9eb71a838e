// src/notifier/mod.rs

//! Message delivery to chat platforms.

mod discord;
mod slack;

use async_trait::async_trait;

use crate::error::Result;

// Re-export for convenience
pub use discord::DiscordNotifier;
pub use slack::SlackNotifier;

/// Delivers a formatted message to its destination.
///
/// Called at most once per run; any failure aborts the run before the posted
/// record is saved.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn post(&self, message: &str) -> Result<()>;
}
