// src/models/mod.rs

//! Domain models for the bot.

mod paper;
mod venue;

// Re-export all public types
pub use paper::Paper;
pub use venue::VenueConfig;
