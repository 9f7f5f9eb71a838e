// src/lib.rs

//! dailybot Library
//!
//! Fetches submissions for a randomly chosen venue from the OpenReview API,
//! selects one paper that has not been announced yet, and posts it to Slack
//! or Discord, recording the post so it is never repeated.

pub mod config;
pub mod error;
pub mod formatter;
pub mod models;
pub mod notifier;
pub mod openreview;
pub mod pipeline;
pub mod selector;
pub mod storage;
