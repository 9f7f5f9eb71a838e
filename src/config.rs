// src/config.rs

//! Configuration loading.
//!
//! The venue list comes from a JSON file; everything else comes from
//! environment variables, resolved once at startup. Missing or malformed
//! required values abort the run before any core logic executes.

use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::models::VenueConfig;

const DEFAULT_VENUES_PATH: &str = "assets/venues.json";
const DEFAULT_RECORD_PATH: &str = "data/posted.json";
const DEFAULT_ABSTRACT_MAX_CHARS: i64 = 1200;
const DEFAULT_SELECT_STRATEGY: &str = "random";
const DEFAULT_USER_AGENT: &str = concat!("dailybot/", env!("CARGO_PKG_VERSION"));

/// Target platform and its credentials, resolved once from configuration.
#[derive(Debug, Clone)]
pub enum PlatformConfig {
    Slack { bot_token: String, channel_id: String },
    Discord { webhook_url: String },
}

impl PlatformConfig {
    pub fn name(&self) -> &'static str {
        match self {
            PlatformConfig::Slack { .. } => "slack",
            PlatformConfig::Discord { .. } => "discord",
        }
    }
}

/// Application configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Venues the bot may announce from
    pub venues: Vec<VenueConfig>,
    /// Delivery platform and credentials
    pub platform: PlatformConfig,
    /// Candidate selection strategy name
    pub select_strategy: String,
    /// Abstract truncation length in code points; `<= 0` disables truncation
    pub abstract_max_chars: i64,
    /// Select and format, but neither post nor record
    pub dry_run: bool,
    /// User-Agent sent to the paper API
    pub user_agent: String,
    /// Path of the posted-record ledger
    pub record_path: PathBuf,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Config> {
        let lookup = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());

        let venues_path =
            lookup("VENUES_PATH").unwrap_or_else(|| DEFAULT_VENUES_PATH.to_string());
        let venues = VenueConfig::load_all(Path::new(&venues_path))?;

        Self::from_vars(venues, &lookup)
    }

    /// Build a config from a venue list and a variable-lookup function.
    ///
    /// Split out of [`Config::from_env`] so tests can supply variables
    /// without mutating the process environment.
    pub fn from_vars(
        venues: Vec<VenueConfig>,
        vars: &dyn Fn(&str) -> Option<String>,
    ) -> Result<Config> {
        if venues.is_empty() {
            return Err(AppError::config("venue list is empty"));
        }

        let platform = match vars("TARGET_PLATFORM") {
            Some(p) if p == "slack" => {
                let bot_token = vars("SLACK_BOT_TOKEN");
                let channel_id = vars("SLACK_CHANNEL_ID");
                match (bot_token, channel_id) {
                    (Some(bot_token), Some(channel_id)) => PlatformConfig::Slack {
                        bot_token,
                        channel_id,
                    },
                    _ => {
                        return Err(AppError::config(
                            "SLACK_BOT_TOKEN and SLACK_CHANNEL_ID are required for slack platform",
                        ));
                    }
                }
            }
            Some(p) if p == "discord" => match vars("DISCORD_WEBHOOK_URL") {
                Some(webhook_url) => PlatformConfig::Discord { webhook_url },
                None => {
                    return Err(AppError::config(
                        "DISCORD_WEBHOOK_URL is required for discord platform",
                    ));
                }
            },
            Some(p) => {
                return Err(AppError::config(format!(
                    "invalid TARGET_PLATFORM: {p}. must be 'slack' or 'discord'"
                )));
            }
            None => {
                return Err(AppError::config(
                    "environment variable TARGET_PLATFORM is required",
                ));
            }
        };

        let select_strategy =
            vars("SELECT_STRATEGY").unwrap_or_else(|| DEFAULT_SELECT_STRATEGY.to_string());

        let abstract_max_chars = match vars("ABSTRACT_MAX_CHARS") {
            Some(raw) => raw.parse::<i64>().map_err(|e| {
                AppError::config(format!("failed to parse ABSTRACT_MAX_CHARS: {e}"))
            })?,
            None => DEFAULT_ABSTRACT_MAX_CHARS,
        };

        let dry_run = match vars("DRY_RUN") {
            Some(raw) => raw
                .parse::<bool>()
                .map_err(|e| AppError::config(format!("failed to parse DRY_RUN: {e}")))?,
            None => false,
        };

        let user_agent =
            vars("CUSTOM_USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let record_path = vars("POSTED_RECORD_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RECORD_PATH));

        Ok(Config {
            venues,
            platform,
            select_strategy,
            abstract_max_chars,
            dry_run,
            user_agent,
            record_path,
        })
    }
}
