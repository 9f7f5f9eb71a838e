// src/pipeline.rs

//! Run orchestration.
//!
//! One linear pass per invocation: pick venue, fetch, select, format, then
//! either print (dry run) or post and record. The posted record is saved only
//! after the notifier confirms delivery, so a failed or skipped post leaves
//! the ledger untouched.

use rand::Rng;

use crate::config::{Config, PlatformConfig};
use crate::error::{AppError, Result};
use crate::formatter::{DiscordFormatter, Formatter, SlackFormatter};
use crate::models::{Paper, VenueConfig};
use crate::notifier::{DiscordNotifier, Notifier, SlackNotifier};
use crate::openreview::{Client, Note};
use crate::selector::{RandomSelector, RandomVenuePicker};
use crate::storage::PostedStore;

/// How a run ended.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Message delivered and recorded
    Posted { paper_id: String },
    /// Every candidate was invalid or already posted; clean no-op
    NothingToPost,
    /// Dry run: message surfaced, nothing posted or saved
    DryRunDone,
}

/// Execute one full run.
pub async fn run(config: &Config) -> Result<()> {
    if config.select_strategy != "random" {
        return Err(AppError::config(format!(
            "unknown select strategy: {}",
            config.select_strategy
        )));
    }

    let mut venue_picker = RandomVenuePicker::new();
    let venue = venue_picker.pick(&config.venues)?;
    log::info!("Selected venue for this run: {} {}", venue.name, venue.year);

    let client = Client::new(&config.user_agent)?;
    log::info!("Fetching papers from OpenReview (venue: {})...", venue.venue);
    let notes = client.fetch_submissions(&venue.venue).await?;
    log::info!("Fetched {} papers.", notes.len());

    let mut store = PostedStore::open(&config.record_path).await?;
    log::info!("Loaded posted record with {} entries.", store.len());

    let (formatter, notifier): (Box<dyn Formatter>, Box<dyn Notifier>) = match &config.platform {
        PlatformConfig::Slack {
            bot_token,
            channel_id,
        } => (
            Box::new(SlackFormatter),
            Box::new(SlackNotifier::new(bot_token, channel_id)?),
        ),
        PlatformConfig::Discord { webhook_url } => (
            Box::new(DiscordFormatter),
            Box::new(DiscordNotifier::new(webhook_url)?),
        ),
    };
    log::info!("Target platform set to {}.", config.platform.name());

    let mut selector = RandomSelector::new();
    let outcome = announce(
        &notes,
        venue,
        &mut store,
        &mut selector,
        formatter.as_ref(),
        notifier.as_ref(),
        config.abstract_max_chars,
        config.dry_run,
    )
    .await?;

    match outcome {
        Outcome::NothingToPost => log::info!("No new papers to post. Nothing to do."),
        Outcome::DryRunDone => log::info!("Dry run complete."),
        Outcome::Posted { paper_id } => log::info!("Announced paper {paper_id}."),
    }

    Ok(())
}

/// Select, format, and deliver one paper from an already fetched list.
///
/// Split out of [`run`] so the sequencing rules can be exercised with mock
/// notifiers and a fixed RNG.
#[allow(clippy::too_many_arguments)]
pub async fn announce<R: Rng>(
    notes: &[Note],
    venue: &VenueConfig,
    store: &mut PostedStore,
    selector: &mut RandomSelector<R>,
    formatter: &dyn Formatter,
    notifier: &dyn Notifier,
    abstract_max_chars: i64,
    dry_run: bool,
) -> Result<Outcome> {
    let selected = match selector.select(notes, |id| store.is_posted(id)) {
        Ok(note) => note,
        Err(AppError::NoCandidates) => return Ok(Outcome::NothingToPost),
        Err(e) => return Err(e),
    };
    log::info!("Selected paper: {} (ID: {})", selected.title(), selected.id());

    let message = formatter.format(selected, venue, abstract_max_chars);

    if dry_run {
        log::info!("Dry run mode is enabled. Skipping post and save.");
        log::info!("--- Message to be posted ---\n{message}\n----------------------------");
        return Ok(Outcome::DryRunDone);
    }

    notifier.post(&message).await?;
    log::info!("Post successful.");

    store.add(selected.id(), &venue.venue);
    store
        .save()
        .await
        .map_err(|e| AppError::RecordNotSaved(e.to_string()))?;
    log::info!("Record saved.");

    Ok(Outcome::Posted {
        paper_id: selected.id().to_string(),
    })
}
