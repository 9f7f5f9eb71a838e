// src/formatter.rs

//! Platform-specific message formatting.
//!
//! Slack and Discord only differ in how the header link is written; the body
//! is built by a shared helper.

use crate::models::VenueConfig;
use crate::openreview::Note;

/// Renders a selected paper into a platform message string.
pub trait Formatter {
    /// Format the announcement. `abstract_max_chars <= 0` disables
    /// abstract truncation.
    fn format(&self, note: &Note, venue: &VenueConfig, abstract_max_chars: i64) -> String;
}

fn header_text(venue: &VenueConfig) -> String {
    format!("📄 今日の論文 ({} {})", venue.name, venue.year)
}

// --- Slack Formatter (Slack mrkdwn) ---

pub struct SlackFormatter;

impl Formatter for SlackFormatter {
    fn format(&self, note: &Note, venue: &VenueConfig, abstract_max_chars: i64) -> String {
        let header = format!("<{}|{}>", venue.group_url(), header_text(venue));
        format_message(note, &header, abstract_max_chars)
    }
}

// --- Discord Formatter (standard Markdown) ---

pub struct DiscordFormatter;

impl Formatter for DiscordFormatter {
    fn format(&self, note: &Note, venue: &VenueConfig, abstract_max_chars: i64) -> String {
        let header = format!("[{}]({})", header_text(venue), venue.group_url());
        format_message(note, &header, abstract_max_chars)
    }
}

// --- Shared body builder ---

fn format_message(note: &Note, header: &str, abstract_max_chars: i64) -> String {
    let abstract_text = truncate_chars(&note.content.abstract_text.value, abstract_max_chars);
    let authors = note.content.authors.value.join(", ");
    let link = paper_link(note);

    format!(
        "{header}\n\n*Title*: {title}\n*Authors*: {authors}\n\n*Abstract*:\n{abstract_text}\n\n*Link*:\n{link}\n\nID: `{id}`",
        title = note.content.title.value,
        id = note.id,
    )
}

/// Truncate to `max` Unicode code points, appending an ellipsis marker.
fn truncate_chars(text: &str, max: i64) -> String {
    if max <= 0 {
        return text.to_string();
    }
    let max = max as usize;
    if text.chars().count() <= max {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max).collect();
    format!("{truncated}...")
}

/// Direct PDF link when present, forum page otherwise.
fn paper_link(note: &Note) -> String {
    let pdf = &note.content.pdf.value;
    if pdf.is_empty() {
        format!("https://openreview.net/forum?id={}", note.id)
    } else if pdf.starts_with("http") {
        pdf.clone()
    } else {
        format!("https://openreview.net{pdf}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openreview::{NoteContent, ValueField};

    fn sample_note() -> Note {
        Note {
            id: "testID123".to_string(),
            cdate: 0,
            content: NoteContent {
                title: ValueField {
                    value: "Test Title".to_string(),
                },
                authors: ValueField {
                    value: vec!["Author A".to_string(), "Author B".to_string()],
                },
                abstract_text: ValueField {
                    value: "This is a test abstract. It has several words.".to_string(),
                },
                pdf: ValueField {
                    value: "http://example.com/test.pdf".to_string(),
                },
                ..Default::default()
            },
        }
    }

    fn sample_venue() -> VenueConfig {
        VenueConfig {
            name: "ICLR".to_string(),
            venue: "ICLR.cc/2025/Conference".to_string(),
            year: 2025,
        }
    }

    #[test]
    fn test_discord_full_message() {
        let formatted = DiscordFormatter.format(&sample_note(), &sample_venue(), 1000);
        let expected = "[📄 今日の論文 (ICLR 2025)](https://openreview.net/group?id=ICLR.cc/2025/Conference)\n\n\
            *Title*: Test Title\n\
            *Authors*: Author A, Author B\n\n\
            *Abstract*:\nThis is a test abstract. It has several words.\n\n\
            *Link*:\nhttp://example.com/test.pdf\n\n\
            ID: `testID123`";
        assert_eq!(formatted, expected);
    }

    #[test]
    fn test_slack_header_uses_mrkdwn_link() {
        let formatted = SlackFormatter.format(&sample_note(), &sample_venue(), 1000);
        assert!(formatted.starts_with(
            "<https://openreview.net/group?id=ICLR.cc/2025/Conference|📄 今日の論文 (ICLR 2025)>"
        ));
    }

    #[test]
    fn test_truncated_abstract() {
        let formatted = DiscordFormatter.format(&sample_note(), &sample_venue(), 20);
        assert!(formatted.contains("This is a test abstr..."));
        assert!(!formatted.contains("It has several words."));
    }

    #[test]
    fn test_no_truncation_when_disabled() {
        let formatted = DiscordFormatter.format(&sample_note(), &sample_venue(), 0);
        assert!(formatted.contains("This is a test abstract. It has several words."));
        assert!(!formatted.contains("..."));
    }

    #[test]
    fn test_truncation_counts_code_points() {
        let mut note = sample_note();
        note.content.abstract_text.value = "日本語のアブストラクトを切り詰める".to_string();

        let formatted = DiscordFormatter.format(&note, &sample_venue(), 5);
        assert!(formatted.contains("日本語のア..."));
        assert!(!formatted.contains("ブストラクト"));
    }

    #[test]
    fn test_link_falls_back_to_forum_url() {
        let mut note = sample_note();
        note.content.pdf.value = String::new();

        let formatted = DiscordFormatter.format(&note, &sample_venue(), 1000);
        assert!(formatted.contains("https://openreview.net/forum?id=testID123"));
    }

    #[test]
    fn test_relative_pdf_path_is_prefixed() {
        let mut note = sample_note();
        note.content.pdf.value = "/pdf/testID123.pdf".to_string();

        let formatted = DiscordFormatter.format(&note, &sample_venue(), 1000);
        assert!(formatted.contains("*Link*:\nhttps://openreview.net/pdf/testID123.pdf"));
    }
}
