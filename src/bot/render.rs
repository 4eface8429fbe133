//! Reply rendering for search results.
//!
//! Pure mapping from a search result to the outbound message plan; no
//! Telegram I/O happens here.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::search::SubtitleEntry;

/// Text sent when a query produced no usable results.
const NOT_FOUND_TEXT: &str = "No subtitles found for this query.";

/// Heading sent before the result buttons.
const FOUND_HEADING: &str = "Found Subtitles:";

/// Text carried by the button-list message.
const DOWNLOAD_PROMPT: &str = "Click the download button to download the subtitle.";

/// Planned outbound reply for one search.
#[derive(Debug, Clone)]
pub enum ReplyPlan {
    /// A single plain-text message.
    NotFound {
        /// Message text.
        text: &'static str,
    },

    /// A heading message followed by a button-list message.
    Found {
        /// Heading message text.
        heading: &'static str,

        /// Text of the message carrying the keyboard.
        prompt: &'static str,

        /// One row per entry, each row a single URL button.
        keyboard: InlineKeyboardMarkup,
    },
}

/// Renders a search result into a reply plan.
///
/// Every entry becomes one button row, labeled with the entry title and
/// opening the entry link directly. Entry order is preserved and the
/// list is never truncated, however many results the page returned.
#[must_use]
pub fn render(result: &[SubtitleEntry]) -> ReplyPlan {
    if result.is_empty() {
        return ReplyPlan::NotFound {
            text: NOT_FOUND_TEXT,
        };
    }

    let rows: Vec<Vec<InlineKeyboardButton>> = result
        .iter()
        .map(|entry| {
            vec![InlineKeyboardButton::url(
                entry.title.clone(),
                entry.link.clone(),
            )]
        })
        .collect();

    ReplyPlan::Found {
        heading: FOUND_HEADING,
        prompt: DOWNLOAD_PROMPT,
        keyboard: InlineKeyboardMarkup::new(rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;
    use url::Url;

    fn entry(title: &str, link: &str) -> SubtitleEntry {
        SubtitleEntry {
            title: title.to_owned(),
            link: Url::parse(link).unwrap(),
        }
    }

    #[test]
    fn test_render_empty_result() {
        let plan = render(&[]);

        let ReplyPlan::NotFound { text } = plan else {
            panic!("expected NotFound");
        };
        assert_eq!(text, "No subtitles found for this query.");
    }

    #[test]
    fn test_render_entries_one_button_per_entry_in_order() {
        let entries = vec![
            entry("Movie A", "https://www.opensubtitles.org/sub/1"),
            entry("Movie B", "https://www.opensubtitles.org/sub/2"),
        ];

        let ReplyPlan::Found {
            heading,
            prompt,
            keyboard,
        } = render(&entries)
        else {
            panic!("expected Found");
        };

        assert_eq!(heading, "Found Subtitles:");
        assert_eq!(prompt, "Click the download button to download the subtitle.");

        assert_eq!(keyboard.inline_keyboard.len(), 2);
        assert!(keyboard.inline_keyboard.iter().all(|row| row.len() == 1));

        for (button, expected) in keyboard
            .inline_keyboard
            .iter()
            .map(|row| &row[0])
            .zip(&entries)
        {
            assert_eq!(button.text, expected.title);
            match &button.kind {
                InlineKeyboardButtonKind::Url(url) => assert_eq!(url, &expected.link),
                other => panic!("unexpected button kind: {other:?}"),
            }
        }
    }

    #[test]
    fn test_render_does_not_truncate_long_result_lists() {
        let entries: Vec<SubtitleEntry> = (0..50)
            .map(|i| {
                entry(
                    &format!("Movie {i}"),
                    &format!("https://www.opensubtitles.org/sub/{i}"),
                )
            })
            .collect();

        let ReplyPlan::Found { keyboard, .. } = render(&entries) else {
            panic!("expected Found");
        };
        assert_eq!(keyboard.inline_keyboard.len(), 50);
    }
}
