//! HTML parser for the search results page.
//!
//! Extraction anchors on the site's `botttomSearch` container class
//! (sic), a presentation-layer marker. A site redesign silently yields
//! zero entries rather than an error; swapping the marker only touches
//! this module.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

/// CSS selector matching one subtitle result container.
const RESULT_CONTAINER: &str = "div.botttomSearch";

static CONTAINER_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(RESULT_CONTAINER).expect("container selector is valid"));

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("anchor selector is valid"));

/// One discovered subtitle result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleEntry {
    /// Display title of the subtitle.
    pub title: String,

    /// Absolute link to the subtitle page.
    pub link: Url,
}

/// Extracts subtitle entries from a search results page.
///
/// Entries are returned in document order. Each result container
/// contributes its first anchor: the anchor's `title` attribute becomes
/// the entry title and its `href`, resolved against `base`, becomes the
/// link. Containers missing an anchor, a `title`, or a resolvable
/// `href` are skipped with a warning instead of aborting the parse.
#[must_use]
pub fn parse_search_page(html: &str, base: &Url) -> Vec<SubtitleEntry> {
    let document = Html::parse_document(html);
    let mut entries = Vec::new();

    for container in document.select(&CONTAINER_SELECTOR) {
        let Some(anchor) = container.select(&ANCHOR_SELECTOR).next() else {
            warn!("Skipping result container without an anchor");
            continue;
        };

        let Some(title) = anchor.value().attr("title") else {
            warn!("Skipping result anchor without a title attribute");
            continue;
        };

        let Some(href) = anchor.value().attr("href") else {
            warn!("Skipping result anchor without an href attribute");
            continue;
        };

        let link = match base.join(href) {
            Ok(link) => link,
            Err(e) => {
                warn!("Skipping result with unresolvable href {:?}: {}", href, e);
                continue;
            }
        };

        entries.push(SubtitleEntry {
            title: title.to_owned(),
            link,
        });
    }

    entries
}
