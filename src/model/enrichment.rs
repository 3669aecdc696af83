//! Properties describing the page view that just ended.
//!
//! Attached by the caller to the event that marks the *next* page view. Every key is
//! omitted when the underlying data is absent, so consumers can tell "no data" apart from
//! "scrolled to zero".

use serde::Serialize;
use serde_json::{Map, Value};

use super::page_view::PageViewEntry;
use super::scroll::{depth_percentage, ScrollProperties};

/// Scroll-derived half of the enrichment payload. All eight keys appear together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollEnrichment {
    /// Scroll offset at the last tick.
    #[serde(rename = "$prev_pageview_last_scroll")]
    pub last_scroll: f64,
    /// `last_scroll` over the scrollable distance, clamped to `[0, 1]`.
    #[serde(rename = "$prev_pageview_last_scroll_percentage")]
    pub last_scroll_percentage: f64,
    /// Deepest scroll offset seen.
    #[serde(rename = "$prev_pageview_max_scroll")]
    pub max_scroll: f64,
    /// `max_scroll` over the scrollable distance, clamped to `[0, 1]`.
    #[serde(rename = "$prev_pageview_max_scroll_percentage")]
    pub max_scroll_percentage: f64,
    /// Bottom edge of the window at the last tick.
    #[serde(rename = "$prev_pageview_last_content")]
    pub last_content: f64,
    /// `last_content` over the document height, clamped to `[0, 1]`.
    #[serde(rename = "$prev_pageview_last_content_percentage")]
    pub last_content_percentage: f64,
    /// Deepest bottom edge seen.
    #[serde(rename = "$prev_pageview_max_content")]
    pub max_content: f64,
    /// `max_content` over the document height, clamped to `[0, 1]`.
    #[serde(rename = "$prev_pageview_max_content_percentage")]
    pub max_content_percentage: f64,
}

impl From<&ScrollProperties> for ScrollEnrichment {
    fn from(sp: &ScrollProperties) -> Self {
        let scroll_height = sp.max_scroll_height;
        let content_height = sp.max_content_height;
        Self {
            last_scroll: sp.last_scroll_y,
            last_scroll_percentage: depth_percentage(sp.last_scroll_y, scroll_height),
            max_scroll: sp.max_scroll_y,
            max_scroll_percentage: depth_percentage(sp.max_scroll_y, scroll_height),
            last_content: sp.last_content_y,
            last_content_percentage: depth_percentage(sp.last_content_y, content_height),
            max_content: sp.max_content_y,
            max_content_percentage: depth_percentage(sp.max_content_y, content_height),
        }
    }
}

/// Enrichment payload returned by
/// [`PageViewManager::on_page_view`](crate::page_view::PageViewManager::on_page_view).
///
/// The default value is the empty payload of a session's first page view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnrichmentProperties {
    /// Location of the page view that ended.
    #[serde(
        rename = "$prev_pageview_pathname",
        skip_serializing_if = "Option::is_none"
    )]
    pub prev_pageview_pathname: Option<String>,
    /// Absent when that page view never had a readable viewport.
    #[serde(flatten)]
    pub scroll: Option<ScrollEnrichment>,
}

impl EnrichmentProperties {
    /// Derive the payload from a finished page view.
    pub fn from_entry(entry: &PageViewEntry) -> Self {
        Self {
            prev_pageview_pathname: entry.pathname().map(|p| p.as_str().to_owned()),
            scroll: entry.scroll_properties().map(ScrollEnrichment::from),
        }
    }

    /// True for the first page view of a session (nothing to report).
    pub fn is_empty(&self) -> bool {
        self.prev_pageview_pathname.is_none() && self.scroll.is_none()
    }

    /// Flatten into event properties, ready to merge into an outgoing event.
    pub fn into_properties(self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}
