//! Outgoing analytics events.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use super::identifiers::DistinctId;

/// Event name used for page views.
pub const PAGEVIEW_EVENT: &str = "$pageview";

/// Property key carrying the pathname of the page view being captured.
pub const PATHNAME_PROPERTY: &str = "$pathname";

/// An event handed to the transport layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapturedEvent {
    /// Event name, e.g. `$pageview`.
    pub event: String,
    /// Identified user; omitted for anonymous events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinct_id: Option<DistinctId>,
    /// Capture time.
    pub timestamp: DateTime<Utc>,
    /// Event properties, including any `$prev_pageview_*` keys.
    pub properties: Map<String, Value>,
}

impl CapturedEvent {
    /// Anonymous event stamped with the current time.
    pub fn new(event: impl Into<String>, properties: Map<String, Value>) -> Self {
        Self {
            event: event.into(),
            distinct_id: None,
            timestamp: Utc::now(),
            properties,
        }
    }

    /// Attach (or clear) the distinct id.
    pub fn with_distinct_id(mut self, distinct_id: Option<DistinctId>) -> Self {
        self.distinct_id = distinct_id;
        self
    }

    /// Override the capture time.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
