//! Page-view rotation and scroll tracking.
//!
//! Holds a two-slot state: the live `current` page view, which scroll ticks mutate, and the
//! frozen `previous` one. A page-view trigger freezes `current`, reports on it, and starts a
//! fresh page view from the present viewport.
//!
//! # Ordering
//!
//! Which measurements belong to which page view is decided purely by call order. Callers
//! must deliver [`on_page_view`](PageViewManager::on_page_view) and
//! [`update_scroll_data`](PageViewManager::update_scroll_data) in the order the host
//! observed them.

use tracing::{debug, trace};

use crate::model::{EnrichmentProperties, PageViewEntry, Pathname};
use crate::viewport::ViewportReader;

/// Tracks scroll and content depth across page views.
///
/// Never fails: unreadable host data leaves fields unset instead.
#[derive(Debug)]
pub struct PageViewManager<R> {
    reader: R,
    previous: Option<PageViewEntry>,
    current: Option<PageViewEntry>,
}

impl<R: ViewportReader> PageViewManager<R> {
    /// Create a manager with no page views recorded.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            previous: None,
            current: None,
        }
    }

    /// Start a new page view and report on the one it replaces.
    ///
    /// Returns an empty payload on the first call of a session. Does not itself fold a
    /// scroll reading into the outgoing page view; only ticks do that.
    pub fn on_page_view(&mut self) -> EnrichmentProperties {
        let payload = match self.current.take() {
            Some(finished) => {
                let payload = EnrichmentProperties::from_entry(&finished);
                self.previous = Some(finished);
                payload
            }
            None => EnrichmentProperties::default(),
        };

        let pathname = self.reader.pathname().and_then(|raw| Pathname::new(raw).ok());
        let metrics = self.reader.metrics();
        debug!(
            pathname = pathname.as_ref().map(Pathname::as_str),
            viewport_readable = metrics.is_some(),
            prev_pathname = payload.prev_pageview_pathname.as_deref(),
            "Page view started"
        );
        self.current = Some(PageViewEntry::new(pathname, metrics));

        payload
    }

    /// Fold the present viewport reading into the current page view.
    ///
    /// No-op before the first page view or while the viewport is unreadable. Safe to call
    /// at any rate; throttling is the caller's concern.
    pub fn update_scroll_data(&mut self) {
        let Some(current) = self.current.as_mut() else {
            trace!("Scroll tick before first page view dropped");
            return;
        };

        let Some(metrics) = self.reader.metrics() else {
            trace!("Scroll tick with unreadable viewport ignored");
            return;
        };

        current.observe(metrics);
    }

    /// The live page view, if any page view has started.
    pub fn current(&self) -> Option<&PageViewEntry> {
        self.current.as_ref()
    }

    /// The most recently finished page view.
    pub fn previous(&self) -> Option<&PageViewEntry> {
        self.previous.as_ref()
    }

    /// Host the manager reads from.
    pub fn reader(&self) -> &R {
        &self.reader
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
