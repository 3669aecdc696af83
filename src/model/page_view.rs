//! A single page view and the measurements gathered while it was current.

use super::identifiers::Pathname;
use super::scroll::{ScrollProperties, ViewportMetrics};

/// One logical page view.
///
/// `pathname` is fixed at creation. `scroll` is `None` when the viewport could not be read
/// at creation and no readable tick has arrived since; this is distinct from a page view
/// whose user never scrolled (which holds zeroed offsets).
#[derive(Debug, Clone, PartialEq)]
pub struct PageViewEntry {
    pathname: Option<Pathname>,
    scroll: Option<ScrollProperties>,
}

impl PageViewEntry {
    /// Start a page view from whatever the host could report.
    pub fn new(pathname: Option<Pathname>, metrics: Option<ViewportMetrics>) -> Self {
        Self {
            pathname,
            scroll: metrics.map(ScrollProperties::from_metrics),
        }
    }

    /// Location recorded at creation.
    pub fn pathname(&self) -> Option<&Pathname> {
        self.pathname.as_ref()
    }

    /// Measurements so far, `None` if the viewport was never readable.
    pub fn scroll_properties(&self) -> Option<&ScrollProperties> {
        self.scroll.as_ref()
    }

    /// Fold a reading in, initializing measurements if none existed yet.
    pub fn observe(&mut self, metrics: ViewportMetrics) {
        match self.scroll.as_mut() {
            Some(scroll) => scroll.observe(metrics),
            None => self.scroll = Some(ScrollProperties::from_metrics(metrics)),
        }
    }
}
