//! Scroll and content depth measurement for a single page view.
//!
//! Two depths are tracked:
//! - **scroll depth**: vertical offset, measured against the scrollable distance
//!   (`document height - viewport height`, floored at zero)
//! - **content depth**: offset plus viewport height, i.e. the lowest point of the document
//!   that has reached the bottom of the window, measured against the document height
//!
//! Both ceilings come from the same document height reading.

use serde::Serialize;

/// One reading of the host viewport.
///
/// All three values are finite and non-negative; [`ViewportMetrics::new`] refuses anything
/// else so that a garbage reading counts as "unavailable" rather than poisoning the maxima.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    scroll_y: f64,
    viewport_height: f64,
    document_scroll_height: f64,
}

impl ViewportMetrics {
    /// Smart constructor. Returns `None` for NaN, infinite or negative readings.
    pub fn new(scroll_y: f64, viewport_height: f64, document_scroll_height: f64) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if valid(scroll_y) && valid(viewport_height) && valid(document_scroll_height) {
            Some(Self {
                scroll_y,
                viewport_height,
                document_scroll_height,
            })
        } else {
            None
        }
    }

    /// Vertical scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Visible height (`documentElement.clientHeight`).
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Total document height (`documentElement.scrollHeight`).
    pub fn document_scroll_height(&self) -> f64 {
        self.document_scroll_height
    }

    /// Content depth: offset plus viewport height.
    pub fn content_y(&self) -> f64 {
        self.scroll_y + self.viewport_height
    }

    /// Distance the page can actually be scrolled. Zero for pages shorter than the viewport.
    pub fn scrollable_height(&self) -> f64 {
        (self.document_scroll_height - self.viewport_height).max(0.0)
    }

    /// Content ceiling. Same baseline as [`scrollable_height`](Self::scrollable_height).
    pub fn content_height(&self) -> f64 {
        self.document_scroll_height
    }
}

/// Scroll measurements of one page view.
///
/// Mutated in place while the page view is current. Every `max_*` field is monotonically
/// non-decreasing across [`observe`](Self::observe) calls; `last_*` fields always hold the
/// most recent reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollProperties {
    /// Tallest scrollable height seen.
    pub max_scroll_height: f64,
    /// Most recent vertical offset.
    pub last_scroll_y: f64,
    /// Largest vertical offset seen.
    pub max_scroll_y: f64,
    /// Tallest document height seen.
    pub max_content_height: f64,
    /// Most recent content depth.
    pub last_content_y: f64,
    /// Largest content depth seen.
    pub max_content_y: f64,
}

impl ScrollProperties {
    /// Seed measurements from the reading taken when a page view starts.
    pub fn from_metrics(metrics: ViewportMetrics) -> Self {
        let scroll_y = metrics.scroll_y();
        let content_y = metrics.content_y();
        Self {
            max_scroll_height: metrics.scrollable_height(),
            last_scroll_y: scroll_y,
            max_scroll_y: scroll_y,
            max_content_height: metrics.content_height(),
            last_content_y: content_y,
            max_content_y: content_y,
        }
    }

    /// Fold a new reading into the measurements.
    ///
    /// Heights never shrink: a layout reported as shorter than before is treated as
    /// unchanged. Calling this twice with the same reading leaves the state unchanged.
    pub fn observe(&mut self, metrics: ViewportMetrics) {
        let scroll_y = metrics.scroll_y();
        self.last_scroll_y = scroll_y;
        self.max_scroll_y = self.max_scroll_y.max(scroll_y);

        let content_y = metrics.content_y();
        self.last_content_y = content_y;
        self.max_content_y = self.max_content_y.max(content_y);

        self.max_scroll_height = self.max_scroll_height.max(metrics.scrollable_height());
        self.max_content_height = self.max_content_height.max(metrics.content_height());
    }
}

/// Fraction of `height` covered by `value`, clamped to `[0, 1]`.
///
/// A page with no height (or nothing to scroll) counts as fully seen, so `height <= 0`
/// yields exactly `1`.
pub fn depth_percentage(value: f64, height: f64) -> f64 {
    if height <= 0.0 {
        return 1.0;
    }
    (value / height).clamp(0.0, 1.0)
}
