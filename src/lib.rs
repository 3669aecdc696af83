//! pageview-tracker
//!
//! Page-view and scroll-depth instrumentation. The core is
//! [`page_view::PageViewManager`]: it measures how far the user scrolled on each page view
//! and, when the next page view starts, reports that engagement as `$prev_pageview_*`
//! properties.
//!
//! Host access goes through [`viewport::ViewportReader`], so the same code runs against a
//! browser binding, a test double, or the JSONL [`replay`] harness.

pub mod client;
pub mod config;
pub mod identity;
pub mod logging;
pub mod model;
pub mod page_view;
pub mod parser;
pub mod replay;
pub mod source;
pub mod viewport;
