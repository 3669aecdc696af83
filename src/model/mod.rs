//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors. Nothing here reads the
//! host environment; see [`crate::viewport`] for that.

pub mod enrichment;
pub mod error;
pub mod event;
pub mod identifiers;
pub mod page_view;
pub mod scroll;

// Re-export for convenience
pub use enrichment::{EnrichmentProperties, ScrollEnrichment};
pub use event::{CapturedEvent, PAGEVIEW_EVENT, PATHNAME_PROPERTY};
pub use identifiers::{DistinctId, InvalidDistinctId, InvalidPathname, Pathname};
pub use page_view::PageViewEntry;
pub use scroll::{depth_percentage, ScrollProperties, ViewportMetrics};
