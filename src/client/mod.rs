//! Client session: page-view tracking, identity and event hand-off.
//!
//! One [`Client`] per session. The host wires its scroll/resize listener to
//! [`Client::on_scroll`] and its navigation hook to [`Client::capture_pageview`].

use serde_json::Value;
use tracing::debug;

use crate::identity::{Identity, IdentifyError, PropertyStore};
use crate::model::{CapturedEvent, DistinctId, PAGEVIEW_EVENT, PATHNAME_PROPERTY};
use crate::page_view::PageViewManager;
use crate::viewport::ViewportReader;

pub mod sink;

pub use sink::{EventSink, MemorySink};

/// Analytics client for one session.
#[derive(Debug)]
pub struct Client<R, S, K> {
    page_views: PageViewManager<R>,
    identity: Identity<S>,
    sink: K,
}

impl<R, S, K> Client<R, S, K>
where
    R: ViewportReader,
    S: PropertyStore,
    K: EventSink,
{
    /// Start a session with no page views and whatever identity `store` already holds.
    pub fn new(reader: R, store: S, sink: K) -> Self {
        Self {
            page_views: PageViewManager::new(reader),
            identity: Identity::new(store),
            sink,
        }
    }

    /// Capture a `$pageview` event for the page the host is on now.
    ///
    /// The event carries `$pathname` (when readable) and the `$prev_pageview_*` properties
    /// of the page view it replaces. Returns a copy of the enqueued event.
    pub fn capture_pageview(&mut self) -> CapturedEvent {
        let mut properties = self.page_views.on_page_view().into_properties();
        // Same pathname the new page view will later report as `$prev_pageview_pathname`.
        if let Some(pathname) = self.page_views.current().and_then(|pv| pv.pathname()) {
            properties.insert(
                PATHNAME_PROPERTY.to_owned(),
                Value::String(pathname.as_str().to_owned()),
            );
        }

        let event = CapturedEvent::new(PAGEVIEW_EVENT, properties)
            .with_distinct_id(self.identity.distinct_id());
        debug!(properties = event.properties.len(), "Captured page view");
        self.sink.enqueue(event.clone());
        event
    }

    /// Scroll/resize notification from the host.
    pub fn on_scroll(&mut self) {
        self.page_views.update_scroll_data();
    }

    /// Identify the user; later events carry the id. See [`Identity::identify`].
    pub fn identify(&mut self, raw: &Value) -> Result<DistinctId, IdentifyError> {
        self.identity.identify(raw)
    }

    /// Page-view state.
    pub fn page_views(&self) -> &PageViewManager<R> {
        &self.page_views
    }

    /// Identity state.
    pub fn identity(&self) -> &Identity<S> {
        &self.identity
    }

    /// Event sink.
    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Event sink, mutably (e.g. to drain it).
    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }
}
