//! In-memory host page.
//!
//! Stands in for a browser window: the host side mutates it through `&self` (scroll events
//! arrive while the manager holds a shared handle), the manager side reads it through
//! [`ViewportReader`].

use std::cell::RefCell;

use serde::Deserialize;

use super::ViewportReader;
use crate::model::ViewportMetrics;

/// Raw host readings. `None` models a property the host does not expose.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostState {
    /// Whether a window exists at all. A detached host reads as empty.
    pub attached: bool,
    /// Vertical scroll offset.
    pub scroll_y: Option<f64>,
    /// Visible height.
    pub viewport_height: Option<f64>,
    /// Full document height.
    pub document_scroll_height: Option<f64>,
    /// Location path.
    pub pathname: Option<String>,
}

/// Partial update applied by a scroll or resize notification.
///
/// Missing fields keep their previous value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ViewportUpdate {
    /// New scroll offset.
    #[serde(default)]
    pub scroll_y: Option<f64>,
    /// New viewport height.
    #[serde(default)]
    pub viewport_height: Option<f64>,
    /// New document height.
    #[serde(default, alias = "document_scroll_height")]
    pub scroll_height: Option<f64>,
}

/// Mutable simulated viewport.
#[derive(Debug, Default)]
pub struct SimulatedViewport {
    state: RefCell<HostState>,
}

impl SimulatedViewport {
    /// A detached host: every read is unavailable until [`apply`](Self::apply) or
    /// [`navigate`](Self::navigate) attaches it.
    pub fn detached() -> Self {
        Self::default()
    }

    /// An attached host at `pathname` with a zero-sized viewport at offset zero.
    pub fn attached(pathname: impl Into<String>) -> Self {
        Self::from_state(HostState {
            attached: true,
            scroll_y: Some(0.0),
            viewport_height: Some(0.0),
            document_scroll_height: Some(0.0),
            pathname: Some(pathname.into()),
        })
    }

    /// A host with exactly these readings.
    pub fn from_state(state: HostState) -> Self {
        Self {
            state: RefCell::new(state),
        }
    }

    /// Copy of the raw host readings.
    pub fn snapshot(&self) -> HostState {
        self.state.borrow().clone()
    }

    /// Apply a scroll/resize notification and attach the host.
    pub fn apply(&self, update: &ViewportUpdate) {
        let mut state = self.state.borrow_mut();
        state.attached = true;
        if let Some(y) = update.scroll_y {
            state.scroll_y = Some(y);
        }
        if let Some(h) = update.viewport_height {
            state.viewport_height = Some(h);
        }
        if let Some(h) = update.scroll_height {
            state.document_scroll_height = Some(h);
        }
    }

    /// Scroll event.
    pub fn scroll_to(&self, scroll_y: f64) {
        self.apply(&ViewportUpdate {
            scroll_y: Some(scroll_y),
            ..ViewportUpdate::default()
        });
    }

    /// Window resize.
    pub fn resize(&self, viewport_height: f64) {
        self.apply(&ViewportUpdate {
            viewport_height: Some(viewport_height),
            ..ViewportUpdate::default()
        });
    }

    /// Content grew or shrank.
    pub fn set_document_height(&self, scroll_height: f64) {
        self.apply(&ViewportUpdate {
            scroll_height: Some(scroll_height),
            ..ViewportUpdate::default()
        });
    }

    /// Change location. Attaches the host.
    pub fn navigate(&self, pathname: impl Into<String>) {
        let mut state = self.state.borrow_mut();
        state.attached = true;
        state.pathname = Some(pathname.into());
    }

    /// The host goes away; readings are kept but no longer visible.
    pub fn detach(&self) {
        self.state.borrow_mut().attached = false;
    }
}

impl ViewportReader for SimulatedViewport {
    fn metrics(&self) -> Option<ViewportMetrics> {
        let state = self.state.borrow();
        if !state.attached {
            return None;
        }
        ViewportMetrics::new(
            state.scroll_y?,
            state.viewport_height?,
            state.document_scroll_height?,
        )
    }

    fn pathname(&self) -> Option<String> {
        let state = self.state.borrow();
        if !state.attached {
            return None;
        }
        state.pathname.clone()
    }
}
