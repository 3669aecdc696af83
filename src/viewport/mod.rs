//! Ambient viewport access.
//!
//! The page-view manager never touches host globals directly. It reads through a
//! [`ViewportReader`], which a browser binding, a test, or the replay harness supplies.
//! Every read may come back empty: a non-browser host has no viewport and no location.

use std::rc::Rc;

use crate::model::ViewportMetrics;

pub mod simulated;

pub use simulated::{HostState, SimulatedViewport, ViewportUpdate};

/// Read-only view of the host page.
pub trait ViewportReader {
    /// Current scroll offset, viewport height and document height.
    ///
    /// `None` when the host has no viewport or any of the three values is unreadable.
    fn metrics(&self) -> Option<ViewportMetrics>;

    /// Current location path, `None` when there is no location.
    fn pathname(&self) -> Option<String>;
}

impl<T: ViewportReader + ?Sized> ViewportReader for &T {
    fn metrics(&self) -> Option<ViewportMetrics> {
        (**self).metrics()
    }

    fn pathname(&self) -> Option<String> {
        (**self).pathname()
    }
}

impl<T: ViewportReader + ?Sized> ViewportReader for Rc<T> {
    fn metrics(&self) -> Option<ViewportMetrics> {
        (**self).metrics()
    }

    fn pathname(&self) -> Option<String> {
        (**self).pathname()
    }
}

impl<T: ViewportReader + ?Sized> ViewportReader for Box<T> {
    fn metrics(&self) -> Option<ViewportMetrics> {
        (**self).metrics()
    }

    fn pathname(&self) -> Option<String> {
        (**self).pathname()
    }
}

/// Host without a viewport (server-side rendering, workers, CLI).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoViewport;

impl ViewportReader for NoViewport {
    fn metrics(&self) -> Option<ViewportMetrics> {
        None
    }

    fn pathname(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_viewport_reads_nothing() {
        assert_eq!(NoViewport.metrics(), None);
        assert_eq!(NoViewport.pathname(), None);
    }

    #[test]
    fn boxed_trait_object_delegates() {
        let reader: Box<dyn ViewportReader> = Box::new(SimulatedViewport::attached("/box"));
        assert_eq!(reader.pathname().as_deref(), Some("/box"));
    }

    #[test]
    fn shared_handle_sees_host_updates() {
        let host = Rc::new(SimulatedViewport::attached("/"));
        let reader = Rc::clone(&host);

        host.scroll_to(120.0);

        assert_eq!(reader.metrics().map(|m| m.scroll_y()), Some(120.0));
    }
}
