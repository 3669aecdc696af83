//! Property-based tests for scroll measurement invariants.
//!
//! BLACK-BOX: drives a PageViewManager through a SimulatedViewport and observes only the
//! public state and the enrichment payload.
//!
//! Properties Under Test:
//! 1. After any tick sequence, max scroll = max offset and max content = max(offset + height)
//! 2. `last_*` fields equal the most recent reading
//! 3. Maxima and heights never decrease between ticks
//! 4. Percentages stay in [0, 1], and equal 1 when the ceiling is zero
//! 5. A second identical tick changes nothing

use pageview_tracker::model::{ScrollEnrichment, ScrollProperties};
use pageview_tracker::page_view::PageViewManager;
use pageview_tracker::viewport::{HostState, SimulatedViewport, ViewportUpdate};
use proptest::prelude::*;
use std::rc::Rc;

// ===== Arbitrary Strategies =====

/// One host reading: (scroll offset, viewport height, document height).
#[derive(Debug, Clone, Copy)]
struct Reading {
    scroll_y: f64,
    viewport_height: f64,
    document_height: f64,
}

impl Reading {
    fn update(&self) -> ViewportUpdate {
        ViewportUpdate {
            scroll_y: Some(self.scroll_y),
            viewport_height: Some(self.viewport_height),
            scroll_height: Some(self.document_height),
        }
    }
}

/// Whole-pixel readings keep sums exact so maxima can be compared with `==`.
fn arb_reading() -> impl Strategy<Value = Reading> {
    (0u32..20_000, 0u32..3_000, 0u32..40_000).prop_map(|(y, h, d)| Reading {
        scroll_y: f64::from(y),
        viewport_height: f64::from(h),
        document_height: f64::from(d),
    })
}

fn arb_readings(max_len: usize) -> impl Strategy<Value = Vec<Reading>> {
    prop::collection::vec(arb_reading(), 1..=max_len)
}

// ===== Helpers =====

/// Manager with one page view started at the origin of a blank page.
fn started_manager() -> (Rc<SimulatedViewport>, PageViewManager<Rc<SimulatedViewport>>) {
    let host = Rc::new(SimulatedViewport::from_state(HostState {
        attached: true,
        scroll_y: Some(0.0),
        viewport_height: Some(0.0),
        document_scroll_height: Some(0.0),
        pathname: Some("/".to_string()),
    }));
    let mut manager = PageViewManager::new(Rc::clone(&host));
    manager.on_page_view();
    (host, manager)
}

fn current_scroll(manager: &PageViewManager<Rc<SimulatedViewport>>) -> ScrollProperties {
    *manager
        .current()
        .and_then(|entry| entry.scroll_properties())
        .expect("page view seeded from readable host")
}

fn all_percentages(e: &ScrollEnrichment) -> [f64; 4] {
    [
        e.last_scroll_percentage,
        e.max_scroll_percentage,
        e.last_content_percentage,
        e.max_content_percentage,
    ]
}

// ===== Properties =====

proptest! {
    #[test]
    fn maxima_equal_largest_readings(readings in arb_readings(30)) {
        let (host, mut manager) = started_manager();
        for r in &readings {
            host.apply(&r.update());
            manager.update_scroll_data();
        }

        let sp = current_scroll(&manager);
        // Seed reading was (0, 0, 0), so maxima are at least zero.
        let max_scroll = readings.iter().map(|r| r.scroll_y).fold(0.0, f64::max);
        let max_content = readings
            .iter()
            .map(|r| r.scroll_y + r.viewport_height)
            .fold(0.0, f64::max);
        prop_assert_eq!(sp.max_scroll_y, max_scroll);
        prop_assert_eq!(sp.max_content_y, max_content);
    }

    #[test]
    fn last_fields_track_most_recent_reading(readings in arb_readings(30)) {
        let (host, mut manager) = started_manager();
        for r in &readings {
            host.apply(&r.update());
            manager.update_scroll_data();
        }

        let sp = current_scroll(&manager);
        let last = readings.last().unwrap();
        prop_assert_eq!(sp.last_scroll_y, last.scroll_y);
        prop_assert_eq!(sp.last_content_y, last.scroll_y + last.viewport_height);
    }

    #[test]
    fn maxima_and_heights_never_decrease(readings in arb_readings(30)) {
        let (host, mut manager) = started_manager();
        let mut before = current_scroll(&manager);
        for r in &readings {
            host.apply(&r.update());
            manager.update_scroll_data();
            let after = current_scroll(&manager);

            prop_assert!(after.max_scroll_y >= before.max_scroll_y);
            prop_assert!(after.max_content_y >= before.max_content_y);
            prop_assert!(after.max_scroll_height >= before.max_scroll_height);
            prop_assert!(after.max_content_height >= before.max_content_height);
            prop_assert!(after.max_scroll_y >= after.last_scroll_y);
            prop_assert!(after.max_content_y >= after.last_content_y);
            before = after;
        }
    }

    #[test]
    fn percentages_stay_in_unit_interval(readings in arb_readings(30)) {
        let (host, mut manager) = started_manager();
        for r in &readings {
            host.apply(&r.update());
            manager.update_scroll_data();
        }

        let enrichment = manager.on_page_view().scroll.expect("scroll enrichment");
        for pct in all_percentages(&enrichment) {
            prop_assert!((0.0..=1.0).contains(&pct), "percentage {} out of range", pct);
        }
    }

    #[test]
    fn pages_without_scrollable_area_report_full_scroll(
        scroll_y in 0u32..5_000,
        viewport in 1u32..3_000,
    ) {
        // Document never taller than the viewport: nothing to scroll.
        let (host, mut manager) = started_manager();
        host.apply(&ViewportUpdate {
            scroll_y: Some(f64::from(scroll_y)),
            viewport_height: Some(f64::from(viewport)),
            scroll_height: Some(f64::from(viewport)),
        });
        manager.update_scroll_data();

        let enrichment = manager.on_page_view().scroll.expect("scroll enrichment");
        prop_assert_eq!(enrichment.last_scroll_percentage, 1.0);
        prop_assert_eq!(enrichment.max_scroll_percentage, 1.0);
    }

    #[test]
    fn repeated_identical_tick_is_idempotent(readings in arb_readings(10)) {
        let (host, mut manager) = started_manager();
        for r in &readings {
            host.apply(&r.update());
            manager.update_scroll_data();
            let once = current_scroll(&manager);
            manager.update_scroll_data();
            prop_assert_eq!(current_scroll(&manager), once);
        }
    }

    #[test]
    fn ticks_before_first_page_view_never_leak(readings in arb_readings(10)) {
        let host = Rc::new(SimulatedViewport::detached());
        let mut manager = PageViewManager::new(Rc::clone(&host));
        for r in &readings {
            host.apply(&r.update());
            manager.update_scroll_data();
        }

        prop_assert!(manager.current().is_none());
        prop_assert!(manager.on_page_view().is_empty());
    }
}
