//! Snapshot tests for the serialized `$pageview` event shape.

use chrono::{TimeZone, Utc};
use pageview_tracker::client::{Client, MemorySink};
use pageview_tracker::identity::MemoryStore;
use pageview_tracker::viewport::{SimulatedViewport, ViewportUpdate};
use serde_json::json;
use std::rc::Rc;

fn epoch() -> chrono::DateTime<Utc> {
    Utc.timestamp_opt(0, 0).unwrap()
}

#[test]
fn pageview_event_after_engaged_page() {
    let host = Rc::new(SimulatedViewport::attached("/home"));
    host.apply(&ViewportUpdate {
        scroll_y: Some(0.0),
        viewport_height: Some(1000.0),
        scroll_height: Some(5000.0),
    });
    let mut client = Client::new(Rc::clone(&host), MemoryStore::new(), MemorySink::new());
    client.identify(&json!("user-1")).unwrap();

    client.capture_pageview();
    host.scroll_to(3000.0);
    client.on_scroll();
    host.scroll_to(1000.0);
    client.on_scroll();
    host.navigate("/pricing");
    let event = client.capture_pageview().with_timestamp(epoch());

    insta::assert_snapshot!(serde_json::to_string_pretty(&event).unwrap(), @r#"
    {
      "event": "$pageview",
      "distinct_id": "user-1",
      "timestamp": "1970-01-01T00:00:00Z",
      "properties": {
        "$pathname": "/pricing",
        "$prev_pageview_last_content": 2000.0,
        "$prev_pageview_last_content_percentage": 0.4,
        "$prev_pageview_last_scroll": 1000.0,
        "$prev_pageview_last_scroll_percentage": 0.25,
        "$prev_pageview_max_content": 4000.0,
        "$prev_pageview_max_content_percentage": 0.8,
        "$prev_pageview_max_scroll": 3000.0,
        "$prev_pageview_max_scroll_percentage": 0.75,
        "$prev_pageview_pathname": "/home"
      }
    }
    "#);
}

#[test]
fn first_pageview_event_for_anonymous_user() {
    let host = Rc::new(SimulatedViewport::attached("/"));
    let mut client = Client::new(Rc::clone(&host), MemoryStore::new(), MemorySink::new());

    let event = client.capture_pageview().with_timestamp(epoch());

    insta::assert_snapshot!(serde_json::to_string_pretty(&event).unwrap(), @r#"
    {
      "event": "$pageview",
      "timestamp": "1970-01-01T00:00:00Z",
      "properties": {
        "$pathname": "/"
      }
    }
    "#);
}
