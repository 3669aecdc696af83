//! Tests for identify.

use super::*;
use serde_json::json;
use std::sync::{Arc, Mutex};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// Records the level of every event emitted while installed.
#[derive(Clone, Default)]
struct LevelRecorder {
    levels: Arc<Mutex<Vec<Level>>>,
}

impl LevelRecorder {
    fn count(&self, level: Level) -> usize {
        self.levels
            .lock()
            .unwrap()
            .iter()
            .filter(|l| **l == level)
            .count()
    }
}

impl<S: Subscriber> Layer<S> for LevelRecorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.levels.lock().unwrap().push(*event.metadata().level());
    }
}

fn with_recorder<T>(f: impl FnOnce() -> T) -> (T, LevelRecorder) {
    let recorder = LevelRecorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, recorder)
}

#[test]
fn identify_persists_user_id() {
    // GIVEN a fresh identity
    let mut identity = Identity::new(MemoryStore::new());

    // WHEN identifying with a string id
    let (result, recorder) = with_recorder(|| identity.identify(&json!("123")));

    // THEN $user_id is persisted and nothing is logged at warn or above
    assert_eq!(result.unwrap().as_str(), "123");
    assert_eq!(
        identity.store().properties().get(USER_ID_KEY),
        Some(&json!("123"))
    );
    assert_eq!(recorder.count(Level::ERROR), 0);
    assert_eq!(recorder.count(Level::WARN), 0);
}

#[test]
fn identify_converts_numeric_id_to_string_with_one_warning() {
    let mut identity = Identity::new(MemoryStore::new());

    let (result, recorder) = with_recorder(|| identity.identify(&json!(123)));

    assert_eq!(result.unwrap().as_str(), "123");
    assert_eq!(
        identity.store().properties().get(USER_ID_KEY),
        Some(&json!("123"))
    );
    assert_eq!(recorder.count(Level::ERROR), 0);
    assert_eq!(recorder.count(Level::WARN), 1);
}

#[test]
fn identify_sets_distinct_id() {
    let mut identity = Identity::new(MemoryStore::new());
    assert!(identity.distinct_id().is_none());

    identity.identify(&json!("user-42")).unwrap();

    assert_eq!(
        identity.distinct_id().map(|id| id.as_str().to_owned()),
        Some("user-42".to_string())
    );
}

#[test]
fn identify_rejects_empty_and_blank() {
    let mut identity = Identity::new(MemoryStore::new());
    assert_eq!(identity.identify(&json!("")), Err(IdentifyError::Empty));
    assert_eq!(identity.identify(&json!("   ")), Err(IdentifyError::Empty));
    assert!(identity.store().properties().is_empty());
}

#[test]
fn identify_rejects_placeholders_case_insensitively() {
    let mut identity = Identity::new(MemoryStore::new());
    for raw in ["undefined", "NULL", "Anonymous", "distinct_id", "[object Object]"] {
        assert_eq!(
            identity.identify(&json!(raw)),
            Err(IdentifyError::Placeholder(raw.to_string())),
            "{} should be refused",
            raw
        );
    }
    assert!(identity.distinct_id().is_none());
}

#[test]
fn identify_rejects_non_scalar_values() {
    let mut identity = Identity::new(MemoryStore::new());
    assert_eq!(
        identity.identify(&json!(null)),
        Err(IdentifyError::InvalidType("null"))
    );
    assert_eq!(
        identity.identify(&json!(true)),
        Err(IdentifyError::InvalidType("boolean"))
    );
    assert_eq!(
        identity.identify(&json!({"id": 1})),
        Err(IdentifyError::InvalidType("object"))
    );
}

#[test]
fn later_identify_replaces_earlier_one() {
    let mut identity = Identity::new(MemoryStore::new());
    identity.identify(&json!("first")).unwrap();
    identity.identify(&json!("second")).unwrap();
    assert_eq!(identity.distinct_id().unwrap().as_str(), "second");
}
