//! Key-value property store.
//!
//! Persistence (cookies, local storage) lives behind this trait; only an in-memory store is
//! provided here.

use std::collections::BTreeMap;

use serde_json::Value;

/// Property key holding the identified user id.
pub const USER_ID_KEY: &str = "$user_id";

/// Property key holding the id events are captured under.
pub const DISTINCT_ID_KEY: &str = "distinct_id";

/// Persistent properties of the current client.
pub trait PropertyStore {
    /// Stored value for `key`.
    fn get(&self, key: &str) -> Option<&Value>;

    /// Insert or overwrite `key`.
    fn set(&mut self, key: &str, value: Value);

    /// All stored properties, sorted by key.
    fn properties(&self) -> BTreeMap<String, Value>;
}

/// Process-lifetime store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    props: BTreeMap<String, Value>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PropertyStore for MemoryStore {
    fn get(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    fn set(&mut self, key: &str, value: Value) {
        self.props.insert(key.to_owned(), value);
    }

    fn properties(&self) -> BTreeMap<String, Value> {
        self.props.clone()
    }
}
