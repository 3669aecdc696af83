//! User identity.
//!
//! Accepts an id from host code, normalizes it, and persists it in a [`PropertyStore`].
//! Merging anonymous and identified users is handled server-side and is not modelled here.

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::DistinctId;

pub mod store;

pub use store::{MemoryStore, PropertyStore, DISTINCT_ID_KEY, USER_ID_KEY};

/// Ids that host code produces by accident (stringified `undefined`, template defaults).
const PLACEHOLDER_IDS: &[&str] = &[
    "undefined",
    "null",
    "anonymous",
    "distinct_id",
    "distinctid",
    "[object object]",
];

/// Reasons an identify call is refused. Nothing is persisted in any of these cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifyError {
    /// Blank after trimming.
    #[error("Distinct ID cannot be empty")]
    Empty,

    /// A stringified placeholder such as `undefined`.
    #[error("Distinct ID '{0}' looks like a placeholder, refusing to identify")]
    Placeholder(String),

    /// Neither a string nor a number; carries the JSON type name.
    #[error("Distinct ID must be a string or number, got {0}")]
    InvalidType(&'static str),
}

/// Identity state backed by a property store.
#[derive(Debug, Default)]
pub struct Identity<S> {
    store: S,
}

impl<S: PropertyStore> Identity<S> {
    /// Wrap a store, keeping any id it already holds.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Identify the current user.
    ///
    /// Strings are used verbatim. Numbers are converted to their string form with a
    /// warning. On success both [`USER_ID_KEY`] and [`DISTINCT_ID_KEY`] are persisted.
    pub fn identify(&mut self, raw: &Value) -> Result<DistinctId, IdentifyError> {
        let candidate = match raw {
            Value::String(s) => s.clone(),
            Value::Number(n) => {
                warn!(
                    distinct_id = %n,
                    "Numeric distinct id converted to string; pass a string instead"
                );
                n.to_string()
            }
            other => return Err(IdentifyError::InvalidType(json_type_name(other))),
        };

        let id = DistinctId::new(candidate).map_err(|_| IdentifyError::Empty)?;
        if is_placeholder(id.as_str()) {
            return Err(IdentifyError::Placeholder(id.as_str().to_owned()));
        }

        self.store
            .set(USER_ID_KEY, Value::String(id.as_str().to_owned()));
        self.store
            .set(DISTINCT_ID_KEY, Value::String(id.as_str().to_owned()));
        debug!(distinct_id = %id, "Identified");

        Ok(id)
    }

    /// Currently stored distinct id, if one was persisted.
    pub fn distinct_id(&self) -> Option<DistinctId> {
        self.store
            .get(DISTINCT_ID_KEY)
            .and_then(Value::as_str)
            .and_then(|s| DistinctId::new(s).ok())
    }

    /// Backing store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

fn is_placeholder(id: &str) -> bool {
    let lowered = id.trim().to_lowercase();
    PLACEHOLDER_IDS.contains(&lowered.as_str())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
