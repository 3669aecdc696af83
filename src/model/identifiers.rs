//! Identifier newtypes with smart constructors.
//!
//! Raw constructors are never exported - use smart constructors only.

use serde::Serialize;
use std::fmt;

/// Location path of a page view (e.g. `/pricing`).
///
/// Fixed when the page view starts; never updated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Pathname(String);

impl Pathname {
    /// Smart constructor: validates non-empty pathname
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidPathname> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidPathname::Empty);
        }
        Ok(Self(raw))
    }

    /// Borrow the path.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Pathname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity under which events are captured.
///
/// Construction only checks for emptiness; the placeholder and type rules of `identify`
/// live in [`crate::identity`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DistinctId(String);

impl DistinctId {
    /// Smart constructor: validates non-blank distinct id
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidDistinctId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidDistinctId::Empty);
        }
        Ok(Self(raw))
    }

    /// Borrow the id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DistinctId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Error Types =====

/// Rejected [`Pathname`] input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPathname {
    /// Empty string.
    #[error("Pathname cannot be empty")]
    Empty,
}

/// Rejected [`DistinctId`] input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDistinctId {
    /// Empty or whitespace only.
    #[error("Distinct ID cannot be empty or whitespace")]
    Empty,
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pathname_accepts_root() {
        let path = Pathname::new("/").unwrap();
        assert_eq!(path.as_str(), "/");
    }

    #[test]
    fn pathname_rejects_empty_string() {
        assert_eq!(Pathname::new(""), Err(InvalidPathname::Empty));
    }

    #[test]
    fn pathname_display_matches_as_str() {
        let path = Pathname::new("/docs/intro").unwrap();
        assert_eq!(format!("{}", path), "/docs/intro");
    }

    #[test]
    fn pathname_serializes_as_plain_string() {
        let path = Pathname::new("/a").unwrap();
        assert_eq!(serde_json::to_string(&path).unwrap(), "\"/a\"");
    }

    #[test]
    fn distinct_id_accepts_numeric_looking_string() {
        let id = DistinctId::new("123").unwrap();
        assert_eq!(id.as_str(), "123");
    }

    #[test]
    fn distinct_id_rejects_empty_and_blank() {
        assert_eq!(DistinctId::new(""), Err(InvalidDistinctId::Empty));
        assert_eq!(DistinctId::new("  \t"), Err(InvalidDistinctId::Empty));
    }

    #[test]
    fn distinct_id_preserves_surrounding_whitespace() {
        // Only blank ids are rejected; the value itself is kept verbatim.
        let id = DistinctId::new(" user ").unwrap();
        assert_eq!(id.as_str(), " user ");
    }
}
