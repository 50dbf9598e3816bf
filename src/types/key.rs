//! Dynamic key types that make a cached result vary per call.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single caller-supplied key.
///
/// The wrapped value is captured by its `Display` form at construction, so
/// `DynamicKey::new(42)` and `DynamicKey::new("42")` address the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DynamicKey {
    key: String,
}

impl DynamicKey {
    pub fn new(key: impl fmt::Display) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// A caller-supplied key scoped to a group.
///
/// Entries sharing a group can be evicted together; see
/// [`EvictDirective::group()`](crate::EvictDirective::group).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DynamicKeyGroup {
    key: String,
    group: String,
}

impl DynamicKeyGroup {
    pub fn new(key: impl fmt::Display, group: impl fmt::Display) -> Self {
        Self {
            key: key.to_string(),
            group: group.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn group(&self) -> &str {
        &self.group
    }
}
