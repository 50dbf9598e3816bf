//! Per-provider metadata declared in TOML.
//!
//! Lets the interception layer keep lifetime and expirability declarations
//! out of code:
//!
//! ```toml
//! [providers.fetchUsers]
//! expirable = false
//! lifetime = { duration = 1, unit = "hours" }
//!
//! [providers.fetchTeams]
//! lifetime = { duration = 30, unit = "seconds" }
//! ```
//!
//! The table is handed to [`ResolverBuilder::metadata()`](crate::ResolverBuilder::metadata).
//! Metadata attached directly to a [`CallDescription`](crate::CallDescription)
//! always takes precedence over the table entry.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::types::CallMetadata;
use crate::{CachetError, Result};

/// Call metadata keyed on call identity.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MetadataTable {
    #[serde(default)]
    providers: HashMap<String, CallMetadata>,
}

impl MetadataTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CachetError::Configuration(format!("Failed to parse metadata table: {e}")))
    }

    /// Load a table from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CachetError::Configuration(format!("Failed to read metadata file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            CachetError::Configuration(format!("Failed to parse metadata file {path:?}: {e}"))
        })
    }

    /// Insert (or overwrite) the metadata for `identity`.
    pub fn insert(&mut self, identity: impl Into<String>, metadata: CallMetadata) {
        self.providers.insert(identity.into(), metadata);
    }

    pub fn get(&self, identity: &str) -> Option<&CallMetadata> {
        self.providers.get(identity)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
