//! Normalization of call metadata into milliseconds and defaults.

use crate::types::CallMetadata;
use crate::{CachetError, Result};

/// Normalized metadata of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataReading {
    pub lifetime_millis: u64,
    pub expirable: bool,
}

/// Read both lifetime and expirability.
pub fn read(identity: &str, metadata: Option<&CallMetadata>) -> Result<MetadataReading> {
    Ok(MetadataReading {
        lifetime_millis: read_lifetime(identity, metadata)?,
        expirable: read_expirable(metadata),
    })
}

/// Declared lifetime in milliseconds, `0` when none is declared.
pub fn read_lifetime(identity: &str, metadata: Option<&CallMetadata>) -> Result<u64> {
    let Some(lifetime) = metadata.and_then(|m| m.lifetime) else {
        return Ok(0);
    };
    let duration =
        u64::try_from(lifetime.duration).map_err(|_| CachetError::NegativeLifetimeDuration {
            identity: identity.to_string(),
            duration: lifetime.duration,
        })?;
    Ok(lifetime.unit.to_millis(duration))
}

/// Declared expirability, `true` unless explicitly set to `false`.
pub fn read_expirable(metadata: Option<&CallMetadata>) -> bool {
    metadata.and_then(|m| m.expirable).unwrap_or(true)
}
