//! Call-level cache metadata (lifetime and expirability).

use serde::{Deserialize, Serialize};

/// Unit a [`LifeCache`] duration is declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Convert `duration` in this unit to milliseconds.
    ///
    /// Sub-millisecond units truncate toward zero; results saturate at `u64::MAX`.
    pub fn to_millis(self, duration: u64) -> u64 {
        match self {
            Self::Nanoseconds => duration / 1_000_000,
            Self::Microseconds => duration / 1_000,
            Self::Milliseconds => duration,
            Self::Seconds => duration.saturating_mul(1_000),
            Self::Minutes => duration.saturating_mul(60_000),
            Self::Hours => duration.saturating_mul(3_600_000),
            Self::Days => duration.saturating_mul(86_400_000),
        }
    }
}

/// Declared lifetime of cached entries for a call.
///
/// `duration` is signed so that a negative declaration can be rejected with a
/// precise error instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LifeCache {
    pub duration: i64,
    pub unit: TimeUnit,
}

impl LifeCache {
    pub fn new(duration: i64, unit: TimeUnit) -> Self {
        Self { duration, unit }
    }
}

/// Metadata attached to an intercepted call.
///
/// Both options are optional: no lifetime means entries never expire on their
/// own, and `expirable` defaults to `true`.
///
/// ```rust
/// # use cachet::{CallMetadata, TimeUnit};
/// let metadata = CallMetadata::new()
///     .lifetime(5, TimeUnit::Minutes)
///     .expirable(false);
/// assert_eq!(metadata.expirable, Some(false));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifetime: Option<LifeCache>,
    /// When `false`, the cache engine may keep serving the entry past its
    /// lifetime if the producer fails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expirable: Option<bool>,
}

impl CallMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lifetime(mut self, duration: i64, unit: TimeUnit) -> Self {
        self.lifetime = Some(LifeCache::new(duration, unit));
        self
    }

    pub fn expirable(mut self, expirable: bool) -> Self {
        self.expirable = Some(expirable);
        self
    }
}
