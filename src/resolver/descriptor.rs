//! The validated per-call configuration handed to the cache engine.

use std::time::Duration;

use crate::types::{EvictDirective, Producer};

/// How one intercepted call is executed and cached.
///
/// Produced only by [`Resolver::resolve()`](crate::Resolver::resolve) and
/// read-only afterwards. A fresh value is resolved on every call, since the
/// dynamic key and group vary with the arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig<T> {
    provider_key: String,
    dynamic_key: String,
    group: String,
    producer: Producer<T>,
    lifetime_millis: u64,
    requires_detailed_response: bool,
    evict: EvictDirective,
    expirable: bool,
}

impl<T> ProviderConfig<T> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        provider_key: String,
        dynamic_key: String,
        group: String,
        producer: Producer<T>,
        lifetime_millis: u64,
        requires_detailed_response: bool,
        evict: EvictDirective,
        expirable: bool,
    ) -> Self {
        Self {
            provider_key,
            dynamic_key,
            group,
            producer,
            lifetime_millis,
            requires_detailed_response,
            evict,
            expirable,
        }
    }

    /// The call identity; base of the storage key.
    pub fn provider_key(&self) -> &str {
        &self.provider_key
    }

    /// Dynamic key, or `""` when the call supplies none.
    pub fn dynamic_key(&self) -> &str {
        &self.dynamic_key
    }

    /// Dynamic key group, or `""` when the call supplies none.
    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn producer(&self) -> &Producer<T> {
        &self.producer
    }

    /// Entry lifetime in milliseconds; `0` means no expiry window.
    pub fn lifetime_millis(&self) -> u64 {
        self.lifetime_millis
    }

    /// Entry lifetime, or `None` when entries live until evicted.
    pub fn lifetime(&self) -> Option<Duration> {
        (self.lifetime_millis > 0).then(|| Duration::from_millis(self.lifetime_millis))
    }

    /// Whether the caller expects the detailed envelope rather than the bare value.
    pub fn requires_detailed_response(&self) -> bool {
        self.requires_detailed_response
    }

    pub fn evict(&self) -> EvictDirective {
        self.evict
    }

    pub fn is_expirable(&self) -> bool {
        self.expirable
    }
}
