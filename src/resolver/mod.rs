//! Resolution of intercepted calls into validated [`ProviderConfig`]s.
//!
//! # Pipeline
//!
//! ```text
//! CallDescription ── classify ── metadata ── shape ── classify_evict ── build ── validate
//! ```
//!
//! 1. [`classify::classify`] picks the dynamic key, dynamic key group and
//!    producer out of the arguments (at most one each).
//! 2. [`metadata`] normalizes lifetime to milliseconds and defaults
//!    expirability.
//! 3. [`build::requires_detailed_response`] checks the return shape.
//! 4. [`classify::classify_evict`] picks the eviction directive.
//! 5. [`build::build`] assembles the candidate config.
//! 6. [`validate`] applies the eviction integrity rules.
//!
//! Errors are reported in that order: key and producer errors first, then
//! metadata, then return shape, then a duplicate eviction directive, then
//! integrity. Every step is synchronous and pure, so
//! one [`Resolver`] can be shared across threads without coordination.

pub mod build;
pub mod classify;
mod descriptor;
pub mod metadata;
mod observer;
pub mod validate;

pub use descriptor::ProviderConfig;
pub use observer::{ResolutionObserver, ResolutionTracker};

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::config::MetadataTable;
use crate::telemetry;
use crate::types::CallDescription;
use crate::Result;

/// Turns intercepted calls into validated [`ProviderConfig`]s.
///
/// ```rust
/// # use cachet::{
/// #     CallDescription, CallMetadata, DynamicKeyGroup, EvictDirective, Producer, Resolver,
/// #     ReturnShape, TimeUnit,
/// # };
/// let resolver = Resolver::new();
/// let call = CallDescription::new("fetchUsers", ReturnShape::raw())
///     .arg(DynamicKeyGroup::new(42, "teamA"))
///     .arg(EvictDirective::group(false))
///     .arg(Producer::ready(vec!["ada".to_string()]))
///     .metadata(CallMetadata::new().lifetime(1, TimeUnit::Hours));
///
/// let config = resolver.resolve(&call)?;
/// assert_eq!(config.dynamic_key(), "42");
/// assert_eq!(config.group(), "teamA");
/// assert_eq!(config.lifetime_millis(), 3_600_000);
/// # Ok::<(), cachet::CachetError>(())
/// ```
#[derive(Default)]
pub struct Resolver {
    metadata: MetadataTable,
    observers: Vec<Arc<dyn ResolutionObserver>>,
}

impl Resolver {
    /// Resolver with no metadata table and no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for configuring the resolver.
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::new()
    }

    /// Resolve one intercepted call.
    ///
    /// Metadata attached to the call wins over the metadata table.
    #[instrument(skip_all, fields(identity = %call.identity()))]
    pub fn resolve<T>(&self, call: &CallDescription<T>) -> Result<ProviderConfig<T>> {
        let identity = call.identity();
        match self.resolve_inner(call) {
            Ok(config) => {
                metrics::counter!(telemetry::RESOLUTIONS_TOTAL,
                    "provider" => identity.to_owned(),
                    "status" => "ok",
                )
                .increment(1);
                debug!(
                    key = config.dynamic_key(),
                    group = config.group(),
                    lifetime_ms = config.lifetime_millis(),
                    detailed = config.requires_detailed_response(),
                    evict_target = %config.evict().target(),
                    evict = config.evict().evicts(),
                    expirable = config.is_expirable(),
                    "resolved call"
                );
                for observer in &self.observers {
                    observer.resolved(identity);
                }
                Ok(config)
            }
            Err(e) => {
                metrics::counter!(telemetry::RESOLUTIONS_TOTAL,
                    "provider" => identity.to_owned(),
                    "status" => "error",
                )
                .increment(1);
                metrics::counter!(telemetry::RESOLUTION_ERRORS_TOTAL,
                    "provider" => identity.to_owned(),
                    "rule" => e.rule(),
                )
                .increment(1);
                warn!(rule = e.rule(), error = %e, "rejected call");
                for observer in &self.observers {
                    observer.rejected(&e);
                }
                Err(e)
            }
        }
    }

    fn resolve_inner<T>(&self, call: &CallDescription<T>) -> Result<ProviderConfig<T>> {
        let identity = call.identity();
        let metadata = call
            .attached_metadata()
            .or_else(|| self.metadata.get(identity));

        let classified = classify::classify(identity, call.arguments())?;
        let reading = metadata::read(identity, metadata)?;
        build::requires_detailed_response(identity, call.return_shape())?;
        let evict = classify::classify_evict(identity, call.arguments())?;
        let candidate = build::build(identity, call.return_shape(), classified, evict, reading)?;
        validate::validate(candidate)
    }
}

/// Builder for configuring a [`Resolver`].
#[derive(Default)]
pub struct ResolverBuilder {
    metadata: MetadataTable,
    observers: Vec<Arc<dyn ResolutionObserver>>,
}

impl ResolverBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fallback metadata for calls that carry none.
    pub fn metadata(mut self, table: MetadataTable) -> Self {
        self.metadata = table;
        self
    }

    /// Register an observer. Observers are notified in registration order.
    pub fn observer(mut self, observer: Arc<dyn ResolutionObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn build(self) -> Resolver {
        Resolver {
            metadata: self.metadata,
            observers: self.observers,
        }
    }
}
