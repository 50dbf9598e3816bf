//! Cachet - call configuration resolver for interception-driven caches
//!
//! An interception layer describes each intercepted call (its identity,
//! declared return shape, tagged arguments and metadata) as a
//! [`CallDescription`]. The [`Resolver`] turns that description into a
//! validated, immutable [`ProviderConfig`] telling the cache engine how to key,
//! expire, evict and wrap the call's result. Nothing downstream runs until
//! resolution succeeds.
//!
//! # Example
//!
//! ```rust
//! use cachet::{
//!     CallDescription, CallMetadata, DynamicKey, EvictDirective, Producer, Resolver,
//!     ReturnShape, TimeUnit,
//! };
//!
//! #[tokio::main]
//! async fn main() -> cachet::Result<()> {
//!     let resolver = Resolver::new();
//!
//!     let call = CallDescription::new("fetchUser", ReturnShape::detailed())
//!         .arg(DynamicKey::new(42))
//!         .arg(EvictDirective::dynamic_key(true))
//!         .arg(Producer::from_fn("users-api", || async { Ok("ada".to_string()) }))
//!         .metadata(CallMetadata::new().lifetime(5, TimeUnit::Minutes));
//!
//!     let config = resolver.resolve(&call)?;
//!     assert_eq!(config.lifetime_millis(), 300_000);
//!     assert!(config.requires_detailed_response());
//!
//!     let user = config.producer().produce().await?;
//!     println!("{user}");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod resolver;
pub mod telemetry;
pub mod types;

// Re-export main types at crate root
pub use config::MetadataTable;
pub use error::{CachetError, Result};
pub use resolver::{
    ProviderConfig, ResolutionObserver, ResolutionTracker, Resolver, ResolverBuilder,
};

// Re-export all types
pub use types::{
    Argument, CallDescription, CallMetadata, DynamicKey, DynamicKeyGroup, EvictDirective,
    EvictTarget, LifeCache, Payload, Produce, Producer, ReturnShape, Role, TimeUnit,
};
