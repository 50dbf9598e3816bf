//! The async computation a cached call wraps.
//!
//! A call hands its data source to the cache as a [`Producer`]. The resolver
//! never runs it; it only checks that exactly one is present and passes it on
//! inside the [`ProviderConfig`](crate::ProviderConfig). The cache engine decides
//! whether the producer is invoked (miss, expiry) or skipped (hit).
//!
//! Producers are re-invocable: [`Produce::produce`] takes `&self`, so the same
//! producer can be run again after an eviction.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::Result;

/// Source of the value a call caches.
#[async_trait]
pub trait Produce<T>: Send + Sync {
    /// Producer name for logging/debugging.
    fn name(&self) -> &str {
        "producer"
    }

    /// Compute a fresh value.
    ///
    /// Failures should be reported as [`CachetError::Producer`](crate::CachetError::Producer).
    async fn produce(&self) -> Result<T>;
}

/// Adapter turning a closure that returns a future into a [`Produce`] impl.
struct FnProducer<F> {
    name: String,
    f: F,
}

#[async_trait]
impl<T, F, Fut> Produce<T> for FnProducer<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<T>> + Send + 'static,
    T: Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn produce(&self) -> Result<T> {
        (self.f)().await
    }
}

/// Shared handle to a call's producer.
///
/// Cloning is cheap and yields a handle to the same producer; two handles
/// compare equal only when they point at the same producer.
///
/// ```rust
/// # use cachet::Producer;
/// # async fn run() -> cachet::Result<()> {
/// let producer = Producer::from_fn("users", || async { Ok(vec!["ada", "grace"]) });
/// let users = producer.produce().await?;
/// assert_eq!(users.len(), 2);
/// # Ok(())
/// # }
/// ```
pub struct Producer<T> {
    inner: Arc<dyn Produce<T>>,
}

impl<T> Producer<T> {
    /// Wrap an existing [`Produce`] implementation.
    pub fn new(inner: impl Produce<T> + 'static) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Build a producer from a closure returning a future.
    pub fn from_fn<F, Fut>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
        T: Send + 'static,
    {
        Self::new(FnProducer {
            name: name.into(),
            f,
        })
    }

    /// Producer that always yields a clone of `value`.
    pub fn ready(value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        Self::from_fn("ready", move || {
            let value = value.clone();
            async move { Ok(value) }
        })
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Run the producer once.
    pub async fn produce(&self) -> Result<T> {
        self.inner.produce().await
    }
}

impl<T> Clone for Producer<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for Producer<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> fmt::Debug for Producer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Producer")
            .field("name", &self.name())
            .finish()
    }
}
