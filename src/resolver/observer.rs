//! Hooks for watching resolution outcomes.
//!
//! Observers see every outcome but cannot influence it: they run after the
//! result is decided and hold no lock the resolver waits on.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::CachetError;

/// Receives resolution outcomes from a [`Resolver`](crate::Resolver).
pub trait ResolutionObserver: Send + Sync {
    /// Called after a call resolved into a validated config.
    fn resolved(&self, _identity: &str) {}

    /// Called after a call was rejected.
    fn rejected(&self, _error: &CachetError) {}
}

/// Observer that records whether resolution has run and how often.
///
/// ```rust
/// # use std::sync::Arc;
/// # use cachet::{CallDescription, Producer, ResolutionTracker, Resolver, ReturnShape};
/// let tracker = Arc::new(ResolutionTracker::new());
/// let resolver = Resolver::builder().observer(tracker.clone()).build();
/// assert!(!tracker.has_resolved());
///
/// let call = CallDescription::new("fetchUsers", ReturnShape::raw()).arg(Producer::ready(1u32));
/// resolver.resolve(&call).unwrap();
/// assert!(tracker.has_resolved());
/// ```
#[derive(Debug, Default)]
pub struct ResolutionTracker {
    has_resolved: AtomicBool,
    resolved: AtomicU64,
    rejected: AtomicU64,
}

impl ResolutionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any call has resolved successfully.
    pub fn has_resolved(&self) -> bool {
        self.has_resolved.load(Ordering::Acquire)
    }

    pub fn resolved_count(&self) -> u64 {
        self.resolved.load(Ordering::Relaxed)
    }

    pub fn rejected_count(&self) -> u64 {
        self.rejected.load(Ordering::Relaxed)
    }
}

impl ResolutionObserver for ResolutionTracker {
    fn resolved(&self, _identity: &str) {
        self.resolved.fetch_add(1, Ordering::Relaxed);
        self.has_resolved.store(true, Ordering::Release);
    }

    fn rejected(&self, _error: &CachetError) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }
}
