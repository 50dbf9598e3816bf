//! Eviction directives passed alongside a call.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which cached entries an [`EvictDirective`] addresses.
///
/// Targets nest: a group target addresses a key within a group, so it needs
/// both a dynamic key and a group, while a key target needs only the key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvictTarget {
    /// Every entry stored under the provider key.
    ///
    /// This is the "no targeting" variant; with `evict = false` it is a no-op.
    #[default]
    Provider,
    /// The entry stored under the call's dynamic key.
    DynamicKey,
    /// The call's dynamic key within its group. Implies key targeting.
    Group,
}

impl EvictTarget {
    /// Whether the target needs the call to supply a dynamic key.
    pub fn addresses_key(self) -> bool {
        matches!(self, Self::DynamicKey | Self::Group)
    }

    /// Whether the target needs the call to supply a group.
    pub fn addresses_group(self) -> bool {
        self == Self::Group
    }
}

impl fmt::Display for EvictTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Provider => "provider",
            Self::DynamicKey => "dynamic_key",
            Self::Group => "group",
        })
    }
}

/// Declares whether invoking a call should also invalidate cached entries.
///
/// The directive only describes intent; applying it is the cache engine's
/// concern.
///
/// ```rust
/// # use cachet::{EvictDirective, EvictTarget};
/// let directive = EvictDirective::group(true);
/// assert_eq!(directive.target(), EvictTarget::Group);
/// assert!(directive.evicts());
///
/// assert!(!EvictDirective::default().evicts());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvictDirective {
    target: EvictTarget,
    evict: bool,
}

impl EvictDirective {
    pub fn new(target: EvictTarget, evict: bool) -> Self {
        Self { target, evict }
    }

    /// No eviction. Used when a call carries no directive.
    pub fn none() -> Self {
        Self::default()
    }

    /// Provider-wide directive; `evict = true` drops every entry of the provider.
    pub fn provider(evict: bool) -> Self {
        Self::new(EvictTarget::Provider, evict)
    }

    /// Key-scoped directive. Requires the call to supply a dynamic key.
    pub fn dynamic_key(evict: bool) -> Self {
        Self::new(EvictTarget::DynamicKey, evict)
    }

    /// Group-scoped directive. Requires the call to supply a dynamic key group
    /// with a non-empty key and group.
    pub fn group(evict: bool) -> Self {
        Self::new(EvictTarget::Group, evict)
    }

    pub fn target(&self) -> EvictTarget {
        self.target
    }

    pub fn evicts(&self) -> bool {
        self.evict
    }
}
