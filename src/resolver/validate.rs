//! Cross-field integrity rules for a candidate [`ProviderConfig`].

use super::descriptor::ProviderConfig;
use crate::{CachetError, Result};

/// Accept `config` or report the first violated rule.
///
/// Rules, in order:
/// 1. group eviction needs a non-empty group;
/// 2. key or group eviction needs a non-empty dynamic key.
pub fn validate<T>(config: ProviderConfig<T>) -> Result<ProviderConfig<T>> {
    let target = config.evict().target();

    if target.addresses_group() && config.group().is_empty() {
        return Err(CachetError::EvictGroupWithoutGroupKey {
            identity: config.provider_key().to_string(),
        });
    }

    if target.addresses_key() && config.dynamic_key().is_empty() {
        return Err(CachetError::EvictKeyWithoutDynamicKey {
            identity: config.provider_key().to_string(),
        });
    }

    Ok(config)
}
