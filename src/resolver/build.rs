//! Assembly of a candidate [`ProviderConfig`] from classified arguments.

use super::classify::Classified;
use super::descriptor::ProviderConfig;
use super::metadata::MetadataReading;
use crate::types::{EvictDirective, Payload, ReturnShape};
use crate::{CachetError, Result};

/// Whether the declared shape asks for the detailed envelope.
///
/// Fails with `InvalidReturnShape` when the call does not return the async
/// producer shape at all.
pub fn requires_detailed_response(identity: &str, return_shape: &ReturnShape) -> Result<bool> {
    match return_shape {
        ReturnShape::Async(payload) => Ok(*payload == Payload::Detailed),
        ReturnShape::Other(declared) => Err(CachetError::InvalidReturnShape {
            identity: identity.to_string(),
            declared: declared.clone(),
        }),
    }
}

/// Combine call identity, return shape, arguments and metadata.
///
/// The key comes from the dynamic key when present, otherwise from the
/// dynamic key group. The group only ever comes from the dynamic key group.
pub fn build<T>(
    identity: &str,
    return_shape: &ReturnShape,
    classified: Classified<T>,
    evict: EvictDirective,
    metadata: MetadataReading,
) -> Result<ProviderConfig<T>> {
    let requires_detailed_response = requires_detailed_response(identity, return_shape)?;

    let Classified {
        dynamic_key,
        dynamic_key_group,
        producer,
    } = classified;

    let key = match (&dynamic_key, &dynamic_key_group) {
        (Some(key), _) => key.key().to_string(),
        (None, Some(grouped)) => grouped.key().to_string(),
        (None, None) => String::new(),
    };
    let group = dynamic_key_group
        .map(|grouped| grouped.group().to_string())
        .unwrap_or_default();

    Ok(ProviderConfig::new(
        identity.to_string(),
        key,
        group,
        producer,
        metadata.lifetime_millis,
        requires_detailed_response,
        evict,
        metadata.expirable,
    ))
}
