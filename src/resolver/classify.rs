//! Argument classification by role tag.

use crate::types::{Argument, DynamicKey, DynamicKeyGroup, EvictDirective, Producer, Role};
use crate::{CachetError, Result};

/// The role-bearing arguments picked out of a call.
#[derive(Debug, Clone, PartialEq)]
pub struct Classified<T> {
    pub dynamic_key: Option<DynamicKey>,
    pub dynamic_key_group: Option<DynamicKeyGroup>,
    pub producer: Producer<T>,
}

/// Pick out the keys and the producer.
///
/// Roles are checked in a fixed order: dynamic key, dynamic key group,
/// producer. The first violation wins. The eviction directive is picked
/// separately by [`classify_evict`], after the return shape is checked.
pub fn classify<T>(identity: &str, arguments: &[Argument<T>]) -> Result<Classified<T>> {
    let dynamic_key = single(identity, arguments, Role::DynamicKey, |arg| match arg {
        Argument::DynamicKey(key) => Some(key),
        _ => None,
    })?;

    let dynamic_key_group = single(identity, arguments, Role::DynamicKeyGroup, |arg| match arg {
        Argument::DynamicKeyGroup(key) => Some(key),
        _ => None,
    })?;

    let producer = single(identity, arguments, Role::Producer, |arg| match arg {
        Argument::Producer(producer) => Some(producer),
        _ => None,
    })?
    .ok_or_else(|| CachetError::MissingProducer {
        identity: identity.to_string(),
    })?;

    Ok(Classified {
        dynamic_key: dynamic_key.cloned(),
        dynamic_key_group: dynamic_key_group.cloned(),
        producer: producer.clone(),
    })
}

/// Pick out the eviction directive, [`EvictDirective::none()`] when absent.
pub fn classify_evict<T>(identity: &str, arguments: &[Argument<T>]) -> Result<EvictDirective> {
    let evict = single(identity, arguments, Role::EvictDirective, |arg| match arg {
        Argument::Evict(directive) => Some(directive),
        _ => None,
    })?;
    Ok(evict.copied().unwrap_or_default())
}

/// Return the only argument `pick` accepts, `None` if there is none.
fn single<'a, T, R>(
    identity: &str,
    arguments: &'a [Argument<T>],
    role: Role,
    pick: impl Fn(&'a Argument<T>) -> Option<&'a R>,
) -> Result<Option<&'a R>> {
    let mut matches = arguments.iter().filter_map(pick);
    let first = matches.next();
    if matches.next().is_some() {
        return Err(CachetError::DuplicateRoleArgument {
            identity: identity.to_string(),
            role,
        });
    }
    Ok(first)
}
