//! End-to-end tests for [`Resolver::resolve`].

use std::sync::Arc;
use std::thread;

use cachet::{
    Argument, CachetError, CallDescription, CallMetadata, DynamicKey, DynamicKeyGroup,
    EvictDirective, MetadataTable, Producer, Resolver, ReturnShape, Role, TimeUnit,
};

fn call(identity: &str) -> CallDescription<String> {
    CallDescription::new(identity, ReturnShape::raw())
}

fn producer() -> Producer<String> {
    Producer::ready("value".to_string())
}

// ============================================================================
// Keys
// ============================================================================

#[test]
fn dynamic_key_only() {
    let c = call("fetchUser").arg(DynamicKey::new(7)).arg(producer());
    let config = Resolver::new().resolve(&c).unwrap();

    assert_eq!(config.provider_key(), "fetchUser");
    assert_eq!(config.dynamic_key(), "7");
    assert_eq!(config.group(), "");
}

#[test]
fn grouped_key_only() {
    let c = call("fetchUser")
        .arg(DynamicKeyGroup::new("k", "g"))
        .arg(producer());
    let config = Resolver::new().resolve(&c).unwrap();

    assert_eq!(config.dynamic_key(), "k");
    assert_eq!(config.group(), "g");
}

#[test]
fn dynamic_key_and_grouped_key_together_are_allowed() {
    let c = call("fetchUser")
        .arg(DynamicKeyGroup::new("grouped", "g"))
        .arg(DynamicKey::new("solo"))
        .arg(producer());
    let config = Resolver::new().resolve(&c).unwrap();

    assert_eq!(config.dynamic_key(), "solo");
    assert_eq!(config.group(), "g");
}

#[test]
fn no_keys_is_valid() {
    let config = Resolver::new()
        .resolve(&call("fetchAll").arg(producer()))
        .unwrap();

    assert_eq!(config.dynamic_key(), "");
    assert_eq!(config.group(), "");
    assert_eq!(config.evict(), EvictDirective::none());
    assert_eq!(config.lifetime_millis(), 0);
    assert_eq!(config.lifetime(), None);
    assert!(config.is_expirable());
    assert!(!config.requires_detailed_response());
}

#[test]
fn roleless_arguments_are_ignored() {
    let c = call("search")
        .arg(Argument::other("String"))
        .arg(producer())
        .arg(Argument::other("String"));
    assert!(Resolver::new().resolve(&c).is_ok());
}

// ============================================================================
// Argument errors
// ============================================================================

#[test]
fn duplicate_dynamic_keys_rejected() {
    let c = call("fetchUser")
        .arg(DynamicKey::new(1))
        .arg(DynamicKey::new(2))
        .arg(producer());
    let err = Resolver::new().resolve(&c).unwrap_err();

    assert!(matches!(
        err,
        CachetError::DuplicateRoleArgument { role: Role::DynamicKey, .. }
    ));
    assert_eq!(err.identity(), Some("fetchUser"));
    assert!(err.to_string().contains("DynamicKey"));
}

#[test]
fn duplicate_grouped_keys_rejected() {
    let c = call("fetchUser")
        .arg(DynamicKeyGroup::new(1, "a"))
        .arg(DynamicKeyGroup::new(2, "b"))
        .arg(producer());
    let err = Resolver::new().resolve(&c).unwrap_err();

    assert!(matches!(
        err,
        CachetError::DuplicateRoleArgument { role: Role::DynamicKeyGroup, .. }
    ));
}

#[test]
fn duplicate_evict_directives_rejected() {
    let c = call("fetchUser")
        .arg(EvictDirective::provider(true))
        .arg(EvictDirective::provider(false))
        .arg(producer());
    let err = Resolver::new().resolve(&c).unwrap_err();

    assert!(matches!(
        err,
        CachetError::DuplicateRoleArgument { role: Role::EvictDirective, .. }
    ));
}

#[test]
fn missing_producer_rejected() {
    let c = call("fetchUser").arg(DynamicKey::new(1));
    let err = Resolver::new().resolve(&c).unwrap_err();

    assert!(matches!(err, CachetError::MissingProducer { .. }));
    assert!(err.to_string().starts_with("fetchUser"));
}

// ============================================================================
// Return shape
// ============================================================================

#[test]
fn detailed_shape() {
    let c = CallDescription::new("fetchUser", ReturnShape::detailed()).arg(producer());
    let config = Resolver::new().resolve(&c).unwrap();
    assert!(config.requires_detailed_response());
}

#[test]
fn non_async_shape_rejected() {
    let c = CallDescription::new("fetchUser", ReturnShape::Other("List".to_string())).arg(producer());
    let err = Resolver::new().resolve(&c).unwrap_err();
    assert!(matches!(err, CachetError::InvalidReturnShape { .. }));
    assert!(err.to_string().contains("List"));
}

#[test]
fn duplicate_argument_reported_before_invalid_shape() {
    let c = CallDescription::new("fetchUser", ReturnShape::Other("List".to_string()))
        .arg(DynamicKeyGroup::new(1, "a"))
        .arg(DynamicKeyGroup::new(2, "b"))
        .arg(producer());
    let err = Resolver::new().resolve(&c).unwrap_err();
    assert!(matches!(err, CachetError::DuplicateRoleArgument { .. }));
}

#[test]
fn invalid_shape_reported_before_duplicate_evict_directives() {
    let c = CallDescription::new("fetchUser", ReturnShape::Other("List".to_string()))
        .arg(EvictDirective::provider(true))
        .arg(EvictDirective::provider(false))
        .arg(producer());
    let err = Resolver::new().resolve(&c).unwrap_err();
    assert!(matches!(err, CachetError::InvalidReturnShape { .. }));
}

#[test]
fn missing_producer_reported_before_duplicate_evict_directives() {
    let c = call("fetchUser")
        .arg(EvictDirective::provider(true))
        .arg(EvictDirective::provider(false));
    let err = Resolver::new().resolve(&c).unwrap_err();
    assert!(matches!(err, CachetError::MissingProducer { .. }));
}

#[test]
fn negative_lifetime_reported_before_invalid_shape() {
    let c = CallDescription::new("fetchUser", ReturnShape::Other("List".to_string()))
        .arg(producer())
        .metadata(CallMetadata::new().lifetime(-5, TimeUnit::Seconds));
    let err = Resolver::new().resolve(&c).unwrap_err();
    assert!(matches!(
        err,
        CachetError::NegativeLifetimeDuration { duration: -5, .. }
    ));
}

// ============================================================================
// Metadata
// ============================================================================

#[test]
fn lifetime_in_minutes() {
    let c = call("fetchUser")
        .arg(producer())
        .metadata(CallMetadata::new().lifetime(5, TimeUnit::Minutes));
    let config = Resolver::new().resolve(&c).unwrap();
    assert_eq!(config.lifetime_millis(), 300_000);
    assert_eq!(config.lifetime(), Some(std::time::Duration::from_secs(300)));
}

#[test]
fn expirable_false() {
    let c = call("fetchUser")
        .arg(producer())
        .metadata(CallMetadata::new().expirable(false));
    let config = Resolver::new().resolve(&c).unwrap();
    assert!(!config.is_expirable());
}

#[test]
fn table_metadata_used_when_call_has_none() {
    let mut table = MetadataTable::new();
    table.insert(
        "fetchUser",
        CallMetadata::new()
            .lifetime(2, TimeUnit::Seconds)
            .expirable(false),
    );
    let resolver = Resolver::builder().metadata(table).build();

    let config = resolver.resolve(&call("fetchUser").arg(producer())).unwrap();
    assert_eq!(config.lifetime_millis(), 2_000);
    assert!(!config.is_expirable());

    let other = resolver.resolve(&call("fetchTeam").arg(producer())).unwrap();
    assert_eq!(other.lifetime_millis(), 0);
}

#[test]
fn attached_metadata_wins_over_table() {
    let mut table = MetadataTable::new();
    table.insert("fetchUser", CallMetadata::new().lifetime(2, TimeUnit::Seconds));
    let resolver = Resolver::builder().metadata(table).build();

    let c = call("fetchUser")
        .arg(producer())
        .metadata(CallMetadata::new().expirable(false));
    let config = resolver.resolve(&c).unwrap();

    assert_eq!(config.lifetime_millis(), 0);
    assert!(!config.is_expirable());
}

// ============================================================================
// Integrity
// ============================================================================

#[test]
fn group_eviction_without_group_rejected() {
    let c = call("evictTeam")
        .arg(DynamicKey::new(1))
        .arg(EvictDirective::group(false))
        .arg(producer());
    let err = Resolver::new().resolve(&c).unwrap_err();
    assert!(matches!(err, CachetError::EvictGroupWithoutGroupKey { .. }));
}

#[test]
fn group_eviction_with_group_accepted() {
    let c = call("evictTeam")
        .arg(DynamicKeyGroup::new(1, "teamA"))
        .arg(EvictDirective::group(true))
        .arg(producer());
    let config = Resolver::new().resolve(&c).unwrap();
    assert_eq!(config.evict(), EvictDirective::group(true));
}

#[test]
fn group_eviction_with_empty_key_rejected() {
    let c = call("evictTeam")
        .arg(DynamicKeyGroup::new("", "teamA"))
        .arg(EvictDirective::group(true))
        .arg(producer());
    let err = Resolver::new().resolve(&c).unwrap_err();
    assert!(matches!(err, CachetError::EvictKeyWithoutDynamicKey { .. }));
    assert_eq!(err.identity(), Some("evictTeam"));
}

#[test]
fn group_eviction_with_empty_key_and_group_reports_group_first() {
    let c = call("evictTeam")
        .arg(DynamicKeyGroup::new("", ""))
        .arg(EvictDirective::group(true))
        .arg(producer());
    let err = Resolver::new().resolve(&c).unwrap_err();
    assert!(matches!(err, CachetError::EvictGroupWithoutGroupKey { .. }));
}

#[test]
fn key_eviction_without_key_rejected() {
    let c = call("evictUser")
        .arg(EvictDirective::dynamic_key(true))
        .arg(producer());
    let err = Resolver::new().resolve(&c).unwrap_err();
    assert!(matches!(err, CachetError::EvictKeyWithoutDynamicKey { .. }));
}

#[test]
fn key_eviction_with_grouped_key_accepted() {
    let c = call("evictUser")
        .arg(DynamicKeyGroup::new(1, "teamA"))
        .arg(EvictDirective::dynamic_key(true))
        .arg(producer());
    assert!(Resolver::new().resolve(&c).is_ok());
}

#[test]
fn provider_eviction_needs_no_keys() {
    let c = call("evictAll")
        .arg(EvictDirective::provider(true))
        .arg(producer());
    let config = Resolver::new().resolve(&c).unwrap();
    assert!(config.evict().evicts());
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn resolving_twice_yields_equal_configs() {
    let c = call("fetchUser")
        .arg(DynamicKeyGroup::new(3, "g"))
        .arg(producer())
        .metadata(CallMetadata::new().lifetime(1, TimeUnit::Days));
    let resolver = Resolver::new();

    let first = resolver.resolve(&c).unwrap();
    let second = resolver.resolve(&c.clone()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn concurrent_resolutions_are_independent() {
    let resolver = Arc::new(Resolver::new());
    let mut handles = Vec::new();

    for i in 0..8 {
        let resolver = Arc::clone(&resolver);
        handles.push(thread::spawn(move || {
            let c = call("fetchUser").arg(DynamicKey::new(i)).arg(producer());
            resolver.resolve(&c).unwrap().dynamic_key().to_string()
        }));
    }

    let mut keys: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .collect();
    keys.sort();
    assert_eq!(keys, (0..8).map(|i| i.to_string()).collect::<Vec<_>>());
}

#[test]
fn fetch_users_scenario() {
    let p = producer();
    let c = call("fetchUsers")
        .arg(DynamicKeyGroup::new("42", "teamA"))
        .arg(EvictDirective::group(false))
        .arg(p.clone())
        .metadata(
            CallMetadata::new()
                .lifetime(1, TimeUnit::Hours)
                .expirable(true),
        );
    let config = Resolver::new().resolve(&c).unwrap();

    assert_eq!(config.provider_key(), "fetchUsers");
    assert_eq!(config.dynamic_key(), "42");
    assert_eq!(config.group(), "teamA");
    assert_eq!(config.producer(), &p);
    assert_eq!(config.lifetime_millis(), 3_600_000);
    assert!(!config.requires_detailed_response());
    assert_eq!(config.evict(), EvictDirective::group(false));
    assert!(config.is_expirable());
}
