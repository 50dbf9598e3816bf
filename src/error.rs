//! Cachet error types

use crate::types::Role;

/// Cachet error types
#[derive(Debug, thiserror::Error)]
pub enum CachetError {
    // Argument classification errors
    #[error("{identity}: requires exactly one producer argument, none was supplied")]
    MissingProducer { identity: String },

    #[error("{identity}: only one argument of role {role} is allowed")]
    DuplicateRoleArgument { identity: String, role: Role },

    // Declaration errors
    #[error("{identity}: declared return shape '{declared}' is not an async producer shape")]
    InvalidReturnShape { identity: String, declared: String },

    #[error("{identity}: lifetime duration must not be negative (got {duration})")]
    NegativeLifetimeDuration { identity: String, duration: i64 },

    // Integrity errors
    #[error("{identity}: group eviction requested but no dynamic key group was supplied")]
    EvictGroupWithoutGroupKey { identity: String },

    #[error("{identity}: key eviction requested but no dynamic key was supplied")]
    EvictKeyWithoutDynamicKey { identity: String },

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Failure reported by a producer while computing its value.
    #[error("producer error: {0}")]
    Producer(String),
}

impl CachetError {
    /// Call identity the error was raised for, if it came from resolution.
    pub fn identity(&self) -> Option<&str> {
        match self {
            Self::MissingProducer { identity }
            | Self::DuplicateRoleArgument { identity, .. }
            | Self::InvalidReturnShape { identity, .. }
            | Self::NegativeLifetimeDuration { identity, .. }
            | Self::EvictGroupWithoutGroupKey { identity }
            | Self::EvictKeyWithoutDynamicKey { identity } => Some(identity),
            Self::Configuration(_) | Self::Producer(_) => None,
        }
    }

    /// Stable snake_case name of the violated rule.
    ///
    /// Used as the `rule` label on [`RESOLUTION_ERRORS_TOTAL`](crate::telemetry::RESOLUTION_ERRORS_TOTAL).
    pub fn rule(&self) -> &'static str {
        match self {
            Self::MissingProducer { .. } => "missing_producer",
            Self::DuplicateRoleArgument { .. } => "duplicate_role_argument",
            Self::InvalidReturnShape { .. } => "invalid_return_shape",
            Self::NegativeLifetimeDuration { .. } => "negative_lifetime_duration",
            Self::EvictGroupWithoutGroupKey { .. } => "evict_group_without_group_key",
            Self::EvictKeyWithoutDynamicKey { .. } => "evict_key_without_dynamic_key",
            Self::Configuration(_) => "configuration",
            Self::Producer(_) => "producer",
        }
    }

    /// Whether this error stems from a structurally invalid call declaration.
    ///
    /// Such errors are permanent: retrying the same call cannot succeed.
    pub fn is_resolution_error(&self) -> bool {
        self.identity().is_some()
    }
}

/// Result type alias for Cachet operations
pub type Result<T> = std::result::Result<T, CachetError>;
