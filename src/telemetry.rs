//! Telemetry metric name constants.
//!
//! Centralised metric names for cachet operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `cachet_`. Counters end in `_total`.
//!
//! # Common labels
//!
//! - `provider` — call identity (provider key)
//! - `status` — outcome: "ok" or "error"
//! - `rule` — violated rule, see [`CachetError::rule()`](crate::CachetError::rule)

/// Total call resolutions attempted.
///
/// Labels: `provider`, `status` ("ok" | "error").
pub const RESOLUTIONS_TOTAL: &str = "cachet_resolutions_total";

/// Total rejected resolutions, broken down by violated rule.
///
/// Labels: `provider`, `rule`.
pub const RESOLUTION_ERRORS_TOTAL: &str = "cachet_resolution_errors_total";
