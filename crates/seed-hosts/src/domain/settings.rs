//! Setting keys, raw values, and typed readers.
//!
//! Readers take the raw value an adapter returned (or `None` when the key
//! is unset) and turn it into a typed value, so they stay free of I/O.

use std::time::Duration;

use super::{ConfigError, PortRange};

/// Seed host entries. Node scope, default empty list.
pub const DISCOVERY_SEED_HOSTS: &str = "discovery.seed_hosts";

/// Transport port or port range; its first port is the default seed port.
pub const TRANSPORT_PORT: &str = "transport.port";

/// Overall deadline for one resolution call.
pub const SEED_RESOLVER_TIMEOUT: &str = "discovery.seed_resolver.timeout";

/// Number of lookups that may run at once.
pub const SEED_RESOLVER_MAX_CONCURRENT: &str = "discovery.seed_resolver.max_concurrent_resolvers";

/// Default for [`TRANSPORT_PORT`].
pub const DEFAULT_TRANSPORT_PORTS: &str = "9300-9400";

/// Default for [`SEED_RESOLVER_TIMEOUT`].
pub const DEFAULT_RESOLVE_TIMEOUT: Duration = Duration::from_secs(5);

/// Default for [`SEED_RESOLVER_MAX_CONCURRENT`].
pub const DEFAULT_MAX_CONCURRENT_RESOLVERS: usize = 10;

/// A raw setting value as stored by a settings adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    /// Scalar text (numbers and durations are kept as text).
    Str(String),
    /// List of strings.
    List(Vec<String>),
    /// Present, but in a shape no reader accepts (a table, a nested list).
    /// Holds a rendering of the raw value for error messages.
    Invalid(String),
}

impl SettingValue {
    fn describe(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::List(items) => format!("[{}]", items.join(", ")),
            Self::Invalid(raw) => raw.clone(),
        }
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Vec<String>> for SettingValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<&str>> for SettingValue {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(str::to_string).collect())
    }
}

/// Read a list setting. A scalar is split on commas, with blanks dropped.
///
/// Returns `Ok(None)` only when the key is unset; an explicit empty list is
/// `Ok(Some(vec![]))`. A present value of the wrong shape is an error, never
/// treated as unset.
pub fn read_list(
    key: &str,
    value: Option<SettingValue>,
) -> Result<Option<Vec<String>>, ConfigError> {
    match value {
        None => Ok(None),
        Some(SettingValue::List(items)) => Ok(Some(items)),
        Some(SettingValue::Str(s)) => Ok(Some(
            s.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
        )),
        Some(SettingValue::Invalid(raw)) => Err(ConfigError::invalid_setting(
            key,
            raw,
            "expected a list of strings",
        )),
    }
}

/// Read a scalar setting, rejecting lists and malformed values.
fn read_scalar(key: &str, value: Option<SettingValue>) -> Result<Option<String>, ConfigError> {
    match value {
        None => Ok(None),
        Some(SettingValue::Str(s)) => Ok(Some(s.trim().to_string())),
        Some(other) => Err(ConfigError::invalid_setting(
            key,
            other.describe(),
            "expected a single value",
        )),
    }
}

/// Read a port or port range, falling back to `default`.
pub fn read_port_range(
    key: &str,
    value: Option<SettingValue>,
    default: &str,
) -> Result<PortRange, ConfigError> {
    let raw = read_scalar(key, value)?.unwrap_or_else(|| default.to_string());
    raw.parse::<PortRange>()
        .map_err(|e| ConfigError::invalid_setting(key, raw.clone(), e.to_string()))
}

/// Read a duration such as `5s`, `500ms` or `1m`.
pub fn read_duration(
    key: &str,
    value: Option<SettingValue>,
    default: Duration,
) -> Result<Duration, ConfigError> {
    match read_scalar(key, value)? {
        None => Ok(default),
        Some(raw) => humantime::parse_duration(&raw)
            .map_err(|e| ConfigError::invalid_setting(key, raw.clone(), e.to_string())),
    }
}

/// Read a strictly positive integer.
pub fn read_positive(
    key: &str,
    value: Option<SettingValue>,
    default: usize,
) -> Result<usize, ConfigError> {
    match read_scalar(key, value)? {
        None => Ok(default),
        Some(raw) => match raw.parse::<usize>() {
            Ok(0) => Err(ConfigError::invalid_setting(key, raw, "must be at least 1")),
            Ok(n) => Ok(n),
            Err(e) => Err(ConfigError::invalid_setting(key, raw.clone(), e.to_string())),
        },
    }
}
