//! Domain errors for seed host configuration and resolution.

use std::io;
use std::time::Duration;

use thiserror::Error;

/// Errors raised while building seed host configuration.
///
/// All variants are fatal to startup: the operator must fix the
/// configuration before the node can take part in discovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A seed host entry uses port-range syntax where only `host[:port]` is allowed.
    #[error(
        "Configuration Setting {setting} does not support a range of ports, [{entry}] was found in provided seed hosts"
    )]
    InvalidConfiguration {
        /// Setting key the entry came from.
        setting: String,
        /// The offending entry, verbatim.
        entry: String,
    },

    /// A setting holds a value of the wrong shape.
    #[error("Failed to parse value [{value}] for setting [{key}]: {reason}")]
    InvalidSetting {
        /// Setting key.
        key: String,
        /// Raw value as found.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Settings file could not be read.
    #[error("Failed to read {path}: {error}")]
    Io {
        /// Path of the file that failed to load.
        path: String,
        /// Error message from the I/O operation.
        error: String,
    },

    /// Settings file could not be parsed.
    #[error("Failed to parse config: {0}")]
    Parse(String),
}

impl ConfigError {
    pub(crate) fn invalid_setting(
        key: &str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidSetting {
            key: key.to_string(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Syntax errors in a single host entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostSpecError {
    /// Entry is empty or whitespace.
    #[error("empty host entry")]
    Empty,

    /// Entry has a port part but no host part.
    #[error("missing host in [{0}]")]
    MissingHost(String),

    /// More than one `:` outside brackets and not an IPv6 literal.
    #[error("IPv6 addresses must be bracketed: {0}")]
    UnbracketedIpv6(String),

    /// `[` without a matching `]`, or junk after `]`.
    #[error("Invalid bracketed host/port range: {0}")]
    InvalidBracketedHost(String),

    /// Port or port range failed to parse.
    #[error("invalid port [{value}]: {reason}")]
    InvalidPort {
        /// The port text as written.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

/// A per-entry soft failure recorded during resolution.
///
/// These never abort a resolution call; the failing entry simply
/// contributes no addresses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionFailure {
    /// The entry could not be parsed.
    #[error("invalid seed host [{entry}]: {source}")]
    InvalidHostSpec {
        /// Raw entry.
        entry: String,
        /// Parse error.
        source: HostSpecError,
    },

    /// Name lookup failed.
    #[error("failed to resolve host [{host}] from [{entry}]: {message}")]
    Lookup {
        /// Raw entry.
        entry: String,
        /// Host part that was looked up.
        host: String,
        /// I/O error kind reported by the resolver.
        kind: io::ErrorKind,
        /// Resolver error message.
        message: String,
    },

    /// Lookup succeeded but returned no addresses.
    #[error("host [{host}] from [{entry}] resolved to no addresses")]
    NoAddresses {
        /// Raw entry.
        entry: String,
        /// Host part that was looked up.
        host: String,
    },

    /// Lookup did not finish before the deadline.
    #[error("timed out after [{timeout:?}] resolving host [{entry}]")]
    TimedOut {
        /// Raw entry.
        entry: String,
        /// Time budget that expired.
        timeout: Duration,
    },
}

impl ResolutionFailure {
    /// The raw host entry this failure belongs to.
    pub fn entry(&self) -> &str {
        match self {
            Self::InvalidHostSpec { entry, .. }
            | Self::Lookup { entry, .. }
            | Self::NoAddresses { entry, .. }
            | Self::TimedOut { entry, .. } => entry,
        }
    }

    pub(crate) fn lookup(entry: &str, host: &str, error: &io::Error) -> Self {
        Self::Lookup {
            entry: entry.to_string(),
            host: host.to_string(),
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}
