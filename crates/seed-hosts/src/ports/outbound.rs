//! # Driven Ports (Outbound SPI)
//!
//! These are the interfaces this subsystem **requires** the host application
//! to implement. All of them are injected at construction; nothing here is
//! read from global state.

use std::io;

use crate::domain::{IpAddr, ResolutionLimit, ResolvedAddress, SettingValue};

/// Abstract interface for settings lookup.
///
/// Allows different configuration sources (file, environment, in-memory).
///
/// # Example Implementation
///
/// ```rust,ignore
/// struct EnvSettings;
///
/// impl SettingsSource for EnvSettings {
///     fn get(&self, key: &str) -> Option<SettingValue> {
///         let var = key.replace('.', "_").to_uppercase();
///         std::env::var(var).ok().map(SettingValue::Str)
///     }
/// }
/// ```
pub trait SettingsSource: Send + Sync {
    /// Raw value for `key`, or `None` when the operator did not set it.
    ///
    /// An explicitly empty list must be returned as
    /// `Some(SettingValue::List(vec![]))`, not `None`. A value the source
    /// cannot represent is `Some(SettingValue::Invalid(..))`, not `None`.
    fn get(&self, key: &str) -> Option<SettingValue>;
}

/// Source of the node's default local seed addresses.
///
/// Consulted only when `discovery.seed_hosts` is unset.
pub trait LocalAddressSource: Send + Sync {
    /// Host entries in the same syntax as configured seed hosts.
    fn local_addresses(&self) -> Vec<String>;
}

/// Abstract interface for name resolution.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; lookups for different entries
/// run on different threads.
pub trait NameResolver: Send + Sync {
    /// Resolve a host (name or literal, without brackets or port) to addresses.
    ///
    /// May block. The caller bounds the wait.
    fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}

/// Turns host entries into concrete addresses.
///
/// This is the collaborator a seed hosts provider hands its configuration to.
pub trait HostsResolver: Send + Sync {
    /// Resolve every entry, in order, enumerating at most `limit` ports per
    /// resolved address. Entries that fail contribute nothing.
    fn resolve_hosts(&self, hosts: &[String], limit: ResolutionLimit) -> Vec<ResolvedAddress>;
}
