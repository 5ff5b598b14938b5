//! # Seed Hosts
//!
//! Turns the statically configured `discovery.seed_hosts` list into the
//! addresses a node contacts when it bootstraps cluster discovery. When no
//! seed hosts are configured, it falls back to well-known local addresses.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture with:
//! - **Domain Layer:** host entry parsing, port enumeration, typed settings
//! - **Ports Layer:** trait definitions for settings, local addresses, name
//!   resolution, and the provider API
//! - **Service Layer:** `SettingsBasedSeedHostsProvider` and `SeedHostsResolver`
//! - **Adapters Layer:** in-memory and TOML settings, loopback fallbacks,
//!   system name resolution
//!
//! ## Policy
//!
//! | `discovery.seed_hosts` | hosts used | ports per address |
//! |---|---|---|
//! | set (even `[]`) | the configured entries | 1 |
//! | unset | local addresses | 5 |
//!
//! Configured entries may not contain `-`; the resolver itself does accept
//! `host:low-high` ranges from other callers.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use seed_hosts::{
//!     MapSettings, ResolverConfig, SeedHostsProvider, SeedHostsResolver,
//!     SettingsBasedSeedHostsProvider, StaticLocalAddresses, SystemNameResolver,
//! };
//!
//! let settings = MapSettings::new()
//!     .with_list("discovery.seed_hosts", ["67.81.244.10", "67.81.244.11:9305"]);
//! let provider =
//!     SettingsBasedSeedHostsProvider::new(&settings, &StaticLocalAddresses::default()).unwrap();
//! assert_eq!(provider.limit().get(), 1);
//!
//! let resolver = SeedHostsResolver::new(
//!     Arc::new(SystemNameResolver::new()),
//!     ResolverConfig::from_settings(&settings).unwrap(),
//! );
//! let addresses = provider.seed_addresses(&resolver);
//! assert_eq!(addresses[0].to_string(), "67.81.244.10:9300");
//! assert_eq!(addresses[1].to_string(), "67.81.244.11:9305");
//! ```

// =============================================================================
// CORE MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Scripted port implementations for tests.
/// Requires feature: `test-utils`
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// =============================================================================
// RE-EXPORTS
// =============================================================================

// Domain
pub use domain::{
    ConfigError, HostSpec, HostSpecError, IpAddr, PortRange, ResolutionFailure,
    ResolutionLimit, ResolutionReport, ResolvedAddress, SeedHostsConfig, SettingValue,
};

// Setting keys
pub use domain::{
    DISCOVERY_SEED_HOSTS, SEED_RESOLVER_MAX_CONCURRENT, SEED_RESOLVER_TIMEOUT, TRANSPORT_PORT,
};

// Port traits
pub use ports::{HostsResolver, LocalAddressSource, NameResolver, SeedHostsProvider, SettingsSource};

// Service
pub use service::{
    check_invalid_ports, ResolverConfig, SeedHostsResolver, SettingsBasedSeedHostsProvider,
};

// Adapters
pub use adapters::{LoopbackLocalAddresses, MapSettings, StaticLocalAddresses, SystemNameResolver};

#[cfg(feature = "config")]
pub use adapters::TomlSettings;
