//! # Seed Hosts Service
//!
//! - `SettingsBasedSeedHostsProvider` decides, once, which host entries and
//!   which per-address port limit the node uses.
//! - `SeedHostsResolver` turns those entries into addresses on every
//!   discovery round.

// Semantic submodules
mod provider;
mod resolver;

// Re-export public API
pub use provider::{check_invalid_ports, SettingsBasedSeedHostsProvider};
pub use resolver::{ResolverConfig, SeedHostsResolver};
