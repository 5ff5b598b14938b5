//! # Driving Ports (Inbound API)
//!
//! The API this subsystem exposes to the discovery layer.

use crate::domain::ResolvedAddress;
use crate::ports::outbound::HostsResolver;

/// Supplies seed addresses for each discovery round.
///
/// # Example
///
/// ```rust,ignore
/// use seed_hosts::ports::{HostsResolver, SeedHostsProvider};
///
/// fn discovery_round(provider: &dyn SeedHostsProvider, resolver: &dyn HostsResolver) {
///     for addr in provider.seed_addresses(resolver) {
///         println!("probing {addr}");
///     }
/// }
/// ```
pub trait SeedHostsProvider: Send + Sync {
    /// Resolve the configured hosts with the provider's limit.
    ///
    /// Called once per discovery round. Implementations must not cache:
    /// host names may map to different addresses between rounds.
    fn seed_addresses(&self, resolver: &dyn HostsResolver) -> Vec<ResolvedAddress>;
}
