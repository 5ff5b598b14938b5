//! Domain Services - pure functions for port enumeration
//!
//! All functions here are deterministic: the same lookup answer always
//! produces the same addresses in the same order.

use std::collections::HashSet;

use super::{IpAddr, PortRange, ResolutionFailure, ResolutionLimit, ResolvedAddress};

/// Drop repeated addresses, keeping the first occurrence.
pub fn distinct_addresses<I>(addresses: I) -> Vec<IpAddr>
where
    I: IntoIterator<Item = IpAddr>,
{
    let mut seen = HashSet::new();
    addresses
        .into_iter()
        .filter(|ip| seen.insert(*ip))
        .collect()
}

/// Expand addresses into (address, port) pairs.
///
/// For each address, ports are taken from `ports.low()` upward until the
/// range ends or `limit` ports have been emitted for that address.
///
/// # Arguments
/// * `addresses` - Distinct addresses in lookup order
/// * `ports` - Port range to walk
/// * `limit` - Maximum ports per address
pub fn enumerate_ports(
    addresses: &[IpAddr],
    ports: PortRange,
    limit: ResolutionLimit,
) -> Vec<ResolvedAddress> {
    let per_address = ports.len().min(limit.get());
    addresses
        .iter()
        .flat_map(|ip| {
            ports
                .ports()
                .take(per_address)
                .map(move |port| ResolvedAddress::new(*ip, port))
        })
        .collect()
}

/// Outcome of one resolution call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionReport {
    /// Addresses in input order.
    pub addresses: Vec<ResolvedAddress>,
    /// Entries that contributed nothing, in input order.
    pub failures: Vec<ResolutionFailure>,
}

impl ResolutionReport {
    /// True when every entry resolved.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
