use std::io;
use std::net::ToSocketAddrs;

use crate::domain::{distinct_addresses, IpAddr};
use crate::ports::NameResolver;

/// System name resolution through the platform resolver (`getaddrinfo`).
///
/// Blocking. IP literals are answered without a network round trip.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemNameResolver;

impl SystemNameResolver {
    /// Create a system resolver.
    pub fn new() -> Self {
        Self
    }
}

impl NameResolver for SystemNameResolver {
    fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        // to_socket_addrs() needs a port; it is discarded.
        let addrs = (host, 0).to_socket_addrs()?;
        Ok(distinct_addresses(addrs.map(|addr| IpAddr::from(addr.ip()))))
    }
}
