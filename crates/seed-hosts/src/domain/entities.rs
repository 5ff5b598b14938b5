//! Core domain entities for seed host resolution.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// IP address enum supporting both IPv4 and IPv6, stored as raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpAddr {
    /// IPv4 address (4 bytes).
    V4([u8; 4]),
    /// IPv6 address (16 bytes).
    V6([u8; 16]),
}

impl IpAddr {
    /// Create an IPv4 address
    pub fn v4(a: u8, b: u8, c: u8, d: u8) -> Self {
        IpAddr::V4([a, b, c, d])
    }

    /// Create an IPv6 address from bytes
    pub fn v6(bytes: [u8; 16]) -> Self {
        IpAddr::V6(bytes)
    }

    /// IPv6 loopback (`::1`).
    pub fn v6_loopback() -> Self {
        let mut bytes = [0u8; 16];
        bytes[15] = 1;
        IpAddr::V6(bytes)
    }

    /// Check if this is an IPv4 address
    pub fn is_ipv4(&self) -> bool {
        matches!(self, IpAddr::V4(_))
    }

    /// Check if this is an IPv6 address
    pub fn is_ipv6(&self) -> bool {
        matches!(self, IpAddr::V6(_))
    }

    /// Raw network-order bytes (4 or 16).
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            IpAddr::V4(bytes) => bytes.as_slice(),
            IpAddr::V6(bytes) => bytes.as_slice(),
        }
    }
}

/// Byte-wise comparison. A 4-byte address sorts before a 16-byte address
/// sharing the same prefix.
impl Ord for IpAddr {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl PartialOrd for IpAddr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<std::net::IpAddr> for IpAddr {
    fn from(ip: std::net::IpAddr) -> Self {
        match ip {
            std::net::IpAddr::V4(v4) => IpAddr::V4(v4.octets()),
            std::net::IpAddr::V6(v6) => IpAddr::V6(v6.octets()),
        }
    }
}

impl From<IpAddr> for std::net::IpAddr {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(bytes) => std::net::IpAddr::from(bytes),
            IpAddr::V6(bytes) => std::net::IpAddr::from(bytes),
        }
    }
}

impl fmt::Display for IpAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", std::net::IpAddr::from(*self))
    }
}

/// A concrete (IP, port) pair produced by seed host resolution.
///
/// Equality and ordering follow the raw address bytes first, then the port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedAddress {
    /// IP address (v4 or v6).
    pub ip: IpAddr,
    /// Port number.
    pub port: u16,
}

impl ResolvedAddress {
    /// Create a new resolved address from IP and port.
    pub fn new(ip: IpAddr, port: u16) -> Self {
        Self { ip, port }
    }

    /// Convert into a `std::net::SocketAddr` for dialing.
    pub fn to_socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::new(self.ip.into(), self.port)
    }
}

impl Ord for ResolvedAddress {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ip
            .cmp(&other.ip)
            .then_with(|| self.port.cmp(&other.port))
    }
}

impl PartialOrd for ResolvedAddress {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<std::net::SocketAddr> for ResolvedAddress {
    fn from(addr: std::net::SocketAddr) -> Self {
        Self::new(addr.ip().into(), addr.port())
    }
}

impl From<ResolvedAddress> for std::net::SocketAddr {
    fn from(addr: ResolvedAddress) -> Self {
        addr.to_socket_addr()
    }
}

impl fmt::Display for ResolvedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_socket_addr())
    }
}

/// Maximum number of ports enumerated for each resolved address of a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResolutionLimit(usize);

impl ResolutionLimit {
    /// Limit for operator-configured (foreign) seed hosts.
    pub const FOREIGN_PORTS: Self = Self(1);

    /// Limit for the local-address fallback.
    pub const LOCAL_PORTS: Self = Self(5);

    /// Returns `None` for zero.
    pub fn new(ports: usize) -> Option<Self> {
        (ports > 0).then_some(Self(ports))
    }

    /// Get the raw count.
    pub fn get(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ResolutionLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The host strings and limit chosen once at startup.
///
/// Never mutated after construction; share it through `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedHostsConfig {
    /// Raw host strings in configured order.
    pub configured_hosts: Vec<String>,
    /// Ports to enumerate per resolved address.
    pub limit: ResolutionLimit,
}

impl SeedHostsConfig {
    /// Create a shared config.
    pub fn new(configured_hosts: Vec<String>, limit: ResolutionLimit) -> Arc<Self> {
        Arc::new(Self {
            configured_hosts,
            limit,
        })
    }
}
