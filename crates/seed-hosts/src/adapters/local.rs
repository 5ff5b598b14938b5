use crate::domain::{
    read_port_range, ConfigError, PortRange, ResolutionLimit, DEFAULT_TRANSPORT_PORTS,
    TRANSPORT_PORT,
};
use crate::ports::{LocalAddressSource, SettingsSource};

// ============================================================================
// StaticLocalAddresses - Fixed list
// ============================================================================

/// Local addresses from a fixed list, returned in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticLocalAddresses {
    addresses: Vec<String>,
}

impl StaticLocalAddresses {
    /// Create from a list of host entries.
    pub fn new<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            addresses: addresses.into_iter().map(Into::into).collect(),
        }
    }
}

impl LocalAddressSource for StaticLocalAddresses {
    fn local_addresses(&self) -> Vec<String> {
        self.addresses.clone()
    }
}

// ============================================================================
// LoopbackLocalAddresses - Default local probing targets
// ============================================================================

/// Loopback hosts combined with the first ports of the transport range.
///
/// With the default range `9300-9400` this yields `127.0.0.1:9300` through
/// `127.0.0.1:9304`, then `[::1]:9300` through `[::1]:9304` when IPv6 is
/// enabled. Nodes started side by side on one machine find each other
/// through these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopbackLocalAddresses {
    ports: PortRange,
    ipv6: bool,
}

impl LoopbackLocalAddresses {
    /// Create for a transport port range.
    pub fn new(ports: PortRange) -> Self {
        Self { ports, ipv6: true }
    }

    /// Read the range from `transport.port`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSetting` for a malformed range.
    pub fn from_settings(settings: &dyn SettingsSource) -> Result<Self, ConfigError> {
        let ports = read_port_range(
            TRANSPORT_PORT,
            settings.get(TRANSPORT_PORT),
            DEFAULT_TRANSPORT_PORTS,
        )?;
        Ok(Self::new(ports))
    }

    /// Include or skip `[::1]`.
    #[must_use]
    pub fn with_ipv6(mut self, ipv6: bool) -> Self {
        self.ipv6 = ipv6;
        self
    }
}

impl LocalAddressSource for LoopbackLocalAddresses {
    fn local_addresses(&self) -> Vec<String> {
        let hosts: &[&str] = if self.ipv6 {
            &["127.0.0.1", "[::1]"]
        } else {
            &["127.0.0.1"]
        };

        hosts
            .iter()
            .flat_map(|host| {
                self.ports
                    .ports()
                    .take(ResolutionLimit::LOCAL_PORTS.get())
                    .map(move |port| format!("{host}:{port}"))
            })
            .collect()
    }
}
