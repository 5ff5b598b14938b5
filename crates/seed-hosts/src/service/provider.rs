//! Settings-driven seed hosts provider.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    read_list, ConfigError, ResolutionLimit, ResolvedAddress, SeedHostsConfig,
    DISCOVERY_SEED_HOSTS,
};
use crate::ports::{HostsResolver, LocalAddressSource, SeedHostsProvider, SettingsSource};

/// Reads seed hosts from `discovery.seed_hosts`.
///
/// When the setting is present (even as an empty list) its entries are used
/// as-is with a limit of one port per address; probing a range of ports on a
/// foreign host is wasted traffic. When it is absent, the node's local
/// addresses are used with a limit of five.
///
/// An example setting: `["67.81.244.10", "67.81.244.11:9305", "67.81.244.15:9400"]`.
#[derive(Debug, Clone)]
pub struct SettingsBasedSeedHostsProvider {
    config: Arc<SeedHostsConfig>,
}

impl SettingsBasedSeedHostsProvider {
    /// Decide hosts and limit once, at startup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidConfiguration` naming the first configured
    /// entry that contains `-`, or `ConfigError::InvalidSetting` when
    /// `discovery.seed_hosts` is present but is not a list or a string.
    pub fn new(
        settings: &dyn SettingsSource,
        local_addresses: &dyn LocalAddressSource,
    ) -> Result<Self, ConfigError> {
        let config = match read_list(DISCOVERY_SEED_HOSTS, settings.get(DISCOVERY_SEED_HOSTS))? {
            Some(hosts) => {
                check_invalid_ports(&hosts)?;
                SeedHostsConfig::new(hosts, ResolutionLimit::FOREIGN_PORTS)
            }
            None => SeedHostsConfig::new(
                local_addresses.local_addresses(),
                ResolutionLimit::LOCAL_PORTS,
            ),
        };

        debug!(
            hosts = ?config.configured_hosts,
            limit = %config.limit,
            "using initial hosts"
        );

        Ok(Self { config })
    }

    /// Shared, immutable configuration.
    pub fn config(&self) -> &Arc<SeedHostsConfig> {
        &self.config
    }

    /// Host entries in configured order.
    pub fn configured_hosts(&self) -> &[String] {
        &self.config.configured_hosts
    }

    /// Ports per resolved address.
    pub fn limit(&self) -> ResolutionLimit {
        self.config.limit
    }
}

impl SeedHostsProvider for SettingsBasedSeedHostsProvider {
    fn seed_addresses(&self, resolver: &dyn HostsResolver) -> Vec<ResolvedAddress> {
        resolver.resolve_hosts(&self.config.configured_hosts, self.config.limit)
    }
}

/// Reject port-range syntax in configured seed hosts.
///
/// Reports the first entry containing `-`. Nothing is corrected.
pub fn check_invalid_ports(hosts: &[String]) -> Result<(), ConfigError> {
    match hosts.iter().find(|host| host.contains('-')) {
        Some(host) => Err(ConfigError::InvalidConfiguration {
            setting: DISCOVERY_SEED_HOSTS.to_string(),
            entry: host.clone(),
        }),
        None => Ok(()),
    }
}
