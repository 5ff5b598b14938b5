//! # Seed Runtime
//!
//! Wires the seed hosts crate to real collaborators: a TOML settings file,
//! the loopback fallback addresses, and the system name resolver.
//!
//! ## Startup Sequence
//!
//! 1. Load settings (file, or defaults when no file is given)
//! 2. Build the provider (fails on port ranges in `discovery.seed_hosts`)
//! 3. Build the resolver from `transport.port` and `discovery.seed_resolver.*`
//! 4. Resolve the seed addresses once

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use seed_hosts::{
    LoopbackLocalAddresses, MapSettings, NameResolver, ResolvedAddress, ResolverConfig,
    SeedHostsProvider, SeedHostsResolver, SettingsBasedSeedHostsProvider, SettingsSource,
    TomlSettings,
};

/// Load settings from `path`, or empty defaults when there is none.
pub fn load_settings(path: Option<&Path>) -> Result<Box<dyn SettingsSource>> {
    match path {
        Some(path) => {
            let settings = TomlSettings::load(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?;
            info!(path = %path.display(), "Loaded settings file");
            Ok(Box::new(settings))
        }
        None => {
            info!("No settings file given, using defaults");
            Ok(Box::new(MapSettings::new()))
        }
    }
}

/// Build the provider and resolver from `settings` and resolve once.
pub fn discover(
    settings: &dyn SettingsSource,
    names: Arc<dyn NameResolver>,
) -> Result<Vec<ResolvedAddress>> {
    let local = LoopbackLocalAddresses::from_settings(settings)
        .context("Invalid transport port range")?;
    let provider = SettingsBasedSeedHostsProvider::new(settings, &local)
        .context("Invalid seed hosts configuration")?;
    let config = ResolverConfig::from_settings(settings).context("Invalid resolver settings")?;

    let resolver = SeedHostsResolver::new(names, config);
    let addresses = provider.seed_addresses(&resolver);

    info!(
        hosts = provider.configured_hosts().len(),
        addresses = addresses.len(),
        "Resolved seed addresses"
    );
    Ok(addresses)
}
