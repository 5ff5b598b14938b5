//! # Startup Flows
//!
//! Settings file → provider → resolver, the way a node boots discovery.
//!
//! ## Flows Tested:
//!
//! 1. **Configured hosts**: entries resolve with one port per address
//! 2. **Local fallback**: no `discovery.seed_hosts` means loopback probing
//! 3. **Startup rejection**: a port range in the settings aborts startup

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;
    use std::time::Duration;

    use seed_hosts::test_utils::StaticNameResolver;
    use seed_hosts::{
        ConfigError, IpAddr, LoopbackLocalAddresses, ResolutionLimit, ResolvedAddress,
        ResolverConfig, SeedHostsProvider, SeedHostsResolver, SettingsBasedSeedHostsProvider,
        TomlSettings,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn settings_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn boot(
        settings: &TomlSettings,
        names: StaticNameResolver,
    ) -> Result<(SettingsBasedSeedHostsProvider, SeedHostsResolver), ConfigError> {
        let local = LoopbackLocalAddresses::from_settings(settings)?;
        let provider = SettingsBasedSeedHostsProvider::new(settings, &local)?;
        let resolver =
            SeedHostsResolver::new(Arc::new(names), ResolverConfig::from_settings(settings)?);
        Ok((provider, resolver))
    }

    fn v4(d: u8, port: u16) -> ResolvedAddress {
        ResolvedAddress::new(IpAddr::v4(10, 0, 0, d), port)
    }

    // =============================================================================
    // CONFIGURED HOSTS
    // =============================================================================

    #[test]
    fn test_configured_hosts_from_file() {
        let file = settings_file(
            r#"
[transport]
port = "9500-9600"

[discovery]
seed_hosts = ["seed-a", "seed-b:9700", "10.0.0.9"]

[discovery.seed_resolver]
timeout = "2s"
max_concurrent_resolvers = 2
"#,
        );
        let settings = TomlSettings::load(file.path()).unwrap();
        let names = StaticNameResolver::new()
            .with_host("seed-a", [IpAddr::v4(10, 0, 0, 1), IpAddr::v4(10, 0, 0, 2)])
            .with_host("seed-b", [IpAddr::v4(10, 0, 0, 3)]);

        let (provider, resolver) = boot(&settings, names).unwrap();

        assert_eq!(provider.limit(), ResolutionLimit::FOREIGN_PORTS);
        assert_eq!(resolver.config().default_port, 9500);
        assert_eq!(resolver.config().timeout, Duration::from_secs(2));
        assert_eq!(resolver.config().max_concurrent_resolvers, 2);
        assert_eq!(
            provider.seed_addresses(&resolver),
            vec![v4(1, 9500), v4(2, 9500), v4(3, 9700), v4(9, 9500)]
        );
    }

    #[test]
    fn test_dotted_keys_in_file() {
        let file = settings_file(
            r#"
"discovery.seed_hosts" = ["10.0.0.1:9301"]
"#,
        );
        let settings = TomlSettings::load(file.path()).unwrap();

        let (provider, resolver) = boot(&settings, StaticNameResolver::new()).unwrap();

        assert_eq!(provider.seed_addresses(&resolver), vec![v4(1, 9301)]);
    }

    #[test]
    fn test_explicit_empty_list_disables_fallback() {
        let settings = TomlSettings::parse("[discovery]\nseed_hosts = []\n").unwrap();

        let (provider, resolver) = boot(&settings, StaticNameResolver::new()).unwrap();

        assert!(provider.seed_addresses(&resolver).is_empty());
    }

    // =============================================================================
    // LOCAL FALLBACK
    // =============================================================================

    #[test]
    fn test_local_fallback_follows_transport_port() {
        let settings = TomlSettings::parse("[transport]\nport = \"9700-9702\"\n").unwrap();

        let (provider, resolver) = boot(&settings, StaticNameResolver::new()).unwrap();
        let addresses = provider.seed_addresses(&resolver);

        assert_eq!(provider.limit(), ResolutionLimit::LOCAL_PORTS);
        let rendered: Vec<String> = addresses.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "127.0.0.1:9700",
                "127.0.0.1:9701",
                "127.0.0.1:9702",
                "[::1]:9700",
                "[::1]:9701",
                "[::1]:9702",
            ]
        );
    }

    // =============================================================================
    // STARTUP REJECTION
    // =============================================================================

    #[test]
    fn test_port_range_aborts_startup() {
        let settings =
            TomlSettings::parse("[discovery]\nseed_hosts = [\"10.0.0.1\", \"10.0.0.2:9300-9305\"]\n")
                .unwrap();

        let err = boot(&settings, StaticNameResolver::new()).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Configuration Setting discovery.seed_hosts does not support a range of ports, \
             [10.0.0.2:9300-9305] was found in provided seed hosts"
        );
    }

    #[test]
    fn test_bad_resolver_setting_aborts_startup() {
        let settings =
            TomlSettings::parse("[discovery.seed_resolver]\nmax_concurrent_resolvers = 0\n").unwrap();

        assert!(matches!(
            boot(&settings, StaticNameResolver::new()),
            Err(ConfigError::InvalidSetting { .. })
        ));
    }

    #[test]
    fn test_runtime_discover_matches_manual_wiring() {
        let file = settings_file("[discovery]\nseed_hosts = [\"10.0.0.4:9302\"]\n");
        let settings = seed_runtime::load_settings(Some(file.path())).unwrap();

        let addresses =
            seed_runtime::discover(&*settings, Arc::new(StaticNameResolver::new())).unwrap();

        assert_eq!(addresses, vec![v4(4, 9302)]);
    }
}
