//! # Resolution Flows
//!
//! Repeated and degraded resolution through the provider.
//!
//! ## Flows Tested:
//!
//! 1. **Name changes between rounds**: every call looks names up afresh
//! 2. **Partial outages**: failed or slow entries drop out, the rest survive
//! 3. **Fan-out**: many entries with a small lookup pool

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::io;
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    use seed_hosts::test_utils::StaticNameResolver;
    use seed_hosts::{
        IpAddr, MapSettings, NameResolver, ResolutionFailure, ResolvedAddress, ResolverConfig,
        SeedHostsProvider, SeedHostsResolver, SettingsBasedSeedHostsProvider,
        StaticLocalAddresses,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Answers one host with whatever address is current.
    struct ChangingResolver {
        current: Mutex<IpAddr>,
    }

    impl NameResolver for ChangingResolver {
        fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
            match host {
                "seed" => Ok(vec![*self.current.lock().unwrap()]),
                _ => Err(io::Error::new(io::ErrorKind::NotFound, host.to_string())),
            }
        }
    }

    fn provider_for(hosts: &[&str]) -> SettingsBasedSeedHostsProvider {
        let settings = MapSettings::new().with_list("discovery.seed_hosts", hosts.iter().copied());
        SettingsBasedSeedHostsProvider::new(&settings, &StaticLocalAddresses::default()).unwrap()
    }

    fn config(timeout: Duration, workers: usize) -> ResolverConfig {
        ResolverConfig {
            timeout,
            max_concurrent_resolvers: workers,
            ..ResolverConfig::default()
        }
    }

    fn v4(d: u8, port: u16) -> ResolvedAddress {
        ResolvedAddress::new(IpAddr::v4(10, 0, 0, d), port)
    }

    // =============================================================================
    // NAME CHANGES
    // =============================================================================

    #[test]
    fn test_each_round_sees_current_names() {
        let names = Arc::new(ChangingResolver {
            current: Mutex::new(IpAddr::v4(10, 0, 0, 1)),
        });
        let resolver = SeedHostsResolver::new(names.clone(), ResolverConfig::default());
        let provider = provider_for(&["seed"]);

        assert_eq!(provider.seed_addresses(&resolver), vec![v4(1, 9300)]);

        *names.current.lock().unwrap() = IpAddr::v4(10, 0, 0, 2);
        assert_eq!(provider.seed_addresses(&resolver), vec![v4(2, 9300)]);
    }

    #[test]
    fn test_rounds_are_idempotent_for_stable_names() {
        let names = StaticNameResolver::new()
            .with_host("a", [IpAddr::v4(10, 0, 0, 1), IpAddr::v4(10, 0, 0, 2)])
            .with_host("b", [IpAddr::v4(10, 0, 0, 3)]);
        let resolver = SeedHostsResolver::new(Arc::new(names), config(Duration::from_secs(5), 2));
        let provider = provider_for(&["a", "b:9301", "10.0.0.4"]);

        let first: BTreeSet<_> = provider.seed_addresses(&resolver).into_iter().collect();
        let second: BTreeSet<_> = provider.seed_addresses(&resolver).into_iter().collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    // =============================================================================
    // PARTIAL OUTAGES
    // =============================================================================

    #[test]
    fn test_failed_and_slow_entries_drop_out() {
        let names = StaticNameResolver::new()
            .with_host("ok", [IpAddr::v4(10, 0, 0, 1)])
            .with_failure("refused", io::ErrorKind::ConnectionRefused)
            .with_host("slow", [IpAddr::v4(10, 0, 0, 9)])
            .with_delay("slow", Duration::from_secs(3));
        let resolver =
            SeedHostsResolver::new(Arc::new(names), config(Duration::from_millis(300), 4));
        let entries: Vec<String> = ["refused", "ok", "slow", "10.0.0.5:9310"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let started = Instant::now();
        let report = resolver.resolve(&entries, seed_hosts::ResolutionLimit::FOREIGN_PORTS);

        assert!(started.elapsed() < Duration::from_secs(3));
        assert_eq!(report.addresses, vec![v4(1, 9300), v4(5, 9310)]);
        let failed: Vec<&str> = report.failures.iter().map(ResolutionFailure::entry).collect();
        assert_eq!(failed, vec!["refused", "slow"]);
        assert!(matches!(report.failures[1], ResolutionFailure::TimedOut { .. }));
    }

    #[test]
    fn test_all_entries_failing_yields_empty_list() {
        let resolver =
            SeedHostsResolver::new(Arc::new(StaticNameResolver::new()), ResolverConfig::default());
        let provider = provider_for(&["nowhere", "also.nowhere:9301"]);

        assert!(provider.seed_addresses(&resolver).is_empty());
    }

    // =============================================================================
    // FAN-OUT
    // =============================================================================

    #[test]
    fn test_many_entries_through_small_pool() {
        let mut names = StaticNameResolver::new();
        let mut hosts = Vec::new();
        for i in 1..=40u8 {
            let host = format!("node-{i}");
            names = names
                .with_host(&host, [IpAddr::v4(10, 1, 0, i)])
                .with_delay(&host, Duration::from_millis(10));
            hosts.push(host);
        }
        let counter = names.clone();
        let resolver = SeedHostsResolver::new(Arc::new(names), config(Duration::from_secs(5), 3));

        let addresses = resolver.resolve(&hosts, seed_hosts::ResolutionLimit::FOREIGN_PORTS);

        assert!(addresses.is_complete());
        assert_eq!(counter.lookups(), 40);
        let expected: Vec<ResolvedAddress> = (1..=40u8)
            .map(|i| ResolvedAddress::new(IpAddr::v4(10, 1, 0, i), 9300))
            .collect();
        assert_eq!(addresses.addresses, expected);
    }
}
