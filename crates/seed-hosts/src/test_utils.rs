//! Test utilities for seed host resolution.
//!
//! This module provides scripted implementations of the outbound ports for
//! deterministic testing. Enable with the `test-utils` feature flag.
//!
//! # Example
//!
//! ```rust,ignore
//! use seed_hosts::test_utils::StaticNameResolver;
//! use seed_hosts::{IpAddr, NameResolver};
//!
//! let resolver = StaticNameResolver::new().with_host("seed-a", [IpAddr::v4(10, 0, 0, 1)]);
//! assert_eq!(resolver.lookup("seed-a").unwrap(), vec![IpAddr::v4(10, 0, 0, 1)]);
//! assert!(resolver.lookup("unknown").is_err());
//! ```

use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::domain::IpAddr;
use crate::ports::outbound::NameResolver;

/// A name resolver with scripted answers.
///
/// Unknown hosts fail with `io::ErrorKind::NotFound`. IP literals are
/// answered directly unless scripted otherwise. Clones share the lookup
/// counter.
#[derive(Debug, Clone, Default)]
pub struct StaticNameResolver {
    answers: HashMap<String, Vec<IpAddr>>,
    failures: HashMap<String, io::ErrorKind>,
    delays: HashMap<String, Duration>,
    lookups: Arc<AtomicUsize>,
}

impl StaticNameResolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `host` with `ips`, in the given order.
    #[must_use]
    pub fn with_host(mut self, host: &str, ips: impl IntoIterator<Item = IpAddr>) -> Self {
        self.answers.insert(host.to_string(), ips.into_iter().collect());
        self
    }

    /// Fail lookups of `host` with `kind`.
    #[must_use]
    pub fn with_failure(mut self, host: &str, kind: io::ErrorKind) -> Self {
        self.failures.insert(host.to_string(), kind);
        self
    }

    /// Sleep for `delay` before answering `host`.
    #[must_use]
    pub fn with_delay(mut self, host: &str, delay: Duration) -> Self {
        self.delays.insert(host.to_string(), delay);
        self
    }

    /// Number of lookups performed so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl NameResolver for StaticNameResolver {
    fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(host) {
            std::thread::sleep(*delay);
        }
        if let Some(kind) = self.failures.get(host) {
            return Err(io::Error::new(*kind, format!("scripted failure for {host}")));
        }
        if let Some(ips) = self.answers.get(host) {
            return Ok(ips.clone());
        }
        match host.parse::<std::net::IpAddr>() {
            Ok(ip) => Ok(vec![ip.into()]),
            Err(_) => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("unknown host {host}"),
            )),
        }
    }
}
