//! # Seed Resolution Benchmarks
//!
//! Hot paths of a resolution round that do not touch the network:
//! - host entry parsing
//! - port enumeration for multi-address hosts
//! - a full round against a scripted name resolver

use std::sync::Arc;

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use seed_hosts::domain::enumerate_ports;
use seed_hosts::test_utils::StaticNameResolver;
use seed_hosts::{
    HostSpec, IpAddr, PortRange, ResolutionLimit, ResolverConfig, SeedHostsResolver,
};

const ENTRIES: &[&str] = &[
    "67.81.244.10",
    "67.81.244.11:9305",
    "seed.example.org:9300-9400",
    "[2001:db8::1]:9301",
    "::1",
];

pub fn bench_host_spec_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("seed-hosts-parse");
    group.throughput(Throughput::Elements(ENTRIES.len() as u64));

    group.bench_function("parse_mixed_entries", |b| {
        b.iter(|| {
            for entry in ENTRIES {
                black_box(HostSpec::parse(black_box(entry)).is_ok());
            }
        })
    });

    group.finish();
}

pub fn bench_enumerate_ports(c: &mut Criterion) {
    let mut group = c.benchmark_group("seed-hosts-enumerate");
    let ports = PortRange::new(9300, 9400).unwrap();

    for count in [1usize, 16, 256] {
        let ips: Vec<IpAddr> = (0..count)
            .map(|i| IpAddr::v4(10, 0, (i / 256) as u8, (i % 256) as u8))
            .collect();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("local_limit", count), &ips, |b, ips| {
            b.iter(|| black_box(enumerate_ports(ips, ports, ResolutionLimit::LOCAL_PORTS)))
        });
    }

    group.finish();
}

pub fn bench_resolution_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("seed-hosts-round");

    for count in [4usize, 32] {
        let hosts: Vec<String> = (0..count).map(|i| format!("10.0.1.{i}:9300")).collect();
        let resolver = SeedHostsResolver::new(
            Arc::new(StaticNameResolver::new()),
            ResolverConfig::default(),
        );
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("literal_hosts", count), &hosts, |b, hosts| {
            b.iter(|| black_box(resolver.resolve(hosts, ResolutionLimit::FOREIGN_PORTS)))
        });
    }

    group.finish();
}
