//! # Seed Hosts Benchmarks
//!
//! | Path | Target |
//! |------|--------|
//! | Host entry parse | < 1µs per entry |
//! | Port enumeration, 256 addresses | < 50µs |
//! | Round of 32 literal hosts | < 5ms |

use criterion::{criterion_group, criterion_main};
use seed_hosts_tests::benchmarks::resolution::{
    bench_enumerate_ports, bench_host_spec_parse, bench_resolution_round,
};

criterion_group!(
    benches,
    bench_host_spec_parse,
    bench_enumerate_ports,
    bench_resolution_round
);
criterion_main!(benches);
