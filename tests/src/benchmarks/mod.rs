//! # Seed Hosts Benchmarks
//!
//! Bodies for `benches/resolution_benchmarks.rs`.

pub mod resolution;
