//! # Seed Hosts Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmark bodies
//! │   └── resolution.rs
//! │
//! └── integration/      # End-to-end flows across settings, provider, resolver
//!     ├── startup.rs
//!     └── flows.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p seed-hosts-tests
//!
//! # Benchmarks
//! cargo bench -p seed-hosts-tests
//! ```

pub mod benchmarks;
pub mod integration;
