//! # Ports Layer - Hexagonal Architecture Boundaries
//!
//! - **Driving Ports (Inbound):** what the discovery layer calls
//! - **Driven Ports (Outbound):** settings, local addresses, and name
//!   resolution supplied by the host application

pub mod inbound;
pub mod outbound;

pub use inbound::SeedHostsProvider;
pub use outbound::{HostsResolver, LocalAddressSource, NameResolver, SettingsSource};
