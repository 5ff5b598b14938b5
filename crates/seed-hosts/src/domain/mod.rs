//! Domain Layer - pure seed host logic with no I/O
//!
//! This module contains:
//! - Resolved addresses and byte-level IP values
//! - Host entry parsing (`host`, `host:port`, `host:low-high`, bracketed IPv6)
//! - Port enumeration bounded by the resolution limit
//! - Settings keys and typed readers

pub mod entities;
pub mod errors;
pub mod host_spec;
pub mod services;
pub mod settings;

pub use entities::*;
pub use errors::*;
pub use host_spec::*;
pub use services::*;
pub use settings::*;
