//! # Adapters
//!
//! Concrete implementations of the outbound ports.
//!
//! ## Adapters Provided
//!
//! - `MapSettings` - In-memory settings
//! - `TomlSettings` - Settings file loading (requires "config" feature)
//! - `StaticLocalAddresses` / `LoopbackLocalAddresses` - Local seed fallbacks
//! - `SystemNameResolver` - Platform name resolution

// Semantic submodules
/// Local address sources
pub mod local;
/// Name resolvers
pub mod resolver;
/// Settings sources
pub mod settings;

// Re-export public API
pub use local::{LoopbackLocalAddresses, StaticLocalAddresses};
pub use resolver::SystemNameResolver;
pub use settings::MapSettings;

#[cfg(feature = "config")]
pub use settings::TomlSettings;
