//! # Seed Runtime
//!
//! Resolves the configured seed hosts once and prints one address per line.
//!
//! ```text
//! seed-runtime [CONFIG.toml]
//! ```
//!
//! Logs go to stderr; set `RUST_LOG` (e.g. `RUST_LOG=seed_hosts=debug`) to
//! see the chosen hosts and per-entry failures.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use seed_hosts::SystemNameResolver;
use seed_runtime::{discover, load_settings};

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = load_settings(path.as_deref())?;
    let addresses = discover(&*settings, Arc::new(SystemNameResolver::new()))?;

    for address in addresses {
        println!("{address}");
    }

    Ok(())
}
