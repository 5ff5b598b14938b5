//! # Integration Tests
//!
//! Flows that cross the settings, provider, and resolver boundaries.

pub mod flows;
pub mod startup;
