//! Shared test fixtures for Tierwise crates.
//!
//! This crate provides pricing configurations and deal inputs for testing.
//! It depends only on `tierwise-core` so any crate can pull it in as a
//! dev-dependency without cycles.
//!
//! - [`rules`] - Default, custom and malformed rule sets
//! - [`deals`] - Deal inputs for the reference pricing scenarios
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! tierwise-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use tierwise_test::rules::{default_config, touching_renewal_config};
//! use tierwise_test::deals::renewal_mid_tier;
//! ```

pub mod deals;
pub mod rules;

// Re-export commonly used fixtures at crate root for convenience
pub use deals::{net_new_second_tier, renewal_mid_tier, renewal_top_tier};
pub use rules::{default_config, touching_renewal_config};
