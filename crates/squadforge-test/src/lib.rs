//! Shared test fixtures for SquadForge crates.
//!
//! This crate provides sample competitions and rosters for testing.
//! It only depends on `squadforge-core`, so every other crate can use it.
//!
//! - [`meet`] - Competitions, from a single sprint to a meet with a relay
//! - [`roster`] - Competitors matching those competitions
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! squadforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use squadforge_test::meet::athletics_meet;
//! use squadforge_test::roster::athletics_roster;
//! ```

pub mod meet;
pub mod roster;

pub use meet::{age_minus_chrono, athletics_meet, relay_meet, sprint_meet};
pub use roster::{athletics_roster, relay_runner, sprinter};
