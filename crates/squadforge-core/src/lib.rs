//! SquadForge Core - Domain types for team selection
//!
//! This crate provides the data model the team optimizer works on:
//! - Identifiers for events and competitors
//! - Performance records
//! - Event definitions (individually scored and composite relay events)
//! - Competitors and competitions with their derived indices

pub mod competition;
pub mod competitor;
pub mod error;
pub mod game_mode;
pub mod id;
pub mod perf;

pub use competition::Competition;
pub use competitor::Competitor;
pub use error::{Result, SquadError};
pub use game_mode::{AgeChronoPoints, CompositeRelayMode, GameMode, Lineup, ScoreMode};
pub use id::{GameModeId, PlayerId};
pub use perf::Perf;
