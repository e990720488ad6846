//! SquadForge - Optimal team selection for multi-event competitions
//!
//! Describe the events, list the competitors with their records, and call
//! [`best_team`].
//!
//! # Example
//!
//! ```rust
//! use squadforge::prelude::*;
//!
//! let competition = Competition::new(
//!     [
//!         GameMode::from(ScoreMode::new("100m")),
//!         GameMode::from(ScoreMode::new("long-jump")),
//!     ],
//!     2,
//! )
//! .unwrap();
//!
//! let competitors = vec![
//!     Competitor::from_name("Ana", [("100m", Perf::Score(12.0)), ("long-jump", Perf::Score(9.0))]),
//!     Competitor::from_name("Ben", [("100m", Perf::Score(10.0))]),
//! ];
//!
//! let team = best_team(&competitors, &competition).unwrap();
//! assert_eq!(team.player_for(&"100m".into()), Some(&PlayerId::new("Ben")));
//! assert_eq!(team.player_for(&"long-jump".into()), Some(&PlayerId::new("Ana")));
//! assert_eq!(team.objective, 19.0);
//! ```

// Domain types
pub use squadforge_core::{
    AgeChronoPoints, Competition, Competitor, CompositeRelayMode, GameMode, GameModeId, Lineup,
    Perf, PlayerId, Result, ScoreMode, SquadError,
};

// Configuration
pub use squadforge_config::{ConfigError, ExplorationType, SolverConfig, TerminationConfig};

// Optimizer and engine boundary
pub use squadforge_solver::{
    BranchAndBound, IlpError, IlpSolver, Model, ModelSolution, SearchStats, SolveStatus,
    TeamOptimizer, TeamSolution,
};

/// Lower-level solver modules.
pub use squadforge_solver::{bnb, ilp, termination};

#[cfg(feature = "console")]
pub mod console;

mod solve;
pub use solve::{best_team, best_team_with_config, load_config};

pub mod prelude {
    pub use super::{best_team, best_team_with_config};
    pub use super::{
        Competition, Competitor, CompositeRelayMode, GameMode, GameModeId, Perf, PlayerId,
        ScoreMode, SquadError,
    };
    pub use super::{ExplorationType, SolverConfig};
    pub use super::{SolveStatus, TeamOptimizer, TeamSolution};
}
