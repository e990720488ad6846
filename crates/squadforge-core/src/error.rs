//! Error types for SquadForge

use thiserror::Error;

use crate::id::{GameModeId, PlayerId};

/// Main error type for SquadForge operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SquadError {
    /// A competitor has no record at an event, or the record has the wrong shape
    #[error("{player} has no {expected} performance at {mode}")]
    MissingPerformance {
        player: PlayerId,
        mode: GameModeId,
        expected: &'static str,
    },

    /// A competitor's age was read but never supplied
    #[error("The age of {player} was not given")]
    MissingAge { player: PlayerId },

    /// An event, or one leg of a composite event, was scored without a competitor
    #[error("No competitor assigned to {}", describe_slot(.event, .leg.as_ref()))]
    MissingAssignment {
        event: GameModeId,
        leg: Option<GameModeId>,
    },

    /// A textual identifier could not be parsed
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// The event collection handed to a competition is inconsistent
    #[error("Invalid competition: {0}")]
    InvalidCompetition(String),

    /// Two competitors share the same identity
    #[error("Duplicate competitor: {player}")]
    DuplicatePlayer { player: PlayerId },

    /// No team within the cap can fill every required event
    #[error("Assignment infeasible ({reason}): [{}]", join_ids(.events))]
    AssignmentInfeasible {
        events: Vec<GameModeId>,
        reason: String,
    },

    /// The optimization engine failed for a reason other than infeasibility
    #[error("Solver failure: {0}")]
    SolverFailure(String),
}

fn describe_slot(event: &GameModeId, leg: Option<&GameModeId>) -> String {
    match leg {
        Some(leg) => format!("leg {leg} of {event}"),
        None => event.to_string(),
    }
}

fn join_ids(ids: &[GameModeId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl SquadError {
    /// Returns true for the "assignment infeasible" condition.
    pub fn is_infeasible(&self) -> bool {
        matches!(self, SquadError::AssignmentInfeasible { .. })
    }

    /// Returns the event ids named by an infeasibility error, if any.
    pub fn infeasible_events(&self) -> &[GameModeId] {
        match self {
            SquadError::AssignmentInfeasible { events, .. } => events,
            _ => &[],
        }
    }
}

/// Result type alias for SquadForge operations
pub type Result<T> = std::result::Result<T, SquadError>;
