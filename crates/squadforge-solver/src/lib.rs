//! SquadForge Solver
//!
//! This crate turns a competition and a pool of competitors into a team:
//! - Binary integer programming model (`ilp`) and the `IlpSolver` trait
//! - Built-in branch-and-bound engine (`bnb`)
//! - Termination conditions
//! - Search statistics
//! - `TeamOptimizer`, which builds the model and reads the team back

pub mod bnb;
pub mod ilp;
pub mod scope;
pub mod stats;
pub mod team;
pub mod termination;

pub use bnb::{BranchAndBound, ConfiguredTermination, SearchNode};
pub use ilp::{
    Comparison, Constraint, IlpError, IlpSolver, LinearExpr, Model, ModelSolution, SolveStatus,
    VarId,
};
pub use scope::SearchScope;
pub use stats::SearchStats;
pub use team::{TeamOptimizer, TeamSolution};
pub use termination::{
    ExternalTermination, NoTermination, NodeCountTermination, OrTermination, Termination,
    TimeTermination,
};
