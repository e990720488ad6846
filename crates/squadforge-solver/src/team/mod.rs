//! Team selection.
//!
//! [`TeamOptimizer`] poses the selection problem as a binary model, hands it
//! to an [`IlpSolver`] and reads the winning event assignment back.
//!
//! Only score events contribute to the objective. Relay legs are filled and
//! constrained, but their points are not maximized; use
//! [`TeamSolution::relay_points`] to see what the chosen team would score.

mod model;

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use squadforge_config::{SolverConfig, DEFAULT_ASSIGNMENT_TOLERANCE};
use squadforge_core::{
    Competition, Competitor, GameModeId, Lineup, PlayerId, Result, SquadError,
};
use tracing::{debug, info};

use crate::bnb::BranchAndBound;
use crate::ilp::{IlpError, IlpSolver, SolveStatus};
use crate::stats::SearchStats;

use model::TeamModel;

/// Selects a team and assigns its members to events.
///
/// # Examples
///
/// ```
/// use squadforge_core::{Competition, Competitor, GameMode, Perf, ScoreMode};
/// use squadforge_solver::TeamOptimizer;
///
/// let competition = Competition::new([GameMode::from(ScoreMode::new("100m"))], 1).unwrap();
/// let competitors = vec![
///     Competitor::from_name("Ana", [("100m", Perf::Score(10.0))]),
///     Competitor::from_name("Ben", [("100m", Perf::Score(8.0))]),
/// ];
///
/// let team = TeamOptimizer::default().solve(&competitors, &competition).unwrap();
/// assert_eq!(team.player_for(&"100m".into()).unwrap().name(), "Ana");
/// assert_eq!(team.objective, 10.0);
/// ```
#[derive(Debug)]
pub struct TeamOptimizer {
    engine: Box<dyn IlpSolver>,
    assignment_tolerance: f64,
}

impl TeamOptimizer {
    /// Uses the built-in branch-and-bound engine configured by `config`.
    pub fn new(config: &SolverConfig) -> Self {
        Self {
            engine: Box::new(BranchAndBound::from_config(config)),
            assignment_tolerance: config.assignment_tolerance,
        }
    }

    /// Uses another engine.
    pub fn with_solver(engine: impl IlpSolver + 'static) -> Self {
        Self {
            engine: Box::new(engine),
            assignment_tolerance: DEFAULT_ASSIGNMENT_TOLERANCE,
        }
    }

    pub fn with_assignment_tolerance(mut self, tolerance: f64) -> Self {
        self.assignment_tolerance = tolerance;
        self
    }

    pub fn engine_name(&self) -> &'static str {
        self.engine.engine_name()
    }

    /// Picks at most `event_count_cap` competitors and fills every atomic
    /// event of `competition` with exactly one of them, maximizing the total
    /// score of the score events.
    ///
    /// Among equally good teams the one returned depends on the engine.
    pub fn solve(
        &self,
        competitors: &[Competitor],
        competition: &Competition,
    ) -> Result<TeamSolution> {
        info!(
            event = "solve_start",
            engine = self.engine.engine_name(),
            competitors = competitors.len(),
            atomic_events = competition.atomic_event_ids().len(),
            event_count_cap = competition.event_count_cap(),
        );

        let mut seen = HashSet::with_capacity(competitors.len());
        for competitor in competitors {
            if !seen.insert(competitor.id()) {
                return Err(SquadError::DuplicatePlayer {
                    player: competitor.id().clone(),
                });
            }
            competition.check_competitor(competitor)?;
        }

        let team_model = TeamModel::build(competitors, competition)?;
        check_cap(competition)?;

        let model = team_model.model();
        debug!(
            event = "model_built",
            variables = model.num_variables(),
            constraints = model.constraints().len(),
            candidates = team_model.num_candidates(),
        );

        let solution = self.engine.solve(model).map_err(|err| match err {
            IlpError::Infeasible => SquadError::AssignmentInfeasible {
                events: competition.atomic_event_ids().iter().cloned().collect(),
                reason: format!(
                    "no team of at most {} competitors covers every event",
                    competition.event_count_cap()
                ),
            },
            other => SquadError::SolverFailure(other.to_string()),
        })?;

        let assignment = team_model.decode(&solution, competition, self.assignment_tolerance)?;

        info!(
            event = "solve_end",
            status = %solution.status,
            objective = solution.objective,
            team_size = team_model.selected_count(&solution, self.assignment_tolerance),
            nodes = solution.stats.nodes_explored,
            duration_ms = solution.stats.elapsed.as_millis() as u64,
        );

        Ok(TeamSolution {
            assignment,
            status: solution.status,
            objective: solution.objective,
            stats: solution.stats,
        })
    }
}

impl Default for TeamOptimizer {
    fn default() -> Self {
        Self::new(&SolverConfig::default())
    }
}

/// Fails early when the cap is below the competitors the events need.
///
/// Nobody runs two score events or two legs of one relay, so the team needs
/// at least as many members as there are score events, and as many as the
/// longest relay has legs.
fn check_cap(competition: &Competition) -> Result<()> {
    let cap = competition.event_count_cap();
    let needed = competition.minimum_team_size();
    if cap >= needed {
        return Ok(());
    }

    let events: Vec<GameModeId> = if competition.score_event_ids().len() == needed {
        competition.score_event_ids().iter().cloned().collect()
    } else {
        competition
            .relay_modes()
            .values()
            .find(|relay| relay.atomic_modes().len() == needed)
            .map(|relay| relay.atomic_modes().to_vec())
            .unwrap_or_default()
    };
    Err(SquadError::AssignmentInfeasible {
        events,
        reason: format!("team size cap {cap} is below the {needed} competitors required"),
    })
}

/// The chosen team.
#[derive(Debug, Clone)]
pub struct TeamSolution {
    /// One competitor per atomic event.
    pub assignment: BTreeMap<GameModeId, PlayerId>,
    pub status: SolveStatus,
    /// Total score of the score events.
    pub objective: f64,
    pub stats: SearchStats,
}

impl TeamSolution {
    pub fn player_for(&self, event: &GameModeId) -> Option<&PlayerId> {
        self.assignment.get(event)
    }

    /// The distinct competitors in the team.
    pub fn selected_players(&self) -> BTreeSet<&PlayerId> {
        self.assignment.values().collect()
    }

    /// Returns false if the search stopped early with the best team found.
    pub fn is_proven_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }

    /// Scores every relay of `competition` with the assigned leg holders.
    ///
    /// `competitors` must contain every assigned player.
    pub fn relay_points(
        &self,
        competition: &Competition,
        competitors: &[Competitor],
    ) -> Result<BTreeMap<GameModeId, f64>> {
        let by_id: HashMap<&PlayerId, &Competitor> =
            competitors.iter().map(|c| (c.id(), c)).collect();
        let lineup: Lineup<'_> = self
            .assignment
            .iter()
            .filter_map(|(event, player)| by_id.get(player).map(|c| (event.clone(), *c)))
            .collect();

        competition
            .relay_modes()
            .iter()
            .map(|(id, relay)| Ok((id.clone(), relay.points(&lineup)?)))
            .collect()
    }
}
