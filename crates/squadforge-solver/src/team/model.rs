//! Translation of a competition into a binary model and back.

use std::collections::BTreeMap;

use rayon::prelude::*;
use squadforge_core::{Competition, Competitor, GameModeId, PlayerId, Result, SquadError};

use crate::ilp::{Comparison, LinearExpr, Model, ModelSolution, VarId};

/// A competitor who can fill an atomic event: a record at a score event, or
/// a `Chrono` record at a leg plus a known age.
#[derive(Debug)]
struct Candidate {
    competitor: usize,
    event: GameModeId,
    assign: VarId,
}

/// The binary model of one team selection problem.
///
/// Variables are one `select` per competitor and one `assign` per candidate
/// pair. Rows, in order:
/// - per competitor, `sum assign(score events) <= select`;
/// - per competitor and relay, `sum assign(relay legs) <= select`;
/// - per atomic event, `sum assign(candidates) = 1`;
/// - `sum select <= event_count_cap`.
///
/// The objective sums the scores of assigned score-event candidates. Relay
/// events do not contribute to it.
#[derive(Debug)]
pub(crate) struct TeamModel<'a> {
    model: Model,
    competitors: &'a [Competitor],
    select: Vec<VarId>,
    candidates: Vec<Candidate>,
}

impl<'a> TeamModel<'a> {
    /// Builds the model. Fails if some atomic event has no candidate.
    ///
    /// Leg records that could not be scored (no age, or not a `Chrono`) are
    /// left out rather than rejected, so they only matter when nobody else
    /// can run that leg.
    pub(crate) fn build(competitors: &'a [Competitor], competition: &Competition) -> Result<Self> {
        let atomic = competition.atomic_event_ids();
        let mut model = Model::new("team");

        let select: Vec<VarId> = competitors
            .iter()
            .map(|c| model.add_binary(format!("select[{}]", c.id())))
            .collect();

        let mut candidates = Vec::new();
        let mut by_event: BTreeMap<&GameModeId, Vec<usize>> =
            atomic.iter().map(|id| (id, Vec::new())).collect();
        let mut by_competitor: Vec<Vec<usize>> = vec![Vec::new(); competitors.len()];

        for (index, competitor) in competitors.iter().enumerate() {
            let mut modes: Vec<&GameModeId> = competitor
                .known_modes()
                .filter(|mode| atomic.contains(*mode))
                .filter(|mode| !competition.is_relay_leg(mode) || competitor.can_run_leg(mode))
                .collect();
            modes.sort();
            for mode in modes {
                let assign = model.add_binary(format!("assign[{},{}]", competitor.id(), mode));
                if let Some(list) = by_event.get_mut(mode) {
                    list.push(candidates.len());
                }
                by_competitor[index].push(candidates.len());
                candidates.push(Candidate {
                    competitor: index,
                    event: mode.clone(),
                    assign,
                });
            }
        }

        let uncovered: Vec<GameModeId> = by_event
            .iter()
            .filter(|(_, list)| list.is_empty())
            .map(|(id, _)| (*id).clone())
            .collect();
        if !uncovered.is_empty() {
            return Err(SquadError::AssignmentInfeasible {
                events: uncovered,
                reason: "no competitor has a usable record".to_string(),
            });
        }

        // Rows of different competitors are independent; the ordered collect
        // keeps the model identical to a sequential build.
        let participation: Vec<Vec<(String, LinearExpr)>> = by_competitor
            .par_iter()
            .enumerate()
            .map(|(index, owned)| {
                participation_rows(
                    &competitors[index],
                    select[index],
                    owned.iter().map(|&c| &candidates[c]),
                    competition,
                )
            })
            .collect();
        for (name, expr) in participation.into_iter().flatten() {
            model.add_constraint(name, expr, Comparison::LessEq, 0.0);
        }

        for (event, list) in &by_event {
            let expr = LinearExpr::sum(list.iter().map(|&c| candidates[c].assign));
            model.add_constraint(format!("cover[{event}]"), expr, Comparison::Equal, 1.0);
        }

        model.add_constraint(
            "team_size",
            LinearExpr::sum(select.iter().copied()),
            Comparison::LessEq,
            competition.event_count_cap() as f64,
        );

        let mut objective = LinearExpr::new();
        for candidate in &candidates {
            if competition.is_score_event(&candidate.event) {
                let score = competitors[candidate.competitor].score_at(&candidate.event)?;
                objective.add_term(candidate.assign, score);
            }
        }
        model.set_objective(objective);

        Ok(Self {
            model,
            competitors,
            select,
            candidates,
        })
    }

    #[inline]
    pub(crate) fn model(&self) -> &Model {
        &self.model
    }

    #[inline]
    pub(crate) fn num_candidates(&self) -> usize {
        self.candidates.len()
    }

    /// Reads the event assignment out of `solution`.
    ///
    /// An `assign` variable counts as set when its value is at least
    /// `1 - tolerance`. Every atomic event must come back filled by exactly
    /// one competitor.
    pub(crate) fn decode(
        &self,
        solution: &ModelSolution,
        competition: &Competition,
        tolerance: f64,
    ) -> Result<BTreeMap<GameModeId, PlayerId>> {
        let threshold = 1.0 - tolerance;
        let mut assignment = BTreeMap::new();
        for candidate in &self.candidates {
            if solution.value(candidate.assign) < threshold {
                continue;
            }
            let player = self.competitors[candidate.competitor].id().clone();
            if let Some(other) = assignment.insert(candidate.event.clone(), player) {
                return Err(SquadError::SolverFailure(format!(
                    "engine solution gives {} to both {other} and {}",
                    candidate.event,
                    self.competitors[candidate.competitor].id()
                )));
            }
        }

        if let Some(missing) = competition
            .atomic_event_ids()
            .iter()
            .find(|id| !assignment.contains_key(*id))
        {
            return Err(SquadError::SolverFailure(format!(
                "engine solution leaves {missing} without a competitor"
            )));
        }
        Ok(assignment)
    }

    /// Number of competitors whose `select` variable is set in `solution`.
    pub(crate) fn selected_count(&self, solution: &ModelSolution, tolerance: f64) -> usize {
        self.select
            .iter()
            .filter(|&&var| solution.value(var) >= 1.0 - tolerance)
            .count()
    }
}

/// The participation rows of one competitor, as `expr <= 0` left-hand sides.
fn participation_rows<'c>(
    competitor: &Competitor,
    select: VarId,
    owned: impl Iterator<Item = &'c Candidate> + Clone,
    competition: &Competition,
) -> Vec<(String, LinearExpr)> {
    let mut rows = Vec::new();

    let score_vars: Vec<VarId> = owned
        .clone()
        .filter(|c| competition.is_score_event(&c.event))
        .map(|c| c.assign)
        .collect();
    if !score_vars.is_empty() {
        let mut expr = LinearExpr::sum(score_vars);
        expr.add_term(select, -1.0);
        rows.push((format!("one_score_event[{}]", competitor.id()), expr));
    }

    for (relay_id, relay) in competition.relay_modes() {
        let leg_vars: Vec<VarId> = owned
            .clone()
            .filter(|c| relay.atomic_modes().contains(&c.event))
            .map(|c| c.assign)
            .collect();
        if !leg_vars.is_empty() {
            let mut expr = LinearExpr::sum(leg_vars);
            expr.add_term(select, -1.0);
            rows.push((format!("one_leg[{},{relay_id}]", competitor.id()), expr));
        }
    }

    rows
}
