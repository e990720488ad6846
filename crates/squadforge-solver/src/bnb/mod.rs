//! Branch-and-bound engine for binary models.
//!
//! The engine keeps a frontier of partial assignments ordered by the
//! configured [`ExplorationType`]. Each node is propagated to a fixpoint
//! before it is bounded; nodes whose optimistic bound cannot beat the
//! incumbent are pruned.
//!
//! # Branching
//!
//! Equality unit rows (`x1 + ... + xn = 1`) that are still open are branched
//! first, smallest row first, trying the free variable with the largest
//! objective coefficient. Once every such row is closed the remaining free
//! variables are fixed in index order.

mod bound;
mod node;
mod propagation;

use std::collections::BinaryHeap;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use squadforge_config::{ExplorationType, SolverConfig};
use tracing::{debug, trace, warn};

use crate::ilp::{Comparison, IlpError, IlpSolver, Model, ModelSolution, SolveStatus};
use crate::scope::SearchScope;
use crate::termination::{
    ExternalTermination, NoTermination, NodeCountTermination, OrTermination, Termination,
    TimeTermination,
};

use bound::UnitRowBounder;
use node::PriorityNode;
use propagation::{Propagator, FEASIBILITY_EPS};

pub use node::SearchNode;

/// Termination built from a [`SolverConfig`]: time limit, node limit and an
/// optional external stop flag.
pub type ConfiguredTermination = OrTermination<(
    Option<TimeTermination>,
    Option<NodeCountTermination>,
    Option<ExternalTermination>,
)>;

/// Depth-first or best-bound-first branch and bound over binary variables.
///
/// # Examples
///
/// ```
/// use squadforge_solver::bnb::BranchAndBound;
/// use squadforge_solver::ilp::{Comparison, IlpSolver, LinearExpr, Model, SolveStatus};
///
/// let mut model = Model::new("pick-one");
/// let a = model.add_binary("a");
/// let b = model.add_binary("b");
/// model.add_constraint("one", LinearExpr::sum([a, b]), Comparison::Equal, 1.0);
/// model.set_objective(LinearExpr::new().term(a, 2.0).term(b, 3.0));
///
/// let solution = BranchAndBound::exhaustive().solve(&model).unwrap();
/// assert_eq!(solution.status, SolveStatus::Optimal);
/// assert_eq!(solution.values, vec![0.0, 1.0]);
/// ```
#[derive(Debug, Clone)]
pub struct BranchAndBound<T> {
    exploration_type: ExplorationType,
    termination: T,
}

impl BranchAndBound<NoTermination> {
    /// Depth-first search that runs until optimality is proven.
    pub fn exhaustive() -> Self {
        Self::new(ExplorationType::DepthFirst, NoTermination)
    }
}

impl BranchAndBound<ConfiguredTermination> {
    /// Builds an engine from the exploration type and termination limits of
    /// `config`.
    pub fn from_config(config: &SolverConfig) -> Self {
        let termination = OrTermination::new((
            config.time_limit().map(TimeTermination::new),
            config.node_count_limit().map(NodeCountTermination::new),
            None,
        ));
        Self::new(config.exploration_type, termination)
    }

    /// Stops the search once `flag` is set.
    pub fn with_terminate_early_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        (self.termination.0).2 = Some(ExternalTermination::new(flag));
        self
    }
}

impl<T: Termination> BranchAndBound<T> {
    pub fn new(exploration_type: ExplorationType, termination: T) -> Self {
        Self {
            exploration_type,
            termination,
        }
    }

    #[inline]
    pub fn exploration_type(&self) -> ExplorationType {
        self.exploration_type
    }

    fn push(&self, frontier: &mut BinaryHeap<PriorityNode>, sequence: &mut u64, node: SearchNode) {
        frontier.push(PriorityNode::new(*sequence, node, self.exploration_type));
        *sequence += 1;
    }
}

impl<T: Termination> IlpSolver for BranchAndBound<T> {
    fn solve(&self, model: &Model) -> Result<ModelSolution, IlpError> {
        model.validate()?;

        let mut scope = SearchScope::start();
        let propagator = Propagator::new(model);
        let bounder = UnitRowBounder::new(model);
        let brancher = Brancher::new(model);

        debug!(
            event = "bnb_start",
            model = model.name(),
            variables = model.num_variables(),
            constraints = model.constraints().len(),
            exploration_type = %self.exploration_type,
        );

        let mut root = SearchNode::root(model.num_variables());
        if !propagator.propagate(root.assignment_mut()) {
            debug!(event = "bnb_end", model = model.name(), outcome = "root_infeasible");
            return Err(IlpError::Infeasible);
        }
        root.set_bound(bounder.optimistic_bound(root.assignment()));

        let mut incumbent: Option<(SearchNode, f64)> = None;
        let mut frontier = BinaryHeap::new();
        let mut sequence = 0;
        let mut terminated = false;
        self.push(&mut frontier, &mut sequence, root);

        while !frontier.is_empty() {
            if self.termination.is_terminated(&scope) {
                terminated = true;
                break;
            }
            let Some(priority_node) = frontier.pop() else {
                break;
            };
            let node = priority_node.into_node();

            if cannot_improve(node.bound(), scope.best_objective()) {
                scope.stats_mut().record_pruned();
                continue;
            }
            scope.stats_mut().record_node();

            let Some((var, preferred)) = brancher.choose(node.assignment(), &bounder) else {
                let objective = model.objective_value(&node.values());
                if scope
                    .best_objective()
                    .map_or(true, |best| objective > best + FEASIBILITY_EPS)
                {
                    debug!(
                        event = "incumbent",
                        objective,
                        depth = node.depth(),
                        nodes = scope.nodes_explored(),
                    );
                    scope.set_best_objective(objective);
                    incumbent = Some((node, objective));
                }
                continue;
            };

            // The preferred child is pushed last so it wins ties.
            for value in [!preferred, preferred] {
                let mut child = node.child(var, value);
                if !propagator.propagate(child.assignment_mut()) {
                    scope.stats_mut().record_infeasible();
                    continue;
                }
                let bound = bounder.optimistic_bound(child.assignment());
                if cannot_improve(bound, scope.best_objective()) {
                    scope.stats_mut().record_pruned();
                    continue;
                }
                child.set_bound(bound);
                trace!(event = "branch", var, value, bound, depth = child.depth());
                self.push(&mut frontier, &mut sequence, child);
            }
        }

        let nodes = scope.nodes_explored();
        let stats = scope.finish();
        debug!(
            event = "bnb_end",
            model = model.name(),
            nodes,
            pruned = stats.nodes_pruned,
            infeasible = stats.infeasible_nodes,
            incumbents = stats.incumbent_updates,
            duration_ms = stats.elapsed.as_millis() as u64,
            terminated,
        );

        match (incumbent, terminated) {
            (Some((node, objective)), terminated) => {
                let status = if terminated {
                    warn!(
                        event = "bnb_terminated",
                        model = model.name(),
                        nodes,
                        objective,
                        "search stopped before optimality was proven"
                    );
                    SolveStatus::Feasible
                } else {
                    SolveStatus::Optimal
                };
                Ok(ModelSolution {
                    status,
                    values: node.values(),
                    objective,
                    stats,
                })
            }
            (None, true) => Err(IlpError::BudgetExhausted {
                nodes,
                elapsed: stats.elapsed,
            }),
            (None, false) => Err(IlpError::Infeasible),
        }
    }

    fn engine_name(&self) -> &'static str {
        "BranchAndBound"
    }
}

/// Returns true if a node bounded by `bound` cannot beat the incumbent.
fn cannot_improve(bound: f64, best: Option<f64>) -> bool {
    best.is_some_and(|best| bound <= best + FEASIBILITY_EPS)
}

/// Picks the next variable to fix.
#[derive(Debug)]
struct Brancher {
    /// Variables of each `sum x = 1` row.
    choice_rows: Vec<Vec<usize>>,
}

impl Brancher {
    fn new(model: &Model) -> Self {
        let choice_rows = model
            .constraints()
            .iter()
            .filter(|c| c.cmp() == Comparison::Equal && c.is_unit_row())
            .map(|c| c.expr().terms().iter().map(|&(var, _)| var.index()).collect())
            .collect();
        Self { choice_rows }
    }

    /// Returns the variable to branch on and the value to try first, or
    /// `None` once the assignment is complete.
    fn choose(&self, assignment: &[Option<bool>], bounder: &UnitRowBounder) -> Option<(usize, bool)> {
        let open_row = self
            .choice_rows
            .iter()
            .filter(|row| !row.iter().any(|&i| assignment[i] == Some(true)))
            .map(|row| {
                row.iter()
                    .copied()
                    .filter(|&i| assignment[i].is_none())
                    .collect::<Vec<_>>()
            })
            .filter(|free| !free.is_empty())
            .min_by_key(Vec::len);

        if let Some(free) = open_row {
            let mut best = free[0];
            for &i in &free[1..] {
                if bounder.coefficient(i) > bounder.coefficient(best) {
                    best = i;
                }
            }
            return Some((best, true));
        }

        let var = assignment.iter().position(Option::is_none)?;
        Some((var, bounder.coefficient(var) > 0.0))
    }
}

#[cfg(test)]
mod tests;
