//! Search statistics.
//!
//! Counters for one run of a search engine.

use std::time::Duration;

/// Counters collected while searching.
///
/// # Example
///
/// ```
/// use squadforge_solver::stats::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.record_node();
/// stats.record_node();
/// stats.record_pruned();
///
/// assert_eq!(stats.nodes_explored, 2);
/// assert_eq!(stats.nodes_pruned, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStats {
    /// Nodes taken off the frontier and expanded.
    pub nodes_explored: u64,
    /// Nodes discarded because their bound could not beat the incumbent.
    pub nodes_pruned: u64,
    /// Children discarded because propagation found a violated constraint.
    pub infeasible_nodes: u64,
    /// Number of times a better solution was found.
    pub incumbent_updates: u64,
    /// Wall-clock time spent.
    pub elapsed: Duration,
}

impl SearchStats {
    pub fn record_node(&mut self) {
        self.nodes_explored += 1;
    }

    pub fn record_pruned(&mut self) {
        self.nodes_pruned += 1;
    }

    pub fn record_infeasible(&mut self) {
        self.infeasible_nodes += 1;
    }

    pub fn record_incumbent(&mut self) {
        self.incumbent_updates += 1;
    }
}
