//! Search scope.

use std::time::{Duration, Instant};

use crate::stats::SearchStats;

/// State of one running search, as seen by termination conditions.
#[derive(Debug)]
pub struct SearchScope {
    start_time: Instant,
    stats: SearchStats,
    best_objective: Option<f64>,
}

impl SearchScope {
    /// Starts the clock.
    pub fn start() -> Self {
        Self {
            start_time: Instant::now(),
            stats: SearchStats::default(),
            best_objective: None,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[inline]
    pub fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }

    #[inline]
    pub fn nodes_explored(&self) -> u64 {
        self.stats.nodes_explored
    }

    /// Objective of the incumbent, if one was found.
    #[inline]
    pub fn best_objective(&self) -> Option<f64> {
        self.best_objective
    }

    pub fn set_best_objective(&mut self, objective: f64) {
        self.best_objective = Some(objective);
        self.stats.record_incumbent();
    }

    /// Stops the clock and returns the collected statistics.
    pub fn finish(mut self) -> SearchStats {
        self.stats.elapsed = self.start_time.elapsed();
        self.stats
    }
}
