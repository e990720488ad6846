//! Activity-based constraint propagation.
//!
//! For each row the smallest and largest reachable left-hand side are
//! computed from the fixed variables and the signs of the free ones. A row
//! whose range misses its right-hand side is violated; a free variable whose
//! other value would push the range past the right-hand side is fixed.
//! Rows are swept until nothing changes.

use crate::ilp::{Constraint, Model};

/// Slack allowed when comparing activities with right-hand sides.
pub(crate) const FEASIBILITY_EPS: f64 = 1e-9;

/// Outcome of propagating one row.
enum RowOutcome {
    Violated,
    Fixed(usize),
}

#[derive(Debug)]
pub(crate) struct Propagator<'m> {
    model: &'m Model,
}

impl<'m> Propagator<'m> {
    pub(crate) fn new(model: &'m Model) -> Self {
        Self { model }
    }

    /// Fixes every variable implied by the current assignment.
    ///
    /// Returns false if some constraint can no longer be satisfied.
    pub(crate) fn propagate(&self, assignment: &mut [Option<bool>]) -> bool {
        loop {
            let mut changed = false;
            for constraint in self.model.constraints() {
                match propagate_row(constraint, assignment) {
                    RowOutcome::Violated => return false,
                    RowOutcome::Fixed(count) => changed |= count > 0,
                }
            }
            if !changed {
                return true;
            }
        }
    }
}

fn propagate_row(constraint: &Constraint, assignment: &mut [Option<bool>]) -> RowOutcome {
    let terms = constraint.expr().terms();
    let rhs = constraint.rhs();
    let upper = constraint.cmp().has_upper().then_some(rhs);
    let lower = constraint.cmp().has_lower().then_some(rhs);

    let mut min_activity = 0.0;
    let mut max_activity = 0.0;
    for &(var, coef) in terms {
        match assignment[var.index()] {
            Some(true) => {
                min_activity += coef;
                max_activity += coef;
            }
            Some(false) => {}
            None if coef > 0.0 => max_activity += coef,
            None => min_activity += coef,
        }
    }

    if upper.is_some_and(|ub| min_activity > ub + FEASIBILITY_EPS)
        || lower.is_some_and(|lb| max_activity < lb - FEASIBILITY_EPS)
    {
        return RowOutcome::Violated;
    }

    let mut fixed = 0;
    for &(var, coef) in terms {
        let slot = &mut assignment[var.index()];
        if slot.is_some() {
            continue;
        }
        // Value the variable must take for the row to stay satisfiable.
        let mut forced = None;
        if let Some(ub) = upper {
            if coef > 0.0 && min_activity + coef > ub + FEASIBILITY_EPS {
                forced = Some(false);
            } else if coef < 0.0 && min_activity - coef > ub + FEASIBILITY_EPS {
                forced = Some(true);
            }
        }
        if let Some(lb) = lower {
            let needed = if coef > 0.0 && max_activity - coef < lb - FEASIBILITY_EPS {
                Some(true)
            } else if coef < 0.0 && max_activity + coef < lb - FEASIBILITY_EPS {
                Some(false)
            } else {
                None
            };
            match (forced, needed) {
                (Some(a), Some(b)) if a != b => return RowOutcome::Violated,
                (None, Some(_)) => forced = needed,
                _ => {}
            }
        }
        if forced.is_some() {
            *slot = forced;
            fixed += 1;
        }
    }
    RowOutcome::Fixed(fixed)
}
