//! Optimistic objective bounds.
//!
//! The bounder estimates the best objective reachable from a partial
//! assignment. If that is no better than the incumbent, the node is pruned.

use crate::ilp::Model;

/// Bounds the objective using the model's unit rows.
///
/// Variables with a non-zero objective coefficient are grouped by the first
/// unit row (`sum x <= 1` or `sum x = 1`, equalities preferred) that
/// contains them. At most one variable of a group can be on, so a group adds
/// at most its best free coefficient. Ungrouped free variables add their
/// coefficient when it is positive.
#[derive(Debug)]
pub(crate) struct UnitRowBounder {
    coefficients: Vec<f64>,
    groups: Vec<Vec<usize>>,
    ungrouped: Vec<usize>,
}

impl UnitRowBounder {
    pub(crate) fn new(model: &Model) -> Self {
        let n = model.num_variables();
        let mut coefficients = vec![0.0; n];
        for &(var, coef) in model.objective().terms() {
            coefficients[var.index()] += coef;
        }

        let mut group_of: Vec<Option<usize>> = vec![None; n];
        let mut groups: Vec<Vec<usize>> = Vec::new();
        let unit_rows = model
            .constraints()
            .iter()
            .filter(|c| c.is_unit_row())
            .collect::<Vec<_>>();
        let equalities_first = unit_rows
            .iter()
            .filter(|c| c.cmp().has_lower())
            .chain(unit_rows.iter().filter(|c| !c.cmp().has_lower()));

        for row in equalities_first {
            let mut members = Vec::new();
            for &(var, _) in row.expr().terms() {
                let index = var.index();
                if coefficients[index] != 0.0 && group_of[index].is_none() {
                    group_of[index] = Some(groups.len());
                    members.push(index);
                }
            }
            if !members.is_empty() {
                groups.push(members);
            }
        }

        let ungrouped = (0..n)
            .filter(|&i| coefficients[i] != 0.0 && group_of[i].is_none())
            .collect();

        Self {
            coefficients,
            groups,
            ungrouped,
        }
    }

    #[inline]
    pub(crate) fn coefficient(&self, index: usize) -> f64 {
        self.coefficients[index]
    }

    /// Objective of the fixed part of `assignment`.
    pub(crate) fn fixed_objective(&self, assignment: &[Option<bool>]) -> f64 {
        assignment
            .iter()
            .zip(&self.coefficients)
            .filter(|(value, _)| **value == Some(true))
            .map(|(_, coef)| coef)
            .sum()
    }

    /// Upper bound on any objective reachable from `assignment`.
    pub(crate) fn optimistic_bound(&self, assignment: &[Option<bool>]) -> f64 {
        let free_best = |members: &[usize]| {
            members
                .iter()
                .filter(|&&i| assignment[i].is_none())
                .map(|&i| self.coefficients[i])
                .fold(0.0_f64, f64::max)
        };

        let grouped: f64 = self.groups.iter().map(|members| free_best(members.as_slice())).sum();
        let ungrouped: f64 = self
            .ungrouped
            .iter()
            .filter(|&&i| assignment[i].is_none())
            .map(|&i| self.coefficients[i].max(0.0))
            .sum();

        self.fixed_objective(assignment) + grouped + ungrouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ilp::{Comparison, LinearExpr};

    fn event_model() -> Model {
        // Two events, three candidates each, scores 1..=6.
        let mut model = Model::new("t");
        let vars: Vec<_> = (0..6).map(|i| model.add_binary(format!("x{i}"))).collect();
        model.add_constraint("e0", LinearExpr::sum(vars[..3].to_vec()), Comparison::Equal, 1.0);
        model.add_constraint("e1", LinearExpr::sum(vars[3..].to_vec()), Comparison::Equal, 1.0);
        model.set_objective(
            vars.iter()
                .enumerate()
                .map(|(i, &v)| (v, (i + 1) as f64))
                .collect(),
        );
        model
    }

    #[test]
    fn test_bound_takes_best_per_row() {
        let bounder = UnitRowBounder::new(&event_model());
        let free = vec![None; 6];

        assert_eq!(bounder.optimistic_bound(&free), 3.0 + 6.0);
    }

    #[test]
    fn test_bound_respects_fixings() {
        let bounder = UnitRowBounder::new(&event_model());
        let assignment = vec![
            Some(true),
            Some(false),
            Some(false),
            None,
            None,
            Some(false),
        ];

        assert_eq!(bounder.fixed_objective(&assignment), 1.0);
        assert_eq!(bounder.optimistic_bound(&assignment), 1.0 + 5.0);
    }

    #[test]
    fn test_ungrouped_counts_positive_only() {
        let mut model = Model::new("t");
        let a = model.add_binary("a");
        let b = model.add_binary("b");
        model.set_objective(LinearExpr::new().term(a, 4.0).term(b, -2.0));
        let bounder = UnitRowBounder::new(&model);

        assert_eq!(bounder.optimistic_bound(&[None, None]), 4.0);
        assert_eq!(bounder.optimistic_bound(&[Some(true), Some(true)]), 2.0);
    }
}
