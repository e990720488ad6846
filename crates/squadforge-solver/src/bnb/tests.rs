use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::*;
use crate::ilp::LinearExpr;

fn free_model(n: usize) -> Model {
    // No constraints, objective 1..=n.
    let mut model = Model::new("free");
    let vars: Vec<_> = (0..n).map(|i| model.add_binary(format!("x{i}"))).collect();
    model.set_objective(
        vars.iter()
            .enumerate()
            .map(|(i, &v)| (v, (i + 1) as f64))
            .collect(),
    );
    model
}

fn capped_model() -> Model {
    // Three items worth 5, 4 and 3; at most two may be taken.
    let mut model = Model::new("capped");
    let vars: Vec<_> = (0..3).map(|i| model.add_binary(format!("x{i}"))).collect();
    model.add_constraint("cap", LinearExpr::sum(vars.clone()), Comparison::LessEq, 2.0);
    model.set_objective(
        LinearExpr::new()
            .term(vars[0], 5.0)
            .term(vars[1], 4.0)
            .term(vars[2], 3.0),
    );
    model
}

fn assignment_model() -> Model {
    // Two workers, two jobs, each job covered once, each worker does at most
    // one job. Worker 0 is best at both jobs, so the optimum splits them.
    let mut model = Model::new("assignment");
    let w0j0 = model.add_binary("w0j0");
    let w0j1 = model.add_binary("w0j1");
    let w1j0 = model.add_binary("w1j0");
    let w1j1 = model.add_binary("w1j1");
    model.add_constraint("job0", LinearExpr::sum([w0j0, w1j0]), Comparison::Equal, 1.0);
    model.add_constraint("job1", LinearExpr::sum([w0j1, w1j1]), Comparison::Equal, 1.0);
    model.add_constraint("w0", LinearExpr::sum([w0j0, w0j1]), Comparison::LessEq, 1.0);
    model.add_constraint("w1", LinearExpr::sum([w1j0, w1j1]), Comparison::LessEq, 1.0);
    model.set_objective(
        LinearExpr::new()
            .term(w0j0, 10.0)
            .term(w0j1, 9.0)
            .term(w1j0, 2.0)
            .term(w1j1, 7.0),
    );
    model
}

#[test]
fn test_unconstrained_takes_everything() {
    let solution = BranchAndBound::exhaustive().solve(&free_model(4)).unwrap();

    assert_eq!(solution.status, SolveStatus::Optimal);
    assert_eq!(solution.objective, 10.0);
    assert_eq!(solution.values, vec![1.0; 4]);
}

#[test]
fn test_capacity_row() {
    let solution = BranchAndBound::exhaustive().solve(&capped_model()).unwrap();

    assert_eq!(solution.status, SolveStatus::Optimal);
    assert_eq!(solution.objective, 9.0);
    assert_eq!(solution.values, vec![1.0, 1.0, 0.0]);
}

#[test]
fn test_assignment_optimum() {
    let model = assignment_model();
    let solution = BranchAndBound::exhaustive().solve(&model).unwrap();

    // w0j0 + w1j1 = 17 beats w0j1 + w1j0 = 11.
    assert_eq!(solution.objective, 17.0);
    assert_eq!(solution.values, vec![1.0, 0.0, 0.0, 1.0]);
    assert!(model.is_feasible(&solution.values, 1e-9));
}

#[test]
fn test_best_bound_first_agrees() {
    let engine = BranchAndBound::new(ExplorationType::BestBoundFirst, NoTermination);

    let solution = engine.solve(&assignment_model()).unwrap();
    assert_eq!(solution.status, SolveStatus::Optimal);
    assert_eq!(solution.objective, 17.0);

    let solution = engine.solve(&capped_model()).unwrap();
    assert_eq!(solution.objective, 9.0);
}

#[test]
fn test_infeasible_model() {
    let mut model = Model::new("infeasible");
    let a = model.add_binary("a");
    let b = model.add_binary("b");
    model.add_constraint("one", LinearExpr::sum([a, b]), Comparison::Equal, 1.0);
    model.add_constraint("both", LinearExpr::sum([a, b]), Comparison::GreaterEq, 2.0);

    let result = BranchAndBound::exhaustive().solve(&model);
    assert_eq!(result.unwrap_err(), IlpError::Infeasible);
}

#[test]
fn test_infeasible_after_branching() {
    // a + b = 1, b + c = 1, a + c = 1 has no binary solution, but no single
    // row says so at the root.
    let mut model = Model::new("odd-cycle");
    let a = model.add_binary("a");
    let b = model.add_binary("b");
    let c = model.add_binary("c");
    model.add_constraint("ab", LinearExpr::sum([a, b]), Comparison::Equal, 1.0);
    model.add_constraint("bc", LinearExpr::sum([b, c]), Comparison::Equal, 1.0);
    model.add_constraint("ac", LinearExpr::sum([a, c]), Comparison::Equal, 1.0);

    let result = BranchAndBound::exhaustive().solve(&model);
    assert_eq!(result.unwrap_err(), IlpError::Infeasible);
}

#[test]
fn test_empty_model() {
    let solution = BranchAndBound::exhaustive()
        .solve(&Model::new("empty"))
        .unwrap();

    assert_eq!(solution.status, SolveStatus::Optimal);
    assert_eq!(solution.objective, 0.0);
    assert!(solution.values.is_empty());
}

#[test]
fn test_invalid_model_rejected() {
    let mut model = Model::new("nan");
    let a = model.add_binary("a");
    model.set_objective(LinearExpr::new().term(a, f64::NAN));

    let result = BranchAndBound::exhaustive().solve(&model);
    assert!(matches!(result, Err(IlpError::Unsupported(_))));
}

#[test]
fn test_zero_node_budget_exhausts() {
    let engine = BranchAndBound::new(ExplorationType::DepthFirst, NodeCountTermination::new(0));

    let result = engine.solve(&capped_model());
    assert!(matches!(
        result,
        Err(IlpError::BudgetExhausted { nodes: 0, .. })
    ));
}

#[test]
fn test_budget_after_first_leaf_is_feasible() {
    // Depth first reaches its first leaf on the 7th node; the unexplored
    // siblings keep the search from proving optimality.
    let engine = BranchAndBound::new(ExplorationType::DepthFirst, NodeCountTermination::new(7));

    let solution = engine.solve(&free_model(6)).unwrap();
    assert_eq!(solution.status, SolveStatus::Feasible);
    assert_eq!(solution.objective, 21.0);
    assert_eq!(solution.stats.nodes_explored, 7);
}

#[test]
fn test_from_config_limits() {
    let config = SolverConfig::new().with_node_count_limit(0);
    let result = BranchAndBound::from_config(&config).solve(&capped_model());
    assert!(matches!(result, Err(IlpError::BudgetExhausted { .. })));

    let config = SolverConfig::new().with_exploration_type(ExplorationType::BestBoundFirst);
    let engine = BranchAndBound::from_config(&config);
    assert_eq!(engine.exploration_type(), ExplorationType::BestBoundFirst);
    assert_eq!(engine.solve(&capped_model()).unwrap().status, SolveStatus::Optimal);
}

#[test]
fn test_terminate_early_flag() {
    let flag = Arc::new(AtomicBool::new(false));
    let engine = BranchAndBound::from_config(&SolverConfig::new())
        .with_terminate_early_flag(Arc::clone(&flag));

    assert!(engine.solve(&capped_model()).is_ok());

    flag.store(true, Ordering::SeqCst);
    assert!(matches!(
        engine.solve(&capped_model()),
        Err(IlpError::BudgetExhausted { .. })
    ));
}

#[test]
fn test_stats_collected() {
    let solution = BranchAndBound::exhaustive().solve(&assignment_model()).unwrap();

    assert!(solution.stats.nodes_explored > 0);
    assert!(solution.stats.incumbent_updates >= 1);
}

#[test]
fn test_engine_name() {
    assert_eq!(BranchAndBound::exhaustive().engine_name(), "BranchAndBound");
}
