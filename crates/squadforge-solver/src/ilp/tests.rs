use super::*;

fn two_vars() -> (Model, VarId, VarId) {
    let mut model = Model::new("test");
    let a = model.add_binary("a");
    let b = model.add_binary("b");
    (model, a, b)
}

#[test]
fn test_normalization_merges_and_drops() {
    let (_, a, b) = two_vars();
    let expr = LinearExpr::new()
        .term(b, 1.0)
        .term(a, 2.0)
        .term(b, -1.0)
        .term(a, 0.5)
        .normalized();

    assert_eq!(expr.terms(), &[(a, 2.5)]);
}

#[test]
fn test_constraint_satisfaction() {
    let (mut model, a, b) = two_vars();
    model.add_constraint("le", LinearExpr::sum([a, b]), Comparison::LessEq, 1.0);
    model.add_constraint("ge", LinearExpr::sum([a]), Comparison::GreaterEq, 1.0);

    assert!(model.is_feasible(&[1.0, 0.0], 1e-9));
    assert!(!model.is_feasible(&[0.0, 1.0], 1e-9));
    assert!(!model.is_feasible(&[1.0, 1.0], 1e-9));
    assert_eq!(model.constraints()[0].name(), "le");
    assert_eq!(model.constraints()[0].cmp(), Comparison::LessEq);
}

#[test]
fn test_unit_row_detection() {
    let (mut model, a, b) = two_vars();
    model.add_constraint("unit", LinearExpr::sum([a, b]), Comparison::Equal, 1.0);
    model.add_constraint("cap", LinearExpr::sum([a, b]), Comparison::LessEq, 2.0);
    model.add_constraint(
        "link",
        LinearExpr::new().term(a, 1.0).term(b, -1.0),
        Comparison::LessEq,
        0.0,
    );
    model.add_constraint("floor", LinearExpr::sum([a, b]), Comparison::GreaterEq, 1.0);

    let unit: Vec<bool> = model.constraints().iter().map(Constraint::is_unit_row).collect();
    assert_eq!(unit, vec![true, false, false, false]);
}

#[test]
fn test_validate_rejects_foreign_variable() {
    let (mut model, a, _) = two_vars();
    let mut other = Model::new("other");
    other.add_binary("x");
    other.add_binary("y");
    let foreign = other.add_binary("z");

    model.add_constraint("bad", LinearExpr::sum([a, foreign]), Comparison::LessEq, 1.0);
    assert!(matches!(model.validate(), Err(IlpError::Unsupported(_))));
}

#[test]
fn test_validate_rejects_non_finite() {
    let (mut model, a, _) = two_vars();
    model.set_objective(LinearExpr::new().term(a, f64::NAN));
    assert!(matches!(model.validate(), Err(IlpError::Unsupported(_))));

    let (mut model, a, _) = two_vars();
    model.add_constraint("inf", LinearExpr::sum([a]), Comparison::LessEq, f64::INFINITY);
    assert!(matches!(model.validate(), Err(IlpError::Unsupported(_))));
}

#[test]
fn test_var_names() {
    let (model, a, b) = two_vars();
    assert_eq!(model.var_name(a), Some("a"));
    assert_eq!(model.var_name(b), Some("b"));
    assert_eq!(b.index(), 1);
}

#[test]
fn test_comparison_display() {
    assert_eq!(Comparison::LessEq.to_string(), "<=");
    assert_eq!(Comparison::Equal.to_string(), "=");
    assert_eq!(Comparison::GreaterEq.to_string(), ">=");
}
