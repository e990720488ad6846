//! Binary integer programming model.
//!
//! This is the boundary between the team optimizer and whatever engine
//! solves the problem. The optimizer only poses a [`Model`] (binary
//! variables, linear constraints, a linear objective to maximize) and reads
//! back a [`ModelSolution`]. Any engine implementing [`IlpSolver`] can be
//! plugged in; [`crate::bnb::BranchAndBound`] is the built-in one.

mod expr;

use std::fmt::{self, Debug};
use std::time::Duration;

use thiserror::Error;

use crate::stats::SearchStats;

pub use expr::LinearExpr;

/// Handle to a binary variable of a [`Model`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(usize);

impl VarId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Relation between a constraint's left-hand side and its right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    LessEq,
    Equal,
    GreaterEq,
}

impl Comparison {
    /// Returns true if `lhs (cmp) rhs` holds within `eps`.
    pub fn holds(self, lhs: f64, rhs: f64, eps: f64) -> bool {
        match self {
            Comparison::LessEq => lhs <= rhs + eps,
            Comparison::Equal => (lhs - rhs).abs() <= eps,
            Comparison::GreaterEq => lhs >= rhs - eps,
        }
    }

    /// True for `<=` and `=`.
    #[inline]
    pub fn has_upper(self) -> bool {
        matches!(self, Comparison::LessEq | Comparison::Equal)
    }

    /// True for `>=` and `=`.
    #[inline]
    pub fn has_lower(self) -> bool {
        matches!(self, Comparison::GreaterEq | Comparison::Equal)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::LessEq => write!(f, "<="),
            Comparison::Equal => write!(f, "="),
            Comparison::GreaterEq => write!(f, ">="),
        }
    }
}

/// A linear constraint `expr (cmp) rhs`.
#[derive(Debug, Clone)]
pub struct Constraint {
    name: String,
    expr: LinearExpr,
    cmp: Comparison,
    rhs: f64,
}

impl Constraint {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn expr(&self) -> &LinearExpr {
        &self.expr
    }

    #[inline]
    pub fn cmp(&self) -> Comparison {
        self.cmp
    }

    #[inline]
    pub fn rhs(&self) -> f64 {
        self.rhs
    }

    /// Returns true if the constraint holds for `values` within `eps`.
    pub fn is_satisfied(&self, values: &[f64], eps: f64) -> bool {
        self.cmp.holds(self.expr.evaluate(values), self.rhs, eps)
    }

    /// Returns true for rows of the form `x1 + x2 + ... (<= | =) 1`.
    pub fn is_unit_row(&self) -> bool {
        self.cmp.has_upper()
            && (self.rhs - 1.0).abs() < f64::EPSILON
            && self.expr.terms().iter().all(|&(_, coef)| coef == 1.0)
    }
}

/// A maximization problem over binary variables.
///
/// # Examples
///
/// ```
/// use squadforge_solver::ilp::{Comparison, LinearExpr, Model};
///
/// let mut model = Model::new("pick-one");
/// let a = model.add_binary("a");
/// let b = model.add_binary("b");
/// model.add_constraint("one", LinearExpr::sum([a, b]), Comparison::Equal, 1.0);
/// model.set_objective(LinearExpr::new().term(a, 2.0).term(b, 3.0));
///
/// assert_eq!(model.num_variables(), 2);
/// assert_eq!(model.objective_value(&[0.0, 1.0]), 3.0);
/// assert!(model.is_feasible(&[0.0, 1.0], 1e-9));
/// assert!(!model.is_feasible(&[1.0, 1.0], 1e-9));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Model {
    name: String,
    variables: Vec<String>,
    constraints: Vec<Constraint>,
    objective: LinearExpr,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a named binary variable.
    pub fn add_binary(&mut self, name: impl Into<String>) -> VarId {
        self.variables.push(name.into());
        VarId(self.variables.len() - 1)
    }

    /// Adds `expr (cmp) rhs`. Repeated variables in `expr` are merged.
    pub fn add_constraint(
        &mut self,
        name: impl Into<String>,
        expr: LinearExpr,
        cmp: Comparison,
        rhs: f64,
    ) {
        self.constraints.push(Constraint {
            name: name.into(),
            expr: expr.normalized(),
            cmp,
            rhs,
        });
    }

    /// Sets the linear objective to maximize.
    pub fn set_objective(&mut self, objective: LinearExpr) {
        self.objective = objective.normalized();
    }

    #[inline]
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn var_name(&self, var: VarId) -> Option<&str> {
        self.variables.get(var.0).map(String::as_str)
    }

    #[inline]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    #[inline]
    pub fn objective(&self) -> &LinearExpr {
        &self.objective
    }

    /// Evaluates the objective at `values`.
    pub fn objective_value(&self, values: &[f64]) -> f64 {
        self.objective.evaluate(values)
    }

    /// Returns true if every constraint holds at `values`.
    pub fn is_feasible(&self, values: &[f64], eps: f64) -> bool {
        self.constraints.iter().all(|c| c.is_satisfied(values, eps))
    }

    /// Checks that every term refers to a variable of this model and that
    /// every coefficient is finite.
    pub fn validate(&self) -> Result<(), IlpError> {
        let n = self.num_variables();
        let check = |owner: &str, expr: &LinearExpr| -> Result<(), IlpError> {
            for &(var, coef) in expr.terms() {
                if var.0 >= n {
                    return Err(IlpError::Unsupported(format!(
                        "{owner} refers to unknown variable #{}",
                        var.0
                    )));
                }
                if !coef.is_finite() {
                    return Err(IlpError::Unsupported(format!(
                        "{owner} has non-finite coefficient {coef} on {}",
                        self.variables[var.0]
                    )));
                }
            }
            Ok(())
        };

        check("objective", &self.objective)?;
        for constraint in &self.constraints {
            check(&constraint.name, &constraint.expr)?;
            if !constraint.rhs.is_finite() {
                return Err(IlpError::Unsupported(format!(
                    "{} has non-finite right-hand side",
                    constraint.name
                )));
            }
        }
        Ok(())
    }
}

/// How far an engine got with a model it could satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// The solution is proven optimal.
    Optimal,
    /// The best solution found before the search budget ran out.
    Feasible,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveStatus::Optimal => write!(f, "Optimal"),
            SolveStatus::Feasible => write!(f, "Feasible"),
        }
    }
}

/// Values an engine assigned to a model's variables.
#[derive(Debug, Clone)]
pub struct ModelSolution {
    pub status: SolveStatus,
    pub values: Vec<f64>,
    pub objective: f64,
    pub stats: SearchStats,
}

impl ModelSolution {
    /// Returns the value of `var`, or 0 if the engine reported none.
    #[inline]
    pub fn value(&self, var: VarId) -> f64 {
        self.values.get(var.0).copied().unwrap_or(0.0)
    }
}

/// Engine failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IlpError {
    /// No assignment satisfies every constraint.
    #[error("model is infeasible")]
    Infeasible,

    /// The search budget ran out before any feasible assignment was found.
    #[error("search budget exhausted after {nodes} nodes ({elapsed:?}) without a feasible solution")]
    BudgetExhausted { nodes: u64, elapsed: Duration },

    /// The engine cannot handle the model.
    #[error("unsupported model: {0}")]
    Unsupported(String),
}

/// A generic binary integer programming engine.
pub trait IlpSolver: Send + Sync + Debug {
    /// Maximizes `model`'s objective subject to its constraints.
    fn solve(&self, model: &Model) -> Result<ModelSolution, IlpError>;

    /// Returns the engine name for logging.
    fn engine_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests;
