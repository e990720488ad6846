//! Linear expressions over binary variables.

use smallvec::SmallVec;

use super::VarId;

/// A sum of `coefficient * variable` terms.
///
/// Most rows of a team model touch a handful of variables, so the terms
/// live inline until they outgrow the small buffer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearExpr {
    terms: SmallVec<[(VarId, f64); 8]>,
}

impl LinearExpr {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of `vars`, each with coefficient 1.
    pub fn sum(vars: impl IntoIterator<Item = VarId>) -> Self {
        vars.into_iter().map(|var| (var, 1.0)).collect()
    }

    /// Adds `coef * var` and returns the expression.
    pub fn term(mut self, var: VarId, coef: f64) -> Self {
        self.add_term(var, coef);
        self
    }

    pub fn add_term(&mut self, var: VarId, coef: f64) {
        self.terms.push((var, coef));
    }

    #[inline]
    pub fn terms(&self) -> &[(VarId, f64)] {
        &self.terms
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Evaluates the expression; missing values count as 0.
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        self.terms
            .iter()
            .map(|&(var, coef)| coef * values.get(var.index()).copied().unwrap_or(0.0))
            .sum()
    }

    /// Merges repeated variables and drops zero coefficients, ordering terms
    /// by variable.
    pub fn normalized(mut self) -> Self {
        self.terms.sort_by_key(|&(var, _)| var);
        let mut merged: SmallVec<[(VarId, f64); 8]> = SmallVec::with_capacity(self.terms.len());
        for (var, coef) in self.terms {
            match merged.last_mut() {
                Some((last, total)) if *last == var => *total += coef,
                _ => merged.push((var, coef)),
            }
        }
        merged.retain(|(_, coef)| *coef != 0.0);
        Self { terms: merged }
    }
}

impl FromIterator<(VarId, f64)> for LinearExpr {
    fn from_iter<I: IntoIterator<Item = (VarId, f64)>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

impl Extend<(VarId, f64)> for LinearExpr {
    fn extend<I: IntoIterator<Item = (VarId, f64)>>(&mut self, iter: I) {
        self.terms.extend(iter);
    }
}
