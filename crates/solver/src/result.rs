use crate::model::Model;

/// Outcome of a satisfiability query.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverResult {
    /// A satisfying assignment exists (carried when the engine printed one).
    Sat(Option<Model>),
    /// Provably no satisfying assignment exists.
    Unsat,
    /// The engine could not decide (timeout, incompleteness, resource limit).
    Unknown(String),
}

impl SolverResult {
    /// Returns `true` if the result is `Sat`.
    pub fn is_sat(&self) -> bool {
        matches!(self, SolverResult::Sat(_))
    }

    /// Returns `true` if the result is `Unsat`.
    pub fn is_unsat(&self) -> bool {
        matches!(self, SolverResult::Unsat)
    }

    /// Returns `true` if the result is `Unknown`.
    pub fn is_unknown(&self) -> bool {
        matches!(self, SolverResult::Unknown(_))
    }

    /// The model, if the result is `Sat` with one.
    pub fn model(&self) -> Option<&Model> {
        match self {
            SolverResult::Sat(Some(model)) => Some(model),
            _ => None,
        }
    }
}

/// Outcome of a validity query.
///
/// `prove(F)` is `Proved` iff `solve(not F)` is `Unsat`, and
/// `Counterexample` iff `solve(not F)` is `Sat`; the carried model is
/// the falsifying assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum Validity {
    /// True under every assignment of the free variables.
    Proved,
    /// False under some assignment (carried when the engine printed one).
    Counterexample(Option<Model>),
    /// The engine could not decide.
    Unknown(String),
}

impl Validity {
    /// Returns `true` if the result is `Proved`.
    pub fn is_proved(&self) -> bool {
        matches!(self, Validity::Proved)
    }

    /// Returns `true` if the result is `Counterexample`.
    pub fn is_counterexample(&self) -> bool {
        matches!(self, Validity::Counterexample(_))
    }

    /// Returns `true` if the result is `Unknown`.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Validity::Unknown(_))
    }

    /// The falsifying assignment, if one was produced.
    pub fn counterexample(&self) -> Option<&Model> {
        match self {
            Validity::Counterexample(Some(model)) => Some(model),
            _ => None,
        }
    }
}
