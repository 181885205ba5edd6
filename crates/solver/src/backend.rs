//! Abstraction over solver backends.
//!
//! [`SolverBackend`] is the seam between formula-level code and the
//! engine: the [`Prover`](crate::prove::Prover) runs against any
//! implementation, and tests can substitute a canned one.

use satlab_smtlib::script::Script;

use crate::config::SolverKind;
use crate::error::SolverError;
use crate::result::SolverResult;
use crate::solver::CliSolver;

/// Trait abstracting over SMT solver backends.
pub trait SolverBackend {
    /// Check satisfiability of the given SMT script.
    ///
    /// Returns:
    /// - `Ok(SolverResult::Sat(model))` if satisfiable
    /// - `Ok(SolverResult::Unsat)` if unsatisfiable
    /// - `Ok(SolverResult::Unknown(reason))` if the engine couldn't decide
    /// - `Err(SolverError)` if the invocation itself failed
    fn check_sat(&self, script: &Script) -> Result<SolverResult, SolverError>;
}

impl SolverBackend for CliSolver {
    fn check_sat(&self, script: &Script) -> Result<SolverResult, SolverError> {
        CliSolver::check_sat(self, script)
    }
}

/// Environment variable selecting the engine (`z3`, `cvc5`, `yices`).
pub const SOLVER_ENV_VAR: &str = "SATLAB_SOLVER";

/// The solver kind to use by default: `SATLAB_SOLVER` when set, Z3
/// otherwise.
pub fn default_kind() -> Result<SolverKind, SolverError> {
    match std::env::var(SOLVER_ENV_VAR) {
        Ok(value) => {
            let kind = value.parse().map_err(SolverError::ParseError)?;
            tracing::debug!(%kind, "solver kind selected from {SOLVER_ENV_VAR}");
            Ok(kind)
        }
        Err(_) => Ok(SolverKind::Z3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // default_kind reads the process environment, which is shared across
    // the test harness's threads; only the unset path is exercised here.
    #[test]
    fn default_kind_without_env_is_z3() {
        if std::env::var(SOLVER_ENV_VAR).is_err() {
            assert_eq!(default_kind().unwrap(), SolverKind::Z3);
        }
    }
}
