//! The solve/prove adapter: satisfiability and validity queries over a
//! [`SolverBackend`].

use satlab_smtlib::formula::Formula;

use crate::backend::{SolverBackend, default_kind};
use crate::config::{SolverConfig, SolverKind};
use crate::error::SolverError;
use crate::model::Model;
use crate::result::{SolverResult, Validity};
use crate::solver::CliSolver;

/// Per-query solver timeout used by the default backend. Hard queries
/// (nonlinear real arithmetic) surface as `Unknown` instead of hanging.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Uniform interface for the two query styles every exercise uses:
/// satisfiability ([`solve`](Prover::solve)) and validity
/// ([`prove`](Prover::prove)), plus the assignment accessor
/// ([`solution`](Prover::solution)).
pub struct Prover {
    backend: Box<dyn SolverBackend>,
}

impl Prover {
    /// Create a prover over an explicit backend.
    pub fn new(backend: Box<dyn SolverBackend>) -> Self {
        Self { backend }
    }

    /// Create a prover with an auto-detected engine: `SATLAB_SOLVER`
    /// when set, Z3 otherwise, with the default per-query timeout.
    pub fn with_default_backend() -> Result<Self, SolverError> {
        Self::for_kind(default_kind()?)
    }

    /// Create a prover for a specific engine kind.
    pub fn for_kind(kind: SolverKind) -> Result<Self, SolverError> {
        let config = SolverConfig::auto_detect_for(kind)?.with_timeout(DEFAULT_TIMEOUT_MS);
        Ok(Self::new(Box::new(CliSolver::new(config))))
    }

    /// Is `formula` satisfiable under some assignment of its free
    /// variables?
    pub fn solve(&self, formula: &Formula) -> Result<SolverResult, SolverError> {
        self.backend.check_sat(&formula.to_script())
    }

    /// Is `formula` valid, i.e. true under every assignment of its free
    /// variables?
    ///
    /// Checks satisfiability of the negation: `Proved` iff the negation
    /// is unsatisfiable, `Counterexample` iff the negation has a model
    /// (the falsifying assignment), `Unknown` when the engine cannot
    /// decide.
    pub fn prove(&self, formula: &Formula) -> Result<Validity, SolverError> {
        match self.backend.check_sat(&formula.negated_script())? {
            SolverResult::Unsat => Ok(Validity::Proved),
            SolverResult::Sat(model) => Ok(Validity::Counterexample(model)),
            SolverResult::Unknown(reason) => Ok(Validity::Unknown(reason)),
        }
    }

    /// Concrete variable assignment witnessing satisfiability of
    /// `formula`.
    ///
    /// Fails with [`SolverError::NoSolution`] when the formula is
    /// unsatisfiable or undecided; an assignment is never fabricated.
    pub fn solution(&self, formula: &Formula) -> Result<Model, SolverError> {
        match self.solve(formula)? {
            SolverResult::Sat(Some(model)) => Ok(model),
            SolverResult::Sat(None) => Err(SolverError::ParseError(
                "satisfiable, but the solver produced no model".to_string(),
            )),
            SolverResult::Unsat | SolverResult::Unknown(_) => Err(SolverError::NoSolution),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use satlab_smtlib::Vars;
    use satlab_smtlib::build::{ge, int};
    use satlab_smtlib::script::Script;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Backend returning a canned result and recording each script.
    struct Canned {
        result: SolverResult,
        seen: Rc<RefCell<Vec<String>>>,
    }

    impl Canned {
        fn new(result: SolverResult) -> Self {
            Self {
                result,
                seen: Rc::new(RefCell::new(Vec::new())),
            }
        }
    }

    impl SolverBackend for Canned {
        fn check_sat(&self, script: &Script) -> Result<SolverResult, SolverError> {
            self.seen.borrow_mut().push(script.to_string());
            Ok(self.result.clone())
        }
    }

    fn nonneg_formula() -> Formula {
        let mut vars = Vars::new();
        let x = vars.int("x");
        Formula::new(vars, ge(x, int(0)))
    }

    fn prover_with(result: SolverResult) -> Prover {
        Prover::new(Box::new(Canned::new(result)))
    }

    #[test]
    fn prove_negates_the_body_and_solve_does_not() {
        let canned = Canned::new(SolverResult::Unsat);
        let seen = Rc::clone(&canned.seen);
        let prover = Prover::new(Box::new(canned));

        prover.prove(&nonneg_formula()).unwrap();
        prover.solve(&nonneg_formula()).unwrap();

        let logged = seen.borrow();
        assert!(logged[0].contains("(assert (not (>= x 0)))"));
        assert!(logged[1].contains("(assert (>= x 0))"));
    }

    #[test]
    fn prove_maps_unsat_to_proved() {
        let prover = prover_with(SolverResult::Unsat);
        assert_eq!(prover.prove(&nonneg_formula()).unwrap(), Validity::Proved);
    }

    #[test]
    fn prove_maps_sat_to_counterexample() {
        let model = Model::with_assignments(vec![("x".to_string(), "(- 1)".to_string())]);
        let prover = prover_with(SolverResult::Sat(Some(model.clone())));
        assert_eq!(
            prover.prove(&nonneg_formula()).unwrap(),
            Validity::Counterexample(Some(model))
        );
    }

    #[test]
    fn prove_passes_unknown_through() {
        let prover = prover_with(SolverResult::Unknown("timeout".to_string()));
        assert_eq!(
            prover.prove(&nonneg_formula()).unwrap(),
            Validity::Unknown("timeout".to_string())
        );
    }

    #[test]
    fn solution_requires_sat() {
        let prover = prover_with(SolverResult::Unsat);
        assert_eq!(
            prover.solution(&nonneg_formula()).unwrap_err(),
            SolverError::NoSolution
        );

        let prover = prover_with(SolverResult::Unknown("incomplete".to_string()));
        assert_eq!(
            prover.solution(&nonneg_formula()).unwrap_err(),
            SolverError::NoSolution
        );
    }

    #[test]
    fn solution_returns_the_model() {
        let model = Model::with_assignments(vec![("x".to_string(), "7".to_string())]);
        let prover = prover_with(SolverResult::Sat(Some(model.clone())));
        assert_eq!(prover.solution(&nonneg_formula()).unwrap(), model);
    }

    #[test]
    fn solution_on_modelless_sat_is_a_parse_error() {
        let prover = prover_with(SolverResult::Sat(None));
        assert!(matches!(
            prover.solution(&nonneg_formula()),
            Err(SolverError::ParseError(_))
        ));
    }
}
