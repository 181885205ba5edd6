//! # satlab-solver
//!
//! A uniform interface over external SMT decision procedures, built on
//! spawning the solver as a subprocess and communicating via SMT-LIB2
//! text.
//!
//! Two query styles share one engine:
//!
//! - satisfiability: [`Prover::solve`] returns
//!   [`SolverResult::Sat`]/[`SolverResult::Unsat`]/[`SolverResult::Unknown`];
//! - validity: [`Prover::prove`] checks the negation and returns
//!   [`Validity::Proved`]/[`Validity::Counterexample`]/[`Validity::Unknown`].
//!
//! Engine timeouts and resource limits surface as `Unknown`, never as a
//! crash: "no solution" and "cannot decide" are data, not errors.
//!
//! ```no_run
//! use satlab_smtlib::build::{ge, int};
//! use satlab_smtlib::{Formula, Vars};
//! use satlab_solver::{Prover, Validity};
//!
//! let prover = Prover::with_default_backend().unwrap();
//! let mut vars = Vars::new();
//! let x = vars.int("x");
//! let nonneg = Formula::new(vars, ge(x.clone(), int(0)));
//! match prover.prove(&nonneg).unwrap() {
//!     Validity::Proved => println!("valid"),
//!     Validity::Counterexample(model) => println!("falsified: {model:?}"),
//!     Validity::Unknown(reason) => println!("undecided: {reason}"),
//! }
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod model;
mod parser;
pub mod prove;
pub mod result;
pub mod solver;

// Re-export primary types for ergonomic use
pub use backend::SolverBackend;
pub use config::{SolverConfig, SolverKind};
pub use error::SolverError;
pub use model::Model;
pub use prove::Prover;
pub use result::{SolverResult, Validity};
pub use solver::CliSolver;
