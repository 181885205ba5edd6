use std::fmt;
use std::path::PathBuf;

use crate::config::SolverKind;

/// Errors from solver interaction.
///
/// Ordinary non-findings are not errors: "unsatisfiable" and "cannot
/// decide" travel as [`SolverResult`](crate::result::SolverResult)
/// values. This enum covers infrastructure failures and precondition
/// violations only.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Solver binary not found at the given path.
    NotFound(SolverKind, PathBuf),
    /// Process failed to start or crashed.
    ProcessError(String),
    /// Failed to parse solver output.
    ParseError(String),
    /// A solution was requested for a formula not shown satisfiable.
    NoSolution,
    /// A model lookup named a variable absent from the solved formula.
    MissingVariable(String),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::NotFound(kind, path) => {
                write!(f, "{kind} binary not found at: {}", path.display())
            }
            SolverError::ProcessError(msg) => write!(f, "solver process error: {msg}"),
            SolverError::ParseError(msg) => write!(f, "failed to parse solver output: {msg}"),
            SolverError::NoSolution => write!(f, "no solution available"),
            SolverError::MissingVariable(name) => {
                write!(f, "variable `{name}` is not part of the solved formula")
            }
        }
    }
}

impl std::error::Error for SolverError {}
