//! Subprocess-based solver invocation.

use std::io::Write;
use std::process::{Command, Stdio};

use satlab_smtlib::script::Script;

use crate::config::{SolverConfig, SolverKind};
use crate::error::SolverError;
use crate::parser::parse_output;
use crate::result::SolverResult;

/// CLI SMT solver interface.
///
/// Spawns the configured solver (Z3, CVC5, Yices) as a subprocess and
/// pipes SMT-LIB2 text through stdin/stdout. Each query runs a fresh
/// process, so calls are independent: no state is shared between
/// formulas beyond the engine's own resource limits.
#[derive(Debug)]
pub struct CliSolver {
    config: SolverConfig,
}

impl CliSolver {
    /// Create a `CliSolver` with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Create a `CliSolver` with an auto-detected Z3 and default settings.
    pub fn with_default_config() -> Result<Self, SolverError> {
        Ok(Self::new(SolverConfig::auto_detect()?))
    }

    /// Create a `CliSolver` with an auto-detected binary for `kind`.
    pub fn with_default_config_for(kind: SolverKind) -> Result<Self, SolverError> {
        Ok(Self::new(SolverConfig::auto_detect_for(kind)?))
    }

    /// Get a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Check satisfiability of a script.
    ///
    /// Appends `(check-sat)` and `(get-model)` when the script does not
    /// already issue them, then runs the configured solver.
    pub fn check_sat(&self, script: &Script) -> Result<SolverResult, SolverError> {
        let mut smtlib = script.to_string();
        if !script.has_check_sat() {
            smtlib.push_str("(check-sat)\n");
        }
        if !script.has_get_model() {
            smtlib.push_str("(get-model)\n");
        }
        self.check_sat_raw(&smtlib)
    }

    /// Check satisfiability from raw SMT-LIB2 text.
    ///
    /// The text is passed through untouched; callers are responsible
    /// for including `(check-sat)`.
    pub fn check_sat_raw(&self, smtlib: &str) -> Result<SolverResult, SolverError> {
        self.config.validate()?;

        tracing::debug!(solver = %self.config.kind, bytes = smtlib.len(), "invoking solver");

        let mut child = Command::new(&self.config.solver_path)
            .args(self.config.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                SolverError::ProcessError(format!("failed to start {}: {e}", self.config.kind))
            })?;

        {
            let stdin = child.stdin.as_mut().ok_or_else(|| {
                SolverError::ProcessError("failed to open solver stdin".to_string())
            })?;
            stdin.write_all(smtlib.as_bytes()).map_err(|e| {
                SolverError::ProcessError(format!("failed to write to solver stdin: {e}"))
            })?;
        }

        let output = child.wait_with_output().map_err(|e| {
            SolverError::ProcessError(format!("failed to wait for solver: {e}"))
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        // Some engines report a hit time limit on stderr only
        if stderr.contains("timeout") || stdout.trim() == "timeout" {
            return Ok(SolverResult::Unknown("timeout".to_string()));
        }

        let result = parse_output(&stdout, &stderr);
        if let Ok(outcome) = &result {
            tracing::debug!(solver = %self.config.kind, outcome = outcome_label(outcome), "solver finished");
        }
        result
    }
}

fn outcome_label(result: &SolverResult) -> &'static str {
    match result {
        SolverResult::Sat(_) => "sat",
        SolverResult::Unsat => "unsat",
        SolverResult::Unknown(_) => "unknown",
    }
}
