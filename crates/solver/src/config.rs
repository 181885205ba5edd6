//! Solver binary selection and process configuration.

use std::fmt;
use std::path::PathBuf;

use crate::error::SolverError;

/// Supported SMT solver backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverKind {
    /// Z3 from Microsoft Research.
    Z3,
    /// CVC5 from Stanford/Iowa.
    Cvc5,
    /// Yices2 from SRI International.
    Yices,
}

/// Installation prefixes probed when PATH lookup fails.
const COMMON_PREFIXES: &[&str] = &["/opt/homebrew/bin", "/usr/local/bin", "/usr/bin"];

impl SolverKind {
    /// Binary name used for PATH lookup.
    pub fn binary_name(&self) -> &'static str {
        match self {
            SolverKind::Z3 => "z3",
            SolverKind::Cvc5 => "cvc5",
            SolverKind::Yices => "yices-smt2",
        }
    }

    /// CLI arguments that make the solver read SMT-LIB2 from stdin and
    /// produce models.
    pub fn stdin_args(&self) -> Vec<String> {
        match self {
            SolverKind::Z3 => vec!["-in".to_string()],
            SolverKind::Cvc5 => vec![
                "--lang".to_string(),
                "smt2".to_string(),
                "--produce-models".to_string(),
            ],
            SolverKind::Yices => vec!["--incremental".to_string()],
        }
    }

    /// Solver-specific timeout argument, if one is configured.
    pub fn timeout_arg(&self, timeout_ms: u64) -> Option<String> {
        if timeout_ms == 0 {
            return None;
        }
        match self {
            SolverKind::Z3 => Some(format!("-t:{timeout_ms}")),
            SolverKind::Cvc5 => Some(format!("--tlimit={timeout_ms}")),
            // yices takes whole seconds; round up so a short limit is not dropped
            SolverKind::Yices => Some(format!("--timeout={}", timeout_ms.div_ceil(1000))),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverKind::Z3 => write!(f, "Z3"),
            SolverKind::Cvc5 => write!(f, "CVC5"),
            SolverKind::Yices => write!(f, "Yices"),
        }
    }
}

impl std::str::FromStr for SolverKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "z3" => Ok(SolverKind::Z3),
            "cvc5" => Ok(SolverKind::Cvc5),
            "yices" | "yices2" | "yices-smt2" => Ok(SolverKind::Yices),
            _ => Err(format!(
                "unknown solver: {s} (valid options: z3, cvc5, yices)"
            )),
        }
    }
}

/// Solver process configuration.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Which solver to run.
    pub kind: SolverKind,
    /// Path to the solver binary.
    pub solver_path: PathBuf,
    /// Timeout in milliseconds (0 = no timeout).
    pub timeout_ms: u64,
    /// Additional solver arguments.
    pub extra_args: Vec<String>,
}

impl SolverConfig {
    /// Create a new config with the given solver kind and path.
    pub fn new(kind: SolverKind, solver_path: PathBuf) -> Self {
        Self {
            kind,
            solver_path,
            timeout_ms: 0,
            extra_args: Vec::new(),
        }
    }

    /// Set the per-query timeout (in milliseconds).
    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Add extra arguments for the solver invocation.
    pub fn with_extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    /// Auto-detect the binary location for the given solver kind.
    ///
    /// Tries `which <binary>` first, then common installation prefixes.
    pub fn auto_detect_for(kind: SolverKind) -> Result<Self, SolverError> {
        let binary = kind.binary_name();

        if let Ok(output) = std::process::Command::new("which").arg(binary).output()
            && output.status.success()
        {
            let found = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if !found.is_empty() {
                let path = PathBuf::from(&found);
                if path.exists() {
                    return Ok(Self::new(kind, path));
                }
            }
        }

        for prefix in COMMON_PREFIXES {
            let path = PathBuf::from(prefix).join(binary);
            if path.exists() {
                return Ok(Self::new(kind, path));
            }
        }

        Err(SolverError::NotFound(kind, PathBuf::from(binary)))
    }

    /// Auto-detect Z3 (the default engine).
    pub fn auto_detect() -> Result<Self, SolverError> {
        Self::auto_detect_for(SolverKind::Z3)
    }

    /// Full argument list for this solver invocation.
    pub fn args(&self) -> Vec<String> {
        let mut args = self.kind.stdin_args();
        if let Some(timeout_arg) = self.kind.timeout_arg(self.timeout_ms) {
            args.push(timeout_arg);
        }
        args.extend(self.extra_args.iter().cloned());
        args
    }

    /// Validate that the configured solver binary exists.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !self.solver_path.exists() {
            return Err(SolverError::NotFound(self.kind, self.solver_path.clone()));
        }
        Ok(())
    }
}
