//! Parsing of solver stdout into a [`SolverResult`].
//!
//! The first meaningful line is the status (`sat`, `unsat`, `unknown`);
//! on `sat` the remainder is the `(get-model)` block. Two model layouts
//! are in the wild: `(model (define-fun ...) ...)` from older Z3 and
//! CVC5, and a bare parenthesized list from Z3 4.15+. Both reduce to a
//! scan for nullary `define-fun` entries.

use crate::error::SolverError;
use crate::model::Model;
use crate::result::SolverResult;

pub(crate) fn parse_output(stdout: &str, stderr: &str) -> Result<SolverResult, SolverError> {
    let stdout = stdout.trim();

    if stdout.is_empty() {
        if stderr.contains("timeout") {
            return Ok(SolverResult::Unknown("timeout".to_string()));
        }
        return Err(SolverError::ParseError(format!(
            "empty solver output, stderr: {stderr}"
        )));
    }

    let mut lines = stdout.lines().map(str::trim).filter(|l| !l.is_empty());
    let status = lines.next().unwrap_or_default();

    match status {
        "unsat" => Ok(SolverResult::Unsat),
        "sat" => Ok(SolverResult::Sat(scan_model(stdout))),
        "unknown" => Ok(SolverResult::Unknown(unknown_reason(lines.next(), stderr))),
        "timeout" => Ok(SolverResult::Unknown("timeout".to_string())),
        other => Err(SolverError::ParseError(format!(
            "unexpected solver output: {other}"
        ))),
    }
}

/// Reason text for an `unknown` status: the line the solver printed
/// after it, else stderr, else a plain "unknown".
fn unknown_reason(next_line: Option<&str>, stderr: &str) -> String {
    if let Some(line) = next_line {
        line.trim_start_matches('(').trim_end_matches(')').to_string()
    } else if !stderr.trim().is_empty() {
        stderr.trim().to_string()
    } else {
        "unknown".to_string()
    }
}

/// Collect nullary `define-fun` entries from the model block.
fn scan_model(output: &str) -> Option<Model> {
    let mut assignments = Vec::new();
    let mut rest = output;

    while let Some(start) = rest.find("(define-fun ") {
        let entry = &rest[start..];
        let Some(end) = sexp_end(entry) else { break };
        if let Some(pair) = parse_entry(&entry[..end]) {
            assignments.push(pair);
        }
        rest = &entry[end..];
    }

    if assignments.is_empty() {
        None
    } else {
        Some(Model::with_assignments(assignments))
    }
}

/// Parse one `(define-fun name () Sort value)` into `(name, value)`.
///
/// Entries with parameters are function definitions, not constants,
/// and are skipped.
fn parse_entry(entry: &str) -> Option<(String, String)> {
    let body = entry.strip_prefix("(define-fun ")?.strip_suffix(')')?;
    // Solvers break entries across lines; collapse all whitespace first
    let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");

    let (name, rest) = flat.split_once(' ')?;
    let rest = rest.strip_prefix("() ")?;
    let value = skip_sort(rest)?.trim();

    if value.is_empty() {
        None
    } else {
        Some((name.to_string(), value.to_string()))
    }
}

/// Skip the result sort, atomic (`Int`) or parenthesized.
fn skip_sort(input: &str) -> Option<&str> {
    if input.starts_with('(') {
        Some(&input[sexp_end(input)?..])
    } else {
        input.split_once(' ').map(|(_, rest)| rest)
    }
}

/// Index one past the closing paren of the s-expression starting at
/// byte 0 of `input`.
pub(crate) fn sexp_end(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    if bytes.first() != Some(&b'(') {
        return None;
    }

    let mut depth = 1usize;
    for (i, b) in bytes.iter().enumerate().skip(1) {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- status line ----

    #[test]
    fn parse_unsat() {
        assert_eq!(parse_output("unsat\n", "").unwrap(), SolverResult::Unsat);
    }

    #[test]
    fn parse_sat_without_model() {
        assert_eq!(parse_output("sat\n", "").unwrap(), SolverResult::Sat(None));
    }

    #[test]
    fn parse_unknown_with_reason_line() {
        let result = parse_output("unknown\n(incomplete (theory arithmetic))\n", "").unwrap();
        assert_eq!(
            result,
            SolverResult::Unknown("incomplete (theory arithmetic".to_string())
        );
    }

    #[test]
    fn parse_unknown_reason_from_stderr() {
        let result = parse_output("unknown\n", "resource limit reached\n").unwrap();
        assert_eq!(
            result,
            SolverResult::Unknown("resource limit reached".to_string())
        );
    }

    #[test]
    fn parse_bare_timeout() {
        let result = parse_output("timeout\n", "").unwrap();
        assert_eq!(result, SolverResult::Unknown("timeout".to_string()));
    }

    #[test]
    fn empty_output_is_an_error() {
        assert!(parse_output("", "").is_err());
    }

    #[test]
    fn empty_output_with_timeout_stderr_is_unknown() {
        let result = parse_output("", "timeout\n").unwrap();
        assert!(result.is_unknown());
    }

    #[test]
    fn garbage_output_is_an_error() {
        assert!(parse_output("segmentation fault\n", "").is_err());
    }

    // ---- model block, older `(model ...)` layout ----

    #[test]
    fn model_old_layout() {
        let output = "\
sat
(model
  (define-fun x () Int 5)
  (define-fun p () Bool true)
)";
        let result = parse_output(output, "").unwrap();
        let model = result.model().unwrap();
        assert_eq!(model.get("x"), Some("5"));
        assert_eq!(model.get("p"), Some("true"));
    }

    #[test]
    fn model_negative_value() {
        let output = "\
sat
(model
  (define-fun x () Int (- 3))
)";
        let model = parse_output(output, "").unwrap().model().cloned().unwrap();
        assert_eq!(model.get("x"), Some("(- 3)"));
        assert_eq!(model.int("x").unwrap(), -3);
    }

    // ---- model block, bare Z3 4.15+ layout ----

    #[test]
    fn model_new_layout_multiline_entries() {
        let output = "\
sat
(
  (define-fun x () Int
    10)
  (define-fun t () Real
    (/ 7.0 2.0))
)";
        let model = parse_output(output, "").unwrap().model().cloned().unwrap();
        assert_eq!(model.get("x"), Some("10"));
        assert_eq!(model.get("t"), Some("(/ 7.0 2.0)"));
        assert_eq!(model.rational("t").unwrap(), (7, 2));
    }

    #[test]
    fn model_skips_parameterized_functions() {
        let output = "\
sat
(
  (define-fun f ((a Int)) Int (+ a 1))
  (define-fun x () Int 2)
)";
        let model = parse_output(output, "").unwrap().model().cloned().unwrap();
        assert_eq!(model.len(), 1);
        assert_eq!(model.get("x"), Some("2"));
    }

    // ---- helpers ----

    #[test]
    fn sexp_end_matches_nested_parens() {
        assert_eq!(sexp_end("(- (/ 1 2)) tail"), Some(11));
        assert_eq!(sexp_end("x"), None);
        assert_eq!(sexp_end("(unclosed"), None);
    }

    #[test]
    fn entry_with_compound_sort() {
        let entry = "(define-fun v () (Array Int Int) something)";
        assert_eq!(
            parse_entry(entry),
            Some(("v".to_string(), "something".to_string()))
        );
    }
}
