//! Variable assignments extracted from a satisfiable query.

use crate::error::SolverError;
use crate::parser::sexp_end;

/// A model from the solver: the assignment witnessing satisfiability
/// (or, for validity queries, the counterexample).
///
/// Values are kept as the solver printed them; the typed accessors
/// [`int`](Model::int) and [`rational`](Model::rational) decode the
/// common numeric layouts (`5`, `(- 5)`, `7.0`, `(/ 7 2)`).
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Variable assignments: `(name, value_text)` pairs.
    assignments: Vec<(String, String)>,
}

impl Model {
    /// Create a model from assignment pairs.
    pub fn with_assignments(assignments: Vec<(String, String)>) -> Self {
        Self { assignments }
    }

    /// Look up a variable's raw value text.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Decode a variable as a mathematical integer.
    ///
    /// Fails with [`SolverError::MissingVariable`] when the variable was
    /// not part of the solved formula, and with
    /// [`SolverError::ParseError`] when its value is not an integer.
    pub fn int(&self, name: &str) -> Result<i64, SolverError> {
        let raw = self.require(name)?;
        parse_int(raw).ok_or_else(|| {
            SolverError::ParseError(format!("value of `{name}` is not an integer: {raw}"))
        })
    }

    /// Decode a variable as an exact rational, returned as a reduced
    /// `(numerator, denominator)` pair with positive denominator.
    pub fn rational(&self, name: &str) -> Result<(i64, i64), SolverError> {
        let raw = self.require(name)?;
        parse_rational(raw).ok_or_else(|| {
            SolverError::ParseError(format!("value of `{name}` is not a rational: {raw}"))
        })
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    fn require(&self, name: &str) -> Result<&str, SolverError> {
        self.get(name)
            .ok_or_else(|| SolverError::MissingVariable(name.to_string()))
    }
}

/// Parse `5` or `(- 5)`.
fn parse_int(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Some(inner) = strip_call(raw, "-") {
        return parse_int(inner)?.checked_neg();
    }
    raw.parse().ok()
}

/// Parse a rational value: `5`, `7.0`, `3.5`, `(/ 7 2)`, `(- (/ 1.0 3.0))`
/// and any nesting of the unary-minus and division layouts.
fn parse_rational(raw: &str) -> Option<(i64, i64)> {
    let raw = raw.trim();
    if let Some(inner) = strip_call(raw, "-") {
        let (n, d) = parse_rational(inner)?;
        return Some((n.checked_neg()?, d));
    }
    if let Some(inner) = strip_call(raw, "/") {
        let (num_text, den_text) = split_operand(inner)?;
        let (a, b) = parse_rational(num_text)?;
        let (c, d) = parse_rational(den_text)?;
        if c == 0 {
            return None;
        }
        return normalize(a.checked_mul(d)?, b.checked_mul(c)?);
    }
    parse_decimal(raw)
}

/// Strip a unary/binary application `(op ...)`, returning the operand text.
fn strip_call<'a>(raw: &'a str, op: &str) -> Option<&'a str> {
    let inner = raw.strip_prefix('(')?.strip_suffix(')')?.trim_start();
    let rest = inner.strip_prefix(op)?;
    if rest.starts_with(' ') || rest.starts_with('(') {
        Some(rest.trim())
    } else {
        None
    }
}

/// Split `"A B"` where `A` is an atom or a parenthesized expression.
fn split_operand(input: &str) -> Option<(&str, &str)> {
    let input = input.trim();
    let end = if input.starts_with('(') {
        sexp_end(input)?
    } else {
        input.find(' ').unwrap_or(input.len())
    };
    let rest = input[end..].trim();
    if rest.is_empty() {
        return None;
    }
    Some((&input[..end], rest))
}

/// Parse a decimal numeral (`7`, `7.0`, `3.5`) into a reduced fraction.
fn parse_decimal(s: &str) -> Option<(i64, i64)> {
    if let Some((whole_text, frac_text)) = s.split_once('.') {
        // SMT numerals carry no sign; unary minus is handled by the caller
        if whole_text.is_empty() || !whole_text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if frac_text.is_empty() || !frac_text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let scale = 10i64.checked_pow(frac_text.len() as u32)?;
        let whole: i64 = whole_text.parse().ok()?;
        let frac: i64 = frac_text.parse().ok()?;
        normalize(whole.checked_mul(scale)?.checked_add(frac)?, scale)
    } else {
        Some((s.parse().ok()?, 1))
    }
}

fn normalize(num: i64, den: i64) -> Option<(i64, i64)> {
    if den == 0 {
        return None;
    }
    let (num, den) = if den < 0 {
        (num.checked_neg()?, den.checked_neg()?)
    } else {
        (num, den)
    };
    let g = gcd(num.unsigned_abs(), den.unsigned_abs()).max(1) as i64;
    Some((num / g, den / g))
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> Model {
        Model::with_assignments(vec![
            ("x".to_string(), "42".to_string()),
            ("n".to_string(), "(- 3)".to_string()),
            ("t".to_string(), "(/ 7.0 2.0)".to_string()),
            ("u".to_string(), "(- (/ 1.0 3.0))".to_string()),
            ("r".to_string(), "5.0".to_string()),
            ("p".to_string(), "true".to_string()),
        ])
    }

    #[test]
    fn raw_lookup() {
        let m = model();
        assert_eq!(m.get("x"), Some("42"));
        assert_eq!(m.get("p"), Some("true"));
        assert_eq!(m.get("missing"), None);
        assert_eq!(m.len(), 6);
        assert!(!m.is_empty());
    }

    #[test]
    fn int_accessor() {
        let m = model();
        assert_eq!(m.int("x").unwrap(), 42);
        assert_eq!(m.int("n").unwrap(), -3);
    }

    #[test]
    fn int_accessor_failures() {
        let m = model();
        assert_eq!(
            m.int("absent").unwrap_err(),
            SolverError::MissingVariable("absent".to_string())
        );
        assert!(matches!(m.int("p"), Err(SolverError::ParseError(_))));
    }

    #[test]
    fn rational_accessor() {
        let m = model();
        assert_eq!(m.rational("t").unwrap(), (7, 2));
        assert_eq!(m.rational("u").unwrap(), (-1, 3));
        assert_eq!(m.rational("r").unwrap(), (5, 1));
        // plain integers are rationals too
        assert_eq!(m.rational("n").unwrap(), (-3, 1));
    }

    #[test]
    fn decimal_fractions_reduce() {
        assert_eq!(parse_decimal("3.5"), Some((7, 2)));
        assert_eq!(parse_decimal("0.125"), Some((1, 8)));
        assert_eq!(parse_decimal("2.50"), Some((5, 2)));
        assert_eq!(parse_decimal("1."), None);
    }

    #[test]
    fn nested_division_of_decimals() {
        assert_eq!(parse_rational("(/ 3.5 0.5)"), Some((7, 1)));
        assert_eq!(parse_rational("(/ 1 0)"), None);
    }

    #[test]
    fn malformed_values_rejected() {
        assert_eq!(parse_int("five"), None);
        assert_eq!(parse_int("(-5)"), None); // missing space after the operator
        assert_eq!(parse_rational("(/ 1)"), None); // missing denominator
    }
}
