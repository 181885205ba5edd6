//! Function-based term builders.
//!
//! SMT bindings for dynamic languages overload the host language's
//! operators so that `x >= 0` yields a symbolic node; Rust comparison
//! operators must return `bool`, so construction is explicit instead.
//! Builders take operands by value and box internally, which keeps call
//! sites flat:
//!
//! ```
//! use satlab_smtlib::build::{ge, implies, int, eq};
//! use satlab_smtlib::Term;
//!
//! let x = Term::Const("x".to_string());
//! let claim = implies(ge(x.clone(), int(0)), eq(x.clone(), x));
//! assert_eq!(claim.to_string(), "(=> (>= x 0) (= x x))");
//! ```

use crate::term::Term;

/// Integer literal.
pub fn int(n: i64) -> Term {
    Term::IntLit(n)
}

/// Logical NOT.
pub fn not(t: Term) -> Term {
    Term::Not(Box::new(t))
}

/// N-ary logical AND.
pub fn and(terms: impl IntoIterator<Item = Term>) -> Term {
    Term::And(terms.into_iter().collect())
}

/// N-ary logical OR.
pub fn or(terms: impl IntoIterator<Item = Term>) -> Term {
    Term::Or(terms.into_iter().collect())
}

/// Logical implication: `(=> premise conclusion)`.
pub fn implies(premise: Term, conclusion: Term) -> Term {
    Term::Implies(Box::new(premise), Box::new(conclusion))
}

/// Equality.
pub fn eq(a: Term, b: Term) -> Term {
    Term::Eq(Box::new(a), Box::new(b))
}

/// Pairwise distinctness.
pub fn distinct(terms: impl IntoIterator<Item = Term>) -> Term {
    Term::Distinct(terms.into_iter().collect())
}

/// If-then-else.
pub fn ite(cond: Term, then: Term, els: Term) -> Term {
    Term::Ite(Box::new(cond), Box::new(then), Box::new(els))
}

/// Addition.
pub fn add(a: Term, b: Term) -> Term {
    Term::Add(Box::new(a), Box::new(b))
}

/// Subtraction.
pub fn sub(a: Term, b: Term) -> Term {
    Term::Sub(Box::new(a), Box::new(b))
}

/// Multiplication.
pub fn mul(a: Term, b: Term) -> Term {
    Term::Mul(Box::new(a), Box::new(b))
}

/// Arithmetic negation.
pub fn neg(a: Term) -> Term {
    Term::Neg(Box::new(a))
}

/// Integer division: `(div a b)`.
pub fn int_div(a: Term, b: Term) -> Term {
    Term::IntDiv(Box::new(a), Box::new(b))
}

/// Integer modulus: `(mod a b)`.
pub fn int_mod(a: Term, b: Term) -> Term {
    Term::IntMod(Box::new(a), Box::new(b))
}

/// Exact real division: `(/ a b)`.
pub fn real_div(a: Term, b: Term) -> Term {
    Term::RealDiv(Box::new(a), Box::new(b))
}

/// Less-than.
pub fn lt(a: Term, b: Term) -> Term {
    Term::Lt(Box::new(a), Box::new(b))
}

/// Less-or-equal.
pub fn le(a: Term, b: Term) -> Term {
    Term::Le(Box::new(a), Box::new(b))
}

/// Greater-than.
pub fn gt(a: Term, b: Term) -> Term {
    Term::Gt(Box::new(a), Box::new(b))
}

/// Greater-or-equal.
pub fn ge(a: Term, b: Term) -> Term {
    Term::Ge(Box::new(a), Box::new(b))
}
