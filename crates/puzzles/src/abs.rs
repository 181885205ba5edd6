//! Properties of the absolute-value function over mathematical
//! integers.
//!
//! `abs` is encoded as a conditional expression rather than an
//! interpreted function, so every property below is a plain
//! quantifier-free formula: proving it checks all integers at once.
//! Three of the properties are theorems; two are conjectures that
//! sound plausible and fail (`prove` returns a counterexample).

use satlab_smtlib::build::{add, eq, ge, implies, int, ite, le, lt, neg};
use satlab_smtlib::{Formula, Term, Vars};

/// `abs(x)` as a symbolic conditional: `ite(x >= 0, x, -x)`.
pub fn abs_term(x: Term) -> Term {
    ite(ge(x.clone(), int(0)), x.clone(), neg(x))
}

/// `abs(x) >= 0` — a theorem.
pub fn nonneg() -> Formula {
    let mut vars = Vars::new();
    let x = vars.int("x");
    Formula::new(vars, ge(abs_term(x), int(0)))
}

/// `x >= 0 => abs(x) == x` — a theorem.
pub fn identity_on_nonnegatives() -> Formula {
    let mut vars = Vars::new();
    let x = vars.int("x");
    Formula::new(
        vars,
        implies(ge(x.clone(), int(0)), eq(abs_term(x.clone()), x)),
    )
}

/// `x < y => abs(x) < abs(y)` — refutable.
///
/// Fails for negative operands, e.g. x = -5, y = -1.
pub fn order_preservation() -> Formula {
    let mut vars = Vars::new();
    let x = vars.int("x");
    let y = vars.int("y");
    Formula::new(
        vars,
        implies(lt(x.clone(), y.clone()), lt(abs_term(x), abs_term(y))),
    )
}

/// `x == y + 1 => abs(x) == abs(y) + 1` — refutable.
///
/// Fails when the successor step crosses zero, e.g. y = -1, x = 0.
pub fn successor_shift() -> Formula {
    let mut vars = Vars::new();
    let x = vars.int("x");
    let y = vars.int("y");
    Formula::new(
        vars,
        implies(
            eq(x.clone(), add(y.clone(), int(1))),
            eq(abs_term(x), add(abs_term(y), int(1))),
        ),
    )
}

/// `abs(abs(x)) == abs(x)` — a theorem.
pub fn idempotence() -> Formula {
    let mut vars = Vars::new();
    let x = vars.int("x");
    Formula::new(vars, eq(abs_term(abs_term(x.clone())), abs_term(x)))
}

/// `abs(x + y) <= abs(x) + abs(y)` — a theorem.
pub fn triangle_inequality() -> Formula {
    let mut vars = Vars::new();
    let x = vars.int("x");
    let y = vars.int("y");
    Formula::new(
        vars,
        le(
            abs_term(add(x.clone(), y.clone())),
            add(abs_term(x), abs_term(y)),
        ),
    )
}
