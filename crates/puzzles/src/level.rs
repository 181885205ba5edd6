//! A bounded update rule verified once instead of asserted at runtime.
//!
//! The rule adjusts a player level by a delta, clamping the result to
//! [`MAX_LEVEL`] and ignoring negative deltas. The range invariant
//! (`result` stays within `[MIN_LEVEL, MAX_LEVEL]` whenever the input
//! does) is proved for every input at once by mirroring each branch of
//! the control flow as a nested conditional expression.

use satlab_smtlib::build::{add, and, ge, gt, implies, int, ite, le, lt};
use satlab_smtlib::{Formula, Term, Vars};

pub const MIN_LEVEL: i64 = 1;
pub const MAX_LEVEL: i64 = 100;

/// The update rule as a symbolic expression.
///
/// Mirrors the executable rule branch for branch: a negative delta is
/// a no-op, an overshoot clamps to [`MAX_LEVEL`], anything else adds.
pub fn update_term(level: Term, delta: Term) -> Term {
    ite(
        lt(delta.clone(), int(0)),
        level.clone(),
        ite(
            gt(add(level.clone(), delta.clone()), int(MAX_LEVEL)),
            int(MAX_LEVEL),
            add(level, delta),
        ),
    )
}

/// The executable twin of [`update_term`] — the code one would ship.
pub fn update(level: i64, delta: i64) -> i64 {
    if delta < 0 {
        level
    } else if level + delta > MAX_LEVEL {
        MAX_LEVEL
    } else {
        level + delta
    }
}

/// The range invariant as a validity query: for every `level` in
/// `[MIN_LEVEL, MAX_LEVEL]` and every `delta`, the updated level stays
/// in `[MIN_LEVEL, MAX_LEVEL]`.
///
/// Once proved, the runtime assertion in the executable rule is
/// redundant.
pub fn range_invariant() -> Formula {
    let mut vars = Vars::new();
    let level = vars.int("level");
    let delta = vars.int("delta");

    let result = update_term(level.clone(), delta);
    let precondition = and([ge(level.clone(), int(MIN_LEVEL)), le(level, int(MAX_LEVEL))]);
    let postcondition = and([
        ge(result.clone(), int(MIN_LEVEL)),
        le(result, int(MAX_LEVEL)),
    ]);

    Formula::new(vars, implies(precondition, postcondition))
}
