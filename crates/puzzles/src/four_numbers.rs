//! The four-numbers game.
//!
//! Someone thinks of positive integers `x >= y` (with `y` dividing
//! `x`) and hands over the four values `x+y`, `x-y`, `x*y`, `x div y`
//! in an unknown order. Stage 1 recovers a candidate pair from the
//! four numbers; stage 2 decides whether that pair is the only one.

use std::fmt;

use satlab_smtlib::build::{add, and, eq, ge, gt, int, int_div, int_mod, mul, not, or, sub};
use satlab_smtlib::{Formula, Term, Vars};
use satlab_solver::{Prover, SolverError, SolverResult};

/// Stage-2 classification of the stage-1 answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// At least one other valid pair exists.
    Multiple,
    /// The stage-1 pair is the only one.
    Unique,
    /// Stage 1 found no pair at all.
    None,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Multiple => write!(f, "multiple"),
            Answer::Unique => write!(f, "unique"),
            Answer::None => write!(f, "none"),
        }
    }
}

/// Domain and match constraints for a candidate pair.
///
/// Each given number must equal at least one of the four expressions.
/// This does not force a one-to-one correspondence: with duplicate
/// inputs, several of them may match the same expression. Distinct
/// inputs pin all four expressions down regardless, since four
/// distinct values can only be covered by four expressions
/// bijectively.
fn puzzle_constraints(x: &Term, y: &Term, nums: [i64; 4]) -> Term {
    let domain = and([
        gt(x.clone(), int(0)),
        gt(y.clone(), int(0)),
        ge(x.clone(), y.clone()),
        eq(int_mod(x.clone(), y.clone()), int(0)),
    ]);

    let exprs = [
        add(x.clone(), y.clone()),
        sub(x.clone(), y.clone()),
        mul(x.clone(), y.clone()),
        int_div(x.clone(), y.clone()),
    ];

    let mut conjuncts = vec![domain];
    conjuncts.extend(
        nums.into_iter()
            .map(|n| or(exprs.iter().cloned().map(|e| eq(int(n), e)))),
    );
    and(conjuncts)
}

/// Find some pair `(x, y)` consistent with the four given numbers.
///
/// Returns `None` when no pair exists or the engine cannot decide.
pub fn solve_stage1(prover: &Prover, nums: [i64; 4]) -> Result<Option<(i64, i64)>, SolverError> {
    let mut vars = Vars::new();
    let x = vars.int("x");
    let y = vars.int("y");
    let formula = Formula::new(vars, puzzle_constraints(&x, &y, nums));

    match prover.solve(&formula)? {
        SolverResult::Sat(Some(model)) => Ok(Some((model.int("x")?, model.int("y")?))),
        // sat reported without a printed model: ask again through the accessor
        SolverResult::Sat(None) => {
            let model = prover.solution(&formula)?;
            Ok(Some((model.int("x")?, model.int("y")?)))
        }
        SolverResult::Unsat | SolverResult::Unknown(_) => Ok(None),
    }
}

/// Classify the stage-1 answer: is it the only consistent pair?
///
/// Re-solves the same constraint system over fresh variables with the
/// stage-1 pair excluded; a satisfiable exclusion means another pair
/// exists.
pub fn solve_stage2(
    prover: &Prover,
    nums: [i64; 4],
    first: Option<(i64, i64)>,
) -> Result<Answer, SolverError> {
    let Some((x, y)) = first else {
        return Ok(Answer::None);
    };

    let mut vars = Vars::new();
    let x_alt = vars.int("x_alt");
    let y_alt = vars.int("y_alt");

    let different = not(and([eq(x_alt.clone(), int(x)), eq(y_alt.clone(), int(y))]));
    let formula = Formula::new(
        vars,
        and([puzzle_constraints(&x_alt, &y_alt, nums), different]),
    );

    if prover.solve(&formula)?.is_sat() {
        Ok(Answer::Multiple)
    } else {
        Ok(Answer::Unique)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use satlab_smtlib::Script;
    use satlab_solver::SolverBackend;

    #[test]
    fn answer_renders_lowercase() {
        assert_eq!(Answer::Multiple.to_string(), "multiple");
        assert_eq!(Answer::Unique.to_string(), "unique");
        assert_eq!(Answer::None.to_string(), "none");
    }

    #[test]
    fn constraints_cover_domain_and_matches() {
        let x = Term::Const("x".to_string());
        let y = Term::Const("y".to_string());
        let text = puzzle_constraints(&x, &y, [20, 95, 105, 500]).to_string();

        assert!(text.contains("(> x 0)"));
        assert!(text.contains("(>= x y)"));
        assert!(text.contains("(= (mod x y) 0)"));
        // every input matches against all four expressions
        assert!(text.contains("(= 20 (+ x y))"));
        assert!(text.contains("(= 95 (- x y))"));
        assert!(text.contains("(= 105 (* x y))"));
        assert!(text.contains("(= 500 (div x y))"));
    }

    /// Backend that refuses every query; stage 2 must short-circuit
    /// before reaching it when stage 1 came up empty.
    struct Unreachable;

    impl SolverBackend for Unreachable {
        fn check_sat(&self, _script: &Script) -> Result<SolverResult, SolverError> {
            panic!("stage 2 must not query the solver without a stage-1 answer");
        }
    }

    #[test]
    fn stage2_without_stage1_answer_is_none() {
        let prover = Prover::new(Box::new(Unreachable));
        let answer = solve_stage2(&prover, [1, 2, 3, 4], None).unwrap();
        assert_eq!(answer, Answer::None);
    }
}
