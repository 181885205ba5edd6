//! SMT-LIB2 text formatting for AST types.
//!
//! Implements `Display` for [`Sort`], [`Term`], [`Command`], and
//! [`Script`], producing valid SMT-LIB2 text that solvers such as Z3
//! and CVC5 accept on stdin.

use std::fmt;

use crate::command::Command;
use crate::script::Script;
use crate::sort::Sort;
use crate::term::Term;

// ---------------------------------------------------------------------------
// Sort
// ---------------------------------------------------------------------------

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sort::Bool => write!(f, "Bool"),
            Sort::Int => write!(f, "Int"),
            Sort::Real => write!(f, "Real"),
        }
    }
}

// ---------------------------------------------------------------------------
// Term
// ---------------------------------------------------------------------------

/// Write a binary SMT-LIB operator: `(op lhs rhs)`.
fn fmt_binop(op: &str, lhs: &Term, rhs: &Term, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({op} {lhs} {rhs})")
}

/// Write an n-ary SMT-LIB operator: `(op t1 t2 ...)`.
fn fmt_nary(op: &str, terms: &[Term], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({op}")?;
    for t in terms {
        write!(f, " {t}")?;
    }
    write!(f, ")")
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::BoolLit(true) => write!(f, "true"),
            Term::BoolLit(false) => write!(f, "false"),
            Term::IntLit(n) => {
                if *n < 0 {
                    // SMT-LIB has no negative numerals; use unary minus
                    write!(f, "(- {})", n.unsigned_abs())
                } else {
                    write!(f, "{n}")
                }
            }
            Term::Const(name) => write!(f, "{name}"),

            Term::Not(inner) => write!(f, "(not {inner})"),
            // Empty conjunction/disjunction degenerate to their units
            Term::And(terms) if terms.is_empty() => write!(f, "true"),
            Term::And(terms) => fmt_nary("and", terms, f),
            Term::Or(terms) if terms.is_empty() => write!(f, "false"),
            Term::Or(terms) => fmt_nary("or", terms, f),
            Term::Implies(a, b) => fmt_binop("=>", a, b, f),

            Term::Eq(a, b) => fmt_binop("=", a, b, f),
            Term::Distinct(terms) => fmt_nary("distinct", terms, f),
            Term::Ite(cond, then, els) => write!(f, "(ite {cond} {then} {els})"),

            Term::Add(a, b) => fmt_binop("+", a, b, f),
            Term::Sub(a, b) => fmt_binop("-", a, b, f),
            Term::Mul(a, b) => fmt_binop("*", a, b, f),
            Term::Neg(a) => write!(f, "(- {a})"),
            Term::IntDiv(a, b) => fmt_binop("div", a, b, f),
            Term::IntMod(a, b) => fmt_binop("mod", a, b, f),
            Term::RealDiv(a, b) => fmt_binop("/", a, b, f),

            Term::Lt(a, b) => fmt_binop("<", a, b, f),
            Term::Le(a, b) => fmt_binop("<=", a, b, f),
            Term::Gt(a, b) => fmt_binop(">", a, b, f),
            Term::Ge(a, b) => fmt_binop(">=", a, b, f),
        }
    }
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::SetLogic(logic) => write!(f, "(set-logic {logic})"),
            Command::DeclareConst(name, sort) => write!(f, "(declare-const {name} {sort})"),
            Command::Assert(term) => write!(f, "(assert {term})"),
            Command::CheckSat => write!(f, "(check-sat)"),
            Command::GetModel => write!(f, "(get-model)"),
            Command::Comment(text) => write!(f, ";; {text}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Script
// ---------------------------------------------------------------------------

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cmd in self.commands() {
            writeln!(f, "{cmd}")?;
        }
        Ok(())
    }
}
