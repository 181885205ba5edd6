/// SMT-LIB term (expression) representation.
///
/// Addition, subtraction, multiplication and the comparisons are
/// overloaded in SMT-LIB between `Int` and `Real`, so one node kind
/// serves both sorts. Division is the exception: `div`/`mod` are the
/// integer forms, `/` is exact real division.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    // === Literals ===
    /// Boolean literal
    BoolLit(bool),
    /// Integer literal (solvers coerce numerals in Real positions)
    IntLit(i64),

    // === Variables ===
    /// Named constant/variable reference
    Const(String),

    // === Boolean operations ===
    /// Logical NOT
    Not(Box<Term>),
    /// Logical AND (n-ary)
    And(Vec<Term>),
    /// Logical OR (n-ary)
    Or(Vec<Term>),
    /// Logical implication: `(=> a b)`
    Implies(Box<Term>, Box<Term>),

    // === Core ===
    /// Equality: `(= a b)`
    Eq(Box<Term>, Box<Term>),
    /// Distinct: `(distinct a b ...)`
    Distinct(Vec<Term>),
    /// If-then-else: `(ite cond then else)`
    Ite(Box<Term>, Box<Term>, Box<Term>),

    // === Arithmetic (Int and Real) ===
    /// `(+ a b)`
    Add(Box<Term>, Box<Term>),
    /// `(- a b)`
    Sub(Box<Term>, Box<Term>),
    /// `(* a b)`
    Mul(Box<Term>, Box<Term>),
    /// `(- a)` — arithmetic negation
    Neg(Box<Term>),
    /// `(div a b)` — integer division
    IntDiv(Box<Term>, Box<Term>),
    /// `(mod a b)`
    IntMod(Box<Term>, Box<Term>),
    /// `(/ a b)` — exact real division
    RealDiv(Box<Term>, Box<Term>),

    // === Comparisons ===
    /// `(< a b)`
    Lt(Box<Term>, Box<Term>),
    /// `(<= a b)`
    Le(Box<Term>, Box<Term>),
    /// `(> a b)`
    Gt(Box<Term>, Box<Term>),
    /// `(>= a b)`
    Ge(Box<Term>, Box<Term>),
}
