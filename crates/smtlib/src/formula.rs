//! Typed free variables and quantifier-free formulas.
//!
//! A [`Formula`] is one boolean [`Term`] together with the declarations
//! of its free variables. Satisfiability reads the variables
//! existentially; validity checking (the solver crate's `prove`)
//! asserts the negated body instead, so every variable is universal by
//! construction. Formulas are immutable once built and scoped to the
//! query that constructs them.

use crate::command::Command;
use crate::script::Script;
use crate::sort::Sort;
use crate::term::Term;

/// A pool of typed free variables for one formula construction.
///
/// Variables have no identity beyond their name: requesting the same
/// name twice at the same sort yields the same constant and a single
/// declaration. A name may only be bound at one sort; re-declaring it
/// at another sort produces a script the solver itself rejects.
#[derive(Debug, Clone, Default)]
pub struct Vars {
    decls: Vec<(String, Sort)>,
}

impl Vars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare (or re-use) an integer variable.
    pub fn int(&mut self, name: &str) -> Term {
        self.declare(name, Sort::Int)
    }

    /// Declare (or re-use) a real variable.
    pub fn real(&mut self, name: &str) -> Term {
        self.declare(name, Sort::Real)
    }

    /// Declare (or re-use) a boolean variable.
    pub fn bool(&mut self, name: &str) -> Term {
        self.declare(name, Sort::Bool)
    }

    pub fn decls(&self) -> &[(String, Sort)] {
        &self.decls
    }

    fn declare(&mut self, name: &str, sort: Sort) -> Term {
        if !self.decls.iter().any(|(n, s)| n == name && *s == sort) {
            self.decls.push((name.to_string(), sort));
        }
        Term::Const(name.to_string())
    }
}

/// A quantifier-free formula: typed free variables plus a boolean body.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    decls: Vec<(String, Sort)>,
    body: Term,
}

impl Formula {
    /// Close `body` over the variables declared in `vars`.
    pub fn new(vars: Vars, body: Term) -> Self {
        Self {
            decls: vars.decls,
            body,
        }
    }

    pub fn decls(&self) -> &[(String, Sort)] {
        &self.decls
    }

    pub fn body(&self) -> &Term {
        &self.body
    }

    /// Lower to an SMT-LIB script: declarations, then one assertion.
    ///
    /// The query commands (`check-sat`, `get-model`) are left to the
    /// solver layer.
    pub fn to_script(&self) -> Script {
        self.script_with(self.body.clone())
    }

    /// Like [`to_script`](Self::to_script), with the body negated.
    ///
    /// Used for validity checks: the formula is valid iff the negated
    /// script is unsatisfiable.
    pub fn negated_script(&self) -> Script {
        self.script_with(Term::Not(Box::new(self.body.clone())))
    }

    fn script_with(&self, assertion: Term) -> Script {
        let mut script = Script::new();
        for (name, sort) in &self.decls {
            script.push(Command::DeclareConst(name.clone(), *sort));
        }
        script.push(Command::Assert(assertion));
        script
    }
}
