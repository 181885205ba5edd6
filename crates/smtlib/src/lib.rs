//! # satlab-smtlib
//!
//! SMT-LIB2 formula representation for the satlab puzzle solvers.
//!
//! The types here form a small expression language over booleans,
//! mathematical integers and reals: [`Term`] is the expression tree,
//! [`Sort`] the type tag, [`Command`] and [`Script`] the SMT-LIB2
//! command stream handed to a solver process, and [`Formula`] a
//! quantifier-free assertion together with its typed free variables.
//!
//! Construction goes through the [`build`] module rather than operator
//! overloading:
//!
//! ```
//! use satlab_smtlib::build::{ge, int};
//! use satlab_smtlib::{Formula, Vars};
//!
//! let mut vars = Vars::new();
//! let x = vars.int("x");
//! let formula = Formula::new(vars, ge(x.clone(), int(0)));
//! assert_eq!(formula.body().to_string(), "(>= x 0)");
//! ```

pub mod build;
pub mod command;
mod formatter;
pub mod formula;
pub mod script;
pub mod sort;
pub mod term;

pub use command::Command;
pub use formula::{Formula, Vars};
pub use script::Script;
pub use sort::Sort;
pub use term::Term;
