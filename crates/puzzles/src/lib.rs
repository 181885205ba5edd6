//! # satlab-puzzles
//!
//! Small mathematical and logical puzzles, each solved by encoding the
//! problem as a satisfiability or validity query and handing it to the
//! solver adapter.
//!
//! - [`abs`]: laws of the absolute-value function over integers — three
//!   theorems and two refutable conjectures.
//! - [`level`]: a clamping update rule whose range invariant is proved
//!   once instead of asserted at runtime.
//! - [`collide`]: do two uniformly moving shapes ever overlap at or
//!   after time zero? Decided via an existential overlap point.
//! - [`four_numbers`]: recover `(x, y)` from their sum, difference,
//!   product and quotient given in unknown order, and classify the
//!   solution as unique or not.

pub mod abs;
pub mod collide;
pub mod four_numbers;
pub mod level;
