//! Moving-shape collision detection via an existential overlap point.
//!
//! Each body moves uniformly, so its center at time `t` is an affine
//! function of `t`. Two shapes overlap iff some point lies inside both
//! at the same moment; with a fresh point `(px, py)` the question "do
//! they ever overlap at `t >= 0`" becomes a single satisfiability
//! query. The only per-shape knowledge is a membership predicate,
//! which keeps the overlap formula shape-agnostic.

use satlab_smtlib::build::{add, and, ge, int, le, mul, real_div, sub};
use satlab_smtlib::{Formula, Term, Vars};
use satlab_solver::{Prover, SolverError};

/// Footprint of a body. Sizes are integer units; the membership
/// predicates use exact rational arithmetic, never floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Axis-aligned rectangle, `width` by `height`.
    Rect { width: i64, height: i64 },
    /// Circle with the given radius.
    Circle { radius: i64 },
}

impl Shape {
    /// Membership predicate: the point `(px, py)` lies within the
    /// shape centered at `(cx, cy)`.
    pub fn contains(&self, px: &Term, py: &Term, cx: &Term, cy: &Term) -> Term {
        match *self {
            Shape::Rect { width, height } => {
                let half_w = real_div(int(width), int(2));
                let half_h = real_div(int(height), int(2));
                and([
                    ge(px.clone(), sub(cx.clone(), half_w.clone())),
                    le(px.clone(), add(cx.clone(), half_w)),
                    ge(py.clone(), sub(cy.clone(), half_h.clone())),
                    le(py.clone(), add(cy.clone(), half_h)),
                ])
            }
            Shape::Circle { radius } => {
                let dx = sub(px.clone(), cx.clone());
                let dy = sub(py.clone(), cy.clone());
                le(
                    add(mul(dx.clone(), dx), mul(dy.clone(), dy)),
                    int(radius * radius),
                )
            }
        }
    }
}

/// A shape with a starting position and a constant velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Body {
    pub shape: Shape,
    pub x: i64,
    pub y: i64,
    pub vx: i64,
    pub vy: i64,
}

impl Body {
    pub fn rect(x: i64, y: i64, width: i64, height: i64, vx: i64, vy: i64) -> Self {
        Self {
            shape: Shape::Rect { width, height },
            x,
            y,
            vx,
            vy,
        }
    }

    pub fn circle(x: i64, y: i64, radius: i64, vx: i64, vy: i64) -> Self {
        Self {
            shape: Shape::Circle { radius },
            x,
            y,
            vx,
            vy,
        }
    }

    /// Center of the body at (symbolic) time `t`.
    pub fn position_at(&self, t: &Term) -> (Term, Term) {
        (
            add(int(self.x), mul(int(self.vx), t.clone())),
            add(int(self.y), mul(int(self.vy), t.clone())),
        )
    }
}

/// Overlap predicate for two placed shapes: a point `(px, py)` drawn
/// from `vars` lies inside both at once.
///
/// The centers may be symbolic (e.g. positions at an unknown time), so
/// the same predicate serves static and kinematic queries. Nothing
/// here is rectangle-specific; any shape with a membership predicate
/// participates.
pub fn overlap(
    vars: &mut Vars,
    a: &Shape,
    a_center: (&Term, &Term),
    b: &Shape,
    b_center: (&Term, &Term),
) -> Term {
    let px = vars.real("px");
    let py = vars.real("py");
    and([
        a.contains(&px, &py, a_center.0, a_center.1),
        b.contains(&px, &py, b_center.0, b_center.1),
    ])
}

/// The collision question as a formula: the bodies overlap at some
/// common time `t >= 0`. Satisfiable iff they ever collide.
pub fn collision_formula(a: &Body, b: &Body) -> Formula {
    let mut vars = Vars::new();
    let t = vars.real("t");

    let (ax, ay) = a.position_at(&t);
    let (bx, by) = b.position_at(&t);
    let overlapping = overlap(&mut vars, &a.shape, (&ax, &ay), &b.shape, (&bx, &by));

    let body = and([ge(t, int(0)), overlapping]);
    Formula::new(vars, body)
}

/// Do the two bodies ever overlap at or after time zero?
///
/// An `Unknown` verdict reads as "no collision found": an
/// indeterminate query must not masquerade as a positive answer.
pub fn collide(prover: &Prover, a: &Body, b: &Body) -> Result<bool, SolverError> {
    Ok(prover.solve(&collision_formula(a, b))?.is_sat())
}
