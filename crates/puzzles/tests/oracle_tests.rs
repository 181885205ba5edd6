//! Property-based oracle tests for the puzzle encodings.
//!
//! The encoders mirror executable arithmetic; these tests validate the
//! mirrored semantics against real Rust execution on random inputs,
//! without invoking a solver. If an oracle fails, the corresponding
//! encoding is unsound.

use proptest::prelude::*;

use satlab_puzzles::level;

/// Concrete counterpart of the four-numbers match constraints: every
/// given number equals at least one of the four expressions.
fn matches_loosely(x: i64, y: i64, nums: [i64; 4]) -> bool {
    let exprs = [x + y, x - y, x * y, x / y];
    nums.iter().all(|n| exprs.contains(n))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Oracle for the bounded-update invariant: the property proved
    /// symbolically holds on the executable rule.
    #[test]
    fn level_update_stays_in_range(
        lvl in level::MIN_LEVEL..=level::MAX_LEVEL,
        delta in -1_000_000i64..=1_000_000,
    ) {
        let result = level::update(lvl, delta);
        prop_assert!((level::MIN_LEVEL..=level::MAX_LEVEL).contains(&result));
    }

    /// Negative deltas leave the level untouched.
    #[test]
    fn level_update_ignores_negative_deltas(
        lvl in level::MIN_LEVEL..=level::MAX_LEVEL,
        delta in -1_000_000i64..=-1,
    ) {
        prop_assert_eq!(level::update(lvl, delta), lvl);
    }

    /// Nonnegative deltas never decrease the level.
    #[test]
    fn level_update_is_monotone_for_gains(
        lvl in level::MIN_LEVEL..=level::MAX_LEVEL,
        delta in 0i64..=1_000_000,
    ) {
        prop_assert!(level::update(lvl, delta) >= lvl);
    }

    /// Absolute-value triangle inequality on concrete integers, the
    /// same statement the solver proves for all of them.
    #[test]
    fn abs_triangle_inequality_concrete(x in any::<i32>(), y in any::<i32>()) {
        let (x, y) = (i64::from(x), i64::from(y));
        prop_assert!((x + y).abs() <= x.abs() + y.abs());
    }

    /// Any pair drawn from the puzzle's domain generates four numbers
    /// the match constraints accept, whatever order they arrive in.
    #[test]
    fn four_numbers_generated_instances_are_accepted(
        y in 1i64..100,
        multiplier in 1i64..100,
        rotation in 0usize..4,
    ) {
        let x = y * multiplier;
        let mut nums = [x + y, x - y, x * y, x / y];
        nums.rotate_left(rotation);

        prop_assert!(x >= y && x % y == 0);
        prop_assert!(matches_loosely(x, y, nums));
    }

    /// The loose match constraints reject numbers no expression can
    /// produce.
    #[test]
    fn four_numbers_rejects_unreachable_values(
        y in 1i64..100,
        multiplier in 1i64..100,
    ) {
        let x = y * multiplier;
        let ceiling = [x + y, x - y, x * y, x / y]
            .into_iter()
            .max()
            .unwrap_or(0);
        // a number above every expression value matches nothing
        prop_assert!(!matches_loosely(x, y, [ceiling + 1, x + y, x - y, x * y]));
    }
}
