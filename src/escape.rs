// src/escape.rs

//! Escape-time evaluation for the Mandelbrot recurrence `z' = z² + c`.

use crate::complex::Complex;

/// Squared-magnitude threshold past which an orbit counts as escaped.
pub const ESCAPE_THRESHOLD: f64 = 4.0;

/// Returned by [`escape_time`] for a negative iteration budget.
pub const INVALID_BUDGET: i32 = -1;

/// Counts the iterations of `z' = z² + c` performed before the orbit escapes
/// or the budget runs out.
///
/// The check happens before each step: a starting point that is already past
/// [`ESCAPE_THRESHOLD`] yields 0. The result is always in `[0, max_iter]`,
/// except for a negative `max_iter`, which yields [`INVALID_BUDGET`].
pub fn escape_time(mut z: Complex, c: Complex, max_iter: i32) -> i32 {
    if max_iter < 0 {
        return INVALID_BUDGET;
    }

    let mut remaining = max_iter;
    while remaining > 0 && z.squared_magnitude() <= ESCAPE_THRESHOLD {
        z = z.squared() + c;
        remaining -= 1;
    }
    max_iter - remaining
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::ZERO;

    /// Direct transcription of the recursive definition, used as an oracle.
    fn escape_time_recursive(z: Complex, c: Complex, n: i32) -> i32 {
        if n < 0 {
            return -1;
        }
        if n == 0 || z.squared_magnitude() > ESCAPE_THRESHOLD {
            return 0;
        }
        escape_time_recursive(z.squared() + c, c, n - 1) + 1
    }

    #[test]
    fn zero_budget_is_zero() {
        assert_eq!(escape_time(ZERO, ZERO, 0), 0);
        assert_eq!(escape_time(Complex::new(10.0, 0.0), ZERO, 0), 0);
    }

    #[test]
    fn negative_budget_returns_sentinel() {
        assert_eq!(escape_time(ZERO, ZERO, -1), INVALID_BUDGET);
        assert_eq!(escape_time(ZERO, Complex::new(3.0, 0.0), -42), -1);
    }

    #[test]
    fn origin_never_escapes() {
        for budget in [1, 7, 500] {
            assert_eq!(escape_time(ZERO, ZERO, budget), budget);
        }
    }

    #[test]
    fn escaped_start_short_circuits() {
        let c = Complex::new(3.0, 0.0);
        assert!(c.squared_magnitude() > ESCAPE_THRESHOLD);
        assert_eq!(escape_time(c, c, 1), 0);
        assert_eq!(escape_time(c, c, 500), 0);
    }

    #[test]
    fn far_point_escapes_after_one_step() {
        // 0 -> 3 -> escaped.
        assert_eq!(escape_time(ZERO, Complex::new(3.0, 0.0), 500), 1);
    }

    #[test]
    fn result_stays_within_budget() {
        let budget = 50;
        for xi in -20..=20 {
            for yi in -20..=20 {
                let c = Complex::new(xi as f64 * 0.1, yi as f64 * 0.1);
                let n = escape_time(ZERO, c, budget);
                assert!((0..=budget).contains(&n), "c={:?} gave {}", c, n);
            }
        }
    }

    #[test]
    fn matches_recursive_definition() {
        for xi in -25..=10 {
            for yi in -12..=12 {
                let c = Complex::new(xi as f64 * 0.1, yi as f64 * 0.1);
                assert_eq!(
                    escape_time(ZERO, c, 100),
                    escape_time_recursive(ZERO, c, 100),
                    "mismatch at c={:?}",
                    c
                );
            }
        }
    }
}
