//! Legacy rounding shared by every formula
//!
//! Formulas compose already-rounded intermediates, so the exact rounding rule
//! leaks into final grades. The rule here is `floor(x * 10^n + sign(x) * 0.5)`,
//! which is half-away-from-zero at the halfway points.

/// Round `number` to `points` decimal places with the legacy rule.
///
/// For negative inputs the rule floors after subtracting one half, so values
/// just below a negative halfway point move one step further from zero
/// (`legacy_round(-4.58, 1) == -4.7`). Grades depend on this, keep it.
pub fn legacy_round(number: f64, points: i32) -> f64 {
    let scale = 10f64.powi(points);
    ((number * scale) + sign(number) * 0.5).floor() / scale
}

/// Replace NaN and infinities with `0.0`
#[inline]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Divide two counts, yielding `0.0` when the quotient is not a number
#[inline]
pub fn ratio(numerator: usize, denominator: usize) -> f64 {
    finite_or_zero(numerator as f64 / denominator as f64)
}

// `f64::signum` maps zero to 1.0, which would turn 0.0 into 0.5 before flooring
fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
