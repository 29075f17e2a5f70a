//! Stop probabilities for the q-Whittaker island sweep
//!
//! Every probability here is a ratio of q-Pochhammer style factors
//! `1 - q^e`. Exponents that are not positive encode the degenerate
//! cases, which are mapped to exact 0 or 1 instead of being evaluated.

use num_traits::ToPrimitive;

/// Compute `q^exponent` for `0 <= q < 1` and `exponent >= 1`
///
/// Exponents beyond the `i32` range underflow to exactly 0.
pub fn q_power(q: f64, exponent: i64) -> f64 {
    if exponent <= 0 {
        return 1.0;
    }
    if q <= 0.0 {
        return 0.0;
    }
    exponent.to_i32().map_or(0.0, |e| q.powi(e))
}

/// One minus a power of q, zero when the exponent is not positive
pub fn q_complement(q: f64, exponent: i64) -> f64 {
    if exponent <= 0 {
        return 0.0;
    }
    1.0 - q_power(q, exponent)
}

/// Probability that the sweep stops at the first index of an island
///
/// `numerator_exponent` is `lam_k - mu_k + 1`. `denominator_exponent` is
/// `mu_{k-1} - mu_k + 1`, or `None` for `k == 0` where `mu_{-1}` is infinite
/// and the denominator is exactly 1.
pub fn first_stop_probability(
    q: f64,
    numerator_exponent: i64,
    denominator_exponent: Option<i64>,
) -> f64 {
    if numerator_exponent <= 0 {
        return 0.0;
    }
    let numerator = q_complement(q, numerator_exponent);
    let Some(exponent) = denominator_exponent else {
        return numerator;
    };
    if exponent <= 0 {
        return 1.0;
    }

    let denominator = q_complement(q, exponent);
    // Powers of q that round to 1 leave nothing to divide by
    if denominator <= 0.0 {
        return 1.0;
    }
    (numerator / denominator).min(1.0)
}

/// Probability that the sweep stops at a later index of an island
///
/// `exponent` is `lam_s - mu_s + 1`.
pub fn continuation_stop_probability(q: f64, exponent: i64) -> f64 {
    q_complement(q, exponent)
}

/// Bernoulli parameter of a weighted cell bit, `xy / (1 + xy)`
///
/// Products that overflow give a certain bit.
pub const fn bit_probability(x: f64, y: f64) -> f64 {
    let weight = x * y;
    if weight.is_infinite() {
        return 1.0;
    }
    weight / (1.0 + weight)
}
