//! Closed-form finger sizing
//!
//! With `a = k * t` the finger length and `b = r * a` the notch length, a
//! positive edge of `N` fingers measures
//!
//! ```text
//! x = N * a + (N - 1) * b = k * t * (N + (N - 1) * r)
//! ```
//!
//! Solving for the count gives `N = x / (k * t * (1 + r)) + r / (1 + r)`.
//!
//! The thickness correction of shortened orientations removes the same `2 * t`
//! from both sides of the relation, so it holds for every edge type.

use jointkit_core::{JointError, Result};

/// Notch:finger ratio `r` for a target length `x` with `n` fingers
pub fn ratio_b_a(x: f64, n: u32, k_factor: u32, thickness: f64) -> Result<f64> {
    if n <= 1 {
        return Err(JointError::unsolvable(format!(
            "finger count must be greater than 1, got {}",
            n
        )));
    }
    let kt = finger_length(k_factor, thickness)?;
    let n = n as f64;
    let r = x / (kt * (n - 1.0)) - n / (n - 1.0);
    if r <= 0.0 {
        return Err(JointError::unsolvable(format!(
            "{} fingers of {} do not leave room for notches in {}",
            n, kt, x
        )));
    }
    Ok(r)
}

/// Unrounded finger count `N` for a target length `x` at notch:finger ratio `r`.
///
/// `x = k*t*(N + (N - 1)*r)` rearranges to `N*(1 + r) = x/(k*t) + r`, so the
/// ratio term is added: `N = x/(k*t*(1 + r)) + r/(1 + r)`. For 42 mm, `k*t = 6`
/// and `r = 2` this gives exactly 3 fingers.
pub fn count_n_a(x: f64, ratio: f64, k_factor: u32, thickness: f64) -> Result<f64> {
    if ratio <= 0.0 {
        return Err(JointError::unsolvable(format!(
            "notch ratio must be positive, got {}",
            ratio
        )));
    }
    let kt = finger_length(k_factor, thickness)?;
    Ok(x / (kt * (1.0 + ratio)) + ratio / (1.0 + ratio))
}

fn finger_length(k_factor: u32, thickness: f64) -> Result<f64> {
    let kt = k_factor as f64 * thickness;
    if kt <= 0.0 {
        return Err(JointError::unsolvable(format!(
            "finger length k * t must be positive, got {} * {}",
            k_factor, thickness
        )));
    }
    Ok(kt)
}
