/// Unclamped linear interpolation.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Round to `decimals` places; non-finite values pass through.
pub(crate) fn round_to(v: f64, decimals: u32) -> f64 {
    if !v.is_finite() {
        return v;
    }
    let scale = 10f64.powi(decimals as i32);
    let r = (v * scale).round() / scale;
    // -0.0 and 0.0 must hash the same.
    if r == 0.0 { 0.0 } else { r }
}

/// `num / den`, or `0.0` when the denominator is zero or the result is not finite.
pub(crate) fn safe_div(num: f64, den: f64) -> f64 {
    if den == 0.0 || !den.is_finite() {
        return 0.0;
    }
    let q = num / den;
    if q.is_finite() { q } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
