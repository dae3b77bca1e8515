use super::*;

#[test]
fn lerp_is_unclamped() {
    assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
    assert_eq!(lerp(0.0, 10.0, -0.5), -5.0);
}

#[test]
fn round_to_absorbs_float_noise() {
    assert_eq!(round_to(0.1 + 0.2, 2), 0.3);
    assert_eq!(round_to(1.005_000_1, 2), 1.01);
    assert_eq!(round_to(-0.001, 2).to_bits(), 0.0f64.to_bits());
}

#[test]
fn safe_div_guards_zero_denominator() {
    assert_eq!(safe_div(10.0, 0.0), 0.0);
    assert_eq!(safe_div(10.0, f64::INFINITY), 0.0);
    assert_eq!(safe_div(10.0, 4.0), 2.5);
}
