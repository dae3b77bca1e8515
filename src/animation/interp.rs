use crate::animation::value::{PropValue, UnitNumber};
use crate::foundation::math::lerp;

/// `start + (end - start) * progress`; `progress` is not clamped.
pub fn interpolate_number(start: f64, end: f64, progress: f64) -> f64 {
    lerp(start, end, progress)
}

/// Parse `<number><unit>` where the unit is letters or `%` (e.g. `120%`, `-1.5em`).
pub fn parse_unit_number(s: &str) -> Option<UnitNumber> {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - digits_start;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        digits += i - frac_start;
    }
    if digits == 0 {
        return None;
    }

    let (num, unit) = s.split_at(i);
    if unit.is_empty() || !unit.chars().all(|c| c.is_ascii_alphabetic() || c == '%') {
        return None;
    }
    let value = num.parse::<f64>().ok()?;
    Some(UnitNumber::new(value, unit))
}

pub fn is_unit_number(s: &str) -> bool {
    parse_unit_number(s).is_some()
}

/// Interpolate the numeric parts and keep the start's unit. `None` unless both sides parse
/// with the same unit.
pub fn interpolate_unit_number(start: &str, end: &str, progress: f64) -> Option<String> {
    let a = parse_unit_number(start)?;
    let b = parse_unit_number(end)?;
    interpolate_units(&a, &b, progress).map(|u| u.to_string())
}

fn interpolate_units(a: &UnitNumber, b: &UnitNumber, progress: f64) -> Option<UnitNumber> {
    if a.unit != b.unit {
        return None;
    }
    Some(UnitNumber::new(
        interpolate_number(a.value, b.value, progress),
        a.unit.clone(),
    ))
}

/// `#RGB`, `#RRGGBB`, or an `rgb(...)`/`rgba(...)` expression.
pub fn is_color(s: &str) -> bool {
    if parse_hex_color(s).is_some() {
        return true;
    }
    let lower = s.trim().to_ascii_lowercase();
    (lower.starts_with("rgb(") || lower.starts_with("rgba(")) && lower.ends_with(')')
}

/// Parse `#RGB` or `#RRGGBB` (case-insensitive).
pub fn parse_hex_color(s: &str) -> Option<[u8; 3]> {
    let hex = s.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut out = [0u8; 3];
            for (slot, c) in out.iter_mut().zip(hex.chars()) {
                let v = c.to_digit(16)? as u8;
                *slot = v * 17;
            }
            Some(out)
        }
        6 => {
            let mut out = [0u8; 3];
            for (k, slot) in out.iter_mut().enumerate() {
                *slot = u8::from_str_radix(&hex[k * 2..k * 2 + 2], 16).ok()?;
            }
            Some(out)
        }
        _ => None,
    }
}

/// Channel-wise blend of two hex colors, `progress` clamped to `[0,1]`, output `#RRGGBB`.
pub fn interpolate_color(start_hex: &str, end_hex: &str, progress: f64) -> Option<String> {
    let a = parse_hex_color(start_hex)?;
    let b = parse_hex_color(end_hex)?;
    let p = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    let ch = |i: usize| -> u8 {
        lerp(f64::from(a[i]), f64::from(b[i]), p)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    Some(format!("#{:02X}{:02X}{:02X}", ch(0), ch(1), ch(2)))
}

/// Interpolate two values of the same kind.
///
/// Returns `None` when the pair cannot be blended (different kinds, text, non-hex colors or
/// mismatched units); callers then hold the start value until the segment ends.
pub fn interpolate_value(start: &PropValue, end: &PropValue, progress: f64) -> Option<PropValue> {
    match (start, end) {
        (PropValue::Number(a), PropValue::Number(b)) => {
            Some(PropValue::Number(interpolate_number(*a, *b, progress)))
        }
        (PropValue::UnitNumber(a), PropValue::UnitNumber(b)) => {
            interpolate_units(a, b, progress).map(PropValue::UnitNumber)
        }
        (PropValue::Color(a), PropValue::Color(b)) => {
            interpolate_color(a, b, progress).map(PropValue::Color)
        }
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
