use std::fmt;

use crate::animation::interp::{is_color, parse_unit_number};

/// Number with a trailing unit, e.g. `120%` or `1.5em`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UnitNumber {
    pub value: f64,
    pub unit: String,
}

impl UnitNumber {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

impl fmt::Display for UnitNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// Typed value of one span property.
///
/// Serialized as `{"kind": ..., "value": ...}`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum PropValue {
    Number(f64),
    UnitNumber(UnitNumber),
    /// CSS color text; only `#RGB`/`#RRGGBB` interpolate.
    Color(String),
    Text(String),
}

/// Discriminant of [`PropValue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Number,
    UnitNumber,
    Color,
    Text,
}

impl PropValue {
    /// Classify raw editor text: plain number, unit number, color, otherwise text.
    pub fn classify(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(n) = trimmed.parse::<f64>() {
            if n.is_finite() {
                return Self::Number(n);
            }
        }
        if let Some(u) = parse_unit_number(trimmed) {
            return Self::UnitNumber(u);
        }
        if is_color(trimmed) {
            return Self::Color(trimmed.to_string());
        }
        Self::Text(raw.to_string())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Number(_) => ValueKind::Number,
            Self::UnitNumber(_) => ValueKind::UnitNumber,
            Self::Color(_) => ValueKind::Color,
            Self::Text(_) => ValueKind::Text,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::UnitNumber(u) => write!(f, "{u}"),
            Self::Color(s) | Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::classify(value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/value.rs"]
mod tests;
