use crate::animation::ease::CurveLibrary;
use crate::animation::interp::interpolate_value;
use crate::animation::value::PropValue;
use crate::foundation::error::{SubframeError, SubframeResult};
use crate::subtitle::model::{SubtitleSpan, TEXT_PROPERTY};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyframe {
    /// Milliseconds, relative to the owning block's start.
    pub time: f64,
    pub value: PropValue,
    /// Curve for the segment starting at this key; `linear` when absent or unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing_id: Option<String>,
}

impl Keyframe {
    pub fn new(time: f64, value: impl Into<PropValue>) -> Self {
        Self {
            time,
            value: value.into(),
            easing_id: None,
        }
    }

    pub fn with_easing(mut self, easing_id: impl Into<String>) -> Self {
        self.easing_id = Some(easing_id.into());
        self
    }
}

/// Keyframe track for one span property.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Animation {
    pub property: String,
    pub keyframes: Vec<Keyframe>, // sorted by time
}

impl Animation {
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            keyframes: Vec::new(),
        }
    }

    /// Insert keeping time order; a key at exactly the same time is replaced.
    pub fn insert_keyframe(&mut self, keyframe: Keyframe) {
        if let Some(existing) = self.keyframes.iter_mut().find(|k| k.time == keyframe.time) {
            *existing = keyframe;
            return;
        }
        let idx = self.keyframes.partition_point(|k| k.time < keyframe.time);
        self.keyframes.insert(idx, keyframe);
    }

    /// Remove the key at exactly `time`.
    pub fn remove_keyframe_at(&mut self, time: f64) -> Option<Keyframe> {
        let idx = self.keyframes.iter().position(|k| k.time == time)?;
        Some(self.keyframes.remove(idx))
    }

    pub fn validate(&self) -> SubframeResult<()> {
        if self.keyframes.iter().any(|k| !k.time.is_finite()) {
            return Err(SubframeError::animation(format!(
                "animation '{}' has a non-finite keyframe time",
                self.property
            )));
        }
        if !self.keyframes.windows(2).all(|w| w[0].time < w[1].time) {
            return Err(SubframeError::animation(format!(
                "animation '{}' keyframes must be strictly increasing in time",
                self.property
            )));
        }
        Ok(())
    }

    /// Value of this track at `time`, or `None` without keyframes.
    pub fn value_at(&self, time: f64, curves: &CurveLibrary) -> Option<PropValue> {
        resolve_keyframes(&self.property, &self.keyframes, time, curves)
    }
}

/// Resolve `property` at `time` from `keyframes`.
///
/// Brackets `time` between the latest key at or before it and the earliest key at or after it
/// (clamping to the first/last key outside the range). A single bracketing key is returned
/// verbatim. `text`, and any pair that cannot be interpolated, steps: the earlier value holds until
/// the later key's time. Everything else is interpolated with the earlier key's easing curve.
pub fn resolve_keyframes(
    property: &str,
    keyframes: &[Keyframe],
    time: f64,
    curves: &CurveLibrary,
) -> Option<PropValue> {
    let (bi, ai) = bracket(keyframes, time)?;
    let before = &keyframes[bi];
    let after = &keyframes[ai];
    if bi == ai {
        return Some(before.value.clone());
    }

    let step = || {
        if time < after.time {
            before.value.clone()
        } else {
            after.value.clone()
        }
    };
    if property == TEXT_PROPERTY {
        return Some(step());
    }

    let span = after.time - before.time;
    if span.is_nan() || span <= 0.0 {
        return Some(step());
    }
    let local_t = (time - before.time) / span;
    let eased = curves.evaluate(before.easing_id.as_deref(), local_t);
    Some(interpolate_value(&before.value, &after.value, eased).unwrap_or_else(step))
}

/// Indices of the bracketing keys; `None` for an empty track.
fn bracket(keyframes: &[Keyframe], time: f64) -> Option<(usize, usize)> {
    let first = keyframes.first()?;
    let mut earliest = (0, first.time);
    let mut latest = (0, first.time);
    let mut before: Option<(usize, f64)> = None;
    let mut after: Option<(usize, f64)> = None;

    for (i, k) in keyframes.iter().enumerate() {
        if k.time < earliest.1 {
            earliest = (i, k.time);
        }
        if k.time > latest.1 {
            latest = (i, k.time);
        }
        if k.time <= time && before.is_none_or(|(_, t)| k.time > t) {
            before = Some((i, k.time));
        }
        if k.time >= time && after.is_none_or(|(_, t)| k.time < t) {
            after = Some((i, k.time));
        }
    }

    Some((
        before.map_or(earliest.0, |(i, _)| i),
        after.map_or(latest.0, |(i, _)| i),
    ))
}

/// Copy of `span` with every animated property resolved at `time_ms`.
///
/// Tracks without keyframes leave the base value untouched; `span` itself is never modified.
pub fn apply_animations_to_span(
    span: &SubtitleSpan,
    time_ms: f64,
    curves: &CurveLibrary,
) -> SubtitleSpan {
    let mut out = span.clone();
    for anim in &span.animations {
        if let Some(value) = anim.value_at(time_ms, curves) {
            out.set_property(&anim.property, value);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframe.rs"]
mod tests;
