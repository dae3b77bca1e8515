use std::collections::{BTreeMap, HashSet};

use crate::animation::ease::CurveLibrary;
use crate::animation::keyframe::{Animation, Keyframe};
use crate::animation::value::PropValue;
use crate::foundation::error::{SubframeError, SubframeResult};

/// Property name that maps onto [`SubtitleSpan::text`] instead of the style map.
pub const TEXT_PROPERTY: &str = "text";

/// Styled run of subtitle text with optional keyframe animations.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SubtitleSpan {
    /// Displayed text.
    pub text: String,
    /// Style properties by name (`fc`, `fs`, `bo`, ...).
    #[serde(default)]
    pub style: BTreeMap<String, PropValue>,
    /// Per-property keyframe tracks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub animations: Vec<Animation>,
}

impl SubtitleSpan {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Builder-style style assignment.
    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.style.insert(key.into(), value.into());
        self
    }

    /// Current static value of `property`.
    pub fn property(&self, property: &str) -> Option<PropValue> {
        if property == TEXT_PROPERTY {
            return Some(PropValue::Text(self.text.clone()));
        }
        self.style.get(property).cloned()
    }

    /// Assign `value` to `property` (the text for [`TEXT_PROPERTY`]).
    pub fn set_property(&mut self, property: &str, value: PropValue) {
        if property == TEXT_PROPERTY {
            self.text = match value {
                PropValue::Text(s) => s,
                other => other.to_string(),
            };
        } else {
            self.style.insert(property.to_string(), value);
        }
    }

    pub fn animation(&self, property: &str) -> Option<&Animation> {
        self.animations.iter().find(|a| a.property == property)
    }

    /// `true` when some animation has at least one keyframe.
    pub fn is_animated(&self) -> bool {
        self.animations.iter().any(|a| !a.keyframes.is_empty())
    }

    /// Add `keyframe` to `property`'s track, creating the track on first use.
    pub fn set_keyframe(&mut self, property: &str, keyframe: Keyframe) {
        match self.animations.iter_mut().find(|a| a.property == property) {
            Some(anim) => anim.insert_keyframe(keyframe),
            None => {
                let mut anim = Animation::new(property);
                anim.insert_keyframe(keyframe);
                self.animations.push(anim);
            }
        }
    }
}

/// Timed subtitle block; times are milliseconds on the project timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtitleBlock {
    pub id: String,
    pub start_time: f64,
    /// Exclusive.
    pub end_time: f64,
    pub span: SubtitleSpan,
}

impl SubtitleBlock {
    pub fn new(id: impl Into<String>, start_time: f64, end_time: f64, span: SubtitleSpan) -> Self {
        Self {
            id: id.into(),
            start_time,
            end_time,
            span,
        }
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Finite times with `start_time < end_time`.
    pub fn is_well_formed(&self) -> bool {
        self.start_time.is_finite() && self.end_time.is_finite() && self.start_time < self.end_time
    }
}

/// Subtitle project as consumed by the expansion pass.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Project {
    /// Export frame rate; may be fractional.
    #[serde(default = "default_fps")]
    pub fps: f64,
    /// Timeline blocks.
    pub blocks: Vec<SubtitleBlock>,
    /// Easing curves referenced by keyframes.
    #[serde(default)]
    pub curves: CurveLibrary,
}

fn default_fps() -> f64 {
    30.0
}

impl Project {
    pub fn new(fps: f64, blocks: Vec<SubtitleBlock>) -> Self {
        Self {
            fps,
            blocks,
            curves: CurveLibrary::builtin(),
        }
    }

    pub fn block(&self, id: &str) -> Option<&SubtitleBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Strict structural validation for loaded projects.
    pub fn validate(&self) -> SubframeResult<()> {
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(SubframeError::validation("project fps must be > 0"));
        }
        let mut ids = HashSet::new();
        for block in &self.blocks {
            if !ids.insert(block.id.as_str()) {
                return Err(SubframeError::validation(format!(
                    "duplicate block id '{}'",
                    block.id
                )));
            }
            if !block.is_well_formed() {
                return Err(SubframeError::validation(format!(
                    "block '{}' must have finite times with start < end",
                    block.id
                )));
            }
            for anim in &block.span.animations {
                anim.validate().map_err(|e| {
                    SubframeError::validation(format!("block '{}': {e}", block.id))
                })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/subtitle/model.rs"]
mod tests;
