/// Convenience result type used across Subframe.
pub type SubframeResult<T> = Result<T, SubframeError>;

/// Top-level error taxonomy used at the validation and mutation boundary.
///
/// Interactive paths (drag frames, curve evaluation, keyframe sampling) never
/// produce these; they degrade to no-ops or clamped values instead.
#[derive(thiserror::Error, Debug)]
pub enum SubframeError {
    /// Invalid user-provided or persisted data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Layout geometry that breaks the tiling invariant.
    #[error("layout error: {0}")]
    Layout(String),

    /// Invalid animation or easing curve edits.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SubframeError {
    /// Build a [`SubframeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SubframeError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`SubframeError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`SubframeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SubframeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
