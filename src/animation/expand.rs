use crate::animation::ease::CurveLibrary;
use crate::animation::fingerprint::{StyleFingerprint, fingerprint_span};
use crate::animation::keyframe::apply_animations_to_span;
use crate::subtitle::model::{Project, SubtitleBlock};

/// Blocks needing more frames than this are passed through unexpanded.
const MAX_FRAMES_PER_BLOCK: f64 = 1_000_000.0;

/// Knobs for the expansion pass.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ExpandConfig {
    /// Decimal places numeric style values are rounded to before frames are compared.
    pub style_precision: u32,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self { style_precision: 2 }
    }
}

/// Bake keyframe animation into static per-frame blocks at `fps`.
///
/// Animated blocks are sampled once per frame and runs of frames with an identical style are
/// merged back into single blocks. Blocks without keyframes, malformed blocks, and every block when
/// `fps` is not a positive finite number pass through unchanged.
pub fn expand_project_for_animations(project: &Project, fps: f64) -> Project {
    expand_project_with(project, fps, &ExpandConfig::default())
}

/// [`expand_project_for_animations`] with explicit configuration.
#[tracing::instrument(skip(project, config), fields(blocks = project.blocks.len()))]
pub fn expand_project_with(project: &Project, fps: f64, config: &ExpandConfig) -> Project {
    let mut out = Project {
        fps,
        blocks: Vec::with_capacity(project.blocks.len()),
        curves: project.curves.clone(),
    };
    if !(fps.is_finite() && fps > 0.0) {
        tracing::warn!("fps must be positive; animations left unexpanded");
        out.fps = project.fps;
        out.blocks = project.blocks.clone();
        return out;
    }

    for block in &project.blocks {
        out.blocks
            .extend(expand_block(block, fps, &project.curves, config));
    }
    tracing::debug!(output_blocks = out.blocks.len(), "expansion finished");
    out
}

/// Expand one block; returns it unchanged when it has nothing to animate or cannot be expanded.
pub fn expand_block(
    block: &SubtitleBlock,
    fps: f64,
    curves: &CurveLibrary,
    config: &ExpandConfig,
) -> Vec<SubtitleBlock> {
    if !block.span.is_animated() {
        return vec![block.clone()];
    }
    if !block.is_well_formed() {
        tracing::warn!(block = %block.id, "skipping malformed block");
        return vec![block.clone()];
    }
    let frame_ms = 1000.0 / fps;
    let frames = (block.duration() / frame_ms).ceil();
    if !(frames.is_finite() && frames <= MAX_FRAMES_PER_BLOCK) {
        tracing::warn!(block = %block.id, frames, "too many frames; block left unexpanded");
        return vec![block.clone()];
    }

    let mut merged: Vec<SubtitleBlock> = Vec::new();
    let mut current: Option<(StyleFingerprint, SubtitleBlock)> = None;
    for i in 0..frames as usize {
        let start = block.start_time + (i as f64) * frame_ms;
        if start >= block.end_time {
            break;
        }
        let end = (start + frame_ms).min(block.end_time);

        let mut span = apply_animations_to_span(&block.span, start - block.start_time, curves);
        span.animations.clear();
        let fp = fingerprint_span(&span, config.style_precision);

        if let Some((prev, run)) = current.as_mut() {
            if *prev == fp {
                run.end_time = end;
                continue;
            }
        }
        if let Some((_, run)) = current.take() {
            merged.push(run);
        }
        let id = format!("{}#{}", block.id, merged.len());
        current = Some((fp, SubtitleBlock::new(id, start, end, span)));
    }
    if let Some((_, run)) = current {
        merged.push(run);
    }
    merged
}

#[cfg(test)]
#[path = "../../tests/unit/animation/expand.rs"]
mod tests;
