//! Subframe is the editing core of a subtitle editor.
//!
//! It covers two independent engines:
//!
//! - A tiled area layout where dragging one border moves every border linked to it, bounded by
//!   the minimum sizes of the areas involved and snapped to nearby edges.
//! - Keyframe animation for subtitle styles: cubic-bezier easing, per-kind interpolation and an
//!   expansion pass that bakes animation into static per-frame blocks for export.
#![forbid(unsafe_code)]

mod foundation;

/// Keyframes, easing and export-time expansion.
pub mod animation;
/// Snapshot undo history.
pub mod history;
/// Tiled area layout and border dragging.
pub mod layout;
/// Subtitle project model.
pub mod subtitle;

pub use crate::foundation::core::{
    Area, Axis, BorderRef, CONTAINER_EXTENT, DEFAULT_MIN_SIZE, Dir, EDGE_EPSILON, LinkedArea, Rect,
    clamp,
};
pub use crate::foundation::error::{SubframeError, SubframeResult};

pub use crate::animation::ease::{
    CurveLibrary, EasingCurve, LINEAR_ID, evaluate_cubic_bezier, evaluate_curve,
};
pub use crate::animation::expand::{
    ExpandConfig, expand_block, expand_project_for_animations, expand_project_with,
};
pub use crate::animation::fingerprint::{StyleFingerprint, fingerprint_span};
pub use crate::animation::interp::{
    interpolate_color, interpolate_number, interpolate_unit_number, interpolate_value, is_color,
    is_unit_number,
};
pub use crate::animation::keyframe::{
    Animation, Keyframe, apply_animations_to_span, resolve_keyframes,
};
pub use crate::animation::value::{PropValue, UnitNumber, ValueKind};
pub use crate::history::undo::{HistoryEntry, HistoryRecorder, NoHistory, UndoHistory};
pub use crate::layout::adjacency::{
    detect_linked_areas, get_adjacent_areas, get_opposite_dir, linked_borders,
};
pub use crate::layout::cache::LinkedBorderCache;
pub use crate::layout::drag::{
    DragConfig, DragEngine, DragSession, PointerThrottle, apply_border_delta,
};
pub use crate::layout::highlight::HoverHighlight;
pub use crate::layout::ops::{remove_area, split_area};
pub use crate::layout::state::LayoutState;
pub use crate::layout::tiling::{is_valid_tiling, validate_tiling};
pub use crate::subtitle::model::{Project, SubtitleBlock, SubtitleSpan, TEXT_PROPERTY};
