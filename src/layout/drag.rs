use std::collections::HashSet;
use std::time::{Duration, Instant};

use smallvec::SmallVec;

use crate::foundation::core::{
    Area, Axis, BorderRef, CONTAINER_EXTENT, Dir, EDGE_EPSILON, LinkedArea, clamp,
};
use crate::foundation::math::safe_div;
use crate::history::undo::HistoryRecorder;
use crate::layout::cache::LinkedBorderCache;
use crate::layout::state::LayoutState;

/// Tunables for border dragging. All distances are in percent of the container.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Snap the dragged border to nearby edges of unaffected areas.
    pub snap_enabled: bool,
    /// Maximum distance at which snapping engages.
    pub snap_threshold: f64,
    /// Movements at or below this magnitude are dropped.
    pub min_change: f64,
    /// Margin kept between an area and its minimum size.
    pub capacity_epsilon: f64,
    /// Tolerance for treating two edges as shared.
    pub adjacency_epsilon: f64,
    /// Upper bound on processed pointer moves per second; `0` disables throttling.
    pub max_rate_hz: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            snap_enabled: true,
            snap_threshold: 2.0,
            min_change: 0.01,
            capacity_epsilon: 0.001,
            adjacency_epsilon: EDGE_EPSILON,
            max_rate_hz: 30.0,
        }
    }
}

/// State of one pointer-down to pointer-up gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    pub area_id: String,
    pub dir: Dir,
    /// Pointer position of the last frame that was actually applied.
    pub last_pointer_x: f64,
    pub last_pointer_y: f64,
    pub linked: Vec<LinkedArea>,
    original: Vec<Area>,
}

impl DragSession {
    pub fn origin(&self) -> BorderRef {
        BorderRef::new(self.area_id.clone(), self.dir)
    }

    /// Layout as it was when the gesture started.
    pub fn original(&self) -> &[Area] {
        &self.original
    }
}

/// Border drag controller.
///
/// Holds configuration and the linked-border memo; all geometry flows in and out as snapshots.
#[derive(Debug, Default)]
pub struct DragEngine {
    config: DragConfig,
    cache: LinkedBorderCache,
}

impl DragEngine {
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            cache: LinkedBorderCache::new(),
        }
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Memoized linked borders for `area_id`'s `dir` border.
    pub fn compute_linked_borders(
        &mut self,
        layout: &LayoutState,
        area_id: &str,
        dir: Dir,
    ) -> Vec<LinkedArea> {
        self.cache
            .get(layout, area_id, dir, self.config.adjacency_epsilon)
            .to_vec()
    }

    /// Shared access to the memo, e.g. for hover highlighting.
    pub fn cache_mut(&mut self) -> &mut LinkedBorderCache {
        &mut self.cache
    }

    /// Start a gesture on `area_id`'s `dir` border.
    ///
    /// Returns `None` when the area is unknown or the border lies on the container boundary.
    /// Records the pre-drag snapshot as an internal history entry.
    #[tracing::instrument(skip(self, layout, history), fields(version = layout.version()))]
    pub fn begin_drag<H>(
        &mut self,
        layout: &LayoutState,
        area_id: &str,
        dir: Dir,
        pointer_x: f64,
        pointer_y: f64,
        history: &mut H,
    ) -> Option<DragSession>
    where
        H: HistoryRecorder<Vec<Area>> + ?Sized,
    {
        let Some(area) = layout.get(area_id) else {
            tracing::debug!("drag target not found");
            return None;
        };
        if is_container_edge(area, dir, self.config.adjacency_epsilon) {
            tracing::debug!("container boundary border is not draggable");
            return None;
        }

        let linked = self.compute_linked_borders(layout, area_id, dir);
        if linked.is_empty() {
            tracing::debug!("border has no neighbours");
            return None;
        }

        history.record(layout.areas().to_vec(), "Before resize", true);
        Some(DragSession {
            area_id: area_id.to_string(),
            dir,
            last_pointer_x: pointer_x,
            last_pointer_y: pointer_y,
            linked,
            original: layout.areas().to_vec(),
        })
    }

    /// Process one pointer move.
    ///
    /// Returns the new layout, or `None` when the frame is a no-op (movement below
    /// [`DragConfig::min_change`], degenerate container, or an affected area vanished).
    /// The session only advances when a change is returned.
    pub fn on_pointer_move(
        &self,
        session: &mut DragSession,
        areas: &[Area],
        pointer_x: f64,
        pointer_y: f64,
        container_width_px: f64,
        container_height_px: f64,
    ) -> Option<Vec<Area>> {
        let (moved_px, container_px) = match session.dir.axis() {
            Axis::Horizontal => (pointer_x - session.last_pointer_x, container_width_px),
            Axis::Vertical => (pointer_y - session.last_pointer_y, container_height_px),
        };
        if container_px <= 0.0 {
            return None;
        }
        let delta = safe_div(moved_px, container_px) * CONTAINER_EXTENT;

        let next = apply_border_delta(
            areas,
            &session.origin(),
            &session.linked,
            delta,
            &self.config,
        )?;
        session.last_pointer_x = pointer_x;
        session.last_pointer_y = pointer_y;
        Some(next)
    }

    /// Finish the gesture and record the resulting layout.
    pub fn end_drag<H>(&self, session: DragSession, areas: &[Area], history: &mut H)
    where
        H: HistoryRecorder<Vec<Area>> + ?Sized,
    {
        tracing::debug!(area_id = %session.area_id, dir = ?session.dir, "drag committed");
        history.record(areas.to_vec(), "Resize area", false);
    }

    /// Abort the gesture, handing back the pre-drag layout.
    pub fn cancel_drag(&self, session: DragSession) -> Vec<Area> {
        tracing::debug!(area_id = %session.area_id, dir = ?session.dir, "drag cancelled");
        session.original
    }

    /// Rate limiter configured from [`DragConfig::max_rate_hz`].
    pub fn pointer_throttle(&self) -> PointerThrottle {
        PointerThrottle::from_rate_hz(self.config.max_rate_hz)
    }
}

/// Move `origin` and every `linked` border by `requested` percent along their axis.
///
/// The delta is clamped so no affected area drops below its minimum size, optionally snapped to
/// an edge of an unaffected area, then applied to a copy of `areas`. Returns `None` if the
/// resulting movement is below `config.min_change` or a referenced area is missing.
pub fn apply_border_delta(
    areas: &[Area],
    origin: &BorderRef,
    linked: &[LinkedArea],
    requested: f64,
    config: &DragConfig,
) -> Option<Vec<Area>> {
    if !requested.is_finite() {
        return None;
    }
    let axis = origin.dir.axis();

    let mut affected: SmallVec<[(usize, Dir); 8]> = SmallVec::with_capacity(linked.len() + 1);
    for border in std::iter::once(LinkedArea::from(origin)).chain(linked.iter().cloned()) {
        if border.dir.axis() != axis {
            continue;
        }
        let Some(idx) = areas.iter().position(|a| a.id == border.id) else {
            tracing::debug!(area_id = %border.id, "affected area vanished mid-drag");
            return None;
        };
        affected.push((idx, border.dir));
    }
    let origin_idx = affected[0].0;

    let (limit_neg, limit_pos) = movement_limits(areas, &affected, config.capacity_epsilon);
    let mut delta = clamp(requested, -limit_neg, limit_pos);

    if config.snap_enabled {
        let affected_ids: HashSet<&str> = affected
            .iter()
            .map(|(idx, _)| areas[*idx].id.as_str())
            .collect();
        let tentative = areas[origin_idx].edge(origin.dir) + delta;
        if let Some(edge) = nearest_snap_edge(areas, &affected_ids, axis, tentative, config) {
            delta = clamp(delta + (edge - tentative), -limit_neg, limit_pos);
        }
    }

    if delta.abs() <= config.min_change {
        return None;
    }

    let mut next = areas.to_vec();
    for &(idx, dir) in &affected {
        next[idx].move_border(dir, delta);
    }
    Some(next)
}

/// `(limit_neg, limit_pos)`: how far the shared border may travel towards lower and higher
/// coordinates before some affected area reaches its minimum size (minus `eps`).
fn movement_limits(areas: &[Area], affected: &[(usize, Dir)], eps: f64) -> (f64, f64) {
    let mut limit_pos = f64::INFINITY;
    let mut limit_neg = f64::INFINITY;
    for &(idx, dir) in affected {
        let a = &areas[idx];
        let axis = dir.axis();
        let capacity = a.size(axis) - a.min_size(axis);
        if dir.is_leading() {
            limit_pos = limit_pos.min(capacity);
        } else {
            limit_neg = limit_neg.min(capacity);
        }
    }

    // The border itself never leaves the container.
    if let Some(&(idx, dir)) = affected.first() {
        let pos = areas[idx].edge(dir);
        limit_pos = limit_pos.min(CONTAINER_EXTENT - pos);
        limit_neg = limit_neg.min(pos);
    }

    ((limit_neg - eps).max(0.0), (limit_pos - eps).max(0.0))
}

fn nearest_snap_edge(
    areas: &[Area],
    affected_ids: &HashSet<&str>,
    axis: Axis,
    tentative: f64,
    config: &DragConfig,
) -> Option<f64> {
    let mut best: Option<(f64, f64)> = None;
    for a in areas.iter().filter(|a| !affected_ids.contains(a.id.as_str())) {
        let edges = match axis {
            Axis::Horizontal => [a.x, a.right()],
            Axis::Vertical => [a.y, a.bottom()],
        };
        for edge in edges {
            let dist = (edge - tentative).abs();
            if dist < config.snap_threshold && best.is_none_or(|(d, _)| dist < d) {
                best = Some((dist, edge));
            }
        }
    }
    best.map(|(_, edge)| edge)
}

fn is_container_edge(area: &Area, dir: Dir, eps: f64) -> bool {
    let edge = area.edge(dir);
    if dir.is_leading() {
        edge.abs() < eps
    } else {
        (edge - CONTAINER_EXTENT).abs() < eps
    }
}

/// Drops pointer moves arriving faster than a configured rate.
///
/// Skipped moves are not lost: the next admitted move measures its delta from the last applied
/// pointer position.
#[derive(Clone, Debug)]
pub struct PointerThrottle {
    min_interval: Duration,
    last: Option<Instant>,
}

impl PointerThrottle {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last: None,
        }
    }

    /// Throttle at `hz` moves per second; non-positive or non-finite rates disable it.
    pub fn from_rate_hz(hz: f64) -> Self {
        let min_interval = if hz > 0.0 && hz.is_finite() {
            Duration::from_secs_f64(1.0 / hz)
        } else {
            Duration::ZERO
        };
        Self::new(min_interval)
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// `true` when a move at `now` should be processed.
    pub fn admit(&mut self, now: Instant) -> bool {
        let ok = self
            .last
            .is_none_or(|last| now.saturating_duration_since(last) >= self.min_interval);
        if ok {
            self.last = Some(now);
        }
        ok
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/drag.rs"]
mod tests;
