use crate::foundation::core::{Area, Axis, Dir, EDGE_EPSILON, clamp};
use crate::layout::adjacency::{get_adjacent_areas, get_opposite_dir};

/// Split `id` in two along `axis`.
///
/// The original keeps the leading part (`ratio` of its size, clamped so both parts honour the
/// minimum size) and `new_id` takes the rest, inheriting the minimum sizes. Returns `None` when the
/// area is unknown, `new_id` is taken, or the area is too small to split.
pub fn split_area(
    areas: &[Area],
    id: &str,
    axis: Axis,
    ratio: f64,
    new_id: impl Into<String>,
) -> Option<Vec<Area>> {
    let new_id = new_id.into();
    if areas.iter().any(|a| a.id == new_id) {
        return None;
    }
    let idx = areas.iter().position(|a| a.id == id)?;
    let original = &areas[idx];

    let size = original.size(axis);
    let min = original.min_size(axis);
    if size < 2.0 * min || !ratio.is_finite() {
        return None;
    }
    let lead = clamp(size * ratio, min, size - min);

    let mut kept = original.clone();
    let mut added = original.clone();
    added.id = new_id;
    match axis {
        Axis::Horizontal => {
            kept.width = lead;
            added.x = original.x + lead;
            added.width = size - lead;
        }
        Axis::Vertical => {
            kept.height = lead;
            added.y = original.y + lead;
            added.height = size - lead;
        }
    }

    let mut next = areas.to_vec();
    next[idx] = kept;
    next.insert(idx + 1, added);
    Some(next)
}

/// Remove `id` and let the neighbours on one side absorb its space.
///
/// Sides are tried in `left, right, top, bottom` order; a side qualifies only when its neighbours
/// lie within the removed edge and cover it completely. Returns `None` when no side qualifies, the
/// area is unknown, or it is the last area.
pub fn remove_area(areas: &[Area], id: &str) -> Option<Vec<Area>> {
    if areas.len() <= 1 {
        return None;
    }
    let target = areas.iter().find(|a| a.id == id)?;

    for dir in Dir::ALL {
        let neighbours = get_adjacent_areas(areas, target, dir);
        if neighbours.is_empty() || !covers_edge(target, dir, &neighbours) {
            continue;
        }
        let grow_dir = get_opposite_dir(dir);
        let size = target.size(dir.axis());
        let delta = if grow_dir.is_leading() { -size } else { size };
        let ids: Vec<String> = neighbours.iter().map(|a| a.id.clone()).collect();

        let next = areas
            .iter()
            .filter(|a| a.id != id)
            .cloned()
            .map(|mut a| {
                if ids.contains(&a.id) {
                    a.move_border(grow_dir, delta);
                }
                a
            })
            .collect();
        return Some(next);
    }
    None
}

fn covers_edge(target: &Area, dir: Dir, neighbours: &[&Area]) -> bool {
    let (lo, hi) = target.cross_extent(dir);
    let mut covered = 0.0;
    for n in neighbours {
        let (n_lo, n_hi) = n.cross_extent(dir);
        if n_lo < lo - EDGE_EPSILON || n_hi > hi + EDGE_EPSILON {
            return false;
        }
        covered += n_hi - n_lo;
    }
    ((hi - lo) - covered).abs() < EDGE_EPSILON
}

#[cfg(test)]
#[path = "../../tests/unit/layout/ops.rs"]
mod tests;
