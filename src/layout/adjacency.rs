use std::collections::HashSet;

use crate::foundation::core::{Area, Dir, EDGE_EPSILON, LinkedArea};

/// `left <-> right`, `top <-> bottom`.
pub fn get_opposite_dir(dir: Dir) -> Dir {
    match dir {
        Dir::Left => Dir::Right,
        Dir::Right => Dir::Left,
        Dir::Top => Dir::Bottom,
        Dir::Bottom => Dir::Top,
    }
}

/// Areas sharing `area`'s border on `dir`, using the default edge tolerance.
pub fn get_adjacent_areas<'a>(areas: &'a [Area], area: &Area, dir: Dir) -> Vec<&'a Area> {
    get_adjacent_areas_eps(areas, area, dir, EDGE_EPSILON)
}

/// Areas whose edge opposite `dir` coincides with `area`'s edge on `dir` (within `eps`) and whose
/// perpendicular extent strictly overlaps `area`'s. Corner contact does not count.
pub fn get_adjacent_areas_eps<'a>(
    areas: &'a [Area],
    area: &Area,
    dir: Dir,
    eps: f64,
) -> Vec<&'a Area> {
    let edge = area.edge(dir);
    let opposite = get_opposite_dir(dir);
    let (lo, hi) = area.cross_extent(dir);
    areas
        .iter()
        .filter(|a| a.id != area.id)
        .filter(|a| (a.edge(opposite) - edge).abs() < eps)
        .filter(|a| {
            let (a_lo, a_hi) = a.cross_extent(dir);
            a_lo < hi && a_hi > lo
        })
        .collect()
}

/// Depth-first discovery of every border moving together with `start_area`'s border on `dir`.
///
/// Each adjacent area contributes its border on the opposite side, and the search continues from
/// it in that opposite direction, so aligned chains of shared borders (L shapes, staircases) are
/// collected transitively. `visited` holds area ids and stops revisits; callers normally seed it
/// with `start_area.id`. Results are appended to `result` in traversal order.
pub fn detect_linked_areas(
    areas: &[Area],
    start_area: &Area,
    dir: Dir,
    visited: &mut HashSet<String>,
    result: &mut Vec<LinkedArea>,
) {
    detect_linked_areas_eps(areas, start_area, dir, EDGE_EPSILON, visited, result);
}

pub(crate) fn detect_linked_areas_eps(
    areas: &[Area],
    start_area: &Area,
    dir: Dir,
    eps: f64,
    visited: &mut HashSet<String>,
    result: &mut Vec<LinkedArea>,
) {
    let opposite = get_opposite_dir(dir);
    for adj in get_adjacent_areas_eps(areas, start_area, dir, eps) {
        if !visited.insert(adj.id.clone()) {
            continue;
        }
        result.push(LinkedArea::new(adj.id.clone(), opposite));
        detect_linked_areas_eps(areas, adj, opposite, eps, visited, result);
    }
}

/// Linked borders of `area_id`'s border on `dir`, excluding the origin itself.
///
/// Returns an empty list when the area does not exist.
pub fn linked_borders(areas: &[Area], area_id: &str, dir: Dir, eps: f64) -> Vec<LinkedArea> {
    let Some(start) = areas.iter().find(|a| a.id == area_id) else {
        return Vec::new();
    };
    let mut visited = HashSet::from([start.id.clone()]);
    let mut result = Vec::new();
    detect_linked_areas_eps(areas, start, dir, eps, &mut visited, &mut result);
    result
}

#[cfg(test)]
#[path = "../../tests/unit/layout/adjacency.rs"]
mod tests;
