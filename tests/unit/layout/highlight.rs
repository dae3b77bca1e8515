use super::*;
use crate::foundation::core::{Area, Dir, EDGE_EPSILON};

fn layout() -> LayoutState {
    LayoutState::new(vec![
        Area::new("A", 0.0, 0.0, 50.0, 100.0),
        Area::new("B", 50.0, 0.0, 50.0, 100.0),
    ])
    .unwrap()
}

#[test]
fn recomputes_only_on_target_change() {
    let layout = layout();
    let mut cache = LinkedBorderCache::new();
    let mut hl = HoverHighlight::new();
    let target = BorderRef::new("A", Dir::Right);

    assert!(hl.update(&layout, Some(&target), &mut cache, EDGE_EPSILON));
    assert!(!hl.update(&layout, Some(&target), &mut cache, EDGE_EPSILON));
    assert_eq!(
        hl.borders(),
        &[LinkedArea::new("A", Dir::Right), LinkedArea::new("B", Dir::Left)]
    );
    assert!(hl.is_highlighted(&LinkedArea::new("B", Dir::Left)));

    assert!(hl.update(&layout, None, &mut cache, EDGE_EPSILON));
    assert!(hl.borders().is_empty());
}

#[test]
fn layout_commit_forces_refresh() {
    let mut layout = layout();
    let mut cache = LinkedBorderCache::new();
    let mut hl = HoverHighlight::new();
    let target = BorderRef::new("A", Dir::Right);
    hl.update(&layout, Some(&target), &mut cache, EDGE_EPSILON);

    let areas = layout.areas().to_vec();
    layout.commit(areas);
    assert!(hl.update(&layout, Some(&target), &mut cache, EDGE_EPSILON));
}

#[test]
fn missing_area_highlights_nothing() {
    let layout = layout();
    let mut cache = LinkedBorderCache::new();
    let mut hl = HoverHighlight::new();
    hl.update(
        &layout,
        Some(&BorderRef::new("gone", Dir::Left)),
        &mut cache,
        EDGE_EPSILON,
    );
    assert!(hl.borders().is_empty());
    assert_eq!(hl.target().unwrap().area_id, "gone");
}
