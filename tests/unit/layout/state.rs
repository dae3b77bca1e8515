use super::*;

#[test]
fn commit_moves_to_a_new_version() {
    let mut state = LayoutState::single("root");
    let before = state.version();
    let mut areas = state.areas().to_vec();
    areas[0].min_width = Some(10.0);
    state.commit(areas);
    assert_ne!(state.version(), before);
    assert_eq!(state.get("root").unwrap().min_width, Some(10.0));
}

#[test]
fn independent_states_never_share_a_version() {
    let a = LayoutState::single("root");
    let b = LayoutState::single("root");
    let c = LayoutState::new(vec![Area::full("other")]).unwrap();
    assert_ne!(a.version(), b.version());
    assert_ne!(b.version(), c.version());

    let loaded: LayoutState = serde_json::from_str(
        r#"{ "areas": [ { "id": "root", "x": 0, "y": 0, "width": 100, "height": 100 } ] }"#,
    )
    .unwrap();
    assert_ne!(loaded.version(), a.version());
    assert_ne!(loaded.version(), LayoutState::single("root").version());
}

#[test]
fn new_rejects_broken_tiling() {
    let areas = vec![Area::new("a", 0.0, 0.0, 50.0, 100.0)];
    assert!(LayoutState::new(areas).is_err());
}
