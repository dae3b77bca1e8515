use super::*;

fn drag_like_history() -> UndoHistory<u32> {
    let mut h = UndoHistory::new();
    h.record(0, "Initial", false);
    h.record(0, "Before resize", true);
    h.record(1, "Resize area", false);
    h.record(1, "Before resize", true);
    h.record(2, "Resize area", false);
    h
}

#[test]
fn undo_skips_internal_entries() {
    let mut h = drag_like_history();
    assert_eq!(h.undo(), Some(&1));
    assert_eq!(h.current().unwrap().description, "Resize area");
    assert_eq!(h.undo(), Some(&0));
    assert_eq!(h.current().unwrap().description, "Initial");
    assert_eq!(h.undo(), None);
    assert!(!h.can_undo());
}

#[test]
fn redo_skips_internal_entries() {
    let mut h = drag_like_history();
    h.undo();
    h.undo();
    assert_eq!(h.redo(), Some(&1));
    assert_eq!(h.redo(), Some(&2));
    assert_eq!(h.redo(), None);
    assert!(!h.can_redo());
}

#[test]
fn record_truncates_redo_tail() {
    let mut h = drag_like_history();
    h.undo();
    h.record(7, "Split area", false);
    assert!(!h.can_redo());
    assert_eq!(h.len(), 4);
    assert_eq!(h.undo(), Some(&1));
}

#[test]
fn limit_drops_oldest() {
    let mut h = UndoHistory::with_limit(2);
    h.record(1, "a", false);
    h.record(2, "b", false);
    h.record(3, "c", false);
    assert_eq!(h.len(), 2);
    assert_eq!(h.entries()[0].snapshot, 2);
    assert_eq!(h.undo(), Some(&2));
}

#[test]
fn leading_internal_entry_is_still_reachable() {
    let mut h = UndoHistory::new();
    h.record(0, "Before resize", true);
    h.record(1, "Resize area", false);
    assert_eq!(h.undo(), Some(&0));
}
