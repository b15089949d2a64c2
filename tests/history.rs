use eframe_designer::element::{Element, ElementId, ElementKind};
use eframe_designer::history::History;

fn snapshot(ids: &[u64]) -> Vec<Element> {
    ids.iter()
        .enumerate()
        .map(|(z, id)| Element::new(ElementId::new(*id), ElementKind::Rectangle, z))
        .collect()
}

#[test]
fn test_commits_grow_linearly() {
    let mut history = History::new();
    assert!(history.is_empty());
    assert_eq!(history.current_index(), None);

    for n in 1..=4 {
        history.commit(&snapshot(&[1]));
        assert_eq!(history.len(), n);
        assert_eq!(history.current_index(), Some(n - 1));
    }
    assert!(history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_snapshots_are_deep_copies() {
    let mut history = History::new();
    let mut live = snapshot(&[1]);
    history.commit(&live);
    history.commit(&live);

    // Mutating the live list afterwards must not alter past entries.
    live[0].x = 999.0;
    let restored = history.undo().unwrap();
    assert_eq!(restored[0].x, 50.0);
}

#[test]
fn test_undo_redo_traversal() {
    let mut history = History::new();
    history.commit(&snapshot(&[1]));
    history.commit(&snapshot(&[1, 2]));
    history.commit(&snapshot(&[1, 2, 3]));

    assert_eq!(history.undo().unwrap().len(), 2);
    assert_eq!(history.undo().unwrap().len(), 1);
    // Nothing earlier than the first entry.
    assert!(history.undo().is_none());

    assert_eq!(history.redo().unwrap().len(), 2);
    assert_eq!(history.redo().unwrap().len(), 3);
    assert!(history.redo().is_none());
}

#[test]
fn test_commit_after_undo_discards_redo_tail() {
    let mut history = History::new();
    history.commit(&snapshot(&[1]));
    history.commit(&snapshot(&[1, 2]));
    history.commit(&snapshot(&[1, 2, 3]));

    history.undo();
    history.undo();
    assert!(history.can_redo());

    history.commit(&snapshot(&[1, 9]));
    assert_eq!(history.len(), 2);
    assert_eq!(history.current_index(), Some(1));
    assert!(!history.can_redo());
    // The replaced tip is the new snapshot, not the discarded one.
    assert_eq!(history.undo().unwrap().len(), 1);
    assert_eq!(history.redo().unwrap()[1].id, ElementId::new(9));
}

#[test]
fn test_clear_forgets_everything() {
    let mut history = History::new();
    history.commit(&snapshot(&[1]));
    history.clear();
    assert!(history.is_empty());
    assert_eq!(history.current_index(), None);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}
