use camelot::{
    Column, HighlightCoordinator, Key, Paint, PointerEvent, Relation, RowState, TableOptions,
    TableView,
};

fn key(s: &str) -> Key {
    s.parse().unwrap()
}

fn table(options: TableOptions) -> (HighlightCoordinator, TableView) {
    let c = HighlightCoordinator::new();
    let t = TableView::new(options, c.reader(), c.writer());
    (c, t)
}

#[test]
fn columns_in_fixed_order() {
    let (_, t) = table(TableOptions::default());
    let labels: Vec<&str> = t.columns().iter().map(|c| c.label()).collect();
    assert_eq!(
        labels,
        ["Key", "-1", "+1", "Energy Boost", "Scale Change", "Diagonal", "Jaws", "Mood Shifter"]
    );

    let (_, t) = table(TableOptions { show_perfect: true });
    assert_eq!(t.columns()[1], Column::Perfect);
    assert_eq!(t.columns().len(), 9);
    assert!(t.rows().iter().all(|r| r.cells[1].value == r.key));
}

#[test]
fn rows_show_relation_targets() {
    let (_, t) = table(TableOptions::default());
    assert_eq!(t.rows().len(), 24);
    let row = t.row(key("5B"));
    let shown: Vec<&str> = row.cells.iter().map(|c| c.notation.short).collect();
    assert_eq!(shown, ["5B", "4B", "6B", "7B", "5A", "6A", "11B", "3A"]);
    assert_eq!(row.cells[0].notation.long, "E-Flat Major");
    assert_eq!(Column::Relation(Relation::Jaws).value(key("5B")), key("11B"));
}

#[test]
fn styles_follow_row_state() {
    let (c, t) = table(TableOptions::default());
    let idle = c.snapshot();
    let row = t.row(key("8A"));
    let cell = &row.cells[3];
    let style = t.cell_style(&idle, cell, row.key);
    assert_eq!(style.background, None);
    assert_eq!(style.foreground, Paint::Color(cell.value.color()));
    assert!(!style.bold);
    assert!(style.muted_long_name);
    assert!(t.cell_style(&idle, &row.cells[0], row.key).bold);

    t.handle(PointerEvent::Enter(key("8A")));
    let snap = c.snapshot();
    assert_eq!(t.row_state(&snap, key("8A")), RowState::Highlighted);
    assert_eq!(t.row_state(&snap, key("8B")), RowState::Dimmed);
    assert_eq!(RowState::Dimmed.opacity(), 0.3);
    let style = t.cell_style(&snap, cell, row.key);
    assert_eq!(style.background, Some(cell.value.color()));
    assert_eq!(style.foreground, Paint::White);
    assert!(!style.muted_long_name);

    t.handle(PointerEvent::Leave);
    assert_eq!(c.read(), None);
}

#[test]
fn cell_emphasis_tracks_the_shared_slot() {
    let (c, t) = table(TableOptions::default());
    let jaws = Column::Relation(Relation::Jaws);

    t.on_cell_enter(key("8A"), jaws);
    let snap = c.snapshot();
    let focus = t.cell_focus(&snap).expect("cell focused");
    assert_eq!((focus.row, focus.column), (key("8A"), jaws));
    let row = t.row(key("8A"));
    let jaws_cell = row.cells.iter().find(|cell| cell.column == jaws).unwrap();
    assert!(t.cell_style(&snap, jaws_cell, row.key).bold);
    assert_eq!(t.header_tint(&snap, jaws), Some(key("2A").color()));
    assert_eq!(t.header_tint(&snap, Column::Key), None);

    // Another view takes over the slot: the stale emphasis is not reported.
    c.set(Some(key("1B")));
    let snap = c.snapshot();
    assert_eq!(t.cell_focus(&snap), None);
    assert_eq!(t.header_tint(&snap, jaws), None);
    assert!(!t.cell_style(&snap, jaws_cell, row.key).bold);

    t.on_cell_leave();
    c.set(Some(key("8A")));
    assert_eq!(t.cell_focus(&c.snapshot()), None);
}

#[test]
fn focus_and_blur_mirror_pointer() {
    let (c, t) = table(TableOptions::default());
    t.on_focus(key("11A"));
    assert_eq!(c.read(), Some(key("11A")));
    t.on_blur();
    assert_eq!(c.read(), None);
}
