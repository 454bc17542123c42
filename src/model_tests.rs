use crate::model::{RowKind, project_rows};
use crate::sidebar_builder::SidebarBuilder;

#[test]
fn projection_emits_headers_then_children_then_ungrouped() {
    let (groups, ungrouped) = SidebarBuilder::new()
        .group("g1", "Work")
        .tag("t1", "urgent")
        .tag("t2", "backlog")
        .group("g2", "Home")
        .tag("t3", "chores")
        .ungrouped("t4", "inbox")
        .ungrouped("t5", "someday")
        .finish();

    let rows = project_rows(&groups, &ungrouped);

    let shape: Vec<(&str, RowKind, Option<&str>)> = rows
        .iter()
        .map(|row| (row.id.as_str(), row.kind, row.parent_id.as_deref()))
        .collect();
    assert_eq!(
        shape,
        vec![
            ("g1", RowKind::GroupHeader, None),
            ("t1", RowKind::ChildTag, Some("g1")),
            ("t2", RowKind::ChildTag, Some("g1")),
            ("g2", RowKind::GroupHeader, None),
            ("t3", RowKind::ChildTag, Some("g2")),
            ("t4", RowKind::UngroupedTag, None),
            ("t5", RowKind::UngroupedTag, None),
        ]
    );
}

#[test]
fn projection_is_idempotent() {
    let (groups, ungrouped) = SidebarBuilder::new()
        .group("g1", "Work")
        .tag("t1", "urgent")
        .ungrouped("t2", "inbox")
        .finish();

    let first = project_rows(&groups, &ungrouped);
    let second = project_rows(&groups, &ungrouped);
    assert_eq!(first, second, "identical input must project identically");
}

#[test]
fn projection_preserves_source_order_without_sorting() {
    // Deliberately non-monotonic display orders: the projector must not sort.
    let (mut groups, mut ungrouped) = SidebarBuilder::new()
        .group("g1", "Work")
        .tag("t1", "urgent")
        .ungrouped("t2", "inbox")
        .finish();
    groups[0].display_order = 9;
    groups[0].tags[0].display_order = -3;
    ungrouped[0].display_order = 1;

    let rows = project_rows(&groups, &ungrouped);
    let ids: Vec<&str> = rows.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(ids, vec!["g1", "t1", "t2"]);
    assert_eq!(rows[0].display_order, 9);
    assert_eq!(rows[1].display_order, -3);
    assert_eq!(rows[2].display_order, 1);
}

#[test]
fn projection_of_empty_collections_is_empty() {
    assert!(project_rows(&[], &[]).is_empty());
}

#[test]
fn projected_rows_pass_the_integrity_check() {
    let (groups, ungrouped) = SidebarBuilder::new()
        .group("g1", "Work")
        .tag("t1", "urgent")
        .group("g2", "Home")
        .ungrouped("t2", "inbox")
        .finish();

    let rows = project_rows(&groups, &ungrouped);
    assert_eq!(crate::drag_drop::check_rows(&rows), Ok(()));
}
