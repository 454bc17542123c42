//! Sidebar source collections and their flat row projection.
//!
//! The sidebar is a two-level hierarchy: root-level [`TagGroup`]s holding
//! child [`Tag`]s, plus root-level ungrouped [`Tag`]s. Drag-and-drop operates
//! on a linearized view of that hierarchy ([`Row`]), where parent/child
//! relationships are carried as data (`parent_id`) instead of nesting.

/// A tag in the sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag {
    pub id: String,
    pub name: String,
    /// Display color, owned and interpreted by the host's rendering layer.
    pub color: Option<String>,
    /// Externally owned sort key. Compared, never recomputed here.
    pub display_order: i64,
}

/// A named, root-level container for zero or more child tags.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagGroup {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub display_order: i64,
    /// Child tags in their current display order.
    pub tags: Vec<Tag>,
}

/// What a flattened row represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowKind {
    /// A group's header row; root-level only.
    GroupHeader,
    /// A tag nested under exactly one group.
    ChildTag,
    /// A tag with no group; root-level, sibling to group headers.
    UngroupedTag,
}

/// One element of the flat projection.
///
/// The list's relative order defines visual order; `display_order` is an
/// externally owned sort key kept only for the host's drag-end bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    pub id: String,
    pub kind: RowKind,
    /// `Some(group id)` for [`RowKind::ChildTag`], `None` for root-level rows.
    pub parent_id: Option<String>,
    pub display_order: i64,
}

/// What kind of item a drag gesture carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragKind {
    Group,
    Tag,
}

/// Snapshot of the dragged item, taken at drag start and immutable for the
/// duration of one gesture.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DraggedItem {
    pub id: String,
    pub kind: DragKind,
    /// The group the tag belonged to at drag start, if any.
    pub parent_id: Option<String>,
}

impl DraggedItem {
    /// Whether this is a tag that currently lives under a group.
    pub fn is_grouped_tag(&self) -> bool {
        self.kind == DragKind::Tag && self.parent_id.is_some()
    }
}

/// Flatten the two-level hierarchy into one ordered row list.
///
/// Emits, for each group, its [`RowKind::GroupHeader`] row followed by one
/// [`RowKind::ChildTag`] row per member tag, then one [`RowKind::UngroupedTag`]
/// row per ungrouped tag. Pure and deterministic: the source collections'
/// order is preserved as-is, nothing is sorted.
///
/// Re-run this on structural change (add/remove/rename/regroup), not on
/// pointer moves — an active drag keeps using the list it started with.
pub fn project_rows(groups: &[TagGroup], ungrouped: &[Tag]) -> Vec<Row> {
    let row_count = groups.iter().map(|g| 1 + g.tags.len()).sum::<usize>() + ungrouped.len();
    let mut rows = Vec::with_capacity(row_count);

    for group in groups {
        rows.push(Row {
            id: group.id.clone(),
            kind: RowKind::GroupHeader,
            parent_id: None,
            display_order: group.display_order,
        });
        for tag in &group.tags {
            rows.push(Row {
                id: tag.id.clone(),
                kind: RowKind::ChildTag,
                parent_id: Some(group.id.clone()),
                display_order: tag.display_order,
            });
        }
    }

    for tag in ungrouped {
        rows.push(Row {
            id: tag.id.clone(),
            kind: RowKind::UngroupedTag,
            parent_id: None,
            display_order: tag.display_order,
        });
    }

    rows
}
