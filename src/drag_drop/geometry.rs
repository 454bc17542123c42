use egui::{Pos2, Rect};

use crate::model::{Row, RowKind};

/// Stable, kind-qualified lookup key for a row's on-screen element.
///
/// The rendering layer registers each row's geometry under this key so the
/// resolver can retrieve rects without owning any rendering concerns. Keeping
/// the kind in the key means a tag and a group sharing an id (different
/// namespaces on the host side) can never alias.
pub fn row_lookup_key(kind: RowKind, id: &str) -> String {
    match kind {
        RowKind::GroupHeader => format!("group-header:{id}"),
        RowKind::ChildTag => format!("child-tag:{id}"),
        RowKind::UngroupedTag => format!("ungrouped-tag:{id}"),
    }
}

/// The nearest-neighbor collision primitive, supplied by the host's drag
/// library. This crate only layers zone refinement and hierarchy constraints
/// on top of whatever candidate the primitive finds.
pub trait NearestRow {
    /// Id of the single row closest to `pointer`, or `None` when the pointer
    /// is outside the list entirely.
    fn nearest_row(&self, pointer: Pos2, rows: &[Row]) -> Option<String>;
}

impl<F> NearestRow for F
where
    F: Fn(Pos2, &[Row]) -> Option<String>,
{
    fn nearest_row(&self, pointer: Pos2, rows: &[Row]) -> Option<String> {
        self(pointer, rows)
    }
}

/// The rendering layer's per-row element lookup, keyed by [`row_lookup_key`].
pub trait RowGeometry {
    /// On-screen rect for the row registered under `key`, or `None` when the
    /// element is not mounted (virtualization, re-render in flight).
    fn row_rect(&self, key: &str) -> Option<Rect>;
}

impl<F> RowGeometry for F
where
    F: Fn(&str) -> Option<Rect>,
{
    fn row_rect(&self, key: &str) -> Option<Rect> {
        self(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_keys_are_kind_qualified() {
        assert_eq!(row_lookup_key(RowKind::GroupHeader, "g1"), "group-header:g1");
        assert_eq!(row_lookup_key(RowKind::ChildTag, "t1"), "child-tag:t1");
        assert_eq!(row_lookup_key(RowKind::UngroupedTag, "t2"), "ungrouped-tag:t2");
        assert_ne!(
            row_lookup_key(RowKind::GroupHeader, "x"),
            row_lookup_key(RowKind::UngroupedTag, "x"),
            "same id under different kinds must not alias"
        );
    }
}
