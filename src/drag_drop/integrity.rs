use std::fmt;

use itertools::Itertools as _;

use crate::model::{Row, RowKind};

/// A violation of the projected row-list shape.
///
/// The projector upholds these invariants by construction; the check exists
/// for hosts that assemble row lists by hand or splice them across
/// serialization boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowIntegrityError {
    /// Two rows share an id.
    DuplicateId { id: String },
    /// A child-tag row with no parent id.
    OrphanChild { id: String },
    /// A child-tag row whose parent is missing from the list, or is not a
    /// group header.
    UnknownParent { id: String, parent_id: String },
    /// A child-tag row that does not directly follow its group header or a
    /// sibling child of the same group.
    DetachedChild { id: String, parent_id: String },
    /// A root-level row (group header or ungrouped tag) carrying a parent id.
    ParentedRoot { id: String },
}

impl fmt::Display for RowIntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId { id } => write!(f, "duplicate row id: {id}"),
            Self::OrphanChild { id } => write!(f, "child tag row without a parent id: {id}"),
            Self::UnknownParent { id, parent_id } => {
                write!(
                    f,
                    "child tag row {id} references parent {parent_id}, which is not a group header in the list"
                )
            }
            Self::DetachedChild { id, parent_id } => {
                write!(
                    f,
                    "child tag row {id} is not contiguous under its group header {parent_id}"
                )
            }
            Self::ParentedRoot { id } => {
                write!(f, "root-level row {id} carries a parent id")
            }
        }
    }
}

impl std::error::Error for RowIntegrityError {}

/// Audit a flat row list against the projector's output shape.
///
/// Checked: unique ids; child rows parented to a group header present in the
/// list; children contiguous directly under their header; root rows
/// unparented. Returns the first violation found.
///
/// # Errors
///
/// Returns the first [`RowIntegrityError`] encountered, scanning in list
/// order.
pub fn check_rows(rows: &[Row]) -> Result<(), RowIntegrityError> {
    if let Some(id) = rows.iter().map(|row| row.id.as_str()).duplicates().next() {
        return Err(RowIntegrityError::DuplicateId { id: id.to_owned() });
    }

    let header_ids: ahash::HashSet<&str> = rows
        .iter()
        .filter(|row| row.kind == RowKind::GroupHeader)
        .map(|row| row.id.as_str())
        .collect();

    for row in rows {
        match row.kind {
            RowKind::GroupHeader | RowKind::UngroupedTag => {
                if row.parent_id.is_some() {
                    return Err(RowIntegrityError::ParentedRoot { id: row.id.clone() });
                }
            }
            RowKind::ChildTag => {
                let Some(parent_id) = row.parent_id.as_deref() else {
                    return Err(RowIntegrityError::OrphanChild { id: row.id.clone() });
                };
                if !header_ids.contains(parent_id) {
                    return Err(RowIntegrityError::UnknownParent {
                        id: row.id.clone(),
                        parent_id: parent_id.to_owned(),
                    });
                }
            }
        }
    }

    if let Some(first) = rows.first() {
        if first.kind == RowKind::ChildTag {
            return Err(RowIntegrityError::DetachedChild {
                id: first.id.clone(),
                parent_id: first.parent_id.clone().unwrap_or_default(),
            });
        }
    }

    for (prev, row) in rows.iter().tuple_windows() {
        if row.kind != RowKind::ChildTag {
            continue;
        }
        // Parent presence was validated above.
        let Some(parent_id) = row.parent_id.as_deref() else {
            continue;
        };
        let follows_header = prev.kind == RowKind::GroupHeader && prev.id == parent_id;
        let follows_sibling =
            prev.kind == RowKind::ChildTag && prev.parent_id.as_deref() == Some(parent_id);
        if !follows_header && !follows_sibling {
            return Err(RowIntegrityError::DetachedChild {
                id: row.id.clone(),
                parent_id: parent_id.to_owned(),
            });
        }
    }

    Ok(())
}
