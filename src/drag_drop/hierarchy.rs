use crate::model::{DragKind, DraggedItem, Row, RowKind};

use super::zone::Zone;

/// A small, testable legality helper: adjust a raw geometric zone so the
/// implied structural change keeps the hierarchy exactly two levels deep.
///
/// Rationale:
/// - Nesting a currently-grouped tag under a plain ungrouped tag would turn
///   that tag into a grandchild, so the nesting zone downgrades to an
///   insertion above the target.
/// - Groups never nest under anything; a nesting zone under a dragged group
///   downgrades the same way.
/// - Everything else passes through: `Before`/`After` on a child-tag target
///   means "place adjacent to the target, in the target's parent", and a
///   grouped tag dropped into a *different* group's header is a plain
///   re-parent (it moves sideways, not deeper).
///
/// Total and infallible — invalid geometry degrades instead of failing the
/// gesture. Rejecting a target outright (a dragged group over a child row)
/// happens one level up in the resolver, not here.
pub fn validate_zone(dragged: &DraggedItem, target: &Row, raw_zone: Zone) -> Zone {
    if raw_zone != Zone::Into {
        return raw_zone;
    }

    match dragged.kind {
        DragKind::Group => Zone::Before,
        DragKind::Tag => {
            if target.kind == RowKind::UngroupedTag && dragged.is_grouped_tag() {
                Zone::Before
            } else {
                raw_zone
            }
        }
    }
}
