//! Drop-zone collision detection for drag-and-drop tag sidebars.
//!
//! A sidebar organizes tags into a two-level hierarchy: optional groups
//! containing child tags, plus ungrouped tags at the root. This crate decides,
//! on every pointer update during a drag, which row the dragged item is
//! interacting with and which structural action that implies (insert relative
//! to the row, or nest into it), while enforcing that the hierarchy never
//! gets deeper than two levels.
//!
//! It deliberately owns no rendering and no persistence: the host supplies
//! pointer events, a nearest-neighbor collision primitive ([`NearestRow`]),
//! and per-row geometry ([`RowGeometry`]); this crate answers with a
//! [`DropDecision`] (or none) each frame and hands the final one back on
//! drag end.

#![forbid(unsafe_code)]

pub mod drag_drop;
pub mod model;
pub mod sidebar_builder;

#[cfg(test)]
mod model_tests;

pub use drag_drop::{
    CollisionResolver, DragSession, DropDecision, NearestRow, RowGeometry, RowIntegrityError,
    Zone, check_rows, row_lookup_key, validate_zone, zone_for,
};
pub use model::{DragKind, DraggedItem, Row, RowKind, Tag, TagGroup, project_rows};
pub use sidebar_builder::SidebarBuilder;
