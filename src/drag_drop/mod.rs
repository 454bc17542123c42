//! The drag-and-drop collision detection and zone-resolution engine.
//!
//! Flow per pointer update during an active drag: the host's nearest-neighbor
//! primitive ([`NearestRow`]) narrows candidates to the single closest row,
//! [`zone_for`] turns that row's geometry plus the pointer position into a
//! zone, [`validate_zone`] downgrades structurally illegal zones, and the
//! [`CollisionResolver`] packages and retains the final [`DropDecision`] for
//! feedback rendering and the eventual drag-end handoff.

mod geometry;
mod hierarchy;
mod integrity;
mod resolver;
mod session;
mod zone;


pub use geometry::{NearestRow, RowGeometry, row_lookup_key};
pub use hierarchy::validate_zone;
pub use integrity::{RowIntegrityError, check_rows};
pub use resolver::{CollisionResolver, DropDecision};
pub use session::DragSession;
pub use zone::{Zone, zone_for};
