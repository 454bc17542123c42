use egui::Pos2;

use crate::model::{DragKind, DraggedItem, Row, RowKind};

use super::geometry::{NearestRow, RowGeometry, row_lookup_key};
use super::hierarchy::validate_zone;
use super::session::DragSession;
use super::zone::{Zone, zone_for};

/// The resolved, authoritative answer to "what structural action would
/// committing the drag right now perform".
///
/// Together with the [`DraggedItem`] snapshot this is the handoff payload the
/// host passes to its mutation layer on drag end; this crate never performs
/// the mutation itself.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropDecision {
    pub target_id: String,
    pub zone: Zone,
    pub target_kind: RowKind,
}

/// Orchestrates collision passes for one sidebar list.
///
/// Owns the current flat row list (rebuilt by the host on structural change)
/// and at most one active [`DragSession`]. Everything on the pointer-move
/// path is fail-soft: a stale candidate, a missing rect, or an illegal
/// target yields "no decision this frame" and self-corrects on the next
/// pointer move — it never fails the gesture.
#[derive(Debug, Default)]
pub struct CollisionResolver {
    rows: Vec<Row>,
    row_index: ahash::HashMap<String, usize>,
    session: Option<DragSession>,
}

impl CollisionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the flat row list. Call whenever the underlying group/tag
    /// collections change, not on pointer moves. A drag that is already
    /// running keeps resolving against whatever list is current; candidates
    /// that went stale simply stop producing decisions.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        #[cfg(debug_assertions)]
        if let Err(err) = super::integrity::check_rows(&rows) {
            log::warn!("row list failed integrity check: {err}");
        }

        self.row_index = rows
            .iter()
            .enumerate()
            .map(|(ix, row)| (row.id.clone(), ix))
            .collect();
        self.rows = rows;
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_by_id(&self, id: &str) -> Option<&Row> {
        self.row_index.get(id).and_then(|&ix| self.rows.get(ix))
    }

    /// Start a drag gesture. Any previous session is discarded.
    pub fn begin_drag(&mut self, dragged: DraggedItem, pointer: Pos2) {
        self.session = Some(DragSession::new(dragged, pointer));
    }

    /// Feed the latest pointer coordinates for the next collision pass.
    /// No-op when no drag is active.
    pub fn update_pointer(&mut self, x: f32, y: f32) {
        if let Some(session) = &mut self.session {
            session.update_pointer(x, y);
        }
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// The currently held decision, read by rendering code to draw the
    /// insertion line (`Before`/`After`) or nesting highlight (`Into`).
    pub fn decision(&self) -> Option<&DropDecision> {
        self.session.as_ref().and_then(DragSession::decision)
    }

    /// One collision pass: refine the nearest candidate supplied by the
    /// host's collision primitive into a zone-qualified drop decision.
    ///
    /// Every pass overwrites the held decision, so the resolver is always in
    /// one of exactly two states: *no active decision* or *decision held*.
    pub fn resolve(
        &mut self,
        nearest: &dyn NearestRow,
        geometry: &dyn RowGeometry,
    ) -> Option<DropDecision> {
        let session = self.session.as_mut()?;
        let decision = decide_drop(
            session.dragged(),
            session.pointer(),
            &self.rows,
            &self.row_index,
            nearest,
            geometry,
        );
        session.set_decision(decision.clone());
        decision
    }

    /// Drop committed: hand the final held decision to the caller and
    /// discard the session.
    pub fn end_drag(&mut self) -> Option<DropDecision> {
        let mut session = self.session.take()?;
        let decision = session.take_decision();
        log::debug!(
            "drag session end: id={} decision={decision:?}",
            session.dragged().id
        );
        decision
    }

    /// Drag cancelled (Escape, or pointer released outside any droppable
    /// region): discard the session and its held decision.
    pub fn cancel_drag(&mut self) {
        if let Some(session) = self.session.take() {
            log::debug!("drag session cancelled: id={}", session.dragged().id);
        }
    }
}

fn decide_drop(
    dragged: &DraggedItem,
    pointer: Pos2,
    rows: &[Row],
    row_index: &ahash::HashMap<String, usize>,
    nearest: &dyn NearestRow,
    geometry: &dyn RowGeometry,
) -> Option<DropDecision> {
    let candidate_id = nearest.nearest_row(pointer, rows)?;
    if candidate_id == dragged.id {
        return None;
    }

    // Stale candidate (structural change since the collision pass started).
    let target = row_index.get(&candidate_id).and_then(|&ix| rows.get(ix))?;

    // A dragged group only reorders relative to root-level rows; child rows
    // of other groups are not meaningful targets for it.
    if dragged.kind != DragKind::Tag && target.parent_id.is_some() {
        return None;
    }

    let rect = geometry.row_rect(&row_lookup_key(target.kind, &target.id))?;
    let raw_zone = zone_for(pointer.y, rect, target.kind);
    let zone = validate_zone(dragged, target, raw_zone);

    Some(DropDecision {
        target_id: target.id.clone(),
        zone,
        target_kind: target.kind,
    })
}
