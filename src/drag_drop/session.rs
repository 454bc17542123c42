use egui::Pos2;

use crate::model::DraggedItem;

use super::resolver::DropDecision;

/// State scoped to one drag gesture: created at drag start, dropped at drag
/// end. Holds the immutable [`DraggedItem`] snapshot, the latest pointer
/// position, and the currently held drop decision.
///
/// Pointer events arrive at a much higher rate than collision passes, so the
/// pointer is cached here by [`CollisionResolver::update_pointer`] and read
/// by the next `resolve` call on the host library's own schedule.
///
/// [`CollisionResolver::update_pointer`]: super::CollisionResolver::update_pointer
#[derive(Clone, Debug)]
pub struct DragSession {
    dragged: DraggedItem,
    pointer: Pos2,
    decision: Option<DropDecision>,
}

impl DragSession {
    pub(super) fn new(dragged: DraggedItem, pointer: Pos2) -> Self {
        log::debug!(
            "drag session start: id={} kind={:?} parent={:?}",
            dragged.id,
            dragged.kind,
            dragged.parent_id
        );
        Self {
            dragged,
            pointer,
            decision: None,
        }
    }

    pub fn dragged(&self) -> &DraggedItem {
        &self.dragged
    }

    /// Latest pointer position fed into this session.
    pub fn pointer(&self) -> Pos2 {
        self.pointer
    }

    pub(super) fn update_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Pos2::new(x, y);
    }

    /// The currently held decision, for visual feedback rendering.
    pub fn decision(&self) -> Option<&DropDecision> {
        self.decision.as_ref()
    }

    pub(super) fn set_decision(&mut self, decision: Option<DropDecision>) {
        if self.decision != decision {
            log::trace!("drop decision changed: {decision:?}");
            self.decision = decision;
        }
    }

    pub(super) fn take_decision(&mut self) -> Option<DropDecision> {
        self.decision.take()
    }
}
