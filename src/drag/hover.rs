//! Marker placement while the pointer moves over the board.

use crate::domain::{Board, Slot};
use crate::drag::marker::Marker;
use crate::drag::pointer::HitTarget;
use tracing::trace;

/// Result of one hover computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverOutcome {
    /// The target does not move the marker
    Ignored,
    /// The marker now sits at this slot
    Placed(Slot),
}

/// Keeps the single insertion marker under the pointer
#[derive(Debug, Clone, Copy, Default)]
pub struct HoverTracker;

impl HoverTracker {
    pub fn new() -> Self {
        HoverTracker
    }

    /// Relocates the marker for the element currently under the pointer.
    ///
    /// Hovering a card puts the marker before it, except when the card is the
    /// last child of its column list, where the marker goes after it. Hovering
    /// the list container of an empty column moves the marker into it.
    /// Everything else leaves the marker where it was.
    pub fn on_hover(&self, board: &mut Board, target: &HitTarget) -> HoverOutcome {
        let outcome = match target {
            HitTarget::Card(id) => {
                if board.find_card(id).is_none() {
                    return HoverOutcome::Ignored;
                }

                if board.marker_slot().is_none() {
                    let slot = board.find_card(id);
                    place(board, slot)
                } else {
                    // Decided with the marker still in the list, so a marker
                    // trailing the target keeps it from counting as last
                    let is_last = board.find_card(id).is_some_and(|slot| {
                        board
                            .column(slot.column)
                            .is_some_and(|col| slot.index + 1 == col.items().len())
                    });
                    board.take_marker();
                    let slot = board.find_card(id).map(|slot| {
                        if is_last {
                            Slot::new(slot.column, slot.index + 1)
                        } else {
                            slot
                        }
                    });
                    place(board, slot)
                }
            }
            HitTarget::ColumnList(column) => match board.column(*column) {
                Some(col) if col.is_empty() => place(board, Some(Slot::new(*column, 0))),
                _ => HoverOutcome::Ignored,
            },
            HitTarget::Marker | HitTarget::DeleteControl(_) | HitTarget::Outside => {
                HoverOutcome::Ignored
            }
        };

        trace!(hit = ?target, ?outcome, "Hover");
        outcome
    }
}

fn place(board: &mut Board, slot: Option<Slot>) -> HoverOutcome {
    match slot.map(|slot| board.place_marker(slot, Marker::new())) {
        Some(Ok(slot)) => HoverOutcome::Placed(slot),
        _ => HoverOutcome::Ignored,
    }
}
