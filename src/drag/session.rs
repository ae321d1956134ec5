use crate::config::DragConfig;
use crate::domain::{Board, CardId, Slot};
use crate::drag::hover::{HoverOutcome, HoverTracker};
use crate::drag::marker::create_marker;
use crate::drag::pointer::{HitTarget, Point, PointerEvent, Rect};
use crate::error::{BoardError, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

/// Whether a drag gesture is in flight
#[derive(Debug, Clone, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(session),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }
}

/// Render state of the card being dragged
#[derive(Debug, Clone, PartialEq)]
pub struct DragView {
    pub card: CardId,
    /// Top-left of the detached card, in client coordinates
    pub position: Point,
    pub width: f64,
    pub height: f64,
    /// Target carrying the hover highlight
    pub hovered: Option<HitTarget>,
}

/// Where a committed drag put its card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropOutcome {
    pub card: CardId,
    pub from: Slot,
    pub to: Slot,
    /// The marker was gone at drop time and the card went back where it started
    pub restored: bool,
}

/// One drag gesture, from pointer-down to pointer-up or cancel.
///
/// The dragged card keeps its place in its column while in flight; the marker
/// is the provisional drop slot. Committing swaps the two.
#[derive(Debug, Clone)]
pub struct DragSession {
    id: Uuid,
    card: CardId,
    origin: Slot,
    diff: Point,
    width: f64,
    height: f64,
    pointer: Point,
    position: Point,
    hovered: Option<HitTarget>,
    started_at: DateTime<Utc>,
    last_activity: DateTime<Utc>,
}

impl DragSession {
    /// Grabs `card` and drops a fresh marker right before it
    pub fn begin(
        board: &mut Board,
        card: &CardId,
        event: &PointerEvent,
        rect: Rect,
    ) -> Result<Self> {
        let origin = board
            .find_card(card)
            .ok_or_else(|| BoardError::CardNotFound(card.clone()))?;
        board.place_marker(origin, create_marker())?;

        let session = Self {
            id: Uuid::new_v4(),
            card: card.clone(),
            origin,
            diff: event.client - rect.origin(),
            width: rect.width,
            height: rect.height,
            pointer: event.client,
            position: rect.origin(),
            hovered: None,
            started_at: event.at,
            last_activity: event.at,
        };

        debug!(
            session = %session.id,
            card = %card,
            column = %origin.column,
            index = origin.index,
            "Drag started"
        );
        Ok(session)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn card(&self) -> &CardId {
        &self.card
    }

    pub fn origin(&self) -> Slot {
        self.origin
    }

    /// Pointer offset from the card's top-left at grab time
    pub fn diff(&self) -> Point {
        self.diff
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn last_activity(&self) -> DateTime<Utc> {
        self.last_activity
    }

    pub fn view(&self) -> DragView {
        DragView {
            card: self.card.clone(),
            position: self.position,
            width: self.width,
            height: self.height,
            hovered: self.hovered.clone(),
        }
    }

    /// Follows the pointer and lets the tracker move the marker
    pub fn track(
        &mut self,
        board: &mut Board,
        event: &PointerEvent,
        tracker: &HoverTracker,
        config: &DragConfig,
    ) -> HoverOutcome {
        self.pointer = event.client;
        self.position = event.client - self.diff + config.visual_offset();
        self.hovered = Some(event.target.clone());
        self.last_activity = event.at;

        tracker.on_hover(board, &event.target)
    }

    /// True once the session has been quiet for longer than `timeout`
    pub fn is_idle(&self, now: DateTime<Utc>, timeout: chrono::Duration) -> bool {
        now - self.last_activity > timeout
    }

    /// Puts the card where the marker is and ends the session
    pub fn commit(self, board: &mut Board) -> Result<DropOutcome> {
        let (from, card) = match board.remove_card(&self.card) {
            Ok(found) => found,
            Err(e) => {
                board.take_marker();
                warn!(session = %self.id, card = %self.card, "Dragged card vanished before drop");
                return Err(e);
            }
        };

        let (to, restored) = match board.replace_marker(card) {
            Ok(slot) => (slot, false),
            Err(card) => {
                warn!(
                    session = %self.id,
                    card = %self.card,
                    "No insertion marker at drop, returning card"
                );
                (board.insert_card(from, card)?, true)
            }
        };

        debug!(
            session = %self.id,
            card = %self.card,
            column = %to.column,
            index = to.index,
            "Drag committed"
        );

        Ok(DropOutcome {
            card: self.card,
            from: self.origin,
            to,
            restored,
        })
    }

    /// Removes the marker and leaves the card where it started
    pub fn cancel(self, board: &mut Board) -> Option<Slot> {
        board.take_marker();
        debug!(session = %self.id, card = %self.card, "Drag cancelled");
        board.find_card(&self.card)
    }
}
