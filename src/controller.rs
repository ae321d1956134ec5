//! The board controller: single owner of board, drag state, form and store.

use crate::config::{Config, DragConfig};
use crate::domain::{validate_card_text, Board, Card, CardId, ColumnId, RestoreReport, Slot};
use crate::drag::{
    DragSession, DragState, DragView, DropOutcome, HitTarget, HoverOutcome, HoverTracker,
    PointerEvent, Rect,
};
use crate::error::{BoardError, Result};
use crate::forms::AddCardForm;
use crate::storage::BoardStore;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

/// What a pointer-down did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerDownOutcome {
    DragStarted { card: CardId, origin: Slot },
    CardDeleted(Card),
    Ignored,
}

/// A kanban board wired to a store.
///
/// Every host event goes through one of these methods. Structural changes
/// (drop, add, delete) are flushed to the store before the call returns.
pub struct TaskBoard<S: BoardStore> {
    board: Board,
    drag: DragState,
    form: AddCardForm,
    tracker: HoverTracker,
    drag_config: DragConfig,
    store: S,
}

impl<S: BoardStore> TaskBoard<S> {
    /// Creates an empty board from `config`, rejecting invalid configs
    pub fn new(config: Config, store: S) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            board: Board::new(config.board),
            drag: DragState::Idle,
            form: AddCardForm::new(),
            tracker: HoverTracker::new(),
            drag_config: config.drag,
            store,
        })
    }

    /// Creates a board, prepares the store and fills the board from it.
    ///
    /// A store that fails to initialize or load leaves the board empty; only an
    /// invalid config is an error.
    pub async fn open(config: Config, store: S) -> Result<(Self, RestoreReport)> {
        let mut task_board = Self::new(config, store)?;
        if let Err(e) = task_board.store.initialize().await {
            warn!(error = %e, "Store initialization failed");
        }
        let report = task_board.load().await;
        Ok((task_board, report))
    }

    /// Replaces the board contents with the stored snapshot.
    ///
    /// Unreadable or missing snapshots leave the board empty.
    pub async fn load(&mut self) -> RestoreReport {
        self.drag = DragState::Idle;
        self.board.clear();

        match self.store.load_snapshot().await {
            Ok(Some(snapshot)) => {
                let report = self.board.restore(&snapshot);
                info!(
                    cards = report.restored_cards,
                    unmatched = report.unmatched_stages.len(),
                    "Board loaded"
                );
                report
            }
            Ok(None) => {
                debug!("No stored board, starting empty");
                RestoreReport::default()
            }
            Err(e) => {
                warn!(error = %e, "Stored board unreadable, starting empty");
                RestoreReport::skipped()
            }
        }
    }

    /// Writes the whole board to the store
    pub async fn flush(&self) -> Result<()> {
        self.store.save_snapshot(&self.board.snapshot()).await
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn drag_view(&self) -> Option<DragView> {
        self.drag.session().map(DragSession::view)
    }

    pub fn form(&self) -> &AddCardForm {
        &self.form
    }

    // --- Pointer input ---

    /// Starts a drag on a card, or deletes a card when its delete control is pressed.
    ///
    /// `card_rect` is the bounding box of the pressed card; it is ignored for
    /// other targets.
    pub async fn on_pointer_down(
        &mut self,
        event: PointerEvent,
        card_rect: Rect,
    ) -> Result<PointerDownOutcome> {
        self.expire_idle_session(event.at);

        if self.is_dragging() {
            return Ok(PointerDownOutcome::Ignored);
        }

        match &event.target {
            HitTarget::Card(id) => {
                let session = DragSession::begin(&mut self.board, id, &event, card_rect)?;
                let outcome = PointerDownOutcome::DragStarted {
                    card: id.clone(),
                    origin: session.origin(),
                };
                self.drag = DragState::Dragging(session);
                Ok(outcome)
            }
            HitTarget::DeleteControl(id) => {
                let card = self.delete_card(id).await?;
                Ok(PointerDownOutcome::CardDeleted(card))
            }
            HitTarget::Marker | HitTarget::ColumnList(_) | HitTarget::Outside => {
                Ok(PointerDownOutcome::Ignored)
            }
        }
    }

    /// Moves the dragged card with the pointer and updates the marker
    pub fn on_pointer_move(&mut self, event: PointerEvent) -> HoverOutcome {
        self.expire_idle_session(event.at);

        match &mut self.drag {
            DragState::Idle => HoverOutcome::Ignored,
            DragState::Dragging(session) => {
                session.track(&mut self.board, &event, &self.tracker, &self.drag_config)
            }
        }
    }

    /// Ends the drag, committing the card at the marker, wherever the pointer is.
    ///
    /// The session is torn down before the flush, so a storage failure never
    /// leaves a drag half-finished.
    pub async fn on_pointer_up(&mut self, event: PointerEvent) -> Result<Option<DropOutcome>> {
        let DragState::Dragging(session) = std::mem::take(&mut self.drag) else {
            return Ok(None);
        };

        debug!(hit = ?event.target, "Pointer released");
        let outcome = session.commit(&mut self.board)?;
        info!(
            card = %outcome.card,
            from = %outcome.from.column,
            to = %outcome.to.column,
            index = outcome.to.index,
            "Card dropped"
        );

        self.flush().await?;
        Ok(Some(outcome))
    }

    /// Abandons the drag (Escape, focus loss). The card stays where it started.
    pub fn cancel_drag(&mut self) -> Option<Slot> {
        match std::mem::take(&mut self.drag) {
            DragState::Idle => None,
            DragState::Dragging(session) => session.cancel(&mut self.board),
        }
    }

    /// Cancels a drag that has been quiet longer than the configured timeout.
    /// Returns true when a session was cancelled.
    pub fn expire_idle_session(&mut self, now: DateTime<Utc>) -> bool {
        let Some(timeout) = self.drag_config.idle_timeout() else {
            return false;
        };

        match self.drag.session() {
            Some(session) if session.is_idle(now, timeout) => {
                warn!(session = %session.id(), "Drag idle too long, cancelling");
                self.cancel_drag();
                true
            }
            _ => false,
        }
    }

    // --- Card operations ---

    /// Appends a card to a column.
    ///
    /// Empty or whitespace-only text is a silent no-op (`Ok(None)`) and leaves
    /// the form open. On success the column's form closes and the board is flushed.
    pub async fn add_card(&mut self, column: ColumnId, text: &str) -> Result<Option<CardId>> {
        self.ensure_idle()?;

        match validate_card_text(text, self.board.config().max_card_len) {
            Err(BoardError::EmptyCardText) => return Ok(None),
            Err(e) => return Err(e),
            Ok(_) => {}
        }

        let id = self.board.add_card(column, text)?;
        if self.form.is_open_for(column) {
            self.form.discard();
        }
        info!(card = %id, column = %column, "Card added");

        self.flush().await?;
        Ok(Some(id))
    }

    /// Removes a card and flushes. No confirmation.
    pub async fn delete_card(&mut self, id: &CardId) -> Result<Card> {
        self.ensure_idle()?;

        let (slot, card) = self.board.remove_card(id)?;
        info!(card = %id, column = %slot.column, "Card deleted");

        self.flush().await?;
        Ok(card)
    }

    // --- Add-card form ---

    pub fn open_add_form(&mut self, column: ColumnId) -> Result<()> {
        if self.board.column(column).is_none() {
            return Err(BoardError::ColumnNotFound(column));
        }
        self.form.open(column);
        Ok(())
    }

    /// Mirrors the form's text field. Returns false when no form is open.
    pub fn set_form_input(&mut self, text: &str) -> bool {
        self.form.set_input(text, self.board.config().max_card_len)
    }

    /// Submits the open form. `Ok(None)` when no form is open or its input is empty.
    pub async fn submit_add_form(&mut self) -> Result<Option<CardId>> {
        let Some(column) = self.form.active_column() else {
            return Ok(None);
        };
        let text = self.form.input().unwrap_or_default().to_string();
        self.add_card(column, &text).await
    }

    /// Closes the add-card form. A no-op when none is open.
    pub fn discard_add_form(&mut self) {
        self.form.discard();
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.is_dragging() {
            return Err(BoardError::DragInProgress);
        }
        Ok(())
    }
}
