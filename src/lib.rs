//! # Stageboard Core
//!
//! Board model and drag-and-drop reordering engine for Stageboard kanban boards.
//!
//! The crate is headless: a host translates its pointer events into
//! [`PointerEvent`]s, feeds them to a [`TaskBoard`], and renders from
//! [`TaskBoard::layout`]. Every structural change is flushed through a
//! [`BoardStore`] before the call that made it returns.

pub mod config;
pub mod controller;
pub mod domain;
pub mod drag;
pub mod error;
pub mod forms;
pub mod storage;
pub mod view;

// Re-export commonly used types
pub use config::{Config, DragConfig};
pub use controller::{PointerDownOutcome, TaskBoard};
pub use domain::{
    board::{Board, BoardConfig, Column, ColumnId, Item, Slot},
    card::{Card, CardId},
    snapshot::{RestoreReport, Snapshot, StageSnapshot},
};
pub use drag::{DragView, DropOutcome, HitTarget, HoverOutcome, Point, PointerEvent, Rect};
pub use error::{BoardError, Result};
pub use storage::{BoardStore, MemoryStore};
#[cfg(feature = "file-storage")]
pub use storage::FileStore;
pub use view::{ItemView, StageLayout};
