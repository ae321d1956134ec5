pub mod board;
pub mod card;
pub mod snapshot;

pub use board::{Board, BoardConfig, Column, ColumnId, Item, Slot};
pub use card::{validate_card_text, Card, CardId};
pub use snapshot::{RestoreReport, Snapshot, StageSnapshot};
