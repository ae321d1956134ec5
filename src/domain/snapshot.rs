use crate::domain::board::{Board, Slot};
use crate::domain::card::{validate_card_text, Card};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Persisted form of a board: one entry per column, cards in order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub stages: Vec<StageSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageSnapshot {
    pub name: String,
    pub cards: Vec<String>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Card texts stored for a stage, if present
    pub fn stage(&self, name: &str) -> Option<&[String]> {
        self.stages
            .iter()
            .find(|stage| stage.name == name)
            .map(|stage| stage.cards.as_slice())
    }
}

/// What happened while restoring a snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreReport {
    /// Cards placed on the board
    pub restored_cards: usize,
    /// Stage names with no column of that exact name; their cards were dropped
    pub unmatched_stages: Vec<String>,
    /// Card texts rejected by validation
    pub rejected_cards: Vec<String>,
    /// Set when the snapshot could not be read at all and the board started empty
    pub skipped: bool,
}

impl RestoreReport {
    pub fn skipped() -> Self {
        Self {
            skipped: true,
            ..Self::default()
        }
    }

    pub fn is_clean(&self) -> bool {
        !self.skipped && self.unmatched_stages.is_empty() && self.rejected_cards.is_empty()
    }
}

impl Board {
    /// Serializable view of the board. The insertion marker never appears in it.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            stages: self
                .columns()
                .iter()
                .map(|col| StageSnapshot {
                    name: col.name().to_string(),
                    cards: col.cards().map(|card| card.text.clone()).collect(),
                })
                .collect(),
        }
    }

    /// Appends the snapshot's cards to the columns whose names match exactly.
    pub fn restore(&mut self, snapshot: &Snapshot) -> RestoreReport {
        let mut report = RestoreReport::default();
        let max_len = self.config().max_card_len;

        for stage in &snapshot.stages {
            let Some(column) = self.column_by_name(&stage.name).map(|col| col.id()) else {
                warn!(
                    stage = %stage.name,
                    dropped = stage.cards.len(),
                    "Snapshot stage has no matching column"
                );
                report.unmatched_stages.push(stage.name.clone());
                continue;
            };

            for text in &stage.cards {
                let text = match validate_card_text(text, max_len) {
                    Ok(text) => text.to_string(),
                    Err(e) => {
                        warn!(stage = %stage.name, error = %e, "Skipping invalid card in snapshot");
                        report.rejected_cards.push(text.clone());
                        continue;
                    }
                };

                let id = self.next_card_id();
                let end = self.column(column).map_or(0, |col| col.items().len());
                if self.insert_card(Slot::new(column, end), Card::new(id, text)).is_ok() {
                    report.restored_cards += 1;
                }
            }
        }

        report
    }
}
