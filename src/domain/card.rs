use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::BoardError;

/// Maximum number of characters a card label may hold
pub const DEFAULT_MAX_CARD_LEN: usize = 40;

/// Identifier for a card on a board (e.g., CRD1, CRD2, CRD100)
///
/// Ids are allocated from the board's counter when a card is created. They are
/// not part of the persisted snapshot, so a reload hands out fresh ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(String);

impl CardId {
    const PREFIX: &'static str = "CRD";

    /// Creates a new CardId from a counter
    pub fn new(counter: u32) -> Self {
        Self(format!("{}{}", Self::PREFIX, counter))
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CardId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_uppercase();
        let prefix = CardId::PREFIX;

        match normalized.strip_prefix(prefix) {
            Some(rest) if !rest.is_empty() && rest.parse::<u32>().is_ok() => Ok(Self(normalized)),
            _ => Err(BoardError::InvalidCardId(s.to_string())),
        }
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single labeled unit of work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub text: String,
}

impl Card {
    /// Creates a card with already validated text
    pub fn new(id: CardId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// Validates a card label and returns it trimmed.
///
/// Whitespace-only input counts as empty. Length is measured in characters
/// after trimming.
pub fn validate_card_text(text: &str, max_len: usize) -> Result<&str, BoardError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(BoardError::EmptyCardText);
    }

    let len = trimmed.chars().count();
    if len > max_len {
        return Err(BoardError::CardTextTooLong { len, max: max_len });
    }

    Ok(trimmed)
}
