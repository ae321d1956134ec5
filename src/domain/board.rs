use crate::domain::card::{validate_card_text, Card, CardId, DEFAULT_MAX_CARD_LEN};
use crate::drag::Marker;
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a column on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnId(usize);

impl ColumnId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "column #{}", self.0)
    }
}

/// A slot between siblings in a column's item list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub column: ColumnId,
    pub index: usize,
}

impl Slot {
    pub fn new(column: ColumnId, index: usize) -> Self {
        Self { column, index }
    }
}

/// An entry in a column's item list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Card(Card),
    Marker(Marker),
}

impl Item {
    pub fn as_card(&self) -> Option<&Card> {
        match self {
            Item::Card(card) => Some(card),
            Item::Marker(_) => None,
        }
    }

    pub fn is_marker(&self) -> bool {
        matches!(self, Item::Marker(_))
    }
}

/// A named stage holding an ordered list of cards
#[derive(Debug, Clone)]
pub struct Column {
    id: ColumnId,
    name: String,
    items: Vec<Item>,
}

impl Column {
    fn new(id: ColumnId, name: String) -> Self {
        Self {
            id,
            name,
            items: Vec::new(),
        }
    }

    pub fn id(&self) -> ColumnId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All items in order, including the insertion marker if it is here
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Cards in order, skipping the marker
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.items.iter().filter_map(Item::as_card)
    }

    pub fn card_texts(&self) -> Vec<&str> {
        self.cards().map(|card| card.text.as_str()).collect()
    }

    pub fn card_count(&self) -> usize {
        self.cards().count()
    }

    /// True when the item list holds nothing at all, marker included
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item index of a card
    pub fn position_of(&self, id: &CardId) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.as_card().is_some_and(|card| &card.id == id))
    }

    fn marker_index(&self) -> Option<usize> {
        self.items.iter().position(Item::is_marker)
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub name: String,
    pub columns: Vec<String>,
    pub max_card_len: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Task Board".to_string(),
            columns: vec![
                "To Do".to_string(),
                "In Progress".to_string(),
                "Done".to_string(),
            ],
            max_card_len: DEFAULT_MAX_CARD_LEN,
        }
    }
}

/// Kanban board state
#[derive(Debug, Clone)]
pub struct Board {
    config: BoardConfig,
    columns: Vec<Column>,
    next_card_number: u32,
}

impl Board {
    /// Creates a board with one empty column per configured name
    pub fn new(config: BoardConfig) -> Self {
        let columns = config
            .columns
            .iter()
            .enumerate()
            .map(|(index, name)| Column::new(ColumnId::new(index), name.clone()))
            .collect();

        Self {
            config,
            columns,
            next_card_number: 1,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.get(id.index())
    }

    /// Looks a column up by its exact name
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|col| col.name == name)
    }

    fn column_mut(&mut self, id: ColumnId) -> Result<&mut Column> {
        self.columns
            .get_mut(id.index())
            .ok_or(BoardError::ColumnNotFound(id))
    }

    /// Generates the next card ID
    pub fn next_card_id(&mut self) -> CardId {
        let id = CardId::new(self.next_card_number);
        self.next_card_number += 1;
        id
    }

    /// Validates `text` and appends a new card at the end of a column
    pub fn add_card(&mut self, column: ColumnId, text: &str) -> Result<CardId> {
        let text = validate_card_text(text, self.config.max_card_len)?.to_string();
        // Resolve the column before spending an id on it
        self.column_mut(column)?;

        let id = self.next_card_id();
        self.column_mut(column)?
            .items
            .push(Item::Card(Card::new(id.clone(), text)));
        Ok(id)
    }

    /// Finds the slot a card occupies
    pub fn find_card(&self, id: &CardId) -> Option<Slot> {
        self.columns
            .iter()
            .find_map(|col| col.position_of(id).map(|index| Slot::new(col.id, index)))
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        let slot = self.find_card(id)?;
        self.columns[slot.column.index()].items[slot.index].as_card()
    }

    /// Removes a card, returning it together with the slot it occupied
    pub fn remove_card(&mut self, id: &CardId) -> Result<(Slot, Card)> {
        let slot = self
            .find_card(id)
            .ok_or_else(|| BoardError::CardNotFound(id.clone()))?;

        match self.columns[slot.column.index()].items.remove(slot.index) {
            Item::Card(card) => Ok((slot, card)),
            Item::Marker(_) => unreachable!("find_card only returns card slots"),
        }
    }

    /// Inserts a card at a slot, clamping the index to the column length
    pub fn insert_card(&mut self, slot: Slot, card: Card) -> Result<Slot> {
        self.insert_item(slot, Item::Card(card))
    }

    fn insert_item(&mut self, slot: Slot, item: Item) -> Result<Slot> {
        let column = self.column_mut(slot.column)?;
        let index = slot.index.min(column.items.len());
        column.items.insert(index, item);
        Ok(Slot::new(slot.column, index))
    }

    /// Where the insertion marker currently sits
    pub fn marker_slot(&self) -> Option<Slot> {
        self.columns
            .iter()
            .find_map(|col| col.marker_index().map(|index| Slot::new(col.id, index)))
    }

    /// Number of insertion markers on the board
    pub fn marker_count(&self) -> usize {
        self.columns
            .iter()
            .flat_map(|col| col.items.iter())
            .filter(|item| item.is_marker())
            .count()
    }

    /// Places a marker at a slot. Any marker already on the board is removed first.
    pub fn place_marker(&mut self, slot: Slot, marker: Marker) -> Result<Slot> {
        // Validate before touching the existing marker
        self.column_mut(slot.column)?;
        self.take_marker();
        self.insert_item(slot, Item::Marker(marker))
    }

    /// Detaches the marker, returning the slot it occupied
    pub fn take_marker(&mut self) -> Option<Slot> {
        let slot = self.marker_slot()?;
        self.columns[slot.column.index()].items.remove(slot.index);
        Some(slot)
    }

    /// Swaps the marker for `card`. Hands the card back if there is no marker.
    pub fn replace_marker(&mut self, card: Card) -> std::result::Result<Slot, Card> {
        match self.marker_slot() {
            Some(slot) => {
                self.columns[slot.column.index()].items[slot.index] = Item::Card(card);
                Ok(slot)
            }
            None => Err(card),
        }
    }

    /// Empties every column. Column identities stay.
    pub fn clear(&mut self) {
        for column in &mut self.columns {
            column.items.clear();
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
