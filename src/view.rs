//! Render model: the board projected into what a host needs to draw it.

use crate::controller::TaskBoard;
use crate::domain::{CardId, ColumnId, Item};
use crate::drag::{HitTarget, Marker};
use crate::storage::BoardStore;

pub const CARD_CLASS: &str = "items-item";
pub const DRAGGED_CLASS: &str = "dragged";
pub const HOVER_CLASS: &str = "hover";

/// One column as drawn: name label, item list, add button or open form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageLayout {
    pub column: ColumnId,
    pub name: String,
    pub items: Vec<ItemView>,
    pub add_button_hidden: bool,
    /// Pending text of the add-card form, when it is open under this column
    pub form_input: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemView {
    Card {
        id: CardId,
        text: String,
        dragged: bool,
        hovered: bool,
    },
    Marker,
}

impl ItemView {
    pub fn classes(&self) -> Vec<&'static str> {
        match self {
            ItemView::Card {
                dragged, hovered, ..
            } => {
                let mut classes = vec![CARD_CLASS];
                if *dragged {
                    classes.push(DRAGGED_CLASS);
                }
                if *hovered {
                    classes.push(HOVER_CLASS);
                }
                classes
            }
            ItemView::Marker => vec![Marker::CLASS],
        }
    }
}

impl<S: BoardStore> TaskBoard<S> {
    /// Projects the board, drag state and form into per-column layouts
    pub fn layout(&self) -> Vec<StageLayout> {
        let view = self.drag_view();
        let dragged = view.as_ref().map(|view| &view.card);
        let hovered = view.as_ref().and_then(|view| match &view.hovered {
            Some(HitTarget::Card(id)) => Some(id),
            _ => None,
        });

        self.board()
            .columns()
            .iter()
            .map(|col| {
                let form_open = self.form().is_open_for(col.id());
                StageLayout {
                    column: col.id(),
                    name: col.name().to_string(),
                    items: col
                        .items()
                        .iter()
                        .map(|item| match item {
                            Item::Card(card) => ItemView::Card {
                                id: card.id.clone(),
                                text: card.text.clone(),
                                dragged: dragged == Some(&card.id),
                                hovered: hovered == Some(&card.id),
                            },
                            Item::Marker(_) => ItemView::Marker,
                        })
                        .collect(),
                    add_button_hidden: form_open,
                    form_input: form_open
                        .then(|| self.form().input().unwrap_or_default().to_string()),
                }
            })
            .collect()
    }
}
