use crate::domain::ColumnId;

/// The add-card form. At most one is open on the board at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddCardForm {
    open: Option<OpenForm>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenForm {
    column: ColumnId,
    input: String,
}

impl AddCardForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the form under `column`, closing any other open form
    pub fn open(&mut self, column: ColumnId) {
        self.open = Some(OpenForm {
            column,
            input: String::new(),
        });
    }

    pub fn active_column(&self) -> Option<ColumnId> {
        self.open.as_ref().map(|form| form.column)
    }

    pub fn is_open_for(&self, column: ColumnId) -> bool {
        self.active_column() == Some(column)
    }

    pub fn input(&self) -> Option<&str> {
        self.open.as_ref().map(|form| form.input.as_str())
    }

    /// Mirrors the text field. Input is cut at `max_len` characters, like the
    /// field's own length limit. Returns false when no form is open.
    pub fn set_input(&mut self, text: &str, max_len: usize) -> bool {
        match self.open.as_mut() {
            Some(form) => {
                form.input = text.chars().take(max_len).collect();
                true
            }
            None => false,
        }
    }

    /// Closes the form. Safe to call when nothing is open.
    pub fn discard(&mut self) {
        self.open = None;
    }
}
