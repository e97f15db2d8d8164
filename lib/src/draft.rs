//! Transient input buffers backing the add dialog and the inline editor.

use crate::item::{ItemId, ShoppingItem, Unit};

/// Input state of the add item dialog
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AddDraft {
    /// Whether the dialog is open
    pub visible: bool,
    /// Pending item name
    pub name: String,
    /// Pending quantity text, parsed on confirm
    pub quantity: String,
    /// Chosen unit, [`Unit::Placeholder`] until the user picks one
    pub unit: Unit,
    /// Whether the unit menu is expanded
    pub unit_menu_expanded: bool,
    /// Index into [`Unit::choices`] highlighted in the expanded menu
    pub menu_cursor: usize,
}

impl AddDraft {
    /// Returns a visible, empty draft
    pub fn opened() -> Self {
        Self {
            visible: true,
            ..Self::default()
        }
    }

    /// Moves the menu cursor by `delta`, clamped to the available choices
    pub fn move_cursor(&mut self, delta: isize) {
        let last = Unit::choices().len().saturating_sub(1);
        let next = self.menu_cursor.saturating_add_signed(delta);
        self.menu_cursor = next.min(last);
    }

    /// Returns the unit currently highlighted in the menu
    pub fn unit_at_cursor(&self) -> Option<Unit> {
        Unit::choices().get(self.menu_cursor).copied()
    }
}

/// Input state of the inline editor for a single item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    /// Item being edited
    pub id: ItemId,
    /// Edited name
    pub name: String,
    /// Edited quantity text
    pub quantity: String,
}

impl From<&ShoppingItem> for EditDraft {
    fn from(item: &ShoppingItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "./draft_tests.rs"]
mod tests;
