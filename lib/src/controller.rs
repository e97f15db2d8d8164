//! Owner of the shopping list and all of its transient UI state.

use crate::{
    draft::{AddDraft, EditDraft},
    error::{Result, ShopListError},
    item::{ItemId, ShoppingItem, Unit, parse_quantity},
};

/// Holds the authoritative list of items plus the add dialog and inline
/// editor buffers
///
/// At most one item has `is_editing` set at any time. Ids are assigned from a
/// counter that never goes backwards, so an id is never reused after a
/// delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListController {
    items: Vec<ShoppingItem>,
    next_id: u32,
    draft: AddDraft,
    edit_draft: Option<EditDraft>,
}

impl Default for ListController {
    fn default() -> Self {
        Self::new()
    }
}

impl ListController {
    /// Returns an empty list
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            draft: AddDraft::default(),
            edit_draft: None,
        }
    }

    /// All items in insertion order
    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    /// Looks up an item by id
    pub fn get(&self, id: ItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Number of items in the list
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// State of the add dialog
    pub fn draft(&self) -> &AddDraft {
        &self.draft
    }

    /// Buffers of the inline editor, if an item is being edited
    pub fn edit_draft(&self) -> Option<&EditDraft> {
        self.edit_draft.as_ref()
    }

    /// The item currently in editing mode, if any
    pub fn editing_item(&self) -> Option<&ShoppingItem> {
        self.items.iter().find(|i| i.is_editing)
    }

    /// Validates and appends a new item
    ///
    /// Fails with [`ShopListError::InvalidAddInput`] when `name` is blank or
    /// `unit` is the placeholder, leaving the list untouched. On success the
    /// add dialog is reset and closed.
    pub fn add(
        &mut self,
        name: &str,
        quantity_text: &str,
        unit: Unit,
    ) -> Result<ItemId> {
        if name.trim().is_empty() || unit.is_placeholder() {
            log::warn!(
                "rejecting item: name={name:?} quantity={quantity_text:?} \
                 unit={unit}"
            );
            return Err(ShopListError::InvalidAddInput);
        }

        let id = ItemId(self.next_id);
        self.next_id += 1;

        let item = ShoppingItem::new(
            id,
            name.to_string(),
            parse_quantity(quantity_text),
            unit,
        );

        log::debug!("adding item: {item:?}");

        self.items.push(item);
        self.draft = AddDraft::default();

        Ok(id)
    }

    /// Puts the matching item into editing mode and takes every other item
    /// out of it
    pub fn begin_edit(&mut self, id: ItemId) {
        let Some(item) = self.get(id) else {
            log::debug!("begin edit ignored, no item with id {id}");
            return;
        };

        self.edit_draft = Some(EditDraft::from(item));

        for item in self.items.iter_mut() {
            item.is_editing = item.id == id;
        }
    }

    /// Ends editing for all items and overwrites the matching item's name and
    /// quantity. The unit is left untouched.
    pub fn commit_edit(&mut self, id: ItemId, name: &str, quantity: i32) {
        self.cancel_edit();

        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            log::debug!(
                "committing edit for {id}: name={name:?} quantity={quantity}"
            );
            item.name = name.to_string();
            item.quantity = quantity;
        }
    }

    /// Removes the matching item, preserving the order of the rest
    pub fn delete(&mut self, id: ItemId) {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);

        if self.items.len() != before {
            log::debug!("deleted item {id}");
        }

        if self.edit_draft.as_ref().is_some_and(|d| d.id == id) {
            self.edit_draft = None;
        }
    }

    /// Opens the add dialog with empty buffers
    pub fn open_add_dialog(&mut self) {
        self.draft = AddDraft::opened();
    }

    /// Discards the add dialog buffers and closes it
    pub fn cancel_add_dialog(&mut self) {
        self.draft = AddDraft::default();
    }

    /// Replaces the pending item name
    pub fn set_draft_name(&mut self, name: String) {
        self.draft.name = name;
    }

    /// Replaces the pending quantity text
    pub fn set_draft_quantity(&mut self, quantity: String) {
        self.draft.quantity = quantity;
    }

    /// Expands or collapses the unit menu
    pub fn toggle_unit_menu(&mut self) {
        self.draft.unit_menu_expanded = !self.draft.unit_menu_expanded;
    }

    /// Moves the highlighted entry of the unit menu
    pub fn move_unit_cursor(&mut self, delta: isize) {
        self.draft.move_cursor(delta);
    }

    /// Picks a unit and collapses the menu
    pub fn select_unit(&mut self, unit: Unit) {
        self.draft.unit = unit;
        self.draft.unit_menu_expanded = false;
        if let Some(idx) = Unit::choices().iter().position(|u| *u == unit) {
            self.draft.menu_cursor = idx;
        }
    }

    /// Picks the unit highlighted in the menu
    pub fn select_unit_at_cursor(&mut self) {
        if let Some(unit) = self.draft.unit_at_cursor() {
            self.select_unit(unit);
        }
    }

    /// Submits the add dialog buffers
    pub fn confirm_add(&mut self) -> Result<ItemId> {
        let AddDraft {
            name,
            quantity,
            unit,
            ..
        } = self.draft.clone();
        self.add(&name, &quantity, unit)
    }

    /// Replaces the name buffer of the inline editor
    pub fn set_edit_name(&mut self, name: String) {
        if let Some(draft) = self.edit_draft.as_mut() {
            draft.name = name;
        }
    }

    /// Replaces the quantity buffer of the inline editor
    pub fn set_edit_quantity(&mut self, quantity: String) {
        if let Some(draft) = self.edit_draft.as_mut() {
            draft.quantity = quantity;
        }
    }

    /// Commits the inline editor buffers, defaulting an unparseable quantity
    /// to 1
    pub fn confirm_edit(&mut self) {
        if let Some(draft) = self.edit_draft.clone() {
            self.commit_edit(
                draft.id,
                &draft.name,
                parse_quantity(&draft.quantity),
            );
        }
    }

    /// Leaves editing mode without changing any item
    pub fn cancel_edit(&mut self) {
        self.edit_draft = None;
        for item in self.items.iter_mut() {
            item.is_editing = false;
        }
    }
}

#[cfg(test)]
#[path = "./controller_tests.rs"]
mod tests;
