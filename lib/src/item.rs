//! Shopping list entries and the units they are measured in.

use std::fmt;

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Quantity used whenever quantity text cannot be parsed
pub const DEFAULT_QUANTITY: i32 = 1;

/// Unique identifier of a [`ShoppingItem`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Measurement unit of an item
///
/// [`Unit::Placeholder`] is what the add dialog shows before a real unit has
/// been picked, and is rejected when adding an item.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
)]
pub enum Unit {
    /// No unit chosen yet
    #[default]
    #[strum(serialize = "Unit")]
    Placeholder,
    /// Grams
    #[strum(serialize = "gm")]
    Grams,
    /// Kilograms
    #[strum(serialize = "kg")]
    Kilograms,
    /// Packets
    #[strum(serialize = "pkt")]
    Packets,
}

impl Unit {
    /// Returns the selectable units in menu order, excluding the placeholder
    pub fn choices() -> Vec<Unit> {
        Unit::iter().filter(|u| !u.is_placeholder()).collect()
    }

    /// Returns true if this is the placeholder sentinel
    pub fn is_placeholder(&self) -> bool {
        *self == Unit::Placeholder
    }

    /// Returns the long label displayed in the unit selection menu
    pub fn menu_label(&self) -> &'static str {
        match self {
            Unit::Placeholder => "Unit",
            Unit::Grams => "Grams(gm)",
            Unit::Kilograms => "Kilograms(kg)",
            Unit::Packets => "Packets(pkt)",
        }
    }
}

/// Parses user entered quantity text, falling back to [`DEFAULT_QUANTITY`]
/// when the text is empty or not an integer
pub fn parse_quantity(text: &str) -> i32 {
    text.parse::<i32>().unwrap_or(DEFAULT_QUANTITY)
}

/// A single entry in the shopping list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingItem {
    /// Unique id assigned at creation
    pub id: ItemId,
    /// Display name
    pub name: String,
    /// Amount to buy
    pub quantity: i32,
    /// Unit the quantity is measured in
    pub unit: Unit,
    /// Whether this item is currently shown in the inline editor
    pub is_editing: bool,
}

impl ShoppingItem {
    /// Creates a new item in the normal (non-editing) state
    pub fn new(id: ItemId, name: String, quantity: i32, unit: Unit) -> Self {
        Self {
            id,
            name,
            quantity,
            unit,
            is_editing: false,
        }
    }

    /// Returns quantity and unit formatted together, e.g. "2pkt"
    pub fn quantity_label(&self) -> String {
        format!("{}{}", self.quantity, self.unit)
    }
}

#[cfg(test)]
#[path = "./item_tests.rs"]
mod tests;
