//! Action types for state transitions.

use std::time::Instant;

use shoplist_lib::item::{ItemId, Unit};

/// Commands that trigger state changes via the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // add dialog
    OpenAddDialog,
    CancelAddDialog,
    UpdateDraftName(String),
    UpdateDraftQuantity(String),
    ToggleUnitMenu,
    MoveUnitCursor(isize),
    SelectUnit(Unit),
    ConfirmAdd,

    // list items
    BeginEdit(ItemId),
    UpdateEditName(String),
    UpdateEditQuantity(String),
    ConfirmEdit,
    CancelEdit,
    Delete(ItemId),

    // ui
    Notify(String),
    DismissNotification,
    ExpireNotification(Instant),
    CycleTheme,
}
