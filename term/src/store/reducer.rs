//! Pure reducer functions that compute new state from actions.

use std::fmt::Debug;

use crate::store::Reducer;

use super::{action::Action, effect::Effect, state::State};

mod reducers;

/// Applies actions to state, producing new state and optional side effects.
#[derive(Default)]
pub struct StoreReducer;

impl StoreReducer {
    pub fn boxed() -> Box<Self> {
        Box::default()
    }

    fn log_action<D: Debug>(&self, name: &str, data: &D) {
        log::debug!("processing action: {name}({:?})", data);
    }
}

impl Reducer for StoreReducer {
    /// Applies an action to the state, mutating it in place and returning any
    /// side effects to be executed.
    fn reduce(&self, state: &mut State, action: Action) -> Effect {
        match action {
            // Add dialog actions
            Action::OpenAddDialog => {
                self.log_action("OpenAddDialog", &"");
                reducers::dialog::open(state);
                Effect::None
            }
            Action::CancelAddDialog => {
                self.log_action("CancelAddDialog", &"");
                reducers::dialog::cancel(state);
                Effect::None
            }
            Action::UpdateDraftName(name) => {
                self.log_action("UpdateDraftName", &name);
                reducers::dialog::update_name(state, name);
                Effect::None
            }
            Action::UpdateDraftQuantity(quantity) => {
                self.log_action("UpdateDraftQuantity", &quantity);
                reducers::dialog::update_quantity(state, quantity);
                Effect::None
            }
            Action::ToggleUnitMenu => {
                self.log_action("ToggleUnitMenu", &"");
                reducers::dialog::toggle_unit_menu(state);
                Effect::None
            }
            Action::MoveUnitCursor(delta) => {
                self.log_action("MoveUnitCursor", &delta);
                reducers::dialog::move_unit_cursor(state, delta);
                Effect::None
            }
            Action::SelectUnit(unit) => {
                self.log_action("SelectUnit", &unit);
                reducers::dialog::select_unit(state, unit);
                Effect::None
            }
            Action::ConfirmAdd => {
                self.log_action("ConfirmAdd", state.list.draft());
                reducers::dialog::confirm(state);
                Effect::None
            }

            // Item actions
            Action::BeginEdit(id) => {
                self.log_action("BeginEdit", &id);
                reducers::item::begin_edit(state, id);
                Effect::None
            }
            Action::UpdateEditName(name) => {
                self.log_action("UpdateEditName", &name);
                reducers::item::update_edit_name(state, name);
                Effect::None
            }
            Action::UpdateEditQuantity(quantity) => {
                self.log_action("UpdateEditQuantity", &quantity);
                reducers::item::update_edit_quantity(state, quantity);
                Effect::None
            }
            Action::ConfirmEdit => {
                self.log_action("ConfirmEdit", &state.list.edit_draft());
                reducers::item::confirm_edit(state);
                Effect::None
            }
            Action::CancelEdit => {
                self.log_action("CancelEdit", &"");
                reducers::item::cancel_edit(state);
                Effect::None
            }
            Action::Delete(id) => {
                self.log_action("Delete", &id);
                reducers::item::delete(state, id);
                Effect::None
            }

            // UI actions
            Action::Notify(message) => {
                self.log_action("Notify", &message);
                reducers::ui::notify(state, message);
                Effect::None
            }
            Action::DismissNotification => {
                self.log_action("DismissNotification", &"");
                reducers::ui::dismiss_notification(state);
                Effect::None
            }
            Action::ExpireNotification(now) => {
                reducers::ui::expire_notification(state, now);
                Effect::None
            }
            Action::CycleTheme => {
                self.log_action("CycleTheme", &state.theme);
                let config = reducers::ui::cycle_theme(state);
                Effect::SaveConfig(config)
            }
        }
    }
}

#[cfg(test)]
#[path = "./reducer_tests.rs"]
mod tests;
