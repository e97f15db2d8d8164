//! Add dialog reducers.

use shoplist_lib::item::Unit;

use crate::store::{reducer::reducers::ui::notify, state::State};

pub fn open(state: &mut State) {
    state.list.open_add_dialog();
}

pub fn cancel(state: &mut State) {
    state.list.cancel_add_dialog();
}

pub fn update_name(state: &mut State, name: String) {
    state.list.set_draft_name(name);
}

pub fn update_quantity(state: &mut State, quantity: String) {
    state.list.set_draft_quantity(quantity);
}

pub fn toggle_unit_menu(state: &mut State) {
    state.list.toggle_unit_menu();
}

pub fn move_unit_cursor(state: &mut State, delta: isize) {
    state.list.move_unit_cursor(delta);
}

pub fn select_unit(state: &mut State, unit: Unit) {
    state.list.select_unit(unit);
}

/// Submits the draft. Invalid input leaves the dialog open and surfaces the
/// error as a notification.
pub fn confirm(state: &mut State) {
    if let Err(err) = state.list.confirm_add() {
        notify(state, err.to_string());
    }
}
