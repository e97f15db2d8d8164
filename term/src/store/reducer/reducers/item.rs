//! List item reducers for editing and deleting entries.

use shoplist_lib::item::ItemId;

use crate::store::state::State;

pub fn begin_edit(state: &mut State, id: ItemId) {
    state.list.begin_edit(id);
}

pub fn update_edit_name(state: &mut State, name: String) {
    state.list.set_edit_name(name);
}

pub fn update_edit_quantity(state: &mut State, quantity: String) {
    state.list.set_edit_quantity(quantity);
}

pub fn confirm_edit(state: &mut State) {
    state.list.confirm_edit();
}

pub fn cancel_edit(state: &mut State) {
    state.list.cancel_edit();
}

pub fn delete(state: &mut State, id: ItemId) {
    state.list.delete(id);
}
