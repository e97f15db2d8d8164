pub mod add_dialog;
pub mod editor;
pub mod row;
pub mod shopping_list;
pub mod traits;
