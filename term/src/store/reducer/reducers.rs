pub mod dialog;
pub mod item;
pub mod ui;
