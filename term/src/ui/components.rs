//! Reusable UI components (header, footer, input, popover, etc.).

pub mod footer;
pub mod header;
pub mod input;
pub mod popover;
pub mod scrollbar;
pub mod unit_menu;
