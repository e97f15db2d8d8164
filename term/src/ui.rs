//! Terminal UI components, views, and the root application widget.

pub mod app;
pub mod colors;
pub mod components;
pub mod views;
