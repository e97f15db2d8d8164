//! Dialog containers rendered on top of the main view.

pub mod base;
pub mod simple;
