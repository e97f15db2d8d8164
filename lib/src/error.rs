//! Custom Error and Result types for this library

use thiserror::Error;

/// Message shown to the user when an item cannot be added
pub const INVALID_ADD_INPUT_MESSAGE: &str = "Enter Valid Name & Unit";

/// Custom Error type for this library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShopListError {
    /// Raised when adding an item with a blank name or without choosing a
    /// unit
    #[error("{}", INVALID_ADD_INPUT_MESSAGE)]
    InvalidAddInput,
}

/// Custom Result type for this library. All Errors exposed by this library
/// will be returned as [`ShopListError`]
pub type Result<T> = std::result::Result<T, ShopListError>;

#[cfg(test)]
#[path = "./error_tests.rs"]
mod tests;
