//! Library package holding the domain model of an in-memory shopping list
//!
//! The [`controller::ListController`] owns every [`item::ShoppingItem`] along
//! with the transient state of the add dialog and the inline editor. All
//! operations are synchronous and total, except for
//! [`controller::ListController::add`], which rejects blank names and the
//! placeholder unit.
//!
//! # Examples
//!
//! ```
//! use shoplist_lib::{controller::ListController, item::Unit};
//!
//! let mut list = ListController::new();
//! let id = list.add("Milk", "2", Unit::Packets).unwrap();
//!
//! list.begin_edit(id);
//! list.commit_edit(id, "Bread", 3);
//!
//! let item = list.get(id).unwrap();
//! assert_eq!(item.name, "Bread");
//! assert_eq!(item.quantity_label(), "3pkt");
//! ```

#![deny(missing_docs)]
pub mod controller;
pub mod draft;
pub mod error;
pub mod item;
