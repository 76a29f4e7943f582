//! # Concierge Nav
//!
//! The navigation layer of the Concierge console: the static tree of groups
//! and items declared at startup, the tiny runtime state that tracks which
//! item is active and whether the drawer is open, and the reducer that moves
//! that state in response to clicks, location changes, and drawer toggles.
//!
//! Permission data rides along on the tree (`required_permission` on items,
//! `required_permissions` on groups) but nothing here enforces it; the
//! guards crate reads those fields when projecting the menu.

#![forbid(unsafe_code)]

pub mod reducer;
pub mod state;
pub mod tree;

pub use reducer::NavEvent;
pub use state::{NavState, NavStore};
pub use tree::{NavGroup, NavId, NavItem, NavNode, NavTree, NavTreeError};
