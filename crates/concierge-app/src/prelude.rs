//! Concierge prelude.
//!
//! Curated re-exports for hosts wiring the console up, without pulling in
//! the individual crates one by one.

pub use crate::config::ConsoleConfig;
pub use crate::console::Console;
pub use crate::event::ConsoleEvent;
pub use crate::navigator::Navigator;
pub use crate::snapshot::ConsoleSnapshot;

pub use concierge_core::{Permission, PermissionSet, Principal, Session, SessionStore, StaffId};
pub use concierge_guards::{
    guard, is_permitted, project_menu, route_access, GatedRoute, MenuEntry, PermissionGuard,
    RouteAccess, RouteDecision, RouteOutcome,
};
pub use concierge_nav::{
    NavEvent, NavGroup, NavId, NavItem, NavNode, NavState, NavStore, NavTree, NavTreeError,
};
