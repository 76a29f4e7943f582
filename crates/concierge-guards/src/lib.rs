//! # Concierge Guards
//!
//! Every access decision the console makes, in one crate:
//!
//! - `permission`: the element-level guard that shows or hides a single
//!   piece of UI
//! - `route`: the page-level guard that renders, sends unauthenticated
//!   visitors to login, or bounces the under-privileged home
//! - `menu`: the navigation tree projected through the permission guard
//!
//! Decisions are pure functions of the current session; nothing is cached,
//! so a session change takes effect on the next evaluation.

#![forbid(unsafe_code)]

pub mod menu;
pub mod permission;
pub mod route;

pub use menu::{project_menu, MenuEntry};
pub use permission::{guard, is_permitted, PermissionGuard};
pub use route::{route_access, GatedRoute, RouteAccess, RouteDecision, RouteOutcome};
