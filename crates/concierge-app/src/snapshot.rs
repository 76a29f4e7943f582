//! # Console Snapshot
//!
//! A serializable point-in-time read model of the whole layer, for host
//! frameworks that want one JSON blob and for debugging. Capturing never
//! mutates anything.

use concierge_core::{Permission, Session, StaffId};
use concierge_nav::{NavId, NavState};
use serde::{Deserialize, Serialize};

/// Everything the layer knows, flattened for consumption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSnapshot {
    /// True while a principal is signed in.
    pub authenticated: bool,
    /// The signed-in staff id, if any.
    pub staff_id: Option<StaffId>,
    /// The granted capability tags, sorted.
    pub permissions: Vec<Permission>,
    /// True while the drawer is expanded.
    pub drawer_open: bool,
    /// The active navigation ids (at most one), sorted.
    pub active_ids: Vec<NavId>,
}

impl ConsoleSnapshot {
    /// Capture the current session and navigation state.
    pub fn capture(session: &Session, nav: &NavState) -> Self {
        let (authenticated, staff_id, permissions) = match session.principal() {
            Some(principal) => (
                true,
                Some(principal.id().clone()),
                principal.permissions().iter().cloned().collect(),
            ),
            None => (false, None, Vec::new()),
        };
        Self {
            authenticated,
            staff_id,
            permissions,
            drawer_open: nav.drawer_open(),
            active_ids: nav.active_ids().iter().cloned().collect(),
        }
    }
}
