//! # Navigation Reducer
//!
//! The single transition function for navigation state. Three event kinds
//! move the state:
//!
//! - a click activates the clicked id immediately, before any route change
//!   lands, and replaces whatever was active
//! - a location change re-derives the active id from the tree, so deep links,
//!   manual URL edits, and programmatic redirects highlight the right entry
//! - a drawer toggle flips the drawer and touches nothing else
//!
//! Clicked ids are taken at face value, not checked against the tree; the
//! tree is consulted only to match locations.

use crate::state::NavState;
use crate::tree::{NavId, NavTree};
use std::collections::BTreeSet;
use tracing::debug;

/// One navigation event from the host UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// A menu entry was clicked.
    ItemClicked(NavId),
    /// The routing host reports a new location path.
    LocationChanged(String),
    /// The drawer open/close control was used.
    DrawerToggled,
}

impl NavEvent {
    /// Short label for logging.
    pub fn description(&self) -> &'static str {
        match self {
            NavEvent::ItemClicked(_) => "item clicked",
            NavEvent::LocationChanged(_) => "location changed",
            NavEvent::DrawerToggled => "drawer toggled",
        }
    }
}

/// Apply one event to the state.
///
/// After any sequence of events `state.active_ids` holds at most one id:
/// both activating arms replace the whole set.
pub fn reduce(state: &mut NavState, tree: &NavTree, event: NavEvent) {
    match event {
        NavEvent::ItemClicked(id) => {
            debug!(id = %id, "navigation item clicked");
            state.active_ids = BTreeSet::from([id]);
        }
        NavEvent::LocationChanged(path) => match tree.match_path(&path) {
            Some(item) => {
                debug!(path = %path, active = %item.id(), "location matched");
                state.active_ids = BTreeSet::from([item.id().clone()]);
            }
            None => {
                debug!(path = %path, "location matched no entry, selection kept");
            }
        },
        NavEvent::DrawerToggled => {
            state.drawer_open = !state.drawer_open;
            debug!(open = state.drawer_open, "drawer toggled");
        }
    }
}
