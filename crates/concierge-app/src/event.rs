//! # Console Events
//!
//! The discrete events the console consumes. Session events come from the
//! authentication collaborator; navigation events come from the host UI and
//! the routing host. Each dispatch is one synchronous state transition.

use concierge_core::Principal;
use concierge_nav::NavId;

/// One event for [`Console::dispatch`](crate::Console::dispatch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    /// The authentication collaborator signed a principal in.
    SessionEstablished(Principal),
    /// The authentication collaborator signed the principal out (logout or
    /// credential expiry).
    SessionCleared,
    /// A menu entry was clicked.
    NavItemClicked(NavId),
    /// The routing host reports a new location path.
    LocationChanged(String),
    /// The drawer open/close control was used.
    DrawerToggled,
}

impl ConsoleEvent {
    /// Short label for logging.
    pub fn description(&self) -> &'static str {
        match self {
            ConsoleEvent::SessionEstablished(_) => "session established",
            ConsoleEvent::SessionCleared => "session cleared",
            ConsoleEvent::NavItemClicked(_) => "nav item clicked",
            ConsoleEvent::LocationChanged(_) => "location changed",
            ConsoleEvent::DrawerToggled => "drawer toggled",
        }
    }
}
