//! # Session Store
//!
//! Process-wide authentication state. At any moment the console is either
//! unauthenticated or signed in as exactly one [`Principal`]; there is no
//! partially-authenticated state and no concurrent multi-principal state.
//!
//! [`SessionStore`] is the shared handle the rest of the workspace clones
//! freely. All reads and writes go through it; nothing else holds the
//! principal directly.

use crate::permission::Permission;
use crate::principal::Principal;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

// =============================================================================
// Session
// =============================================================================

/// Authentication state of the console.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Session {
    /// Nobody is signed in. The store starts here and returns here on
    /// sign-out or credential expiry.
    #[default]
    Unauthenticated,
    /// A staff member is signed in with their granted capability set.
    Authenticated(Principal),
}

impl Session {
    /// True when a principal is present.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    /// The signed-in principal, if any.
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Session::Unauthenticated => None,
            Session::Authenticated(principal) => Some(principal),
        }
    }

    /// True when the signed-in principal holds the given tag.
    ///
    /// Unauthenticated sessions hold nothing.
    pub fn has_permission(&self, permission: &Permission) -> bool {
        match self {
            Session::Unauthenticated => false,
            Session::Authenticated(principal) => principal.has(permission),
        }
    }
}

// =============================================================================
// SessionStore
// =============================================================================

/// Cheaply cloneable handle to the single process-wide [`Session`].
///
/// Clones share state: establishing or clearing the session through one
/// handle is visible through every other handle immediately.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Session>>,
}

impl SessionStore {
    /// A store with no session established.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `principal` as the signed-in identity, replacing whatever was
    /// there before. Re-establishing an identical session is a no-op in
    /// observable terms.
    pub fn set_session(&self, principal: Principal) {
        debug!(
            staff = %principal.id(),
            permissions = %principal.permissions(),
            "session established"
        );
        *self.inner.write() = Session::Authenticated(principal);
    }

    /// Drop the session, returning the store to the unauthenticated state.
    /// Clearing an already-empty store is harmless.
    pub fn clear_session(&self) {
        debug!("session cleared");
        *self.inner.write() = Session::Unauthenticated;
    }

    /// True when a principal is present.
    pub fn is_authenticated(&self) -> bool {
        self.inner.read().is_authenticated()
    }

    /// True when the signed-in principal holds the given tag. False for
    /// unauthenticated stores.
    pub fn has_permission(&self, permission: &Permission) -> bool {
        self.inner.read().has_permission(permission)
    }

    /// A point-in-time copy of the session, for decisions that must see one
    /// consistent state across several checks.
    pub fn snapshot(&self) -> Session {
        self.inner.read().clone()
    }
}
