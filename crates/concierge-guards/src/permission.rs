//! # Permission Guard
//!
//! The element-level guard: given the current session and an optional
//! capability requirement, decide whether one piece of UI is shown. Hidden
//! is a normal outcome, not an error; callers get `None` and render nothing.
//!
//! The "no requirement means public" fallback lives here and only here.
//! Every other component passes `Option<&Permission>` through untouched, so
//! tightening the default later is a one-line change in `is_permitted`.

use concierge_core::{Permission, Session, SessionStore};
use tracing::debug;

// =============================================================================
// Pure checks
// =============================================================================

/// Check a requirement against a session.
///
/// `None` is public: permitted for everyone, signed in or not. `Some(p)` is
/// permitted only for a signed-in principal holding `p`.
pub fn is_permitted(session: &Session, required: Option<&Permission>) -> bool {
    match required {
        None => true,
        Some(permission) => session.has_permission(permission),
    }
}

/// Gate a value on a requirement: `Some(content)` when permitted, `None`
/// otherwise.
pub fn guard<T>(session: &Session, required: Option<&Permission>, content: T) -> Option<T> {
    if is_permitted(session, required) {
        Some(content)
    } else {
        None
    }
}

// =============================================================================
// Store-bound guard
// =============================================================================

/// A permission guard bound to the live session store.
///
/// Each call re-reads the store, so evaluations made after a login or logout
/// see the new session. Cheap enough to call once per rendered element.
#[derive(Debug, Clone)]
pub struct PermissionGuard {
    store: SessionStore,
}

impl PermissionGuard {
    /// Bind a guard to a session store handle.
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    /// Check a requirement against the current session.
    pub fn allows(&self, required: Option<&Permission>) -> bool {
        let permitted = is_permitted(&self.store.snapshot(), required);
        if !permitted {
            debug!(
                required = %required.map(Permission::as_str).unwrap_or_default(),
                "element hidden"
            );
        }
        permitted
    }

    /// Gate a value on a requirement against the current session.
    pub fn guard<T>(&self, required: Option<&Permission>, content: T) -> Option<T> {
        if self.allows(required) {
            Some(content)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_core::Principal;

    fn signed_in() -> Session {
        Session::Authenticated(Principal::from_tags("41", ["view_room"]))
    }

    #[test]
    fn test_no_requirement_is_public() {
        assert!(is_permitted(&Session::Unauthenticated, None));
        assert!(is_permitted(&signed_in(), None));
    }

    #[test]
    fn test_requirement_needs_matching_tag() {
        let view = Permission::new("view_room");
        let add = Permission::new("add_room");
        assert!(is_permitted(&signed_in(), Some(&view)));
        assert!(!is_permitted(&signed_in(), Some(&add)));
        assert!(!is_permitted(&Session::Unauthenticated, Some(&view)));
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        let upper = Permission::new("View_Room");
        assert!(!is_permitted(&signed_in(), Some(&upper)));
    }

    #[test]
    fn test_guard_passes_content_through_or_swallows_it() {
        let view = Permission::new("view_room");
        let add = Permission::new("add_room");
        assert_eq!(guard(&signed_in(), Some(&view), "button"), Some("button"));
        assert_eq!(guard(&signed_in(), Some(&add), "button"), None);
        assert_eq!(guard(&Session::Unauthenticated, None, "banner"), Some("banner"));
    }

    #[test]
    fn test_bound_guard_tracks_the_live_store() {
        let store = SessionStore::new();
        let checker = PermissionGuard::new(store.clone());
        let view = Permission::new("view_room");

        assert!(!checker.allows(Some(&view)));
        store.set_session(Principal::from_tags("41", ["view_room"]));
        assert!(checker.allows(Some(&view)));
        store.clear_session();
        assert!(!checker.allows(Some(&view)));
        // Public elements survive every transition.
        assert!(checker.allows(None));
    }

    #[test]
    fn test_bound_guard_gates_content() {
        let store = SessionStore::new();
        store.set_session(Principal::from_tags("41", ["view_room"]));
        let checker = PermissionGuard::new(store);
        assert_eq!(
            checker.guard(Some(&Permission::new("view_room")), 7),
            Some(7)
        );
        assert_eq!(checker.guard(Some(&Permission::new("add_room")), 7), None);
    }
}
