//! # Route Guard
//!
//! The page-level guard. Every route evaluation walks the same two steps in
//! a fixed order:
//!
//! 1. nobody signed in: redirect to the login path, whatever the route
//!    requires
//! 2. signed in: render when the route is public or the tag is held,
//!    otherwise redirect to the home path
//!
//! Both redirects replace the history entry, so the browser's back button
//! cannot land on a page the guard just refused. Refusal is silent for the
//! user; the only trace is a warn-level log line.
//!
//! Evaluations are never cached. A permission revoked mid-session takes
//! effect the next time the route is evaluated.

use crate::permission::is_permitted;
use concierge_core::{Permission, Session};
use tracing::{debug, warn};

// =============================================================================
// Access evaluation
// =============================================================================

/// The route guard's verdict for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Nobody is signed in.
    NoPrincipal,
    /// Signed in and allowed to see the route.
    Authorized,
    /// Signed in but missing the required tag.
    Forbidden,
}

impl RouteAccess {
    /// Short label for logging.
    pub fn description(&self) -> &'static str {
        match self {
            RouteAccess::NoPrincipal => "no principal",
            RouteAccess::Authorized => "authorized",
            RouteAccess::Forbidden => "forbidden",
        }
    }

    /// Map the verdict to what the host should do, given the configured
    /// redirect targets.
    pub fn decision(&self, login_path: &str, home_path: &str) -> RouteDecision {
        match self {
            RouteAccess::NoPrincipal => RouteDecision::Redirect {
                to: login_path.to_string(),
                replace: true,
            },
            RouteAccess::Authorized => RouteDecision::Render,
            RouteAccess::Forbidden => RouteDecision::Redirect {
                to: home_path.to_string(),
                replace: true,
            },
        }
    }
}

/// Evaluate route access for a session and an optional requirement.
///
/// Authentication is checked before permission: an unauthenticated visitor
/// is `NoPrincipal` even on a route with no requirement.
pub fn route_access(session: &Session, required: Option<&Permission>) -> RouteAccess {
    if !session.is_authenticated() {
        debug!("route evaluation without principal, sending to login");
        return RouteAccess::NoPrincipal;
    }
    if is_permitted(session, required) {
        RouteAccess::Authorized
    } else {
        warn!(
            required = %required.map(Permission::as_str).unwrap_or_default(),
            "route forbidden, sending home"
        );
        RouteAccess::Forbidden
    }
}

/// What the host should do with the evaluated route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Mount the page.
    Render,
    /// Navigate away instead of mounting.
    Redirect {
        /// Redirect target path.
        to: String,
        /// Replace the current history entry rather than pushing.
        replace: bool,
    },
}

// =============================================================================
// Gated routes
// =============================================================================

/// A page element paired with the capability tag that gates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatedRoute<T> {
    content: T,
    required: Option<Permission>,
}

impl<T> GatedRoute<T> {
    /// A route anyone signed in may see.
    pub fn public(content: T) -> Self {
        Self {
            content,
            required: None,
        }
    }

    /// A route gated behind a capability tag. An empty tag declares no
    /// requirement, same as [`GatedRoute::public`].
    pub fn requiring(content: T, tag: impl Into<String>) -> Self {
        Self {
            content,
            required: Permission::optional(tag),
        }
    }

    /// The tag gating this route, if any.
    pub fn required(&self) -> Option<&Permission> {
        self.required.as_ref()
    }

    /// Evaluate the guard and either release the content or name the
    /// redirect.
    pub fn resolve(self, session: &Session, login_path: &str, home_path: &str) -> RouteOutcome<T> {
        let access = route_access(session, self.required.as_ref());
        match access.decision(login_path, home_path) {
            RouteDecision::Render => RouteOutcome::Render(self.content),
            RouteDecision::Redirect { to, replace } => RouteOutcome::Redirect { to, replace },
        }
    }
}

/// A resolved [`GatedRoute`]: the content, or where to go instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome<T> {
    /// Mount this content.
    Render(T),
    /// Navigate away; the content stays unmounted.
    Redirect {
        /// Redirect target path.
        to: String,
        /// Replace the current history entry rather than pushing.
        replace: bool,
    },
}
