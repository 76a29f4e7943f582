//! # Console Facade
//!
//! One [`Console`] per host process. It owns the validated navigation tree,
//! the two shared stores, and the configuration, and exposes the working
//! surface of the layer: event dispatch, route guarding, menu projection,
//! and the snapshot.
//!
//! The console is `Send + Sync`; hosts may share it behind an `Arc` and
//! dispatch from wherever their event loop lives.

use crate::config::ConsoleConfig;
use crate::event::ConsoleEvent;
use crate::navigator::Navigator;
use crate::snapshot::ConsoleSnapshot;
use concierge_core::{Permission, Principal, SessionStore};
use concierge_guards::{project_menu, route_access, MenuEntry, RouteAccess, RouteDecision};
use concierge_nav::{NavEvent, NavId, NavStore, NavTree};
use std::collections::BTreeSet;
use tracing::debug;

/// The headless application core.
#[derive(Debug, Clone)]
pub struct Console {
    config: ConsoleConfig,
    tree: NavTree,
    session: SessionStore,
    nav: NavStore,
}

impl Console {
    /// A console with fresh stores: unauthenticated, drawer closed, nothing
    /// active.
    pub fn new(config: ConsoleConfig, tree: NavTree) -> Self {
        Self::with_stores(config, tree, SessionStore::new(), NavStore::new())
    }

    /// A console over host-supplied store handles.
    pub fn with_stores(
        config: ConsoleConfig,
        tree: NavTree,
        session: SessionStore,
        nav: NavStore,
    ) -> Self {
        Self {
            config,
            tree,
            session,
            nav,
        }
    }

    /// The startup configuration.
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// The validated navigation tree.
    pub fn tree(&self) -> &NavTree {
        &self.tree
    }

    /// A handle to the session store, for the authentication collaborator.
    pub fn session_store(&self) -> SessionStore {
        self.session.clone()
    }

    /// A handle to the navigation store.
    pub fn nav_store(&self) -> NavStore {
        self.nav.clone()
    }

    // =========================================================================
    // Event dispatch
    // =========================================================================

    /// Run one event through the layer.
    pub fn dispatch(&self, event: ConsoleEvent) {
        debug!(event = event.description(), "console dispatch");
        match event {
            ConsoleEvent::SessionEstablished(principal) => self.session.set_session(principal),
            ConsoleEvent::SessionCleared => self.session.clear_session(),
            ConsoleEvent::NavItemClicked(id) => {
                self.nav.apply(&self.tree, NavEvent::ItemClicked(id));
            }
            ConsoleEvent::LocationChanged(path) => {
                self.nav.apply(&self.tree, NavEvent::LocationChanged(path));
            }
            ConsoleEvent::DrawerToggled => self.nav.apply(&self.tree, NavEvent::DrawerToggled),
        }
    }

    /// Sign a principal in.
    pub fn login(&self, principal: Principal) {
        self.dispatch(ConsoleEvent::SessionEstablished(principal));
    }

    /// Sign the principal out.
    pub fn logout(&self) {
        self.dispatch(ConsoleEvent::SessionCleared);
    }

    /// Report a menu click.
    pub fn click_item(&self, id: impl Into<NavId>) {
        self.dispatch(ConsoleEvent::NavItemClicked(id.into()));
    }

    /// Report a location change from the routing host.
    pub fn location_changed(&self, path: impl Into<String>) {
        self.dispatch(ConsoleEvent::LocationChanged(path.into()));
    }

    /// Flip the drawer.
    pub fn toggle_drawer(&self) {
        self.dispatch(ConsoleEvent::DrawerToggled);
    }

    // =========================================================================
    // Guards and projections
    // =========================================================================

    /// Evaluate route access for the current session.
    pub fn route_access(&self, required: Option<&Permission>) -> RouteAccess {
        route_access(&self.session.snapshot(), required)
    }

    /// Evaluate a route and perform the redirect, if one is due, through the
    /// navigator. The host mounts the page iff the returned decision is
    /// [`RouteDecision::Render`].
    pub fn guard_route(
        &self,
        required: Option<&Permission>,
        navigator: &dyn Navigator,
    ) -> RouteDecision {
        let decision = self
            .route_access(required)
            .decision(&self.config.login_path, &self.config.home_path);
        if let RouteDecision::Redirect { to, replace } = &decision {
            navigator.redirect(to, *replace);
        }
        decision
    }

    /// The permission-filtered menu for the current session and state.
    pub fn menu(&self) -> Vec<MenuEntry> {
        project_menu(&self.tree, &self.nav.snapshot(), &self.session.snapshot())
    }

    /// A serializable view of the whole layer.
    pub fn snapshot(&self) -> ConsoleSnapshot {
        ConsoleSnapshot::capture(&self.session.snapshot(), &self.nav.snapshot())
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    /// True while the drawer is expanded.
    pub fn drawer_open(&self) -> bool {
        self.nav.drawer_open()
    }

    /// The active navigation ids (at most one).
    pub fn active_ids(&self) -> BTreeSet<NavId> {
        self.nav.active_ids()
    }

    /// True while a principal is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// True when the signed-in principal holds the given tag.
    pub fn has_permission(&self, permission: &Permission) -> bool {
        self.session.has_permission(permission)
    }
}
