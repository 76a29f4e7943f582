//! # Navigation State
//!
//! The runtime state of the navigation layer: which entries are highlighted
//! as active and whether the drawer is expanded. Starts closed and empty on
//! every launch; nothing here is persisted.

use crate::reducer::{self, NavEvent};
use crate::tree::{NavId, NavTree};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Highlight and drawer state of the menu.
///
/// `active_ids` is a set for renderer convenience, but the reducer keeps at
/// most one id in it. Multi-select is unsupported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavState {
    pub(crate) drawer_open: bool,
    pub(crate) active_ids: BTreeSet<NavId>,
}

impl NavState {
    /// Closed drawer, nothing active.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the drawer is expanded.
    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// The currently active ids (at most one).
    pub fn active_ids(&self) -> &BTreeSet<NavId> {
        &self.active_ids
    }

    /// True when the given id is highlighted.
    pub fn is_active(&self, id: &NavId) -> bool {
        self.active_ids.contains(id)
    }
}

/// Cheaply cloneable handle to the shared [`NavState`].
///
/// All mutation goes through [`NavStore::apply`]; the rest of the surface is
/// read-only. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct NavStore {
    inner: Arc<RwLock<NavState>>,
}

impl NavStore {
    /// A store in the launch state: drawer closed, nothing active.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one event through the navigation reducer.
    pub fn apply(&self, tree: &NavTree, event: NavEvent) {
        reducer::reduce(&mut self.inner.write(), tree, event);
    }

    /// True while the drawer is expanded.
    pub fn drawer_open(&self) -> bool {
        self.inner.read().drawer_open
    }

    /// The currently active ids (at most one).
    pub fn active_ids(&self) -> BTreeSet<NavId> {
        self.inner.read().active_ids.clone()
    }

    /// True when the given id is highlighted.
    pub fn is_active(&self, id: &NavId) -> bool {
        self.inner.read().is_active(id)
    }

    /// A point-in-time copy of the state.
    pub fn snapshot(&self) -> NavState {
        self.inner.read().clone()
    }
}
