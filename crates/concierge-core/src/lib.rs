//! # Concierge Core
//!
//! Permission and session model for the Concierge console: opaque capability
//! tags as issued by the backend permission catalog, the authenticated
//! principal that carries them, and the process-wide session store with its
//! two mutation entry points.
//!
//! This crate is deliberately free of policy: whether a permission is
//! sufficient for a given UI fragment or route is decided by
//! `concierge-guards`. Here we only answer "who is signed in" and "which tags
//! do they hold".

#![forbid(unsafe_code)]

/// Opaque permission tags and immutable per-session tag sets
pub mod permission;

/// The authenticated principal and its identifier
pub mod principal;

/// Session state and the process-wide session store
pub mod session;

pub use permission::{Permission, PermissionSet};
pub use principal::{Principal, StaffId};
pub use session::{Session, SessionStore};
