//! The authenticated principal
//!
//! A principal exists only while someone is signed in. It is produced by the
//! authentication collaborator from the backend login payload and owned
//! exclusively by the session store; everything else sees it through
//! read-only borrows.

use crate::permission::{Permission, PermissionSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a staff member, exactly as issued by the authentication
/// service.
///
/// The service controls the shape (numeric, UUID, whatever); Concierge keeps
/// it opaque and round-trips it untouched.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffId(String);

impl StaffId {
    /// Wrap a server-issued identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as issued.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StaffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "staff-{}", self.0)
    }
}

impl From<&str> for StaffId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for StaffId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

/// The signed-in user's identity plus their granted capability set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    id: StaffId,
    permissions: PermissionSet,
}

impl Principal {
    /// Build a principal from an already-assembled permission set.
    pub fn new(id: impl Into<StaffId>, permissions: PermissionSet) -> Self {
        Self {
            id: id.into(),
            permissions,
        }
    }

    /// Build a principal straight from the login payload shape: an id and an
    /// array of tag strings.
    pub fn from_tags<I, P>(id: impl Into<StaffId>, tags: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Permission>,
    {
        Self::new(id, tags.into_iter().collect())
    }

    /// The staff identifier.
    pub fn id(&self) -> &StaffId {
        &self.id
    }

    /// The granted permission set.
    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    /// True when this principal holds the given tag.
    pub fn has(&self, permission: &Permission) -> bool {
        self.permissions.contains(permission)
    }
}
