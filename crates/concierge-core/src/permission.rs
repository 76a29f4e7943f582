//! Permission tags and permission sets
//!
//! A permission is an opaque, case-sensitive string issued by the backend
//! permission catalog (`"view_room"`, `"add_user"`, ...). Concierge never
//! interprets the tag text; it only compares tags for exact equality against
//! the set granted to the signed-in principal.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One grantable capability, identified by its catalog tag.
///
/// Tags are compared byte-for-byte: `"view_room"` and `"View_Room"` are
/// different permissions. Construction never fails because tags are opaque;
/// validating them against the live catalog is the backend's job.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(String);

impl Permission {
    /// Create a permission from a catalog tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Map an authoring-time tag to an optional requirement.
    ///
    /// The console's configuration format historically used the empty string
    /// to mean "no permission required". This is the one place that shape is
    /// normalized: empty in, `None` out. Guards only ever reason about
    /// `Option<Permission>`.
    pub fn optional(tag: impl Into<String>) -> Option<Self> {
        let tag = tag.into();
        if tag.is_empty() {
            None
        } else {
            Some(Self(tag))
        }
    }

    /// The raw catalog tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Permission {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for Permission {
    fn from(tag: String) -> Self {
        Self::new(tag)
    }
}

/// The set of permission tags granted to one principal.
///
/// Immutable for the lifetime of a session: the login flow builds it once
/// from the backend payload and [`crate::SessionStore::set_session`] swaps it
/// in wholesale. Backed by a `BTreeSet` so iteration (and therefore snapshot
/// serialization) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<Permission>);

impl PermissionSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact-match membership test.
    pub fn contains(&self, permission: &Permission) -> bool {
        self.0.contains(permission)
    }

    /// Iterate the tags in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.0.iter()
    }

    /// Number of granted tags.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no tags are granted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P: Into<Permission>> FromIterator<P> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = P>>(tags: I) -> Self {
        Self(tags.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for PermissionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, permission) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{permission}")?;
        }
        write!(f, "}}")
    }
}
