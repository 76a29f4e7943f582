//! # Navigation Tree
//!
//! The static forest of navigation groups and items the console is configured
//! with at startup. Hosts author it with the [`NavGroup`] / [`NavItem`]
//! builders (or deserialize it from config) and validate it once with
//! [`NavTree::new`]; after that the tree never changes at runtime.
//!
//! Ids must be unique across the whole forest. Activation tracks ids, so a
//! collision would light up several entries at once.

use concierge_core::Permission;
use indexmap::IndexSet;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

// =============================================================================
// Identifiers
// =============================================================================

/// Identifier of a navigation node, unique across the forest.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavId(String);

impl NavId {
    /// Wrap a node identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as declared.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NavId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NavId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NavId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

// =============================================================================
// Nodes
// =============================================================================

/// A leaf entry: one clickable destination in the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    id: NavId,
    title: String,
    url: String,
    #[serde(default, deserialize_with = "deserialize_optional_tag")]
    required_permission: Option<Permission>,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    external: bool,
    #[serde(default)]
    disabled: bool,
}

impl NavItem {
    /// A public, enabled, internal item with no icon.
    pub fn new(id: impl Into<NavId>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            required_permission: None,
            icon: None,
            external: false,
            disabled: false,
        }
    }

    /// Gate this item behind a capability tag. An empty tag declares no
    /// requirement, matching the backend's "empty means public" data shape.
    pub fn require(mut self, tag: impl Into<String>) -> Self {
        self.required_permission = Permission::optional(tag);
        self
    }

    /// Attach an icon name for the renderer.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Mark the destination as external to the console.
    pub fn external(mut self) -> Self {
        self.external = true;
        self
    }

    /// Render the entry greyed out and inert.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// The node identifier.
    pub fn id(&self) -> &NavId {
        &self.id
    }

    /// The display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The destination path or URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The capability tag gating this item, if any.
    pub fn required_permission(&self) -> Option<&Permission> {
        self.required_permission.as_ref()
    }

    /// The icon name, if any.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// True when the destination leaves the console.
    pub fn is_external(&self) -> bool {
        self.external
    }

    /// True when the entry is rendered inert.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// A section of the menu holding further nodes.
///
/// `required_permissions` is carried as declared configuration data; menu
/// projection renders every group regardless of it and filters items only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavGroup {
    id: NavId,
    title: String,
    #[serde(default)]
    required_permissions: Vec<Permission>,
    #[serde(default)]
    children: Vec<NavNode>,
}

impl NavGroup {
    /// An empty group.
    pub fn new(id: impl Into<NavId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            required_permissions: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Record a capability tag on the group. Declared data only; empty tags
    /// are dropped the same way item tags are.
    pub fn require(mut self, tag: impl Into<String>) -> Self {
        if let Some(permission) = Permission::optional(tag) {
            self.required_permissions.push(permission);
        }
        self
    }

    /// Replace the group's children.
    pub fn with_children(mut self, children: impl IntoIterator<Item = NavNode>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// The node identifier.
    pub fn id(&self) -> &NavId {
        &self.id
    }

    /// The section title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The declared (unenforced) capability tags.
    pub fn required_permissions(&self) -> &[Permission] {
        &self.required_permissions
    }

    /// The nodes inside this group, in declaration order.
    pub fn children(&self) -> &[NavNode] {
        &self.children
    }
}

/// One node of the navigation forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavNode {
    /// A menu section.
    Group(NavGroup),
    /// A clickable destination.
    Item(NavItem),
}

impl NavNode {
    /// The identifier of this node.
    pub fn id(&self) -> &NavId {
        match self {
            NavNode::Group(group) => group.id(),
            NavNode::Item(item) => item.id(),
        }
    }
}

impl From<NavGroup> for NavNode {
    fn from(group: NavGroup) -> Self {
        NavNode::Group(group)
    }
}

impl From<NavItem> for NavNode {
    fn from(item: NavItem) -> Self {
        NavNode::Item(item)
    }
}

fn deserialize_optional_tag<'de, D>(deserializer: D) -> Result<Option<Permission>, D::Error>
where
    D: Deserializer<'de>,
{
    let tag = Option::<String>::deserialize(deserializer)?;
    Ok(tag.and_then(Permission::optional))
}

// =============================================================================
// Tree
// =============================================================================

/// Errors raised while validating a navigation forest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavTreeError {
    /// The same id appears on more than one node.
    #[error("duplicate navigation id `{id}`")]
    DuplicateId {
        /// The colliding identifier.
        id: NavId,
    },
}

/// The validated, runtime-immutable navigation forest.
#[derive(Debug, Clone)]
pub struct NavTree {
    roots: Vec<NavNode>,
    ids: IndexSet<NavId>,
}

impl NavTree {
    /// Validate a forest: every id, group or item, must be unique.
    pub fn new(roots: Vec<NavNode>) -> Result<Self, NavTreeError> {
        let mut ids = IndexSet::new();
        for node in &roots {
            collect_ids(node, &mut ids)?;
        }
        debug!(nodes = ids.len(), "navigation tree validated");
        Ok(Self { roots, ids })
    }

    /// The root nodes, in declaration order.
    pub fn roots(&self) -> &[NavNode] {
        &self.roots
    }

    /// True when a node with this id exists anywhere in the forest.
    pub fn contains_id(&self, id: &NavId) -> bool {
        self.ids.contains(id)
    }

    /// Find an item (not a group) by id.
    pub fn find_item(&self, id: &NavId) -> Option<&NavItem> {
        self.items().find(|item| item.id() == id)
    }

    /// Every item in the forest, depth-first in declaration order.
    pub fn items(&self) -> Items<'_> {
        let mut stack: Vec<&NavNode> = Vec::new();
        stack.extend(self.roots.iter().rev());
        Items { stack }
    }

    /// The first item in declaration order whose `url` is a string prefix of
    /// `path`.
    ///
    /// First declared wins: with `/rooms` declared before `/rooms/new`, the
    /// path `/rooms/new` activates the `/rooms` item. Match order is the
    /// declaration order, not URL specificity.
    pub fn match_path(&self, path: &str) -> Option<&NavItem> {
        self.items().find(|item| path.starts_with(item.url()))
    }
}

fn collect_ids(node: &NavNode, ids: &mut IndexSet<NavId>) -> Result<(), NavTreeError> {
    if !ids.insert(node.id().clone()) {
        return Err(NavTreeError::DuplicateId {
            id: node.id().clone(),
        });
    }
    if let NavNode::Group(group) = node {
        for child in group.children() {
            collect_ids(child, ids)?;
        }
    }
    Ok(())
}

/// Depth-first iterator over the forest's items in declaration order.
#[derive(Debug)]
pub struct Items<'a> {
    stack: Vec<&'a NavNode>,
}

impl<'a> Iterator for Items<'a> {
    type Item = &'a NavItem;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                NavNode::Item(item) => return Some(item),
                NavNode::Group(group) => {
                    self.stack.extend(group.children().iter().rev());
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_forest() -> Vec<NavNode> {
        vec![
            NavItem::new("dashboard", "Dashboard", "/dashboard").into(),
            NavGroup::new("rooms", "Rooms")
                .require("view_room")
                .with_children(vec![
                    NavItem::new("roomList", "All Rooms", "/rooms")
                        .require("view_room")
                        .with_icon("bed")
                        .into(),
                    NavItem::new("addRoom", "Add Room", "/rooms/new")
                        .require("add_room")
                        .into(),
                ])
                .into(),
            NavItem::new("help", "Help Center", "https://help.example.com")
                .external()
                .into(),
        ]
    }

    #[test]
    fn test_tree_accepts_unique_ids() {
        let tree = NavTree::new(sample_forest()).unwrap();
        assert!(tree.contains_id(&NavId::new("rooms")));
        assert!(tree.contains_id(&NavId::new("addRoom")));
        assert!(!tree.contains_id(&NavId::new("missing")));
    }

    #[test]
    fn test_tree_rejects_duplicate_ids() {
        let forest = vec![
            NavItem::new("dashboard", "Dashboard", "/dashboard").into(),
            NavGroup::new("rooms", "Rooms")
                .with_children(vec![NavItem::new("dashboard", "Again", "/again").into()])
                .into(),
        ];
        let err = NavTree::new(forest).unwrap_err();
        assert_eq!(
            err,
            NavTreeError::DuplicateId {
                id: NavId::new("dashboard")
            }
        );
        assert_eq!(err.to_string(), "duplicate navigation id `dashboard`");
    }

    #[test]
    fn test_items_walk_depth_first_in_declaration_order() {
        let tree = NavTree::new(sample_forest()).unwrap();
        let order: Vec<&str> = tree.items().map(|item| item.id().as_str()).collect();
        assert_eq!(order, ["dashboard", "roomList", "addRoom", "help"]);
    }

    #[test]
    fn test_find_item_reaches_nested_items() {
        let tree = NavTree::new(sample_forest()).unwrap();
        let item = tree.find_item(&NavId::new("addRoom")).unwrap();
        assert_eq!(item.url(), "/rooms/new");
        assert_eq!(
            item.required_permission(),
            Some(&Permission::new("add_room"))
        );
        // Groups are not items.
        assert!(tree.find_item(&NavId::new("rooms")).is_none());
    }

    #[test]
    fn test_match_path_prefers_declaration_order_over_specificity() {
        let tree = NavTree::new(vec![
            NavItem::new("overview", "Overview", "/dashboard").into(),
            NavItem::new("extra", "Extra", "/dashboard/extra").into(),
        ])
        .unwrap();
        let matched = tree.match_path("/dashboard/extra").unwrap();
        assert_eq!(matched.id().as_str(), "overview");
    }

    #[test]
    fn test_match_path_without_match_is_none() {
        let tree = NavTree::new(sample_forest()).unwrap();
        assert!(tree.match_path("/settings").is_none());
    }

    #[test]
    fn test_builders_set_every_flag() {
        let item = NavItem::new("help", "Help", "https://help.example.com")
            .with_icon("lifebuoy")
            .external()
            .disabled();
        assert_eq!(item.icon(), Some("lifebuoy"));
        assert!(item.is_external());
        assert!(item.is_disabled());
        assert!(item.required_permission().is_none());
    }

    #[test]
    fn test_empty_tag_declares_no_requirement() {
        let item = NavItem::new("open", "Open", "/open").require("");
        assert!(item.required_permission().is_none());
        let group = NavGroup::new("g", "G").require("");
        assert!(group.required_permissions().is_empty());
    }

    #[test]
    fn test_forest_deserializes_from_config_json() {
        let json = r#"[
            { "Item": { "id": "dashboard", "title": "Dashboard", "url": "/dashboard" } },
            { "Group": {
                "id": "rooms",
                "title": "Rooms",
                "children": [
                    { "Item": {
                        "id": "addRoom",
                        "title": "Add Room",
                        "url": "/rooms/new",
                        "required_permission": "add_room",
                        "icon": "bed"
                    } },
                    { "Item": {
                        "id": "open",
                        "title": "Open",
                        "url": "/open",
                        "required_permission": ""
                    } }
                ]
            } }
        ]"#;
        let forest: Vec<NavNode> = serde_json::from_str(json).unwrap();
        let tree = NavTree::new(forest).unwrap();
        let add_room = tree.find_item(&NavId::new("addRoom")).unwrap();
        assert_eq!(
            add_room.required_permission(),
            Some(&Permission::new("add_room"))
        );
        // Empty tags in config normalize away, same as the builder.
        let open = tree.find_item(&NavId::new("open")).unwrap();
        assert!(open.required_permission().is_none());
    }
}
