//! # Menu Projection
//!
//! The navigation forest projected through the permission guard into a flat
//! render model. The host renderer walks the result top-down and draws it;
//! every access decision has already been made.
//!
//! Items the session may not see leave no trace. Groups are not filtered:
//! a group whose items were all guarded away still projects as an empty
//! section, and its declared `required_permissions` are not consulted.

use crate::permission::is_permitted;
use concierge_core::Session;
use concierge_nav::{NavId, NavNode, NavState, NavTree};
use serde::Serialize;

/// One entry of the projected menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MenuEntry {
    /// A rendered group.
    Section {
        /// Group id, for keying and tests.
        id: NavId,
        /// Section heading; present only while the drawer is open.
        title: Option<String>,
        /// Projected children, in declaration order.
        entries: Vec<MenuEntry>,
    },
    /// A rendered item the session is allowed to see.
    Link {
        /// Item id, for keying and activation.
        id: NavId,
        /// Display title.
        title: String,
        /// Destination path or URL.
        url: String,
        /// Icon name, if declared.
        icon: Option<String>,
        /// True when the destination leaves the console.
        external: bool,
        /// True when the entry is rendered inert.
        disabled: bool,
        /// True when this entry is the active one.
        active: bool,
    },
}

/// Project the forest for the given navigation state and session.
pub fn project_menu(tree: &NavTree, state: &NavState, session: &Session) -> Vec<MenuEntry> {
    tree.roots()
        .iter()
        .filter_map(|node| project_node(node, state, session))
        .collect()
}

fn project_node(node: &NavNode, state: &NavState, session: &Session) -> Option<MenuEntry> {
    match node {
        NavNode::Group(group) => Some(MenuEntry::Section {
            id: group.id().clone(),
            title: state.drawer_open().then(|| group.title().to_string()),
            entries: group
                .children()
                .iter()
                .filter_map(|child| project_node(child, state, session))
                .collect(),
        }),
        NavNode::Item(item) => {
            is_permitted(session, item.required_permission()).then(|| MenuEntry::Link {
                id: item.id().clone(),
                title: item.title().to_string(),
                url: item.url().to_string(),
                icon: item.icon().map(str::to_string),
                external: item.is_external(),
                disabled: item.is_disabled(),
                active: state.is_active(item.id()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_core::Principal;
    use concierge_nav::{reducer, NavEvent, NavGroup, NavItem};

    fn hotel_tree() -> NavTree {
        NavTree::new(vec![
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
            NavGroup::new("admin", "Administration")
                .with_children(vec![NavItem::new("addUser", "Add User", "/users/new")
                    .require("add_user")
                    .into()])
                .into(),
        ])
        .unwrap()
    }

    fn concierge() -> Session {
        Session::Authenticated(Principal::from_tags("41", ["view_room"]))
    }

    fn link_ids(entries: &[MenuEntry]) -> Vec<String> {
        let mut ids = Vec::new();
        for entry in entries {
            match entry {
                MenuEntry::Link { id, .. } => ids.push(id.as_str().to_string()),
                MenuEntry::Section { entries, .. } => ids.extend(link_ids(entries)),
            }
        }
        ids
    }

    #[test]
    fn test_guarded_items_vanish_for_missing_tags() {
        let menu = project_menu(&hotel_tree(), &NavState::new(), &concierge());
        let ids = link_ids(&menu);
        assert_eq!(ids, ["dashboard", "roomList"]);
    }

    #[test]
    fn test_unauthenticated_sees_only_public_items() {
        let menu = project_menu(&hotel_tree(), &NavState::new(), &Session::Unauthenticated);
        assert_eq!(link_ids(&menu), ["dashboard"]);
    }

    #[test]
    fn test_groups_survive_even_when_fully_guarded_away() {
        let menu = project_menu(&hotel_tree(), &NavState::new(), &concierge());
        // The admin group keeps its section although its only item is gone.
        let admin = &menu[2];
        match admin {
            MenuEntry::Section { id, entries, .. } => {
                assert_eq!(id.as_str(), "admin");
                assert!(entries.is_empty());
            }
            MenuEntry::Link { .. } => panic!("expected the admin section"),
        }
    }

    #[test]
    fn test_group_tags_are_declared_but_not_enforced() {
        // The rooms group requires view_room; a session without it still
        // gets the section.
        let stranger = Session::Authenticated(Principal::from_tags("7", ["add_user"]));
        let menu = project_menu(&hotel_tree(), &NavState::new(), &stranger);
        match &menu[1] {
            MenuEntry::Section { id, entries, .. } => {
                assert_eq!(id.as_str(), "rooms");
                assert!(entries.is_empty());
            }
            MenuEntry::Link { .. } => panic!("expected the rooms section"),
        }
    }

    #[test]
    fn test_section_titles_follow_the_drawer() {
        let tree = hotel_tree();
        let mut state = NavState::new();

        let closed = project_menu(&tree, &state, &concierge());
        assert_matches_title(&closed[1], None);

        reducer::reduce(&mut state, &tree, NavEvent::DrawerToggled);
        let open = project_menu(&tree, &state, &concierge());
        assert_matches_title(&open[1], Some("Rooms"));
    }

    fn assert_matches_title(entry: &MenuEntry, expected: Option<&str>) {
        match entry {
            MenuEntry::Section { title, .. } => assert_eq!(title.as_deref(), expected),
            MenuEntry::Link { .. } => panic!("expected a section"),
        }
    }

    #[test]
    fn test_active_flag_follows_nav_state() {
        let tree = hotel_tree();
        let mut state = NavState::new();
        reducer::reduce(
            &mut state,
            &tree,
            NavEvent::ItemClicked(NavId::new("roomList")),
        );
        let menu = project_menu(&tree, &state, &concierge());
        match &menu[1] {
            MenuEntry::Section { entries, .. } => match &entries[0] {
                MenuEntry::Link { id, active, .. } => {
                    assert_eq!(id.as_str(), "roomList");
                    assert!(*active);
                }
                MenuEntry::Section { .. } => panic!("expected a link"),
            },
            MenuEntry::Link { .. } => panic!("expected the rooms section"),
        }
    }

    #[test]
    fn test_link_carries_render_fields() {
        let menu = project_menu(&hotel_tree(), &NavState::new(), &concierge());
        match &menu[1] {
            MenuEntry::Section { entries, .. } => match &entries[0] {
                MenuEntry::Link {
                    title,
                    url,
                    icon,
                    external,
                    disabled,
                    ..
                } => {
                    assert_eq!(title, "All Rooms");
                    assert_eq!(url, "/rooms");
                    assert_eq!(icon.as_deref(), Some("bed"));
                    assert!(!external);
                    assert!(!disabled);
                }
                MenuEntry::Section { .. } => panic!("expected a link"),
            },
            MenuEntry::Link { .. } => panic!("expected the rooms section"),
        }
    }

    #[test]
    fn test_menu_serializes_for_host_renderers() {
        let menu = project_menu(&hotel_tree(), &NavState::new(), &Session::Unauthenticated);
        let value = serde_json::to_value(&menu).unwrap();
        assert_eq!(value[0]["Link"]["id"], "dashboard");
        assert_eq!(value[0]["Link"]["active"], false);
    }
}
