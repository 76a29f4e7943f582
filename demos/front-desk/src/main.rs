//! # Front Desk Walkthrough
//!
//! An evening at the front desk, driven end to end through the console
//! layer.
//!
//! This walkthrough shows:
//! - Booting unauthenticated and being sent to login
//! - Signing in and watching the menu grow to the granted tags
//! - Click-driven activation landing before the route transition
//! - A deep link activating the right entry via prefix matching
//! - An under-privileged route attempt bouncing silently home
//! - The drawer toggling section titles on and off
//! - The serializable snapshot of the whole layer
//!
//! Run with: `cargo run -p front-desk`
//! Set `RUST_LOG=debug` to watch the guard and reducer decisions.

use concierge_app::prelude::*;
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

/// A navigator that prints what a real router would do.
struct DeskNavigator {
    path: Mutex<String>,
}

impl DeskNavigator {
    fn new(initial: &str) -> Self {
        Self {
            path: Mutex::new(initial.to_string()),
        }
    }
}

impl Navigator for DeskNavigator {
    fn current_path(&self) -> String {
        self.path.lock().clone()
    }

    fn redirect(&self, to: &str, replace: bool) {
        println!("  router: redirect -> {to} (replace: {replace})");
        *self.path.lock() = to.to_string();
    }
}

fn hotel_forest() -> Vec<NavNode> {
    vec![
        NavItem::new("dashboard", "Dashboard", "/dashboard")
            .with_icon("gauge")
            .into(),
        NavGroup::new("rooms", "Rooms")
            .require("view_room")
            .with_children(vec![
                NavItem::new("roomList", "All Rooms", "/rooms")
                    .require("view_room")
                    .with_icon("bed")
                    .into(),
                NavItem::new("bookRoom", "Book Room", "/rooms/book")
                    .require("book_room")
                    .into(),
                NavItem::new("addRoom", "Add Room", "/rooms/new")
                    .require("add_room")
                    .into(),
            ])
            .into(),
        NavGroup::new("admin", "Administration")
            .with_children(vec![
                NavItem::new("addUser", "Add User", "/users/new")
                    .require("add_user")
                    .into(),
                NavItem::new("roles", "Roles", "/users/roles")
                    .require("add_user")
                    .into(),
            ])
            .into(),
        NavItem::new("help", "Help Center", "https://help.example.com")
            .with_icon("lifebuoy")
            .external()
            .into(),
    ]
}

fn print_menu(console: &Console) {
    match serde_json::to_string_pretty(&console.menu()) {
        Ok(json) => println!("{json}\n"),
        Err(err) => println!("  (menu failed to serialize: {err})\n"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    tracing::info!("front desk walkthrough starting");

    println!("=== Front Desk: an evening through the console layer ===\n");

    let tree = match NavTree::new(hotel_forest()) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("navigation tree rejected: {err}");
            std::process::exit(1);
        }
    };
    let console = Console::new(ConsoleConfig::default(), tree);
    let navigator = DeskNavigator::new("/dashboard");

    // === Phase 1: Boot, nobody signed in ===
    println!("Phase 1: Boot (unauthenticated)");
    println!("  guarding {} ...", navigator.current_path());
    let decision = console.guard_route(None, &navigator);
    assert_eq!(
        decision,
        RouteDecision::Redirect {
            to: "/login".to_string(),
            replace: true
        }
    );
    println!("  menu before sign-in:");
    print_menu(&console);

    // === Phase 2: The evening concierge signs in ===
    println!("Phase 2: Sign-in (tags: view_room, book_room)");
    console.login(Principal::from_tags("41", ["view_room", "book_room"]));
    assert!(console.is_authenticated());
    println!("  menu after sign-in (addRoom and admin items stay hidden):");
    print_menu(&console);

    // === Phase 3: A booking, click first, route later ===
    println!("Phase 3: Booking flow");
    console.click_item("bookRoom");
    assert!(console.active_ids().contains(&NavId::new("bookRoom")));
    println!("  clicked bookRoom, active before the route changes");
    let decision = console.guard_route(Some(&Permission::new("book_room")), &navigator);
    assert_eq!(decision, RouteDecision::Render);
    console.location_changed("/rooms/book");
    println!(
        "  location /rooms/book -> active: {:?}",
        console.active_ids()
    );

    // === Phase 4: A deep link from a bookmarked URL ===
    println!("\nPhase 4: Deep link to /rooms/previews/12");
    console.location_changed("/rooms/previews/12");
    assert!(console.active_ids().contains(&NavId::new("roomList")));
    println!("  /rooms is the first declared prefix match -> roomList active");

    // === Phase 5: A route the concierge may not see ===
    println!("\nPhase 5: Forbidden route (/users/new requires add_user)");
    let decision = console.guard_route(Some(&Permission::new("add_user")), &navigator);
    assert_eq!(
        decision,
        RouteDecision::Redirect {
            to: "/".to_string(),
            replace: true
        }
    );
    println!("  bounced home, no error shown; the warn log line is the only trace");

    // === Phase 6: Drawer and snapshot ===
    println!("\nPhase 6: Drawer open, snapshot");
    console.toggle_drawer();
    assert!(console.drawer_open());
    println!("  section titles now projected:");
    print_menu(&console);
    match serde_json::to_string_pretty(&console.snapshot()) {
        Ok(json) => println!("  snapshot:\n{json}"),
        Err(err) => println!("  (snapshot failed to serialize: {err})"),
    }

    // === Phase 7: Shift over ===
    println!("\nPhase 7: Sign-out");
    console.logout();
    assert!(!console.is_authenticated());
    println!("  menu back to the public entries:");
    print_menu(&console);

    println!("=== Walkthrough complete ===");
}
