//! # Concierge App
//!
//! The headless application core of the Concierge console. Hosts construct
//! one [`Console`] at startup with their navigation tree and configuration,
//! feed it discrete [`ConsoleEvent`]s, and read back pure projections: route
//! decisions, the permission-filtered menu, and a serializable snapshot.
//!
//! Rendering, HTTP, and credential handling stay in the host. The two
//! collaborators plug in behind narrow seams: the authentication service
//! calls [`Console::login`] / [`Console::logout`], and the routing host
//! implements [`Navigator`] and reports location changes.

#![forbid(unsafe_code)]

pub mod config;
pub mod console;
pub mod event;
pub mod navigator;
pub mod prelude;
pub mod snapshot;
pub mod testing;

pub use config::ConsoleConfig;
pub use console::Console;
pub use event::ConsoleEvent;
pub use navigator::Navigator;
pub use snapshot::ConsoleSnapshot;
