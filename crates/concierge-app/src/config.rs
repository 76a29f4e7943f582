//! Console configuration.

use serde::{Deserialize, Serialize};

/// Startup configuration for the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Where unauthenticated visitors are sent.
    pub login_path: String,
    /// Where under-privileged visitors are sent.
    pub home_path: String,
}

impl ConsoleConfig {
    /// Configuration with explicit redirect targets.
    pub fn new(login_path: impl Into<String>, home_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
            home_path: home_path.into(),
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            login_path: "/login".to_string(),
            home_path: "/".to_string(),
        }
    }
}
