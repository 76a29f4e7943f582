//! # Test Support
//!
//! Doubles for the console's collaborator seams, used by this crate's tests
//! and available to hosts for theirs.

use crate::navigator::Navigator;
use parking_lot::Mutex;

/// A [`Navigator`] that records every redirect instead of routing.
///
/// `current_path` follows the redirects, the way a real router's location
/// would.
#[derive(Debug)]
pub struct RecordingNavigator {
    path: Mutex<String>,
    redirects: Mutex<Vec<(String, bool)>>,
}

impl RecordingNavigator {
    /// A navigator parked at the given path.
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            path: Mutex::new(initial_path.into()),
            redirects: Mutex::new(Vec::new()),
        }
    }

    /// Every `(to, replace)` redirect seen so far, oldest first.
    pub fn redirects(&self) -> Vec<(String, bool)> {
        self.redirects.lock().clone()
    }

    /// The most recent redirect, if any.
    pub fn last_redirect(&self) -> Option<(String, bool)> {
        self.redirects.lock().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.path.lock().clone()
    }

    fn redirect(&self, to: &str, replace: bool) {
        *self.path.lock() = to.to_string();
        self.redirects.lock().push((to.to_string(), replace));
    }
}
