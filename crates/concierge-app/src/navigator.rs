//! # Navigator Seam
//!
//! The routing host behind a trait. The console never mutates the browser
//! location itself; when a route guard decides to redirect, the call goes
//! through this seam and the host's router does the work.

/// The routing collaborator.
///
/// Implementations wrap whatever history API the host uses. `redirect` with
/// `replace = true` must replace the current history entry instead of
/// pushing a new one.
pub trait Navigator {
    /// The current location path.
    fn current_path(&self) -> String;

    /// Navigate to `to`.
    fn redirect(&self, to: &str, replace: bool);
}
