// src/view/mod.rs
// =============================================================================
// The rendering side of the app.
//
// The controller never prints anything itself. It calls the View trait with
// ready-made view models, and each View decides how to present them:
// - TerminalView prints them for a person at a terminal
// - SnapshotView keeps the latest of each, for --json output and for tests
// =============================================================================

mod model;
mod snapshot;
mod terminal;

pub use model::{PageItem, PaginationControls, ProfileView, RepoGrid};
pub use snapshot::{Snapshot, SnapshotView};
pub use terminal::{format_grid, format_pagination, format_profile, TerminalView};

/// Where the controller sends its render calls.
///
/// Methods take `&self` and must be cheap: they are called while the
/// controller holds its state lock, from whichever task finished a request.
pub trait View: Send + Sync {
    /// Turn the loading indicator on or off.
    fn set_busy(&self, busy: bool);

    fn show_profile(&self, profile: &ProfileView);

    fn show_repositories(&self, grid: &RepoGrid);

    fn show_pagination(&self, controls: &PaginationControls);

    /// Blocking, user-facing error notice (an alert box in a browser).
    fn notify_error(&self, message: &str);
}
