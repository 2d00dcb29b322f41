// src/view/snapshot.rs
// =============================================================================
// A View that just remembers what it was told.
//
// `show --json` renders into one of these and serializes the result; the
// controller tests use it to look at what ended up "on the page".
// =============================================================================

use std::sync::{Mutex, PoisonError};

use serde::Serialize;

use super::{PaginationControls, ProfileView, RepoGrid, View};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    pub profile: Option<ProfileView>,
    pub repositories: Option<RepoGrid>,
    pub pagination: Option<PaginationControls>,
    pub errors: Vec<String>,
    /// Whether the loading indicator is currently on.
    #[serde(skip)]
    pub busy: bool,
    /// Every set_busy call, in order.
    #[serde(skip)]
    pub busy_changes: Vec<bool>,
}

#[derive(Debug, Default)]
pub struct SnapshotView {
    inner: Mutex<Snapshot>,
}

impl SnapshotView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.lock().clone()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&self) {
        *self.lock() = Snapshot::default();
    }

    // A panic while holding the lock can only come from a clone or push;
    // the data is still usable.
    fn lock(&self) -> std::sync::MutexGuard<'_, Snapshot> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl View for SnapshotView {
    fn set_busy(&self, busy: bool) {
        let mut snapshot = self.lock();
        snapshot.busy = busy;
        snapshot.busy_changes.push(busy);
    }

    fn show_profile(&self, profile: &ProfileView) {
        self.lock().profile = Some(profile.clone());
    }

    fn show_repositories(&self, grid: &RepoGrid) {
        self.lock().repositories = Some(grid.clone());
    }

    fn show_pagination(&self, controls: &PaginationControls) {
        self.lock().pagination = Some(controls.clone());
    }

    fn notify_error(&self, message: &str) {
        self.lock().errors.push(message.to_string());
    }
}
