// src/pager/controller.rs
// =============================================================================
// The page controller: ties user actions to fetch cycles and render calls.
//
// A fetch cycle is two requests, run concurrently:
//   profile  -> recompute total_pages, render the profile
//   repos    -> render the repository grid and the pagination controls
// Each request has its own success / failure / cleanup path; a failure in one
// never stops the other.
//
// Cycles can overlap (the browse loop spawns each one as its own task and
// nothing gets cancelled). Every cycle gets a generation number; when a
// response comes back and a newer cycle has started meanwhile, the response
// is dropped instead of overwriting newer results. `discard_stale = false`
// turns that off and lets the last response to arrive win.
//
// Rust concepts:
// - Arc<Inner> so clones of the controller can move into spawned tasks
// - tokio::sync::Mutex because the lock is taken across .await points
// - futures::future::join to poll both requests on the same task
// =============================================================================

use std::sync::Arc;

use futures::future::join;
use tokio::sync::Mutex;

use super::busy::BusyCounter;
use super::state::PaginationState;
use crate::error::{FetchError, PagerError};
use crate::github::GithubApi;
use crate::view::{PaginationControls, ProfileView, RepoGrid, View};

/// What happened to one request of a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rendered,
    Failed,
    /// A newer cycle started before this response arrived.
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleOutcome {
    pub profile: Outcome,
    pub repositories: Outcome,
}

impl CycleOutcome {
    pub fn all_rendered(&self) -> bool {
        self.profile == Outcome::Rendered && self.repositories == Outcome::Rendered
    }
}

// Everything a cycle needs, copied out of the shared state when it starts.
#[derive(Debug, Clone)]
struct Ticket {
    generation: u64,
    username: String,
    page: u32,
    per_page: u32,
}

#[derive(Debug, Default)]
struct Shared {
    pagination: PaginationState,
    generation: u64,
    // Generation whose repository page is on screen, if any.
    repos_shown: Option<u64>,
}

impl Shared {
    fn next_ticket(&mut self) -> Ticket {
        self.generation += 1;
        Ticket {
            generation: self.generation,
            username: self.pagination.current_username().to_string(),
            page: self.pagination.current_page(),
            per_page: self.pagination.page_size(),
        }
    }
}

struct Inner<A, V> {
    api: Arc<A>,
    view: Arc<V>,
    shared: Mutex<Shared>,
    busy: BusyCounter,
    discard_stale: bool,
}

/// Cheap to clone; clones share the same state, view and API client.
pub struct Controller<A, V> {
    inner: Arc<Inner<A, V>>,
}

impl<A, V> Clone for Controller<A, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: GithubApi, V: View> Controller<A, V> {
    pub fn new(api: Arc<A>, view: Arc<V>, discard_stale: bool) -> Self {
        Self {
            inner: Arc::new(Inner {
                api,
                view,
                shared: Mutex::new(Shared::default()),
                busy: BusyCounter::new(),
                discard_stale,
            }),
        }
    }

    #[cfg(test)]
    pub async fn state(&self) -> PaginationState {
        self.inner.shared.lock().await.pagination.clone()
    }

    /// Starts a search for `input` (trimmed).
    ///
    /// Searching for a different user goes back to page 1; repeating the
    /// same user refetches the current page.
    pub async fn search(&self, input: &str) -> Result<CycleOutcome, PagerError> {
        let ticket = {
            let mut shared = self.inner.shared.lock().await;
            let begun = shared.pagination.begin_search(input);
            match begun {
                Ok(reset) => {
                    tracing::debug!(
                        username = shared.pagination.current_username(),
                        reset,
                        "search"
                    );
                    shared.next_ticket()
                }
                Err(err) => {
                    drop(shared);
                    return Err(self.reject(err));
                }
            }
        };
        Ok(self.fetch_cycle(ticket).await)
    }

    /// Moves `delta` pages forward (or back, when negative) and refetches.
    pub async fn change_page(&self, delta: i64) -> Result<CycleOutcome, PagerError> {
        self.navigate(|pagination| pagination.shift(delta)).await
    }

    /// Jumps to an explicit page number and refetches.
    pub async fn go_to_page(&self, page: u32) -> Result<CycleOutcome, PagerError> {
        self.navigate(|pagination| pagination.jump(page)).await
    }

    async fn navigate(
        &self,
        step: impl FnOnce(&mut PaginationState),
    ) -> Result<CycleOutcome, PagerError> {
        let ticket = {
            let mut shared = self.inner.shared.lock().await;
            if shared.pagination.current_username().is_empty() {
                drop(shared);
                return Err(self.reject(PagerError::EmptyUsername));
            }
            step(&mut shared.pagination);
            shared.next_ticket()
        };
        Ok(self.fetch_cycle(ticket).await)
    }

    fn reject(&self, err: PagerError) -> PagerError {
        tracing::warn!("{}", err);
        self.inner.view.notify_error(&err.to_string());
        err
    }

    async fn fetch_cycle(&self, ticket: Ticket) -> CycleOutcome {
        tracing::debug!(
            generation = ticket.generation,
            username = %ticket.username,
            page = ticket.page,
            "fetch cycle started"
        );

        // Neither future is spawned; both run on this task until done.
        let (profile, repositories) =
            join(self.load_profile(&ticket), self.load_repositories(&ticket)).await;

        CycleOutcome {
            profile,
            repositories,
        }
    }

    async fn load_profile(&self, ticket: &Ticket) -> Outcome {
        let inner = &*self.inner;
        let _busy = inner.busy.begin(&*inner.view);

        let result = inner.api.fetch_profile(&ticket.username).await;

        // Staleness is decided under the lock, so no newer cycle can start
        // between the check and the render.
        let mut shared = inner.shared.lock().await;
        if self.is_stale(&shared, ticket) {
            tracing::debug!(generation = ticket.generation, "dropping stale profile response");
            return Outcome::Discarded;
        }

        match result {
            Ok(profile) => {
                shared.pagination.apply_repo_count(profile.public_repos);
                inner.view.show_profile(&ProfileView::from_profile(&profile));

                // The repo page of this cycle got here first and drew the
                // controls with the old page count.
                if shared.repos_shown == Some(ticket.generation) {
                    inner
                        .view
                        .show_pagination(&PaginationControls::from_state(&shared.pagination));
                }
                Outcome::Rendered
            }
            Err(err) => {
                drop(shared);
                self.report(err);
                Outcome::Failed
            }
        }
    }

    async fn load_repositories(&self, ticket: &Ticket) -> Outcome {
        let inner = &*self.inner;
        let _busy = inner.busy.begin(&*inner.view);

        let result = inner
            .api
            .fetch_repositories(&ticket.username, ticket.page, ticket.per_page)
            .await;

        let mut shared = inner.shared.lock().await;
        if self.is_stale(&shared, ticket) {
            tracing::debug!(generation = ticket.generation, "dropping stale repository page");
            return Outcome::Discarded;
        }

        match result {
            Ok(repos) => {
                inner.view.show_repositories(&RepoGrid::from_repositories(&repos));
                inner
                    .view
                    .show_pagination(&PaginationControls::from_state(&shared.pagination));
                shared.repos_shown = Some(ticket.generation);
                Outcome::Rendered
            }
            Err(err) => {
                drop(shared);
                self.report(err);
                Outcome::Failed
            }
        }
    }

    fn is_stale(&self, shared: &Shared, ticket: &Ticket) -> bool {
        self.inner.discard_stale && shared.generation != ticket.generation
    }

    fn report(&self, err: FetchError) {
        if err.is_rate_limited() {
            tracing::warn!(resource = %err.resource(), "rate limit exhausted");
        } else {
            tracing::error!(resource = %err.resource(), "fetch failed: {:?}", err);
        }
        self.inner.view.notify_error(&err.to_string());
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why `drop(shared)` before report()?
//    - `shared` is a MutexGuard; the lock is held until it goes out of scope
//    - Dropping it early means the view callback never runs with the lock
//      held, so a slow notify_error can't stall the other request
//
// 2. What does `let _busy = ...` do?
//    - Binds the guard for the rest of the function
//    - `let _ = ...` (no name) would drop it immediately and the busy
//      indicator would switch off before the request even starts
//
// 3. Why is Clone written by hand?
//    - #[derive(Clone)] would demand A: Clone and V: Clone
//    - Only the Arc is cloned, so neither needs to be
// -----------------------------------------------------------------------------
