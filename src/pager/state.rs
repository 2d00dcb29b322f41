// src/pager/state.rs
// =============================================================================
// The pagination cursor: which user, which page, how many pages.
//
// Invariants kept by every method here:
// - current_page >= 1
// - current_page <= total_pages whenever total_pages >= 1 and the page was
//   set through shift() or jump()
// - current_page goes back to 1 when (and only when) the username changes
// - total_pages goes back to 0 at the same moment, so the previous user's
//   page count never limits the new user's navigation
//
// Rust concepts:
// - Private fields + getters: only methods here can break the invariants
// - Result<bool, PagerError>: "did it work" and "what changed" in one value
// - i64 arithmetic for deltas so `page + delta` can't underflow a u32
// =============================================================================

use crate::error::PagerError;

/// Repositories per page. GitHub allows up to 100; the UI shows 10.
pub const PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    current_page: u32,
    total_pages: u32,
    page_size: u32,
    current_username: String,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            page_size: PAGE_SIZE,
            current_username: String::new(),
        }
    }
}

impl PaginationState {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn current_username(&self) -> &str {
        &self.current_username
    }

    /// Records a new search. Returns `true` when the page was reset to 1.
    ///
    /// Repeating the previous username keeps the current page, so pressing
    /// Enter again just refreshes what is on screen.
    pub fn begin_search(&mut self, input: &str) -> Result<bool, PagerError> {
        let username = input.trim();
        if username.is_empty() {
            return Err(PagerError::EmptyUsername);
        }

        // A different user starts from scratch: page 1, and no page count
        // until their own profile arrives.
        let reset = username != self.current_username;
        if reset {
            self.current_page = 1;
            self.total_pages = 0;
            self.current_username = username.to_string();
        }
        Ok(reset)
    }

    /// Moves the cursor by `delta` pages, clamped into `[1, total_pages]`.
    pub fn shift(&mut self, delta: i64) {
        let target = i64::from(self.current_page).saturating_add(delta);
        self.current_page = self.clamp(target);
    }

    /// Jumps straight to `page`, clamped like [`shift`](Self::shift).
    pub fn jump(&mut self, page: u32) {
        self.current_page = self.clamp(i64::from(page));
    }

    /// Recomputes `total_pages` from the profile's public repository count.
    pub fn apply_repo_count(&mut self, public_repos: u32) {
        self.total_pages = public_repos.div_ceil(self.page_size);
    }

    // Before the first profile arrives total_pages is 0; the page stays at 1
    // rather than dropping to 0.
    fn clamp(&self, page: i64) -> u32 {
        let upper = i64::from(self.total_pages.max(1));
        // The clamped value lies in [1, u32::MAX], so the conversion can't fail.
        u32::try_from(page.clamp(1, upper)).unwrap_or(1)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why are the fields private?
//    - Anyone could otherwise write `state.current_page = 0`
//    - With getters only, every change goes through shift/jump/begin_search,
//      which all clamp
//
// 2. What does saturating_add do?
//    - Adds, but sticks at i64::MAX / i64::MIN instead of overflowing
//    - `change_page(i64::MAX)` then simply lands on the last page
//
// 3. Why u32::try_from(...).unwrap_or(1)?
//    - Converting i64 -> u32 can fail in general, so Rust makes us say what
//      happens then; after clamp() it never does, but no panic is possible
// -----------------------------------------------------------------------------
