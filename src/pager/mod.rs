// src/pager/mod.rs
// =============================================================================
// Pagination: the cursor, the page-number strip, and the controller that
// drives fetch cycles.
// =============================================================================

mod busy;
mod controller;
mod state;
mod window;

pub use controller::{Controller, CycleOutcome};
pub use state::PaginationState;
pub use window::page_strip;
