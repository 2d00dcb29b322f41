// src/github/mod.rs
// =============================================================================
// Everything that talks to api.github.com.
//
// - client: the GithubApi trait and its reqwest implementation
// - models: the payload structs we deserialize
// - rate_limit: X-RateLimit-Remaining parsing
// =============================================================================

mod client;
mod models;
mod rate_limit;

pub use client::{GithubApi, GithubClient};
pub use models::{Repository, UserProfile};

#[cfg(test)]
pub mod testing;
