// src/view/model.rs
// =============================================================================
// View models: plain data describing what the page should show.
//
// The controller builds these from API payloads and hands them to a View.
// Nothing here knows how it will be drawn (terminal, JSON, a test recorder),
// which keeps all the display rules (fallbacks, truncation, hidden fields)
// testable on their own.
//
// Rust concepts:
// - #[serde(tag = "kind")] turns enums into {"kind": "...", ...} objects
// - Option<T> with skip_serializing_if for fields that are hidden, not blank
// =============================================================================

use serde::Serialize;

use crate::github::{Repository, UserProfile};
use crate::pager::{page_strip, PaginationState};

/// Descriptions longer than this many characters are cut and get "...".
pub const DESCRIPTION_LIMIT: usize = 150;
pub const NO_DESCRIPTION: &str = "No description available";
pub const NO_REPOSITORIES: &str = "No repositories found.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub display_name: String,
    pub profile_url: String,
    pub avatar_url: String,
    pub avatar_alt: String,
    // None means "hide this field".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<SocialLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog: Option<SocialLink>,
}

impl ProfileView {
    pub fn from_profile(profile: &UserProfile) -> Self {
        let display_name = present(&profile.name)
            .unwrap_or(profile.login.as_str())
            .to_string();

        Self {
            avatar_alt: format!("{display_name}'s avatar"),
            display_name,
            profile_url: profile.html_url.clone(),
            avatar_url: profile.avatar_url.clone(),
            bio: present(&profile.bio).map(str::to_string),
            location: present(&profile.location).map(str::to_string),
            twitter: present(&profile.twitter_username).map(|handle| SocialLink {
                label: handle.to_string(),
                url: format!("https://twitter.com/{handle}"),
            }),
            blog: present(&profile.blog).map(|blog| SocialLink {
                label: blog.to_string(),
                url: blog.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoCard {
    pub name: String,
    pub url: String,
    pub description: String,
    pub topics: Vec<String>,
}

impl RepoCard {
    pub fn from_repository(repo: &Repository) -> Self {
        Self {
            name: repo.name.clone(),
            url: repo.html_url.clone(),
            description: describe(repo.description.as_deref()),
            topics: repo.topics.clone(),
        }
    }
}

/// The repository area: either cards or a single placeholder message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RepoGrid {
    Empty { message: String },
    Cards { cards: Vec<RepoCard> },
}

impl RepoGrid {
    pub fn from_repositories(repos: &[Repository]) -> Self {
        if repos.is_empty() {
            return RepoGrid::Empty {
                message: NO_REPOSITORIES.to_string(),
            };
        }
        RepoGrid::Cards {
            cards: repos.iter().map(RepoCard::from_repository).collect(),
        }
    }

    pub fn cards(&self) -> &[RepoCard] {
        match self {
            RepoGrid::Empty { .. } => &[],
            RepoGrid::Cards { cards } => cards,
        }
    }
}

/// One entry of the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageItem {
    /// A clickable page number.
    Page { number: u32, current: bool },
    /// A non-clickable gap marker.
    Ellipsis,
}

impl PageItem {
    pub fn page(number: u32, current_page: u32) -> Self {
        PageItem::Page {
            number,
            current: number == current_page,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationControls {
    pub current_page: u32,
    pub total_pages: u32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub label: String,
    pub pages: Vec<PageItem>,
}

impl PaginationControls {
    pub fn from_state(state: &PaginationState) -> Self {
        let current = state.current_page();
        let total = state.total_pages();

        Self {
            current_page: current,
            total_pages: total,
            prev_enabled: current > 1,
            next_enabled: current < total,
            label: format!("Page {current} of {total}"),
            pages: page_strip(current, total),
        }
    }

    /// Numbers of the clickable entries, in display order.
    #[cfg(test)]
    pub fn page_numbers(&self) -> Vec<u32> {
        self.pages
            .iter()
            .filter_map(|item| match item {
                PageItem::Page { number, .. } => Some(*number),
                PageItem::Ellipsis => None,
            })
            .collect()
    }
}

// GitHub sends "" as often as null for unset profile fields.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

fn describe(description: Option<&str>) -> String {
    match description.filter(|d| !d.is_empty()) {
        None => NO_DESCRIPTION.to_string(),
        Some(text) => match text.char_indices().nth(DESCRIPTION_LIMIT) {
            Some((cut, _)) => format!("{}...", &text[..cut]),
            None => text.to_string(),
        },
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why char_indices().nth() instead of &text[..150]?
//    - String slicing is by byte; cutting inside a multi-byte character
//      like 'é' panics
//    - char_indices gives the byte offset of the 151st character, which is
//      always a valid cut point
//
// 2. as_deref()
//    - Turns &Option<String> into Option<&str> without cloning
//    - Lets present() filter out "" and hand back a borrowed &str
// -----------------------------------------------------------------------------
