// src/view/terminal.rs
// =============================================================================
// Prints view models to the terminal.
//
// Formatting lives in plain functions returning Strings so it can be tested
// without capturing stdout; TerminalView only decides where each goes.
// =============================================================================

use std::fmt::Write as _;

use super::{PageItem, PaginationControls, ProfileView, RepoGrid, View};

#[derive(Debug, Default)]
pub struct TerminalView;

impl TerminalView {
    pub fn new() -> Self {
        Self
    }
}

impl View for TerminalView {
    fn set_busy(&self, busy: bool) {
        if busy {
            println!("⏳ Loading...");
        }
    }

    fn show_profile(&self, profile: &ProfileView) {
        println!("{}", format_profile(profile));
    }

    fn show_repositories(&self, grid: &RepoGrid) {
        println!("{}", format_grid(grid));
    }

    fn show_pagination(&self, controls: &PaginationControls) {
        println!("{}", format_pagination(controls));
    }

    fn notify_error(&self, message: &str) {
        eprintln!("⚠️  {message}");
    }
}

pub fn format_profile(profile: &ProfileView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "👤 {}  <{}>", profile.display_name, profile.profile_url);
    let _ = writeln!(out, "   avatar: {}", profile.avatar_url);

    if let Some(bio) = &profile.bio {
        let _ = writeln!(out, "   {bio}");
    }
    if let Some(location) = &profile.location {
        let _ = writeln!(out, "   📍 {location}");
    }
    if let Some(twitter) = &profile.twitter {
        let _ = writeln!(out, "   𝕏 {}  <{}>", twitter.label, twitter.url);
    }
    if let Some(blog) = &profile.blog {
        let _ = writeln!(out, "   🔗 {}", blog.url);
    }
    out
}

pub fn format_grid(grid: &RepoGrid) -> String {
    if let RepoGrid::Empty { message } = grid {
        return format!("   {message}\n");
    }

    let mut out = String::new();
    for card in grid.cards() {
        let _ = writeln!(out, "📦 {}  <{}>", card.name, card.url);
        let _ = writeln!(out, "   {}", card.description);
        if !card.topics.is_empty() {
            let tags: Vec<String> = card.topics.iter().map(|t| format!("#{t}")).collect();
            let _ = writeln!(out, "   {}", tags.join(" "));
        }
    }
    out
}

// "◀ :p | 1 ... 4 [5] 6 ... 9 | :n ▶   Page 5 of 9"
pub fn format_pagination(controls: &PaginationControls) -> String {
    let prev = if controls.prev_enabled { "◀ :p" } else { "    " };
    let next = if controls.next_enabled { ":n ▶" } else { "    " };

    let strip: Vec<String> = controls
        .pages
        .iter()
        .map(|item| match item {
            PageItem::Page {
                number,
                current: true,
            } => format!("[{number}]"),
            PageItem::Page { number, .. } => number.to_string(),
            PageItem::Ellipsis => "...".to_string(),
        })
        .collect();

    format!("{prev} | {} | {next}   {}", strip.join(" "), controls.label)
}
