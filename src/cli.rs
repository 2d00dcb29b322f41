// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - show:   fetch one page for one user, print it, exit
// - browse: interactive session (type a username, then :n / :p / :3 ...)
//
// Global flags configure the API connection and apply to both.
// =============================================================================

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_API_URL;

#[derive(Parser, Debug)]
#[command(
    name = "gh-repo-pager",
    version,
    about = "Browse a GitHub user's profile and repositories page by page",
    long_about = "gh-repo-pager shows a GitHub user's profile together with their repositories, \
                  ten at a time, most recently updated first."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the GitHub REST API
    #[arg(long, global = true, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Personal access token, sent as a Bearer token
    ///
    /// Unauthenticated requests are limited to 60 per hour.
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Let late responses from an earlier search overwrite newer results
    #[arg(long, global = true)]
    pub allow_stale: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one page of a user's repositories
    ///
    /// Example: gh-repo-pager show octocat --page 2
    Show {
        /// GitHub username
        username: String,

        /// Page to show (clamped to the user's last page)
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Print the rendered result as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Interactive session
    ///
    /// Type a username and press Enter to search. Then:
    ///   :n / :next     next page
    ///   :p / :prev     previous page
    ///   :<number>      jump to a page
    ///   :q / :quit     exit
    Browse {
        /// Search this user right away
        username: Option<String>,
    },
}

/// One line typed into the `browse` prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseInput {
    Search(String),
    Next,
    Prev,
    Jump(u32),
    Quit,
    Unknown(String),
}

impl BrowseInput {
    pub fn parse(line: &str) -> Self {
        let Some(command) = line.trim().strip_prefix(':') else {
            return BrowseInput::Search(line.to_string());
        };

        match command.trim() {
            "n" | "next" => BrowseInput::Next,
            "p" | "prev" => BrowseInput::Prev,
            "q" | "quit" => BrowseInput::Quit,
            other => match other.parse::<u32>() {
                Ok(page) => BrowseInput::Jump(page),
                Err(_) => BrowseInput::Unknown(other.to_string()),
            },
        }
    }
}
