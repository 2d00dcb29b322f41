// src/main.rs
// =============================================================================
// Entry point of gh-repo-pager.
//
// What happens here:
// 1. Load .env, parse command-line arguments, set up logging
// 2. Build the Config and the GitHub client
// 3. Dispatch to `show` (one page, then exit) or `browse` (interactive)
// 4. Exit with a meaningful code:
//      0 = everything rendered
//      1 = at least one request failed (rate limit, unknown user, ...)
//      2 = internal or usage error
// =============================================================================

mod cli;
mod config;
mod error;
mod github;
mod pager;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{BrowseInput, Cli, Commands};
use config::Config;
use error::PagerError;
use github::{GithubApi, GithubClient};
use pager::{Controller, CycleOutcome};
use view::{Snapshot, SnapshotView, TerminalView};

#[tokio::main]
async fn main() {
    // A missing .env is fine; real environment variables still apply.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so `show --json` output stays clean on stdout.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}

async fn run(cli: Cli) -> Result<i32> {
    let config = Config::from_cli(&cli)?;
    tracing::debug!(api = %config.api_base_url, authenticated = config.token.is_some(), "configuration loaded");

    let api = Arc::new(GithubClient::new(&config).context("Failed to build HTTP client")?);

    match cli.command {
        Commands::Show {
            username,
            page,
            json,
        } => handle_show(api, &config, &username, page, json).await,
        Commands::Browse { username } => handle_browse(api, &config, username).await,
    }
}

// Handles the 'show' subcommand.
async fn handle_show(
    api: Arc<GithubClient>,
    config: &Config,
    username: &str,
    page: u32,
    json: bool,
) -> Result<i32> {
    let (snapshot, outcome) = render_page(api, config.discard_stale, username, page).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print_snapshot(&snapshot);
    }

    Ok(if outcome.all_rendered() { 0 } else { 1 })
}

// Runs the cycles for one page of `username` and returns what ended up on it.
//
// A `page` beyond the first needs the profile's repo count before it can be
// clamped, so a first cycle loads page 1. Its output is thrown away: the
// snapshot (errors included) only describes the cycle for `page`.
async fn render_page<A: GithubApi>(
    api: Arc<A>,
    discard_stale: bool,
    username: &str,
    page: u32,
) -> Result<(Snapshot, CycleOutcome), PagerError> {
    let view = Arc::new(SnapshotView::new());
    let controller = Controller::new(api, Arc::clone(&view), discard_stale);

    let mut outcome = controller.search(username).await?;
    if page > 1 {
        view.clear();
        outcome = controller.go_to_page(page).await?;
    }

    Ok((view.snapshot(), outcome))
}

fn print_snapshot(snapshot: &Snapshot) {
    for message in &snapshot.errors {
        eprintln!("⚠️  {message}");
    }
    if let Some(profile) = &snapshot.profile {
        println!("{}", view::format_profile(profile));
    }
    if let Some(grid) = &snapshot.repositories {
        println!("{}", view::format_grid(grid));
    }
    if let Some(controls) = &snapshot.pagination {
        println!("{}", view::format_pagination(controls));
    }
}

// Handles the 'browse' subcommand.
//
// Each command starts its cycle on a separate task and the prompt keeps
// reading, so a slow response never blocks typing the next username.
async fn handle_browse(
    api: Arc<GithubClient>,
    config: &Config,
    username: Option<String>,
) -> Result<i32> {
    let controller = Controller::new(api, Arc::new(TerminalView::new()), config.discard_stale);

    println!("🔍 Type a GitHub username and press Enter.");
    println!("   :n next page, :p previous page, :<number> jump, :q quit");

    if let Some(username) = username {
        spawn_search(&controller, username);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        match BrowseInput::parse(&line) {
            BrowseInput::Search(username) => spawn_search(&controller, username),
            BrowseInput::Next => spawn_page_change(&controller, 1),
            BrowseInput::Prev => spawn_page_change(&controller, -1),
            BrowseInput::Jump(page) => {
                let controller = controller.clone();
                tokio::spawn(async move {
                    log_cycle(controller.go_to_page(page).await);
                });
            }
            BrowseInput::Quit => break,
            BrowseInput::Unknown(command) => {
                eprintln!("Unknown command ':{command}'. Use :n, :p, :<number> or :q");
            }
        }
    }

    Ok(0)
}

type BrowseController = Controller<GithubClient, TerminalView>;

fn spawn_search(controller: &BrowseController, username: String) {
    let controller = controller.clone();
    tokio::spawn(async move {
        log_cycle(controller.search(&username).await);
    });
}

fn spawn_page_change(controller: &BrowseController, delta: i64) {
    let controller = controller.clone();
    tokio::spawn(async move {
        log_cycle(controller.change_page(delta).await);
    });
}

// Failures were already shown to the user by the view.
fn log_cycle(result: Result<CycleOutcome, PagerError>) {
    if let Ok(outcome) = result {
        tracing::debug!(?outcome, "fetch cycle finished");
    }
}
