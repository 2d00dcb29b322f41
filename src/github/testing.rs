// src/github/testing.rs
// =============================================================================
// An in-memory stand-in for the GitHub API, shared by the controller tests
// and the `show` command tests.
//
// Each known user has a repo count, a response delay per endpoint and
// optional rate-limit flags. Unknown users answer 404 on both endpoints.
// Every request is recorded as "profile:<user>" or "repos:<user>:<page>".
// =============================================================================

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use super::{GithubApi, Repository, UserProfile};
use crate::error::{FetchError, Resource};

#[derive(Debug, Clone, Default)]
pub struct FakeUser {
    pub public_repos: u32,
    pub profile_delay: Duration,
    pub repos_delay: Duration,
    pub profile_rate_limited: bool,
    pub repos_rate_limited: bool,
}

pub fn user(public_repos: u32) -> FakeUser {
    FakeUser {
        public_repos,
        ..FakeUser::default()
    }
}

#[derive(Default)]
pub struct FakeApi {
    users: HashMap<String, FakeUser>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn with_user(mut self, login: &str, user: FakeUser) -> Self {
        self.users.insert(login.to_string(), user);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    // Records the call, then waits the endpoint's delay for known users.
    async fn lookup(
        &self,
        username: &str,
        call: String,
        delay: fn(&FakeUser) -> Duration,
    ) -> Option<FakeUser> {
        self.calls.lock().unwrap().push(call);
        let user = self.users.get(username).cloned();
        if let Some(user) = &user {
            tokio::time::sleep(delay(user)).await;
        }
        user
    }
}

#[async_trait]
impl GithubApi for FakeApi {
    async fn fetch_profile(&self, username: &str) -> Result<UserProfile, FetchError> {
        let resource = Resource::Profile;
        let call = format!("profile:{username}");
        let Some(user) = self.lookup(username, call, |u| u.profile_delay).await else {
            return Err(FetchError::Status {
                resource,
                status: StatusCode::NOT_FOUND,
            });
        };
        if user.profile_rate_limited {
            return Err(FetchError::RateLimited { resource });
        }
        Ok(UserProfile {
            login: username.to_string(),
            name: Some(format!("{username} (name)")),
            avatar_url: format!("https://avatars.example/{username}"),
            html_url: format!("https://github.com/{username}"),
            bio: None,
            location: None,
            twitter_username: None,
            blog: None,
            public_repos: user.public_repos,
        })
    }

    async fn fetch_repositories(
        &self,
        username: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Repository>, FetchError> {
        let resource = Resource::Repositories;
        let call = format!("repos:{username}:{page}");
        let Some(user) = self.lookup(username, call, |u| u.repos_delay).await else {
            return Err(FetchError::Status {
                resource,
                status: StatusCode::NOT_FOUND,
            });
        };
        if user.repos_rate_limited {
            return Err(FetchError::RateLimited { resource });
        }

        let skip = (page - 1) * per_page;
        let count = user.public_repos.saturating_sub(skip).min(per_page);
        Ok((0..count)
            .map(|i| Repository {
                name: format!("{username}-repo-{}", skip + i + 1),
                html_url: format!("https://github.com/{username}/repo-{}", skip + i + 1),
                description: None,
                topics: Vec::new(),
            })
            .collect())
    }
}
