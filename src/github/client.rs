// src/github/client.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Two endpoints are used:
//   GET /users/{username}                 -> profile
//   GET /users/{username}/repos?...       -> one page of repositories
//
// Every response goes through the same checks, in this order:
//   1. X-RateLimit-Remaining < 1  -> FetchError::RateLimited
//   2. non-2xx status             -> FetchError::Status
//   3. JSON body                  -> parsed model or FetchError::Decode
//
// The controller only sees the GithubApi trait, so tests can swap the real
// client for an in-memory fake.
// =============================================================================

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use super::models::{Repository, UserProfile};
use super::rate_limit;
use crate::config::Config;
use crate::error::{FetchError, Resource};

// Anything that can answer the two questions a fetch cycle asks.
//
// Send + Sync because the controller shares it between spawned tasks.
#[async_trait]
pub trait GithubApi: Send + Sync {
    async fn fetch_profile(&self, username: &str) -> Result<UserProfile, FetchError>;

    async fn fetch_repositories(
        &self,
        username: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Repository>, FetchError>;
}

/// reqwest-backed implementation of [`GithubApi`].
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    base_url: Url,
}

impl GithubClient {
    // Builds the client once; reqwest pools connections behind the clone-able
    // Client handle, so every request of every cycle reuses it.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);

        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| anyhow::anyhow!("GitHub token contains invalid characters"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    // Builds {base}/users/{username}[/repos].
    //
    // path_segments_mut() percent-encodes the username, so a name containing
    // '/' or '?' can't escape its path segment.
    fn user_endpoint(&self, username: &str, repos: bool) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("users").push(username);
            if repos {
                segments.push("repos");
            }
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        resource: Resource,
    ) -> Result<T, FetchError> {
        let response = request
            .send()
            .await
            .map_err(|source| FetchError::Transport { resource, source })?;

        if rate_limit::is_exhausted(response.headers()) {
            return Err(FetchError::RateLimited { resource });
        }

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { resource, status });
        }

        tracing::debug!(
            %status,
            remaining = ?rate_limit::remaining(response.headers()),
            "{} response received",
            resource
        );

        response
            .json::<T>()
            .await
            .map_err(|source| FetchError::Decode { resource, source })
    }
}

#[async_trait]
impl GithubApi for GithubClient {
    async fn fetch_profile(&self, username: &str) -> Result<UserProfile, FetchError> {
        let url = self.user_endpoint(username, false);
        tracing::debug!(%url, "fetching profile");
        self.get_json(self.http.get(url), Resource::Profile).await
    }

    async fn fetch_repositories(
        &self,
        username: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Repository>, FetchError> {
        let url = self.user_endpoint(username, true);
        tracing::debug!(%url, page, per_page, "fetching repositories");

        let request = self.http.get(url).query(&[
            ("per_page", per_page.to_string()),
            ("page", page.to_string()),
            ("sort", "updated".to_string()),
            ("direction", "desc".to_string()),
        ]);
        self.get_json(request, Resource::Repositories).await
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why #[async_trait]?
//    - Plain `async fn` in a trait can't be used behind Arc<dyn ...> or
//      shared between tokio tasks without extra Send bounds
//    - async_trait rewrites each method to return a boxed, Send future
//
// 2. What is DeserializeOwned?
//    - A serde bound meaning "can be built from JSON without borrowing it"
//    - get_json::<UserProfile>() and get_json::<Vec<Repository>>() share
//      one implementation thanks to it
//
// 3. Why map_err everywhere?
//    - reqwest::Error alone doesn't say WHICH request failed
//    - Wrapping it in FetchError { resource, .. } keeps that context
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, token: Option<&str>) -> GithubClient {
        let config = Config {
            api_base_url: Url::parse(&server.uri()).unwrap(),
            token: token.map(str::to_string),
            timeout: Duration::from_secs(5),
            user_agent: "gh-repo-pager-tests".to_string(),
            discard_stale: true,
        };
        GithubClient::new(&config).unwrap()
    }

    fn octocat() -> serde_json::Value {
        json!({
            "login": "octocat",
            "name": "The Octocat",
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "html_url": "https://github.com/octocat",
            "bio": null,
            "location": "San Francisco",
            "twitter_username": null,
            "blog": "https://github.blog",
            "public_repos": 25
        })
    }

    #[test]
    fn test_user_endpoint_encodes_username() {
        let config = Config {
            api_base_url: Url::parse("https://api.github.com").unwrap(),
            token: None,
            timeout: Duration::from_secs(5),
            user_agent: "test".to_string(),
            discard_stale: true,
        };
        let client = GithubClient::new(&config).unwrap();

        assert_eq!(
            client.user_endpoint("octocat", true).as_str(),
            "https://api.github.com/users/octocat/repos"
        );
        assert_eq!(
            client.user_endpoint("a/b?c", false).as_str(),
            "https://api.github.com/users/a%2Fb%3Fc"
        );
    }

    #[tokio::test]
    async fn test_fetch_profile_ok() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat"))
            .and(header("accept", "application/vnd.github.v3+json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-RateLimit-Remaining", "59")
                    .set_body_json(octocat()),
            )
            .mount(&server)
            .await;

        let profile = client_for(&server, None)
            .fetch_profile("octocat")
            .await
            .unwrap();
        assert_eq!(profile.login, "octocat");
        assert_eq!(profile.public_repos, 25);
    }

    #[tokio::test]
    async fn test_fetch_repositories_sends_paging_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .and(query_param("per_page", "10"))
            .and(query_param("page", "2"))
            .and(query_param("sort", "updated"))
            .and(query_param("direction", "desc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "name": "Spoon-Knife",
                    "html_url": "https://github.com/octocat/Spoon-Knife",
                    "description": "This repo is for demonstration purposes only.",
                    "topics": ["demo"]
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let repos = client_for(&server, None)
            .fetch_repositories("octocat", 2, 10)
            .await
            .unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].topics, vec!["demo".to_string()]);
    }

    #[tokio::test]
    async fn test_rate_limit_checked_before_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat"))
            .respond_with(
                ResponseTemplate::new(403).insert_header("X-RateLimit-Remaining", "0"),
            )
            .mount(&server)
            .await;

        let err = client_for(&server, None)
            .fetch_profile("octocat")
            .await
            .unwrap_err();
        assert!(err.is_rate_limited());
        assert_eq!(err.resource(), Resource::Profile);
    }

    #[tokio::test]
    async fn test_rate_limit_on_successful_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-RateLimit-Remaining", "0")
                    .set_body_json(json!([])),
            )
            .mount(&server)
            .await;

        let err = client_for(&server, None)
            .fetch_repositories("octocat", 1, 10)
            .await
            .unwrap_err();
        assert!(err.is_rate_limited());
        assert_eq!(err.resource(), Resource::Repositories);
    }

    #[tokio::test]
    async fn test_unknown_user_is_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/nobody-here"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server, None)
            .fetch_profile("nobody-here")
            .await
            .unwrap_err();
        match err {
            FetchError::Status { status, .. } => assert_eq!(status, StatusCode::NOT_FOUND),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server, None)
            .fetch_repositories("octocat", 1, 10)
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_token_sent_as_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat"))
            .and(header("authorization", "Bearer s3cret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(octocat()))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server, Some("s3cret"))
            .fetch_profile("octocat")
            .await;
        assert!(result.is_ok());
    }
}
