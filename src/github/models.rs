// src/github/models.rs
// =============================================================================
// The subset of GitHub's JSON payloads this tool actually reads.
//
// serde ignores every field we don't declare, so these structs stay small
// even though the real responses carry dozens of fields.
// =============================================================================

use serde::Deserialize;

/// A user profile from `GET /users/{username}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub twitter_username: Option<String>,
    pub blog: Option<String>,
    /// Organisations and ghost accounts may omit this; treat as zero.
    #[serde(default)]
    pub public_repos: u32,
}

/// One entry of `GET /users/{username}/repos`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Repository {
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_with_nulls() {
        let json = r#"{
            "login": "octocat",
            "id": 583231,
            "name": null,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "html_url": "https://github.com/octocat",
            "bio": null,
            "location": "San Francisco",
            "twitter_username": null,
            "blog": "https://github.blog",
            "public_repos": 8,
            "followers": 9000
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.login, "octocat");
        assert_eq!(profile.name, None);
        assert_eq!(profile.location.as_deref(), Some("San Francisco"));
        assert_eq!(profile.public_repos, 8);
    }

    #[test]
    fn test_repository_without_topics() {
        let json = r#"{
            "name": "Hello-World",
            "html_url": "https://github.com/octocat/Hello-World",
            "description": "My first repository on GitHub!"
        }"#;

        let repo: Repository = serde_json::from_str(json).unwrap();
        assert!(repo.topics.is_empty());
        assert_eq!(
            repo.description.as_deref(),
            Some("My first repository on GitHub!")
        );
    }
}
