// src/error.rs
// =============================================================================
// Error types shared by the GitHub client and the pagination controller.
//
// Two families:
// - FetchError: something went wrong with one API request. The Display text
//   is exactly what the user gets to see in the error notification.
// - PagerError: the controller refused to start a fetch cycle.
//
// The application layer (main.rs) wraps everything else in anyhow.
// =============================================================================

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Which of the two requests of a fetch cycle an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Profile,
    Repositories,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Profile => f.write_str("user data"),
            Resource::Repositories => f.write_str("repositories"),
        }
    }
}

/// Failure of a single API request.
#[derive(Debug, Error)]
pub enum FetchError {
    /// `X-RateLimit-Remaining` reported no requests left.
    #[error("API rate limit exceeded. Please try again later.")]
    RateLimited { resource: Resource },

    /// The API answered with a non-2xx status.
    #[error("{}", status_message(.resource))]
    Status {
        resource: Resource,
        status: StatusCode,
    },

    /// The request never got a response (DNS, TLS, timeout, ...).
    #[error("An error occurred while fetching {resource}: {source}")]
    Transport {
        resource: Resource,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the JSON we expected.
    #[error("Unable to read {resource} from the response: {source}")]
    Decode {
        resource: Resource,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    pub fn resource(&self) -> Resource {
        match self {
            FetchError::RateLimited { resource }
            | FetchError::Status { resource, .. }
            | FetchError::Transport { resource, .. }
            | FetchError::Decode { resource, .. } => *resource,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, FetchError::RateLimited { .. })
    }
}

fn status_message(resource: &Resource) -> &'static str {
    match resource {
        Resource::Profile => "Invalid username or unable to fetch user data.",
        Resource::Repositories => "Unable to fetch repositories.",
    }
}

/// Reasons the controller will not start a fetch cycle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PagerError {
    #[error("Please enter a GitHub username.")]
    EmptyUsername,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages_per_resource() {
        let profile = FetchError::Status {
            resource: Resource::Profile,
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(
            profile.to_string(),
            "Invalid username or unable to fetch user data."
        );

        let repos = FetchError::Status {
            resource: Resource::Repositories,
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(repos.to_string(), "Unable to fetch repositories.");
        assert_eq!(repos.resource(), Resource::Repositories);
    }

    #[test]
    fn test_rate_limit_message() {
        let err = FetchError::RateLimited {
            resource: Resource::Repositories,
        };
        assert!(err.is_rate_limited());
        assert_eq!(
            err.to_string(),
            "API rate limit exceeded. Please try again later."
        );
    }
}
