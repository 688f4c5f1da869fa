// src/github/fetch.rs
// =============================================================================
// This module downloads a user's public event feed from the GitHub REST API.
//
// Strategy:
// - Build https://api.github.com/users/{username}/events (base URL configurable)
// - Issue one GET request, no authentication, no pagination, no retries
// - Read the body as text, then decode it with serde_json
//
// Reading the body as text first keeps transport errors (reqwest) apart from
// shape errors (serde_json), so callers can tell "GitHub is unreachable" from
// "GitHub sent something we don't understand".
// =============================================================================

use reqwest::header::ACCEPT;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use super::event::Event;
use crate::error::{ActivityError, Result};

/// Public GitHub REST API root
pub const DEFAULT_API_URL: &str = "https://api.github.com";

// GitHub rejects API requests that carry no User-Agent
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Where to send requests
#[derive(Debug, Clone)]
pub struct FetchConfig {
    api_url: Url,
}

impl FetchConfig {
    /// Parses and validates the API base URL
    ///
    /// The URL must be able to carry a path (so `mailto:` style URLs are
    /// rejected); anything with a path prefix such as a GitHub Enterprise
    /// `https://ghe.example.com/api/v3` is kept and extended.
    pub fn new(api_url: &str) -> Result<Self> {
        let api_url = Url::parse(api_url)?;
        if api_url.cannot_be_a_base() {
            return Err(ActivityError::InvalidApiUrl(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }
        Ok(Self { api_url })
    }

    /// Endpoint for one user's events; the username is percent-encoded
    pub fn events_url(&self, username: &str) -> Url {
        let mut url = self.api_url.clone();
        // Checked in new(): cannot-be-a-base URLs never reach this point
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["users", username, "events"]);
        }
        url
    }
}

// Fetches the most recent public events of a user
//
// Parameters:
//   config: where the API lives
//   username: GitHub login (must be non-empty after trimming)
//
// Returns: the events in the order the API sent them (most recent first)
//
// Errors:
//   MissingArgument  - blank username, no request is made
//   Network          - connection refused, DNS failure, broken body
//   Status           - any non-2xx answer (404 for unknown users)
//   Decode           - body is not a JSON array of events
pub async fn fetch_events(config: &FetchConfig, username: &str) -> Result<Vec<Event>> {
    let username = username.trim();
    if username.is_empty() {
        return Err(ActivityError::MissingArgument);
    }

    let client = Client::builder().user_agent(USER_AGENT).build()?;
    let url = config.events_url(username);
    debug!(%url, "requesting events");

    let response = client
        .get(url)
        .header(ACCEPT, "application/vnd.github+json")
        .send()
        .await?;

    let status = response.status();
    debug!(%status, "received response");
    if !status.is_success() {
        return Err(ActivityError::Status {
            status,
            username: username.to_string(),
        });
    }

    let body = response.text().await?;
    let events: Vec<Event> = serde_json::from_str(&body)?;

    info!(username, count = events.len(), "fetched events");
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn push_event(id: &str, repo: &str, commits: usize) -> serde_json::Value {
        let commits: Vec<_> = (0..commits)
            .map(|i| {
                json!({
                    "sha": format!("{id}-{i}"),
                    "author": { "email": "dev@example.com", "name": "Dev" },
                    "message": "change"
                })
            })
            .collect();
        json!({
            "id": id,
            "type": "PushEvent",
            "actor": { "login": "octocat", "url": "https://api.github.com/users/octocat" },
            "repo": { "name": repo, "url": format!("https://api.github.com/repos/{repo}") },
            "payload": { "commits": commits },
            "public": true,
            "created_at": "2024-05-01T12:00:00Z"
        })
    }

    #[test]
    fn test_events_url_default() {
        let config = FetchConfig::new(DEFAULT_API_URL).unwrap();
        assert_eq!(
            config.events_url("octocat").as_str(),
            "https://api.github.com/users/octocat/events"
        );
    }

    #[test]
    fn test_events_url_keeps_path_prefix() {
        let config = FetchConfig::new("https://ghe.example.com/api/v3/").unwrap();
        assert_eq!(
            config.events_url("octocat").as_str(),
            "https://ghe.example.com/api/v3/users/octocat/events"
        );
    }

    #[test]
    fn test_events_url_encodes_username() {
        let config = FetchConfig::new(DEFAULT_API_URL).unwrap();
        assert_eq!(
            config.events_url("a b").as_str(),
            "https://api.github.com/users/a%20b/events"
        );
    }

    #[test]
    fn test_invalid_api_url() {
        assert!(matches!(
            FetchConfig::new("not a url"),
            Err(ActivityError::InvalidApiUrl(_))
        ));
        assert!(matches!(
            FetchConfig::new("mailto:someone@example.com"),
            Err(ActivityError::InvalidApiUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_events_preserves_order() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/users/octocat/events")
                    .header_exists("user-agent");
                then.status(200).json_body(json!([
                    push_event("2", "octocat/b", 1),
                    push_event("1", "octocat/a", 3)
                ]));
            })
            .await;

        let config = FetchConfig::new(&server.base_url()).unwrap();
        let events = fetch_events(&config, "octocat").await.unwrap();

        mock.assert_async().await;
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, "2");
        assert_eq!(events[1].repo.name, "octocat/a");
        assert_eq!(events[1].commit_count(), 3);
    }

    #[tokio::test]
    async fn test_fetch_unknown_user_is_status_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/users/nobody/events");
                then.status(404).json_body(json!({ "message": "Not Found" }));
            })
            .await;

        let config = FetchConfig::new(&server.base_url()).unwrap();
        let err = fetch_events(&config, "nobody").await.unwrap_err();

        match err {
            ActivityError::Status { status, username } => {
                assert_eq!(status.as_u16(), 404);
                assert_eq!(username, "nobody");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_malformed_body_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/users/octocat/events");
                then.status(200).json_body(json!({ "not": "an array" }));
            })
            .await;

        let config = FetchConfig::new(&server.base_url()).unwrap();
        let err = fetch_events(&config, "octocat").await.unwrap_err();
        assert!(matches!(err, ActivityError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_network_error() {
        // Nothing listens on port 1
        let config = FetchConfig::new("http://127.0.0.1:1").unwrap();
        let err = fetch_events(&config, "octocat").await.unwrap_err();
        assert!(matches!(err, ActivityError::Network(_)));
    }

    #[tokio::test]
    async fn test_blank_username_makes_no_request() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.path_contains("/users");
                then.status(200).json_body(json!([]));
            })
            .await;

        let config = FetchConfig::new(&server.base_url()).unwrap();
        let err = fetch_events(&config, "   ").await.unwrap_err();

        assert!(matches!(err, ActivityError::MissingArgument));
        assert_eq!(mock.hits_async().await, 0);
    }
}
