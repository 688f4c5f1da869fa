// src/error.rs
// =============================================================================
// Error types for the fetch -> summarize -> print pipeline.
//
// main.rs works with anyhow::Result, but the pieces below it return this
// typed error so that each failure can be told apart (and tested) by kind.
// Every variant is fatal to the run; none of them are retried.
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ActivityError>;

#[derive(Error, Debug)]
pub enum ActivityError {
    /// No username was supplied (or it was blank)
    #[error("Please provide a GitHub username")]
    MissingArgument,

    /// The --api-url value could not be parsed
    #[error("Invalid API URL: {0}")]
    InvalidApiUrl(#[from] url::ParseError),

    /// Connection refused, DNS failure, TLS failure, broken body, ...
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-2xx status (404 for unknown users)
    #[error("GitHub returned HTTP {status} for user '{username}'")]
    Status { status: StatusCode, username: String },

    /// The response body was not the expected JSON array of events
    #[error("Could not decode GitHub response: {0}")]
    Decode(#[from] serde_json::Error),
}
