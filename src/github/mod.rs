// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Submodules:
// - event: serde shapes for the /users/{username}/events feed
// - fetch: the HTTP request and decoding
// =============================================================================

mod event;
mod fetch;

pub use event::Event;
pub use fetch::{fetch_events, FetchConfig, DEFAULT_API_URL};
