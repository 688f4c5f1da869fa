// src/github/event.rs
// =============================================================================
// Data shapes for one element of GET /users/{username}/events.
//
// Only `type`, `repo.name` and the length of `payload.commits` drive the
// summary. The other fields are decoded so the model mirrors what the API
// sends, but nothing downstream reads them.
//
// serde ignores JSON keys we don't declare, which matters here: every event
// type has a differently shaped payload and we only care about pushes.
// =============================================================================

use serde::{Deserialize, Deserializer};

// Missing fields and explicit nulls both decode as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One GitHub activity record
// Fields the summary never reads are still part of the decoded model
#[allow(dead_code)]
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Event type tag such as "PushEvent" (`type` is a Rust keyword)
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub actor: Actor,
    pub repo: Repo,
    /// Missing or null payloads decode as an empty one
    #[serde(default, deserialize_with = "null_as_default")]
    pub payload: Payload,
    #[serde(default, deserialize_with = "null_as_default")]
    pub public: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

impl Event {
    /// Number of commits carried by a push payload (0 for anything else)
    pub fn commit_count(&self) -> usize {
        self.payload.commits.as_ref().map_or(0, Vec::len)
    }
}

#[allow(dead_code)]
#[derive(Debug, Clone, Deserialize)]
pub struct Repo {
    /// "owner/repo"
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Actor {
    pub login: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Payload {
    /// Present for PushEvent only; may also be `null`
    #[serde(default)]
    pub commits: Option<Vec<Commit>>,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Commit {
    pub sha: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: CommitAuthor,
    pub message: String,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CommitAuthor {
    pub email: String,
    pub name: String,
}
