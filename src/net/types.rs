//! Wire types for the todo API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Account record returned by the auth endpoints and cached in storage.
/// Fields beyond `email`/`name` ride along opaquely.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single todo item. The server assigns the identifier; MongoDB-backed
/// deployments emit it as `_id`, so both spellings are accepted.
/// Unrecognized fields pass through untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of a successful login or register response.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthSuccess {
    pub token: String,
    pub user: User,
}
