//! Wire DTOs for the photo-sharing service.
//!
//! DESIGN
//! ======
//! Field names follow the service's JSON exactly (`UID`, `RandID`, `UName`,
//! ...), so the Rust names are mapped with `serde(rename)`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque identifier; a user's identifier doubles as the session token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Id {
    #[serde(rename = "RandID")]
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Username {
    #[serde(rename = "name")]
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "UID")]
    pub id: Id,
    #[serde(rename = "UName")]
    pub username: Username,
    #[serde(rename = "Name", default)]
    pub name: String,
    /// RFC 3339 timestamp as sent by the service.
    #[serde(rename = "BirthDate", default)]
    pub birth_date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "User")]
    pub user: User,
    #[serde(rename = "Posts", default, deserialize_with = "null_as_empty")]
    pub posts: Vec<Id>,
}

/// `GET /users/` result. Entries are bare usernames or full users depending
/// on the service version.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UserList {
    #[serde(rename = "Users", default, deserialize_with = "null_as_empty")]
    pub users: Vec<UserListEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum UserListEntry {
    User(User),
    Username(Username),
}

impl UserListEntry {
    pub fn username(&self) -> &str {
        match self {
            Self::User(user) => &user.username.value,
            Self::Username(name) => &name.value,
        }
    }
}

/// Empty Go slices are encoded as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Error body returned with non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "ErrorCode")]
    pub code: serde_json::Value,
    #[serde(rename = "Description")]
    pub description: String,
}

/// Body of a successful `POST /session`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LoginResponse {
    User(User),
    Id(Id),
}

impl LoginResponse {
    pub fn token(&self) -> &str {
        match self {
            Self::User(user) => &user.id.value,
            Self::Id(id) => &id.value,
        }
    }
}
