use super::lenient;
use serde::{Deserialize, Serialize};

/// Signed-in user record as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    /// Role label, looked up in the permission table
    #[serde(default, deserialize_with = "lenient::string")]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional_string")]
    pub id: Option<String>,
}

/// Result of the `login` action; `user` is absent for unknown emails
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResult {
    #[serde(default)]
    pub user: Option<User>,
}

/// Payload for `createUser`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub role: String,
}

/// Payload for `updateUser`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}
