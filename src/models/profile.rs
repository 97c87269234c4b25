//! Profile records.

use serde::{Deserialize, Serialize};

/// A user profile as returned by `GET /profile/{id}/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Resource URL (the service identifies profiles by URL on some routes)
    #[serde(default)]
    pub url: Option<String>,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    /// ISO 8601 date, when shared
    #[serde(default)]
    pub birthdate: Option<String>,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub hobbies: Vec<String>,
    #[serde(default)]
    pub is_public: bool,
}

/// Editable profile fields for `PUT /profile/{id}/`.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdate {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub birthdate: Option<String>,
    pub school: String,
    pub hobbies: Vec<String>,
    pub is_public: bool,
}
