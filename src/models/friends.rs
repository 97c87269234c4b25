//! Friend-request records.

use serde::{Deserialize, Serialize};

/// A friend request as returned by `GET /profile/{id}/friends/requests/`.
///
/// Requests are never deleted server-side, only transitioned; `REJECTED` is
/// terminal for a given request, but nothing prevents a new `SENT` request
/// between the same pair afterwards (no uniqueness constraint).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendRequest {
    pub id: String,
    pub sender_id: String,
    pub recipient_id: String,
    pub sender_username: String,
    pub sender_first_name: String,
    pub sender_last_name: String,
    #[serde(default)]
    pub sender_avatar: Option<String>,
    /// `SENT` / `ACCEPTED` / `REJECTED`; kept as the raw wire string since
    /// the service is not consistent about casing
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    /// Resource URL of the request
    #[serde(default)]
    pub url: Option<String>,
    /// Username of the counterpart profile that created the request
    pub created_by: String,
}

/// Identity card sent when adding a friend or opening a request.
#[derive(Debug, Clone, Serialize)]
pub struct FriendCard {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: Option<String>,
}
