// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Friendship-status resolution.
//!
//! The service stores no direct relationship record between two profiles;
//! the status is derived per (viewer, target) pair from the viewer's
//! friend-request collection and must be recomputed on every use, never
//! cached across pairs.

use crate::models::FriendRequest;
use serde::{Deserialize, Serialize};

/// Derived relationship state between the viewer and a target profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FriendshipStatus {
    /// No request record exists between the pair. The UI offers "Add
    /// Friend" for both `None` and `Rejected`; the distinction is kept
    /// here so callers are not forced to conflate them.
    None,
    /// A request is pending.
    Sent,
    /// The pair are friends.
    Accepted,
    /// The most recent request was rejected (terminal for that request).
    Rejected,
}

/// Classify the viewer's request list against a target username.
///
/// The first entry whose `created_by` matches the target wins, mirroring
/// server ordering; duplicate requests between a pair are possible and not
/// resolved here. Status matching is case-insensitive because the service
/// mixes casings.
pub fn classify(requests: &[FriendRequest], target_username: &str) -> FriendshipStatus {
    let Some(request) = requests.iter().find(|r| r.created_by == target_username) else {
        return FriendshipStatus::None;
    };

    match request.status.to_uppercase().as_str() {
        "ACCEPTED" => FriendshipStatus::Accepted,
        "SENT" => FriendshipStatus::Sent,
        _ => FriendshipStatus::Rejected,
    }
}
