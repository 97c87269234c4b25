// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Friends-graph endpoints: requests, accept/reject, add/remove, and the
//! derived friendship status.

use crate::error::Result;
use crate::friendship::{self, FriendshipStatus};
use crate::http::ApiClient;
use crate::models::{FriendCard, FriendRequest, Profile};

pub struct FriendsApi {
    client: ApiClient,
}

impl FriendsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// A profile's accepted friends.
    pub async fn friends(&self, profile_id: &str) -> Result<Vec<Profile>> {
        self.client
            .get_json(&format!("/profile/{}/friends/", profile_id))
            .await
    }

    /// A profile's friend-request collection (pending and processed).
    pub async fn requests(&self, profile_id: &str) -> Result<Vec<FriendRequest>> {
        self.client
            .get_json(&format!("/profile/{}/friends/requests/", profile_id))
            .await
    }

    /// A single friend request.
    pub async fn request(&self, profile_id: &str, request_id: &str) -> Result<FriendRequest> {
        self.client
            .get_json(&format!(
                "/profile/{}/friends/requests/{}/",
                profile_id, request_id
            ))
            .await
    }

    /// Open a new friend request toward a profile.
    pub async fn send_request(&self, profile_id: &str, card: &FriendCard) -> Result<FriendRequest> {
        self.client
            .post_json(&format!("/profile/{}/friends/requests/", profile_id), card)
            .await
    }

    /// Accept a pending request.
    pub async fn accept(&self, profile_id: &str, request_id: &str) -> Result<()> {
        self.client
            .post_unit(&format!(
                "/profile/{}/friends/requests/{}/accept_friendship/",
                profile_id, request_id
            ))
            .await
    }

    /// Reject a pending request. Terminal for this request; a new one may
    /// still be opened between the same pair later.
    pub async fn reject(&self, profile_id: &str, request_id: &str) -> Result<()> {
        self.client
            .put_unit(&format!(
                "/profile/{}/friends/requests/{}/reject_friendship/",
                profile_id, request_id
            ))
            .await
    }

    /// Add a profile directly to the viewer's friends.
    pub async fn add(&self, profile_id: &str, card: &FriendCard) -> Result<()> {
        self.client
            .post_json::<serde_json::Value, _>(
                &format!("/profile/{}/add_to_friends/", profile_id),
                card,
            )
            .await?;
        Ok(())
    }

    /// Remove a friend.
    pub async fn remove(&self, friend_id: &str) -> Result<()> {
        self.client
            .delete(&format!("/profile/{}/remove_from_friends/", friend_id))
            .await
    }

    /// Derived friendship status between the viewer and a target profile.
    ///
    /// Best-effort by contract: any lookup failure resolves to
    /// [`FriendshipStatus::None`] instead of propagating, so status badges
    /// can never take the page down. This is the one sanctioned exception
    /// to propagate-don't-swallow; callers needing strict answers should
    /// use [`FriendsApi::requests`] directly.
    pub async fn friendship_status(
        &self,
        viewer_id: &str,
        target_username: &str,
    ) -> FriendshipStatus {
        match self.requests(viewer_id).await {
            Ok(requests) => friendship::classify(&requests, target_username),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    viewer_id,
                    target_username,
                    "Friendship lookup failed; resolving to None"
                );
                FriendshipStatus::None
            }
        }
    }
}
