// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile endpoints: viewing, editing, and the blocklist.

use crate::error::Result;
use crate::http::ApiClient;
use crate::models::{Profile, ProfileUpdate};

pub struct ProfileApi {
    client: ApiClient,
}

impl ProfileApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Get a profile by id.
    pub async fn get(&self, profile_id: &str) -> Result<Profile> {
        self.client
            .get_json(&format!("/profile/{}/", profile_id))
            .await
    }

    /// List all visible profiles.
    pub async fn list(&self) -> Result<Vec<Profile>> {
        self.client.get_json("/profile/").await
    }

    /// Update a profile. Stale views of this profile are the caller's to
    /// refetch.
    pub async fn update(&self, profile_id: &str, update: &ProfileUpdate) -> Result<Profile> {
        self.client
            .put_json(&format!("/profile/{}/", profile_id), update)
            .await
    }

    /// Block a profile.
    pub async fn block(&self, profile_id: &str) -> Result<()> {
        self.client
            .post_unit(&format!("/profile/{}/block/", profile_id))
            .await
    }

    /// Unblock a profile.
    pub async fn unblock(&self, profile_id: &str) -> Result<()> {
        self.client
            .put_unit(&format!("/profile/{}/unblock/", profile_id))
            .await
    }

    /// The viewer's blocklist.
    pub async fn blacklist(&self, profile_id: &str) -> Result<Vec<Profile>> {
        self.client
            .get_json(&format!("/profile/{}/blacklist/", profile_id))
            .await
    }
}
