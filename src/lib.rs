// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Bondify client: typed async access to the Bondify social API.
//!
//! This crate is the data layer under a UI: session management over a JWT
//! token pair, an authenticated HTTP client with a single coalesced
//! refresh-and-retry on 401, and thin typed wrappers for the profile,
//! friends, and post-feed endpoints.

pub mod config;
pub mod error;
pub mod friendship;
pub mod http;
pub mod models;
pub mod resources;
pub mod session;
pub mod store;
pub mod url_utils;

use config::ClientConfig;
use error::{ApiError, Result};
use http::ApiClient;
use resources::{AuthApi, FriendsApi, LookupsApi, PostsApi, ProfileApi};
use session::SessionManager;
use store::{FileTokenStore, TokenStore};
use std::sync::Arc;

/// The assembled client: one session manager, one HTTP client, and the
/// resource APIs sharing them. Constructed once at application start and
/// passed by reference — there is no ambient global state.
pub struct BondifyClient {
    session: Arc<SessionManager>,
    pub auth: AuthApi,
    pub profile: ProfileApi,
    pub friends: FriendsApi,
    pub posts: PostsApi,
    pub lookups: LookupsApi,
}

impl BondifyClient {
    /// Build a client persisting tokens at the configured path.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let store = Arc::new(FileTokenStore::new(config.token_path.clone()));
        Self::with_store(config, store)
    }

    /// Build a client over a caller-provided token store.
    pub fn with_store(config: ClientConfig, store: Arc<dyn TokenStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let session = Arc::new(SessionManager::new(
            config.base_url.clone(),
            store,
            http.clone(),
        ));
        let client = ApiClient::new(config.base_url, session.clone(), http);

        Ok(Self {
            session,
            auth: AuthApi::new(client.clone()),
            profile: ProfileApi::new(client.clone()),
            friends: FriendsApi::new(client.clone()),
            posts: PostsApi::new(client.clone()),
            lookups: LookupsApi::new(client),
        })
    }

    /// Restore any persisted session. Call once at startup.
    pub async fn initialize(&self) -> Result<()> {
        self.session.initialize().await
    }

    /// The shared session manager.
    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }
}
