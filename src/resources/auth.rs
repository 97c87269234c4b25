// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account endpoints: login and registration.

use crate::error::Result;
use crate::http::ApiClient;
use crate::session::Identity;
use serde::{Deserialize, Serialize};

/// Registration payload for `POST /register`.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Token pair issued by `POST /auth/token/`.
#[derive(Debug, Deserialize)]
struct TokenPair {
    access: String,
    refresh: String,
}

pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a token pair and establish the session.
    pub async fn login(&self, username: &str, password: &str) -> Result<Identity> {
        let pair: TokenPair = self
            .client
            .post_json("/auth/token/", &LoginRequest { username, password })
            .await?;

        self.client.session().login(pair.access, pair.refresh)
    }

    /// Create a new account.
    ///
    /// Does not establish a session: the register response carries no
    /// refresh token, and persisting half a pair would break the
    /// clear-together invariant. Follow with [`AuthApi::login`].
    pub async fn register(&self, new_user: &NewUser) -> Result<()> {
        let _: serde_json::Value = self.client.post_json("/register", new_user).await?;
        Ok(())
    }
}
