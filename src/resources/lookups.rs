// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static lookup endpoints backing the profile editor.

use crate::error::Result;
use crate::http::ApiClient;
use crate::models::{City, Hobby, School};

pub struct LookupsApi {
    client: ApiClient,
}

impl LookupsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn cities(&self) -> Result<Vec<City>> {
        self.client.get_json("/api/utils/cities").await
    }

    pub async fn hobbies(&self) -> Result<Vec<Hobby>> {
        self.client.get_json("/api/utils/hobbies").await
    }

    pub async fn schools(&self) -> Result<Vec<School>> {
        self.client.get_json("/api/utils/schools").await
    }
}
