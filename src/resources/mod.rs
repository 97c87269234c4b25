// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Resource endpoint wrappers.
//!
//! Thin typed builders over [`crate::http::ApiClient`]: construct a path,
//! issue the call, decode the payload. No business logic lives here. After
//! any mutation the caller owns refetching the views that could be stale
//! (friends list, friendship status, post counters) — invalidation is a
//! cooperative contract, not automatic.

pub mod auth;
pub mod friends;
pub mod lookups;
pub mod posts;
pub mod profile;

pub use auth::{AuthApi, NewUser};
pub use friends::FriendsApi;
pub use lookups::LookupsApi;
pub use posts::{NewPost, PostsApi};
pub use profile::ProfileApi;
