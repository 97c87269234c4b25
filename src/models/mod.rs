// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Typed wire records for the Bondify API.
//!
//! Every payload is decoded into one of these at the HTTP boundary; no
//! loosely-typed JSON values cross into the rest of the crate.

pub mod friends;
pub mod lookups;
pub mod post;
pub mod profile;

pub use friends::{FriendCard, FriendRequest};
pub use lookups::{City, Hobby, School};
pub use post::{Comment, CommentAuthor, Like, LikeUser, Post, PostAttachment, Reply};
pub use profile::{Profile, ProfileUpdate};
