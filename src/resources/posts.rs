// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Post feed endpoints: posts, likes, comments, threaded replies.

use crate::error::Result;
use crate::http::{ApiClient, UploadFile};
use crate::models::{Comment, Like, Post, Reply};
use crate::url_utils;
use serde::Serialize;

/// A post to create: text content plus optional image attachments.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub content: String,
    pub images: Vec<UploadFile>,
}

impl NewPost {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            images: Vec::new(),
        }
    }
}

#[derive(Serialize)]
struct CommentRequest<'a> {
    comment: &'a str,
}

#[derive(Serialize)]
struct ReplyRequest<'a> {
    reply: &'a str,
}

pub struct PostsApi {
    client: ApiClient,
}

impl PostsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// A profile's posts, newest first (server order).
    pub async fn for_profile(&self, profile_id: &str) -> Result<Vec<Post>> {
        self.client
            .get_json(&format!("/profile/{}/posts/", profile_id))
            .await
    }

    /// Create a post. Images go up as multipart `uploaded_images` parts
    /// alongside the `content` field, matching the service's form contract.
    pub async fn create(&self, profile_id: &str, new_post: NewPost) -> Result<Post> {
        let fields = vec![("content".to_string(), new_post.content)];
        self.client
            .post_multipart(
                &format!("/profile/{}/posts/", profile_id),
                fields,
                new_post.images,
            )
            .await
    }

    /// Delete a post.
    pub async fn delete(&self, profile_id: &str, post_id: &str) -> Result<()> {
        self.client
            .delete(&format!("/profile/{}/posts/{}/", profile_id, post_id))
            .await
    }

    /// Toggle the viewer's like on a post. The post's counters are stale
    /// until refetched.
    pub async fn like(&self, profile_id: &str, post_id: &str) -> Result<()> {
        self.client
            .post_unit(&format!("/profile/{}/posts/{}/like/", profile_id, post_id))
            .await
    }

    /// Who liked a post.
    pub async fn likes(&self, profile_id: &str, post_id: &str) -> Result<Vec<Like>> {
        self.client
            .get_json(&format!("/profile/{}/posts/{}/likes/", profile_id, post_id))
            .await
    }

    /// Comments on a post.
    pub async fn comments(&self, post_id: &str) -> Result<Vec<Comment>> {
        self.client
            .get_json(&format!("/posts/{}/comments/", post_id))
            .await
    }

    /// Comments addressed by the post's resource URL (the feed payload
    /// carries URLs, not ids).
    pub async fn comments_by_url(&self, post_url: &str) -> Result<Vec<Comment>> {
        let post_id = url_utils::post_id_from_url(post_url)?;
        self.comments(&post_id).await
    }

    /// Comment on a post.
    pub async fn create_comment(&self, post_id: &str, text: &str) -> Result<Comment> {
        self.client
            .post_json(
                &format!("/posts/{}/comments/", post_id),
                &CommentRequest { comment: text },
            )
            .await
    }

    /// Replies under a comment.
    pub async fn replies(&self, post_id: &str, comment_id: &str) -> Result<Vec<Reply>> {
        self.client
            .get_json(&format!("/posts/{}/comments/{}/replies/", post_id, comment_id))
            .await
    }

    /// Reply to a comment.
    pub async fn create_reply(
        &self,
        post_id: &str,
        comment_id: &str,
        text: &str,
    ) -> Result<Reply> {
        self.client
            .post_json(
                &format!("/posts/{}/comments/{}/replies/", post_id, comment_id),
                &ReplyRequest { reply: text },
            )
            .await
    }
}
