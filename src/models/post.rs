//! Post, comment, and reply records.
//!
//! Content is immutable once created; the counters (`likes`, `is_liked`,
//! `comments_count`) are a point-in-time snapshot per fetch and may be
//! stale until the caller refetches.

use serde::{Deserialize, Serialize};

/// An image attached to a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostAttachment {
    pub image: String,
}

/// A feed post as returned by `GET /profile/{id}/posts/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Resource URL; the numeric/uuid id is only present inside this URL
    pub url: String,
    pub content: String,
    #[serde(default)]
    pub post_attachments: Vec<PostAttachment>,
    pub created_at: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments_count: u64,
    #[serde(default)]
    pub is_liked: bool,
    /// URL of the post's comment collection
    #[serde(default)]
    pub comments: Option<String>,
}

/// A like on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    pub id: String,
    pub user: LikeUser,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Author card embedded in comments and replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentAuthor {
    #[serde(default)]
    pub url: Option<String>,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// A comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub profile: CommentAuthor,
    pub comment: String,
    pub created_at: String,
    /// URL of this comment's reply collection
    #[serde(default)]
    pub replies: Option<String>,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub dislikes: u64,
}

/// A threaded reply to a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub profile: CommentAuthor,
    pub reply: String,
    pub created_at: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub dislikes: u64,
}
