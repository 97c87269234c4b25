// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for extracting ids out of resource URLs.
//!
//! Some collections identify entities only by their resource URL. All id
//! extraction goes through these two functions; resource modules must not
//! parse URLs themselves.

use crate::error::{ApiError, Result};

/// Extract the last non-empty path segment of a resource URL.
///
/// Fails with a `Parse` error when the input has no path segments.
pub fn trailing_segment(url: &str) -> Result<String> {
    let trimmed = url.trim_end_matches('/');
    match trimmed.rsplit('/').next() {
        Some(segment) if !segment.is_empty() && segment.len() < trimmed.len() => {
            Ok(segment.to_string())
        }
        _ => Err(ApiError::Parse(format!(
            "No trailing path segment in {:?}",
            url
        ))),
    }
}

/// Extract the post id from a post or comment-collection URL, i.e. the
/// segment following `/posts/` in either `.../posts/{id}/` or
/// `.../posts/{id}/comments/`.
pub fn post_id_from_url(url: &str) -> Result<String> {
    let after = url
        .split("/posts/")
        .nth(1)
        .ok_or_else(|| ApiError::Parse(format!("No /posts/ segment in {:?}", url)))?;

    match after.split('/').next() {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(ApiError::Parse(format!("Empty post id in {:?}", url))),
    }
}
