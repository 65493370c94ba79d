use serde::{Deserialize, Serialize};

use super::Novel;

/// A chapter as returned by the public API.
///
/// `novel` is a denormalized copy of the parent novel and carries the same
/// fields as [`Novel`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Chapter {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub order: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub slug: String,
    pub content: Option<String>,
    pub image: Option<String>,
    pub updated_at: Option<String>,
    pub novel: Option<Novel>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChapterRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub slug: String,
}

/// Sibling pointers of a chapter. Both sides empty means a single-chapter novel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Pagination {
    pub prev: Option<ChapterRef>,
    pub next: Option<ChapterRef>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChaptersResponse {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChapterResponse {
    pub chapter: Chapter,
    #[serde(default)]
    pub pagination: Pagination,
}
