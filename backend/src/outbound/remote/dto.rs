//! Wire shapes for the remote store's RPC surface.
//!
//! Requests are flat camelCase parameter objects. Responses for article
//! payloads are deliberately NOT deserialized into the strict domain types:
//! they arrive as [`RawArticle`](crate::domain::normalize::RawArticle) and
//! go through the normalization layer, which tolerates missing and
//! mistyped fields.

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleParams<'a> {
    pub slug: &'a str,
    pub title: &'a str,
    pub text_content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<&'a str>,
    pub tags: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleParams<'a> {
    pub id: u64,
    pub title: &'a str,
    pub text_content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<&'a str>,
    pub tags: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPublishedParams {
    pub id: u64,
    pub published: bool,
}

#[derive(Debug, Serialize)]
pub struct IdParams {
    pub id: u64,
}

#[derive(Debug, Serialize)]
pub struct SlugParams<'a> {
    pub slug: &'a str,
}

#[derive(Debug, Serialize)]
pub struct TagParams<'a> {
    pub tag: &'a str,
}

#[derive(Debug, Serialize)]
pub struct AttachmentParams<'a> {
    pub id: u64,
    pub url: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ProfileParams<'a> {
    pub name: &'a str,
}

/// Placeholder body for methods that take no parameters.
#[derive(Debug, Serialize)]
pub struct NoParams {}
