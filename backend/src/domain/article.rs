//! Article entity and the mutable update payload.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::slug::Slug;

/// Reference to an externally hosted binary attachment.
///
/// The blob payload itself lives outside this application; only the
/// retrievable URL travels through here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlobRef {
    /// Direct URL the client can fetch the blob from.
    pub url: String,
}

/// The central content entity.
///
/// ## Invariants
/// - `id` and `slug` are assigned at creation and never mutated.
/// - Visible to unauthenticated readers if and only if `published` is true.
/// - `tags` are treated as an unordered set for filtering; de-duplication
///   happens at the editing layer via [`dedup_tags`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Store-assigned numeric identifier.
    pub id: u64,
    /// URL-unique identifier, immutable after creation.
    pub slug: Slug,
    /// Display title.
    pub title: String,
    /// Markdown body.
    pub body: String,
    /// Optional byline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Tag set, order-irrelevant for filtering.
    pub tags: Vec<String>,
    /// Public visibility flag.
    pub published: bool,
    /// Store-assigned creation/modification timestamp in nanoseconds since
    /// the Unix epoch.
    pub timestamp_nanos: u64,
    /// Optional primary document attachment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf: Option<BlobRef>,
    /// Optional secondary text attachment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_attachment: Option<BlobRef>,
}

impl Article {
    /// Build a published article from a static template.
    ///
    /// Template articles use high identifiers to avoid colliding with
    /// store-assigned ones, and carry the current time as their timestamp.
    #[must_use]
    pub fn from_template(template: &article_templates::ArticleTemplate, index: usize) -> Self {
        // Catalog slugs are build-time constants validated by the
        // article-templates crate's own tests.
        let slug = Slug::new(template.slug).unwrap_or_else(|_| {
            Slug::new("template-article").expect("literal slug is valid")
        });
        let now_nanos = u64::try_from(chrono::Utc::now().timestamp_millis())
            .unwrap_or(0)
            .saturating_mul(1_000_000);
        Self {
            id: 1_000 + index as u64,
            slug,
            title: template.title.to_owned(),
            body: template.body.to_owned(),
            author: template.author.map(str::to_owned),
            tags: template.tags.iter().map(|&t| t.to_owned()).collect(),
            published: true,
            timestamp_nanos: now_nanos,
            pdf: None,
            text_attachment: None,
        }
    }
}

/// Fields an admin may change after creation. The slug is deliberately
/// absent: it is immutable once the article exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleUpdate {
    /// New display title.
    pub title: String,
    /// New Markdown body.
    pub body: String,
    /// New optional byline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Replacement tag list; de-duplicated before use.
    pub tags: Vec<String>,
}

impl ArticleUpdate {
    /// Return a copy with trimmed, de-duplicated tags.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.tags = dedup_tags(self.tags);
        self
    }
}

/// De-duplicate a tag list the way the tag editor does: trim each entry,
/// drop empties, keep the first occurrence of each tag (case-sensitive),
/// preserve order.
#[must_use]
pub fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = Vec::new();
    for tag in tags {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !seen.iter().any(|existing: &String| existing == trimmed) {
            seen.push(trimmed.to_owned());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn dedup_tags_preserves_order_and_drops_duplicates() {
        let tags = vec![
            "Rust".to_owned(),
            "  HR  ".to_owned(),
            "Rust".to_owned(),
            String::new(),
            "hr".to_owned(),
        ];
        // Case-sensitive: "HR" and "hr" are distinct tags.
        assert_eq!(dedup_tags(tags), vec!["Rust", "HR", "hr"]);
    }

    #[rstest]
    fn template_conversion_uses_high_ids_and_publishes() {
        let template = &article_templates::catalog()[0];
        let article = Article::from_template(template, 0);
        assert_eq!(article.id, 1_000);
        assert!(article.published);
        assert_eq!(article.slug.as_str(), template.slug);
        assert!(article.pdf.is_none());
    }

    #[rstest]
    fn update_normalized_applies_dedup() {
        let update = ArticleUpdate {
            title: "t".to_owned(),
            body: "b".to_owned(),
            author: None,
            tags: vec!["a".to_owned(), "a".to_owned(), "b".to_owned()],
        }
        .normalized();
        assert_eq!(update.tags, vec!["a", "b"]);
    }
}
