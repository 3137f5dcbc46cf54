//! Defensive coercion of loosely-typed remote records.
//!
//! The remote store is duck-typed at the client boundary: fields may be
//! missing, null, or carry the wrong primitive type, and big integers
//! arrive as strings. This module is the "parse, don't trust" adapter that
//! turns those records into the strict [`Article`] shape with safe
//! defaults. Records without a usable slug are dropped with a logged
//! warning rather than crashing a whole listing.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::domain::article::{Article, BlobRef};
use crate::domain::slug::{self, Slug};

/// An article record exactly as the store sent it, every field optional
/// and loosely typed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawArticle {
    pub id: Value,
    pub slug: Value,
    pub title: Value,
    pub text_content: Value,
    pub author: Value,
    pub tags: Value,
    pub published: Value,
    pub timestamp: Value,
    pub pdf: Value,
    pub text_attachment: Value,
}

/// Coerce one raw record into the strict shape, or `None` when the record
/// is structurally unusable (no valid slug).
#[must_use]
pub fn normalize_article(raw: &RawArticle) -> Option<Article> {
    let slug_text = coerce_string(&raw.slug);
    if slug_text.is_empty() {
        warn!("dropping article record without a slug");
        return None;
    }
    let Ok(slug) = Slug::new(slug::sanitize(&slug_text)) else {
        warn!(slug = %slug_text, "dropping article record with unusable slug");
        return None;
    };

    Some(Article {
        id: coerce_u64(&raw.id),
        slug,
        title: coerce_string(&raw.title),
        body: coerce_string(&raw.text_content),
        author: coerce_optional_string(&raw.author),
        tags: coerce_tags(&raw.tags),
        published: coerce_bool(&raw.published),
        timestamp_nanos: coerce_u64(&raw.timestamp),
        pdf: coerce_blob(&raw.pdf),
        text_attachment: coerce_blob(&raw.text_attachment),
    })
}

/// Normalize a listing, dropping structurally invalid entries and
/// preserving the order of the rest.
#[must_use]
pub fn normalize_articles(raw: &[RawArticle]) -> Vec<Article> {
    raw.iter().filter_map(normalize_article).collect()
}

fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        _ => String::new(),
    }
}

fn coerce_optional_string(value: &Value) -> Option<String> {
    let text = coerce_string(value);
    if text.is_empty() { None } else { Some(text) }
}

fn coerce_u64(value: &Value) -> u64 {
    match value {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_i64().and_then(|int| u64::try_from(int).ok()))
            .unwrap_or(0),
        // Big integers travel as strings on the wire.
        Value::String(text) => text.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn coerce_bool(value: &Value) -> bool {
    matches!(value, Value::Bool(true))
}

fn coerce_tags(value: &Value) -> Vec<String> {
    match value {
        Value::Array(entries) => entries
            .iter()
            .map(coerce_string)
            .filter(|tag| !tag.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

fn coerce_blob(value: &Value) -> Option<BlobRef> {
    let url = match value {
        Value::String(url) => url.clone(),
        Value::Object(map) => coerce_string(map.get("url").unwrap_or(&Value::Null)),
        _ => String::new(),
    };
    if url.is_empty() {
        None
    } else {
        Some(BlobRef { url })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn raw(value: serde_json::Value) -> RawArticle {
        serde_json::from_value(value).expect("raw article deserializes")
    }

    #[rstest]
    fn well_formed_record_normalizes() {
        let article = normalize_article(&raw(json!({
            "id": 7,
            "slug": "hello-world",
            "title": "Hello",
            "textContent": "# Hi",
            "author": "Ada",
            "tags": ["a", "b"],
            "published": true,
            "timestamp": "1609459200000000000",
            "pdf": { "url": "https://blobs.example/x.pdf" },
        })))
        .expect("valid record");
        assert_eq!(article.id, 7);
        assert_eq!(article.slug.as_str(), "hello-world");
        assert_eq!(article.timestamp_nanos, 1_609_459_200_000_000_000);
        assert!(article.published);
        assert_eq!(
            article.pdf.map(|blob| blob.url),
            Some("https://blobs.example/x.pdf".to_owned())
        );
    }

    #[rstest]
    fn empty_slug_drops_exactly_that_entry_preserving_order() {
        let records = vec![
            raw(json!({ "slug": "first", "title": "1" })),
            raw(json!({ "slug": "", "title": "2" })),
            raw(json!({ "slug": "third", "title": "3" })),
        ];
        let normalized = normalize_articles(&records);
        let slugs: Vec<&str> = normalized.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["first", "third"]);
    }

    #[rstest]
    fn mistyped_fields_fall_back_to_defaults() {
        let article = normalize_article(&raw(json!({
            "slug": "ok",
            "title": 42,
            "tags": "not-an-array",
            "published": "true",
            "timestamp": "abc",
            "id": -3,
        })))
        .expect("slug is usable");
        assert_eq!(article.title, "42");
        assert!(article.tags.is_empty());
        // Stringly-typed booleans are not trusted.
        assert!(!article.published);
        assert_eq!(article.timestamp_nanos, 0);
        assert_eq!(article.id, 0);
        assert!(article.author.is_none());
        assert!(article.pdf.is_none());
    }

    #[rstest]
    fn missing_fields_default_cleanly() {
        let article = normalize_article(&raw(json!({ "slug": "bare" }))).expect("usable");
        assert_eq!(article.title, "");
        assert_eq!(article.body, "");
        assert!(!article.published);
    }
}
