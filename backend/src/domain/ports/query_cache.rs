//! Port for the per-process read cache.
//!
//! Entries are stored as JSON values under string keys so one cache can
//! serve every query shape. Invalidation is prefix-based, which lets one
//! call sweep a whole key family (for example every `articlesByTag:` key).

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Failure inside a cache adapter.
#[derive(Debug, Error)]
#[error("cache failure: {message}")]
pub struct CacheError {
    message: String,
}

impl CacheError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueryCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, CacheError>;

    async fn put(&self, key: &str, value: Value) -> Result<(), CacheError>;

    /// Remove every entry whose key starts with `prefix`.
    async fn invalidate_prefix(&self, prefix: &str) -> Result<(), CacheError>;
}

/// Cache key vocabulary.
///
/// Keys are stable strings shared between reads and the invalidation sets
/// in the service layer; changing one changes cache behavior, not just a
/// label.
pub mod keys {
    pub const PUBLISHED_ARTICLES: &str = "publishedArticles";
    pub const ALL_ARTICLES_ADMIN: &str = "allArticlesAdmin";
    pub const ALL_SLUGS_ADMIN: &str = "allSlugsAdmin";
    pub const CURRENT_USER_PROFILE: &str = "currentUserProfile";

    pub const PUBLIC_ARTICLE_PREFIX: &str = "publicArticle:";
    pub const ARTICLES_BY_TAG_PREFIX: &str = "articlesByTag:";
    pub const ARTICLE_BY_ID_PREFIX: &str = "article:";

    #[must_use]
    pub fn public_article(slug: &str) -> String {
        format!("{PUBLIC_ARTICLE_PREFIX}{slug}")
    }

    #[must_use]
    pub fn articles_by_tag(tag: &str) -> String {
        format!("{ARTICLES_BY_TAG_PREFIX}{tag}")
    }

    #[must_use]
    pub fn article_by_id(id: u64) -> String {
        format!("{ARTICLE_BY_ID_PREFIX}{id}")
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::keys;

    #[rstest]
    #[case(keys::public_article("my-post"), "publicArticle:my-post")]
    #[case(keys::articles_by_tag("rust"), "articlesByTag:rust")]
    #[case(keys::article_by_id(42), "article:42")]
    fn derived_keys_carry_their_family_prefix(#[case] key: String, #[case] expected: &str) {
        assert_eq!(key, expected);
    }
}
