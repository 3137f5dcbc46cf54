//! Port for the remote article store.
//!
//! The store is a remote RPC service; every call can fail in transit, be
//! rejected by the far side, or return a payload we cannot decode. Those
//! three failure shapes are the whole error surface — classification into
//! user-facing categories happens in [`crate::domain::classify`].

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::article::{Article, ArticleUpdate, BlobRef};
use crate::domain::rest_endpoint::{RestEndpointConfig, RestEndpointStatus};
use crate::domain::slug::Slug;
use crate::domain::user::{UserProfile, UserRole};

/// Failure talking to the remote store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request never completed (connect failure, timeout, broken pipe).
    #[error("store transport failure: {message}")]
    Transport { message: String },
    /// The store answered with an error of its own.
    #[error("store rejected the call: {message}")]
    Rejected { message: String },
    /// The store answered but the payload did not parse.
    #[error("store payload could not be decoded: {message}")]
    Decode { message: String },
}

impl StoreError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Message text used for category classification.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::Transport { message } | Self::Rejected { message } | Self::Decode { message } => {
                message
            }
        }
    }
}

/// Remote persistence surface for articles, profiles, and store
/// configuration.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleStore: Send + Sync {
    async fn create_article<'a>(
        &self,
        slug: &Slug,
        title: &str,
        body: &str,
        author: Option<&'a str>,
        tags: &[String],
    ) -> Result<Article, StoreError>;

    async fn update_article(&self, id: u64, update: &ArticleUpdate)
    -> Result<Article, StoreError>;

    async fn set_published(&self, id: u64, published: bool) -> Result<Article, StoreError>;

    async fn delete_article(&self, id: u64) -> Result<(), StoreError>;

    async fn article_by_id(&self, id: u64) -> Result<Option<Article>, StoreError>;

    async fn article_by_slug(&self, slug: &Slug) -> Result<Option<Article>, StoreError>;

    /// Published articles only; unpublished records are invisible here even
    /// when the slug matches.
    async fn public_article_by_slug(&self, slug: &Slug) -> Result<Option<Article>, StoreError>;

    async fn list_all_admin(&self) -> Result<Vec<Article>, StoreError>;

    async fn list_published(&self) -> Result<Vec<Article>, StoreError>;

    async fn search_by_tag(&self, tag: &str) -> Result<Vec<Article>, StoreError>;

    async fn all_slugs_admin(&self) -> Result<Vec<String>, StoreError>;

    async fn caller_profile(&self) -> Result<Option<UserProfile>, StoreError>;

    async fn save_caller_profile(&self, profile: &UserProfile) -> Result<UserProfile, StoreError>;

    async fn caller_user_role(&self) -> Result<UserRole, StoreError>;

    /// Cheapest call the store exposes; doubles as a reachability probe.
    async fn is_caller_admin(&self) -> Result<bool, StoreError>;

    async fn attach_pdf(&self, id: u64, blob: &BlobRef) -> Result<Article, StoreError>;

    async fn remove_pdf(&self, id: u64) -> Result<Article, StoreError>;

    async fn attach_text_file(&self, id: u64, blob: &BlobRef) -> Result<Article, StoreError>;

    async fn remove_text_file(&self, id: u64) -> Result<Article, StoreError>;

    async fn rest_endpoint_status(&self) -> Result<RestEndpointStatus, StoreError>;

    async fn set_rest_endpoint(&self, config: &RestEndpointConfig) -> Result<(), StoreError>;

    async fn clear_rest_endpoint(&self) -> Result<(), StoreError>;
}
