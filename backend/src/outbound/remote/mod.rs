//! HTTP client for the remote article store.
//!
//! Every store method is a `POST {base}/rpc/{method}` call with a JSON
//! parameter object and a JSON reply. Failures split three ways: the
//! request never completed (transport), the store answered non-2xx with an
//! error body (rejected), or the payload did not parse (decode). Article
//! payloads pass through [`normalize`] before they reach the domain.

mod dto;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::domain::article::{Article, ArticleUpdate, BlobRef};
use crate::domain::normalize::{self, RawArticle, normalize_article};
use crate::domain::ports::article_store::{ArticleStore, StoreError};
use crate::domain::rest_endpoint::{RestEndpointConfig, RestEndpointStatus};
use crate::domain::slug::Slug;
use crate::domain::user::{UserProfile, UserRole};

use dto::{
    AttachmentParams, CreateArticleParams, IdParams, NoParams, ProfileParams, SetPublishedParams,
    SlugParams, TagParams, UpdateArticleParams,
};

const CALL_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// [`ArticleStore`] adapter over the remote RPC service.
#[derive(Debug, Clone)]
pub struct RemoteArticleStore {
    client: reqwest::Client,
    base: Url,
    api_key: Option<String>,
}

impl RemoteArticleStore {
    /// Build a client against `base`. `api_key`, when present, is sent as a
    /// bearer token on every call.
    pub fn new(base: Url, api_key: Option<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(CALL_TIMEOUT).build()?;
        Ok(Self {
            client,
            base,
            api_key,
        })
    }

    fn method_url(&self, method: &str) -> Result<Url, StoreError> {
        self.base
            .join(&format!("rpc/{method}"))
            .map_err(|error| StoreError::transport(format!("bad store URL for {method}: {error}")))
    }

    /// Post `params` to `method` and return the raw response once it has
    /// cleared the transport and status checks.
    async fn send<P: Serialize + Sync>(
        &self,
        method: &str,
        params: &P,
    ) -> Result<reqwest::Response, StoreError> {
        let url = self.method_url(method)?;
        debug!(method, "calling remote store");
        let mut request = self.client.post(url).json(params);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        let response = request.send().await.map_err(|error| {
            if error.is_timeout() {
                StoreError::transport(format!("timeout calling {method}: {error}"))
            } else {
                StoreError::transport(format!("network failure calling {method}: {error}"))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(reject_for(method, status, &body));
        }
        Ok(response)
    }

    async fn call<P: Serialize + Sync, R: DeserializeOwned>(
        &self,
        method: &str,
        params: &P,
    ) -> Result<R, StoreError> {
        self.send(method, params)
            .await?
            .json()
            .await
            .map_err(|error| StoreError::decode(format!("{method} reply: {error}")))
    }

    /// Call a method whose reply carries no payload worth decoding.
    async fn call_unit<P: Serialize + Sync>(
        &self,
        method: &str,
        params: &P,
    ) -> Result<(), StoreError> {
        self.send(method, params).await?;
        Ok(())
    }

    async fn call_article<P: Serialize + Sync>(
        &self,
        method: &str,
        params: &P,
    ) -> Result<Article, StoreError> {
        let raw: RawArticle = self.call(method, params).await?;
        normalize_article(&raw)
            .ok_or_else(|| StoreError::decode(format!("{method} returned a record without a slug")))
    }

    async fn call_article_list<P: Serialize + Sync>(
        &self,
        method: &str,
        params: &P,
    ) -> Result<Vec<Article>, StoreError> {
        let raw: Vec<RawArticle> = self.call(method, params).await?;
        Ok(normalize::normalize_articles(&raw))
    }

    async fn call_optional_article<P: Serialize + Sync>(
        &self,
        method: &str,
        params: &P,
    ) -> Result<Option<Article>, StoreError> {
        let raw: Option<RawArticle> = self.call(method, params).await?;
        Ok(raw.as_ref().and_then(normalize_article))
    }
}

fn reject_for(method: &str, status: StatusCode, body: &str) -> StoreError {
    let detail = if body.trim().is_empty() {
        status.to_string()
    } else {
        body.trim().to_owned()
    };
    StoreError::rejected(format!("{method}: {detail}"))
}

#[async_trait]
impl ArticleStore for RemoteArticleStore {
    async fn create_article<'a>(
        &self,
        slug: &Slug,
        title: &str,
        body: &str,
        author: Option<&'a str>,
        tags: &[String],
    ) -> Result<Article, StoreError> {
        self.call_article(
            "createArticle",
            &CreateArticleParams {
                slug: slug.as_str(),
                title,
                text_content: body,
                author,
                tags,
            },
        )
        .await
    }

    async fn update_article(
        &self,
        id: u64,
        update: &ArticleUpdate,
    ) -> Result<Article, StoreError> {
        self.call_article(
            "updateArticle",
            &UpdateArticleParams {
                id,
                title: &update.title,
                text_content: &update.body,
                author: update.author.as_deref(),
                tags: &update.tags,
            },
        )
        .await
    }

    async fn set_published(&self, id: u64, published: bool) -> Result<Article, StoreError> {
        self.call_article("setArticlePublished", &SetPublishedParams { id, published })
            .await
    }

    async fn delete_article(&self, id: u64) -> Result<(), StoreError> {
        self.call_unit("deleteArticle", &IdParams { id }).await
    }

    async fn article_by_id(&self, id: u64) -> Result<Option<Article>, StoreError> {
        self.call_optional_article("getArticleById", &IdParams { id })
            .await
    }

    async fn article_by_slug(&self, slug: &Slug) -> Result<Option<Article>, StoreError> {
        self.call_optional_article("getArticleBySlug", &SlugParams { slug: slug.as_str() })
            .await
    }

    async fn public_article_by_slug(&self, slug: &Slug) -> Result<Option<Article>, StoreError> {
        self.call_optional_article(
            "getPublicArticleBySlug",
            &SlugParams { slug: slug.as_str() },
        )
        .await
    }

    async fn list_all_admin(&self) -> Result<Vec<Article>, StoreError> {
        self.call_article_list("getAllArticlesAdmin", &NoParams {}).await
    }

    async fn list_published(&self) -> Result<Vec<Article>, StoreError> {
        self.call_article_list("getPublishedArticles", &NoParams {}).await
    }

    async fn search_by_tag(&self, tag: &str) -> Result<Vec<Article>, StoreError> {
        self.call_article_list("searchArticlesByTag", &TagParams { tag })
            .await
    }

    async fn all_slugs_admin(&self) -> Result<Vec<String>, StoreError> {
        self.call("getAllSlugsAdmin", &NoParams {}).await
    }

    async fn caller_profile(&self) -> Result<Option<UserProfile>, StoreError> {
        self.call("getCallerUserProfile", &NoParams {}).await
    }

    async fn save_caller_profile(&self, profile: &UserProfile) -> Result<UserProfile, StoreError> {
        self.call(
            "saveCallerUserProfile",
            &ProfileParams {
                name: &profile.name,
            },
        )
        .await
    }

    async fn caller_user_role(&self) -> Result<UserRole, StoreError> {
        self.call("getCallerUserRole", &NoParams {}).await
    }

    async fn is_caller_admin(&self) -> Result<bool, StoreError> {
        self.call("isCallerAdmin", &NoParams {}).await
    }

    async fn attach_pdf(&self, id: u64, blob: &BlobRef) -> Result<Article, StoreError> {
        self.call_article("attachPdfToArticle", &AttachmentParams { id, url: &blob.url })
            .await
    }

    async fn remove_pdf(&self, id: u64) -> Result<Article, StoreError> {
        self.call_article("removePdfFromArticle", &IdParams { id }).await
    }

    async fn attach_text_file(&self, id: u64, blob: &BlobRef) -> Result<Article, StoreError> {
        self.call_article(
            "attachTextFileToArticle",
            &AttachmentParams { id, url: &blob.url },
        )
        .await
    }

    async fn remove_text_file(&self, id: u64) -> Result<Article, StoreError> {
        self.call_article("removeTextFileFromArticle", &IdParams { id })
            .await
    }

    async fn rest_endpoint_status(&self) -> Result<RestEndpointStatus, StoreError> {
        self.call("getRestEndpointStatus", &NoParams {}).await
    }

    async fn set_rest_endpoint(&self, config: &RestEndpointConfig) -> Result<(), StoreError> {
        self.call_unit("setRestEndpointConfig", config).await
    }

    async fn clear_rest_endpoint(&self) -> Result<(), StoreError> {
        self.call_unit("clearRestEndpointConfig", &NoParams {}).await
    }
}
