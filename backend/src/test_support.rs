//! Test doubles shared between unit and integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::article::{Article, ArticleUpdate, BlobRef};
use crate::domain::ports::article_store::{ArticleStore, StoreError};
use crate::domain::rest_endpoint::{RestEndpointConfig, RestEndpointStatus};
use crate::domain::slug::Slug;
use crate::domain::user::{UserProfile, UserRole};

fn now_nanos() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis())
        .unwrap_or(0)
        .saturating_mul(1_000_000)
}

/// In-memory [`ArticleStore`] with the same visible semantics as the remote
/// service.
#[derive(Default)]
pub struct InMemoryArticleStore {
    articles: RwLock<Vec<Article>>,
    profile: RwLock<Option<UserProfile>>,
    role: RwLock<UserRole>,
    rest_endpoint: RwLock<Option<RestEndpointConfig>>,
    next_id: AtomicU64,
}

impl InMemoryArticleStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            ..Self::default()
        }
    }

    /// Seed the store with existing records; the next generated id follows
    /// the highest seeded one.
    #[must_use]
    pub fn with_articles(articles: Vec<Article>) -> Self {
        let next = articles.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        Self {
            articles: RwLock::new(articles),
            next_id: AtomicU64::new(next),
            ..Self::default()
        }
    }

    /// Make the store report the caller as an admin.
    #[must_use]
    pub fn with_admin_caller(mut self) -> Self {
        self.role = RwLock::new(UserRole::Admin);
        self
    }

    async fn mutate<F>(&self, id: u64, apply: F) -> Result<Article, StoreError>
    where
        F: FnOnce(&mut Article),
    {
        let mut articles = self.articles.write().await;
        let article = articles
            .iter_mut()
            .find(|article| article.id == id)
            .ok_or_else(|| StoreError::rejected(format!("Article {id} not found")))?;
        apply(article);
        Ok(article.clone())
    }
}

#[async_trait]
impl ArticleStore for InMemoryArticleStore {
    async fn create_article<'a>(
        &self,
        slug: &Slug,
        title: &str,
        body: &str,
        author: Option<&'a str>,
        tags: &[String],
    ) -> Result<Article, StoreError> {
        let mut articles = self.articles.write().await;
        if articles.iter().any(|article| article.slug == *slug) {
            return Err(StoreError::rejected(format!(
                "slug '{}' already exists",
                slug.as_str()
            )));
        }
        let article = Article {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            slug: slug.clone(),
            title: title.to_owned(),
            body: body.to_owned(),
            author: author.map(str::to_owned),
            tags: tags.to_vec(),
            published: false,
            timestamp_nanos: now_nanos(),
            pdf: None,
            text_attachment: None,
        };
        articles.push(article.clone());
        Ok(article)
    }

    async fn update_article(
        &self,
        id: u64,
        update: &ArticleUpdate,
    ) -> Result<Article, StoreError> {
        let update = update.clone();
        self.mutate(id, move |article| {
            article.title = update.title;
            article.body = update.body;
            article.author = update.author;
            article.tags = update.tags;
        })
        .await
    }

    async fn set_published(&self, id: u64, published: bool) -> Result<Article, StoreError> {
        self.mutate(id, |article| article.published = published).await
    }

    async fn delete_article(&self, id: u64) -> Result<(), StoreError> {
        let mut articles = self.articles.write().await;
        let before = articles.len();
        articles.retain(|article| article.id != id);
        if articles.len() == before {
            return Err(StoreError::rejected(format!("Article {id} not found")));
        }
        Ok(())
    }

    async fn article_by_id(&self, id: u64) -> Result<Option<Article>, StoreError> {
        Ok(self
            .articles
            .read()
            .await
            .iter()
            .find(|article| article.id == id)
            .cloned())
    }

    async fn article_by_slug(&self, slug: &Slug) -> Result<Option<Article>, StoreError> {
        Ok(self
            .articles
            .read()
            .await
            .iter()
            .find(|article| article.slug == *slug)
            .cloned())
    }

    async fn public_article_by_slug(&self, slug: &Slug) -> Result<Option<Article>, StoreError> {
        Ok(self
            .articles
            .read()
            .await
            .iter()
            .find(|article| article.slug == *slug && article.published)
            .cloned())
    }

    async fn list_all_admin(&self) -> Result<Vec<Article>, StoreError> {
        Ok(self.articles.read().await.clone())
    }

    async fn list_published(&self) -> Result<Vec<Article>, StoreError> {
        Ok(self
            .articles
            .read()
            .await
            .iter()
            .filter(|article| article.published)
            .cloned()
            .collect())
    }

    async fn search_by_tag(&self, tag: &str) -> Result<Vec<Article>, StoreError> {
        Ok(self
            .articles
            .read()
            .await
            .iter()
            .filter(|article| article.published && article.tags.iter().any(|t| t == tag))
            .cloned()
            .collect())
    }

    async fn all_slugs_admin(&self) -> Result<Vec<String>, StoreError> {
        Ok(self
            .articles
            .read()
            .await
            .iter()
            .map(|article| article.slug.as_str().to_owned())
            .collect())
    }

    async fn caller_profile(&self) -> Result<Option<UserProfile>, StoreError> {
        Ok(self.profile.read().await.clone())
    }

    async fn save_caller_profile(&self, profile: &UserProfile) -> Result<UserProfile, StoreError> {
        *self.profile.write().await = Some(profile.clone());
        Ok(profile.clone())
    }

    async fn caller_user_role(&self) -> Result<UserRole, StoreError> {
        Ok(*self.role.read().await)
    }

    async fn is_caller_admin(&self) -> Result<bool, StoreError> {
        Ok(self.role.read().await.is_admin())
    }

    async fn attach_pdf(&self, id: u64, blob: &BlobRef) -> Result<Article, StoreError> {
        let blob = blob.clone();
        self.mutate(id, move |article| article.pdf = Some(blob)).await
    }

    async fn remove_pdf(&self, id: u64) -> Result<Article, StoreError> {
        self.mutate(id, |article| article.pdf = None).await
    }

    async fn attach_text_file(&self, id: u64, blob: &BlobRef) -> Result<Article, StoreError> {
        let blob = blob.clone();
        self.mutate(id, move |article| article.text_attachment = Some(blob))
            .await
    }

    async fn remove_text_file(&self, id: u64) -> Result<Article, StoreError> {
        self.mutate(id, |article| article.text_attachment = None).await
    }

    async fn rest_endpoint_status(&self) -> Result<RestEndpointStatus, StoreError> {
        let config = self.rest_endpoint.read().await.clone();
        Ok(RestEndpointStatus {
            status: if config.is_some() {
                "configured".to_owned()
            } else {
                "unconfigured".to_owned()
            },
            config,
        })
    }

    async fn set_rest_endpoint(&self, config: &RestEndpointConfig) -> Result<(), StoreError> {
        *self.rest_endpoint.write().await = Some(config.clone());
        Ok(())
    }

    async fn clear_rest_endpoint(&self) -> Result<(), StoreError> {
        *self.rest_endpoint.write().await = None;
        Ok(())
    }
}

/// [`ArticleStore`] whose every call fails like a dead network link.
pub struct UnreachableArticleStore;

impl UnreachableArticleStore {
    fn failure() -> StoreError {
        StoreError::transport("network failure: connection refused")
    }
}

#[async_trait]
impl ArticleStore for UnreachableArticleStore {
    async fn create_article<'a>(
        &self,
        _slug: &Slug,
        _title: &str,
        _body: &str,
        _author: Option<&'a str>,
        _tags: &[String],
    ) -> Result<Article, StoreError> {
        Err(Self::failure())
    }

    async fn update_article(
        &self,
        _id: u64,
        _update: &ArticleUpdate,
    ) -> Result<Article, StoreError> {
        Err(Self::failure())
    }

    async fn set_published(&self, _id: u64, _published: bool) -> Result<Article, StoreError> {
        Err(Self::failure())
    }

    async fn delete_article(&self, _id: u64) -> Result<(), StoreError> {
        Err(Self::failure())
    }

    async fn article_by_id(&self, _id: u64) -> Result<Option<Article>, StoreError> {
        Err(Self::failure())
    }

    async fn article_by_slug(&self, _slug: &Slug) -> Result<Option<Article>, StoreError> {
        Err(Self::failure())
    }

    async fn public_article_by_slug(&self, _slug: &Slug) -> Result<Option<Article>, StoreError> {
        Err(Self::failure())
    }

    async fn list_all_admin(&self) -> Result<Vec<Article>, StoreError> {
        Err(Self::failure())
    }

    async fn list_published(&self) -> Result<Vec<Article>, StoreError> {
        Err(Self::failure())
    }

    async fn search_by_tag(&self, _tag: &str) -> Result<Vec<Article>, StoreError> {
        Err(Self::failure())
    }

    async fn all_slugs_admin(&self) -> Result<Vec<String>, StoreError> {
        Err(Self::failure())
    }

    async fn caller_profile(&self) -> Result<Option<UserProfile>, StoreError> {
        Err(Self::failure())
    }

    async fn save_caller_profile(
        &self,
        _profile: &UserProfile,
    ) -> Result<UserProfile, StoreError> {
        Err(Self::failure())
    }

    async fn caller_user_role(&self) -> Result<UserRole, StoreError> {
        Err(Self::failure())
    }

    async fn is_caller_admin(&self) -> Result<bool, StoreError> {
        Err(Self::failure())
    }

    async fn attach_pdf(&self, _id: u64, _blob: &BlobRef) -> Result<Article, StoreError> {
        Err(Self::failure())
    }

    async fn remove_pdf(&self, _id: u64) -> Result<Article, StoreError> {
        Err(Self::failure())
    }

    async fn attach_text_file(&self, _id: u64, _blob: &BlobRef) -> Result<Article, StoreError> {
        Err(Self::failure())
    }

    async fn remove_text_file(&self, _id: u64) -> Result<Article, StoreError> {
        Err(Self::failure())
    }

    async fn rest_endpoint_status(&self) -> Result<RestEndpointStatus, StoreError> {
        Err(Self::failure())
    }

    async fn set_rest_endpoint(&self, _config: &RestEndpointConfig) -> Result<(), StoreError> {
        Err(Self::failure())
    }

    async fn clear_rest_endpoint(&self) -> Result<(), StoreError> {
        Err(Self::failure())
    }
}
