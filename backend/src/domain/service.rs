//! Application service orchestrating the store, the cache, and the
//! template fallback.
//!
//! Reads go cache-first and populate the cache on a miss. Mutations hit the
//! store and then invalidate exactly the key families whose cached answers
//! the mutation can change, before the result is returned, so the next read
//! observes the new state. Cache failures are logged and degrade to a
//! straight store call; they never fail a request.

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{info, warn};

use crate::domain::article::{Article, ArticleUpdate, BlobRef, dedup_tags};
use crate::domain::classify::{ClassifiedError, ErrorCategory, classify_store_error};
use crate::domain::error::DomainError;
use crate::domain::ports::article_store::{ArticleStore, StoreError};
use crate::domain::ports::query_cache::{QueryCache, keys};
use crate::domain::rest_endpoint::{RestEndpointConfig, RestEndpointStatus};
use crate::domain::slug::{self, Slug};
use crate::domain::user::{UserProfile, UserRole};

/// Where a feed's articles came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FeedSource {
    /// Straight from the remote store.
    Live,
    /// Substituted from the built-in template catalog.
    Fallback,
}

/// A published-article feed with its provenance and, when the store was
/// unreachable, the classified failure for banner display.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleFeed {
    pub articles: Vec<Article>,
    pub source: FeedSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ClassifiedError>,
}

/// Outcome of a slug availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlugCheck {
    /// Whether the candidate matches the slug grammar at all.
    pub valid: bool,
    /// Whether no other article already uses it. Always false when invalid.
    pub available: bool,
}

/// Orchestrates article reads and writes over the store and cache ports.
#[derive(Clone)]
pub struct ArticleService {
    store: Arc<dyn ArticleStore>,
    cache: Arc<dyn QueryCache>,
}

impl ArticleService {
    #[must_use]
    pub fn new(store: Arc<dyn ArticleStore>, cache: Arc<dyn QueryCache>) -> Self {
        Self { store, cache }
    }

    /// Published articles, cache-first.
    pub async fn list_published(&self) -> Result<Vec<Article>, DomainError> {
        if let Some(cached) = self.cache_get::<Vec<Article>>(keys::PUBLISHED_ARTICLES).await {
            return Ok(cached);
        }
        let articles = self
            .store
            .list_published()
            .await
            .map_err(map_store_error)?;
        self.cache_put(keys::PUBLISHED_ARTICLES, &articles).await;
        Ok(articles)
    }

    /// Published feed with template fallback.
    ///
    /// On store failure, or on an empty feed while the store's own status
    /// probe is also failing, the template catalog stands in — flagged as
    /// fallback and carrying the classified failure, never silently.
    pub async fn list_published_or_fallback(&self) -> ArticleFeed {
        match self.list_published_uncached_on_empty().await {
            Ok(articles) => ArticleFeed {
                articles,
                source: FeedSource::Live,
                error: None,
            },
            Err(error) => {
                warn!(%error, "serving template fallback feed");
                ArticleFeed {
                    articles: template_articles(),
                    source: FeedSource::Fallback,
                    error: Some(classify_store_error(&error)),
                }
            }
        }
    }

    async fn list_published_uncached_on_empty(&self) -> Result<Vec<Article>, StoreError> {
        if let Some(cached) = self.cache_get::<Vec<Article>>(keys::PUBLISHED_ARTICLES).await
            && !cached.is_empty()
        {
            return Ok(cached);
        }
        let articles = self.store.list_published().await?;
        if articles.is_empty() {
            // An empty feed is legitimate; an empty feed from a store whose
            // status probe also fails is indistinguishable from an outage.
            if let Err(probe) = self.store.rest_endpoint_status().await {
                return Err(probe);
            }
        }
        self.cache_put(keys::PUBLISHED_ARTICLES, &articles).await;
        Ok(articles)
    }

    /// Public detail lookup with template fallback when the store is down.
    pub async fn public_by_slug_or_fallback(
        &self,
        slug: &Slug,
    ) -> Result<(Option<Article>, FeedSource), DomainError> {
        let key = keys::public_article(slug.as_str());
        if let Some(cached) = self.cache_get::<Article>(&key).await {
            return Ok((Some(cached), FeedSource::Live));
        }
        match self.store.public_article_by_slug(slug).await {
            Ok(Some(article)) => {
                self.cache_put(&key, &article).await;
                Ok((Some(article), FeedSource::Live))
            }
            Ok(None) => Ok((None, FeedSource::Live)),
            Err(error) => match template_article_by_slug(slug.as_str()) {
                Some(article) => {
                    warn!(%error, slug = slug.as_str(), "serving template fallback article");
                    Ok((Some(article), FeedSource::Fallback))
                }
                None => Err(map_store_error(error)),
            },
        }
    }

    /// Published articles carrying the given tag, cache-first.
    pub async fn search_by_tag(&self, tag: &str) -> Result<Vec<Article>, DomainError> {
        let key = keys::articles_by_tag(tag);
        if let Some(cached) = self.cache_get::<Vec<Article>>(&key).await {
            return Ok(cached);
        }
        let articles = self.store.search_by_tag(tag).await.map_err(map_store_error)?;
        self.cache_put(&key, &articles).await;
        Ok(articles)
    }

    /// Distinct tags across the published feed, sorted.
    pub async fn published_tags(&self) -> Result<Vec<String>, DomainError> {
        let articles = self.list_published().await?;
        let mut tags: Vec<String> = Vec::new();
        for article in &articles {
            for tag in &article.tags {
                if !tags.iter().any(|existing| existing == tag) {
                    tags.push(tag.clone());
                }
            }
        }
        tags.sort();
        Ok(tags)
    }

    /// Every article, drafts included. Admin surface.
    pub async fn list_all_admin(&self) -> Result<Vec<Article>, DomainError> {
        if let Some(cached) = self.cache_get::<Vec<Article>>(keys::ALL_ARTICLES_ADMIN).await {
            return Ok(cached);
        }
        let articles = self.store.list_all_admin().await.map_err(map_store_error)?;
        self.cache_put(keys::ALL_ARTICLES_ADMIN, &articles).await;
        Ok(articles)
    }

    pub async fn article_by_id(&self, id: u64) -> Result<Option<Article>, DomainError> {
        let key = keys::article_by_id(id);
        if let Some(cached) = self.cache_get::<Article>(&key).await {
            return Ok(Some(cached));
        }
        let article = self.store.article_by_id(id).await.map_err(map_store_error)?;
        if let Some(article) = &article {
            self.cache_put(&key, article).await;
        }
        Ok(article)
    }

    /// Create a new article. The slug must be well-formed and unused; the
    /// title must not be blank.
    pub async fn create(
        &self,
        slug: &Slug,
        title: &str,
        body: &str,
        author: Option<&str>,
        tags: Vec<String>,
    ) -> Result<Article, DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::invalid_request("title must not be empty"));
        }
        let existing = self.store.all_slugs_admin().await.map_err(map_store_error)?;
        if existing.iter().any(|taken| taken == slug.as_str()) {
            return Err(DomainError::conflict(format!(
                "slug '{}' is already in use",
                slug.as_str()
            )));
        }
        let tags = dedup_tags(tags);
        let article = self
            .store
            .create_article(slug, title, body, author, &tags)
            .await
            .map_err(map_store_error)?;
        self.invalidate_admin_keys().await;
        info!(id = article.id, slug = slug.as_str(), "article created");
        Ok(article)
    }

    /// Apply an edit to an existing article. The slug is immutable and
    /// absent from the payload.
    pub async fn update(&self, id: u64, update: ArticleUpdate) -> Result<Article, DomainError> {
        if update.title.trim().is_empty() {
            return Err(DomainError::invalid_request("title must not be empty"));
        }
        let update = update.normalized();
        let article = self
            .store
            .update_article(id, &update)
            .await
            .map_err(map_store_error)?;
        self.invalidate_admin_keys().await;
        self.invalidate(&keys::article_by_id(id)).await;
        // Edits to an already published article change the public copy too.
        if article.published {
            self.invalidate_public_keys().await;
        }
        Ok(article)
    }

    /// Toggle public visibility.
    pub async fn set_published(&self, id: u64, published: bool) -> Result<Article, DomainError> {
        let article = self
            .store
            .set_published(id, published)
            .await
            .map_err(map_store_error)?;
        self.invalidate_admin_keys().await;
        self.invalidate(&keys::article_by_id(id)).await;
        self.invalidate_public_keys().await;
        info!(id, published, "article visibility changed");
        Ok(article)
    }

    /// Unconditional hard delete. The confirmation gate lives at the HTTP
    /// layer.
    pub async fn delete(&self, id: u64) -> Result<(), DomainError> {
        self.store.delete_article(id).await.map_err(map_store_error)?;
        self.invalidate_admin_keys().await;
        self.invalidate(&keys::article_by_id(id)).await;
        self.invalidate_public_keys().await;
        info!(id, "article deleted");
        Ok(())
    }

    /// Create-or-refresh every catalog template as a published article.
    /// Returns how many templates were seeded.
    pub async fn seed_templates(&self) -> Result<usize, DomainError> {
        let mut seeded = 0;
        for template in article_templates::catalog() {
            let slug = Slug::new(template.slug)
                .map_err(|error| DomainError::internal(format!("template slug: {error}")))?;
            let existing = self
                .store
                .article_by_slug(&slug)
                .await
                .map_err(map_store_error)?;
            let tags: Vec<String> = template.tags.iter().map(|&t| t.to_owned()).collect();
            let id = match existing {
                Some(article) => {
                    let update = ArticleUpdate {
                        title: template.title.to_owned(),
                        body: template.body.to_owned(),
                        author: template.author.map(str::to_owned),
                        tags,
                    };
                    self.store
                        .update_article(article.id, &update)
                        .await
                        .map_err(map_store_error)?;
                    article.id
                }
                None => {
                    self.store
                        .create_article(
                            &slug,
                            template.title,
                            template.body,
                            template.author,
                            &tags,
                        )
                        .await
                        .map_err(map_store_error)?
                        .id
                }
            };
            self.store
                .set_published(id, true)
                .await
                .map_err(map_store_error)?;
            seeded += 1;
        }
        self.invalidate_admin_keys().await;
        self.invalidate_public_keys().await;
        self.invalidate(keys::ARTICLE_BY_ID_PREFIX).await;
        info!(seeded, "template articles seeded");
        Ok(seeded)
    }

    /// Every slug known to the store, drafts included. Admin surface.
    pub async fn all_slugs(&self) -> Result<Vec<String>, DomainError> {
        if let Some(cached) = self.cache_get::<Vec<String>>(keys::ALL_SLUGS_ADMIN).await {
            return Ok(cached);
        }
        let slugs = self.store.all_slugs_admin().await.map_err(map_store_error)?;
        self.cache_put(keys::ALL_SLUGS_ADMIN, &slugs).await;
        Ok(slugs)
    }

    /// Check a slug candidate for grammar and availability. `current` is
    /// the slug of the article being edited, which does not count against
    /// availability.
    pub async fn check_slug(
        &self,
        candidate: &str,
        current: Option<&str>,
    ) -> Result<SlugCheck, DomainError> {
        if !slug::is_valid_slug(candidate) {
            return Ok(SlugCheck {
                valid: false,
                available: false,
            });
        }
        let slugs = self.all_slugs().await?;
        let taken = slugs
            .iter()
            .any(|existing| existing == candidate && current != Some(existing.as_str()));
        Ok(SlugCheck {
            valid: true,
            available: !taken,
        })
    }

    /// Role the store attributes to the caller. Never cached: the answer
    /// gates the admin surface and must reflect revocations immediately.
    pub async fn caller_role(&self) -> Result<UserRole, DomainError> {
        self.store.caller_user_role().await.map_err(map_store_error)
    }

    /// Whether the store currently answers at all, probed with its
    /// cheapest call.
    pub async fn store_reachable(&self) -> bool {
        self.store.is_caller_admin().await.is_ok()
    }

    /// Caller's saved profile, cache-first.
    pub async fn caller_profile(&self) -> Result<Option<UserProfile>, DomainError> {
        if let Some(cached) = self.cache_get::<UserProfile>(keys::CURRENT_USER_PROFILE).await {
            return Ok(Some(cached));
        }
        let profile = self.store.caller_profile().await.map_err(map_store_error)?;
        if let Some(profile) = &profile {
            self.cache_put(keys::CURRENT_USER_PROFILE, profile).await;
        }
        Ok(profile)
    }

    pub async fn save_caller_profile(
        &self,
        profile: &UserProfile,
    ) -> Result<UserProfile, DomainError> {
        let saved = self
            .store
            .save_caller_profile(profile)
            .await
            .map_err(map_store_error)?;
        self.invalidate(keys::CURRENT_USER_PROFILE).await;
        Ok(saved)
    }

    pub async fn attach_pdf(&self, id: u64, blob: BlobRef) -> Result<Article, DomainError> {
        let article = self.store.attach_pdf(id, &blob).await.map_err(map_store_error)?;
        self.invalidate_after_attachment_change(id).await;
        Ok(article)
    }

    pub async fn remove_pdf(&self, id: u64) -> Result<Article, DomainError> {
        let article = self.store.remove_pdf(id).await.map_err(map_store_error)?;
        self.invalidate_after_attachment_change(id).await;
        Ok(article)
    }

    pub async fn attach_text_file(&self, id: u64, blob: BlobRef) -> Result<Article, DomainError> {
        let article = self
            .store
            .attach_text_file(id, &blob)
            .await
            .map_err(map_store_error)?;
        self.invalidate_after_attachment_change(id).await;
        Ok(article)
    }

    pub async fn remove_text_file(&self, id: u64) -> Result<Article, DomainError> {
        let article = self.store.remove_text_file(id).await.map_err(map_store_error)?;
        self.invalidate_after_attachment_change(id).await;
        Ok(article)
    }

    pub async fn rest_endpoint_status(&self) -> Result<RestEndpointStatus, DomainError> {
        self.store.rest_endpoint_status().await.map_err(map_store_error)
    }

    pub async fn set_rest_endpoint(&self, config: RestEndpointConfig) -> Result<(), DomainError> {
        self.store.set_rest_endpoint(&config).await.map_err(map_store_error)
    }

    pub async fn clear_rest_endpoint(&self) -> Result<(), DomainError> {
        self.store.clear_rest_endpoint().await.map_err(map_store_error)
    }

    async fn invalidate_admin_keys(&self) {
        self.invalidate(keys::ALL_ARTICLES_ADMIN).await;
        self.invalidate(keys::ALL_SLUGS_ADMIN).await;
    }

    async fn invalidate_public_keys(&self) {
        self.invalidate(keys::PUBLISHED_ARTICLES).await;
        self.invalidate(keys::PUBLIC_ARTICLE_PREFIX).await;
        self.invalidate(keys::ARTICLES_BY_TAG_PREFIX).await;
    }

    async fn invalidate_after_attachment_change(&self, id: u64) {
        self.invalidate_admin_keys().await;
        self.invalidate(&keys::article_by_id(id)).await;
        self.invalidate_public_keys().await;
    }

    async fn invalidate(&self, prefix: &str) {
        if let Err(error) = self.cache.invalidate_prefix(prefix).await {
            warn!(%error, prefix, "cache invalidation failed");
        }
    }

    async fn cache_get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.cache.get(key).await {
            Ok(Some(value)) => match serde_json::from_value(value) {
                Ok(decoded) => Some(decoded),
                Err(error) => {
                    warn!(%error, key, "discarding undecodable cache entry");
                    None
                }
            },
            Ok(None) => None,
            Err(error) => {
                warn!(%error, key, "cache read failed");
                None
            }
        }
    }

    async fn cache_put<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(encoded) => {
                if let Err(error) = self.cache.put(key, encoded).await {
                    warn!(%error, key, "cache write failed");
                }
            }
            Err(error) => warn!(%error, key, "cache encode failed"),
        }
    }
}

/// The catalog rendered as published article records.
#[must_use]
pub fn template_articles() -> Vec<Article> {
    article_templates::catalog()
        .iter()
        .enumerate()
        .map(|(index, template)| Article::from_template(template, index))
        .collect()
}

fn template_article_by_slug(slug: &str) -> Option<Article> {
    article_templates::catalog()
        .iter()
        .enumerate()
        .find(|(_, template)| template.slug == slug)
        .map(|(index, template)| Article::from_template(template, index))
}

/// Map a store failure onto the HTTP-facing error vocabulary via its
/// classified category.
fn map_store_error(error: StoreError) -> DomainError {
    let classified = classify_store_error(&error);
    let domain_error = match classified.category {
        ErrorCategory::Unauthorized => DomainError::unauthorized(&classified.user_message),
        ErrorCategory::NotFound => DomainError::not_found(&classified.user_message),
        ErrorCategory::CanisterStopped
        | ErrorCategory::CanisterUnavailable
        | ErrorCategory::NetworkError
        | ErrorCategory::Unknown => DomainError::service_unavailable(&classified.user_message),
    };
    domain_error.with_details(
        serde_json::to_value(&classified)
            .unwrap_or_else(|_| serde_json::Value::String(classified.technical_details)),
    )
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use std::sync::Arc;

    use mockall::predicate::eq;
    use rstest::rstest;

    use super::*;
    use crate::domain::error::ErrorCode;
    use crate::domain::ports::article_store::MockArticleStore;
    use crate::domain::ports::query_cache::MockQueryCache;

    fn article(id: u64, slug: &str, published: bool) -> Article {
        Article {
            id,
            slug: Slug::new(slug).expect("test slug is valid"),
            title: format!("Title {id}"),
            body: "Body".to_owned(),
            author: None,
            tags: vec!["hr".to_owned()],
            published,
            timestamp_nanos: 1_700_000_000_000_000_000,
            pdf: None,
            text_attachment: None,
        }
    }

    fn passive_cache() -> MockQueryCache {
        let mut cache = MockQueryCache::new();
        cache.expect_get().returning(|_| Ok(None));
        cache.expect_put().returning(|_, _| Ok(()));
        cache.expect_invalidate_prefix().returning(|_| Ok(()));
        cache
    }

    fn service(store: MockArticleStore, cache: MockQueryCache) -> ArticleService {
        ArticleService::new(Arc::new(store), Arc::new(cache))
    }

    #[rstest]
    #[actix_rt::test]
    async fn list_published_caches_the_store_answer() {
        let mut store = MockArticleStore::new();
        store
            .expect_list_published()
            .times(1)
            .returning(|| Ok(vec![article(1, "one", true)]));
        let mut cache = MockQueryCache::new();
        cache.expect_get().returning(|_| Ok(None));
        cache
            .expect_put()
            .withf(|key, _| key == keys::PUBLISHED_ARTICLES)
            .times(1)
            .returning(|_, _| Ok(()));

        let listed = service(store, cache)
            .list_published()
            .await
            .expect("store succeeds");
        assert_eq!(listed.len(), 1);
    }

    #[rstest]
    #[actix_rt::test]
    async fn cache_hit_skips_the_store() {
        let store = MockArticleStore::new();
        let mut cache = MockQueryCache::new();
        cache.expect_get().with(eq(keys::PUBLISHED_ARTICLES)).returning(|_| {
            Ok(Some(
                serde_json::to_value(vec![article(9, "cached", true)]).expect("encodes"),
            ))
        });

        let listed = service(store, cache)
            .list_published()
            .await
            .expect("cache hit");
        assert_eq!(listed[0].id, 9);
    }

    #[rstest]
    #[actix_rt::test]
    async fn store_failure_yields_flagged_template_fallback() {
        let mut store = MockArticleStore::new();
        store
            .expect_list_published()
            .returning(|| Err(StoreError::transport("connect ECONNREFUSED")));
        let feed = service(store, passive_cache()).list_published_or_fallback().await;

        assert_eq!(feed.source, FeedSource::Fallback);
        assert_eq!(feed.articles.len(), article_templates::catalog().len());
        let error = feed.error.expect("fallback carries the classified failure");
        assert_eq!(error.category, ErrorCategory::NetworkError);
        assert!(error.is_retryable);
        assert!(feed.articles.iter().all(|a| a.published));
    }

    #[rstest]
    #[actix_rt::test]
    async fn empty_feed_with_healthy_probe_stays_live() {
        let mut store = MockArticleStore::new();
        store.expect_list_published().returning(|| Ok(Vec::new()));
        store.expect_rest_endpoint_status().returning(|| {
            Ok(RestEndpointStatus {
                status: "ok".to_owned(),
                config: None,
            })
        });
        let feed = service(store, passive_cache()).list_published_or_fallback().await;
        assert_eq!(feed.source, FeedSource::Live);
        assert!(feed.articles.is_empty());
        assert!(feed.error.is_none());
    }

    #[rstest]
    #[actix_rt::test]
    async fn create_rejects_duplicate_slug_before_calling_the_store() {
        let mut store = MockArticleStore::new();
        store
            .expect_all_slugs_admin()
            .returning(|| Ok(vec!["taken".to_owned()]));
        let slug = Slug::new("taken").expect("valid");
        let error = service(store, passive_cache())
            .create(&slug, "Title", "Body", None, Vec::new())
            .await
            .expect_err("duplicate slug");
        assert_eq!(error.code(), ErrorCode::Conflict);
    }

    #[rstest]
    #[actix_rt::test]
    async fn create_rejects_blank_title() {
        let store = MockArticleStore::new();
        let slug = Slug::new("fresh").expect("valid");
        let error = service(store, passive_cache())
            .create(&slug, "   ", "Body", None, Vec::new())
            .await
            .expect_err("blank title");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    #[actix_rt::test]
    async fn publish_invalidates_public_and_admin_key_families() {
        let mut store = MockArticleStore::new();
        store
            .expect_set_published()
            .with(eq(7), eq(true))
            .returning(|id, published| {
                let mut a = article(id, "seven", false);
                a.published = published;
                Ok(a)
            });
        let mut cache = MockQueryCache::new();
        for prefix in [
            keys::ALL_ARTICLES_ADMIN,
            keys::ALL_SLUGS_ADMIN,
            "article:7",
            keys::PUBLISHED_ARTICLES,
            keys::PUBLIC_ARTICLE_PREFIX,
            keys::ARTICLES_BY_TAG_PREFIX,
        ] {
            cache
                .expect_invalidate_prefix()
                .with(eq(prefix))
                .times(1)
                .returning(|_| Ok(()));
        }

        let updated = service(store, cache)
            .set_published(7, true)
            .await
            .expect("publish succeeds");
        assert!(updated.published);
    }

    #[rstest]
    #[actix_rt::test]
    async fn detail_fallback_matches_template_by_slug() {
        let template_slug = article_templates::catalog()[0].slug;
        let mut store = MockArticleStore::new();
        store
            .expect_public_article_by_slug()
            .returning(|_| Err(StoreError::transport("network unreachable")));

        let slug = Slug::new(template_slug).expect("catalog slug is valid");
        let (found, source) = service(store, passive_cache())
            .public_by_slug_or_fallback(&slug)
            .await
            .expect("fallback found");
        assert_eq!(source, FeedSource::Fallback);
        assert_eq!(found.expect("template").slug.as_str(), template_slug);
    }

    #[rstest]
    #[actix_rt::test]
    async fn detail_fallback_miss_surfaces_the_store_failure() {
        let mut store = MockArticleStore::new();
        store
            .expect_public_article_by_slug()
            .returning(|_| Err(StoreError::transport("network unreachable")));

        let slug = Slug::new("no-such-template").expect("valid");
        let error = service(store, passive_cache())
            .public_by_slug_or_fallback(&slug)
            .await
            .expect_err("no template to fall back to");
        assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
    }

    #[rstest]
    #[case("new-slug", None, true, true)]
    #[case("taken", None, true, false)]
    #[case("taken", Some("taken"), true, true)]
    #[case("Bad Slug", None, false, false)]
    #[actix_rt::test]
    async fn slug_check_grammar_and_availability(
        #[case] candidate: &str,
        #[case] current: Option<&str>,
        #[case] valid: bool,
        #[case] available: bool,
    ) {
        let mut store = MockArticleStore::new();
        store
            .expect_all_slugs_admin()
            .returning(|| Ok(vec!["taken".to_owned()]));
        let check = service(store, passive_cache())
            .check_slug(candidate, current)
            .await
            .expect("check runs");
        assert_eq!(check.valid, valid);
        assert_eq!(check.available, available);
    }

    #[rstest]
    #[actix_rt::test]
    async fn caller_role_is_read_from_the_store() {
        let mut store = MockArticleStore::new();
        store
            .expect_caller_user_role()
            .times(1)
            .returning(|| Ok(UserRole::Admin));
        let role = service(store, passive_cache())
            .caller_role()
            .await
            .expect("store answers");
        assert_eq!(role, UserRole::Admin);
    }

    #[rstest]
    #[actix_rt::test]
    async fn reachability_probe_tracks_the_store() {
        let mut up = MockArticleStore::new();
        up.expect_is_caller_admin().returning(|| Ok(false));
        assert!(service(up, passive_cache()).store_reachable().await);

        let mut down = MockArticleStore::new();
        down.expect_is_caller_admin()
            .returning(|| Err(StoreError::transport("connection refused")));
        assert!(!service(down, passive_cache()).store_reachable().await);
    }

    #[rstest]
    #[actix_rt::test]
    async fn unauthorized_store_error_maps_to_unauthorized_code() {
        let mut store = MockArticleStore::new();
        store
            .expect_list_all_admin()
            .returning(|| Err(StoreError::rejected("Unauthorized: admin only")));
        let error = service(store, passive_cache())
            .list_all_admin()
            .await
            .expect_err("rejected");
        assert_eq!(error.code(), ErrorCode::Unauthorized);
    }
}
