//! Admin endpoints: the editor's CRUD surface, seeding, attachments, and
//! store configuration. Every handler demands the admin role from the
//! session before touching the service.

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Article, ArticleUpdate, BlobRef, DomainError, RestEndpointConfig, RestEndpointStatus, Slug,
    SlugCheck,
};
use crate::inbound::http::error::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    pub slug: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PublishRequest {
    pub published: bool,
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Deserialize)]
pub struct SlugCheckQuery {
    pub slug: String,
    /// Slug of the article being edited; it never counts as a collision.
    pub current: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AttachmentRequest {
    pub url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SeedResponse {
    pub seeded: usize,
}

/// Every article, drafts included.
#[utoipa::path(
    get,
    path = "/api/v1/admin/articles",
    responses(
        (status = 200, description = "All articles", body = [Article]),
        (status = 403, description = "Admin role required")
    ),
    tags = ["admin"],
    operation_id = "listAllArticles"
)]
#[get("/admin/articles")]
pub async fn list_all(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<Article>>> {
    session.require_admin()?;
    Ok(web::Json(state.articles.list_all_admin().await?))
}

/// One article by store identifier, drafts included.
#[utoipa::path(
    get,
    path = "/api/v1/admin/articles/{id}",
    params(("id" = u64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article", body = Article),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "No article with this identifier")
    ),
    tags = ["admin"],
    operation_id = "getArticleAdmin"
)]
#[get("/admin/articles/{id}")]
pub async fn get_by_id(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<Article>> {
    session.require_admin()?;
    let article = state
        .articles
        .article_by_id(path.into_inner())
        .await?
        .ok_or_else(|| DomainError::not_found("The requested content could not be found."))?;
    Ok(web::Json(article))
}

/// Create a draft article.
#[utoipa::path(
    post,
    path = "/api/v1/admin/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 200, description = "Created article", body = Article),
        (status = 400, description = "Malformed slug or blank title"),
        (status = 403, description = "Admin role required"),
        (status = 409, description = "Slug already in use")
    ),
    tags = ["admin"],
    operation_id = "createArticle"
)]
#[post("/admin/articles")]
pub async fn create(
    session: SessionContext,
    state: web::Data<HttpState>,
    body: web::Json<CreateArticleRequest>,
) -> ApiResult<web::Json<Article>> {
    session.require_admin()?;
    let request = body.into_inner();
    let slug = Slug::new(&request.slug)
        .map_err(|error| DomainError::invalid_request(error.to_string()))?;
    let article = state
        .articles
        .create(
            &slug,
            &request.title,
            &request.body,
            request.author.as_deref(),
            request.tags,
        )
        .await?;
    Ok(web::Json(article))
}

/// Edit title, body, byline, or tags. The slug is immutable.
#[utoipa::path(
    put,
    path = "/api/v1/admin/articles/{id}",
    params(("id" = u64, Path, description = "Article identifier")),
    request_body = ArticleUpdate,
    responses(
        (status = 200, description = "Updated article", body = Article),
        (status = 403, description = "Admin role required")
    ),
    tags = ["admin"],
    operation_id = "updateArticle"
)]
#[put("/admin/articles/{id}")]
pub async fn update(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    body: web::Json<ArticleUpdate>,
) -> ApiResult<web::Json<Article>> {
    session.require_admin()?;
    let article = state
        .articles
        .update(path.into_inner(), body.into_inner())
        .await?;
    Ok(web::Json(article))
}

/// Toggle public visibility.
#[utoipa::path(
    post,
    path = "/api/v1/admin/articles/{id}/publish",
    params(("id" = u64, Path, description = "Article identifier")),
    request_body = PublishRequest,
    responses(
        (status = 200, description = "Article with updated visibility", body = Article),
        (status = 403, description = "Admin role required")
    ),
    tags = ["admin"],
    operation_id = "setArticlePublished"
)]
#[post("/admin/articles/{id}/publish")]
pub async fn set_published(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    body: web::Json<PublishRequest>,
) -> ApiResult<web::Json<Article>> {
    session.require_admin()?;
    let article = state
        .articles
        .set_published(path.into_inner(), body.published)
        .await?;
    Ok(web::Json(article))
}

/// Hard delete. Requires `?confirm=true`; the deletion is unrecoverable.
#[utoipa::path(
    delete,
    path = "/api/v1/admin/articles/{id}",
    params(
        ("id" = u64, Path, description = "Article identifier"),
        ("confirm" = bool, Query, description = "Must be true")
    ),
    responses(
        (status = 204, description = "Article deleted"),
        (status = 400, description = "Missing confirmation"),
        (status = 403, description = "Admin role required")
    ),
    tags = ["admin"],
    operation_id = "deleteArticle"
)]
#[delete("/admin/articles/{id}")]
pub async fn delete_article(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    query: web::Query<DeleteQuery>,
) -> ApiResult<actix_web::HttpResponse> {
    session.require_admin()?;
    if !query.confirm {
        return Err(
            DomainError::invalid_request("deletion requires explicit confirmation").into(),
        );
    }
    state.articles.delete(path.into_inner()).await?;
    Ok(actix_web::HttpResponse::NoContent().finish())
}

/// Every slug known to the store.
#[utoipa::path(
    get,
    path = "/api/v1/admin/slugs",
    responses(
        (status = 200, description = "All slugs", body = [String]),
        (status = 403, description = "Admin role required")
    ),
    tags = ["admin"],
    operation_id = "listSlugs"
)]
#[get("/admin/slugs")]
pub async fn list_slugs(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<String>>> {
    session.require_admin()?;
    Ok(web::Json(state.articles.all_slugs().await?))
}

/// Grammar and availability check for a slug candidate.
#[utoipa::path(
    get,
    path = "/api/v1/admin/slugs/check",
    params(
        ("slug" = String, Query, description = "Candidate slug"),
        ("current" = Option<String>, Query, description = "Slug of the article being edited")
    ),
    responses(
        (status = 200, description = "Check outcome", body = SlugCheck),
        (status = 403, description = "Admin role required")
    ),
    tags = ["admin"],
    operation_id = "checkSlug"
)]
#[get("/admin/slugs/check")]
pub async fn check_slug(
    session: SessionContext,
    state: web::Data<HttpState>,
    query: web::Query<SlugCheckQuery>,
) -> ApiResult<web::Json<SlugCheck>> {
    session.require_admin()?;
    let check = state
        .articles
        .check_slug(&query.slug, query.current.as_deref())
        .await?;
    Ok(web::Json(check))
}

/// Create-or-refresh every built-in template as a published article.
#[utoipa::path(
    post,
    path = "/api/v1/admin/seed-templates",
    responses(
        (status = 200, description = "Seeding outcome", body = SeedResponse),
        (status = 403, description = "Admin role required")
    ),
    tags = ["admin"],
    operation_id = "seedTemplates"
)]
#[post("/admin/seed-templates")]
pub async fn seed_templates(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<SeedResponse>> {
    session.require_admin()?;
    let seeded = state.articles.seed_templates().await?;
    Ok(web::Json(SeedResponse { seeded }))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/articles/{id}/pdf",
    params(("id" = u64, Path, description = "Article identifier")),
    request_body = AttachmentRequest,
    responses(
        (status = 200, description = "Article with attachment", body = Article),
        (status = 403, description = "Admin role required")
    ),
    tags = ["admin"],
    operation_id = "attachPdf"
)]
#[put("/admin/articles/{id}/pdf")]
pub async fn attach_pdf(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    body: web::Json<AttachmentRequest>,
) -> ApiResult<web::Json<Article>> {
    session.require_admin()?;
    let blob = BlobRef {
        url: body.into_inner().url,
    };
    Ok(web::Json(
        state.articles.attach_pdf(path.into_inner(), blob).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/articles/{id}/pdf",
    params(("id" = u64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article without attachment", body = Article),
        (status = 403, description = "Admin role required")
    ),
    tags = ["admin"],
    operation_id = "removePdf"
)]
#[delete("/admin/articles/{id}/pdf")]
pub async fn remove_pdf(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<Article>> {
    session.require_admin()?;
    Ok(web::Json(state.articles.remove_pdf(path.into_inner()).await?))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/articles/{id}/text-attachment",
    params(("id" = u64, Path, description = "Article identifier")),
    request_body = AttachmentRequest,
    responses(
        (status = 200, description = "Article with attachment", body = Article),
        (status = 403, description = "Admin role required")
    ),
    tags = ["admin"],
    operation_id = "attachTextFile"
)]
#[put("/admin/articles/{id}/text-attachment")]
pub async fn attach_text_file(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    body: web::Json<AttachmentRequest>,
) -> ApiResult<web::Json<Article>> {
    session.require_admin()?;
    let blob = BlobRef {
        url: body.into_inner().url,
    };
    Ok(web::Json(
        state
            .articles
            .attach_text_file(path.into_inner(), blob)
            .await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/articles/{id}/text-attachment",
    params(("id" = u64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article without attachment", body = Article),
        (status = 403, description = "Admin role required")
    ),
    tags = ["admin"],
    operation_id = "removeTextFile"
)]
#[delete("/admin/articles/{id}/text-attachment")]
pub async fn remove_text_file(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<Article>> {
    session.require_admin()?;
    Ok(web::Json(
        state.articles.remove_text_file(path.into_inner()).await?,
    ))
}

/// Current outbound REST endpoint configuration of the store.
#[utoipa::path(
    get,
    path = "/api/v1/admin/rest-endpoint",
    responses(
        (status = 200, description = "Endpoint status", body = RestEndpointStatus),
        (status = 403, description = "Admin role required")
    ),
    tags = ["admin"],
    operation_id = "getRestEndpoint"
)]
#[get("/admin/rest-endpoint")]
pub async fn rest_endpoint_status(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<RestEndpointStatus>> {
    session.require_admin()?;
    Ok(web::Json(state.articles.rest_endpoint_status().await?))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/rest-endpoint",
    request_body = RestEndpointConfig,
    responses(
        (status = 204, description = "Configuration stored"),
        (status = 403, description = "Admin role required")
    ),
    tags = ["admin"],
    operation_id = "setRestEndpoint"
)]
#[put("/admin/rest-endpoint")]
pub async fn set_rest_endpoint(
    session: SessionContext,
    state: web::Data<HttpState>,
    body: web::Json<RestEndpointConfig>,
) -> ApiResult<actix_web::HttpResponse> {
    session.require_admin()?;
    state.articles.set_rest_endpoint(body.into_inner()).await?;
    Ok(actix_web::HttpResponse::NoContent().finish())
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/rest-endpoint",
    responses(
        (status = 204, description = "Configuration cleared"),
        (status = 403, description = "Admin role required")
    ),
    tags = ["admin"],
    operation_id = "clearRestEndpoint"
)]
#[delete("/admin/rest-endpoint")]
pub async fn clear_rest_endpoint(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<actix_web::HttpResponse> {
    session.require_admin()?;
    state.articles.clear_rest_endpoint().await?;
    Ok(actix_web::HttpResponse::NoContent().finish())
}
