//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] aggregates every HTTP endpoint and the wire schemas into one
//! OpenAPI specification for external tooling.

use utoipa::OpenApi;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};

use crate::domain::{
    Article, ArticleUpdate, BlobRef, ClassifiedError, ErrorCategory, ErrorCode,
    RestEndpointConfig, RestEndpointStatus, SlugCheck, UserProfile, UserRole,
};
use crate::domain::service::FeedSource;
use crate::inbound::http::admin::{
    AttachmentRequest, CreateArticleRequest, PublishRequest, SeedResponse,
};
use crate::inbound::http::articles::{ArticleDetail, ArticleSummary, FeedResponse};
use crate::inbound::http::error::ApiError;
use crate::inbound::http::health::ReadyResponse;
use crate::inbound::http::newsletter::{SignupRequest, SignupResponse};
use crate::inbound::http::profile::{ProfileRequest, SessionResponse};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);
        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/session.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Pressroom API",
        description = "Public article feed, admin editor surface, and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::articles::list_articles,
        crate::inbound::http::articles::get_article,
        crate::inbound::http::articles::list_tags,
        crate::inbound::http::newsletter::subscribe,
        crate::inbound::http::profile::start_session,
        crate::inbound::http::profile::current_session,
        crate::inbound::http::profile::end_session,
        crate::inbound::http::profile::get_profile,
        crate::inbound::http::profile::save_profile,
        crate::inbound::http::admin::list_all,
        crate::inbound::http::admin::get_by_id,
        crate::inbound::http::admin::create,
        crate::inbound::http::admin::update,
        crate::inbound::http::admin::set_published,
        crate::inbound::http::admin::delete_article,
        crate::inbound::http::admin::list_slugs,
        crate::inbound::http::admin::check_slug,
        crate::inbound::http::admin::seed_templates,
        crate::inbound::http::admin::attach_pdf,
        crate::inbound::http::admin::remove_pdf,
        crate::inbound::http::admin::attach_text_file,
        crate::inbound::http::admin::remove_text_file,
        crate::inbound::http::admin::rest_endpoint_status,
        crate::inbound::http::admin::set_rest_endpoint,
        crate::inbound::http::admin::clear_rest_endpoint,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Article,
        ArticleUpdate,
        BlobRef,
        ClassifiedError,
        ErrorCategory,
        ErrorCode,
        FeedSource,
        RestEndpointConfig,
        RestEndpointStatus,
        SlugCheck,
        UserProfile,
        UserRole,
        ApiError,
        ArticleDetail,
        ArticleSummary,
        FeedResponse,
        CreateArticleRequest,
        PublishRequest,
        AttachmentRequest,
        SeedResponse,
        SignupRequest,
        SignupResponse,
        SessionResponse,
        ProfileRequest,
        ReadyResponse,
    )),
    tags(
        (name = "articles", description = "Public article feed and detail"),
        (name = "newsletter", description = "Newsletter signups"),
        (name = "session", description = "Session and caller profile"),
        (name = "admin", description = "Editor surface, admin role required"),
        (name = "health", description = "Health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use utoipa::OpenApi;

    use super::*;

    #[test]
    fn every_surface_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/articles",
            "/api/v1/articles/{slug}",
            "/api/v1/tags",
            "/api/v1/newsletter",
            "/api/v1/session",
            "/api/v1/profile",
            "/api/v1/admin/articles",
            "/api/v1/admin/articles/{id}",
            "/api/v1/admin/seed-templates",
            "/api/v1/admin/rest-endpoint",
            "/health/ready",
            "/health/live",
        ] {
            assert!(
                doc.paths.paths.contains_key(path),
                "missing path {path} in OpenAPI document"
            );
        }
    }
}
