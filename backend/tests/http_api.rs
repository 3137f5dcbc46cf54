//! End-to-end tests over the HTTP surface with in-process store doubles.

use std::sync::Arc;

use actix_web::cookie::{Key, SameSite};
use actix_web::http::StatusCode;
use actix_web::{test, web};
use serde_json::{Value, json};

use pressroom::domain::ArticleService;
use pressroom::domain::ports::article_store::ArticleStore;
use pressroom::inbound::http::HttpState;
use pressroom::inbound::http::health::HealthState;
use pressroom::outbound::MemoryQueryCache;
use pressroom::server::{AppDependencies, build_app};
use pressroom::test_support::{InMemoryArticleStore, UnreachableArticleStore};

fn app_deps(store: Arc<dyn ArticleStore>) -> AppDependencies {
    let service = ArticleService::new(store, Arc::new(MemoryQueryCache::new()));
    AppDependencies {
        health_state: web::Data::new(HealthState::new()),
        http_state: web::Data::new(HttpState::new(service)),
        key: Key::generate(),
        cookie_secure: false,
        same_site: SameSite::Lax,
    }
}

macro_rules! init_app {
    ($store:expr) => {
        test::init_service(build_app(app_deps($store))).await
    };
}

/// Establish a session; the store decides the role it carries.
async fn session_cookie<S>(app: &S) -> actix_web::cookie::Cookie<'static>
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let res = test::call_service(
        app,
        test::TestRequest::post().uri("/api/v1/session").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie issued")
        .into_owned()
}

#[actix_web::test]
async fn admin_surface_is_forbidden_without_an_admin_session() {
    let app = init_app!(Arc::new(InMemoryArticleStore::new()));

    let denied = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/admin/articles")
            .to_request(),
    )
    .await;
    assert_eq!(denied.status(), StatusCode::FORBIDDEN);

    // The store reports this caller as a non-admin, so a session cookie
    // does not help.
    let cookie = session_cookie(&app).await;
    let still_denied = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/admin/articles")
            .cookie(cookie)
            .set_json(json!({ "slug": "x", "title": "t", "body": "b" }))
            .to_request(),
    )
    .await;
    assert_eq!(still_denied.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn session_role_comes_from_the_store_not_the_request() {
    // Whatever the client posts, the role is the one the store reports.
    let app = init_app!(Arc::new(InMemoryArticleStore::new()));
    let asserted: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/session")
            .set_json(json!({ "role": "admin" }))
            .to_request(),
    )
    .await;
    assert_eq!(asserted["role"], "guest");

    let admin_app = init_app!(Arc::new(InMemoryArticleStore::new().with_admin_caller()));
    let granted: Value = test::call_and_read_body_json(
        &admin_app,
        test::TestRequest::post().uri("/api/v1/session").to_request(),
    )
    .await;
    assert_eq!(granted["role"], "admin");
}

#[actix_web::test]
async fn drafts_stay_invisible_to_the_public_surface() {
    let app = init_app!(Arc::new(InMemoryArticleStore::new().with_admin_caller()));
    let cookie = session_cookie(&app).await;

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/admin/articles")
            .cookie(cookie.clone())
            .set_json(json!({
                "slug": "quiet-draft",
                "title": "Quiet Draft",
                "body": "# Not yet",
                "tags": ["internal"]
            }))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::OK);

    // Public feed: empty and live.
    let feed: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/v1/articles").to_request(),
    )
    .await;
    assert_eq!(feed["source"], "live");
    assert_eq!(feed["articles"].as_array().expect("array").len(), 0);

    // Public detail: 404 even though the slug exists as a draft.
    let detail = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/articles/quiet-draft")
            .to_request(),
    )
    .await;
    assert_eq!(detail.status(), StatusCode::NOT_FOUND);

    // Admin listing shows the draft.
    let admin_list: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/admin/articles")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    let entries = admin_list.as_array().expect("array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["slug"], "quiet-draft");
    assert_eq!(entries[0]["published"], false);
}

#[actix_web::test]
async fn publishing_makes_an_article_visible_immediately() {
    let app = init_app!(Arc::new(InMemoryArticleStore::new().with_admin_caller()));
    let cookie = session_cookie(&app).await;

    let created: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/admin/articles")
            .cookie(cookie.clone())
            .set_json(json!({
                "slug": "launch-note",
                "title": "Launch Note",
                "body": "## Shipping\n\nWe **did** it.",
                "tags": ["news"]
            }))
            .to_request(),
    )
    .await;
    let id = created["id"].as_u64().expect("id");

    // Warm the public cache with the pre-publish (empty) answer.
    let before: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/v1/articles").to_request(),
    )
    .await;
    assert_eq!(before["articles"].as_array().expect("array").len(), 0);

    let published = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/admin/articles/{id}/publish"))
            .cookie(cookie)
            .set_json(json!({ "published": true }))
            .to_request(),
    )
    .await;
    assert_eq!(published.status(), StatusCode::OK);

    // The cached empty feed must have been invalidated by the publish.
    let after: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/v1/articles").to_request(),
    )
    .await;
    let articles = after["articles"].as_array().expect("array");
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0]["slug"], "launch-note");

    let detail: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/articles/launch-note")
            .to_request(),
    )
    .await;
    let html = detail["html"].as_str().expect("html");
    assert!(html.contains("<h2>Shipping</h2>"));
    assert!(html.contains("<strong>did</strong>"));
}

#[actix_web::test]
async fn unreachable_store_serves_the_template_fallback_with_a_banner() {
    let app = init_app!(Arc::new(UnreachableArticleStore));

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/articles").to_request(),
    )
    .await;
    // Degraded, not broken: the feed request itself succeeds.
    assert_eq!(res.status(), StatusCode::OK);
    let feed: Value = test::read_body_json(res).await;
    assert_eq!(feed["source"], "fallback");
    assert_eq!(
        feed["articles"].as_array().expect("array").len(),
        article_templates::catalog().len()
    );
    assert_eq!(feed["error"]["category"], "network-error");
    assert_eq!(feed["error"]["isRetryable"], true);

    // Template detail is reachable by slug through the same fallback.
    let slug = article_templates::catalog()[0].slug;
    let detail = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/articles/{slug}"))
            .to_request(),
    )
    .await;
    assert_eq!(detail.status(), StatusCode::OK);
    let detail: Value = test::read_body_json(detail).await;
    assert_eq!(detail["source"], "fallback");
    assert!(detail["html"].as_str().expect("html").contains("<h2>"));
}

#[actix_web::test]
async fn readiness_flags_an_unreachable_store() {
    let deps = app_deps(Arc::new(UnreachableArticleStore));
    deps.health_state.mark_ready();
    let app = test::init_service(build_app(deps)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/health/ready").to_request(),
    )
    .await;
    // Ready despite the outage: the fallback keeps the feed serving.
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["ready"], true);
    assert_eq!(body["storeReachable"], false);
}

#[actix_web::test]
async fn slug_conflicts_and_grammar_are_enforced() {
    let app = init_app!(Arc::new(InMemoryArticleStore::new().with_admin_caller()));
    let cookie = session_cookie(&app).await;

    let first = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/admin/articles")
            .cookie(cookie.clone())
            .set_json(json!({ "slug": "taken", "title": "First", "body": "b" }))
            .to_request(),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);

    let duplicate = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/admin/articles")
            .cookie(cookie.clone())
            .set_json(json!({ "slug": "taken", "title": "Second", "body": "b" }))
            .to_request(),
    )
    .await;
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);

    let malformed = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/admin/articles")
            .cookie(cookie.clone())
            .set_json(json!({ "slug": "Bad Slug", "title": "Third", "body": "b" }))
            .to_request(),
    )
    .await;
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);

    let check: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/admin/slugs/check?slug=taken&current=taken")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    // The article's own slug never counts against availability.
    assert_eq!(check["valid"], true);
    assert_eq!(check["available"], true);
}

#[actix_web::test]
async fn delete_demands_explicit_confirmation() {
    let store = Arc::new(InMemoryArticleStore::new().with_admin_caller());
    let app = init_app!(store.clone());
    let cookie = session_cookie(&app).await;

    let created: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/admin/articles")
            .cookie(cookie.clone())
            .set_json(json!({ "slug": "doomed", "title": "Doomed", "body": "b" }))
            .to_request(),
    )
    .await;
    let id = created["id"].as_u64().expect("id");

    let unconfirmed = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/v1/admin/articles/{id}"))
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    assert_eq!(unconfirmed.status(), StatusCode::BAD_REQUEST);

    let confirmed = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/v1/admin/articles/{id}?confirm=true"))
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(confirmed.status(), StatusCode::NO_CONTENT);
    assert!(
        store
            .list_all_admin()
            .await
            .expect("in-memory store")
            .is_empty()
    );
}

#[actix_web::test]
async fn seeding_publishes_every_template() {
    let app = init_app!(Arc::new(InMemoryArticleStore::new().with_admin_caller()));
    let cookie = session_cookie(&app).await;

    let seeded: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/admin/seed-templates")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    let expected = article_templates::catalog().len();
    assert_eq!(seeded["seeded"].as_u64().expect("count") as usize, expected);

    let feed: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/v1/articles").to_request(),
    )
    .await;
    assert_eq!(feed["source"], "live");
    assert_eq!(feed["articles"].as_array().expect("array").len(), expected);
}

#[actix_web::test]
async fn feed_filters_by_query_and_tag() {
    let app = init_app!(Arc::new(InMemoryArticleStore::new().with_admin_caller()));
    let cookie = session_cookie(&app).await;

    for (slug, title, tag) in [
        ("alpha-note", "Hiring in Review", "hiring"),
        ("beta-note", "Retention Story", "retention"),
    ] {
        let created: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/admin/articles")
                .cookie(cookie.clone())
                .set_json(json!({ "slug": slug, "title": title, "body": "b", "tags": [tag] }))
                .to_request(),
        )
        .await;
        let id = created["id"].as_u64().expect("id");
        test::call_service(
            &app,
            test::TestRequest::post()
                .uri(&format!("/api/v1/admin/articles/{id}/publish"))
                .cookie(cookie.clone())
                .set_json(json!({ "published": true }))
                .to_request(),
        )
        .await;
    }

    let by_query: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/articles?q=hiring")
            .to_request(),
    )
    .await;
    let hits = by_query["articles"].as_array().expect("array");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["slug"], "alpha-note");

    let by_tag: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/articles?tag=retention")
            .to_request(),
    )
    .await;
    let hits = by_tag["articles"].as_array().expect("array");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["slug"], "beta-note");

    let tags: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/v1/tags").to_request(),
    )
    .await;
    assert_eq!(tags, json!(["hiring", "retention"]));
}

#[actix_web::test]
async fn newsletter_signup_validates_and_deduplicates() {
    let app = init_app!(Arc::new(InMemoryArticleStore::new()));

    let bad = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/newsletter")
            .set_json(json!({ "email": "not-an-email" }))
            .to_request(),
    )
    .await;
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

    let first: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/newsletter")
            .set_json(json!({ "email": "reader@example.com" }))
            .to_request(),
    )
    .await;
    assert_eq!(first["subscribed"], true);

    let repeat: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/newsletter")
            .set_json(json!({ "email": "Reader@example.com" }))
            .to_request(),
    )
    .await;
    assert_eq!(repeat["subscribed"], false);
}
