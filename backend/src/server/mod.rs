//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use crate::domain::ArticleService;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{admin, articles, newsletter, profile};
use crate::middleware::Trace;
use crate::outbound::{MemoryQueryCache, RemoteArticleStore};

/// Dependency bundle handed to the per-worker app factory.
#[derive(Clone)]
pub struct AppDependencies {
    pub health_state: web::Data<HealthState>,
    pub http_state: web::Data<HttpState>,
    pub key: Key,
    pub cookie_secure: bool,
    pub same_site: SameSite,
}

/// Assemble the Actix application: session-wrapped API scope, trace
/// middleware, and health probes.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
        same_site,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(same_site)
        .build();

    let api = web::scope("/api/v1")
        .wrap(session)
        .service(articles::list_articles)
        .service(articles::list_tags)
        .service(articles::get_article)
        .service(newsletter::subscribe)
        .service(profile::start_session)
        .service(profile::current_session)
        .service(profile::end_session)
        .service(profile::get_profile)
        .service(profile::save_profile)
        .service(admin::list_all)
        .service(admin::create)
        .service(admin::list_slugs)
        .service(admin::check_slug)
        .service(admin::seed_templates)
        .service(admin::rest_endpoint_status)
        .service(admin::set_rest_endpoint)
        .service(admin::clear_rest_endpoint)
        .service(admin::get_by_id)
        .service(admin::update)
        .service(admin::set_published)
        .service(admin::delete_article)
        .service(admin::attach_pdf)
        .service(admin::remove_pdf)
        .service(admin::attach_text_file)
        .service(admin::remove_text_file);

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live)
}

/// Construct an Actix HTTP server wired against the remote store.
///
/// # Errors
/// Propagates [`std::io::Error`] when the store client cannot be built or
/// binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        bind_addr,
        store_base,
        store_api_key,
    } = config;

    let store = RemoteArticleStore::new(store_base, store_api_key)
        .map_err(|error| std::io::Error::other(format!("store client: {error}")))?;
    let service = ArticleService::new(Arc::new(store), Arc::new(MemoryQueryCache::new()));
    let http_state = web::Data::new(HttpState::new(service));

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
