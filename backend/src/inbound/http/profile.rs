//! Session and caller-profile endpoints.
//!
//! The store is the authority on who the caller is: starting a session
//! asks it for the caller's role and persists that role in the signed
//! cookie. The profile endpoints proxy the store's caller profile record.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{DomainError, UserProfile, UserRole};
use crate::inbound::http::error::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub role: UserRole,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProfileRequest {
    pub name: String,
}

/// Start a session with the role the store attributes to the caller.
#[utoipa::path(
    post,
    path = "/api/v1/session",
    responses((status = 200, description = "Session established", body = SessionResponse)),
    tags = ["session"],
    operation_id = "startSession"
)]
#[post("/session")]
pub async fn start_session(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<SessionResponse>> {
    let role = state.articles.caller_role().await?;
    session.persist_role(role)?;
    Ok(web::Json(SessionResponse { role }))
}

/// Role carried by the current session cookie.
#[utoipa::path(
    get,
    path = "/api/v1/session",
    responses((status = 200, description = "Current role", body = SessionResponse)),
    tags = ["session"],
    operation_id = "currentSession"
)]
#[get("/session")]
pub async fn current_session(session: SessionContext) -> web::Json<SessionResponse> {
    web::Json(SessionResponse {
        role: session.role(),
    })
}

/// End the session.
#[utoipa::path(
    delete,
    path = "/api/v1/session",
    responses((status = 204, description = "Session cleared")),
    tags = ["session"],
    operation_id = "endSession"
)]
#[delete("/session")]
pub async fn end_session(session: SessionContext) -> HttpResponse {
    session.clear();
    HttpResponse::NoContent().finish()
}

/// The caller's saved display profile.
#[utoipa::path(
    get,
    path = "/api/v1/profile",
    responses(
        (status = 200, description = "Saved profile", body = UserProfile),
        (status = 404, description = "No profile saved yet")
    ),
    tags = ["session"],
    operation_id = "getProfile"
)]
#[get("/profile")]
pub async fn get_profile(state: web::Data<HttpState>) -> ApiResult<web::Json<UserProfile>> {
    let profile = state
        .articles
        .caller_profile()
        .await?
        .ok_or_else(|| DomainError::not_found("no profile saved"))?;
    Ok(web::Json(profile))
}

/// Save the caller's display profile.
#[utoipa::path(
    put,
    path = "/api/v1/profile",
    request_body = ProfileRequest,
    responses(
        (status = 200, description = "Stored profile", body = UserProfile),
        (status = 400, description = "Blank display name")
    ),
    tags = ["session"],
    operation_id = "saveProfile"
)]
#[put("/profile")]
pub async fn save_profile(
    state: web::Data<HttpState>,
    body: web::Json<ProfileRequest>,
) -> ApiResult<web::Json<UserProfile>> {
    let profile = UserProfile::new(&body.name)
        .ok_or_else(|| DomainError::invalid_request("display name must not be blank"))?;
    Ok(web::Json(state.articles.save_caller_profile(&profile).await?))
}
