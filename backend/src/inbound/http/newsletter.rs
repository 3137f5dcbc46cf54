//! Newsletter signup endpoint.
//!
//! There is no mailing provider behind this; addresses land in an
//! in-process list so the endpoint has real validation and idempotent
//! behavior for the frontend to build against.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;
use crate::inbound::http::error::ApiResult;
use crate::inbound::http::state::HttpState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignupRequest {
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    /// False when the address was already subscribed.
    pub subscribed: bool,
}

fn looks_like_email(candidate: &str) -> bool {
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !candidate.contains(char::is_whitespace)
}

/// Record a newsletter signup.
#[utoipa::path(
    post,
    path = "/api/v1/newsletter",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Signup recorded", body = SignupResponse),
        (status = 400, description = "Malformed email address")
    ),
    tags = ["newsletter"],
    operation_id = "subscribeNewsletter"
)]
#[post("/newsletter")]
pub async fn subscribe(
    state: web::Data<HttpState>,
    body: web::Json<SignupRequest>,
) -> ApiResult<web::Json<SignupResponse>> {
    let email = body.email.trim();
    if !looks_like_email(email) {
        return Err(DomainError::invalid_request("a valid email address is required").into());
    }
    let subscribed = state.newsletter.subscribe(email).await;
    Ok(web::Json(SignupResponse { subscribed }))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("reader@example.com", true)]
    #[case("first.last@sub.example.org", true)]
    #[case("no-at-sign", false)]
    #[case("@example.com", false)]
    #[case("reader@", false)]
    #[case("reader@nodot", false)]
    #[case("reader@.com", false)]
    #[case("spaced name@example.com", false)]
    fn email_shape_check(#[case] candidate: &str, #[case] expected: bool) {
        assert_eq!(looks_like_email(candidate), expected);
    }
}
