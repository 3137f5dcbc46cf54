//! Session helpers keeping HTTP handlers free of framework-specific logic.
//!
//! The cookie session stores only the caller's role. Handlers deal with
//! domain-friendly operations: persist a role, read it back, or demand the
//! admin role.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{DomainError, user::UserRole};

pub(crate) const ROLE_KEY: &str = "role";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the caller's role in the session cookie.
    pub fn persist_role(&self, role: UserRole) -> Result<(), DomainError> {
        self.0
            .insert(ROLE_KEY, role)
            .map_err(|error| DomainError::internal(format!("failed to persist session: {error}")))
    }

    /// Current role; an absent or unreadable session reads as guest.
    #[must_use]
    pub fn role(&self) -> UserRole {
        match self.0.get::<UserRole>(ROLE_KEY) {
            Ok(Some(role)) => role,
            Ok(None) => UserRole::Guest,
            Err(error) => {
                tracing::warn!(%error, "unreadable role in session cookie");
                UserRole::Guest
            }
        }
    }

    /// Demand the admin role or fail with `403 Forbidden`.
    pub fn require_admin(&self) -> Result<(), DomainError> {
        if self.role().is_admin() {
            Ok(())
        } else {
            Err(DomainError::forbidden("Access denied: admin role required"))
        }
    }

    /// Drop every session entry.
    pub fn clear(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};

    use super::*;
    use crate::inbound::http::error::ApiError;
    use crate::inbound::http::test_utils::test_session_middleware;

    #[actix_web::test]
    async fn round_trips_role_and_gates_admin() {
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .route(
                    "/login",
                    web::get().to(|session: SessionContext| async move {
                        session.persist_role(UserRole::Admin)?;
                        Ok::<_, ApiError>(HttpResponse::Ok())
                    }),
                )
                .route(
                    "/gate",
                    web::get().to(|session: SessionContext| async move {
                        session.require_admin()?;
                        Ok::<_, ApiError>(HttpResponse::Ok())
                    }),
                ),
        )
        .await;

        // Without a cookie the gate refuses.
        let denied =
            test::call_service(&app, test::TestRequest::get().uri("/gate").to_request()).await;
        assert_eq!(denied.status(), StatusCode::FORBIDDEN);

        let login =
            test::call_service(&app, test::TestRequest::get().uri("/login").to_request()).await;
        let cookie = login
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie set");

        let allowed = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/gate")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(allowed.status(), StatusCode::OK);
    }
}
