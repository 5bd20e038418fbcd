use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use tracing::warn;

use crate::auth::claims::CurrentUser;
use crate::auth::jwt::JwtKeys;
use crate::error::ApiError;

/// Extracts and validates the bearer token, yielding the caller's identity.
#[derive(Debug)]
pub struct AuthUser(pub CurrentUser);

/// Same as [`AuthUser`] but additionally requires the admin role. The role
/// is trusted entirely from the token claims; storage is not re-queried.
#[derive(Debug)]
pub struct AdminUser(pub CurrentUser);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Not authenticated"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::unauthorized("Not authenticated"))?;

        let claims = keys.verify(token).map_err(|_| {
            warn!("invalid or expired token");
            ApiError::unauthorized("Could not validate credentials.")
        })?;

        Ok(AuthUser(claims.into()))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser(user) = AuthUser::from_request_parts(parts, state).await?;
        if user.role != "admin" {
            warn!(user_id = user.user_id, role = %user.role, "admin route denied");
            return Err(ApiError::unauthorized("Authentication Failed"));
        }
        Ok(AdminUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::http::{header::AUTHORIZATION, Request};

    fn parts_with_header(value: Option<String>) -> Parts {
        let mut builder = Request::builder().uri("/todos/");
        if let Some(v) = value {
            builder = builder.header(AUTHORIZATION, v);
        }
        let (parts, ()) = builder.body(()).expect("request").into_parts();
        parts
    }

    fn bearer(state: &AppState, username: &str, id: i32, role: &str) -> String {
        let keys = JwtKeys::from_ref(state);
        format!("Bearer {}", keys.sign(username, id, role).expect("sign"))
    }

    #[tokio::test]
    async fn auth_user_extracts_identity_from_valid_token() {
        let state = AppState::fake();
        let mut parts = parts_with_header(Some(bearer(&state, "alice", 7, "user")));
        let AuthUser(user) = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .expect("extract");
        assert_eq!(user.username, "alice");
        assert_eq!(user.user_id, 7);
        assert_eq!(user.role, "user");
    }

    #[tokio::test]
    async fn auth_user_rejects_missing_header() {
        let state = AppState::fake();
        let mut parts = parts_with_header(None);
        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn auth_user_rejects_non_bearer_scheme() {
        let state = AppState::fake();
        let mut parts = parts_with_header(Some("Basic abc123".into()));
        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn admin_user_rejects_non_admin_role() {
        let state = AppState::fake();
        let mut parts = parts_with_header(Some(bearer(&state, "bob", 2, "user")));
        let err = AdminUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        match err {
            ApiError::Unauthorized(detail) => assert_eq!(detail, "Authentication Failed"),
            other => panic!("expected Unauthorized, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn admin_user_accepts_admin_role() {
        let state = AppState::fake();
        let mut parts = parts_with_header(Some(bearer(&state, "root", 1, "admin")));
        let AdminUser(user) = AdminUser::from_request_parts(&mut parts, &state)
            .await
            .expect("extract");
        assert_eq!(user.role, "admin");
    }
}
