use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Form, Json, Router};
use lazy_static::lazy_static;
use regex::Regex;
use sqlx::PgPool;
use tracing::{info, instrument, warn};

use crate::auth::dto::{CreateUserRequest, LoginForm, TokenResponse};
use crate::auth::jwt::JwtKeys;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::repo::User;
use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/", post(create_user))
        .route("/auth/token", post(login_for_access_token))
}

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Unknown username or wrong password both come back as `None`.
async fn authenticate_user(
    db: &PgPool,
    username: &str,
    password: &str,
) -> Result<Option<User>, ApiError> {
    let Some(user) = User::find_by_username(db, username).await? else {
        return Ok(None);
    };
    if !verify_password(password, &user.hashed_password)? {
        return Ok(None);
    }
    Ok(Some(user))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<StatusCode, ApiError> {
    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::bad_request("Invalid email"));
    }

    if payload.password.len() < 8 {
        warn!("password too short");
        return Err(ApiError::bad_request("Password too short"));
    }

    let hashed = hash_password(&payload.password)?;
    let user = User::create(&state.db, &payload, &hashed).await?;

    info!(user_id = user.id, username = %user.username, "user registered");
    Ok(StatusCode::CREATED)
}

#[instrument(skip(state, form))]
pub async fn login_for_access_token(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = authenticate_user(&state.db, &form.username, &form.password)
        .await?
        .ok_or_else(|| {
            warn!(username = %form.username, "login failed");
            ApiError::unauthorized("Incorrect username or password")
        })?;

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(&user.username, user.id, &user.role)?;

    info!(user_id = user.id, username = %user.username, "user logged in");
    Ok(Json(TokenResponse {
        access_token: token,
        token_type: "bearer".into(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.org"));
    }

    #[test]
    fn rejects_obvious_garbage() {
        assert!(!is_valid_email("alice"));
        assert!(!is_valid_email("alice@"));
        assert!(!is_valid_email("alice@example"));
        assert!(!is_valid_email("a b@example.com"));
    }
}
