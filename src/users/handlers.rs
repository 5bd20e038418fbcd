use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use tracing::{info, instrument, warn};

use crate::auth::extractors::AuthUser;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::repo::User;
use crate::error::ApiError;
use crate::state::AppState;

use super::dto::{ChangePasswordRequest, ChangePhoneNumberRequest};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/", get(get_user))
        .route("/users/password", put(change_password))
        .route("/users/phone_number", put(change_phone_number))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<User>, ApiError> {
    let record = User::find_by_id(&state.db, user.user_id)
        .await?
        .ok_or_else(|| {
            warn!(user_id = user.user_id, "token references missing user");
            ApiError::unauthorized("Could not validate user")
        })?;
    Ok(Json(record))
}

#[instrument(skip(state, body))]
pub async fn change_password(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(body): Json<ChangePasswordRequest>,
) -> Result<StatusCode, ApiError> {
    let record = User::find_by_id(&state.db, user.user_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Could not validate user"))?;

    if !verify_password(&body.password, &record.hashed_password)? {
        warn!(user_id = record.id, "password change with wrong current password");
        return Err(ApiError::unauthorized("Error on password change"));
    }

    let hashed = hash_password(&body.new_password)?;
    User::set_password(&state.db, record.id, &hashed).await?;

    info!(user_id = record.id, "password changed");
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state, body))]
pub async fn change_phone_number(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(body): Json<ChangePhoneNumberRequest>,
) -> Result<StatusCode, ApiError> {
    let record = User::find_by_id(&state.db, user.user_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Could not validate user"))?;

    if !verify_password(&body.password, &record.hashed_password)? {
        warn!(user_id = record.id, "phone change with wrong password");
        return Err(ApiError::unauthorized("Incorrect Password"));
    }

    User::set_phone_number(&state.db, record.id, &body.new_phone_number).await?;

    info!(user_id = record.id, "phone number changed");
    Ok(StatusCode::NO_CONTENT)
}
