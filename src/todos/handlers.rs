use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{info, instrument};

use crate::auth::extractors::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;

use super::dto::TodoRequest;
use super::repo::Todo;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/todos/", get(list_todos))
        .route("/todos/todo", post(create_todo))
        .route(
            "/todos/todo/:id",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
}

#[instrument(skip(state))]
pub async fn list_todos(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = Todo::list_by_owner(&state.db, user.user_id).await?;
    Ok(Json(todos))
}

#[instrument(skip(state))]
pub async fn get_todo(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<Todo>, ApiError> {
    let todo = Todo::find_by_id_and_owner(&state.db, id, user.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Todo not found."))?;
    Ok(Json(todo))
}

#[instrument(skip(state, body))]
pub async fn create_todo(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(body): Json<TodoRequest>,
) -> Result<StatusCode, ApiError> {
    let todo = Todo::create(&state.db, user.user_id, &body).await?;
    info!(todo_id = todo.id, owner_id = user.user_id, "todo created");
    Ok(StatusCode::CREATED)
}

#[instrument(skip(state, body))]
pub async fn update_todo(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i32>,
    Json(body): Json<TodoRequest>,
) -> Result<StatusCode, ApiError> {
    if !Todo::update_by_owner(&state.db, id, user.user_id, &body).await? {
        return Err(ApiError::not_found("Todo not found."));
    }
    info!(todo_id = id, owner_id = user.user_id, "todo updated");
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
pub async fn delete_todo(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if !Todo::delete_by_owner(&state.db, id, user.user_id).await? {
        return Err(ApiError::not_found("Todo not found."));
    }
    info!(todo_id = id, owner_id = user.user_id, "todo deleted");
    Ok(StatusCode::NO_CONTENT)
}
