use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use tracing::{info, instrument};

use crate::auth::extractors::AdminUser;
use crate::error::ApiError;
use crate::state::AppState;
use crate::todos::repo::Todo;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/todo", get(read_all_todos))
        .route("/admin/todo/:id", delete(delete_todo))
}

#[instrument(skip(state))]
pub async fn read_all_todos(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = Todo::list_all(&state.db).await?;
    Ok(Json(todos))
}

/// Ownership filter is bypassed here; the NotFound detail matches the owner
/// route on purpose.
#[instrument(skip(state))]
pub async fn delete_todo(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if !Todo::delete_any(&state.db, id).await? {
        return Err(ApiError::not_found("Todo not found."));
    }
    info!(todo_id = id, admin_id = admin.user_id, "todo force-deleted");
    Ok(StatusCode::NO_CONTENT)
}
