use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::dto::TodoRequest;

/// Todo record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub priority: i32,
    pub complete: bool,
    pub owner_id: i32,
}

impl Todo {
    pub async fn list_by_owner(db: &PgPool, owner_id: i32) -> anyhow::Result<Vec<Todo>> {
        let rows = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, title, description, priority, complete, owner_id
            FROM todos
            WHERE owner_id = $1
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Owner-scoped lookup; an id belonging to someone else comes back as
    /// `None`, same as a missing row.
    pub async fn find_by_id_and_owner(
        db: &PgPool,
        id: i32,
        owner_id: i32,
    ) -> anyhow::Result<Option<Todo>> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, title, description, priority, complete, owner_id
            FROM todos
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(db)
        .await?;
        Ok(todo)
    }

    pub async fn create(db: &PgPool, owner_id: i32, req: &TodoRequest) -> anyhow::Result<Todo> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (title, description, priority, complete, owner_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, priority, complete, owner_id
            "#,
        )
        .bind(&req.title)
        .bind(&req.description)
        .bind(req.priority)
        .bind(req.complete)
        .bind(owner_id)
        .fetch_one(db)
        .await?;
        Ok(todo)
    }

    /// Full replace of the mutable fields; `false` means no owned row matched.
    pub async fn update_by_owner(
        db: &PgPool,
        id: i32,
        owner_id: i32,
        req: &TodoRequest,
    ) -> anyhow::Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE todos
            SET title = $1, description = $2, priority = $3, complete = $4
            WHERE id = $5 AND owner_id = $6
            "#,
        )
        .bind(&req.title)
        .bind(&req.description)
        .bind(req.priority)
        .bind(req.complete)
        .bind(id)
        .bind(owner_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_by_owner(db: &PgPool, id: i32, owner_id: i32) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Every todo regardless of owner. Admin use only.
    pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<Todo>> {
        let rows = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, title, description, priority, complete, owner_id
            FROM todos
            ORDER BY id
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Delete bypassing the ownership filter. Admin use only.
    pub async fn delete_any(db: &PgPool, id: i32) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
