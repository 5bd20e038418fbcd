use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::auth::dto::CreateUserRequest;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing)]
    pub hashed_password: String, // argon2 digest, not exposed in JSON
    pub is_active: bool,
    pub role: String,
    pub phone_number: String,
}

impl User {
    pub async fn find_by_username(db: &PgPool, username: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, username, first_name, last_name, hashed_password,
                   is_active, role, phone_number
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    pub async fn find_by_id(db: &PgPool, id: i32) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, username, first_name, last_name, hashed_password,
                   is_active, role, phone_number
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Create a new active user with an already-hashed password.
    pub async fn create(
        db: &PgPool,
        req: &CreateUserRequest,
        hashed_password: &str,
    ) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, username, first_name, last_name, hashed_password,
                               is_active, role, phone_number)
            VALUES ($1, $2, $3, $4, $5, TRUE, $6, $7)
            RETURNING id, email, username, first_name, last_name, hashed_password,
                      is_active, role, phone_number
            "#,
        )
        .bind(&req.email)
        .bind(&req.username)
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(hashed_password)
        .bind(&req.role)
        .bind(&req.phone_number)
        .fetch_one(db)
        .await?;
        Ok(user)
    }
}
