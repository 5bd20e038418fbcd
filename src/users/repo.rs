use sqlx::PgPool;

use crate::auth::repo::User;

impl User {
    pub async fn set_password(db: &PgPool, id: i32, hashed_password: &str) -> anyhow::Result<()> {
        sqlx::query("UPDATE users SET hashed_password = $1 WHERE id = $2")
            .bind(hashed_password)
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }

    pub async fn set_phone_number(db: &PgPool, id: i32, phone_number: &str) -> anyhow::Result<()> {
        sqlx::query("UPDATE users SET phone_number = $1 WHERE id = $2")
            .bind(phone_number)
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }
}
