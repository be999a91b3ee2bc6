use anyhow::Context;
use sqlx::SqliteConnection;

use crate::users::repo_types::User;

impl User {
    /// Insert a user. Email uniqueness is not checked.
    pub async fn create(
        conn: &mut SqliteConnection,
        email: &str,
        hashed_password: &str,
    ) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, hashed_password)
            VALUES (?1, ?2)
            RETURNING id, email, hashed_password, is_active
            "#,
        )
        .bind(email)
        .bind(hashed_password)
        .fetch_one(&mut *conn)
        .await
        .context("insert user")?;
        Ok(user)
    }

    pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, hashed_password, is_active
              FROM users
             WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .context("find user by id")?;
        Ok(user)
    }
}
