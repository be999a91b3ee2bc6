use anyhow::Context;
use sqlx::SqliteConnection;

use crate::todos::repo_types::{Todo, TodoWithOwnerRow};

impl Todo {
    /// Insert a todo. A dangling `owner_id` is rejected by the foreign key.
    pub async fn create(
        conn: &mut SqliteConnection,
        title: &str,
        description: &str,
        owner_id: i64,
    ) -> anyhow::Result<Todo> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (title, description, owner_id)
            VALUES (?1, ?2, ?3)
            RETURNING id, title, description, owner_id
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(owner_id)
        .fetch_one(&mut *conn)
        .await
        .context("insert todo")?;
        Ok(todo)
    }

    pub async fn find_with_owner(
        conn: &mut SqliteConnection,
        id: i64,
    ) -> anyhow::Result<Option<TodoWithOwnerRow>> {
        let row = sqlx::query_as::<_, TodoWithOwnerRow>(
            r#"
            SELECT t.id, t.title, t.description, t.owner_id,
                   u.email     AS owner_email,
                   u.is_active AS owner_is_active
              FROM todos t
              JOIN users u ON u.id = t.owner_id
             WHERE t.id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .context("find todo by id")?;
        Ok(row)
    }

    /// Returns `false` when no todo has this id.
    pub async fn update(
        conn: &mut SqliteConnection,
        id: i64,
        title: &str,
        description: &str,
    ) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"
            UPDATE todos
               SET title = ?1, description = ?2
             WHERE id = ?3
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(id)
        .execute(&mut *conn)
        .await
        .context("update todo")?;
        Ok(res.rows_affected() > 0)
    }

    /// Returns `false` when no todo has this id.
    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .context("delete todo")?;
        Ok(res.rows_affected() > 0)
    }
}
