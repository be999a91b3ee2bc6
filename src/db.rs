use std::str::FromStr;

use anyhow::Context;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Sqlite, SqliteConnection, SqlitePool, Transaction,
};
use tracing::{debug, info};

use crate::config::DatabaseConfig;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        email           TEXT    NOT NULL,
        hashed_password TEXT    NOT NULL,
        is_active       BOOLEAN NOT NULL DEFAULT 1
    )
    "#,
    r#"CREATE INDEX IF NOT EXISTS ix_users_email ON users (email)"#,
    r#"
    CREATE TABLE IF NOT EXISTS todos (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        title       TEXT    NOT NULL,
        description TEXT    NOT NULL,
        owner_id    INTEGER NOT NULL REFERENCES users (id)
    )
    "#,
    r#"CREATE INDEX IF NOT EXISTS ix_todos_owner_id ON todos (owner_id)"#,
];

pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)
        .context("parse DATABASE_URL")?
        .create_if_missing(true)
        .foreign_keys(true);

    // An in-memory database lives as long as its connection, so keep it open.
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .context("connect to database")?;
    info!(max_connections = config.max_connections, "database pool ready");
    Ok(pool)
}

/// Creates the tables if they are missing. There is no version tracking.
pub async fn init_schema(db: &SqlitePool) -> anyhow::Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(db)
            .await
            .context("create schema")?;
    }
    debug!("schema ready");
    Ok(())
}

/// One transaction per request, begun by the handler once its path and
/// body have been extracted.
///
/// Dropping the session without calling [`DbSession::commit`] rolls the
/// transaction back and hands the connection back to the pool, so every exit
/// path of a handler releases it.
pub struct DbSession {
    tx: Transaction<'static, Sqlite>,
}

impl DbSession {
    pub async fn begin(db: &SqlitePool) -> sqlx::Result<Self> {
        Ok(Self { tx: db.begin().await? })
    }

    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut *self.tx
    }

    pub async fn commit(self) -> sqlx::Result<()> {
        self.tx.commit().await
    }
}
