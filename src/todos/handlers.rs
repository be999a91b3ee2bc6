use anyhow::anyhow;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use sqlx::SqlitePool;
use tracing::{info, instrument, warn};

use crate::{
    db::DbSession,
    error::{ApiError, AppJson, AppPath},
    state::AppState,
    todos::{
        dto::{MessageResponse, TodoCreate, TodoRead, TodoUpdate},
        repo_types::Todo,
    },
};

pub fn todo_routes() -> Router<AppState> {
    Router::new()
        .route("/todos", post(create_todo))
        .route(
            "/todos/:id",
            get(read_todo).put(update_todo).delete(delete_todo),
        )
}

#[instrument(skip(db, payload))]
pub async fn create_todo(
    State(db): State<SqlitePool>,
    AppJson(payload): AppJson<TodoCreate>,
) -> Result<Json<TodoRead>, ApiError> {
    let mut session = DbSession::begin(&db).await?;
    let todo = Todo::create(
        session.conn(),
        &payload.title,
        &payload.description,
        payload.owner_id,
    )
    .await?;

    let row = Todo::find_with_owner(session.conn(), todo.id)
        .await?
        .ok_or_else(|| anyhow!("todo {} missing right after insert", todo.id))?;
    session.commit().await?;

    info!(todo_id = row.id, owner_id = row.owner_id, "todo created");
    Ok(Json(row.into()))
}

#[instrument(skip(db))]
pub async fn read_todo(
    State(db): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<TodoRead>, ApiError> {
    let mut session = DbSession::begin(&db).await?;
    match Todo::find_with_owner(session.conn(), id).await? {
        Some(row) => Ok(Json(row.into())),
        None => {
            warn!(todo_id = id, "todo not found");
            Err(ApiError::NotFound("Todo"))
        }
    }
}

#[instrument(skip(db, payload))]
pub async fn update_todo(
    State(db): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<TodoUpdate>,
) -> Result<Json<TodoRead>, ApiError> {
    let mut session = DbSession::begin(&db).await?;
    if !Todo::update(session.conn(), id, &payload.title, &payload.description).await? {
        warn!(todo_id = id, "todo not found");
        return Err(ApiError::NotFound("Todo"));
    }

    let row = Todo::find_with_owner(session.conn(), id)
        .await?
        .ok_or_else(|| anyhow!("todo {} missing right after update", id))?;
    session.commit().await?;

    info!(todo_id = id, "todo updated");
    Ok(Json(row.into()))
}

#[instrument(skip(db))]
pub async fn delete_todo(
    State(db): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut session = DbSession::begin(&db).await?;
    if !Todo::delete(session.conn(), id).await? {
        warn!(todo_id = id, "todo not found");
        return Err(ApiError::NotFound("Todo"));
    }
    session.commit().await?;

    info!(todo_id = id, "todo deleted");
    Ok(Json(MessageResponse {
        message: "Todo deleted".into(),
    }))
}
