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
    users::{
        dto::{UserCreate, UserRead},
        password::hash_password,
        repo_types::User,
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/:id", get(read_user))
}

#[instrument(skip(db, payload))]
pub async fn create_user(
    State(db): State<SqlitePool>,
    AppJson(payload): AppJson<UserCreate>,
) -> Result<Json<UserRead>, ApiError> {
    let hashed = hash_password(&payload.password).map_err(ApiError::Internal)?;

    let mut session = DbSession::begin(&db).await?;
    let user = User::create(session.conn(), &payload.email, &hashed).await?;
    session.commit().await?;

    info!(user_id = user.id, email = %user.email, "user created");
    Ok(Json(user.into()))
}

#[instrument(skip(db))]
pub async fn read_user(
    State(db): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<UserRead>, ApiError> {
    let mut session = DbSession::begin(&db).await?;
    match User::find_by_id(session.conn(), id).await? {
        Some(user) => Ok(Json(user.into())),
        None => {
            warn!(user_id = id, "user not found");
            Err(ApiError::NotFound("User"))
        }
    }
}
