use sqlx::FromRow;

/// User record in the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub hashed_password: String, // argon2 PHC string, never serialized
    pub is_active: bool,
}
