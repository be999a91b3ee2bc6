use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub owner_id: i64,
}

/// A todo joined with the public columns of its owner.
#[derive(Debug, Clone, FromRow)]
pub struct TodoWithOwnerRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub owner_id: i64,
    pub owner_email: String,
    pub owner_is_active: bool,
}
