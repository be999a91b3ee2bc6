use serde::{Deserialize, Serialize};

use crate::todos::repo_types::TodoWithOwnerRow;
use crate::users::dto::UserRead;

#[derive(Debug, Deserialize)]
pub struct TodoCreate {
    pub title: String,
    pub description: String,
    pub owner_id: i64,
}

/// Only title and description can change; the owner is fixed at creation.
#[derive(Debug, Deserialize)]
pub struct TodoUpdate {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRead {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub owner: UserRead,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl From<TodoWithOwnerRow> for TodoRead {
    fn from(r: TodoWithOwnerRow) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            owner: UserRead {
                id: r.owner_id,
                email: r.owner_email,
                is_active: r.owner_is_active,
            },
        }
    }
}
