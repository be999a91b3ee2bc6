use serde::{Deserialize, Serialize};

use crate::users::repo_types::User;

/// Request body for user creation. The password arrives in plaintext.
#[derive(Debug, Deserialize)]
pub struct UserCreate {
    pub email: String,
    pub password: String,
}

/// Public part of the user returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRead {
    pub id: i64,
    pub email: String,
    pub is_active: bool,
}

impl From<User> for UserRead {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            is_active: u.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_read_never_carries_the_hash() {
        let user = User {
            id: 1,
            email: "a@x.com".into(),
            hashed_password: "$argon2id$secret".into(),
            is_active: true,
        };
        let json = serde_json::to_value(UserRead::from(user)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 1, "email": "a@x.com", "is_active": true })
        );
    }

    #[test]
    fn user_create_requires_password() {
        let err = serde_json::from_str::<UserCreate>(r#"{"email":"a@x.com"}"#).unwrap_err();
        assert!(err.to_string().contains("password"));
    }
}
