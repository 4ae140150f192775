//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Secret;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub hashed_password: Secret,
}

impl User {
    pub fn new(id: i32, email: String, username: String, hashed_password: Secret) -> Self {
        Self {
            id,
            email,
            username,
            hashed_password,
        }
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUser {
    /// User email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Username used to look the user up
    #[schema(example = "jdoe")]
    pub username: String,
    /// Secret stored with the user; never returned
    #[schema(example = "SecurePass123!", write_only)]
    pub password: String,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: i32,
    /// User email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Username
    #[schema(example = "jdoe")]
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_omits_secret() {
        let user = User::new(
            7,
            "ann@example.com".to_string(),
            "ann".to_string(),
            Secret::new("topsecret"),
        );
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 3);
        assert_eq!(obj["id"], 7);
        assert_eq!(obj["email"], "ann@example.com");
        assert_eq!(obj["username"], "ann");
        assert!(!json.to_string().contains("topsecret"));
    }

    #[test]
    fn test_create_user_requires_all_fields() {
        let missing = serde_json::from_value::<CreateUser>(serde_json::json!({
            "email": "ann@example.com",
            "username": "ann"
        }));
        assert!(missing.is_err());
    }
}
