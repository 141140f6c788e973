//! User entity representing an authenticated principal.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A registered user account.
///
/// The password hash is a bcrypt string and is never serialized; the
/// authenticator verifies against it but never returns it to callers.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub uuid: Uuid,
    pub email: String,
    pub username: String,
    pub full_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new user.
///
/// `password_hash` must already be a bcrypt hash; see
/// [`crate::application::services::auth_service::hash_password`].
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            id: 1,
            uuid: Uuid::nil(),
            email: "user@example.com".to_string(),
            username: "brewer".to_string(),
            full_name: "Test Brewer".to_string(),
            password_hash: "$2b$13$secret".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("$2b$"));
        assert!(json.contains("user@example.com"));
    }
}
