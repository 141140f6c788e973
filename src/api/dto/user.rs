//! User profile response DTOs.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::User;

/// Profile of the authenticated user. Never carries the password hash or
/// the internal row id.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.uuid,
            email: u.email,
            username: u.username,
            full_name: u.full_name,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_never_exposes_password_hash() {
        let user = User {
            id: 7,
            uuid: Uuid::new_v4(),
            email: "brewer@example.com".to_string(),
            username: "brewer".to_string(),
            full_name: "Test Brewer".to_string(),
            password_hash: "$2b$13$secret".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();
        assert!(!json.contains("$2b$"));
        assert!(!json.contains("password"));
        // Internal row id is not part of the wire shape either
        assert!(!json.contains("\"id\":7"));
    }
}
