//! Auth token entity, scopes, and the scope/permission check.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Capability set a token is restricted to.
///
/// Stored as an integer column; the discriminants are part of the database
/// contract and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum TokenScope {
    All = 0,
    ReadAll = 1,
    WriteTemperatures = 2,
    ReadTemperatures = 3,
}

/// Purpose of a token: session-oriented login tokens vs. long-lived
/// personal access tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum TokenKind {
    Login = 0,
    PersonalAccess = 1,
}

/// An operation class a caller may be granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    ReadAll,
    ReadTemperatures,
    WriteTemperatures,
    /// Minting and listing credentials; only full-scope tokens qualify.
    ManageTokens,
}

impl TokenScope {
    /// Returns whether this scope grants the given permission.
    pub fn permits(self, permission: Permission) -> bool {
        match self {
            TokenScope::All => true,
            TokenScope::ReadAll => matches!(
                permission,
                Permission::ReadAll | Permission::ReadTemperatures
            ),
            TokenScope::ReadTemperatures => matches!(permission, Permission::ReadTemperatures),
            TokenScope::WriteTemperatures => matches!(permission, Permission::WriteTemperatures),
        }
    }
}

/// A persisted bearer token record.
///
/// Only the SHA-512 digest of the secret is stored; the plaintext secret
/// exists solely in the one-time wire credential returned at issuance.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AuthToken {
    pub id: Uuid,
    pub secret_hash: String,
    pub user_id: i64,
    pub scope: TokenScope,
    pub kind: TokenKind,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AuthToken {
    /// Returns true if the token has an expiry at or before `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| e <= now)
    }
}

/// Input data for persisting a newly issued token.
#[derive(Debug, Clone)]
pub struct NewAuthToken {
    pub secret_hash: String,
    pub user_id: i64,
    pub scope: TokenScope,
    pub kind: TokenKind,
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn token(expires_at: Option<DateTime<Utc>>) -> AuthToken {
        AuthToken {
            id: Uuid::nil(),
            secret_hash: "hash".to_string(),
            user_id: 1,
            scope: TokenScope::All,
            kind: TokenKind::Login,
            expires_at,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_token_without_expiry_never_expires() {
        assert!(!token(None).is_expired(Utc::now()));
    }

    #[test]
    fn test_token_expired_one_second_ago() {
        let now = Utc::now();
        assert!(token(Some(now - Duration::seconds(1))).is_expired(now));
    }

    #[test]
    fn test_token_expiring_exactly_now_is_expired() {
        let now = Utc::now();
        assert!(token(Some(now)).is_expired(now));
    }

    #[test]
    fn test_token_expiring_in_future_is_valid() {
        let now = Utc::now();
        assert!(!token(Some(now + Duration::hours(1))).is_expired(now));
    }

    #[test]
    fn test_all_scope_permits_everything() {
        for p in [
            Permission::ReadAll,
            Permission::ReadTemperatures,
            Permission::WriteTemperatures,
            Permission::ManageTokens,
        ] {
            assert!(TokenScope::All.permits(p));
        }
    }

    #[test]
    fn test_read_all_permits_reads_only() {
        assert!(TokenScope::ReadAll.permits(Permission::ReadAll));
        assert!(TokenScope::ReadAll.permits(Permission::ReadTemperatures));
        assert!(!TokenScope::ReadAll.permits(Permission::WriteTemperatures));
        assert!(!TokenScope::ReadAll.permits(Permission::ManageTokens));
    }

    #[test]
    fn test_narrow_scopes() {
        assert!(TokenScope::ReadTemperatures.permits(Permission::ReadTemperatures));
        assert!(!TokenScope::ReadTemperatures.permits(Permission::ReadAll));
        assert!(!TokenScope::ReadTemperatures.permits(Permission::WriteTemperatures));

        assert!(TokenScope::WriteTemperatures.permits(Permission::WriteTemperatures));
        assert!(!TokenScope::WriteTemperatures.permits(Permission::ReadAll));
        assert!(!TokenScope::WriteTemperatures.permits(Permission::ReadTemperatures));
    }

    #[test]
    fn test_scope_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&TokenScope::WriteTemperatures).unwrap(),
            "\"WRITE_TEMPERATURES\""
        );
        assert_eq!(
            serde_json::to_string(&TokenKind::PersonalAccess).unwrap(),
            "\"PERSONAL_ACCESS\""
        );
    }
}
