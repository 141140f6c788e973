//! Batch entity representing a single brew from grain to bottle.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A brewing batch owned by a user.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Batch {
    pub id: i64,
    pub uuid: Uuid,
    pub user_id: i64,
    pub name: String,
    pub brew_notes: String,
    pub tasting_notes: String,
    pub brewed_at: Option<DateTime<Utc>>,
    pub bottled_at: Option<DateTime<Utc>>,
    pub recipe_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
