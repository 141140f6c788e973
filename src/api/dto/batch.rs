//! Batch response DTOs.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::Batch;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResponse {
    pub id: Uuid,
    pub name: String,
    pub brew_notes: String,
    pub tasting_notes: String,
    pub brewed_at: Option<DateTime<Utc>>,
    pub bottled_at: Option<DateTime<Utc>>,
    pub recipe_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Batch> for BatchResponse {
    fn from(b: Batch) -> Self {
        Self {
            id: b.uuid,
            name: b.name,
            brew_notes: b.brew_notes,
            tasting_notes: b.tasting_notes,
            brewed_at: b.brewed_at,
            bottled_at: b.bottled_at,
            recipe_url: b.recipe_url,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}
