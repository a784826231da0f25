use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One saved text, as stored in `text_history`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct TextEntryRow {
    pub id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    pub text: String,
}
