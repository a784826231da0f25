use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::history::models::TextEntryRow;

/// Persistence for saved texts.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// All entries, newest first.
    async fn list(&self) -> Result<Vec<TextEntryRow>, AppError>;

    /// Stores already-sanitized text and returns the new row.
    async fn insert(&self, text: String) -> Result<TextEntryRow, AppError>;

    /// Returns false when no entry had this id.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}

pub struct PgHistoryStore {
    pool: PgPool,
}

impl PgHistoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoryStore for PgHistoryStore {
    async fn list(&self) -> Result<Vec<TextEntryRow>, AppError> {
        let rows = sqlx::query_as::<_, TextEntryRow>(
            "SELECT id, text, created_at FROM text_history ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert(&self, text: String) -> Result<TextEntryRow, AppError> {
        let row = sqlx::query_as::<_, TextEntryRow>(
            r#"
            INSERT INTO text_history (id, text)
            VALUES ($1, $2)
            RETURNING id, text, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(text)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM text_history WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
