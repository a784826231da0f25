//! In-memory stores so handlers and the router can be tested without
//! Postgres or Redis.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::Config;
use crate::errors::AppError;
use crate::history::models::TextEntryRow;
use crate::history::store::HistoryStore;
use crate::layout::StaticFontMetrics;
use crate::preferences::store::PreferenceStore;
use crate::state::AppState;

#[derive(Default)]
pub struct MemoryHistoryStore {
    entries: RwLock<Vec<TextEntryRow>>,
    /// When set, every call fails as if the database were down.
    pub fail: AtomicBool,
}

impl MemoryHistoryStore {
    fn check(&self) -> Result<(), AppError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::Internal(anyhow::anyhow!("history store offline")));
        }
        Ok(())
    }
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn list(&self) -> Result<Vec<TextEntryRow>, AppError> {
        self.check()?;
        let mut entries = self.entries.read().await.clone();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }

    async fn insert(&self, text: String) -> Result<TextEntryRow, AppError> {
        self.check()?;
        let mut entries = self.entries.write().await;
        // Strictly increasing timestamps keep newest-first ordering deterministic.
        let created_at = entries
            .iter()
            .map(|e| e.created_at + Duration::milliseconds(1))
            .max()
            .unwrap_or_else(Utc::now);
        let row = TextEntryRow {
            id: Uuid::new_v4(),
            text,
            created_at,
        };
        entries.push(row.clone());
        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        self.check()?;
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        Ok(entries.len() != before)
    }
}

#[derive(Default)]
pub struct MemoryPreferenceStore {
    tooltip_seen: AtomicBool,
    pub fail: AtomicBool,
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn gradient_tooltip_seen(&self) -> Result<bool, AppError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::Internal(anyhow::anyhow!("preferences offline")));
        }
        Ok(self.tooltip_seen.load(Ordering::SeqCst))
    }

    async fn mark_gradient_tooltip_seen(&self) -> Result<(), AppError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::Internal(anyhow::anyhow!("preferences offline")));
        }
        self.tooltip_seen.store(true, Ordering::SeqCst);
        Ok(())
    }
}

pub struct TestContext {
    pub state: AppState,
    pub history: Arc<MemoryHistoryStore>,
    pub preferences: Arc<MemoryPreferenceStore>,
}

pub fn test_context() -> TestContext {
    let history = Arc::new(MemoryHistoryStore::default());
    let preferences = Arc::new(MemoryPreferenceStore::default());
    let state = AppState {
        history: history.clone(),
        preferences: preferences.clone(),
        measurer: Arc::new(StaticFontMetrics),
        config: Config::for_tests(),
    };
    TestContext {
        state,
        history,
        preferences,
    }
}
