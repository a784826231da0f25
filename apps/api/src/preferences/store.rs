use async_trait::async_trait;
use redis::AsyncCommands;

use crate::errors::AppError;

const GRADIENT_TOOLTIP_KEY: &str = "bigtext:prefs:gradient_tooltip_shown";

/// Small per-installation flags.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Whether the gradient tooltip has already been shown. Unset means false.
    async fn gradient_tooltip_seen(&self) -> Result<bool, AppError>;

    async fn mark_gradient_tooltip_seen(&self) -> Result<(), AppError>;
}

pub struct RedisPreferenceStore {
    client: redis::Client,
}

impl RedisPreferenceStore {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PreferenceStore for RedisPreferenceStore {
    async fn gradient_tooltip_seen(&self) -> Result<bool, AppError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<bool> = conn.get(GRADIENT_TOOLTIP_KEY).await?;
        Ok(value.unwrap_or(false))
    }

    async fn mark_gradient_tooltip_seen(&self) -> Result<(), AppError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set::<_, _, ()>(GRADIENT_TOOLTIP_KEY, true).await?;
        Ok(())
    }
}
