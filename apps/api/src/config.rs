use std::str::FromStr;

use anyhow::{Context, Result};

use crate::layout::fit::{DEFAULT_MAX_FONT_SIZE, DEFAULT_MIN_FONT_SIZE};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    pub port: u16,
    pub rust_log: String,
    pub fit: FitDefaults,
}

/// Engine bounds applied when a request does not override them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitDefaults {
    pub min_font_size: f32,
    pub max_font_size: f32,
    /// Line-count budget in landscape (wide boxes get more candidates).
    pub max_lines_landscape: i32,
    pub max_lines_portrait: i32,
}

impl Default for FitDefaults {
    fn default() -> Self {
        Self {
            min_font_size: DEFAULT_MIN_FONT_SIZE,
            max_font_size: DEFAULT_MAX_FONT_SIZE,
            max_lines_landscape: 8,
            max_lines_portrait: 5,
        }
    }
}

impl FitDefaults {
    /// Largest line budget a caller may request; explicit budgets are clamped to it.
    pub fn max_line_budget(&self) -> i32 {
        self.max_lines_landscape.max(self.max_lines_portrait)
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = FitDefaults::default();
        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            redis_url: require_env("REDIS_URL")?,
            port: optional_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            fit: FitDefaults {
                min_font_size: optional_env("FIT_MIN_FONT_SIZE", defaults.min_font_size)?,
                max_font_size: optional_env("FIT_MAX_FONT_SIZE", defaults.max_font_size)?,
                max_lines_landscape: optional_env(
                    "FIT_MAX_LINES_LANDSCAPE",
                    defaults.max_lines_landscape,
                )?,
                max_lines_portrait: optional_env(
                    "FIT_MAX_LINES_PORTRAIT",
                    defaults.max_lines_portrait,
                )?,
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    /// Configuration for in-process tests; the URLs are never dialled.
    pub fn for_tests() -> Self {
        Config {
            database_url: "postgres://localhost/bigtext_test".to_string(),
            redis_url: "redis://localhost".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            fit: FitDefaults::default(),
        }
    }
}
