use std::env;

use anyhow::{Context, Result};
use chrono::FixedOffset;

/// Default predictions API base URL
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Predictions API base URL (without trailing `/predictions`)
    pub api_url: String,

    /// Offset from UTC used when displaying game times, in minutes
    pub display_utc_offset_minutes: i32,

    /// Zone abbreviation printed after game times (e.g. "ET")
    pub display_zone_label: String,

    /// Title of the rendered page
    pub page_title: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            api_url: env::var("PREDICTIONS_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),

            display_utc_offset_minutes: env::var("DISPLAY_UTC_OFFSET_MINUTES")
                .unwrap_or_else(|_| "0".to_string())
                .parse()
                .context("DISPLAY_UTC_OFFSET_MINUTES must be a valid number")?,

            display_zone_label: env::var("DISPLAY_ZONE_LABEL")
                .unwrap_or_else(|_| "UTC".to_string()),

            page_title: env::var("PAGE_TITLE")
                .unwrap_or_else(|_| "NBA Game Predictions".to_string()),
        })
    }

    /// Fixed offset used to display game times
    pub fn display_offset(&self) -> Result<FixedOffset> {
        self.display_utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .with_context(|| {
                format!(
                    "DISPLAY_UTC_OFFSET_MINUTES out of range: {}",
                    self.display_utc_offset_minutes
                )
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            display_utc_offset_minutes: 0,
            display_zone_label: "UTC".to_string(),
            page_title: "NBA Game Predictions".to_string(),
        }
    }
}
