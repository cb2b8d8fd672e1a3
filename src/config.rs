use std::env;
use std::num::NonZeroU32;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_base_url: String,
    pub rate_limit_per_minute: NonZeroU32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        const DEFAULT_API_BASE_URL: &str = "https://api.pubg.com";
        // The PUBG developer portal grants 10 requests per minute by default.
        const DEFAULT_RATE_LIMIT_PER_MINUTE: u32 = 10;

        let api_key = env::var("PUBG_API_KEY")
            .map_err(|_| AppError::Config("PUBG_API_KEY must be set".into()))?;

        let api_base_url =
            env::var("PUBG_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.into());

        let rate_limit_per_minute = env::var("PUBG_RATE_LIMIT_PER_MINUTE")
            .ok()
            .and_then(|v| v.parse().ok())
            .and_then(NonZeroU32::new)
            .unwrap_or_else(|| {
                NonZeroU32::new(DEFAULT_RATE_LIMIT_PER_MINUTE).unwrap_or(NonZeroU32::MIN)
            });

        Ok(Self {
            api_key,
            api_base_url,
            rate_limit_per_minute,
        })
    }
}
