use std::fmt::Debug;
use std::num::NonZeroU32;
use std::sync::Arc;

use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use reqwest::{header, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::AppError;

use super::metrics::RequestMetrics;

/// HTTP client for the PUBG shard API.
///
/// Wraps a shared [`reqwest::Client`] with the bearer credential, a direct
/// rate limiter and a request counter. All endpoint wrappers funnel through
/// [`PubgClient::request`].
#[derive(Debug)]
pub struct PubgClient {
    client: reqwest::Client,
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    /// PUBG API key, environment supplied. Never compiled in.
    key: String,
    base_url: String,
    pub metrics: Arc<RequestMetrics>,
}

impl PubgClient {
    pub fn new(api_key: String, base_url: String, rate_limit_per_minute: NonZeroU32) -> Self {
        let q = Quota::per_minute(rate_limit_per_minute);

        Self {
            client: reqwest::Client::new(),
            limiter: RateLimiter::direct(q),
            key: api_key,
            base_url,
            metrics: RequestMetrics::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.api_key.clone(),
            config.api_base_url.clone(),
            config.rate_limit_per_minute,
        )
    }

    /// Spawn a task logging periodic metrics about requests.
    pub fn start_metrics_logging(&self) {
        let metrics = self.metrics.clone();
        tokio::spawn(async move { metrics.log_loop().await });
    }

    pub(crate) fn shard_url(&self, platform: super::Platform) -> String {
        format!("{}/shards/{}", self.base_url, platform.as_str())
    }

    pub(crate) async fn request<T: DeserializeOwned + Debug>(
        &self,
        path: String,
    ) -> Result<T, AppError> {
        // Stay inside the PUBG API rate limits before doing any request.
        self.limiter.until_ready().await;
        self.metrics.inc();

        let res = self
            .client
            .get(path)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.key))
            .header(header::ACCEPT, "application/vnd.api+json")
            .send()
            .await
            .map_err(AppError::Http)?;
        match res.status() {
            StatusCode::OK => res.json().await.map_err(AppError::Http),
            status => Err(AppError::Api(status)),
        }
    }
}
