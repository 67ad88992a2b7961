// src/nps/fetch.rs - HTTP client with cache-through semantics
use crate::cache::{search_key, FileCache};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::config::Config;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Every page and API fetch goes through here: cache hit returns the stored
/// payload, cache miss hits the network and writes through.
pub struct PageFetcher {
    client: Client,
    cache: Arc<Mutex<FileCache>>,
    delay_ms: u64,
}

impl PageFetcher {
    pub fn new(config: &Config, cache: Arc<Mutex<FileCache>>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.scraping.user_agent.clone())
            .timeout(Duration::from_secs(config.scraping.request_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            cache,
            delay_ms: config.scraping.rate_limit_delay_ms,
        })
    }

    /// Fetches an HTML page, keyed in the cache by its URL.
    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        {
            let cache = self.cache.lock().await;
            if let Some(Value::String(html)) = cache.get(url) {
                info!("📦 Using cache: {}", url);
                return Ok(html.clone());
            }
        }

        info!("🌐 Fetching: {}", url);
        let html = self.get_text(url).await?;
        self.cache
            .lock()
            .await
            .insert(url.to_string(), Value::String(html.clone()))?;

        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        Ok(html)
    }

    /// Issues a parameterized search request, keyed in the cache by the base
    /// URL plus its sorted parameter strings. The parsed JSON body is what
    /// gets cached, not the raw text.
    pub async fn fetch_search(&self, base_url: &str, params: &[(String, String)]) -> Result<Value> {
        let key = search_key(base_url, params);
        {
            let cache = self.cache.lock().await;
            if let Some(value) = cache.get(&key) {
                info!("📦 Using cache: {}", base_url);
                return Ok(value.clone());
            }
        }

        info!("🌐 Fetching: {}", base_url);
        let response = self.client.get(base_url).query(params).send().await?;
        if !response.status().is_success() {
            return Err(format!("HTTP error: {}", response.status()).into());
        }

        let value: Value = response.json().await?;
        self.cache.lock().await.insert(key, value.clone())?;

        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        Ok(value)
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(format!("HTTP error: {}", response.status()).into());
        }

        let text = response.text().await?;
        debug!("Fetched {} bytes from {}", text.len(), url);
        Ok(text)
    }
}
