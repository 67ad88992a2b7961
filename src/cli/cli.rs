use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;

use crate::cache::FileCache;
use crate::config::Config;
use crate::models::CliApp;
use crate::nps::PageFetcher;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub const API_KEY_VAR: &str = "MAPQUEST_API_KEY";

#[derive(Debug, Clone)]
pub enum MenuAction {
    ExploreStates,
    ExportStateSites,
    ShowCacheStats,
    ClearCache,
    Exit,
}

impl std::fmt::Display for MenuAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuAction::ExploreStates => {
                write!(f, "🏞️  Explore: browse states, sites and nearby places")
            }
            MenuAction::ExportStateSites => {
                write!(f, "📤 Export a state's sites to JSON")
            }
            MenuAction::ShowCacheStats => write!(f, "📊 Show cache statistics"),
            MenuAction::ClearCache => write!(f, "🧹 Clear the cache file"),
            MenuAction::Exit => write!(f, "🚪 Exit"),
        }
    }
}

impl CliApp {
    pub fn new(config: Config) -> Result<Self> {
        let cache = Arc::new(Mutex::new(FileCache::load(&config.cache.file)));
        let fetcher = PageFetcher::new(&config, cache.clone())?;

        if std::env::var(API_KEY_VAR).is_err() {
            warn!(
                "No {} found; nearby-place lookups will be unavailable",
                API_KEY_VAR
            );
        }

        Ok(Self {
            config,
            cache,
            fetcher,
        })
    }

    pub fn api_key(&self) -> Option<String> {
        std::env::var(API_KEY_VAR).ok().filter(|k| !k.is_empty())
    }
}
