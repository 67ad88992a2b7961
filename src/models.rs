use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{cache::FileCache, config::Config, nps::PageFetcher};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// One national site scraped from its nps.gov detail page. Fields the page
/// does not carry are blank (a single space), never missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkSite {
    pub category: String,
    pub name: String,
    pub address: String,
    pub zipcode: String,
    pub phone: String,
    pub url: String,
}

impl ParkSite {
    pub fn info(&self) -> String {
        format!(
            "{} ({}): {} {}",
            self.name, self.category, self.address, self.zipcode
        )
    }
}

/// One business returned by the radius search around a site's zipcode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyPlace {
    pub name: String,
    pub category: String,
    pub address: String,
    pub city: String,
}

impl NearbyPlace {
    pub fn info(&self) -> String {
        format!(
            "- {} ({}): {}, {}",
            self.name, self.category, self.address, self.city
        )
    }
}

#[derive(Debug, Serialize)]
pub struct StateSitesExport {
    pub state: String,
    pub state_url: String,
    pub exported_at: String,
    pub total_sites: usize,
    pub sites: Vec<ParkSite>,
}

pub struct CliApp {
    pub config: Config,
    pub cache: Arc<Mutex<FileCache>>,
    pub fetcher: PageFetcher,
}
