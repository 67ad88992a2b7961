// src/cli/show_cache_stats.rs - Cache inspection and cleanup
use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::models::CliApp;
use crate::places::RADIUS_SEARCH_URL;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

impl CliApp {
    pub async fn show_cache_stats(&self) -> Result<()> {
        let cache = self.cache.lock().await;

        let search_entries = cache
            .keys()
            .filter(|key| key.starts_with(RADIUS_SEARCH_URL))
            .count();
        let page_entries = cache.len() - search_entries;

        println!("\n📊 Cache Statistics:");
        println!("━━━━━━━━━━━━━━━━━━━━━");
        println!("   📄 Cached pages: {}", page_entries);
        println!("   📍 Cached searches: {}", search_entries);
        println!("   🔢 Total entries: {}", cache.len());
        match cache.file_size() {
            Some(bytes) => println!("   💾 File size: {} bytes ({})", bytes, cache.path().display()),
            None => println!("   💾 File not written yet ({})", cache.path().display()),
        }

        Ok(())
    }

    pub async fn clear_cache(&self) -> Result<()> {
        let mut cache = self.cache.lock().await;

        if cache.is_empty() {
            println!("\n✨ Cache is already empty");
            return Ok(());
        }

        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete {} cached entries?", cache.len()))
            .interact()?;
        if !confirmed {
            println!("❌ Cache left untouched");
            return Ok(());
        }

        cache.clear()?;
        println!("🧹 Cache cleared");
        Ok(())
    }
}
