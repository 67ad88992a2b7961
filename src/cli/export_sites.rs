// src/cli/export_sites.rs - Dump a state's resolved site records to JSON
use chrono::Utc;
use dialoguer::{theme::ColorfulTheme, Input};

use crate::models::{CliApp, StateSitesExport};
use crate::nps::{build_state_index, sites};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

impl CliApp {
    pub async fn export_state_sites(&self) -> Result<()> {
        println!("\n📤 Export State Sites");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        let state_index = build_state_index(&self.fetcher).await?;

        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("State name to export")
            .interact_text()?;
        let state = input.trim().to_lowercase();

        let Some(state_url) = state_index.get(&state) else {
            println!("❌ Unknown state: '{}'", input.trim());
            return Ok(());
        };

        let site_list = sites::get_sites_for_state(&self.fetcher, state_url).await?;
        if site_list.is_empty() {
            println!("❌ No sites found for {}", state);
            return Ok(());
        }

        let export = StateSitesExport {
            state: state.clone(),
            state_url: state_url.clone(),
            exported_at: Utc::now().to_rfc3339(),
            total_sites: site_list.len(),
            sites: site_list,
        };

        let filename = format!(
            "{}/{}_sites_{}.json",
            self.config.output.directory,
            state.replace(' ', "_"),
            Utc::now().format("%Y%m%d_%H%M%S")
        );
        self.save_to_json(&export, &filename).await?;

        println!("✅ Exported {} sites to {}", export.total_sites, filename);
        Ok(())
    }

    async fn save_to_json(&self, export: &StateSitesExport, filename: &str) -> Result<()> {
        if let Some(parent) = std::path::Path::new(filename).parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = if self.config.output.pretty_json {
            serde_json::to_string_pretty(export)?
        } else {
            serde_json::to_string(export)?
        };
        tokio::fs::write(filename, json).await?;
        Ok(())
    }
}
