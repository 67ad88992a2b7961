use dialoguer::{theme::ColorfulTheme, Select};

use crate::{
    cli::cli::MenuAction,
    models::{CliApp, Result},
};
use tracing::error;

impl CliApp {
    pub async fn run(&self) -> Result<()> {
        println!("\n🏔️  Welcome to Park Scout!");
        println!("═══════════════════════════════════════");

        loop {
            let actions = vec![
                MenuAction::ExploreStates,
                MenuAction::ExportStateSites,
                MenuAction::ShowCacheStats,
                MenuAction::ClearCache,
                MenuAction::Exit,
            ];

            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("\nSelect an action")
                .default(0)
                .items(&actions)
                .interact()?;

            match &actions[selection] {
                MenuAction::ExploreStates => {
                    if let Err(e) = self.explore_states().await {
                        error!("Exploration failed: {}", e);
                    }
                }
                MenuAction::ExportStateSites => {
                    if let Err(e) = self.export_state_sites().await {
                        error!("Export failed: {}", e);
                    }
                }
                MenuAction::ShowCacheStats => {
                    if let Err(e) = self.show_cache_stats().await {
                        error!("Failed to show cache stats: {}", e);
                    }
                }
                MenuAction::ClearCache => {
                    if let Err(e) = self.clear_cache().await {
                        error!("Failed to clear cache: {}", e);
                    }
                }
                MenuAction::Exit => {
                    println!("\n👋 Thanks for using Park Scout!");
                    break;
                }
            }
        }

        Ok(())
    }
}
