// src/cli/explore_states.rs - The state -> site -> nearby-places loop
use dialoguer::{theme::ColorfulTheme, Input};
use std::collections::HashMap;

use crate::models::{CliApp, ParkSite};
use crate::nps::{build_state_index, sites};
use crate::places;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

enum SitePrompt {
    Back,
    Exit,
}

#[derive(Debug, PartialEq, Eq)]
enum SiteChoice {
    Back,
    Exit,
    Index(usize),
    Invalid,
}

/// Interprets one site-prompt entry against a list of `len` sites. Numbers
/// are 1-based; anything out of range or non-numeric is invalid.
fn parse_site_choice(input: &str, len: usize) -> SiteChoice {
    let choice = input.trim().to_lowercase();
    match choice.as_str() {
        "back" => SiteChoice::Back,
        "exit" => SiteChoice::Exit,
        _ => match choice.parse::<usize>() {
            Ok(n) if (1..=len).contains(&n) => SiteChoice::Index(n - 1),
            _ => SiteChoice::Invalid,
        },
    }
}

impl CliApp {
    pub async fn explore_states(&self) -> Result<()> {
        println!("\n🏞️  Explore National Sites");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        let state_index = build_state_index(&self.fetcher).await?;

        loop {
            let input: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Enter a state name (e.g. Michigan, michigan), or 'exit'")
                .interact_text()?;
            let state = input.trim().to_lowercase();

            if state == "exit" {
                break;
            }

            let Some(state_url) = state_index.get(&state) else {
                println!("❌ Unknown state: '{}'", input.trim());
                self.suggest_states(&state_index, &state);
                continue;
            };

            let site_list = sites::get_sites_for_state(&self.fetcher, state_url).await?;
            if site_list.is_empty() {
                println!("❌ No sites found for {}", state);
                continue;
            }

            println!("\nList of national sites in {}", state);
            println!("----------------------------------------------");
            for (i, site) in site_list.iter().enumerate() {
                println!("[{}] {}", i + 1, site.info());
            }

            if let SitePrompt::Exit = self.site_loop(&site_list).await? {
                break;
            }
        }

        Ok(())
    }

    async fn site_loop(&self, site_list: &[ParkSite]) -> Result<SitePrompt> {
        loop {
            let input: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Choose a number for nearby places, or 'back' or 'exit'")
                .interact_text()?;

            match parse_site_choice(&input, site_list.len()) {
                SiteChoice::Back => return Ok(SitePrompt::Back),
                SiteChoice::Exit => return Ok(SitePrompt::Exit),
                SiteChoice::Invalid => println!("[Error] Invalid input"),
                SiteChoice::Index(index) => {
                    if let Err(e) = self.print_nearby_places(&site_list[index]).await {
                        println!("❌ Nearby-place lookup failed: {}", e);
                    }
                }
            }
        }
    }

    async fn print_nearby_places(&self, site: &ParkSite) -> Result<()> {
        let Some(api_key) = self.api_key() else {
            println!("❌ MAPQUEST_API_KEY is not set; cannot search nearby places");
            println!("💡 Add it to your environment or a .env file");
            return Ok(());
        };

        let nearby = places::get_nearby_places(
            &self.fetcher,
            &self.config.search,
            &api_key,
            &site.zipcode,
        )
        .await?;

        println!("\nPlaces near {}", site.name.trim());
        println!("----------------------------------------------");
        if nearby.is_empty() {
            println!("(no results)");
        }
        for place in &nearby {
            println!("{}", place.info());
        }

        Ok(())
    }

    fn suggest_states(&self, state_index: &HashMap<String, String>, input: &str) {
        let mut matches: Vec<&str> = state_index
            .keys()
            .filter(|name| !input.is_empty() && name.starts_with(input))
            .map(String::as_str)
            .collect();
        matches.sort_unstable();

        if !matches.is_empty() {
            println!("💡 Did you mean: {}?", matches.join(", "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_in_range_map_to_zero_based_indices() {
        assert_eq!(parse_site_choice("1", 3), SiteChoice::Index(0));
        assert_eq!(parse_site_choice("3", 3), SiteChoice::Index(2));
        assert_eq!(parse_site_choice(" 2 ", 3), SiteChoice::Index(1));
    }

    #[test]
    fn zero_and_past_the_end_are_invalid() {
        assert_eq!(parse_site_choice("0", 3), SiteChoice::Invalid);
        assert_eq!(parse_site_choice("4", 3), SiteChoice::Invalid);
    }

    #[test]
    fn non_numeric_input_is_invalid() {
        assert_eq!(parse_site_choice("two", 3), SiteChoice::Invalid);
        assert_eq!(parse_site_choice("", 3), SiteChoice::Invalid);
        assert_eq!(parse_site_choice("-1", 3), SiteChoice::Invalid);
    }

    #[test]
    fn back_and_exit_are_case_insensitive() {
        assert_eq!(parse_site_choice("back", 3), SiteChoice::Back);
        assert_eq!(parse_site_choice(" Back ", 3), SiteChoice::Back);
        assert_eq!(parse_site_choice("EXIT", 3), SiteChoice::Exit);
    }
}
