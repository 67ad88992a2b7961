// src/nps/state_index.rs - State name -> state listing page URL
use scraper::{Html, Selector};
use std::collections::HashMap;
use tracing::info;

use super::{PageFetcher, NPS_BASE_URL, NPS_HOME_URL};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Builds the directory of states from the nps.gov home page dropdown.
/// Keys are lowercase state names, values are absolute listing-page URLs,
/// e.g. `michigan -> https://www.nps.gov/state/mi/index.htm`.
pub async fn build_state_index(fetcher: &PageFetcher) -> Result<HashMap<String, String>> {
    let html = fetcher.fetch_page(NPS_HOME_URL).await?;
    let index = parse_state_index(&html);

    if index.is_empty() {
        return Err("No state links found on the NPS home page".into());
    }

    info!("🗺️  Indexed {} states", index.len());
    Ok(index)
}

fn parse_state_index(html: &str) -> HashMap<String, String> {
    let document = Html::parse_document(html);
    let link_selector =
        Selector::parse("ul.dropdown-menu.SearchBar-keywordSearch a").expect("valid selector");

    let mut index = HashMap::new();
    for element in document.select(&link_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let name = element.text().collect::<String>().trim().to_lowercase();
        if name.is_empty() {
            continue;
        }
        index.insert(name, format!("{}{}", NPS_BASE_URL, href));
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOME_FIXTURE: &str = r#"
        <html><body>
          <ul class="dropdown-menu SearchBar-keywordSearch">
            <li><a href="/state/mi/index.htm">Michigan</a></li>
            <li><a href="/state/wy/index.htm"> Wyoming </a></li>
          </ul>
          <ul class="dropdown-menu">
            <li><a href="/not/a/state.htm">Not A State</a></li>
          </ul>
        </body></html>
    "#;

    #[test]
    fn parses_states_from_dropdown() {
        let index = parse_state_index(HOME_FIXTURE);

        assert_eq!(index.len(), 2);
        assert_eq!(
            index.get("michigan"),
            Some(&"https://www.nps.gov/state/mi/index.htm".to_string())
        );
        assert_eq!(
            index.get("wyoming"),
            Some(&"https://www.nps.gov/state/wy/index.htm".to_string())
        );
    }

    #[test]
    fn ignores_other_dropdowns() {
        let index = parse_state_index(HOME_FIXTURE);
        assert!(!index.contains_key("not a state"));
    }

    #[test]
    fn empty_page_yields_empty_index() {
        assert!(parse_state_index("<html></html>").is_empty());
    }
}
