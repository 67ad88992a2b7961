// src/nps/sites.rs - Per-state site lists and site detail extraction
use scraper::{Html, Selector};
use tracing::{info, warn};
use url::Url;

use super::{PageFetcher, NPS_BASE_URL};
use crate::models::ParkSite;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

// Missing fields stay blank rather than dropping the site.
const BLANK: &str = " ";

/// Resolves every site listed on a state page into a [`ParkSite`] record.
pub async fn get_sites_for_state(fetcher: &PageFetcher, state_url: &str) -> Result<Vec<ParkSite>> {
    let html = fetcher.fetch_page(state_url).await?;
    let site_urls = parse_site_links(&html);

    info!("🏞️  Found {} site links on {}", site_urls.len(), state_url);

    let mut sites = Vec::with_capacity(site_urls.len());
    for site_url in site_urls {
        match get_site(fetcher, &site_url).await {
            Ok(site) => sites.push(site),
            Err(e) => warn!("Failed to resolve site {}: {}", site_url, e),
        }
    }

    Ok(sites)
}

/// Fetches one site's detail page and scrapes its record.
pub async fn get_site(fetcher: &PageFetcher, site_url: &str) -> Result<ParkSite> {
    let html = fetcher.fetch_page(site_url).await?;
    Ok(parse_site_detail(&html, site_url))
}

/// Site links on a state page sit in `h3` headings inside the park list.
/// Relative hrefs like `/yose/` resolve to `https://www.nps.gov/yose/index.htm`.
fn parse_site_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let list_selector = Selector::parse("#list_parks h3 a[href]").expect("valid selector");
    let fallback_selector = Selector::parse("h3 a[href]").expect("valid selector");

    let mut anchors: Vec<_> = document.select(&list_selector).collect();
    if anchors.is_empty() {
        anchors = document.select(&fallback_selector).collect();
    }

    let base = Url::parse(NPS_BASE_URL).expect("valid base url");
    let mut urls = Vec::new();
    for anchor in anchors {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Ok(mut resolved) = base.join(href) else {
            continue;
        };
        if !resolved.path().ends_with('/') {
            resolved.set_path(&format!("{}/", resolved.path()));
        }
        let Ok(full) = resolved.join("index.htm") else {
            continue;
        };
        let full = full.to_string();
        if !urls.contains(&full) {
            urls.push(full);
        }
    }

    urls
}

fn parse_site_detail(html: &str, site_url: &str) -> ParkSite {
    let document = Html::parse_document(html);

    let name = select_text(&document, "div.Hero-titleContainer a");
    let category = select_text(&document, "span.Hero-designation");
    let city = select_text(&document, r#"span[itemprop="addressLocality"]"#);
    let state_abbrev = select_text(&document, r#"span[itemprop="addressRegion"]"#);
    let zipcode = select_text(&document, r#"span[itemprop="postalCode"]"#);
    let phone = select_text(&document, r#"span[itemprop="telephone"]"#);

    ParkSite {
        category,
        name,
        address: format!("{}, {}", city, state_abbrev),
        zipcode,
        phone,
        url: site_url.to_string(),
    }
}

/// First match's trimmed text, or a blank field when the page lacks it.
fn select_text(document: &Html, selector: &str) -> String {
    let selector = Selector::parse(selector).expect("valid selector");
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| BLANK.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATE_FIXTURE: &str = r#"
        <html><body>
          <ul id="list_parks">
            <li class="clearfix"><h3><a href="/isro/">Isle Royale</a></h3></li>
            <li class="clearfix"><h3><a href="/piro/">Pictured Rocks</a></h3></li>
            <li class="clearfix"><h3><a href="/isro/">Isle Royale again</a></h3></li>
          </ul>
          <h3><a href="/somewhere-else/">Unrelated heading</a></h3>
        </body></html>
    "#;

    const SITE_FIXTURE: &str = r#"
        <html><body>
          <div class="Hero-titleContainer clearfix">
            <a href="/isro/" class="Hero-title" id="anch_10">Isle Royale</a>
            <div class="Hero-designationContainer">
              <span class="Hero-designation">National Park</span>
              <span class="Hero-location">Michigan</span>
            </div>
          </div>
          <p class="adr">
            <span itemprop="addressLocality">Houghton</span>,
            <span itemprop="addressRegion">MI</span>
            <span itemprop="postalCode">49931 </span>
          </p>
          <span itemprop="telephone">(906) 482-0984</span>
        </body></html>
    "#;

    #[test]
    fn parses_site_links_from_park_list() {
        let urls = parse_site_links(STATE_FIXTURE);

        assert_eq!(
            urls,
            vec![
                "https://www.nps.gov/isro/index.htm".to_string(),
                "https://www.nps.gov/piro/index.htm".to_string(),
            ]
        );
    }

    #[test]
    fn falls_back_to_plain_headings_without_park_list() {
        let html = r#"<h3><a href="/yose/">Yosemite</a></h3>"#;
        let urls = parse_site_links(html);
        assert_eq!(urls, vec!["https://www.nps.gov/yose/index.htm".to_string()]);
    }

    #[test]
    fn parses_full_site_detail() {
        let site = parse_site_detail(SITE_FIXTURE, "https://www.nps.gov/isro/index.htm");

        assert_eq!(site.name, "Isle Royale");
        assert_eq!(site.category, "National Park");
        assert_eq!(site.address, "Houghton, MI");
        assert_eq!(site.zipcode, "49931");
        assert_eq!(site.phone, "(906) 482-0984");
        assert_eq!(
            site.info(),
            "Isle Royale (National Park): Houghton, MI 49931"
        );
    }

    #[test]
    fn missing_fields_stay_blank() {
        let site = parse_site_detail("<html><body></body></html>", "https://www.nps.gov/x/");

        assert_eq!(site.name, " ");
        assert_eq!(site.category, " ");
        assert_eq!(site.address, " ,  ");
        assert_eq!(site.zipcode, " ");
        assert_eq!(site.phone, " ");
    }
}
