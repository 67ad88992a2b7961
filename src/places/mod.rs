// src/places/mod.rs - MapQuest radius search around a site's zipcode
use serde_json::Value;
use tracing::info;

use crate::config::SearchConfig;
use crate::models::NearbyPlace;
use crate::nps::PageFetcher;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub const RADIUS_SEARCH_URL: &str = "http://www.mapquestapi.com/search/v2/radius";

const NO_CATEGORY: &str = "no category";
const NO_ADDRESS: &str = "no address";
const NO_CITY: &str = "no city";

/// Businesses within the configured radius of a zipcode, via the MapQuest
/// radius search. The request is cached under its base URL plus sorted
/// parameter strings.
pub async fn get_nearby_places(
    fetcher: &PageFetcher,
    config: &SearchConfig,
    api_key: &str,
    zipcode: &str,
) -> Result<Vec<NearbyPlace>> {
    let zipcode = zipcode.trim();
    if zipcode.is_empty() {
        return Err("Site has no zipcode to search around".into());
    }

    let params = vec![
        ("key".to_string(), api_key.to_string()),
        ("origin".to_string(), zipcode.to_string()),
        ("radius".to_string(), config.radius_miles.to_string()),
        ("maxMatches".to_string(), config.max_matches.to_string()),
        ("ambiguities".to_string(), config.ambiguities.clone()),
        ("outFormat".to_string(), "json".to_string()),
    ];

    let body = fetcher.fetch_search(RADIUS_SEARCH_URL, &params).await?;
    let places = parse_search_results(&body);

    info!("📍 {} places within {} miles of {}", places.len(), config.radius_miles, zipcode);
    Ok(places)
}

fn parse_search_results(body: &Value) -> Vec<NearbyPlace> {
    let Some(results) = body.get("searchResults").and_then(Value::as_array) else {
        return Vec::new();
    };

    results
        .iter()
        .map(|result| {
            let fields = result.get("fields");
            NearbyPlace {
                name: text_or(result.get("name"), ""),
                category: text_or(
                    fields.and_then(|f| f.get("group_sa_category")),
                    NO_CATEGORY,
                ),
                address: text_or(fields.and_then(|f| f.get("address")), NO_ADDRESS),
                city: text_or(fields.and_then(|f| f.get("city")), NO_CITY),
            }
        })
        .collect()
}

fn text_or(value: Option<&Value>, fallback: &str) -> String {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_results_with_all_fields() {
        let body = json!({
            "searchResults": [
                {
                    "name": "Keweenaw Co-op",
                    "fields": {
                        "group_sa_category": "Grocery Stores",
                        "address": "1035 Ethel Ave",
                        "city": "Hancock"
                    }
                }
            ]
        });

        let places = parse_search_results(&body);
        assert_eq!(places.len(), 1);
        assert_eq!(
            places[0].info(),
            "- Keweenaw Co-op (Grocery Stores): 1035 Ethel Ave, Hancock"
        );
    }

    #[test]
    fn missing_fields_get_fallbacks() {
        let body = json!({
            "searchResults": [
                { "name": "Mystery Spot", "fields": { "address": "" } }
            ]
        });

        let places = parse_search_results(&body);
        assert_eq!(places[0].category, "no category");
        assert_eq!(places[0].address, "no address");
        assert_eq!(places[0].city, "no city");
    }

    #[test]
    fn no_results_key_yields_empty_list() {
        let body = json!({ "info": { "statuscode": 400 } });
        assert!(parse_search_results(&body).is_empty());
    }
}
