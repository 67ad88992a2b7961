// src/cache.rs - Flat-file memoization of every network fetch
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Write-through cache keyed by request identity: the URL for plain page
/// fetches, or the search-API key built by [`search_key`]. Everything lives in
/// one JSON file; no eviction, no expiry, no locking across processes.
pub struct FileCache {
    path: PathBuf,
    entries: HashMap<String, Value>,
}

impl FileCache {
    /// Loads the cache file if it exists. Any read or parse failure is treated
    /// as a cold start with an empty map.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();

        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<HashMap<String, Value>>(&content) {
                Ok(entries) => {
                    info!("📦 Loaded cache with {} entries from {}", entries.len(), path.display());
                    entries
                }
                Err(e) => {
                    warn!("Cache file {} is unreadable ({}), starting empty", path.display(), e);
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self { path, entries }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Stores one response and persists the whole map back to disk.
    pub fn insert(&mut self, key: String, value: Value) -> Result<()> {
        self.entries.insert(key, value);
        self.save()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string(&self.entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Size of the backing file in bytes, if it has been written.
    pub fn file_size(&self) -> Option<u64> {
        std::fs::metadata(&self.path).map(|m| m.len()).ok()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drops every entry and removes the backing file.
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// Cache key for a parameterized search request: the base URL followed by the
/// `key_value` parameter strings, sorted and joined with `_`.
pub fn search_key(base_url: &str, params: &[(String, String)]) -> String {
    let mut parts: Vec<String> = params.iter().map(|(k, v)| format!("{}_{}", k, v)).collect();
    parts.sort();
    format!("{}{}", base_url, parts.join("_"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");

        let mut cache = FileCache::load(&path);
        assert!(cache.is_empty());

        cache
            .insert("https://example.com/a".to_string(), json!("<html></html>"))
            .unwrap();

        assert_eq!(
            cache.get("https://example.com/a"),
            Some(&json!("<html></html>"))
        );
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn entries_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");

        let mut cache = FileCache::load(&path);
        cache
            .insert("k".to_string(), json!({"searchResults": []}))
            .unwrap();
        drop(cache);

        let reloaded = FileCache::load(&path);
        assert_eq!(reloaded.get("k"), Some(&json!({"searchResults": []})));
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        std::fs::write(&path, "not json {{{").unwrap();

        let cache = FileCache::load(&path);
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");

        let mut cache = FileCache::load(&path);
        cache.insert("k".to_string(), json!("v")).unwrap();
        assert!(path.exists());

        cache.clear().unwrap();
        assert!(!path.exists());
        assert!(cache.is_empty());
    }

    #[test]
    fn search_key_sorts_param_strings() {
        let params = vec![
            ("radius".to_string(), "10".to_string()),
            ("key".to_string(), "abc".to_string()),
            ("origin".to_string(), "49931".to_string()),
        ];

        let key = search_key("http://api.example.com/radius", &params);
        assert_eq!(
            key,
            "http://api.example.com/radiuskey_abc_origin_49931_radius_10"
        );
    }

    #[test]
    fn search_key_is_order_insensitive() {
        let a = vec![
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "1".to_string()),
        ];
        let b = vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
        ];

        assert_eq!(search_key("base", &a), search_key("base", &b));
    }
}
