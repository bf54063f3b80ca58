//! Dashboard Configuration
//!
//! Compiled-in defaults, optionally overridden from the page query string
//! (`?api=..&limit=..&offset=..&fresh=1`).

use percent_encoding::percent_decode_str;

use crate::models::Position;

pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

/// Map center and the anchor for generated marker positions
pub const MAP_CENTER: Position = Position::new(51.505, -0.09);

/// Shown in place of the table when the catalogue cannot be loaded
pub const FETCH_ERROR_MESSAGE: &str = "Error al obtener datos de Pokémon";
pub const EDIT_SUCCESS_MESSAGE: &str = "Ubicación actualizada con éxito";

/// Rows-per-page choices for the table
pub const PAGE_SIZES: &[usize] = &[5, 10, 20];

/// What to request and how to place the results
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogueSettings {
    pub limit: u32,
    pub offset: u32,
    pub center: Position,
    /// Maximum offset from `center` on each axis, in degrees
    pub spread: f64,
}

impl Default for CatalogueSettings {
    fn default() -> Self {
        Self {
            limit: 100,
            offset: 0,
            center: MAP_CENTER,
            spread: 0.05,
        }
    }
}

/// Local storage keys
#[derive(Debug, Clone, PartialEq)]
pub struct StorageKeys {
    pub snapshot_key: String,
    pub fetched_at_key: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            snapshot_key: "catalogueSnapshot".to_string(),
            fetched_at_key: "lastFetchTime".to_string(),
        }
    }
}

/// The one accepted login
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "password".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub catalogue: CatalogueSettings,
    pub storage: StorageKeys,
    pub credentials: Credentials,
    pub tile_url: String,
    pub map_zoom: u8,
    /// Restore the stored snapshot on mount instead of refetching
    pub reuse_snapshot: bool,
    pub default_page_size: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            catalogue: CatalogueSettings::default(),
            storage: StorageKeys::default(),
            credentials: Credentials::default(),
            tile_url: DEFAULT_TILE_URL.to_string(),
            map_zoom: 13,
            reuse_snapshot: true,
            default_page_size: 10,
        }
    }
}

impl DashboardConfig {
    /// Defaults plus overrides from the current page URL
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::default().with_overrides(&search)
    }

    /// Apply `key=value` pairs from a query string. Bad values are skipped.
    pub fn with_overrides(mut self, query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let value = percent_decode_str(raw).decode_utf8_lossy();
            let value = value.trim();
            let applied = match key {
                "api" if value.starts_with("http://") || value.starts_with("https://") => {
                    self.api_base_url = value.trim_end_matches('/').to_string();
                    true
                }
                "limit" => value.parse::<u32>().map(|limit| self.catalogue.limit = limit).is_ok(),
                "offset" => value.parse::<u32>().map(|offset| self.catalogue.offset = offset).is_ok(),
                "fresh" => {
                    self.reuse_snapshot = !matches!(value, "1" | "true" | "");
                    true
                }
                _ => false,
            };
            if applied {
                log::info!("Config override {}={}", key, value);
            } else {
                log::warn!("Ignoring config override {:?}", pair);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.catalogue.limit, 100);
        assert_eq!(config.catalogue.offset, 0);
        assert_eq!(config.storage.snapshot_key, "catalogueSnapshot");
        assert!(config.reuse_snapshot);
        assert!(PAGE_SIZES.contains(&config.default_page_size));
    }

    #[test]
    fn test_overrides_are_decoded() {
        let config = DashboardConfig::default()
            .with_overrides("?api=http%3A%2F%2Flocalhost%3A8080%2Fapi%2F&limit=20&offset=40&fresh=1");
        assert_eq!(config.api_base_url, "http://localhost:8080/api");
        assert_eq!(config.catalogue.limit, 20);
        assert_eq!(config.catalogue.offset, 40);
        assert!(!config.reuse_snapshot);
    }

    #[test]
    fn test_bad_overrides_are_ignored() {
        let config = DashboardConfig::default().with_overrides("limit=lots&api=ftp://x&color=red&fresh=0");
        assert_eq!(config, DashboardConfig::default());
        let config = DashboardConfig::default().with_overrides("api=httpfoo");
        assert_eq!(config, DashboardConfig::default());
    }
}
