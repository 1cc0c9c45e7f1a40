use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::models::{
    ContentRating, EmptyTermPolicy, EndpointProfile, ResultBundle, SearchConfig,
};
use crate::global_constants;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserSettings {
    pub api_base_url: String,
    pub api_key: String,
    pub result_limit: u32,
    pub rating: ContentRating,
    pub language: String,
    pub result_bundle: ResultBundle,
    pub endpoint_profile: EndpointProfile,
    pub empty_term_policy: EmptyTermPolicy,
    pub default_search_term: String,
    pub grid_columns: usize,
    pub theme_mode: ThemeMode,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            api_base_url: global_constants::GIPHY_API_BASE_URL.to_string(),
            api_key: global_constants::GIPHY_API_KEY.to_string(),
            result_limit: global_constants::DEFAULT_RESULT_LIMIT,
            rating: ContentRating::default(),
            language: global_constants::DEFAULT_LANGUAGE.to_string(),
            result_bundle: ResultBundle::default(),
            endpoint_profile: EndpointProfile::default(),
            empty_term_policy: EmptyTermPolicy::default(),
            default_search_term: global_constants::DEFAULT_SEARCH_TERM.to_string(),
            grid_columns: global_constants::DEFAULT_GRID_COLUMNS,
            theme_mode: ThemeMode::default(),
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from(&settings_path)
    }

    pub fn load_from(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save_to(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] API base URL: {}", settings.api_base_url);
        log::debug!(
            "[SETTINGS] Endpoint profile: {:?}, empty term policy: {:?}",
            settings.endpoint_profile,
            settings.empty_term_policy
        );

        Ok(settings)
    }

    pub fn save_to(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    pub fn search_config(&self) -> SearchConfig {
        let default_search_term = match self.default_search_term.trim() {
            "" => global_constants::DEFAULT_SEARCH_TERM.to_string(),
            term => term.to_string(),
        };

        SearchConfig {
            api_base_url: self.api_base_url.trim_end_matches('/').to_string(),
            api_key: self.api_key.clone(),
            result_limit: self.result_limit,
            rating: self.rating,
            language: self.language.clone(),
            result_bundle: self.result_bundle,
            endpoint_profile: self.endpoint_profile,
            empty_term_policy: self.empty_term_policy,
            default_search_term,
        }
    }

    pub fn effective_grid_columns(&self) -> usize {
        self.grid_columns
            .clamp(1, global_constants::MAX_GRID_COLUMNS)
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::CONFIG_DIRECTORY_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("gif-search-test-{}-{}", name, std::process::id()))
    }

    #[test]
    fn test_theme_mode_default_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn test_user_settings_default_values() {
        let settings = UserSettings::default();

        assert_eq!(settings.api_base_url, global_constants::GIPHY_API_BASE_URL);
        assert_eq!(settings.api_key, global_constants::GIPHY_API_KEY);
        assert_eq!(settings.result_limit, 25);
        assert_eq!(settings.rating, ContentRating::G);
        assert_eq!(settings.language, "en");
        assert_eq!(settings.endpoint_profile, EndpointProfile::Search);
        assert_eq!(settings.empty_term_policy, EmptyTermPolicy::FallbackToDefault);
        assert_eq!(settings.grid_columns, 4);
    }

    #[test]
    fn test_user_settings_deserialization_with_missing_fields_uses_defaults() {
        let json = r#"{
            "api_key": "abc123",
            "empty_term_policy": "reject"
        }"#;

        let settings: UserSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.api_key, "abc123");
        assert_eq!(settings.empty_term_policy, EmptyTermPolicy::Reject);
        assert_eq!(settings.result_limit, global_constants::DEFAULT_RESULT_LIMIT);
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn test_search_config_strips_trailing_slash_from_base_url() {
        let settings = UserSettings {
            api_base_url: "http://localhost:8080/".to_string(),
            ..UserSettings::default()
        };

        assert_eq!(settings.search_config().api_base_url, "http://localhost:8080");
    }

    #[test]
    fn test_search_config_replaces_blank_default_term() {
        let blank = UserSettings {
            default_search_term: "   ".to_string(),
            ..UserSettings::default()
        };
        let padded = UserSettings {
            default_search_term: "  cats ".to_string(),
            ..UserSettings::default()
        };

        assert_eq!(
            blank.search_config().default_search_term,
            global_constants::DEFAULT_SEARCH_TERM
        );
        assert_eq!(padded.search_config().default_search_term, "cats");
    }

    #[test]
    fn test_effective_grid_columns_is_clamped() {
        let zero = UserSettings {
            grid_columns: 0,
            ..UserSettings::default()
        };
        let huge = UserSettings {
            grid_columns: 50,
            ..UserSettings::default()
        };

        assert_eq!(zero.effective_grid_columns(), 1);
        assert_eq!(huge.effective_grid_columns(), global_constants::MAX_GRID_COLUMNS);
    }

    #[test]
    fn test_load_from_missing_file_writes_defaults() {
        let temp_dir = unique_temp_dir("missing");
        let settings_path = temp_dir.join("settings.json");
        std::fs::remove_dir_all(&temp_dir).ok();

        let loaded = UserSettings::load_from(&settings_path).unwrap();

        assert_eq!(loaded, UserSettings::default());
        assert!(settings_path.exists());

        std::fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_user_settings_save_and_load_roundtrip() {
        let temp_dir = unique_temp_dir("roundtrip");
        let settings_path = temp_dir.join("settings.json");

        let saved_settings = UserSettings {
            api_key: "roundtrip-key".to_string(),
            rating: ContentRating::Pg13,
            result_bundle: ResultBundle::LowBandwidth,
            endpoint_profile: EndpointProfile::SearchTags,
            theme_mode: ThemeMode::Light,
            ..UserSettings::default()
        };

        saved_settings.save_to(&settings_path).unwrap();
        let loaded_settings = UserSettings::load_from(&settings_path).unwrap();

        assert_eq!(loaded_settings, saved_settings);

        std::fs::remove_dir_all(&temp_dir).ok();
    }
}
