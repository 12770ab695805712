use serde::{Deserialize, Serialize};

mod appearance_config;
mod browser_config;
mod favicon_config;
mod search_config;
mod shortcuts_config;

pub use appearance_config::AppearanceConfig;
pub use browser_config::BrowserConfig;
pub use favicon_config::FaviconConfig;
pub use search_config::SearchConfig;
pub use shortcuts_config::ShortcutsConfig;

/// Global application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub shortcuts: ShortcutsConfig,
    pub favicon: FaviconConfig,
    pub browser: BrowserConfig,
    pub search: SearchConfig,
    pub appearance: AppearanceConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcuts::FullRailPolicy;
    use crate::theme::PaletteName;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        // Shortcut defaults
        assert_eq!(config.shortcuts.max_per_rail, 4);
        assert_eq!(config.shortcuts.full_rail_policy, FullRailPolicy::Reject);

        // Favicon defaults
        assert_eq!(
            config.favicon.service_url,
            favicon_config::DEFAULT_FAVICON_SERVICE_URL
        );
        assert_eq!(config.favicon.timeout_ms, 3000);
        assert_eq!(config.favicon.debounce_ms, 500);

        // Search defaults
        assert_eq!(config.search.action_url, "https://www.google.com/search");
        assert_eq!(config.search.query_param, "q");

        // Appearance defaults
        assert_eq!(config.appearance.palette, PaletteName::CoolBlue);
        assert_eq!(config.appearance.background_image, None);

        assert!(!config.browser.private_command.is_empty());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let json = r#"{
            "shortcuts": { "fullRailPolicy": "evictOldest" },
            "appearance": { "palette": "Warm Sunset", "backgroundImage": "https://example.com/bg.png" }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.shortcuts.max_per_rail, 4);
        assert_eq!(
            config.shortcuts.full_rail_policy,
            FullRailPolicy::EvictOldest
        );
        assert_eq!(config.appearance.palette, PaletteName::WarmSunset);
        assert_eq!(
            config.appearance.background_image.as_deref(),
            Some("https://example.com/bg.png")
        );
        assert_eq!(config.favicon, FaviconConfig::default());
    }

    #[test]
    fn test_capacity_is_at_least_one() {
        let config = ShortcutsConfig {
            max_per_rail: 0,
            full_rail_policy: FullRailPolicy::Reject,
        };
        assert_eq!(config.capacity(), 1);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = Config {
            shortcuts: ShortcutsConfig {
                max_per_rail: 6,
                full_rail_policy: FullRailPolicy::EvictOldest,
            },
            browser: BrowserConfig {
                private_command: "firefox".to_string(),
                private_args: vec!["--private-window".to_string()],
            },
            appearance: AppearanceConfig {
                palette: PaletteName::EarthTone,
                background_image: None,
                bento_image: Some("https://example.com/bento.png".to_string()),
            },
            ..Config::default()
        };

        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains(r#""maxPerRail": 6"#));
        assert!(json.contains(r#""palette": "Earth Tone""#));

        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
