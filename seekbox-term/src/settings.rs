//! User settings loaded from `settings.json`.

use std::fs;
use std::path::{Path, PathBuf};

use seekbox::{ScrollConfig, ScrollPolicy};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;

use crate::error::AppError;

/// Host settings. Every field falls back to its default when missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub placeholder: String,
    /// Height of the suggestion list in rows.
    pub viewport_rows: u16,
    /// Width of the input in columns.
    pub width: u16,
    pub scroll_policy: ScrollPolicy,
    pub log_level: String,
    pub options_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            placeholder: "Search".to_string(),
            viewport_rows: 6,
            width: 36,
            scroll_policy: ScrollPolicy::Nudge,
            log_level: "debug".to_string(),
            options_file: None,
        }
    }
}

impl Settings {
    /// Load settings from `path`, using defaults when there is no file.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let Some(path) = path.filter(|p| p.exists()) else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Log level, `debug` when the configured name is not recognized.
    pub fn level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Debug)
    }

    /// One terminal row per option.
    pub fn scroll_config(&self) -> Result<ScrollConfig, AppError> {
        Ok(ScrollConfig::new(u32::from(self.viewport_rows), 1)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = Settings::parse(r#"{ "width": 50 }"#).unwrap();
        assert_eq!(settings.width, 50);
        assert_eq!(settings.viewport_rows, 6);
        assert_eq!(settings.placeholder, "Search");
        assert_eq!(settings.scroll_policy, ScrollPolicy::Nudge);
    }

    #[test]
    fn test_scroll_policy_names() {
        let settings = Settings::parse(r#"{ "scroll_policy": "ensure_visible" }"#).unwrap();
        assert_eq!(settings.scroll_policy, ScrollPolicy::EnsureVisible);
        assert!(Settings::parse(r#"{ "scroll_policy": "smooth" }"#).is_err());
    }

    #[test]
    fn test_level_parsing() {
        let mut settings = Settings::default();
        settings.log_level = "warn".to_string();
        assert_eq!(settings.level(), LevelFilter::Warn);
        settings.log_level = "loud".to_string();
        assert_eq!(settings.level(), LevelFilter::Debug);
    }

    #[test]
    fn test_zero_rows_rejected() {
        let settings = Settings {
            viewport_rows: 0,
            ..Settings::default()
        };
        assert!(matches!(
            settings.scroll_config(),
            Err(AppError::Widget(seekbox::Error::ZeroViewportHeight))
        ));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load(Some(Path::new("/nonexistent/settings.json"))).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(Settings::load(None).unwrap(), Settings::default());
    }
}
