use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::common::constants::{DEFAULT_CONTAINER, DEFAULT_POST_COUNT, TUMBLR_ENDPOINT};
use crate::common::time_utils::DateStyle;
use crate::post_renderer::{PostRenderer, TemplateSet};

fn default_count() -> u32 {
    DEFAULT_POST_COUNT
}

fn default_container() -> String {
    DEFAULT_CONTAINER.to_string()
}

fn default_endpoint() -> String {
    TUMBLR_ENDPOINT.to_string()
}

/// What to read from one blog and where to put it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReaderOptions {
    pub blog: String,
    #[serde(default = "default_container")]
    pub container: String,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub tagged: String,
}

impl ReaderOptions {
    pub fn new(blog: impl Into<String>) -> Self {
        Self {
            blog: blog.into(),
            container: default_container(),
            count: DEFAULT_POST_COUNT,
            tagged: String::new(),
        }
    }

    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container = container.into();
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn with_tagged(mut self, tagged: impl Into<String>) -> Self {
        self.tagged = tagged.into();
        self
    }
}

/// Contents of `settings.json`. Every field is optional.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct Settings {
    pub endpoint: String,
    pub container: String,
    pub count: u32,
    pub tagged: String,
    pub fix_day_of_month: bool,
    pub full_page: bool,
    pub output: String,
    pub templates: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            container: default_container(),
            count: DEFAULT_POST_COUNT,
            tagged: String::new(),
            fix_day_of_month: false,
            full_page: false,
            output: String::new(),
            templates: HashMap::new(),
        }
    }
}

impl Settings {
    pub fn load(settings_file: &str) -> Result<Self> {
        let path = Path::new(settings_file);
        if !path.exists() {
            return Err(anyhow::anyhow!(
                "settings file not found at '{}'",
                settings_file
            ));
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", settings_file))?;

        let settings: Settings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file: {}", settings_file))?;

        info!("Settings loaded from '{}'.", settings_file);
        Ok(settings)
    }

    /// Like [`Settings::load`], but a missing file means defaults.
    pub fn load_or_default(settings_file: &str) -> Result<Self> {
        if Path::new(settings_file).exists() {
            Self::load(settings_file)
        } else {
            debug!(
                "No settings file at '{}', using defaults",
                settings_file
            );
            Ok(Self::default())
        }
    }

    pub fn date_style(&self) -> DateStyle {
        if self.fix_day_of_month {
            DateStyle::DayOfMonth
        } else {
            DateStyle::Weekday
        }
    }

    pub fn renderer(&self) -> PostRenderer {
        PostRenderer::new(TemplateSet::with_overrides(&self.templates), self.date_style())
    }

    /// Options for `blog` using the configured defaults.
    pub fn options_for(&self, blog: &str) -> ReaderOptions {
        ReaderOptions::new(blog)
            .with_container(self.container.clone())
            .with_count(self.count)
            .with_tagged(self.tagged.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_settings_load_valid() {
        let json_content = r##"{
            "container": "#posts",
            "count": 5,
            "tagged": "rust",
            "fix_day_of_month": true,
            "templates": {
                "quote": "<q>${quote}</q>"
            }
        }"##;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(json_content.as_bytes()).unwrap();
        let temp_path = temp_file.path().to_str().unwrap();

        let settings = Settings::load(temp_path).unwrap();
        assert_eq!(settings.container, "#posts");
        assert_eq!(settings.count, 5);
        assert_eq!(settings.tagged, "rust");
        assert_eq!(settings.endpoint, TUMBLR_ENDPOINT);
        assert_eq!(settings.date_style(), DateStyle::DayOfMonth);
        assert!(!settings.full_page);
        assert_eq!(settings.templates["quote"], "<q>${quote}</q>");
    }

    #[test]
    fn test_settings_load_missing_file() {
        let result = Settings::load("nonexistent_file.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_load_or_default_missing_file() {
        let settings = Settings::load_or_default("nonexistent_file.json").unwrap();
        assert_eq!(settings.count, 10);
        assert_eq!(settings.container, "body");
        assert_eq!(settings.date_style(), DateStyle::Weekday);
    }

    #[test]
    fn test_settings_load_malformed() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"{ not json").unwrap();
        let temp_path = temp_file.path().to_str().unwrap();

        assert!(Settings::load_or_default(temp_path).is_err());
    }

    #[test]
    fn test_reader_options_defaults() {
        let options = ReaderOptions::new("staff");
        assert_eq!(options.blog, "staff");
        assert_eq!(options.container, "body");
        assert_eq!(options.count, 10);
        assert_eq!(options.tagged, "");
    }

    #[test]
    fn test_reader_options_from_json() {
        let options: ReaderOptions =
            serde_json::from_str(r#"{"blog": "staff", "tagged": "news"}"#).unwrap();
        assert_eq!(options, ReaderOptions::new("staff").with_tagged("news"));
    }

    #[test]
    fn test_options_for_uses_settings_defaults() {
        let settings = Settings {
            container: "#feed".to_string(),
            count: 3,
            ..Settings::default()
        };
        let options = settings.options_for("staff");
        assert_eq!(options.container, "#feed");
        assert_eq!(options.count, 3);
    }
}
