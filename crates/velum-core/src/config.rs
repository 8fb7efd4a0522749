//! Shell configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use velum_view::QuickLink;

use crate::{CoreError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the external rendering service; every remote load goes
    /// through `<base>?url=<target>`
    pub rendering_service: String,
    /// Search engine URL template (%s replaced with the encoded query)
    pub search_engine: String,
    /// Address field placeholder for start-page tabs
    pub start_page_placeholder: String,
    /// Address field placeholder for loaded tabs
    pub loaded_placeholder: String,
    /// Delay before the loading indicator is dismissed
    pub loading_delay_ms: u64,
    /// Shortcut tiles shown on the start page
    pub quick_links: Vec<QuickLink>,
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;

        if config.rendering_service.trim().is_empty() {
            return Err(CoreError::Config(
                "rendering_service cannot be empty".to_string(),
            ));
        }
        if !config.search_engine.contains("%s") {
            return Err(CoreError::Config(
                "search_engine template must contain %s".to_string(),
            ));
        }

        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        let quick_link = |title: &str, description: &str, url: &str| QuickLink {
            title: title.to_string(),
            description: description.to_string(),
            url: url.to_string(),
        };

        Self {
            rendering_service: "https://etherealproxy.netlify.app/".to_string(),
            search_engine: "https://google.com/search?q=%s".to_string(),
            start_page_placeholder: "Search or enter website name".to_string(),
            loaded_placeholder: "Enter website URL".to_string(),
            loading_delay_ms: 1000,
            quick_links: vec![
                quick_link("Google", "Search", "https://google.com"),
                quick_link("YouTube", "Videos", "https://youtube.com"),
                quick_link("GitHub", "Code", "https://github.com"),
                quick_link("Wikipedia", "Encyclopedia", "https://wikipedia.org"),
                quick_link("Reddit", "Community", "https://reddit.com"),
                quick_link("Discord", "Chat", "https://discord.com"),
            ],
        }
    }
}
