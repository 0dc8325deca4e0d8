//! Page configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use voyage_navigation::NavOptions;
use voyage_tabs::TabOptions;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mobile navigation toggle
    pub navigation: NavOptions,
    /// Tabbed content switcher
    pub tabs: TabOptions,
}

impl Config {
    pub fn from_json(source: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_json(&source)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let selectors = [
            ("navigation.container_selector", &self.navigation.container_selector),
            ("navigation.toggle_selector", &self.navigation.toggle_selector),
            ("tabs.tablist_selector", &self.tabs.tablist_selector),
            ("tabs.tab_selector", &self.tabs.tab_selector),
            ("tabs.panel_selector", &self.tabs.panel_selector),
            ("tabs.image_selector", &self.tabs.image_selector),
        ];
        for (name, value) in selectors {
            if value.trim().is_empty() {
                return Err(CoreError::Config(format!("{} must not be empty", name)));
            }
        }

        if self.tabs.hidden_class.split_whitespace().count() != 1 {
            return Err(CoreError::Config(
                "tabs.hidden_class must be a single class name".to_string(),
            ));
        }

        Ok(())
    }
}
