//! Navigation wiring options

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavOptions {
    /// Selector for the navigation container
    pub container_selector: String,
    /// Selector for the toggle control
    pub toggle_selector: String,
    pub icons: NavIcons,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            container_selector: ".primary-navigation".to_string(),
            toggle_selector: ".mobile-nav-toggle".to_string(),
            icons: NavIcons::default(),
        }
    }
}

/// Asset references shown on the toggle control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavIcons {
    /// Shown while the navigation is open
    pub close: String,
    /// Shown while the navigation is closed
    pub hamburger: String,
}

impl NavIcons {
    pub fn for_state(&self, open: bool) -> &str {
        if open {
            &self.close
        } else {
            &self.hamburger
        }
    }
}

impl Default for NavIcons {
    fn default() -> Self {
        Self {
            close: "./assets/shared/icon-close.svg".to_string(),
            hamburger: "./assets/shared/icon-hamburger.svg".to_string(),
        }
    }
}
