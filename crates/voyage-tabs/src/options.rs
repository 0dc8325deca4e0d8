//! Tab group wiring options

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabOptions {
    pub tablist_selector: String,
    /// Matched inside the tab list
    pub tab_selector: String,
    /// Matched inside the tab list's parent
    pub panel_selector: String,
    /// Matched inside the tab list's parent
    pub image_selector: String,
    /// Class that hides an image
    pub hidden_class: String,
    /// Fail wiring when a tab's panel or image reference does not resolve
    pub strict_associations: bool,
}

impl Default for TabOptions {
    fn default() -> Self {
        Self {
            tablist_selector: r#"[role="tablist"]"#.to_string(),
            tab_selector: r#"[role="tab"]"#.to_string(),
            panel_selector: r#"[role="tabpanel"]"#.to_string(),
            image_selector: "picture".to_string(),
            hidden_class: "hidden".to_string(),
            strict_associations: false,
        }
    }
}
