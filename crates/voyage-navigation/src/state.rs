//! Navigation visibility
//!
//! ```text
//! Closed --activate--> Open --activate--> Closed
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavState {
    Open,
    Closed,
}

impl NavState {
    /// Read the container's `data-visible` value. Only the exact string
    /// `"false"` means closed.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("false") => NavState::Closed,
            _ => NavState::Open,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, NavState::Open)
    }

    pub fn toggled(&self) -> Self {
        match self {
            NavState::Open => NavState::Closed,
            NavState::Closed => NavState::Open,
        }
    }

    /// Attribute form written to the page
    pub fn as_attribute(&self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NavState::Open => "open",
            NavState::Closed => "closed",
        }
    }
}

impl std::fmt::Display for NavState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
