//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("DOM error: {0}")]
    Dom(#[from] voyage_dom::DomError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] voyage_navigation::NavigationError),

    #[error("Tab error: {0}")]
    Tab(#[from] voyage_tabs::TabError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
