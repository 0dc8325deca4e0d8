//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Required element not found: {0}")]
    MissingElement(String),

    #[error("DOM error: {0}")]
    Dom(#[from] voyage_dom::DomError),
}
