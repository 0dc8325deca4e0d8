//! DOM error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomError {
    #[error("Invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Unknown element: {0}")]
    UnknownElement(usize),
}
