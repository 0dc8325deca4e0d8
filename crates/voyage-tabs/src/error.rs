//! Tab error types

use thiserror::Error;
use voyage_dom::ElementId;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Required element not found: {0}")]
    MissingElement(String),

    #[error("Element {0} is not a tab in this group")]
    UnknownTab(ElementId),

    #[error("Tab {index} has {attribute}=\"{reference}\" which does not resolve")]
    UnresolvedAssociation {
        index: usize,
        attribute: &'static str,
        reference: String,
    },

    #[error("DOM error: {0}")]
    Dom(#[from] voyage_dom::DomError),
}
