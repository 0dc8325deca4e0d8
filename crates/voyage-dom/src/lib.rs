//! Voyage DOM
//!
//! A headless element tree that page controllers read and write.
//! Markup is parsed once with `scraper`; selector queries only run while
//! controllers are being wired, after that everything goes through
//! explicit `ElementId` handles.

mod document;
mod error;
mod event;
mod markup;

pub use document::{Document, Element, ElementId};
pub use error::DomError;
pub use event::{Event, Key};
pub use markup::Markup;

pub type Result<T> = std::result::Result<T, DomError>;
