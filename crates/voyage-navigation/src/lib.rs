//! Voyage Navigation
//!
//! Collapsible mobile navigation. A single toggle control opens and closes
//! the primary navigation container and swaps its own icon to match.

mod error;
mod options;
mod state;
mod toggle;

pub use error::NavigationError;
pub use options::{NavIcons, NavOptions};
pub use state::NavState;
pub use toggle::{NavToggle, EXPANDED_ATTR, ICON_PROPERTY, VISIBLE_ATTR};

pub type Result<T> = std::result::Result<T, NavigationError>;
