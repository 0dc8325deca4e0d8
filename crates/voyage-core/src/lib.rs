//! Voyage Core
//!
//! Page-level coordination: loads markup, wires the navigation toggle and
//! the tab switcher independently, and routes input events to them.

mod config;
mod error;
mod page;

pub use config::Config;
pub use error::CoreError;
pub use page::{Page, PageState};

// Re-export component crates
pub use voyage_dom::{Document, DomError, Element, ElementId, Event, Key, Markup};
pub use voyage_navigation::{NavIcons, NavOptions, NavState, NavToggle, NavigationError};
pub use voyage_tabs::{TabError, TabMap, TabOptions, TabSwitcher};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
