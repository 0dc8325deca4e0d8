//! Voyage Tabs
//!
//! Single-selection tab group. Activating a tab reveals its panel and its
//! image and hides every other one; the left and right arrow keys move a
//! roving focus between tabs without changing the selection.

mod error;
mod map;
mod options;
mod switcher;

pub use error::TabError;
pub use map::{Association, TabEntry, TabMap, Unresolved};
pub use options::TabOptions;
pub use switcher::{TabSwitcher, HIDDEN_ATTR, SELECTED_ATTR, TABINDEX_ATTR};

pub type Result<T> = std::result::Result<T, TabError>;
