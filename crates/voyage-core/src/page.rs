//! Page wiring and event routing
//!
//! Each controller is wired on its own. If one cannot find its elements it
//! is left out and the other keeps working.

use serde::Serialize;

use voyage_dom::{Document, Event, Markup};
use voyage_navigation::NavToggle;
use voyage_tabs::TabSwitcher;

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

/// Observable controller state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageState {
    /// `None` when the navigation toggle is not wired
    pub nav_open: Option<bool>,
    pub selected_tab: Option<usize>,
    pub focused_tab: Option<usize>,
}

pub struct Page {
    document: Document,
    nav: Option<NavToggle>,
    tabs: Option<TabSwitcher>,
    wiring_errors: Vec<CoreError>,
}

impl Page {
    /// Parse `html` and wire both controllers.
    pub fn load(html: &str, config: &Config) -> Self {
        let markup = Markup::parse(html);
        let document = markup.to_document();
        let mut wiring_errors = Vec::new();

        let nav = match NavToggle::wire(&markup, &document, &config.navigation) {
            Ok(nav) => Some(nav),
            Err(e) => {
                tracing::error!(error = %e, "Navigation toggle not wired");
                wiring_errors.push(CoreError::from(e));
                None
            }
        };

        let tabs = match TabSwitcher::wire(&markup, &document, &config.tabs) {
            Ok(tabs) => Some(tabs),
            Err(e) => {
                tracing::error!(error = %e, "Tab switcher not wired");
                wiring_errors.push(CoreError::from(e));
                None
            }
        };

        Self {
            document,
            nav,
            tabs,
            wiring_errors,
        }
    }

    /// Like `load`, but any wiring failure is returned as an error.
    pub fn load_strict(html: &str, config: &Config) -> Result<Self> {
        let mut page = Self::load(html, config);
        if page.wiring_errors.is_empty() {
            Ok(page)
        } else {
            Err(page.wiring_errors.remove(0))
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn nav(&self) -> Option<&NavToggle> {
        self.nav.as_ref()
    }

    pub fn tabs(&self) -> Option<&TabSwitcher> {
        self.tabs.as_ref()
    }

    pub fn wiring_errors(&self) -> &[CoreError] {
        &self.wiring_errors
    }

    /// Route an input event to the controllers listening on its target.
    /// Returns whether any handler acted.
    pub fn dispatch(&mut self, event: &Event) -> Result<bool> {
        let mut handled = false;

        match event {
            Event::Click { target } => {
                if let Some(nav) = self.nav.as_mut() {
                    if nav.is_toggle_target(&self.document, *target) {
                        nav.on_toggle_activated(&mut self.document)?;
                        handled = true;
                    }
                }

                if let Some(tabs) = self.tabs.as_mut() {
                    let tab = tabs
                        .index_of(&self.document, *target)
                        .and_then(|index| tabs.tab_at(index));
                    if let Some(tab) = tab {
                        tabs.on_tab_activated(&mut self.document, tab)?;
                        handled = true;
                    }
                }
            }
            Event::KeyDown { target, key } => {
                if let Some(tabs) = self.tabs.as_mut() {
                    if tabs.is_tablist_target(&self.document, *target) {
                        handled = tabs.on_tab_list_keydown(&mut self.document, key)?.is_some();
                    }
                }
            }
        }

        if !handled {
            tracing::trace!(element = %event.target(), "Event had no listener");
        }

        Ok(handled)
    }

    pub fn state(&self) -> PageState {
        PageState {
            nav_open: self.nav.as_ref().map(NavToggle::is_open),
            selected_tab: self.tabs.as_ref().and_then(TabSwitcher::selected_index),
            focused_tab: self
                .tabs
                .as_ref()
                .filter(|t| !t.is_empty())
                .map(TabSwitcher::focus_index),
        }
    }
}
