//! Mobile navigation toggle

use voyage_dom::{Document, ElementId, Markup};

use crate::error::NavigationError;
use crate::options::{NavIcons, NavOptions};
use crate::state::NavState;
use crate::Result;

/// Visibility flag on the navigation container
pub const VISIBLE_ATTR: &str = "data-visible";
/// Expanded flag mirrored on the toggle control
pub const EXPANDED_ATTR: &str = "aria-expanded";
/// Inline style property carrying the icon
pub const ICON_PROPERTY: &str = "background-image";

#[derive(Debug, Clone)]
pub struct NavToggle {
    container: ElementId,
    toggle: ElementId,
    icons: NavIcons,
    open: bool,
}

impl NavToggle {
    /// Resolve the container and toggle control from page markup.
    pub fn wire(markup: &Markup, document: &Document, options: &NavOptions) -> Result<Self> {
        let container = markup
            .select_one(&options.container_selector)?
            .ok_or_else(|| NavigationError::MissingElement(options.container_selector.clone()))?;
        let toggle = markup
            .select_one(&options.toggle_selector)?
            .ok_or_else(|| NavigationError::MissingElement(options.toggle_selector.clone()))?;

        let nav = Self::new(document, container, toggle, options.icons.clone());
        tracing::info!(
            container = %container,
            toggle = %toggle,
            state = %nav.state(),
            "Navigation toggle wired"
        );
        Ok(nav)
    }

    /// Build from known handles; the initial state is read from the
    /// container's visibility flag.
    pub fn new(
        document: &Document,
        container: ElementId,
        toggle: ElementId,
        icons: NavIcons,
    ) -> Self {
        let state = NavState::from_attribute(document.attribute(container, VISIBLE_ATTR));

        Self {
            container,
            toggle,
            icons,
            open: state.is_open(),
        }
    }

    pub fn state(&self) -> NavState {
        if self.open {
            NavState::Open
        } else {
            NavState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn container(&self) -> ElementId {
        self.container
    }

    pub fn toggle(&self) -> ElementId {
        self.toggle
    }

    /// True when `target` is the toggle control or sits inside it.
    pub fn is_toggle_target(&self, document: &Document, target: ElementId) -> bool {
        document.contains(self.toggle, target)
    }

    /// Flip the navigation and sync the toggle's expanded flag and icon.
    /// The current state is read off the container, so a flag written by
    /// the host since the last activation is honoured.
    pub fn on_toggle_activated(&mut self, document: &mut Document) -> Result<NavState> {
        let current = NavState::from_attribute(document.attribute(self.container, VISIBLE_ATTR));
        if current.is_open() != self.open {
            tracing::debug!(cached = %self.state(), found = %current, "Navigation flag changed externally");
        }

        let next = current.toggled();
        let flag = next.as_attribute();

        document.set_attribute(self.container, VISIBLE_ATTR, flag)?;
        document.set_attribute(self.toggle, EXPANDED_ATTR, flag)?;
        document.set_style(
            self.toggle,
            ICON_PROPERTY,
            format!("url('{}')", self.icons.for_state(next.is_open())),
        )?;

        tracing::debug!(from = %current, to = %next, "Navigation toggled");
        self.open = next.is_open();

        Ok(next)
    }
}
