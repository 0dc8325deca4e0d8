//! Tab switcher controller

use voyage_dom::{Document, ElementId, Key, Markup};

use crate::error::TabError;
use crate::map::{Association, TabMap};
use crate::options::TabOptions;
use crate::Result;

/// Selection flag on each tab
pub const SELECTED_ATTR: &str = "aria-selected";
/// Roving focus order on each tab
pub const TABINDEX_ATTR: &str = "tabindex";
/// Hidden flag on each panel
pub const HIDDEN_ATTR: &str = "hidden";

#[derive(Debug, Clone)]
pub struct TabSwitcher {
    tablist: ElementId,
    map: TabMap,
    hidden_class: String,
    /// Index of the tab holding the roving focus
    focus: usize,
    selected: Option<usize>,
}

impl TabSwitcher {
    /// Resolve the tab list, its tabs, and the panels and images that live
    /// next to it.
    pub fn wire(markup: &Markup, document: &Document, options: &TabOptions) -> Result<Self> {
        let tablist = markup
            .select_one(&options.tablist_selector)?
            .ok_or_else(|| TabError::MissingElement(options.tablist_selector.clone()))?;
        let tabs = markup.select_within(document, tablist, &options.tab_selector)?;

        let content = document.parent(tablist).unwrap_or(tablist);
        let panels = markup.select_within(document, content, &options.panel_selector)?;
        let images = markup.select_within(document, content, &options.image_selector)?;

        let map = TabMap::resolve(document, content, &tabs, panels, images);

        for missing in map.unresolved() {
            let attribute = missing.association.attribute();
            let reference = missing.reference.unwrap_or_default();
            if options.strict_associations {
                return Err(TabError::UnresolvedAssociation {
                    index: missing.index,
                    attribute,
                    reference,
                });
            }
            tracing::warn!(
                tab = missing.index,
                attribute,
                reference = %reference,
                "Tab reference does not resolve; it will stay hidden when selected"
            );
        }

        let switcher = Self::new(document, tablist, map, &options.hidden_class);
        tracing::info!(
            tablist = %tablist,
            tabs = switcher.len(),
            selected = ?switcher.selected_index(),
            "Tab switcher wired"
        );
        Ok(switcher)
    }

    /// Build over a prepared map. The selection is read from the tabs'
    /// selected flags; focus starts on the first tab.
    pub fn new(document: &Document, tablist: ElementId, map: TabMap, hidden_class: &str) -> Self {
        let selected = map
            .entries()
            .iter()
            .position(|e| document.attribute(e.tab, SELECTED_ATTR) == Some("true"));

        Self {
            tablist,
            map,
            hidden_class: hidden_class.to_string(),
            focus: 0,
            selected,
        }
    }

    pub fn tablist(&self) -> ElementId {
        self.tablist
    }

    pub fn map(&self) -> &TabMap {
        &self.map
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn tab_at(&self, index: usize) -> Option<ElementId> {
        self.map.get(index).map(|e| e.tab)
    }

    /// Index of the tab that is, or contains, `target`.
    pub fn index_of(&self, document: &Document, target: ElementId) -> Option<usize> {
        self.map
            .entries()
            .iter()
            .position(|e| document.contains(e.tab, target))
    }

    pub fn is_tablist_target(&self, document: &Document, target: ElementId) -> bool {
        document.contains(self.tablist, target)
    }

    /// Move the roving focus one tab left or right, wrapping at both ends.
    /// Selection is untouched. Returns the new focus index, or `None` when
    /// the key is ignored or the group has no tabs.
    pub fn on_tab_list_keydown(
        &mut self,
        document: &mut Document,
        key: &Key,
    ) -> Result<Option<usize>> {
        let len = self.map.len();
        if len == 0 || !key.is_horizontal_arrow() {
            return Ok(None);
        }

        if let Some(current) = self.tab_at(self.focus) {
            document.set_attribute(current, TABINDEX_ATTR, "-1")?;
        }

        let from = self.focus;
        self.focus = match key {
            Key::ArrowRight => (self.focus + 1) % len,
            _ => (self.focus + len - 1) % len,
        };

        if let Some(next) = self.tab_at(self.focus) {
            document.set_attribute(next, TABINDEX_ATTR, "0")?;
            document.focus(next)?;
        }

        tracing::debug!(from, to = self.focus, "Tab focus moved");
        Ok(Some(self.focus))
    }

    /// Select `tab` and reveal only its panel and image.
    pub fn on_tab_activated(&mut self, document: &mut Document, tab: ElementId) -> Result<usize> {
        let index = self.map.index_of(tab).ok_or(TabError::UnknownTab(tab))?;

        for entry in self.map.entries() {
            if entry.tab != tab && document.attribute(entry.tab, SELECTED_ATTR) == Some("true") {
                document.set_attribute(entry.tab, SELECTED_ATTR, "false")?;
            }
        }
        document.set_attribute(tab, SELECTED_ATTR, "true")?;

        for &panel in self.map.panels() {
            document.set_attribute(panel, HIDDEN_ATTR, "true")?;
        }
        for &image in self.map.images() {
            document.add_class(image, &self.hidden_class)?;
        }

        let entry = &self.map.entries()[index];
        match entry.panel {
            Some(panel) => document.remove_attribute(panel, HIDDEN_ATTR)?,
            None => self.warn_unresolved(index, Association::Panel),
        }
        match entry.image {
            Some(image) => document.remove_class(image, &self.hidden_class)?,
            None => self.warn_unresolved(index, Association::Image),
        }

        tracing::debug!(from = ?self.selected, to = index, "Tab selected");
        self.selected = Some(index);

        Ok(index)
    }

    fn warn_unresolved(&self, index: usize, association: Association) {
        tracing::warn!(
            tab = index,
            attribute = association.attribute(),
            "Selected tab has no resolvable target; nothing shown"
        );
    }
}
