//! Tab associations
//!
//! Each tab names the panel it controls (`aria-controls`) and the image it
//! shows (`data-image`). The references are resolved once, inside the
//! content container that holds the tab list, and kept as element handles.

use serde::Serialize;
use voyage_dom::{Document, ElementId};

/// Panel reference attribute on a tab
pub const PANEL_REF_ATTR: &str = "aria-controls";
/// Image reference attribute on a tab
pub const IMAGE_REF_ATTR: &str = "data-image";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Association {
    Panel,
    Image,
}

impl Association {
    pub fn attribute(&self) -> &'static str {
        match self {
            Association::Panel => PANEL_REF_ATTR,
            Association::Image => IMAGE_REF_ATTR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabEntry {
    pub tab: ElementId,
    pub panel: Option<ElementId>,
    pub image: Option<ElementId>,
    /// Raw panel reference as written on the tab
    pub panel_ref: Option<String>,
    /// Raw image reference as written on the tab
    pub image_ref: Option<String>,
}

impl TabEntry {
    pub fn new(tab: ElementId, panel: Option<ElementId>, image: Option<ElementId>) -> Self {
        Self {
            tab,
            panel,
            image,
            panel_ref: None,
            image_ref: None,
        }
    }

    pub fn target(&self, association: Association) -> Option<ElementId> {
        match association {
            Association::Panel => self.panel,
            Association::Image => self.image,
        }
    }

    fn reference(&self, association: Association) -> Option<&str> {
        match association {
            Association::Panel => self.panel_ref.as_deref(),
            Association::Image => self.image_ref.as_deref(),
        }
    }
}

/// A tab whose panel or image could not be found
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unresolved {
    pub index: usize,
    pub association: Association,
    pub reference: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TabMap {
    entries: Vec<TabEntry>,
    panels: Vec<ElementId>,
    images: Vec<ElementId>,
}

impl TabMap {
    /// Empty map over the given panel and image sets.
    pub fn new(panels: Vec<ElementId>, images: Vec<ElementId>) -> Self {
        Self {
            entries: Vec::new(),
            panels,
            images,
        }
    }

    /// Resolve every tab's references inside `content`.
    pub fn resolve(
        document: &Document,
        content: ElementId,
        tabs: &[ElementId],
        panels: Vec<ElementId>,
        images: Vec<ElementId>,
    ) -> Self {
        let mut map = Self::new(panels, images);

        for &tab in tabs {
            let panel_ref = document.attribute(tab, PANEL_REF_ATTR).map(str::to_string);
            let image_ref = document.attribute(tab, IMAGE_REF_ATTR).map(str::to_string);

            let lookup = |reference: &Option<String>| {
                reference
                    .as_deref()
                    .and_then(|r| document.find_by_id(content, r))
            };

            map.push(TabEntry {
                tab,
                panel: lookup(&panel_ref),
                image: lookup(&image_ref),
                panel_ref,
                image_ref,
            });
        }

        map
    }

    pub fn push(&mut self, entry: TabEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TabEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[TabEntry] {
        &self.entries
    }

    pub fn panels(&self) -> &[ElementId] {
        &self.panels
    }

    pub fn images(&self) -> &[ElementId] {
        &self.images
    }

    /// Position of `tab` in the group
    pub fn index_of(&self, tab: ElementId) -> Option<usize> {
        self.entries.iter().position(|e| e.tab == tab)
    }

    /// Every panel or image reference that did not resolve, in tab order.
    pub fn unresolved(&self) -> Vec<Unresolved> {
        let mut out = Vec::new();
        for (index, entry) in self.entries.iter().enumerate() {
            for association in [Association::Panel, Association::Image] {
                if entry.target(association).is_none() {
                    out.push(Unresolved {
                        index,
                        association,
                        reference: entry.reference(association).map(str::to_string),
                    });
                }
            }
        }
        out
    }
}
