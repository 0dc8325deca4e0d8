//! Element tree
//!
//! Elements are stored in a flat arena and addressed by `ElementId`.
//! Nothing is ever removed, so a handle stays valid for the life of the
//! document.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::DomError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(usize);

impl ElementId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Element {
    /// Lowercase tag name
    pub tag: String,
    /// Attributes other than `class` and `style`
    pub attributes: BTreeMap<String, String>,
    /// Class list in markup order
    pub classes: Vec<String>,
    /// Inline style declarations
    pub styles: BTreeMap<String, String>,
    pub parent: Option<ElementId>,
    pub children: Vec<ElementId>,
}

impl Element {
    fn new(tag: &str, parent: Option<ElementId>) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: BTreeMap::new(),
            classes: Vec::new(),
            styles: BTreeMap::new(),
            parent,
            children: Vec::new(),
        }
    }

    /// Value of the `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.attributes.get("id").map(String::as_str)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Document {
    elements: Vec<Element>,
    focused: Option<ElementId>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Append a new element under `parent` (or as a detached root).
    pub fn create_element(&mut self, tag: &str, parent: Option<ElementId>) -> Result<ElementId> {
        if let Some(parent) = parent {
            self.ensure(parent)?;
        }
        Ok(self.push_element(tag, parent))
    }

    /// Append without failing; an unknown parent leaves the element detached.
    pub(crate) fn push_element(&mut self, tag: &str, parent: Option<ElementId>) -> ElementId {
        let parent = parent.filter(|p| p.0 < self.elements.len());
        let id = ElementId(self.elements.len());
        self.elements.push(Element::new(tag, parent));
        if let Some(parent) = parent {
            self.elements[parent.0].children.push(id);
        }
        id
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    pub(crate) fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0)
    }

    fn get_mut(&mut self, id: ElementId) -> Result<&mut Element> {
        self.elements
            .get_mut(id.0)
            .ok_or(DomError::UnknownElement(id.0))
    }

    fn ensure(&self, id: ElementId) -> Result<()> {
        if id.0 < self.elements.len() {
            Ok(())
        } else {
            Err(DomError::UnknownElement(id.0))
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = ElementId> {
        (0..self.elements.len()).map(ElementId)
    }

    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.get(id).and_then(|el| el.attribute(name))
    }

    pub fn has_attribute(&self, id: ElementId, name: &str) -> bool {
        self.attribute(id, name).is_some()
    }

    /// Set an attribute. Writing `class` replaces the class list.
    pub fn set_attribute(
        &mut self,
        id: ElementId,
        name: &str,
        value: impl Into<String>,
    ) -> Result<()> {
        let el = self.get_mut(id)?;
        let value = value.into();

        if name == "class" {
            el.classes = value.split_whitespace().map(str::to_string).collect();
        } else {
            el.attributes.insert(name.to_string(), value);
        }

        Ok(())
    }

    pub fn remove_attribute(&mut self, id: ElementId, name: &str) -> Result<()> {
        let el = self.get_mut(id)?;
        if name == "class" {
            el.classes.clear();
        } else {
            el.attributes.remove(name);
        }
        Ok(())
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.get(id).is_some_and(|el| el.has_class(class))
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) -> Result<()> {
        let el = self.get_mut(id)?;
        if !el.has_class(class) {
            el.classes.push(class.to_string());
        }
        Ok(())
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) -> Result<()> {
        let el = self.get_mut(id)?;
        el.classes.retain(|c| c != class);
        Ok(())
    }

    pub fn style(&self, id: ElementId, property: &str) -> Option<&str> {
        self.get(id)
            .and_then(|el| el.styles.get(property))
            .map(String::as_str)
    }

    pub fn set_style(
        &mut self,
        id: ElementId,
        property: &str,
        value: impl Into<String>,
    ) -> Result<()> {
        let el = self.get_mut(id)?;
        el.styles.insert(property.to_string(), value.into());
        Ok(())
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.get(id).and_then(|el| el.parent)
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.get(id).map(|el| el.children.as_slice()).unwrap_or(&[])
    }

    /// All descendants of `id` in document order, excluding `id` itself.
    pub fn descendants(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack: Vec<ElementId> = self.children(id).iter().rev().copied().collect();

        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev());
        }

        out
    }

    /// Inclusive containment: a node contains itself.
    pub fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// First descendant of `scope` whose `id` attribute equals `element_id`.
    pub fn find_by_id(&self, scope: ElementId, element_id: &str) -> Option<ElementId> {
        self.descendants(scope)
            .into_iter()
            .find(|&id| self.get(id).and_then(Element::id) == Some(element_id))
    }

    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    pub fn focus(&mut self, id: ElementId) -> Result<()> {
        self.ensure(id)?;
        tracing::trace!(element = %id, "Focus moved");
        self.focused = Some(id);
        Ok(())
    }
}
