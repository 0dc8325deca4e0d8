//! Markup loading
//!
//! Parses page markup with `scraper` and mirrors its elements into a
//! `Document`. Document building and selector matching share one walk of
//! the parsed tree, so the n-th element of that walk is `ElementId` n on
//! both sides. Template contents are not part of the walk, the same as
//! `querySelectorAll` never sees them.

use scraper::{ElementRef, Html, Selector};

use crate::document::{Document, ElementId};
use crate::error::DomError;
use crate::Result;

pub struct Markup {
    html: Html,
}

impl Markup {
    pub fn parse(source: &str) -> Self {
        let html = Html::parse_document(source);
        if !html.errors.is_empty() {
            tracing::debug!(errors = html.errors.len(), "Markup parsed with recoverable errors");
        }
        Self { html }
    }

    /// Elements in document order, each paired with its parent's position
    /// in the same sequence. Only element children are followed, which
    /// leaves out the fragment holding a `<template>`'s content.
    fn walk(&self) -> Vec<(ElementRef<'_>, Option<usize>)> {
        let mut out = Vec::new();
        let mut stack: Vec<(ElementRef<'_>, Option<usize>)> = self
            .html
            .tree
            .root()
            .children()
            .filter_map(ElementRef::wrap)
            .map(|el| (el, None))
            .collect();
        stack.reverse();

        while let Some((el, parent)) = stack.pop() {
            let position = out.len();
            out.push((el, parent));

            let children: Vec<_> = el.children().filter_map(ElementRef::wrap).collect();
            stack.extend(children.into_iter().rev().map(|child| (child, Some(position))));
        }

        out
    }

    /// Build the mutable element tree for this markup.
    pub fn to_document(&self) -> Document {
        let mut doc = Document::new();

        for (position, (source, parent)) in self.walk().into_iter().enumerate() {
            let id = doc.push_element(source.value().name(), parent.map(ElementId::from_index));
            debug_assert_eq!(id.index(), position);
            copy_attributes(&mut doc, id, source);
        }

        tracing::debug!(elements = doc.len(), "Document built from markup");
        doc
    }

    /// Every element matching `selector`, in document order.
    pub fn select_all(&self, selector: &str) -> Result<Vec<ElementId>> {
        let selector = parse_selector(selector)?;

        Ok(self
            .walk()
            .iter()
            .enumerate()
            .filter(|(_, (el, _))| selector.matches(el))
            .map(|(position, _)| ElementId::from_index(position))
            .collect())
    }

    /// First element matching `selector`.
    pub fn select_one(&self, selector: &str) -> Result<Option<ElementId>> {
        Ok(self.select_all(selector)?.into_iter().next())
    }

    /// Matches strictly inside `scope`, as `scope.querySelectorAll` would see them.
    pub fn select_within(
        &self,
        document: &Document,
        scope: ElementId,
        selector: &str,
    ) -> Result<Vec<ElementId>> {
        Ok(self
            .select_all(selector)?
            .into_iter()
            .filter(|&id| id != scope && document.contains(scope, id))
            .collect())
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| DomError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

fn copy_attributes(doc: &mut Document, id: ElementId, source: ElementRef<'_>) {
    let Some(el) = doc.element_mut(id) else {
        return;
    };

    for (name, attr) in source.value().attrs() {
        match name {
            "class" => {
                el.classes = attr.split_whitespace().map(str::to_string).collect();
            }
            "style" => {
                for (property, decl) in parse_style(attr) {
                    el.styles.insert(property, decl);
                }
            }
            _ => {
                el.attributes.insert(name.to_string(), attr.to_string());
            }
        }
    }
}

fn parse_style(source: &str) -> Vec<(String, String)> {
    source
        .split(';')
        .filter_map(|decl| {
            let (property, value) = decl.split_once(':')?;
            let property = property.trim().to_ascii_lowercase();
            let value = value.trim();
            if property.is_empty() || value.is_empty() {
                None
            } else {
                Some((property, value.to_string()))
            }
        })
        .collect()
}
