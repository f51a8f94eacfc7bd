//! A flat, in-memory document: just enough of the DOM for the page scripts.
use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Stable handle to an element of a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub usize);

/// An element with a tag, attributes and a class list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            attributes: BTreeMap::new(),
            classes: Vec::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder-style class list; `classes` is split on whitespace like a `class` attribute.
    pub fn with_classes(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            if !self.has_class(class) {
                self.classes.push(class.to_owned());
            }
        }
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

/// Elements in document order.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element and return its handle.
    pub fn push(&mut self, element: Element) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: ElementId) -> Result<&Element> {
        self.elements.get(id.0).ok_or(Error::UnknownElement(id))
    }

    pub fn get_mut(&mut self, id: ElementId) -> Result<&mut Element> {
        self.elements.get_mut(id.0).ok_or(Error::UnknownElement(id))
    }

    /// Iterate all elements with their handles in document order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        self.elements
            .iter()
            .enumerate()
            .map(|(i, e)| (ElementId(i), e))
    }

    pub fn elements_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = ElementId> + 'a {
        self.iter()
            .filter(move |(_, e)| e.tag.eq_ignore_ascii_case(tag))
            .map(|(id, _)| id)
    }

    pub fn elements_by_class<'a>(
        &'a self,
        class: &'a str,
    ) -> impl Iterator<Item = ElementId> + 'a {
        self.iter()
            .filter(move |(_, e)| e.has_class(class))
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_returns_sequential_ids() {
        let mut doc = Document::new();
        let a = doc.push(Element::new("A"));
        let b = doc.push(Element::new("iframe"));
        assert_eq!((a, b), (ElementId(0), ElementId(1)));
        assert_eq!(doc.get(a).unwrap().tag, "a");
    }

    #[test]
    fn unknown_ids_are_errors() {
        let mut doc = Document::new();
        assert!(matches!(
            doc.get_mut(ElementId(4)),
            Err(Error::UnknownElement(ElementId(4)))
        ));
    }

    #[test]
    fn queries_by_tag_and_class() {
        let mut doc = Document::new();
        doc.push(Element::new("div").with_classes("image-row image-row-cats"));
        let link = doc.push(Element::new("a").with_attr("href", "/about"));
        doc.push(Element::new("div").with_classes("note"));

        assert_eq!(doc.elements_by_tag("A").collect::<Vec<_>>(), vec![link]);
        assert_eq!(doc.elements_by_class("image-row").count(), 1);
        assert_eq!(doc.get(link).unwrap().attribute("href"), Some("/about"));
    }

    #[test]
    fn duplicate_classes_are_collapsed() {
        let e = Element::new("div").with_classes("x  y x");
        assert_eq!(e.classes(), &["x".to_string(), "y".to_string()]);
    }
}
