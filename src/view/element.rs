//! Element Tree
//!
//! A minimal HTML element builder. The projection functions in `render`
//! produce these trees; the CLI prints them as markup and tests query them
//! the way a browser test would query the DOM.

use std::fmt;

/// A node in the element tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An HTML element with ordered attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder method: set an attribute, replacing any previous value
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Builder method: set the `class` attribute
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Builder method: set a `data-*` attribute
    pub fn data(self, key: &str, value: impl Into<String>) -> Self {
        self.attr(format!("data-{}", key), value)
    }

    /// Builder method: append a child element
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Builder method: append child elements
    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    /// Builder method: append a text node
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check the space-separated `class` attribute for a class name
    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Direct child elements, skipping text nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// All descendant elements in document order, excluding `self`
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        for child in self.child_elements() {
            out.push(child);
            out.extend(child.descendants());
        }
        out
    }

    /// Descendants carrying `class`
    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|e| e.has_class(class))
            .collect()
    }

    /// First descendant (or self) carrying `class`
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        if self.has_class(class) {
            return Some(self);
        }
        self.descendants().into_iter().find(|e| e.has_class(class))
    }

    /// First descendant (or self) whose `data-{key}` equals `value`
    pub fn find_by_data(&self, key: &str, value: &str) -> Option<&Element> {
        let name = format!("data-{}", key);
        if self.get_attr(&name) == Some(value) {
            return Some(self);
        }
        self.descendants()
            .into_iter()
            .find(|e| e.get_attr(&name) == Some(value))
    }

    /// Concatenated text of this element and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => e.collect_text(out),
            }
        }
    }

    /// Serialize to HTML markup
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(f, " {}=\"{}\"", name, escape(value, true))?;
        }
        f.write_str(">")?;
        for child in &self.children {
            match child {
                Node::Text(t) => f.write_str(&escape(t, false))?,
                Node::Element(e) => write!(f, "{}", e)?,
            }
        }
        write!(f, "</{}>", self.tag)
    }
}

fn escape(input: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup() {
        let li = Element::new("li").child(
            Element::new("span")
                .class("participant-badge")
                .text("a@x.com"),
        );
        assert_eq!(
            li.to_html(),
            r#"<li><span class="participant-badge">a@x.com</span></li>"#
        );
    }

    #[test]
    fn test_escaping() {
        let el = Element::new("p")
            .data("activity-name", r#"Q&A "Club""#)
            .text("<script>");
        assert_eq!(
            el.to_html(),
            r#"<p data-activity-name="Q&amp;A &quot;Club&quot;">&lt;script&gt;</p>"#
        );
    }

    #[test]
    fn test_queries() {
        let tree = Element::new("div").class("card").data("activity-name", "Chess").child(
            Element::new("ul")
                .class("participants-list")
                .child(Element::new("li").text("one"))
                .child(Element::new("li").text("two")),
        );

        assert!(tree.find_by_data("activity-name", "Chess").is_some());
        let list = tree.find_by_class("participants-list").unwrap();
        assert_eq!(list.child_elements().count(), 2);
        assert_eq!(tree.text_content(), "onetwo");
    }

    #[test]
    fn test_attr_replaces() {
        let el = Element::new("option").attr("value", "a").attr("value", "b");
        assert_eq!(el.get_attr("value"), Some("b"));
        assert_eq!(el.to_html(), r#"<option value="b"></option>"#);
    }
}
