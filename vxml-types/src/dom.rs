//! Minimal document tree for compiled VoiceXML.
//!
//! The compiler only needs three construction primitives: append an
//! element, set an attribute, append text. [`Element`] offers exactly
//! those plus the read accessors that adapters and tests use to inspect
//! and rewrite a compiled document. Attributes keep insertion order, so
//! the serialized markup reflects the order in which the compiler set
//! them.

use std::fmt::Write as _;

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// A nested element.
    Element(Element),
    /// Character data.
    Text(String),
}

/// A markup element: a name, ordered attributes and ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set an attribute. An existing attribute keeps its position and
    /// has its value replaced; a new one is appended.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    /// Set an attribute only when a value is present. `None` leaves the
    /// element untouched, deferring to the interpreter's default.
    pub fn set_optional_attribute<V: Into<String>>(
        &mut self,
        name: &str,
        value: Option<V>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.set_attribute(name, value);
        }
        self
    }

    /// Builder-style [`set_attribute`](Self::set_attribute).
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder-style [`set_optional_attribute`](Self::set_optional_attribute).
    pub fn with_optional_attribute<V: Into<String>>(mut self, name: &str, value: Option<V>) -> Self {
        self.set_optional_attribute(name, value);
        self
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let index = self.attributes.iter().position(|(n, _)| n == name)?;
        Some(self.attributes.remove(index).1)
    }

    /// Value of the named attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Attribute names in insertion order.
    pub fn attribute_names(&self) -> Vec<&str> {
        self.attributes.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Append a child element.
    pub fn append_element(&mut self, child: Element) -> &mut Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Builder-style [`append_element`](Self::append_element).
    pub fn with_child(mut self, child: Element) -> Self {
        self.append_element(child);
        self
    }

    /// Append character data. Empty text is ignored.
    pub fn append_text(&mut self, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        if !text.is_empty() {
            self.children.push(Node::Text(text));
        }
        self
    }

    /// Builder-style [`append_text`](Self::append_text).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.append_text(text);
        self
    }

    /// All children, elements and text, in document order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Mutable access to the children.
    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    /// Child elements in document order, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Mutable child elements in document order.
    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// First direct child element with the given name.
    pub fn first_child(&self, name: &str) -> Option<&Element> {
        self.child_elements().find(|e| e.name == name)
    }

    /// Mutable first direct child element with the given name.
    pub fn first_child_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.child_elements_mut().find(|e| e.name == name)
    }

    /// Concatenated direct text content.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// This element and every descendant element, depth-first, in
    /// document order.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_descendants(&mut out);
        out
    }

    fn collect_descendants<'a>(&'a self, out: &mut Vec<&'a Element>) {
        out.push(self);
        for child in self.child_elements() {
            child.collect_descendants(out);
        }
    }

    /// Every element named `name` in this subtree, in document order.
    pub fn find_all(&self, name: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|e| e.name == name)
            .collect()
    }

    /// Visit this element and every descendant element mutably,
    /// depth-first.
    pub fn visit_mut(&mut self, visitor: &mut dyn FnMut(&mut Element)) {
        visitor(self);
        for child in self.child_elements_mut() {
            child.visit_mut(visitor);
        }
    }

    /// The first character in this subtree that XML 1.0 cannot carry,
    /// escaped or not. Names, attribute values and text are all checked.
    pub fn find_invalid_char(&self) -> Option<char> {
        let own = std::iter::once(self.name.as_str())
            .chain(self.attributes.iter().flat_map(|(n, v)| [n.as_str(), v.as_str()]))
            .find_map(|s| s.chars().find(|c| !is_xml_char(*c)));
        own.or_else(|| {
            self.children.iter().find_map(|child| match child {
                Node::Element(e) => e.find_invalid_char(),
                Node::Text(t) => t.chars().find(|c| !is_xml_char(*c)),
            })
        })
    }

    /// Serialize this subtree as markup.
    pub fn write_xml(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attributes {
            let _ = write!(out, " {name}=\"{}\"", escape(value, true));
        }
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(e) => e.write_xml(out),
                Node::Text(t) => out.push_str(&escape(t, false)),
            }
        }
        let _ = write!(out, "</{}>", self.name);
    }
}

/// A compiled document: a single root element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Wrap a root element.
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// The root element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Mutable root element, for adapters.
    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Every element named `name`, in document order.
    pub fn find_all(&self, name: &str) -> Vec<&Element> {
        self.root.find_all(name)
    }

    /// The first character in the document that XML 1.0 cannot carry.
    pub fn find_invalid_char(&self) -> Option<char> {
        self.root.find_invalid_char()
    }

    /// Serialize the document, with an XML declaration.
    pub fn to_xml(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        self.root.write_xml(&mut out);
        out
    }
}

/// Whether `c` may appear in an XML 1.0 document.
pub fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}')
        || c >= '\u{10000}'
}

// Whitespace in attribute values is written as character references so
// parsers do not normalize it to spaces.
fn escape(raw: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\r' => out.push_str("&#13;"),
            '"' if attribute => out.push_str("&quot;"),
            '\n' if attribute => out.push_str("&#10;"),
            '\t' if attribute => out.push_str("&#9;"),
            _ => out.push(c),
        }
    }
    out
}
