//! Markup primitives: escaping, a small element builder and the `text`/`html`
//! content convention shared by every component.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::attributes::{AttributeValue, Attributes};
use crate::classes::ClassList;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Escape text content.
pub fn escape_html(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// Escape a value for use inside a double-quoted attribute.
pub fn escape_attribute(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}

/// A fragment of HTML that is already safe to emit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a string that is trusted HTML.
    pub fn raw(html: impl Into<String>) -> Self {
        Markup(html.into())
    }

    /// Escape plain text into markup.
    pub fn text(text: &str) -> Self {
        Markup(escape_html(text))
    }

    /// Resolve the `text`/`html` option pair: `html` is emitted as-is and wins,
    /// `text` is escaped, neither means no content.
    pub fn from_content(text: Option<&str>, html: Option<&str>) -> Option<Self> {
        match (html, text) {
            (Some(html), _) => Some(Markup::raw(html)),
            (None, Some(text)) => Some(Markup::text(text)),
            (None, None) => None,
        }
    }

    pub fn push(&mut self, markup: Markup) {
        self.0.push_str(&markup.0);
    }

    pub fn push_raw(&mut self, html: &str) {
        self.0.push_str(html);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Markup> for String {
    fn from(markup: Markup) -> Self {
        markup.0
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        let mut out = Markup::new();
        for part in iter {
            out.push(part);
        }
        out
    }
}

/// Builder for a single HTML element.
///
/// Attributes are emitted in the order they are added; caller-supplied
/// attributes merged with [`Element::attributes`] replace earlier keys in
/// place, except `class` which is appended.
#[derive(Debug, Clone)]
pub struct Element {
    tag: &'static str,
    attributes: Attributes,
    body: Markup,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Attributes::new(),
            body: Markup::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    pub fn attr_opt<V: Into<AttributeValue>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Add a boolean attribute only when `flag` is set.
    pub fn flag(self, name: &str, flag: bool) -> Self {
        if flag {
            self.attr(name, true)
        } else {
            self
        }
    }

    pub fn class(self, classes: ClassList) -> Self {
        self.attr("class", classes.build())
    }

    /// Merge caller attributes over everything added so far.
    pub fn attributes(mut self, attributes: Option<&Attributes>) -> Self {
        if let Some(extra) = attributes {
            use crate::merge::Merge;
            self.attributes = self.attributes.merge(extra.clone());
        }
        self
    }

    pub fn child(mut self, markup: Markup) -> Self {
        self.body.push(markup);
        self
    }

    pub fn child_opt(self, markup: Option<Markup>) -> Self {
        match markup {
            Some(markup) => self.child(markup),
            None => self,
        }
    }

    pub fn text(self, text: &str) -> Self {
        self.child(Markup::text(text))
    }

    pub fn render(self) -> Markup {
        let mut html = String::with_capacity(self.body.as_str().len() + 32);
        html.push('<');
        html.push_str(self.tag);
        html.push_str(&self.attributes.to_html());
        html.push('>');
        if !VOID_ELEMENTS.contains(&self.tag) {
            html.push_str(self.body.as_str());
            html.push_str("</");
            html.push_str(self.tag);
            html.push('>');
        }
        Markup(html)
    }
}
