//! Ordered HTML attribute maps and their flattening into `name="value"` pairs.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::html::escape_attribute;
use crate::merge::Merge;

/// Attributes that follow HTML boolean semantics: present or absent.
pub const BOOLEAN_ATTRIBUTES: &[&str] = &[
    "allowfullscreen",
    "async",
    "autofocus",
    "autoplay",
    "checked",
    "controls",
    "default",
    "defer",
    "disabled",
    "formnovalidate",
    "hidden",
    "inert",
    "ismap",
    "itemscope",
    "loop",
    "multiple",
    "muted",
    "nomodule",
    "novalidate",
    "open",
    "readonly",
    "required",
    "reversed",
    "selected",
];

/// A single attribute value: a scalar or a nested map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Map(Attributes),
}

impl AttributeValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Null => Ok(()),
            AttributeValue::Bool(b) => write!(f, "{}", b),
            AttributeValue::Integer(n) => write!(f, "{}", n),
            AttributeValue::Float(n) => write!(f, "{}", n),
            AttributeValue::Text(s) => f.write_str(s),
            AttributeValue::Map(_) => Ok(()),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<&String> for AttributeValue {
    fn from(value: &String) -> Self {
        AttributeValue::Text(value.clone())
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        AttributeValue::Integer(i64::from(value))
    }
}

impl From<usize> for AttributeValue {
    fn from(value: usize) -> Self {
        AttributeValue::Integer(value as i64)
    }
}

impl From<Attributes> for AttributeValue {
    fn from(value: Attributes) -> Self {
        AttributeValue::Map(value)
    }
}

/// An insertion-ordered attribute map.
///
/// Writing an existing key replaces its value in place, so the emitted
/// attribute order is the order keys were first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(Vec<(String, AttributeValue)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.0.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Text value of `name`, if it is a plain string attribute.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttributeValue::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
        let index = self.0.iter().position(|(k, _)| k == name)?;
        Some(self.0.remove(index).1)
    }

    /// Remove `aria-describedby`, written flat or under an `aria` map, and
    /// return its ids. The flat form comes first when both are present.
    pub fn take_described_by(&mut self) -> Option<String> {
        let flat = self.remove("aria-describedby");
        let mut nested = None;
        let mut aria_emptied = false;
        if let Some((_, AttributeValue::Map(aria))) = self.0.iter_mut().find(|(k, _)| k == "aria") {
            nested = aria.remove("describedby");
            aria_emptied = aria.is_empty();
        }
        if aria_emptied {
            self.remove("aria");
        }

        let ids: Vec<String> = [flat, nested]
            .into_iter()
            .flatten()
            .filter(|value| !matches!(value, AttributeValue::Map(_)))
            .map(|value| value.to_string().trim().to_string())
            .filter(|ids| !ids.is_empty())
            .collect();
        (!ids.is_empty()).then(|| ids.join(" "))
    }

    /// Flatten into ordered `(name, value)` pairs ready for emission.
    ///
    /// `data` and `aria` maps are joined with `-`, `Null` and false boolean
    /// attributes are dropped, and a later pair with the same name replaces
    /// an earlier one.
    pub fn serialize(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.0.len());
        for (name, value) in &self.0 {
            flatten_into(&mut pairs, name.clone(), value, false);
        }
        pairs
    }

    /// Render as ` name="value"` pairs, each preceded by a space.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for (name, value) in self.serialize() {
            html.push(' ');
            html.push_str(&name);
            html.push_str("=\"");
            html.push_str(&escape_attribute(&value));
            html.push('"');
        }
        html
    }
}

fn flatten_into(
    pairs: &mut Vec<(String, String)>,
    name: String,
    value: &AttributeValue,
    nested: bool,
) {
    match value {
        AttributeValue::Null => {}
        AttributeValue::Map(map) => {
            for (key, inner) in &map.0 {
                let joined = format!("{}-{}", name, key.replace('_', "-"));
                flatten_into(pairs, joined, inner, true);
            }
        }
        AttributeValue::Bool(flag) if !nested && is_boolean_attribute(&name) => {
            if *flag {
                push_pair(pairs, name.clone(), name);
            } else {
                pairs.retain(|(k, _)| *k != name);
            }
        }
        scalar => {
            let text = scalar.to_string();
            push_pair(pairs, name, text);
        }
    }
}

fn push_pair(pairs: &mut Vec<(String, String)>, name: String, value: String) {
    match pairs.iter_mut().find(|(k, _)| *k == name) {
        Some(slot) => slot.1 = value,
        None => pairs.push((name, value)),
    }
}

pub fn is_boolean_attribute(name: &str) -> bool {
    BOOLEAN_ATTRIBUTES.contains(&name)
}

impl Merge for Attributes {
    /// Overrides win per key, except `class` which is appended and maps
    /// which merge key by key.
    fn merge(mut self, overrides: Self) -> Self {
        for (name, value) in overrides.0 {
            let merged = match (self.get(&name), value) {
                (Some(AttributeValue::Text(base)), AttributeValue::Text(extra)) if name == "class" => {
                    AttributeValue::Text(join_classes(base, &extra))
                }
                (Some(AttributeValue::Map(base)), AttributeValue::Map(extra)) => {
                    AttributeValue::Map(base.clone().merge(extra))
                }
                (_, value) => value,
            };
            self.insert(name, merged);
        }
        self
    }
}

fn join_classes(base: &str, extra: &str) -> String {
    match (base.trim().is_empty(), extra.trim().is_empty()) {
        (true, _) => extra.to_string(),
        (_, true) => base.to_string(),
        _ => format!("{} {}", base, extra),
    }
}

impl<K: Into<String>, V: Into<AttributeValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (k, v) in iter {
            attributes.insert(k, v);
        }
        attributes
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AttributesVisitor;

        impl<'de> Visitor<'de> for AttributesVisitor {
            type Value = Attributes;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of HTML attributes")
            }

            fn visit_unit<E>(self) -> Result<Attributes, E> {
                Ok(Attributes::new())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Attributes, A::Error> {
                let mut attributes = Attributes::new();
                while let Some((key, value)) = access.next_entry::<String, AttributeValue>()? {
                    attributes.insert(key, value);
                }
                Ok(attributes)
            }
        }

        deserializer.deserialize_map(AttributesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn preserves_insertion_order() {
        let attrs = Attributes::new()
            .with("lang", "en")
            .with("id", "x")
            .with("title", "t");
        assert_eq!(
            attrs.serialize(),
            pairs(&[("lang", "en"), ("id", "x"), ("title", "t")])
        );
    }

    #[test]
    fn flattens_data_and_aria_namespaces() {
        let attrs = Attributes::new()
            .with("data", Attributes::new().with("test", "x").with("module_name", "y"))
            .with("aria", Attributes::new().with("label", "Close"));
        assert_eq!(
            attrs.serialize(),
            pairs(&[
                ("data-test", "x"),
                ("data-module-name", "y"),
                ("aria-label", "Close"),
            ])
        );
    }

    #[test]
    fn top_level_keys_pass_through_verbatim() {
        let attrs = Attributes::new().with("data_thing", "1").with("aria-label", "a");
        assert_eq!(
            attrs.serialize(),
            pairs(&[("data_thing", "1"), ("aria-label", "a")])
        );
    }

    #[test]
    fn boolean_attributes_repeat_their_name() {
        let attrs = Attributes::new()
            .with("disabled", true)
            .with("required", false)
            .with("spellcheck", false)
            .with("data", Attributes::new().with("disabled", true));
        assert_eq!(
            attrs.serialize(),
            pairs(&[
                ("disabled", "disabled"),
                ("spellcheck", "false"),
                ("data-disabled", "true"),
            ])
        );
    }

    #[test]
    fn null_values_are_omitted() {
        let attrs = Attributes::new().with("id", AttributeValue::Null).with("rows", 5u32);
        assert_eq!(attrs.serialize(), pairs(&[("rows", "5")]));
    }

    #[test]
    fn last_write_wins_in_first_position() {
        let mut attrs = Attributes::new().with("id", "a").with("name", "n");
        attrs.insert("id", "b");
        assert_eq!(attrs.serialize(), pairs(&[("id", "b"), ("name", "n")]));
    }

    #[test]
    fn merge_overrides_but_appends_class() {
        let defaults = Attributes::new()
            .with("class", "govuk-input")
            .with("type", "text")
            .with("data", Attributes::new().with("module", "a").with("keep", "k"));
        let overrides = Attributes::new()
            .with("type", "email")
            .with("class", "app-input")
            .with("data", Attributes::new().with("module", "b"));
        let merged = defaults.merge(overrides);
        assert_eq!(
            merged.serialize(),
            pairs(&[
                ("class", "govuk-input app-input"),
                ("type", "email"),
                ("data-module", "b"),
                ("data-keep", "k"),
            ])
        );
    }

    #[test]
    fn to_html_escapes_values() {
        let attrs = Attributes::new().with("title", "a & b <c>");
        assert_eq!(attrs.to_html(), " title=\"a &amp; b &lt;c&gt;\"");
    }

    #[test]
    fn deserializes_in_document_order() {
        let attrs: Attributes =
            serde_yaml::from_str("lang: cy\ndata:\n  tracking: nav\ndisabled: true\nmaxlength: 10\n")
                .unwrap();
        assert_eq!(
            attrs.serialize(),
            pairs(&[
                ("lang", "cy"),
                ("data-tracking", "nav"),
                ("disabled", "disabled"),
                ("maxlength", "10"),
            ])
        );
    }

    #[test]
    fn takes_flat_and_nested_described_by() {
        let mut attrs: Attributes = serde_yaml::from_str(
            "aria-describedby: flat-id\naria:\n  describedby: nested-id\n  label: Name\nlang: en\n",
        )
        .unwrap();
        assert_eq!(attrs.take_described_by().as_deref(), Some("flat-id nested-id"));
        assert_eq!(attrs.serialize(), pairs(&[("aria-label", "Name"), ("lang", "en")]));
        assert_eq!(attrs.take_described_by(), None);
    }

    #[test]
    fn drops_aria_map_left_empty() {
        let mut attrs: Attributes = serde_yaml::from_str("aria:\n  describedby: only-id\n").unwrap();
        assert_eq!(attrs.take_described_by().as_deref(), Some("only-id"));
        assert!(attrs.is_empty());
    }
}
