//! The narrow views of a host model and form builder that field helpers need.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// A value read from a model attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<FieldValue>),
    Date(DateParts),
}

/// A date split into the three segments a date input renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DateParts {
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl FieldValue {
    /// The value as it would be submitted by a form control.
    pub fn to_param(&self) -> Option<String> {
        match self {
            FieldValue::Bool(b) => Some(b.to_string()),
            FieldValue::Integer(n) => Some(n.to_string()),
            FieldValue::Float(n) => Some(n.to_string()),
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::List(_) | FieldValue::Date(_) => None,
        }
    }

    /// Every submitted value: the elements of a list, or the scalar itself.
    pub fn to_params(&self) -> Vec<String> {
        match self {
            FieldValue::List(items) => items.iter().filter_map(FieldValue::to_param).collect(),
            other => other.to_param().into_iter().collect(),
        }
    }

    /// Compare against an option value; `true` matches `"true"`, `3` matches `"3"`.
    pub fn matches(&self, value: &str) -> bool {
        self.to_params().iter().any(|param| param == value)
    }

    /// Date segments from a `Date` value or a `YYYY-MM-DD` string.
    pub fn date_parts(&self) -> Option<DateParts> {
        match self {
            FieldValue::Date(parts) => Some(parts.clone()),
            FieldValue::Text(text) => parse_iso_date(text),
            _ => None,
        }
    }
}

fn parse_iso_date(text: &str) -> Option<DateParts> {
    let mut parts = text.trim().splitn(3, '-');
    let year = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let day = parts.next()?.parse().ok()?;
    Some(DateParts {
        day: Some(day),
        month: Some(month),
        year: Some(year),
    })
}

/// Read access to a model's attributes and validation errors.
pub trait ModelLike {
    fn get(&self, attribute: &str) -> Option<FieldValue>;

    fn errors_for(&self, attribute: &str) -> Vec<String>;

    /// Every `(attribute, message)` pair, in the order the errors were added.
    fn errors(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

/// A form builder: namespaces field names and may wrap a model.
pub trait FormLike {
    fn param_key(&self) -> &str;

    fn object(&self) -> Option<&dyn ModelLike> {
        None
    }
}

/// The collaborators a field helper renders against.
#[derive(Clone, Copy, Default)]
pub struct FieldContext<'a> {
    pub model: Option<&'a dyn ModelLike>,
    pub form: Option<&'a dyn FormLike>,
}

impl<'a> FieldContext<'a> {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_model(model: &'a dyn ModelLike) -> Self {
        Self {
            model: Some(model),
            form: None,
        }
    }

    pub fn with_form(form: &'a dyn FormLike) -> Self {
        Self {
            model: None,
            form: Some(form),
        }
    }

    /// The model values and errors come from: the form's object, else the model.
    pub fn object(&self) -> Option<&'a dyn ModelLike> {
        self.form.and_then(|form| form.object()).or(self.model)
    }

    pub fn value(&self, attribute: &str) -> Option<FieldValue> {
        self.object().and_then(|object| object.get(attribute))
    }

    /// The first validation error for `attribute`, if any.
    pub fn first_error(&self, attribute: &str) -> Option<String> {
        self.object()
            .and_then(|object| object.errors_for(attribute).into_iter().next())
    }
}

impl fmt::Debug for FieldContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldContext")
            .field("model", &self.model.is_some())
            .field("form", &self.form.map(|form| form.param_key()))
            .finish()
    }
}

/// A plain in-memory model, usable both as a model and as a form.
///
/// ```yaml
/// param_key: person
/// values:
///   name: Ada
///   contact: email
/// errors:
///   email: Enter an email address
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Record {
    pub param_key: String,
    pub values: BTreeMap<String, FieldValue>,
    pub errors: ErrorMessages,
}

impl Record {
    pub fn new(param_key: &str) -> Self {
        Self {
            param_key: param_key.to_string(),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, attribute: &str, value: FieldValue) -> Self {
        self.values.insert(attribute.to_string(), value);
        self
    }

    pub fn with_error(mut self, attribute: &str, message: &str) -> Self {
        self.errors.add(attribute, message);
        self
    }
}

impl ModelLike for Record {
    fn get(&self, attribute: &str) -> Option<FieldValue> {
        self.values.get(attribute).cloned()
    }

    fn errors_for(&self, attribute: &str) -> Vec<String> {
        self.errors.for_attribute(attribute).to_vec()
    }

    fn errors(&self) -> Vec<(String, String)> {
        self.errors
            .0
            .iter()
            .flat_map(|(attribute, messages)| {
                messages.iter().map(move |m| (attribute.clone(), m.clone()))
            })
            .collect()
    }
}

impl FormLike for Record {
    fn param_key(&self) -> &str {
        &self.param_key
    }

    fn object(&self) -> Option<&dyn ModelLike> {
        Some(self)
    }
}

/// Validation messages keyed by attribute, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorMessages(Vec<(String, Vec<String>)>);

impl ErrorMessages {
    pub fn add(&mut self, attribute: &str, message: &str) {
        match self.0.iter_mut().find(|(a, _)| a == attribute) {
            Some((_, messages)) => messages.push(message.to_string()),
            None => self
                .0
                .push((attribute.to_string(), vec![message.to_string()])),
        }
    }

    pub fn for_attribute(&self, attribute: &str) -> &[String] {
        self.0
            .iter()
            .find(|(a, _)| a == attribute)
            .map(|(_, messages)| messages.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|(_, messages)| messages.is_empty())
    }
}

impl Serialize for ErrorMessages {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (attribute, messages) in &self.0 {
            map.serialize_entry(attribute, messages)?;
        }
        map.end()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for ErrorMessages {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ErrorsVisitor;

        impl<'de> Visitor<'de> for ErrorsVisitor {
            type Value = ErrorMessages;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of attribute names to error messages")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ErrorMessages, A::Error> {
                let mut errors = ErrorMessages::default();
                while let Some((attribute, messages)) = access.next_entry::<String, OneOrMany>()? {
                    let messages = match messages {
                        OneOrMany::One(message) => vec![message],
                        OneOrMany::Many(messages) => messages,
                    };
                    for message in messages {
                        errors.add(&attribute, &message);
                    }
                }
                Ok(errors)
            }
        }

        deserializer.deserialize_map(ErrorsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_match_string_and_boolean_aware() {
        assert!(FieldValue::Bool(true).matches("true"));
        assert!(!FieldValue::Bool(false).matches("true"));
        assert!(FieldValue::Integer(3).matches("3"));
        assert!(FieldValue::Text("yes".into()).matches("yes"));
        let list = FieldValue::List(vec![FieldValue::Text("a".into()), FieldValue::Integer(2)]);
        assert!(list.matches("2"));
        assert!(!list.matches("b"));
    }

    #[test]
    fn parses_iso_dates() {
        let parts = FieldValue::Text("2020-01-31".into()).date_parts().unwrap();
        assert_eq!(parts.day, Some(31));
        assert_eq!(parts.month, Some(1));
        assert_eq!(parts.year, Some(2020));
        assert_eq!(FieldValue::Text("soon".into()).date_parts(), None);
    }

    #[test]
    fn record_loads_from_yaml() {
        let record: Record = serde_yaml::from_str(
            "param_key: person\nvalues:\n  name: Ada\n  subscribed: true\n  born: {day: 10, month: 12, year: 1815}\nerrors:\n  name: [Too short, Too plain]\n  email: Enter an email address\n",
        )
        .unwrap();
        assert_eq!(record.get("name"), Some(FieldValue::Text("Ada".into())));
        assert_eq!(record.get("subscribed"), Some(FieldValue::Bool(true)));
        assert_eq!(record.get("born").and_then(|v| v.date_parts()).and_then(|p| p.year), Some(1815));
        assert_eq!(record.errors_for("name"), vec!["Too short", "Too plain"]);
        assert_eq!(
            ModelLike::errors(&record),
            vec![
                ("name".to_string(), "Too short".to_string()),
                ("name".to_string(), "Too plain".to_string()),
                ("email".to_string(), "Enter an email address".to_string()),
            ]
        );
    }

    #[test]
    fn context_prefers_form_object() {
        let form = Record::new("person").with_value("name", FieldValue::Text("form".into()));
        let model = Record::new("other").with_value("name", FieldValue::Text("model".into()));
        let context = FieldContext {
            model: Some(&model),
            form: Some(&form),
        };
        assert_eq!(context.value("name"), Some(FieldValue::Text("form".into())));
        assert_eq!(FieldContext::with_model(&model).first_error("name"), None);
        assert_eq!(FieldContext::none().value("name"), None);
    }
}
