//! Derivation of a field's `id` and `name`.

use regex::Regex;
use std::sync::OnceLock;

use crate::model::{FormLike, ModelLike};

/// The `id`/`name` pair of one field instance.
///
/// The label's `for`, the hint id and the error id are all derived from the
/// same `id`; only the suffix differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub name: String,
}

impl Identity {
    pub fn hint_id(&self) -> String {
        hint_id(&self.id)
    }

    pub fn error_id(&self) -> String {
        error_id(&self.id)
    }

    /// Id of one option of a multi-valued field.
    pub fn item_id(&self, value: &str) -> String {
        item_id(&self.id, value)
    }
}

pub fn hint_id(id: &str) -> String {
    format!("{}-hint", id)
}

pub fn error_id(id: &str) -> String {
    format!("{}-error", id)
}

pub fn item_id(base_id: &str, value: &str) -> String {
    format!("{}_{}", base_id, sanitize(value))
}

fn disallowed() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_-]").expect("valid id regex"))
}

/// Replace every character outside `[A-Za-z0-9_-]` with one `_`.
pub fn sanitize(value: &str) -> String {
    disallowed().replace_all(value, "_").into_owned()
}

/// Resolve a field's identity.
///
/// Precedence, applied to `id` and `name` independently:
/// 1. an explicit override,
/// 2. the form's param key (`user[email]`, `user_email`),
/// 3. the bare attribute.
///
/// A model without a form does not namespace the id; it only supplies values
/// and errors.
pub fn resolve(
    attribute: &str,
    model: Option<&dyn ModelLike>,
    form: Option<&dyn FormLike>,
    explicit_id: Option<&str>,
    explicit_name: Option<&str>,
) -> Identity {
    let (derived_id, derived_name) = match (form, model) {
        (Some(form), _) => {
            let key = form.param_key();
            (
                format!("{}_{}", key, sanitize(attribute)),
                format!("{}[{}]", key, attribute),
            )
        }
        (None, Some(_)) | (None, None) => (sanitize(attribute), attribute.to_string()),
    };

    let identity = Identity {
        id: explicit_id.map(str::to_string).unwrap_or(derived_id),
        name: explicit_name.map(str::to_string).unwrap_or(derived_name),
    };
    tracing::debug!(attribute, id = %identity.id, name = %identity.name, "resolved field identity");
    identity
}

/// Turn an attribute name into label text: `date_of_birth` → `Date of birth`.
pub fn humanize(attribute: &str) -> String {
    let base = attribute.strip_suffix("_id").unwrap_or(attribute);
    let spaced = base.replace('_', " ");
    let trimmed = spaced.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
