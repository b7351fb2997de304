use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::html::{Element, Markup};

/// Options for the error-aware wrapper around a field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormGroupOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

crate::impl_merge!(FormGroupOptions {
    replace: [id, classes],
    nested: [attributes],
});

/// Wrap a field's label, hint, error and control.
pub fn form_group(options: Option<&FormGroupOptions>, has_error: bool, body: Markup) -> Markup {
    let (id, classes, attributes) = match options {
        Some(o) => (o.id.as_deref(), o.classes.as_deref(), o.attributes.as_ref()),
        None => (None, None, None),
    };

    Element::new("div")
        .class(
            ClassList::new("govuk-form-group")
                .modifier_if(has_error, "govuk-form-group--error")
                .custom(classes),
        )
        .attr_opt("id", id)
        .attributes(attributes)
        .child(body)
        .render()
}
