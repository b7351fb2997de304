//! Pieces shared by the form field components: the label, hint and error
//! fragments, the aria-describedby chain that references them, and the
//! fieldset/form-group wrapping.

use crate::attributes::Attributes;
use crate::components::{
    form_group, Component, ErrorMessageOptions, FieldsetOptions, FormGroupOptions, HintOptions,
    LabelOptions,
};
use crate::config::Config;
use crate::described_by;
use crate::html::Markup;
use crate::identity;
use crate::merge::Merge;

/// The rendered hint and error of one field and the ids that describe it.
#[derive(Debug, Clone, Default)]
pub(crate) struct Chrome {
    pub hint: Markup,
    pub error: Markup,
    pub described_by: Option<String>,
    pub has_error: bool,
}

impl Chrome {
    pub fn new(
        id: &str,
        explicit_described_by: Option<&str>,
        hint: Option<&HintOptions>,
        error_message: Option<&ErrorMessageOptions>,
        config: &Config,
    ) -> Self {
        let hint = hint.filter(|hint| hint.is_present()).map(|hint| {
            HintOptions {
                id: Some(identity::hint_id(id)),
                ..HintOptions::default()
            }
            .merge(hint.clone())
        });
        let error = error_message.filter(|error| error.is_present()).map(|error| {
            ErrorMessageOptions {
                id: Some(identity::error_id(id)),
                ..ErrorMessageOptions::default()
            }
            .merge(error.clone())
        });

        let described_by = described_by::build(
            explicit_described_by,
            hint.as_ref().and_then(|hint| hint.id.as_deref()),
            error.as_ref().and_then(|error| error.id.as_deref()),
        );

        Self {
            hint: hint.map(|hint| hint.render_with(config)).unwrap_or_default(),
            has_error: error.is_some(),
            error: error.map(|error| error.render_with(config)).unwrap_or_default(),
            described_by,
        }
    }
}

/// A label pointing at `id`; callers' label options win over the generated `for`.
pub(crate) fn label_for(id: &str, label: Option<&LabelOptions>, config: &Config) -> Markup {
    match label {
        Some(label) => LabelOptions {
            for_id: Some(id.to_string()),
            ..LabelOptions::default()
        }
        .merge(label.clone())
        .render_with(config),
        None => Markup::new(),
    }
}

/// Lay out a multi-control field: form group, then an optional fieldset
/// holding the hint, error and controls.
///
/// With a fieldset the describedby chain goes on the fieldset and
/// `None` is handed to the controls; without one the controls get it.
pub(crate) fn grouped(
    fieldset: Option<&FieldsetOptions>,
    form_group_options: Option<&FormGroupOptions>,
    chrome: Chrome,
    role: Option<&str>,
    controls: impl FnOnce(Option<&str>) -> Markup,
) -> Markup {
    let mut body = Markup::new();
    let has_error = chrome.has_error;
    match fieldset {
        Some(fieldset) => {
            let fieldset = FieldsetOptions {
                role: role.map(str::to_string),
                ..FieldsetOptions::default()
            }
            .merge(fieldset.clone());
            let fieldset = FieldsetOptions {
                described_by: chrome.described_by.clone(),
                ..fieldset
            };
            let mut inner = chrome.hint;
            inner.push(chrome.error);
            inner.push(controls(None));
            body.push(fieldset.wrap(inner));
        }
        None => {
            body.push(chrome.hint);
            body.push(chrome.error);
            body.push(controls(chrome.described_by.as_deref()));
        }
    }
    form_group(form_group_options, has_error, body)
}

/// Move any `aria-describedby` in the caller's attributes into the explicit
/// ids, after `explicit`, so it leads the chain instead of replacing it.
pub(crate) fn split_described_by(
    explicit: Option<&str>,
    attributes: Option<&Attributes>,
) -> (Option<String>, Option<Attributes>) {
    let mut attributes = attributes.cloned();
    let from_attributes = attributes.as_mut().and_then(Attributes::take_described_by);
    (
        described_by::join([explicit, from_attributes.as_deref()]),
        attributes,
    )
}

/// Explicit ids of a grouped field and the options left once they are taken.
pub(crate) struct GroupedExplicit {
    pub described_by: Option<String>,
    pub fieldset: Option<FieldsetOptions>,
    pub attributes: Option<Attributes>,
}

/// Explicit describedby for a grouped field, in order: the component's own,
/// the fieldset's, then `aria-describedby` from the fieldset's attributes and
/// from the component's attributes.
pub(crate) fn grouped_explicit(
    described_by: Option<&str>,
    fieldset: Option<&FieldsetOptions>,
    attributes: Option<&Attributes>,
) -> GroupedExplicit {
    let mut fieldset = fieldset.cloned();
    let from_fieldset = fieldset
        .as_mut()
        .and_then(|fieldset| fieldset.attributes.as_mut())
        .and_then(Attributes::take_described_by);
    let leading = described_by::join([
        described_by,
        fieldset.as_ref().and_then(|fieldset| fieldset.described_by.as_deref()),
        from_fieldset.as_deref(),
    ]);
    let (described_by, attributes) = split_described_by(leading.as_deref(), attributes);
    GroupedExplicit {
        described_by,
        fieldset,
        attributes,
    }
}
