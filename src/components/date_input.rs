use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::components::field::{grouped, grouped_explicit, Chrome};
use crate::components::{
    Component, ErrorMessageOptions, FieldsetOptions, FormGroupOptions, HintOptions, InputOptions,
    LabelOptions,
};
use crate::config::Config;
use crate::html::{Element, Markup};

/// One segment of a date: day, month or year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DateInputItem {
    pub name: String,
    /// Defaults to `<group id>_<name>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Full submitted name; defaults to `<name prefix>_<name>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Defaults to the configured segment label, else the capitalised name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(deserialize_with = "crate::scalar::option", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

impl DateInputItem {
    pub fn new(name: &str, classes: &str) -> Self {
        Self {
            name: name.to_string(),
            classes: Some(classes.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DateInputOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_prefix: Option<String>,
    /// Defaults to day, month and year inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<DateInputItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub described_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fieldset: Option<FieldsetOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<HintOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<ErrorMessageOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_group: Option<FormGroupOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

crate::impl_merge!(DateInputOptions {
    replace: [id, name_prefix, items, described_by, classes],
    nested: [fieldset, hint, error_message, form_group, attributes],
});

/// The standard day (width 2), month (width 2) and year (width 4) segments.
pub fn default_date_items() -> Vec<DateInputItem> {
    vec![
        DateInputItem::new("day", "govuk-input--width-2"),
        DateInputItem::new("month", "govuk-input--width-2"),
        DateInputItem::new("year", "govuk-input--width-4"),
    ]
}

/// The configured label for a standard segment, else the capitalised name.
fn segment_label(name: &str, config: &Config) -> String {
    let labels = &config.default_date_segment_labels;
    match name {
        "day" => labels.day.clone(),
        "month" => labels.month.clone(),
        "year" => labels.year.clone(),
        _ => {
            let mut chars = name.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

impl DateInputOptions {
    fn render_item(&self, group_id: &str, item: &DateInputItem, has_error: bool, config: &Config) -> Markup {
        let id = item
            .id
            .clone()
            .unwrap_or_else(|| format!("{}_{}", group_id, item.name));
        let name = item.full_name.clone().unwrap_or_else(|| match &self.name_prefix {
            Some(prefix) if !prefix.is_empty() => format!("{}_{}", prefix, item.name),
            _ => item.name.clone(),
        });
        let classes = ClassList::new("govuk-date-input__input")
            .modifier_if(has_error, "govuk-input--error")
            .custom(item.classes.as_deref())
            .build();

        let input = InputOptions {
            id: Some(id.clone()),
            name: Some(name),
            inputmode: Some(item.inputmode.clone().unwrap_or_else(|| "numeric".to_string())),
            value: item.value.clone(),
            autocomplete: item.autocomplete.clone(),
            pattern: item.pattern.clone(),
            label: Some(LabelOptions {
                text: Some(item.label.clone().unwrap_or_else(|| segment_label(&item.name, config))),
                classes: Some("govuk-date-input__label".to_string()),
                ..LabelOptions::default()
            }),
            form_group: Some(FormGroupOptions {
                id: Some(format!("{}-form-group", id)),
                ..FormGroupOptions::default()
            }),
            classes: Some(classes),
            attributes: item.attributes.clone(),
            ..InputOptions::default()
        };

        Element::new("div")
            .attr("class", "govuk-date-input__item")
            .child(input.render_with(config))
            .render()
    }
}

impl Component for DateInputOptions {
    fn render_with(&self, config: &Config) -> Markup {
        let id = self.id.as_deref().unwrap_or_default();
        let explicit = grouped_explicit(
            self.described_by.as_deref(),
            self.fieldset.as_ref(),
            self.attributes.as_ref(),
        );
        let chrome = Chrome::new(
            id,
            explicit.described_by.as_deref(),
            self.hint.as_ref(),
            self.error_message.as_ref(),
            config,
        );
        let has_error = chrome.has_error;

        let defaults;
        let items = match self.items.as_deref() {
            Some(items) if !items.is_empty() => items,
            _ => {
                defaults = default_date_items();
                defaults.as_slice()
            }
        };

        grouped(
            explicit.fieldset.as_ref(),
            self.form_group.as_ref(),
            chrome,
            Some("group"),
            |_| {
                let inputs: Markup = items
                    .iter()
                    .map(|item| self.render_item(id, item, has_error, config))
                    .collect();
                Element::new("div")
                    .class(ClassList::new("govuk-date-input").custom(self.classes.as_deref()))
                    .attr_opt("id", self.id.as_deref())
                    .attributes(explicit.attributes.as_ref())
                    .child(inputs)
                    .render()
            },
        )
    }
}
