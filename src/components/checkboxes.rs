use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::components::choices::{ChoiceGroup, ChoiceItem, ChoiceKind};
use crate::components::field::{grouped, grouped_explicit, Chrome};
use crate::components::{
    Component, ErrorMessageOptions, FieldsetOptions, FormGroupOptions, HintOptions,
};
use crate::config::Config;
use crate::html::Markup;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckboxesOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ChoiceItem>>,
    /// Current values; every matching item is checked.
    #[serde(deserialize_with = "crate::scalar::option_list", skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
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

crate::impl_merge!(CheckboxesOptions {
    replace: [id_prefix, name, items, values, described_by, classes],
    nested: [fieldset, hint, error_message, form_group, attributes],
});

impl CheckboxesOptions {
    pub fn checked_indexes(&self) -> Vec<usize> {
        let values = self.values.as_deref().unwrap_or_default();
        self.items
            .iter()
            .flatten()
            .enumerate()
            .filter_map(|(index, item)| {
                let option = item.option()?;
                let checked = option
                    .checked
                    .unwrap_or_else(|| values.iter().any(|value| *value == option.value));
                checked.then_some(index)
            })
            .collect()
    }
}

impl Component for CheckboxesOptions {
    fn render_with(&self, config: &Config) -> Markup {
        let name = self.name.as_deref().unwrap_or_default();
        let base_id = self.id_prefix.as_deref().unwrap_or(name);
        let explicit = grouped_explicit(
            self.described_by.as_deref(),
            self.fieldset.as_ref(),
            self.attributes.as_ref(),
        );
        let chrome = Chrome::new(
            base_id,
            explicit.described_by.as_deref(),
            self.hint.as_ref(),
            self.error_message.as_ref(),
            config,
        );

        grouped(
            explicit.fieldset.as_ref(),
            self.form_group.as_ref(),
            chrome,
            None,
            |described_by| {
                ChoiceGroup {
                    kind: ChoiceKind::Checkbox,
                    base_id,
                    name,
                    items: self.items.as_deref().unwrap_or_default(),
                    checked: self.checked_indexes(),
                    described_by,
                    classes: self.classes.as_deref(),
                    attributes: explicit.attributes.as_ref(),
                }
                .render(config)
            },
        )
    }
}
