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
pub struct RadiosOptions {
    /// Base for item ids; defaults to `name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ChoiceItem>>,
    /// Current value; checks the first matching item.
    #[serde(deserialize_with = "crate::scalar::option", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
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

crate::impl_merge!(RadiosOptions {
    replace: [id_prefix, name, items, value, described_by, classes],
    nested: [fieldset, hint, error_message, form_group, attributes],
});

impl RadiosOptions {
    /// Index of the one checked item: the first explicitly checked item, else
    /// the first whose value matches the current value.
    pub fn checked_index(&self) -> Option<usize> {
        let items = self.items.as_deref().unwrap_or_default();
        let explicit = items
            .iter()
            .position(|item| item.option().is_some_and(|o| o.checked == Some(true)));
        explicit.or_else(|| {
            let value = self.value.as_deref()?;
            items.iter().position(|item| {
                item.option()
                    .is_some_and(|o| o.checked.is_none() && o.value == value)
            })
        })
    }
}

impl Component for RadiosOptions {
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
                    kind: ChoiceKind::Radio,
                    base_id,
                    name,
                    items: self.items.as_deref().unwrap_or_default(),
                    checked: self.checked_index().into_iter().collect(),
                    described_by,
                    classes: self.classes.as_deref(),
                    attributes: explicit.attributes.as_ref(),
                }
                .render(config)
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::choices::ChoiceOption;
    use crate::components::LegendOptions;
    use pretty_assertions::assert_eq;

    fn yes_no() -> Vec<ChoiceItem> {
        vec![
            ChoiceOption::new("yes", "Yes").into(),
            ChoiceItem::divider("or"),
            ChoiceOption::new("no", "No").into(),
        ]
    }

    #[test]
    fn renders_fieldset_with_described_by() {
        let radios = RadiosOptions {
            name: Some("changed-name".into()),
            value: Some("no".into()),
            items: Some(yes_no()),
            fieldset: Some(FieldsetOptions {
                legend: Some(LegendOptions::text("Have you changed your name?")),
                ..FieldsetOptions::default()
            }),
            hint: Some(HintOptions::text("This includes changing your last name.")),
            ..RadiosOptions::default()
        };
        assert_eq!(
            radios.render().as_str(),
            concat!(
                r#"<div class="govuk-form-group">"#,
                r#"<fieldset class="govuk-fieldset" aria-describedby="changed-name-hint">"#,
                r#"<legend class="govuk-fieldset__legend">Have you changed your name?</legend>"#,
                r#"<div id="changed-name-hint" class="govuk-hint">This includes changing your last name.</div>"#,
                r#"<div class="govuk-radios" data-module="govuk-radios">"#,
                r#"<div class="govuk-radios__item">"#,
                r#"<input class="govuk-radios__input" id="changed-name_yes" name="changed-name" type="radio" value="yes">"#,
                r#"<label class="govuk-label govuk-radios__label" for="changed-name_yes">Yes</label>"#,
                r#"</div>"#,
                r#"<div class="govuk-radios__divider">or</div>"#,
                r#"<div class="govuk-radios__item">"#,
                r#"<input class="govuk-radios__input" id="changed-name_no" name="changed-name" type="radio" value="no" checked="checked">"#,
                r#"<label class="govuk-label govuk-radios__label" for="changed-name_no">No</label>"#,
                r#"</div>"#,
                r#"</div></fieldset></div>"#
            )
        );
    }

    #[test]
    fn explicit_checked_beats_value_and_only_one_is_checked() {
        let mut items = yes_no();
        items.push(
            ChoiceOption {
                checked: Some(true),
                ..ChoiceOption::new("maybe", "Maybe")
            }
            .into(),
        );
        let radios = RadiosOptions {
            name: Some("answer".into()),
            value: Some("yes".into()),
            items: Some(items),
            ..RadiosOptions::default()
        };
        assert_eq!(radios.checked_index(), Some(3));
        assert_eq!(radios.render().as_str().matches("checked=\"checked\"").count(), 1);
    }

    #[test]
    fn nothing_checked_without_match() {
        let radios = RadiosOptions {
            name: Some("answer".into()),
            value: Some("perhaps".into()),
            items: Some(yes_no()),
            ..RadiosOptions::default()
        };
        assert_eq!(radios.checked_index(), None);
        assert!(!radios.render().as_str().contains("checked"));
    }

    #[test]
    fn without_fieldset_controls_carry_described_by() {
        let radios = RadiosOptions {
            name: Some("answer".into()),
            items: Some(vec![ChoiceOption::new("a", "A").into()]),
            error_message: Some(ErrorMessageOptions::text("Choose one")),
            ..RadiosOptions::default()
        };
        let html = radios.render();
        assert!(html.as_str().starts_with(r#"<div class="govuk-form-group govuk-form-group--error">"#));
        assert!(html.as_str().contains(r#"value="a" aria-describedby="answer-error">"#));
        assert!(!html.as_str().contains("<fieldset"));
    }
}
