use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::components::field::{label_for, split_described_by, Chrome};
use crate::components::{
    form_group, Component, ErrorMessageOptions, FormGroupOptions, HintOptions, LabelOptions,
};
use crate::config::Config;
use crate::html::{Element, Markup};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextareaOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    #[serde(deserialize_with = "crate::scalar::option", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spellcheck: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub described_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelOptions>,
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

crate::impl_merge!(TextareaOptions {
    replace: [id, name, rows, value, disabled, spellcheck, autocomplete, described_by, classes],
    nested: [label, hint, error_message, form_group, attributes],
});

impl Component for TextareaOptions {
    fn render_with(&self, config: &Config) -> Markup {
        let id = self
            .id
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default();
        let (explicit, attributes) =
            split_described_by(self.described_by.as_deref(), self.attributes.as_ref());
        let chrome = Chrome::new(
            id,
            explicit.as_deref(),
            self.hint.as_ref(),
            self.error_message.as_ref(),
            config,
        );

        let control = Element::new("textarea")
            .class(
                ClassList::new("govuk-textarea")
                    .modifier_if(chrome.has_error, "govuk-textarea--error")
                    .custom(self.classes.as_deref()),
            )
            .attr("id", id)
            .attr("name", self.name.as_deref().unwrap_or_default())
            .attr("rows", self.rows.unwrap_or(config.default_textarea_rows))
            .attr_opt("spellcheck", self.spellcheck)
            .flag("disabled", self.disabled.unwrap_or(false))
            .attr_opt("aria-describedby", chrome.described_by.as_deref())
            .attr_opt("autocomplete", self.autocomplete.as_deref())
            .attributes(attributes.as_ref())
            .text(self.value.as_deref().unwrap_or_default())
            .render();

        let mut body = label_for(id, self.label.as_ref(), config);
        body.push(chrome.hint);
        body.push(chrome.error);
        body.push(control);
        form_group(self.form_group.as_ref(), chrome.has_error, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_escaped_value_and_default_rows() {
        let textarea = TextareaOptions {
            name: Some("more-detail".into()),
            value: Some("Fish & chips".into()),
            label: Some(LabelOptions::text("Can you provide more detail?")),
            ..TextareaOptions::default()
        };
        assert_eq!(
            textarea.render().as_str(),
            concat!(
                r#"<div class="govuk-form-group">"#,
                r#"<label class="govuk-label" for="more-detail">Can you provide more detail?</label>"#,
                r#"<textarea class="govuk-textarea" id="more-detail" name="more-detail" rows="5">Fish &amp; chips</textarea>"#,
                r#"</div>"#
            )
        );
    }

    #[test]
    fn rows_default_follows_config() {
        let config = Config {
            default_textarea_rows: 8,
            ..Config::default()
        };
        let textarea = TextareaOptions {
            name: Some("notes".into()),
            ..TextareaOptions::default()
        };
        assert!(textarea.render_with(&config).as_str().contains(r#"rows="8""#));
    }
}
