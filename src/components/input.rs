use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::components::field::{label_for, split_described_by, Chrome};
use crate::components::{
    form_group, Component, ErrorMessageOptions, FormGroupOptions, HintOptions, LabelOptions,
};
use crate::config::Config;
use crate::html::{Element, Markup};

/// Text shown before or after the input, such as `£` or `kg`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputAffix {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

crate::impl_merge!(InputAffix {
    replace: [text, html, classes],
    nested: [attributes],
});

impl InputAffix {
    pub fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Self::default()
        }
    }

    fn render(&self, class: &str) -> Option<Markup> {
        let content = Markup::from_content(self.text.as_deref(), self.html.as_deref())?;
        Some(
            Element::new("div")
                .class(ClassList::new(class).custom(self.classes.as_deref()))
                .attr("aria-hidden", "true")
                .attributes(self.attributes.as_ref())
                .child(content)
                .render(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputOptions {
    /// Defaults to `name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputmode: Option<String>,
    #[serde(deserialize_with = "crate::scalar::option", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spellcheck: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocapitalize: Option<String>,
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
    pub prefix: Option<InputAffix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<InputAffix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

crate::impl_merge!(InputOptions {
    replace: [
        id,
        name,
        input_type,
        inputmode,
        value,
        disabled,
        spellcheck,
        autocomplete,
        pattern,
        autocapitalize,
        described_by,
        classes,
    ],
    nested: [label, hint, error_message, form_group, prefix, suffix, attributes],
});

impl InputOptions {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub(crate) fn id(&self) -> &str {
        self.id
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }

    fn control(&self, described_by: Option<&str>, attributes: Option<&Attributes>, has_error: bool) -> Markup {
        Element::new("input")
            .class(
                ClassList::new("govuk-input")
                    .modifier_if(has_error, "govuk-input--error")
                    .custom(self.classes.as_deref()),
            )
            .attr("id", self.id())
            .attr("name", self.name.as_deref().unwrap_or_default())
            .attr("type", self.input_type.as_deref().unwrap_or("text"))
            .attr_opt("spellcheck", self.spellcheck)
            .attr_opt("value", self.value.as_deref())
            .flag("disabled", self.disabled.unwrap_or(false))
            .attr_opt("aria-describedby", described_by)
            .attr_opt("autocomplete", self.autocomplete.as_deref())
            .attr_opt("pattern", self.pattern.as_deref())
            .attr_opt("inputmode", self.inputmode.as_deref())
            .attr_opt("autocapitalize", self.autocapitalize.as_deref())
            .attributes(attributes)
            .render()
    }
}

impl Component for InputOptions {
    fn render_with(&self, config: &Config) -> Markup {
        let id = self.id();
        let (explicit, attributes) =
            split_described_by(self.described_by.as_deref(), self.attributes.as_ref());
        let chrome = Chrome::new(
            id,
            explicit.as_deref(),
            self.hint.as_ref(),
            self.error_message.as_ref(),
            config,
        );

        let control = self.control(chrome.described_by.as_deref(), attributes.as_ref(), chrome.has_error);
        let prefix = self
            .prefix
            .as_ref()
            .and_then(|prefix| prefix.render("govuk-input__prefix"));
        let suffix = self
            .suffix
            .as_ref()
            .and_then(|suffix| suffix.render("govuk-input__suffix"));
        let control = if prefix.is_some() || suffix.is_some() {
            Element::new("div")
                .attr("class", "govuk-input__wrapper")
                .child_opt(prefix)
                .child(control)
                .child_opt(suffix)
                .render()
        } else {
            control
        };

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
    fn minimal_input_has_no_empty_fragments() {
        let input = InputOptions {
            label: Some(LabelOptions::text("Event name")),
            ..InputOptions::named("event-name")
        };
        assert_eq!(
            input.render().as_str(),
            concat!(
                r#"<div class="govuk-form-group">"#,
                r#"<label class="govuk-label" for="event-name">Event name</label>"#,
                r#"<input class="govuk-input" id="event-name" name="event-name" type="text">"#,
                r#"</div>"#
            )
        );
    }

    #[test]
    fn hint_and_error_are_wired_to_the_control() {
        let input = InputOptions {
            id: Some("ouroboros".into()),
            described_by: Some("some-id".into()),
            error_message: Some(ErrorMessageOptions::text("Enter a name")),
            ..InputOptions::named("name")
        };
        assert_eq!(
            input.render().as_str(),
            concat!(
                r#"<div class="govuk-form-group govuk-form-group--error">"#,
                r#"<p id="ouroboros-error" class="govuk-error-message"><span class="govuk-visually-hidden">Error:</span> Enter a name</p>"#,
                r#"<input class="govuk-input govuk-input--error" id="ouroboros" name="name" type="text" aria-describedby="some-id ouroboros-error">"#,
                r#"</div>"#
            )
        );
    }

    #[test]
    fn prefix_and_suffix_wrap_the_control() {
        let input = InputOptions {
            prefix: Some(InputAffix::text("£")),
            suffix: Some(InputAffix::text("per item")),
            classes: Some("govuk-input--width-5".into()),
            spellcheck: Some(false),
            ..InputOptions::named("cost")
        };
        assert_eq!(
            input.render().as_str(),
            concat!(
                r#"<div class="govuk-form-group"><div class="govuk-input__wrapper">"#,
                r#"<div class="govuk-input__prefix" aria-hidden="true">£</div>"#,
                r#"<input class="govuk-input govuk-input--width-5" id="cost" name="cost" type="text" spellcheck="false">"#,
                r#"<div class="govuk-input__suffix" aria-hidden="true">per item</div>"#,
                r#"</div></div>"#
            )
        );
    }

    #[test]
    fn hint_comes_before_error() {
        let input = InputOptions {
            hint: Some(HintOptions::text("As shown on your passport")),
            error_message: Some(ErrorMessageOptions::text("Enter your name")),
            ..InputOptions::named("name")
        };
        let html = input.render();
        assert!(html.as_str().contains(r#"aria-describedby="name-hint name-error""#));
        let hint_at = html.as_str().find("name-hint\" class").unwrap();
        let error_at = html.as_str().find("name-error\" class").unwrap();
        assert!(hint_at < error_at);
    }
}
