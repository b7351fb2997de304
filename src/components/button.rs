use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::components::Component;
use crate::config::Config;
use crate::html::{Element, Markup};

const START_ICON: &str = concat!(
    r#"<svg class="govuk-button__start-icon" xmlns="http://www.w3.org/2000/svg" width="17.5" height="19" viewBox="0 0 33 40" aria-hidden="true" focusable="false">"#,
    r#"<path fill="currentColor" d="M0 0h13l20 20-20 20H0l20-20z"></path>"#,
    r#"</svg>"#
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonElement {
    Button,
    A,
    Input,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Defaults to `a` when `href` is set, otherwise `button`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<ButtonElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_type: Option<String>,
    #[serde(deserialize_with = "crate::scalar::option", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevent_double_click: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_start_button: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

crate::impl_merge!(ButtonOptions {
    replace: [
        text,
        html,
        element,
        href,
        name,
        button_type,
        value,
        id,
        disabled,
        prevent_double_click,
        is_start_button,
        classes,
    ],
    nested: [attributes],
});

impl ButtonOptions {
    pub fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Self::default()
        }
    }

    fn element(&self) -> ButtonElement {
        match (self.element, &self.href) {
            (Some(element), _) => element,
            (None, Some(_)) => ButtonElement::A,
            (None, None) => ButtonElement::Button,
        }
    }
}

impl Component for ButtonOptions {
    fn render_with(&self, _config: &Config) -> Markup {
        let disabled = self.disabled.unwrap_or(false);
        let is_start = self.is_start_button.unwrap_or(false);
        let classes = ClassList::new("govuk-button")
            .modifier_if(disabled, "govuk-button--disabled")
            .modifier_if(is_start, "govuk-button--start")
            .custom(self.classes.as_deref());

        let content = Markup::from_content(self.text.as_deref(), self.html.as_deref())
            .unwrap_or_default();
        let icon = is_start.then(|| Markup::raw(START_ICON));

        match self.element() {
            ButtonElement::A => Element::new("a")
                .attr("href", self.href.as_deref().unwrap_or("#"))
                .attr("role", "button")
                .attr("draggable", "false")
                .class(classes)
                .attr("data-module", "govuk-button")
                .attr_opt("id", self.id.as_deref())
                .attributes(self.attributes.as_ref())
                .child(content)
                .child_opt(icon)
                .render(),
            ButtonElement::Button => Element::new("button")
                .attr("type", self.button_type.as_deref().unwrap_or("submit"))
                .attr_opt("name", self.name.as_deref())
                .attr_opt("value", self.value.as_deref())
                .class(classes)
                .flag("disabled", disabled)
                .attr_opt("aria-disabled", disabled.then_some("true"))
                .attr("data-module", "govuk-button")
                .attr_opt(
                    "data-prevent-double-click",
                    self.prevent_double_click.map(|flag| flag.to_string()),
                )
                .attr_opt("id", self.id.as_deref())
                .attributes(self.attributes.as_ref())
                .child(content)
                .child_opt(icon)
                .render(),
            ButtonElement::Input => Element::new("input")
                .attr("value", self.text.as_deref().unwrap_or_default())
                .attr("type", self.button_type.as_deref().unwrap_or("submit"))
                .attr_opt("name", self.name.as_deref())
                .class(classes)
                .flag("disabled", disabled)
                .attr_opt("aria-disabled", disabled.then_some("true"))
                .attr("data-module", "govuk-button")
                .attr_opt("id", self.id.as_deref())
                .attributes(self.attributes.as_ref())
                .render(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_button() {
        assert_eq!(
            ButtonOptions::text("Save and continue").render().as_str(),
            r#"<button type="submit" class="govuk-button" data-module="govuk-button">Save and continue</button>"#
        );
    }

    #[test]
    fn start_link_button_has_icon() {
        let button = ButtonOptions {
            href: Some("/start".into()),
            is_start_button: Some(true),
            ..ButtonOptions::text("Go")
        };
        let expected = format!(
            r#"<a href="/start" role="button" draggable="false" class="govuk-button govuk-button--start" data-module="govuk-button">Go{}</a>"#,
            START_ICON
        );
        assert_eq!(button.render().as_str(), expected);
    }

    #[test]
    fn disabled_button_repeats_attribute_name() {
        let button = ButtonOptions {
            disabled: Some(true),
            prevent_double_click: Some(true),
            classes: Some("govuk-button--secondary".into()),
            ..ButtonOptions::text("Find address")
        };
        assert_eq!(
            button.render().as_str(),
            concat!(
                r#"<button type="submit" class="govuk-button govuk-button--disabled govuk-button--secondary" "#,
                r#"disabled="disabled" aria-disabled="true" data-module="govuk-button" data-prevent-double-click="true">"#,
                r#"Find address</button>"#
            )
        );
    }

    #[test]
    fn input_element_uses_text_as_value() {
        let button = ButtonOptions {
            element: Some(ButtonElement::Input),
            name: Some("continue".into()),
            ..ButtonOptions::text("Continue")
        };
        assert_eq!(
            button.render().as_str(),
            r#"<input value="Continue" type="submit" name="continue" class="govuk-button" data-module="govuk-button">"#
        );
    }
}
