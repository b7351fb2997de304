use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::components::Component;
use crate::config::Config;
use crate::html::{Element, Markup};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TagOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Adds `govuk-tag--<colour>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

crate::impl_merge!(TagOptions {
    replace: [text, html, colour, classes],
    nested: [attributes],
});

impl TagOptions {
    pub fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Self::default()
        }
    }

    pub(crate) fn class_list(&self, base: &[&str]) -> ClassList {
        let mut classes = ClassList::new("govuk-tag");
        for class in base {
            classes = classes.base(class);
        }
        if let Some(colour) = &self.colour {
            classes = classes.modifier(&format!("govuk-tag--{}", colour));
        }
        classes.custom(self.classes.as_deref())
    }

    pub(crate) fn render_with_base(&self, base: &[&str]) -> Markup {
        Element::new("strong")
            .class(self.class_list(base))
            .attributes(self.attributes.as_ref())
            .child_opt(Markup::from_content(self.text.as_deref(), self.html.as_deref()))
            .render()
    }
}

impl Component for TagOptions {
    fn render_with(&self, _config: &Config) -> Markup {
        self.render_with_base(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_tag() {
        assert_eq!(
            TagOptions::text("Completed").render().as_str(),
            r#"<strong class="govuk-tag">Completed</strong>"#
        );
    }

    #[test]
    fn colour_is_a_modifier_before_custom_classes() {
        let tag = TagOptions {
            colour: Some("grey".into()),
            classes: Some("app-tag".into()),
            ..TagOptions::text("Inactive")
        };
        assert_eq!(
            tag.render().as_str(),
            r#"<strong class="govuk-tag govuk-tag--grey app-tag">Inactive</strong>"#
        );
    }
}
