use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::components::Component;
use crate::config::Config;
use crate::html::{Element, Markup};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HintOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

crate::impl_merge!(HintOptions {
    replace: [text, html, id, classes],
    nested: [attributes],
});

impl HintOptions {
    pub fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Self::default()
        }
    }

    /// A hint only renders, and is only referenced, when it has content.
    pub fn is_present(&self) -> bool {
        self.text.is_some() || self.html.is_some()
    }
}

impl Component for HintOptions {
    fn render_with(&self, _config: &Config) -> Markup {
        let Some(content) = Markup::from_content(self.text.as_deref(), self.html.as_deref()) else {
            return Markup::new();
        };

        Element::new("div")
            .attr_opt("id", self.id.as_deref())
            .class(ClassList::new("govuk-hint").custom(self.classes.as_deref()))
            .attributes(self.attributes.as_ref())
            .child(content)
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_hint_with_id() {
        let hint = HintOptions {
            id: Some("email-hint".into()),
            ..HintOptions::text("We’ll only use this to send you a receipt")
        };
        assert_eq!(
            hint.render().as_str(),
            r#"<div id="email-hint" class="govuk-hint">We’ll only use this to send you a receipt</div>"#
        );
    }

    #[test]
    fn empty_hint_is_absent() {
        let hint = HintOptions {
            id: Some("x-hint".into()),
            ..HintOptions::default()
        };
        assert!(!hint.is_present());
        assert!(hint.render().is_empty());
    }
}
