use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::components::Component;
use crate::config::Config;
use crate::html::{Element, Markup};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ErrorMessageOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Prefix read out before the message; an empty string drops it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visually_hidden_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

crate::impl_merge!(ErrorMessageOptions {
    replace: [text, html, id, visually_hidden_text, classes],
    nested: [attributes],
});

impl ErrorMessageOptions {
    pub fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Self::default()
        }
    }

    pub fn is_present(&self) -> bool {
        self.text.is_some() || self.html.is_some()
    }
}

impl Component for ErrorMessageOptions {
    fn render_with(&self, config: &Config) -> Markup {
        let Some(content) = Markup::from_content(self.text.as_deref(), self.html.as_deref()) else {
            return Markup::new();
        };

        let prefix = self
            .visually_hidden_text
            .as_deref()
            .unwrap_or(&config.default_error_message_prefix);

        let mut body = Markup::new();
        if !prefix.is_empty() {
            body.push(
                Element::new("span")
                    .attr("class", "govuk-visually-hidden")
                    .text(&format!("{}:", prefix))
                    .render(),
            );
            body.push_raw(" ");
        }
        body.push(content);

        Element::new("p")
            .attr_opt("id", self.id.as_deref())
            .class(ClassList::new("govuk-error-message").custom(self.classes.as_deref()))
            .attributes(self.attributes.as_ref())
            .child(body)
            .render()
    }
}
