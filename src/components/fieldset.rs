use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::components::field::split_described_by;
use crate::components::Component;
use crate::config::Config;
use crate::html::{Element, Markup};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LegendOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_page_heading: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
}

crate::impl_merge!(LegendOptions {
    replace: [text, html, is_page_heading, classes],
    nested: [],
});

impl LegendOptions {
    pub fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Self::default()
        }
    }

    fn render(&self) -> Option<Markup> {
        let content = Markup::from_content(self.text.as_deref(), self.html.as_deref())?;
        let content = if self.is_page_heading.unwrap_or(false) {
            Element::new("h1")
                .attr("class", "govuk-fieldset__heading")
                .child(content)
                .render()
        } else {
            content
        };
        Some(
            Element::new("legend")
                .class(ClassList::new("govuk-fieldset__legend").custom(self.classes.as_deref()))
                .child(content)
                .render(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldsetOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub described_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendOptions>,
    /// Body content when the fieldset is used on its own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

crate::impl_merge!(FieldsetOptions {
    replace: [described_by, role, html, classes],
    nested: [legend, attributes],
});

impl FieldsetOptions {
    /// Render around `body`, which follows the legend and any `html` content.
    pub fn wrap(&self, body: Markup) -> Markup {
        let (described_by, attributes) =
            split_described_by(self.described_by.as_deref(), self.attributes.as_ref());
        Element::new("fieldset")
            .class(ClassList::new("govuk-fieldset").custom(self.classes.as_deref()))
            .attr_opt("role", self.role.as_deref())
            .attr_opt("aria-describedby", described_by)
            .attributes(attributes.as_ref())
            .child_opt(self.legend.as_ref().and_then(LegendOptions::render))
            .child_opt(self.html.as_deref().map(Markup::raw))
            .child(body)
            .render()
    }
}

impl Component for FieldsetOptions {
    fn render_with(&self, _config: &Config) -> Markup {
        self.wrap(Markup::new())
    }
}
