use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::components::Component;
use crate::config::Config;
use crate::html::{Element, Markup};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(rename = "for")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_page_heading: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

crate::impl_merge!(LabelOptions {
    replace: [text, html, for_id, is_page_heading, classes],
    nested: [attributes],
});

impl LabelOptions {
    pub fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Self::default()
        }
    }
}

impl Component for LabelOptions {
    fn render_with(&self, _config: &Config) -> Markup {
        let Some(content) = Markup::from_content(self.text.as_deref(), self.html.as_deref()) else {
            tracing::trace!("label has no content, omitted");
            return Markup::new();
        };

        let label = Element::new("label")
            .class(ClassList::new("govuk-label").custom(self.classes.as_deref()))
            .attr_opt("for", self.for_id.as_deref())
            .attributes(self.attributes.as_ref())
            .child(content)
            .render();

        if self.is_page_heading.unwrap_or(false) {
            Element::new("h1")
                .attr("class", "govuk-label-wrapper")
                .child(label)
                .render()
        } else {
            label
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_label_for_field() {
        let label = LabelOptions {
            for_id: Some("email".into()),
            classes: Some("govuk-label--m".into()),
            ..LabelOptions::text("Email address")
        };
        assert_eq!(
            label.render().as_str(),
            r#"<label class="govuk-label govuk-label--m" for="email">Email address</label>"#
        );
    }

    #[test]
    fn wraps_page_heading() {
        let label = LabelOptions {
            is_page_heading: Some(true),
            ..LabelOptions::text("Name")
        };
        assert_eq!(
            label.render().as_str(),
            r#"<h1 class="govuk-label-wrapper"><label class="govuk-label">Name</label></h1>"#
        );
    }

    #[test]
    fn no_content_renders_nothing() {
        assert!(LabelOptions::default().render().is_empty());
    }
}
