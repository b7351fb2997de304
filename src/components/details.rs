use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::components::Component;
use crate::config::Config;
use crate::html::{Element, Markup};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetailsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

crate::impl_merge!(DetailsOptions {
    replace: [summary_text, summary_html, text, html, id, open, classes],
    nested: [attributes],
});

impl Component for DetailsOptions {
    fn render_with(&self, _config: &Config) -> Markup {
        let summary = Element::new("summary")
            .attr("class", "govuk-details__summary")
            .child(
                Element::new("span")
                    .attr("class", "govuk-details__summary-text")
                    .child_opt(Markup::from_content(
                        self.summary_text.as_deref(),
                        self.summary_html.as_deref(),
                    ))
                    .render(),
            )
            .render();
        let text = Element::new("div")
            .attr("class", "govuk-details__text")
            .child_opt(Markup::from_content(self.text.as_deref(), self.html.as_deref()))
            .render();

        Element::new("details")
            .attr_opt("id", self.id.as_deref())
            .class(ClassList::new("govuk-details").custom(self.classes.as_deref()))
            .flag("open", self.open.unwrap_or(false))
            .attributes(self.attributes.as_ref())
            .child(summary)
            .child(text)
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_open_details() {
        let details = DetailsOptions {
            summary_text: Some("Help with nationality".into()),
            text: Some("We need to know your nationality.".into()),
            open: Some(true),
            ..DetailsOptions::default()
        };
        assert_eq!(
            details.render().as_str(),
            concat!(
                r#"<details class="govuk-details" open="open">"#,
                r#"<summary class="govuk-details__summary"><span class="govuk-details__summary-text">Help with nationality</span></summary>"#,
                r#"<div class="govuk-details__text">We need to know your nationality.</div>"#,
                r#"</details>"#
            )
        );
    }
}
