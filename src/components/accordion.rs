use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::components::Component;
use crate::config::{heading_tag, Config};
use crate::html::{Element, Markup};
use crate::merge::Merge;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccordionSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_html: Option<String>,
    /// Plain text content is wrapped in a `govuk-body` paragraph.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccordionOptions {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<AccordionSection>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

impl Merge for AccordionOptions {
    fn merge(self, overrides: Self) -> Self {
        Self {
            id: if overrides.id.is_empty() { self.id } else { overrides.id },
            heading_level: overrides.heading_level.or(self.heading_level),
            items: overrides.items.or(self.items),
            classes: overrides.classes.or(self.classes),
            attributes: self.attributes.merge(overrides.attributes),
        }
    }
}

impl AccordionOptions {
    fn render_section(&self, section: &AccordionSection, number: usize, level: u8) -> Markup {
        let heading = Element::new(heading_tag(level))
            .attr("class", "govuk-accordion__section-heading")
            .child(
                Element::new("span")
                    .attr("class", "govuk-accordion__section-button")
                    .attr("id", format!("{}-heading-{}", self.id, number))
                    .child_opt(Markup::from_content(
                        section.heading_text.as_deref(),
                        section.heading_html.as_deref(),
                    ))
                    .render(),
            )
            .render();
        let summary = Markup::from_content(section.summary_text.as_deref(), section.summary_html.as_deref())
            .map(|summary| {
                Element::new("div")
                    .attr("class", "govuk-accordion__section-summary govuk-body")
                    .attr("id", format!("{}-summary-{}", self.id, number))
                    .child(summary)
                    .render()
            });
        let header = Element::new("div")
            .attr("class", "govuk-accordion__section-header")
            .child(heading)
            .child_opt(summary)
            .render();

        let content = match (&section.content_html, &section.content_text) {
            (Some(html), _) => Some(Markup::raw(html.as_str())),
            (None, Some(text)) => Some(Element::new("p").attr("class", "govuk-body").text(text).render()),
            (None, None) => None,
        };
        let body = Element::new("div")
            .attr("id", format!("{}-content-{}", self.id, number))
            .attr("class", "govuk-accordion__section-content")
            .child_opt(content)
            .render();

        Element::new("div")
            .class(
                ClassList::new("govuk-accordion__section")
                    .modifier_if(
                        section.expanded.unwrap_or(false),
                        "govuk-accordion__section--expanded",
                    )
                    .custom(section.classes.as_deref()),
            )
            .child(header)
            .child(body)
            .render()
    }
}

impl Component for AccordionOptions {
    fn render_with(&self, config: &Config) -> Markup {
        let level = self.heading_level.unwrap_or(config.default_accordion_heading_level);
        let sections: Markup = self
            .items
            .iter()
            .flatten()
            .enumerate()
            .map(|(index, section)| self.render_section(section, index + 1, level))
            .collect();

        Element::new("div")
            .class(ClassList::new("govuk-accordion").custom(self.classes.as_deref()))
            .attr("data-module", "govuk-accordion")
            .attr("id", self.id.as_str())
            .attributes(self.attributes.as_ref())
            .child(sections)
            .render()
    }
}
