use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::components::Component;
use crate::config::Config;
use crate::html::{Element, Markup};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TabItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TabsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Prefix for generated panel ids: `<prefix>-1`, `<prefix>-2`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<TabItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

crate::impl_merge!(TabsOptions {
    replace: [id, id_prefix, title, items, classes],
    nested: [attributes],
});

impl TabsOptions {
    fn panel_id(&self, item: &TabItem, index: usize) -> String {
        match &item.id {
            Some(id) => id.clone(),
            None => format!("{}-{}", self.id_prefix.as_deref().unwrap_or("tab"), index + 1),
        }
    }
}

impl Component for TabsOptions {
    fn render_with(&self, config: &Config) -> Markup {
        let items = self.items.as_deref().unwrap_or_default();

        let mut list = Markup::new();
        let mut panels = Markup::new();
        for (index, item) in items.iter().enumerate() {
            let panel_id = self.panel_id(item, index);
            let selected = index == 0;

            list.push(
                Element::new("li")
                    .class(
                        ClassList::new("govuk-tabs__list-item")
                            .modifier_if(selected, "govuk-tabs__list-item--selected"),
                    )
                    .child(
                        Element::new("a")
                            .attr("class", "govuk-tabs__tab")
                            .attr("href", format!("#{}", panel_id))
                            .attributes(item.attributes.as_ref())
                            .text(&item.label)
                            .render(),
                    )
                    .render(),
            );
            panels.push(
                Element::new("div")
                    .class(
                        ClassList::new("govuk-tabs__panel")
                            .modifier_if(!selected, "govuk-tabs__panel--hidden"),
                    )
                    .attr("id", panel_id)
                    .child_opt(Markup::from_content(
                        item.panel_text.as_deref(),
                        item.panel_html.as_deref(),
                    ))
                    .render(),
            );
        }

        Element::new("div")
            .attr_opt("id", self.id.as_deref())
            .class(ClassList::new("govuk-tabs").custom(self.classes.as_deref()))
            .attr("data-module", "govuk-tabs")
            .attributes(self.attributes.as_ref())
            .child(
                Element::new("h2")
                    .attr("class", "govuk-tabs__title")
                    .text(self.title.as_deref().unwrap_or(&config.default_tabs_title))
                    .render(),
            )
            .child(Element::new("ul").attr("class", "govuk-tabs__list").child(list).render())
            .child(panels)
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_tab_selected_rest_hidden() {
        let tabs = TabsOptions {
            id_prefix: Some("cases".into()),
            items: Some(vec![
                TabItem {
                    label: "Past day".into(),
                    panel_html: Some("<p>Day</p>".into()),
                    ..TabItem::default()
                },
                TabItem {
                    label: "Past week".into(),
                    id: Some("past-week".into()),
                    panel_text: Some("Week".into()),
                    ..TabItem::default()
                },
            ]),
            ..TabsOptions::default()
        };
        assert_eq!(
            tabs.render().as_str(),
            concat!(
                r#"<div class="govuk-tabs" data-module="govuk-tabs">"#,
                r#"<h2 class="govuk-tabs__title">Contents</h2>"#,
                r#"<ul class="govuk-tabs__list">"#,
                r##"<li class="govuk-tabs__list-item govuk-tabs__list-item--selected"><a class="govuk-tabs__tab" href="#cases-1">Past day</a></li>"##,
                r##"<li class="govuk-tabs__list-item"><a class="govuk-tabs__tab" href="#past-week">Past week</a></li>"##,
                r#"</ul>"#,
                r#"<div class="govuk-tabs__panel" id="cases-1"><p>Day</p></div>"#,
                r#"<div class="govuk-tabs__panel govuk-tabs__panel--hidden" id="past-week">Week</div>"#,
                r#"</div>"#
            )
        );
    }
}
