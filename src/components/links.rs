//! Back link, skip link and breadcrumbs.

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::components::Component;
use crate::config::Config;
use crate::html::{Element, Markup};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackLinkOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

crate::impl_merge!(BackLinkOptions {
    replace: [text, html, href, classes],
    nested: [attributes],
});

impl Component for BackLinkOptions {
    fn render_with(&self, config: &Config) -> Markup {
        let content = Markup::from_content(self.text.as_deref(), self.html.as_deref())
            .unwrap_or_else(|| Markup::text(&config.default_back_link_text));

        Element::new("a")
            .attr("href", self.href.as_deref().unwrap_or(&config.default_back_link_href))
            .class(ClassList::new("govuk-back-link").custom(self.classes.as_deref()))
            .attributes(self.attributes.as_ref())
            .child(content)
            .render()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SkipLinkOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

crate::impl_merge!(SkipLinkOptions {
    replace: [text, html, href, classes],
    nested: [attributes],
});

impl Component for SkipLinkOptions {
    fn render_with(&self, config: &Config) -> Markup {
        let content = Markup::from_content(self.text.as_deref(), self.html.as_deref())
            .unwrap_or_else(|| Markup::text(&config.default_skip_link_text));

        Element::new("a")
            .attr("href", self.href.as_deref().unwrap_or(&config.default_skip_link_href))
            .class(ClassList::new("govuk-skip-link").custom(self.classes.as_deref()))
            .attr("data-module", "govuk-skip-link")
            .attributes(self.attributes.as_ref())
            .child(content)
            .render()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BreadcrumbItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Items without a link are the current page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BreadcrumbsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<BreadcrumbItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapse_on_mobile: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

crate::impl_merge!(BreadcrumbsOptions {
    replace: [items, collapse_on_mobile, label_text, classes],
    nested: [attributes],
});

impl Component for BreadcrumbsOptions {
    fn render_with(&self, _config: &Config) -> Markup {
        let items: Markup = self
            .items
            .iter()
            .flatten()
            .map(|item| {
                let content = Markup::from_content(item.text.as_deref(), item.html.as_deref())
                    .unwrap_or_default();
                match &item.href {
                    Some(href) => Element::new("li")
                        .attr("class", "govuk-breadcrumbs__list-item")
                        .child(
                            Element::new("a")
                                .attr("class", "govuk-breadcrumbs__link")
                                .attr("href", href)
                                .attributes(item.attributes.as_ref())
                                .child(content)
                                .render(),
                        )
                        .render(),
                    None => Element::new("li")
                        .attr("class", "govuk-breadcrumbs__list-item")
                        .attr("aria-current", "page")
                        .child(content)
                        .render(),
                }
            })
            .collect();

        Element::new("nav")
            .class(
                ClassList::new("govuk-breadcrumbs")
                    .modifier_if(
                        self.collapse_on_mobile.unwrap_or(false),
                        "govuk-breadcrumbs--collapse-on-mobile",
                    )
                    .custom(self.classes.as_deref()),
            )
            .attr("aria-label", self.label_text.as_deref().unwrap_or("Breadcrumb"))
            .attributes(self.attributes.as_ref())
            .child(
                Element::new("ol")
                    .attr("class", "govuk-breadcrumbs__list")
                    .child(items)
                    .render(),
            )
            .render()
    }
}
