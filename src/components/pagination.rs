use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::components::Component;
use crate::config::Config;
use crate::html::{Element, Markup};

const PREV_ICON: &str = concat!(
    r#"<svg class="govuk-pagination__icon govuk-pagination__icon--prev" xmlns="http://www.w3.org/2000/svg" height="13" width="15" aria-hidden="true" focusable="false" viewBox="0 0 15 13">"#,
    r#"<path d="m6.5938-0.0078125-6.7266 6.7266 6.7441 6.4062 1.377-1.449-4.1856-3.9768h12.896v-2h-12.984l4.2931-4.293-1.414-1.414z"></path>"#,
    r#"</svg>"#
);

const NEXT_ICON: &str = concat!(
    r#"<svg class="govuk-pagination__icon govuk-pagination__icon--next" xmlns="http://www.w3.org/2000/svg" height="13" width="15" aria-hidden="true" focusable="false" viewBox="0 0 15 13">"#,
    r#"<path d="m8.107-0.0078125-1.4136 1.414 4.2926 4.293h-12.986v2h12.896l-4.1855 3.9766 1.377 1.4492 6.7441-6.4062-6.7246-6.7266z"></path>"#,
    r#"</svg>"#
);

/// One entry of the numbered list. An entry marked `ellipsis` ignores the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationItem {
    #[serde(deserialize_with = "crate::scalar::option", skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visually_hidden_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ellipsis: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

impl PaginationItem {
    pub fn page(number: u32, href: &str) -> Self {
        Self {
            number: Some(number.to_string()),
            href: Some(href.to_string()),
            ..Self::default()
        }
    }

    pub fn ellipsis() -> Self {
        Self {
            ellipsis: Some(true),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationLink {
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Shown under the link text in block style.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<PaginationItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<PaginationLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PaginationLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landmark_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

crate::impl_merge!(PaginationOptions {
    replace: [items, previous, next, landmark_label, classes],
    nested: [attributes],
});

#[derive(Clone, Copy, PartialEq)]
enum Direction {
    Previous,
    Next,
}

impl Direction {
    fn key(self) -> &'static str {
        match self {
            Direction::Previous => "prev",
            Direction::Next => "next",
        }
    }
}

fn render_item(item: &PaginationItem) -> Markup {
    if item.ellipsis.unwrap_or(false) {
        return Element::new("li")
            .attr("class", "govuk-pagination__item govuk-pagination__item--ellipses")
            .child(Markup::raw("&ctdot;"))
            .render();
    }

    let number = item.number.as_deref().unwrap_or_default();
    let current = item.current.unwrap_or(false);
    let label = item
        .visually_hidden_text
        .clone()
        .unwrap_or_else(|| format!("Page {}", number));

    let link = Element::new("a")
        .attr("class", "govuk-link govuk-pagination__link")
        .attr("href", item.href.as_deref().unwrap_or_default())
        .attr("aria-label", label)
        .attr_opt("aria-current", current.then_some("page"))
        .attributes(item.attributes.as_ref())
        .text(number)
        .render();

    Element::new("li")
        .class(
            ClassList::new("govuk-pagination__item")
                .modifier_if(current, "govuk-pagination__item--current"),
        )
        .child(link)
        .render()
}

fn render_link(link: &PaginationLink, direction: Direction, block: bool, config: &Config) -> Markup {
    let fallback = match direction {
        Direction::Previous => &config.default_pagination_previous_text,
        Direction::Next => &config.default_pagination_next_text,
    };
    let label = link.label_text.as_deref().filter(|_| block);

    let mut title = Markup::from_content(link.text.as_deref(), link.html.as_deref())
        .unwrap_or_else(|| Markup::text(fallback));
    if link.text.is_none() && link.html.is_none() {
        title.push(
            Element::new("span")
                .attr("class", "govuk-visually-hidden")
                .text(" page")
                .render(),
        );
    }
    let title = Element::new("span")
        .class(
            ClassList::new("govuk-pagination__link-title")
                .modifier_if(block && label.is_none(), "govuk-pagination__link-title--decorated"),
        )
        .child(title)
        .render();

    let label = label.map(|label| {
        let mut markup = Element::new("span")
            .attr("class", "govuk-visually-hidden")
            .text(":")
            .render();
        markup.push(
            Element::new("span")
                .attr("class", "govuk-pagination__link-label")
                .text(label)
                .render(),
        );
        markup
    });

    let icon = Markup::raw(match direction {
        Direction::Previous => PREV_ICON,
        Direction::Next => NEXT_ICON,
    });

    // The next arrow trails its text unless links are stacked.
    let icon_first = direction == Direction::Previous || block;
    let mut body = Markup::new();
    if icon_first {
        body.push(icon.clone());
    }
    body.push(title);
    if let Some(label) = label {
        body.push(label);
    }
    if !icon_first {
        body.push(icon);
    }

    Element::new("div")
        .attr("class", format!("govuk-pagination__{}", direction.key()))
        .child(
            Element::new("a")
                .attr("class", "govuk-link govuk-pagination__link")
                .attr("href", link.href.as_str())
                .attr("rel", direction.key())
                .attributes(link.attributes.as_ref())
                .child(body)
                .render(),
        )
        .render()
}

impl Component for PaginationOptions {
    fn render_with(&self, config: &Config) -> Markup {
        let items = self.items.as_deref().unwrap_or_default();
        let block = items.is_empty();

        let list = (!block).then(|| {
            Element::new("ul")
                .attr("class", "govuk-pagination__list")
                .child(items.iter().map(render_item).collect())
                .render()
        });

        Element::new("nav")
            .class(
                ClassList::new("govuk-pagination")
                    .modifier_if(block, "govuk-pagination--block")
                    .custom(self.classes.as_deref()),
            )
            .attr("role", "navigation")
            .attr(
                "aria-label",
                self.landmark_label
                    .as_deref()
                    .unwrap_or(&config.default_pagination_landmark),
            )
            .attributes(self.attributes.as_ref())
            .child_opt(
                self.previous
                    .as_ref()
                    .map(|link| render_link(link, Direction::Previous, block, config)),
            )
            .child_opt(list)
            .child_opt(
                self.next
                    .as_ref()
                    .map(|link| render_link(link, Direction::Next, block, config)),
            )
            .render()
    }
}
