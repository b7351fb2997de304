use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::components::Component;
use crate::config::Config;
use crate::html::{Element, Markup};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummaryListText {
    #[serde(deserialize_with = "crate::scalar::option", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummaryListAction {
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Appended in a visually hidden span so each link reads uniquely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visually_hidden_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummaryListActions {
    pub items: Vec<SummaryListAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummaryListRow {
    pub key: SummaryListText,
    pub value: SummaryListText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<SummaryListActions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
}

impl SummaryListRow {
    fn has_actions(&self) -> bool {
        self.actions.as_ref().is_some_and(|a| !a.items.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummaryListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<SummaryListRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

crate::impl_merge!(SummaryListOptions {
    replace: [rows, classes],
    nested: [attributes],
});

fn action_link(action: &SummaryListAction) -> Markup {
    let hidden = action
        .visually_hidden_text
        .as_deref()
        .filter(|text| !text.is_empty())
        .map(|text| {
            Element::new("span")
                .attr("class", "govuk-visually-hidden")
                .text(&format!(" {}", text))
                .render()
        });

    Element::new("a")
        .class(ClassList::new("govuk-link").custom(action.classes.as_deref()))
        .attr("href", action.href.as_str())
        .attributes(action.attributes.as_ref())
        .child_opt(Markup::from_content(action.text.as_deref(), action.html.as_deref()))
        .child_opt(hidden)
        .render()
}

fn render_actions(actions: &SummaryListActions) -> Markup {
    let body = match actions.items.as_slice() {
        [single] => action_link(single),
        many => {
            let items: Markup = many
                .iter()
                .map(|action| {
                    Element::new("li")
                        .attr("class", "govuk-summary-list__actions-list-item")
                        .child(action_link(action))
                        .render()
                })
                .collect();
            Element::new("ul")
                .attr("class", "govuk-summary-list__actions-list")
                .child(items)
                .render()
        }
    };

    Element::new("dd")
        .class(ClassList::new("govuk-summary-list__actions").custom(actions.classes.as_deref()))
        .child(body)
        .render()
}

impl Component for SummaryListOptions {
    fn render_with(&self, _config: &Config) -> Markup {
        let rows = self.rows.as_deref().unwrap_or_default();
        let any_actions = rows.iter().any(SummaryListRow::has_actions);

        let body: Markup = rows
            .iter()
            .map(|row| {
                let key = Element::new("dt")
                    .class(ClassList::new("govuk-summary-list__key").custom(row.key.classes.as_deref()))
                    .child_opt(Markup::from_content(row.key.text.as_deref(), row.key.html.as_deref()))
                    .render();
                let value = Element::new("dd")
                    .class(
                        ClassList::new("govuk-summary-list__value")
                            .custom(row.value.classes.as_deref()),
                    )
                    .child_opt(Markup::from_content(
                        row.value.text.as_deref(),
                        row.value.html.as_deref(),
                    ))
                    .render();
                let actions = row
                    .actions
                    .as_ref()
                    .filter(|_| row.has_actions())
                    .map(render_actions);

                Element::new("div")
                    .class(
                        ClassList::new("govuk-summary-list__row")
                            .modifier_if(
                                any_actions && !row.has_actions(),
                                "govuk-summary-list__row--no-actions",
                            )
                            .custom(row.classes.as_deref()),
                    )
                    .child(key)
                    .child(value)
                    .child_opt(actions)
                    .render()
            })
            .collect();

        Element::new("dl")
            .class(ClassList::new("govuk-summary-list").custom(self.classes.as_deref()))
            .attributes(self.attributes.as_ref())
            .child(body)
            .render()
    }
}
