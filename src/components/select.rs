use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::components::field::{label_for, split_described_by, Chrome};
use crate::components::{
    form_group, Component, ErrorMessageOptions, FormGroupOptions, HintOptions, LabelOptions,
};
use crate::config::Config;
use crate::html::{Element, Markup};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectItem {
    #[serde(deserialize_with = "crate::scalar::option", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(deserialize_with = "crate::scalar::string")]
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

impl SelectItem {
    pub fn new(value: &str, text: &str) -> Self {
        Self {
            value: Some(value.to_string()),
            text: text.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<SelectItem>>,
    /// Current value; selects the matching item unless an item sets `selected`.
    #[serde(deserialize_with = "crate::scalar::option", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub described_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<HintOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<ErrorMessageOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_group: Option<FormGroupOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

crate::impl_merge!(SelectOptions {
    replace: [id, name, items, value, disabled, described_by, classes],
    nested: [label, hint, error_message, form_group, attributes],
});

impl SelectOptions {
    fn is_selected(&self, item: &SelectItem) -> bool {
        match item.selected {
            Some(selected) => selected,
            None => match (&self.value, &item.value) {
                (Some(current), Some(value)) => current == value,
                (Some(current), None) => *current == item.text,
                (None, _) => false,
            },
        }
    }
}

impl Component for SelectOptions {
    fn render_with(&self, config: &Config) -> Markup {
        let id = self
            .id
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default();
        let (explicit, attributes) =
            split_described_by(self.described_by.as_deref(), self.attributes.as_ref());
        let chrome = Chrome::new(
            id,
            explicit.as_deref(),
            self.hint.as_ref(),
            self.error_message.as_ref(),
            config,
        );

        let options: Markup = self
            .items
            .iter()
            .flatten()
            .map(|item| {
                Element::new("option")
                    .attr_opt("value", item.value.as_deref())
                    .flag("selected", self.is_selected(item))
                    .flag("disabled", item.disabled.unwrap_or(false))
                    .attributes(item.attributes.as_ref())
                    .text(&item.text)
                    .render()
            })
            .collect();

        let control = Element::new("select")
            .class(
                ClassList::new("govuk-select")
                    .modifier_if(chrome.has_error, "govuk-select--error")
                    .custom(self.classes.as_deref()),
            )
            .attr("id", id)
            .attr("name", self.name.as_deref().unwrap_or_default())
            .flag("disabled", self.disabled.unwrap_or(false))
            .attr_opt("aria-describedby", chrome.described_by.as_deref())
            .attributes(attributes.as_ref())
            .child(options)
            .render();

        let mut body = label_for(id, self.label.as_ref(), config);
        body.push(chrome.hint);
        body.push(chrome.error);
        body.push(control);
        form_group(self.form_group.as_ref(), chrome.has_error, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn selects_item_matching_value() {
        let select = SelectOptions {
            name: Some("sort".into()),
            value: Some("updated".into()),
            items: Some(vec![
                SelectItem::new("published", "Recently published"),
                SelectItem::new("updated", "Recently updated"),
                SelectItem {
                    disabled: Some(true),
                    ..SelectItem::new("views", "Most views")
                },
            ]),
            label: Some(LabelOptions::text("Sort by")),
            ..SelectOptions::default()
        };
        assert_eq!(
            select.render().as_str(),
            concat!(
                r#"<div class="govuk-form-group">"#,
                r#"<label class="govuk-label" for="sort">Sort by</label>"#,
                r#"<select class="govuk-select" id="sort" name="sort">"#,
                r#"<option value="published">Recently published</option>"#,
                r#"<option value="updated" selected="selected">Recently updated</option>"#,
                r#"<option value="views" disabled="disabled">Most views</option>"#,
                r#"</select></div>"#
            )
        );
    }

    #[test]
    fn explicit_selected_flag_wins() {
        let select = SelectOptions {
            name: Some("sort".into()),
            value: Some("a".into()),
            items: Some(vec![
                SelectItem {
                    selected: Some(false),
                    ..SelectItem::new("a", "A")
                },
                SelectItem {
                    selected: Some(true),
                    ..SelectItem::new("b", "B")
                },
            ]),
            ..SelectOptions::default()
        };
        let html = select.render();
        assert!(html.as_str().contains(r#"<option value="a">A</option>"#));
        assert!(html
            .as_str()
            .contains(r#"<option value="b" selected="selected">B</option>"#));
    }
}
