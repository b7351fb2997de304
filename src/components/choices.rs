//! Items shared by radios and checkboxes.

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::components::field::split_described_by;
use crate::components::{Component, HintOptions};
use crate::config::Config;
use crate::described_by;
use crate::html::{Element, Markup};
use crate::identity;
use crate::merge::Merge;

/// A separator such as "or" between items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChoiceDivider {
    pub divider: String,
}

/// Content revealed under an item while it is checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConditionalReveal {
    pub html: String,
    /// Defaults to `conditional-<item id>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceBehaviour {
    /// Checking this box unchecks every other box in the group.
    Exclusive,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ItemLabel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChoiceOption {
    #[serde(deserialize_with = "crate::scalar::string")]
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Defaults to `<group id>_<sanitized value>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<ItemLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<HintOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional: Option<ConditionalReveal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behaviour: Option<ChoiceBehaviour>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

impl ChoiceOption {
    pub fn new(value: &str, text: &str) -> Self {
        Self {
            value: value.to_string(),
            text: Some(text.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceItem {
    Divider(ChoiceDivider),
    Option(ChoiceOption),
}

impl From<ChoiceOption> for ChoiceItem {
    fn from(option: ChoiceOption) -> Self {
        ChoiceItem::Option(option)
    }
}

impl ChoiceItem {
    pub fn divider(text: &str) -> Self {
        ChoiceItem::Divider(ChoiceDivider {
            divider: text.to_string(),
        })
    }

    pub fn option(&self) -> Option<&ChoiceOption> {
        match self {
            ChoiceItem::Option(option) => Some(option),
            ChoiceItem::Divider(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChoiceKind {
    Radio,
    Checkbox,
}

impl ChoiceKind {
    fn block(self) -> &'static str {
        match self {
            ChoiceKind::Radio => "govuk-radios",
            ChoiceKind::Checkbox => "govuk-checkboxes",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            ChoiceKind::Radio => "radio",
            ChoiceKind::Checkbox => "checkbox",
        }
    }
}

pub(crate) struct ChoiceGroup<'a> {
    pub kind: ChoiceKind,
    pub base_id: &'a str,
    pub name: &'a str,
    pub items: &'a [ChoiceItem],
    /// Indexes into `items` of the checked options.
    pub checked: Vec<usize>,
    /// The group's describedby, given to every control when there is no fieldset.
    pub described_by: Option<&'a str>,
    pub classes: Option<&'a str>,
    pub attributes: Option<&'a Attributes>,
}

impl ChoiceGroup<'_> {
    pub fn render(&self, config: &Config) -> Markup {
        let block = self.kind.block();
        let body: Markup = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                ChoiceItem::Divider(divider) => Element::new("div")
                    .attr("class", format!("{}__divider", block))
                    .text(&divider.divider)
                    .render(),
                ChoiceItem::Option(option) => {
                    self.render_option(option, self.checked.contains(&index), config)
                }
            })
            .collect();

        Element::new("div")
            .class(ClassList::new(block).custom(self.classes))
            .attr("data-module", block)
            .attributes(self.attributes)
            .child(body)
            .render()
    }

    fn render_option(&self, option: &ChoiceOption, checked: bool, config: &Config) -> Markup {
        let block = self.kind.block();
        let id = option
            .id
            .clone()
            .unwrap_or_else(|| identity::item_id(self.base_id, &option.value));

        let hint = option
            .hint
            .as_ref()
            .filter(|hint| hint.is_present())
            .map(|hint| {
                HintOptions {
                    id: Some(format!("{}-item-hint", id)),
                    classes: Some(format!("{}__hint", block)),
                    ..HintOptions::default()
                }
                .merge(hint.clone())
            });
        let hint_id = hint.as_ref().and_then(|hint| hint.id.clone());
        let (own, attributes) = split_described_by(None, option.attributes.as_ref());
        let described_by = described_by::join([self.described_by, own.as_deref(), hint_id.as_deref()]);

        let conditional = option
            .conditional
            .as_ref()
            .filter(|conditional| !conditional.html.is_empty());
        let conditional_id = conditional.map(|conditional| {
            conditional
                .id
                .clone()
                .unwrap_or_else(|| format!("conditional-{}", id))
        });

        let input = Element::new("input")
            .attr("class", format!("{}__input", block))
            .attr("id", id.as_str())
            .attr("name", option.name.as_deref().unwrap_or(self.name))
            .attr("type", self.kind.input_type())
            .attr("value", option.value.as_str())
            .flag("checked", checked)
            .flag("disabled", option.disabled.unwrap_or(false))
            .attr_opt("data-aria-controls", conditional_id.as_deref())
            .attr_opt("aria-describedby", described_by)
            .attr_opt(
                "data-behaviour",
                (option.behaviour == Some(ChoiceBehaviour::Exclusive)).then_some("exclusive"),
            )
            .attributes(attributes.as_ref())
            .render();

        let label = option.label.clone().unwrap_or_default();
        let label = Element::new("label")
            .class(
                ClassList::new("govuk-label")
                    .base(&format!("{}__label", block))
                    .custom(label.classes.as_deref()),
            )
            .attr("for", id.as_str())
            .attributes(label.attributes.as_ref())
            .child_opt(Markup::from_content(option.text.as_deref(), option.html.as_deref()))
            .render();

        let mut markup = Element::new("div")
            .attr("class", format!("{}__item", block))
            .child(input)
            .child(label)
            .child_opt(hint.map(|hint| hint.render_with(config)))
            .render();

        if let (Some(conditional), Some(panel_id)) = (conditional, conditional_id) {
            markup.push(
                Element::new("div")
                    .class(
                        ClassList::new(&format!("{}__conditional", block))
                            .modifier_if(!checked, &format!("{}__conditional--hidden", block)),
                    )
                    .attr("id", panel_id)
                    .child(Markup::raw(conditional.html.as_str()))
                    .render(),
            );
        }
        markup
    }
}
