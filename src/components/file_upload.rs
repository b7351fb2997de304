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
pub struct FileUploadOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,
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

crate::impl_merge!(FileUploadOptions {
    replace: [id, name, value, disabled, multiple, described_by, classes],
    nested: [label, hint, error_message, form_group, attributes],
});

impl Component for FileUploadOptions {
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

        let control = Element::new("input")
            .class(
                ClassList::new("govuk-file-upload")
                    .modifier_if(chrome.has_error, "govuk-file-upload--error")
                    .custom(self.classes.as_deref()),
            )
            .attr("id", id)
            .attr("name", self.name.as_deref().unwrap_or_default())
            .attr("type", "file")
            .attr_opt("value", self.value.as_deref())
            .flag("disabled", self.disabled.unwrap_or(false))
            .flag("multiple", self.multiple.unwrap_or(false))
            .attr_opt("aria-describedby", chrome.described_by.as_deref())
            .attributes(attributes.as_ref())
            .render();

        let mut body = label_for(id, self.label.as_ref(), config);
        body.push(chrome.hint);
        body.push(chrome.error);
        body.push(control);
        form_group(self.form_group.as_ref(), chrome.has_error, body)
    }
}
