//! YAML documents naming a component and its options.
//!
//! ```yaml
//! component: button
//! options:
//!   text: Save and continue
//! ```
//!
//! Field entry points take the attribute and an optional model and form key:
//!
//! ```yaml
//! component: text_field
//! options:
//!   attribute: email
//!   form: person
//!   model:
//!     values: { email: ada@example.com }
//!   options:
//!     hint: { text: We will not share it }
//! ```
//!
//! A document may also be a list of such entries, rendered in order.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::components::*;
use crate::config::Config;
use crate::error::{ComponentError, ComponentResult};
use crate::fields;
use crate::html::Markup;
use crate::model::{FieldContext, Record};

/// A field entry point's attribute, bindings and caller options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldSpec<T> {
    pub attribute: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<Record>,
    /// Param key of the form; the model, if any, becomes its object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
    pub options: T,
}

/// Bindings for helpers that read a whole model rather than one attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelSpec<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<Record>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
    pub options: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "component", content = "options", rename_all = "snake_case")]
pub enum ComponentSpec {
    Accordion(AccordionOptions),
    BackLink(BackLinkOptions),
    Breadcrumbs(BreadcrumbsOptions),
    Button(ButtonOptions),
    Checkboxes(CheckboxesOptions),
    DateInput(DateInputOptions),
    Details(DetailsOptions),
    ErrorMessage(ErrorMessageOptions),
    ErrorSummary(ErrorSummaryOptions),
    Fieldset(FieldsetOptions),
    FileUpload(FileUploadOptions),
    Hint(HintOptions),
    Input(InputOptions),
    InsetText(InsetTextOptions),
    Label(LabelOptions),
    NotificationBanner(NotificationBannerOptions),
    Pagination(PaginationOptions),
    Panel(PanelOptions),
    PhaseBanner(PhaseBannerOptions),
    Radios(RadiosOptions),
    Select(SelectOptions),
    SkipLink(SkipLinkOptions),
    SummaryList(SummaryListOptions),
    Table(TableOptions),
    Tabs(TabsOptions),
    Tag(TagOptions),
    Textarea(TextareaOptions),
    WarningText(WarningTextOptions),
    TextField(FieldSpec<InputOptions>),
    TextareaField(FieldSpec<TextareaOptions>),
    SelectField(FieldSpec<SelectOptions>),
    RadiosField(FieldSpec<RadiosOptions>),
    CheckboxesField(FieldSpec<CheckboxesOptions>),
    DateField(FieldSpec<DateInputOptions>),
    FileField(FieldSpec<FileUploadOptions>),
    ErrorSummaryFor(ModelSpec<ErrorSummaryOptions>),
}

/// Every `component` name a document may use.
pub const COMPONENT_NAMES: &[&str] = &[
    "accordion",
    "back_link",
    "breadcrumbs",
    "button",
    "checkboxes",
    "date_input",
    "details",
    "error_message",
    "error_summary",
    "fieldset",
    "file_upload",
    "hint",
    "input",
    "inset_text",
    "label",
    "notification_banner",
    "pagination",
    "panel",
    "phase_banner",
    "radios",
    "select",
    "skip_link",
    "summary_list",
    "table",
    "tabs",
    "tag",
    "textarea",
    "warning_text",
    "text_field",
    "textarea_field",
    "select_field",
    "radios_field",
    "checkboxes_field",
    "date_field",
    "file_field",
    "error_summary_for",
];

/// Run `f` against the context described by a model and form key.
fn with_context<R>(model: Option<&Record>, form: Option<&str>, f: impl FnOnce(FieldContext<'_>) -> R) -> R {
    match (model, form) {
        (model, Some(param_key)) => {
            let record = Record {
                param_key: param_key.to_string(),
                ..model.cloned().unwrap_or_default()
            };
            f(FieldContext::with_form(&record))
        }
        (Some(model), None) => f(FieldContext::with_model(model)),
        (None, None) => f(FieldContext::none()),
    }
}

impl<T: Clone> FieldSpec<T> {
    fn build(&self, helper: impl FnOnce(&str, FieldContext<'_>, T) -> T) -> T {
        with_context(self.model.as_ref(), self.form.as_deref(), |context| {
            helper(&self.attribute, context, self.options.clone())
        })
    }
}

impl Component for ComponentSpec {
    fn render_with(&self, config: &Config) -> Markup {
        match self {
            ComponentSpec::Accordion(o) => o.render_with(config),
            ComponentSpec::BackLink(o) => o.render_with(config),
            ComponentSpec::Breadcrumbs(o) => o.render_with(config),
            ComponentSpec::Button(o) => o.render_with(config),
            ComponentSpec::Checkboxes(o) => o.render_with(config),
            ComponentSpec::DateInput(o) => o.render_with(config),
            ComponentSpec::Details(o) => o.render_with(config),
            ComponentSpec::ErrorMessage(o) => o.render_with(config),
            ComponentSpec::ErrorSummary(o) => o.render_with(config),
            ComponentSpec::Fieldset(o) => o.render_with(config),
            ComponentSpec::FileUpload(o) => o.render_with(config),
            ComponentSpec::Hint(o) => o.render_with(config),
            ComponentSpec::Input(o) => o.render_with(config),
            ComponentSpec::InsetText(o) => o.render_with(config),
            ComponentSpec::Label(o) => o.render_with(config),
            ComponentSpec::NotificationBanner(o) => o.render_with(config),
            ComponentSpec::Pagination(o) => o.render_with(config),
            ComponentSpec::Panel(o) => o.render_with(config),
            ComponentSpec::PhaseBanner(o) => o.render_with(config),
            ComponentSpec::Radios(o) => o.render_with(config),
            ComponentSpec::Select(o) => o.render_with(config),
            ComponentSpec::SkipLink(o) => o.render_with(config),
            ComponentSpec::SummaryList(o) => o.render_with(config),
            ComponentSpec::Table(o) => o.render_with(config),
            ComponentSpec::Tabs(o) => o.render_with(config),
            ComponentSpec::Tag(o) => o.render_with(config),
            ComponentSpec::Textarea(o) => o.render_with(config),
            ComponentSpec::WarningText(o) => o.render_with(config),
            ComponentSpec::TextField(spec) => spec.build(fields::text_field).render_with(config),
            ComponentSpec::TextareaField(spec) => spec.build(fields::textarea_field).render_with(config),
            ComponentSpec::SelectField(spec) => spec.build(fields::select_field).render_with(config),
            ComponentSpec::RadiosField(spec) => spec.build(fields::radios_field).render_with(config),
            ComponentSpec::CheckboxesField(spec) => {
                spec.build(fields::checkboxes_field).render_with(config)
            }
            ComponentSpec::DateField(spec) => spec.build(fields::date_field).render_with(config),
            ComponentSpec::FileField(spec) => spec.build(fields::file_field).render_with(config),
            ComponentSpec::ErrorSummaryFor(spec) => {
                with_context(spec.model.as_ref(), spec.form.as_deref(), |context| {
                    render_error_summary_for(context, spec.options.clone(), config)
                })
            }
        }
    }
}

fn check_entry(value: &Value) -> ComponentResult<()> {
    let name = match value.get("component") {
        Some(Value::String(name)) => name,
        Some(_) | None => return Err(ComponentError::MissingComponentName),
    };
    if !COMPONENT_NAMES.contains(&name.as_str()) {
        return Err(ComponentError::UnknownComponent { name: name.clone() });
    }
    Ok(())
}

fn entry_from_value(mut value: Value) -> ComponentResult<ComponentSpec> {
    check_entry(&value)?;
    // Every options record is fully defaulted, so `options` may be left out.
    if let Value::Mapping(entry) = &mut value {
        if entry.get("options").map_or(true, Value::is_null) {
            entry.insert(Value::from("options"), Value::Mapping(Mapping::new()));
        }
    }
    Ok(serde_yaml::from_value(value)?)
}

/// Parse a document holding exactly one component.
pub fn parse_component(yaml: &str) -> ComponentResult<ComponentSpec> {
    let value: Value = serde_yaml::from_str(yaml)?;
    match value {
        Value::Null => Err(ComponentError::EmptyDocument),
        value => entry_from_value(value),
    }
}

/// Parse a document holding one component or a list of them.
pub fn parse_document(yaml: &str) -> ComponentResult<Vec<ComponentSpec>> {
    let value: Value = serde_yaml::from_str(yaml)?;
    let specs = match value {
        Value::Null => return Err(ComponentError::EmptyDocument),
        Value::Sequence(entries) if entries.is_empty() => return Err(ComponentError::EmptyDocument),
        Value::Sequence(entries) => entries
            .into_iter()
            .map(entry_from_value)
            .collect::<ComponentResult<Vec<_>>>()?,
        value => vec![entry_from_value(value)?],
    };
    tracing::debug!(components = specs.len(), "parsed component document");
    Ok(specs)
}

pub fn render_yaml(yaml: &str) -> ComponentResult<Markup> {
    render_yaml_with(yaml, &Config::default())
}

/// Parse and render a document, concatenating the markup of every entry.
pub fn render_yaml_with(yaml: &str, config: &Config) -> ComponentResult<Markup> {
    let specs = parse_document(yaml)?;
    Ok(specs.iter().map(|spec| spec.render_with(config)).collect())
}
