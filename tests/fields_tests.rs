use govuk_components::components::{
    error_summary_for, CheckboxesOptions, ChoiceItem, ChoiceOption, Component, ErrorSummaryOptions,
    InputOptions, RadiosOptions, SelectItem, SelectOptions,
};
use govuk_components::fields::{checkboxes_field, radios_field, select_field, text_field};
use govuk_components::{FieldContext, FieldValue, FormLike, ModelLike};
use pretty_assertions::assert_eq;

/// A host model with its own storage, bound through the traits only.
struct Application {
    full_name: String,
    newsletter: bool,
    age: i64,
}

impl ModelLike for Application {
    fn get(&self, attribute: &str) -> Option<FieldValue> {
        match attribute {
            "full_name" => Some(FieldValue::Text(self.full_name.clone())),
            "newsletter" => Some(FieldValue::Bool(self.newsletter)),
            "age" => Some(FieldValue::Integer(self.age)),
            _ => None,
        }
    }

    fn errors_for(&self, attribute: &str) -> Vec<String> {
        match attribute {
            "full_name" if self.full_name.is_empty() => vec!["Enter your full name".to_string()],
            _ => Vec::new(),
        }
    }

    fn errors(&self) -> Vec<(String, String)> {
        self.errors_for("full_name")
            .into_iter()
            .map(|message| ("full_name".to_string(), message))
            .collect()
    }
}

struct ApplicationForm<'a> {
    application: &'a Application,
}

impl FormLike for ApplicationForm<'_> {
    fn param_key(&self) -> &str {
        "application"
    }

    fn object(&self) -> Option<&dyn ModelLike> {
        Some(self.application)
    }
}

fn application(full_name: &str) -> Application {
    Application {
        full_name: full_name.to_string(),
        newsletter: true,
        age: 42,
    }
}

#[test]
fn test_custom_form_namespaces_and_reads_object() {
    let model = application("Ada Lovelace");
    let form = ApplicationForm { application: &model };
    let html = text_field("full_name", FieldContext::with_form(&form), InputOptions::default()).render();
    assert_eq!(
        html.as_str(),
        concat!(
            r#"<div class="govuk-form-group">"#,
            r#"<label class="govuk-label" for="application_full_name">Full name</label>"#,
            r#"<input class="govuk-input" id="application_full_name" name="application[full_name]" type="text" value="Ada Lovelace">"#,
            r#"</div>"#
        )
    );
}

#[test]
fn test_model_without_form_is_not_namespaced() {
    let model = application("");
    let html = text_field("full_name", FieldContext::with_model(&model), InputOptions::default()).render();
    assert!(html.as_str().contains(r#"id="full_name" name="full_name""#));
    assert!(html.as_str().contains(r#"aria-describedby="full_name-error""#));
}

#[test]
fn test_boolean_value_checks_matching_radio() {
    let model = application("Ada");
    let radios = radios_field(
        "newsletter",
        FieldContext::with_model(&model),
        RadiosOptions {
            items: Some(vec![
                ChoiceOption::new("true", "Yes").into(),
                ChoiceOption::new("false", "No").into(),
            ]),
            ..RadiosOptions::default()
        },
    );
    assert_eq!(radios.checked_index(), Some(0));
    let html = radios.render();
    assert!(html
        .as_str()
        .contains(r#"id="newsletter_true" name="newsletter" type="radio" value="true" checked="checked""#));
}

#[test]
fn test_integer_value_selects_option() {
    let model = application("Ada");
    let select = select_field(
        "age",
        FieldContext::with_model(&model),
        SelectOptions {
            items: Some(vec![SelectItem::new("41", "41"), SelectItem::new("42", "42")]),
            ..SelectOptions::default()
        },
    );
    assert!(select
        .render()
        .as_str()
        .contains(r#"<option value="42" selected="selected">42</option>"#));
}

#[test]
fn test_checkboxes_without_context_use_caller_values() {
    let checkboxes = checkboxes_field(
        "waste",
        FieldContext::none(),
        CheckboxesOptions {
            values: Some(vec!["mines".into()]),
            items: Some(vec![
                ChoiceOption::new("carcasses", "Waste from animal carcasses").into(),
                ChoiceOption::new("mines", "Waste from mines or quarries").into(),
                ChoiceItem::divider("or"),
            ]),
            ..CheckboxesOptions::default()
        },
    );
    assert_eq!(checkboxes.checked_indexes(), vec![1]);
    assert!(checkboxes
        .render()
        .as_str()
        .contains(r#"<legend class="govuk-fieldset__legend">Waste</legend>"#));
}

#[test]
fn test_error_summary_links_to_form_fields() {
    let model = application("");
    let form = ApplicationForm { application: &model };
    let summary = error_summary_for(FieldContext::with_form(&form), ErrorSummaryOptions::default());
    assert!(summary.render().as_str().contains(
        r##"<li><a href="#application_full_name">Enter your full name</a></li>"##
    ));
}
