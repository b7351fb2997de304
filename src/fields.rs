//! Model and form driven entry points for the field components.
//!
//! Each helper resolves the field identity from the attribute name and
//! context, reads the current value and first validation error from the
//! context's model, labels the field with the humanised attribute name, and
//! then merges the caller's options over those defaults.

use crate::components::{
    default_date_items, CheckboxesOptions, DateInputOptions, ErrorMessageOptions, FieldsetOptions,
    FileUploadOptions, InputOptions, LabelOptions, LegendOptions, RadiosOptions, SelectOptions,
    TextareaOptions,
};
use crate::identity::{self, humanize, Identity};
use crate::merge::Merge;
use crate::model::FieldContext;

fn identity_for(
    attribute: &str,
    context: &FieldContext<'_>,
    explicit_id: Option<&str>,
    explicit_name: Option<&str>,
) -> Identity {
    identity::resolve(attribute, context.model, context.form, explicit_id, explicit_name)
}

fn error_for(attribute: &str, context: &FieldContext<'_>) -> Option<ErrorMessageOptions> {
    context
        .first_error(attribute)
        .map(|message| ErrorMessageOptions::text(&message))
}

fn legend_for(attribute: &str) -> Option<FieldsetOptions> {
    Some(FieldsetOptions {
        legend: Some(LegendOptions::text(&humanize(attribute))),
        ..FieldsetOptions::default()
    })
}

/// A text input bound to `attribute`.
pub fn text_field(attribute: &str, context: FieldContext<'_>, options: InputOptions) -> InputOptions {
    let identity = identity_for(attribute, &context, options.id.as_deref(), options.name.as_deref());
    InputOptions {
        id: Some(identity.id),
        name: Some(identity.name),
        value: context.value(attribute).and_then(|value| value.to_param()),
        label: Some(LabelOptions::text(&humanize(attribute))),
        error_message: error_for(attribute, &context),
        ..InputOptions::default()
    }
    .merge(options)
}

pub fn textarea_field(attribute: &str, context: FieldContext<'_>, options: TextareaOptions) -> TextareaOptions {
    let identity = identity_for(attribute, &context, options.id.as_deref(), options.name.as_deref());
    TextareaOptions {
        id: Some(identity.id),
        name: Some(identity.name),
        value: context.value(attribute).and_then(|value| value.to_param()),
        label: Some(LabelOptions::text(&humanize(attribute))),
        error_message: error_for(attribute, &context),
        ..TextareaOptions::default()
    }
    .merge(options)
}

pub fn select_field(attribute: &str, context: FieldContext<'_>, options: SelectOptions) -> SelectOptions {
    let identity = identity_for(attribute, &context, options.id.as_deref(), options.name.as_deref());
    SelectOptions {
        id: Some(identity.id),
        name: Some(identity.name),
        value: context.value(attribute).and_then(|value| value.to_param()),
        label: Some(LabelOptions::text(&humanize(attribute))),
        error_message: error_for(attribute, &context),
        ..SelectOptions::default()
    }
    .merge(options)
}

/// Radios in a fieldset legended with the humanised attribute; the item
/// matching the model's value is checked.
pub fn radios_field(attribute: &str, context: FieldContext<'_>, options: RadiosOptions) -> RadiosOptions {
    let identity = identity_for(
        attribute,
        &context,
        options.id_prefix.as_deref(),
        options.name.as_deref(),
    );
    RadiosOptions {
        id_prefix: Some(identity.id),
        name: Some(identity.name),
        value: context.value(attribute).and_then(|value| value.to_param()),
        fieldset: legend_for(attribute),
        error_message: error_for(attribute, &context),
        ..RadiosOptions::default()
    }
    .merge(options)
}

/// Checkboxes checked for every value in the model's list.
pub fn checkboxes_field(
    attribute: &str,
    context: FieldContext<'_>,
    options: CheckboxesOptions,
) -> CheckboxesOptions {
    let identity = identity_for(
        attribute,
        &context,
        options.id_prefix.as_deref(),
        options.name.as_deref(),
    );
    CheckboxesOptions {
        id_prefix: Some(identity.id),
        name: Some(identity.name),
        values: context.value(attribute).map(|value| value.to_params()),
        fieldset: legend_for(attribute),
        error_message: error_for(attribute, &context),
        ..CheckboxesOptions::default()
    }
    .merge(options)
}

/// A day/month/year input. Each segment is its own field named
/// `<attribute>_day` and so on, with an id under the group's id, filled
/// from the model's date value.
pub fn date_field(attribute: &str, context: FieldContext<'_>, options: DateInputOptions) -> DateInputOptions {
    let identity = identity_for(attribute, &context, options.id.as_deref(), None);
    let parts = context
        .value(attribute)
        .and_then(|value| value.date_parts())
        .unwrap_or_default();

    let items = default_date_items()
        .into_iter()
        .map(|mut item| {
            let segment = identity_for(
                &format!("{}_{}", attribute, item.name),
                &context,
                Some(format!("{}_{}", identity.id, item.name).as_str()),
                None,
            );
            item.value = match item.name.as_str() {
                "day" => parts.day.map(|day| day.to_string()),
                "month" => parts.month.map(|month| month.to_string()),
                _ => parts.year.map(|year| year.to_string()),
            };
            item.id = Some(segment.id);
            item.full_name = Some(segment.name);
            item
        })
        .collect();

    DateInputOptions {
        id: Some(identity.id),
        items: Some(items),
        fieldset: legend_for(attribute),
        error_message: error_for(attribute, &context),
        ..DateInputOptions::default()
    }
    .merge(options)
}

pub fn file_field(attribute: &str, context: FieldContext<'_>, options: FileUploadOptions) -> FileUploadOptions {
    let identity = identity_for(attribute, &context, options.id.as_deref(), options.name.as_deref());
    FileUploadOptions {
        id: Some(identity.id),
        name: Some(identity.name),
        label: Some(LabelOptions::text(&humanize(attribute))),
        error_message: error_for(attribute, &context),
        ..FileUploadOptions::default()
    }
    .merge(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ChoiceOption, Component, HintOptions};
    use crate::model::{DateParts, FieldValue, Record};
    use pretty_assertions::assert_eq;

    fn person() -> Record {
        Record::new("person")
            .with_value("email", FieldValue::Text("ada@example.com".into()))
            .with_value("contact", FieldValue::Text("phone".into()))
            .with_error("email", "Enter an email address in the correct format")
    }

    #[test]
    fn text_field_reads_value_and_error_from_form() {
        let person = person();
        let input = text_field("email", FieldContext::with_form(&person), InputOptions::default());
        assert_eq!(
            input.render().as_str(),
            concat!(
                r#"<div class="govuk-form-group govuk-form-group--error">"#,
                r#"<label class="govuk-label" for="person_email">Email</label>"#,
                r#"<p id="person_email-error" class="govuk-error-message"><span class="govuk-visually-hidden">Error:</span> Enter an email address in the correct format</p>"#,
                r#"<input class="govuk-input govuk-input--error" id="person_email" name="person[email]" type="text" value="ada@example.com" aria-describedby="person_email-error">"#,
                r#"</div>"#
            )
        );
    }

    #[test]
    fn caller_options_merge_over_defaults() {
        let person = person();
        let input = text_field(
            "email",
            FieldContext::with_model(&person),
            InputOptions {
                hint: Some(HintOptions::text("We will not share it")),
                label: Some(LabelOptions {
                    classes: Some("govuk-label--s".into()),
                    ..LabelOptions::default()
                }),
                ..InputOptions::default()
            },
        );
        assert_eq!(input.id.as_deref(), Some("email"));
        assert_eq!(input.name.as_deref(), Some("email"));
        let label = input.label.clone().unwrap_or_default();
        assert_eq!(label.text.as_deref(), Some("Email"));
        assert_eq!(label.classes.as_deref(), Some("govuk-label--s"));
        assert!(input
            .render()
            .as_str()
            .contains(r#"aria-describedby="email-hint email-error""#));
    }

    #[test]
    fn radios_field_checks_model_value() {
        let person = person();
        let radios = radios_field(
            "contact",
            FieldContext::with_form(&person),
            RadiosOptions {
                items: Some(vec![
                    ChoiceOption::new("email", "Email").into(),
                    ChoiceOption::new("phone", "Phone").into(),
                ]),
                ..RadiosOptions::default()
            },
        );
        let html = radios.render();
        assert!(html.as_str().contains(r#"<legend class="govuk-fieldset__legend">Contact</legend>"#));
        assert!(html.as_str().contains(
            r#"id="person_contact_phone" name="person[contact]" type="radio" value="phone" checked="checked""#
        ));
        assert_eq!(html.as_str().matches("checked").count(), 1);
    }

    #[test]
    fn checkboxes_field_checks_list_values() {
        let record = Record::new("order").with_value(
            "toppings",
            FieldValue::List(vec![FieldValue::Text("ham".into()), FieldValue::Text("olives".into())]),
        );
        let checkboxes = checkboxes_field(
            "toppings",
            FieldContext::with_model(&record),
            CheckboxesOptions {
                items: Some(vec![
                    ChoiceOption::new("ham", "Ham").into(),
                    ChoiceOption::new("pineapple", "Pineapple").into(),
                    ChoiceOption::new("olives", "Olives").into(),
                ]),
                ..CheckboxesOptions::default()
            },
        );
        assert_eq!(checkboxes.checked_indexes(), vec![0, 2]);
    }

    #[test]
    fn date_field_splits_segments() {
        let record = Record::new("person").with_value(
            "date_of_birth",
            FieldValue::Date(DateParts {
                day: Some(10),
                month: Some(12),
                year: Some(1815),
            }),
        );
        let date = date_field("date_of_birth", FieldContext::with_form(&record), DateInputOptions::default());
        let html = date.render();
        assert!(html.as_str().contains(r#"<legend class="govuk-fieldset__legend">Date of birth</legend>"#));
        assert!(html.as_str().contains(concat!(
            r#"<div class="govuk-form-group" id="person_date_of_birth_day-form-group">"#,
            r#"<label class="govuk-label govuk-date-input__label" for="person_date_of_birth_day">Day</label>"#,
            r#"<input class="govuk-input govuk-date-input__input govuk-input--width-2" id="person_date_of_birth_day" name="person[date_of_birth_day]" type="text" value="10" inputmode="numeric">"#
        )));
        assert!(html.as_str().contains(r#"name="person[date_of_birth_year]" type="text" value="1815""#));
    }

    #[test]
    fn date_field_without_context_uses_attribute_ids() {
        let date = date_field("dob", FieldContext::none(), DateInputOptions::default());
        let html = date.render();
        assert!(html.as_str().contains(r#"id="dob_day-form-group""#));
        assert!(html.as_str().contains(r#"id="dob_month-form-group""#));
        assert!(html.as_str().contains(r#"id="dob_year-form-group""#));
    }

    #[test]
    fn date_field_segments_follow_an_overridden_id() {
        let record = Record::new("person");
        let date = date_field(
            "date_of_birth",
            FieldContext::with_form(&record),
            DateInputOptions {
                id: Some("dob".into()),
                hint: Some(HintOptions::text("For example, 27 3 2007")),
                ..DateInputOptions::default()
            },
        );
        let html = date.render();
        let html = html.as_str();
        assert!(html.contains(r#"aria-describedby="dob-hint""#));
        assert!(html.contains(r#"<div class="govuk-date-input" id="dob">"#));
        assert!(html.contains(concat!(
            r#"<div class="govuk-form-group" id="dob_day-form-group">"#,
            r#"<label class="govuk-label govuk-date-input__label" for="dob_day">Day</label>"#,
            r#"<input class="govuk-input govuk-date-input__input govuk-input--width-2" id="dob_day" name="person[date_of_birth_day]" type="text" inputmode="numeric">"#
        )));
        assert!(!html.contains("person_date_of_birth"));
    }

    #[test]
    fn file_and_textarea_and_select_fields_resolve_identity() {
        let form = Record::new("claim");
        let context = FieldContext::with_form(&form);
        assert_eq!(
            file_field("evidence", context, FileUploadOptions::default()).name.as_deref(),
            Some("claim[evidence]")
        );
        assert_eq!(
            textarea_field("details", context, TextareaOptions::default()).id.as_deref(),
            Some("claim_details")
        );
        let select = select_field(
            "country_id",
            context,
            SelectOptions {
                id: Some("country".into()),
                ..SelectOptions::default()
            },
        );
        assert_eq!(select.id.as_deref(), Some("country"));
        assert_eq!(select.name.as_deref(), Some("claim[country_id]"));
        assert_eq!(select.label.and_then(|label| label.text).as_deref(), Some("Country"));
    }
}
