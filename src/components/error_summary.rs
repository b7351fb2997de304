use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::components::Component;
use crate::config::Config;
use crate::html::{Element, Markup};
use crate::identity;
use crate::merge::Merge;
use crate::model::FieldContext;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ErrorSummaryItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Usually `#<field id>`; without one the message renders unlinked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ErrorSummaryOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_list: Option<Vec<ErrorSummaryItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_auto_focus: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

crate::impl_merge!(ErrorSummaryOptions {
    replace: [
        title_text,
        title_html,
        description_text,
        description_html,
        error_list,
        disable_auto_focus,
        classes,
    ],
    nested: [attributes],
});

impl Component for ErrorSummaryOptions {
    fn render_with(&self, config: &Config) -> Markup {
        let title = Markup::from_content(self.title_text.as_deref(), self.title_html.as_deref())
            .unwrap_or_else(|| Markup::text(&config.default_error_summary_title));

        let description =
            Markup::from_content(self.description_text.as_deref(), self.description_html.as_deref())
                .map(|content| Element::new("p").child(content).render());

        let items: Markup = self
            .error_list
            .iter()
            .flatten()
            .map(|item| {
                let content = Markup::from_content(item.text.as_deref(), item.html.as_deref())
                    .unwrap_or_default();
                let body = match &item.href {
                    Some(href) => Element::new("a")
                        .attr("href", href.as_str())
                        .attributes(item.attributes.as_ref())
                        .child(content)
                        .render(),
                    None => content,
                };
                Element::new("li").child(body).render()
            })
            .collect();

        let body = Element::new("div")
            .attr("class", "govuk-error-summary__body")
            .child_opt(description)
            .child(
                Element::new("ul")
                    .attr("class", "govuk-list govuk-error-summary__list")
                    .child(items)
                    .render(),
            )
            .render();

        Element::new("div")
            .class(ClassList::new("govuk-error-summary").custom(self.classes.as_deref()))
            .attr_opt(
                "data-disable-auto-focus",
                (self.disable_auto_focus == Some(true)).then_some("true"),
            )
            .attr("data-module", "govuk-error-summary")
            .attributes(self.attributes.as_ref())
            .child(
                Element::new("div")
                    .attr("role", "alert")
                    .child(
                        Element::new("h2")
                            .attr("class", "govuk-error-summary__title")
                            .child(title)
                            .render(),
                    )
                    .child(body)
                    .render(),
            )
            .render()
    }
}

/// Build an error summary listing every error of the context's model, each
/// linked to the field it belongs to. `options` are merged over the generated
/// list.
pub fn error_summary_for(context: FieldContext<'_>, options: ErrorSummaryOptions) -> ErrorSummaryOptions {
    let errors = context.object().map(|object| object.errors()).unwrap_or_default();
    let error_list = errors
        .into_iter()
        .map(|(attribute, message)| {
            let identity = identity::resolve(&attribute, context.model, context.form, None, None);
            ErrorSummaryItem {
                text: Some(message),
                href: Some(format!("#{}", identity.id)),
                ..ErrorSummaryItem::default()
            }
        })
        .collect::<Vec<_>>();

    let defaults = ErrorSummaryOptions {
        error_list: Some(error_list),
        ..ErrorSummaryOptions::default()
    };
    defaults.merge(options)
}

/// Render [`error_summary_for`], or nothing when there are no errors.
pub fn render_error_summary_for(context: FieldContext<'_>, options: ErrorSummaryOptions, config: &Config) -> Markup {
    let summary = error_summary_for(context, options);
    if summary.error_list.as_ref().map_or(true, Vec::is_empty) {
        tracing::trace!("no errors, error summary omitted");
        return Markup::new();
    }
    summary.render_with(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_title_description_and_links() {
        let summary = ErrorSummaryOptions {
            description_text: Some("Check the form".into()),
            error_list: Some(vec![
                ErrorSummaryItem {
                    text: Some("Enter your full name".into()),
                    href: Some("#full-name".into()),
                    ..ErrorSummaryItem::default()
                },
                ErrorSummaryItem {
                    text: Some("Something else".into()),
                    ..ErrorSummaryItem::default()
                },
            ]),
            ..ErrorSummaryOptions::default()
        };
        assert_eq!(
            summary.render().as_str(),
            concat!(
                r#"<div class="govuk-error-summary" data-module="govuk-error-summary"><div role="alert">"#,
                r#"<h2 class="govuk-error-summary__title">There is a problem</h2>"#,
                r#"<div class="govuk-error-summary__body"><p>Check the form</p>"#,
                r#"<ul class="govuk-list govuk-error-summary__list">"#,
                r##"<li><a href="#full-name">Enter your full name</a></li>"##,
                r#"<li>Something else</li>"#,
                r#"</ul></div></div></div>"#
            )
        );
    }

    #[test]
    fn auto_focus_can_be_disabled() {
        let summary = ErrorSummaryOptions {
            disable_auto_focus: Some(true),
            ..ErrorSummaryOptions::default()
        };
        assert!(summary
            .render()
            .as_str()
            .starts_with(r#"<div class="govuk-error-summary" data-disable-auto-focus="true" data-module"#));
    }

    #[test]
    fn builds_list_from_model_errors() {
        let person = Record::new("person")
            .with_error("name", "Enter your name")
            .with_error("date_of_birth", "Enter a real date");
        let summary = error_summary_for(FieldContext::with_form(&person), ErrorSummaryOptions::default());
        let hrefs: Vec<_> = summary
            .error_list
            .iter()
            .flatten()
            .filter_map(|item| item.href.clone())
            .collect();
        assert_eq!(hrefs, vec!["#person_name", "#person_date_of_birth"]);

        let model_only = error_summary_for(FieldContext::with_model(&person), ErrorSummaryOptions::default());
        assert_eq!(
            model_only.error_list.unwrap()[0].href.as_deref(),
            Some("#name")
        );
    }

    #[test]
    fn no_errors_renders_nothing() {
        let person = Record::new("person");
        let html = render_error_summary_for(
            FieldContext::with_model(&person),
            ErrorSummaryOptions::default(),
            &Config::default(),
        );
        assert!(html.is_empty());
    }
}
