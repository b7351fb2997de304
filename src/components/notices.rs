//! Panels, inset text, warning text and banners.

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::components::tag::TagOptions;
use crate::components::Component;
use crate::config::{heading_tag, Config};
use crate::html::{Element, Markup};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

crate::impl_merge!(PanelOptions {
    replace: [title_text, title_html, text, html, heading_level, classes],
    nested: [attributes],
});

impl Component for PanelOptions {
    fn render_with(&self, config: &Config) -> Markup {
        let level = self.heading_level.unwrap_or(config.default_panel_heading_level);
        let title = Markup::from_content(self.title_text.as_deref(), self.title_html.as_deref())
            .map(|title| {
                Element::new(heading_tag(level))
                    .attr("class", "govuk-panel__title")
                    .child(title)
                    .render()
            });
        let body = Markup::from_content(self.text.as_deref(), self.html.as_deref()).map(|body| {
            Element::new("div")
                .attr("class", "govuk-panel__body")
                .child(body)
                .render()
        });

        Element::new("div")
            .class(
                ClassList::new("govuk-panel")
                    .base("govuk-panel--confirmation")
                    .custom(self.classes.as_deref()),
            )
            .attributes(self.attributes.as_ref())
            .child_opt(title)
            .child_opt(body)
            .render()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InsetTextOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

crate::impl_merge!(InsetTextOptions {
    replace: [text, html, id, classes],
    nested: [attributes],
});

impl Component for InsetTextOptions {
    fn render_with(&self, _config: &Config) -> Markup {
        Element::new("div")
            .attr_opt("id", self.id.as_deref())
            .class(ClassList::new("govuk-inset-text").custom(self.classes.as_deref()))
            .attributes(self.attributes.as_ref())
            .child_opt(Markup::from_content(self.text.as_deref(), self.html.as_deref()))
            .render()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WarningTextOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_fallback_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

crate::impl_merge!(WarningTextOptions {
    replace: [text, html, icon_fallback_text, classes],
    nested: [attributes],
});

impl Component for WarningTextOptions {
    fn render_with(&self, config: &Config) -> Markup {
        let fallback = self
            .icon_fallback_text
            .as_deref()
            .unwrap_or(&config.default_warning_text_icon_fallback);

        let icon = Element::new("span")
            .attr("class", "govuk-warning-text__icon")
            .attr("aria-hidden", "true")
            .text("!")
            .render();
        let text = Element::new("strong")
            .attr("class", "govuk-warning-text__text")
            .child(
                Element::new("span")
                    .attr("class", "govuk-visually-hidden")
                    .text(fallback)
                    .render(),
            )
            .child_opt(Markup::from_content(self.text.as_deref(), self.html.as_deref()))
            .render();

        Element::new("div")
            .class(ClassList::new("govuk-warning-text").custom(self.classes.as_deref()))
            .attributes(self.attributes.as_ref())
            .child(icon)
            .child(text)
            .render()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotificationBannerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// `success` switches the default title, role and modifier.
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_auto_focus: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

crate::impl_merge!(NotificationBannerOptions {
    replace: [
        title_text,
        title_html,
        title_id,
        text,
        html,
        banner_type,
        role,
        heading_level,
        disable_auto_focus,
        classes,
    ],
    nested: [attributes],
});

impl Component for NotificationBannerOptions {
    fn render_with(&self, config: &Config) -> Markup {
        let success = self.banner_type.as_deref() == Some("success");
        let title_id = self
            .title_id
            .as_deref()
            .unwrap_or("govuk-notification-banner-title");
        let role = self
            .role
            .as_deref()
            .unwrap_or(if success { "alert" } else { "region" });
        let default_title = if success {
            &config.default_notification_banner_success_title
        } else {
            &config.default_notification_banner_title
        };
        let title = Markup::from_content(self.title_text.as_deref(), self.title_html.as_deref())
            .unwrap_or_else(|| Markup::text(default_title));
        let level = self
            .heading_level
            .unwrap_or(config.default_notification_banner_heading_level);

        let header = Element::new("div")
            .attr("class", "govuk-notification-banner__header")
            .child(
                Element::new(heading_tag(level))
                    .attr("class", "govuk-notification-banner__title")
                    .attr("id", title_id)
                    .child(title)
                    .render(),
            )
            .render();

        let body = match (&self.html, &self.text) {
            (Some(html), _) => Some(Markup::raw(html.as_str())),
            (None, Some(text)) => Some(
                Element::new("p")
                    .attr("class", "govuk-notification-banner__heading")
                    .text(text)
                    .render(),
            ),
            (None, None) => None,
        };
        let content = Element::new("div")
            .attr("class", "govuk-notification-banner__content")
            .child_opt(body)
            .render();

        Element::new("div")
            .class(
                ClassList::new("govuk-notification-banner")
                    .modifier_if(success, "govuk-notification-banner--success")
                    .custom(self.classes.as_deref()),
            )
            .attr("role", role)
            .attr("aria-labelledby", title_id)
            .attr("data-module", "govuk-notification-banner")
            .attr_opt(
                "data-disable-auto-focus",
                self.disable_auto_focus.map(|flag| flag.to_string()),
            )
            .attributes(self.attributes.as_ref())
            .child(header)
            .child(content)
            .render()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhaseBannerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<TagOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

crate::impl_merge!(PhaseBannerOptions {
    replace: [text, html, classes],
    nested: [tag, attributes],
});

impl Component for PhaseBannerOptions {
    fn render_with(&self, _config: &Config) -> Markup {
        let tag = self
            .tag
            .as_ref()
            .map(|tag| tag.render_with_base(&["govuk-phase-banner__content__tag"]));
        let text = Markup::from_content(self.text.as_deref(), self.html.as_deref()).map(|text| {
            Element::new("span")
                .attr("class", "govuk-phase-banner__text")
                .child(text)
                .render()
        });

        Element::new("div")
            .class(ClassList::new("govuk-phase-banner").custom(self.classes.as_deref()))
            .attributes(self.attributes.as_ref())
            .child(
                Element::new("p")
                    .attr("class", "govuk-phase-banner__content")
                    .child_opt(tag)
                    .child_opt(text)
                    .render(),
            )
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn panel_with_title_and_body() {
        let panel = PanelOptions {
            title_text: Some("Application complete".into()),
            html: Some("Your reference number<br><strong>HDJ2123F</strong>".into()),
            ..PanelOptions::default()
        };
        assert_eq!(
            panel.render().as_str(),
            concat!(
                r#"<div class="govuk-panel govuk-panel--confirmation">"#,
                r#"<h1 class="govuk-panel__title">Application complete</h1>"#,
                r#"<div class="govuk-panel__body">Your reference number<br><strong>HDJ2123F</strong></div>"#,
                r#"</div>"#
            )
        );
    }

    #[test]
    fn panel_without_body_omits_wrapper() {
        let panel = PanelOptions {
            title_text: Some("Done".into()),
            heading_level: Some(2),
            ..PanelOptions::default()
        };
        assert_eq!(
            panel.render().as_str(),
            r#"<div class="govuk-panel govuk-panel--confirmation"><h2 class="govuk-panel__title">Done</h2></div>"#
        );
    }

    #[test]
    fn inset_text() {
        let inset = InsetTextOptions {
            text: Some("It can take up to 8 weeks.".into()),
            ..InsetTextOptions::default()
        };
        assert_eq!(
            inset.render().as_str(),
            r#"<div class="govuk-inset-text">It can take up to 8 weeks.</div>"#
        );
    }

    #[test]
    fn warning_text_has_assistive_prefix() {
        let warning = WarningTextOptions {
            text: Some("You can be fined up to £5,000.".into()),
            ..WarningTextOptions::default()
        };
        assert_eq!(
            warning.render().as_str(),
            concat!(
                r#"<div class="govuk-warning-text">"#,
                r#"<span class="govuk-warning-text__icon" aria-hidden="true">!</span>"#,
                r#"<strong class="govuk-warning-text__text"><span class="govuk-visually-hidden">Warning</span>You can be fined up to £5,000.</strong>"#,
                r#"</div>"#
            )
        );
    }

    #[test]
    fn notification_banner_defaults() {
        let banner = NotificationBannerOptions {
            text: Some("You have 7 days left to send your application.".into()),
            ..NotificationBannerOptions::default()
        };
        assert_eq!(
            banner.render().as_str(),
            concat!(
                r#"<div class="govuk-notification-banner" role="region" aria-labelledby="govuk-notification-banner-title" data-module="govuk-notification-banner">"#,
                r#"<div class="govuk-notification-banner__header"><h2 class="govuk-notification-banner__title" id="govuk-notification-banner-title">Important</h2></div>"#,
                r#"<div class="govuk-notification-banner__content"><p class="govuk-notification-banner__heading">You have 7 days left to send your application.</p></div>"#,
                r#"</div>"#
            )
        );
    }

    #[test]
    fn success_banner_switches_role_and_title() {
        let banner = NotificationBannerOptions {
            banner_type: Some("success".into()),
            html: Some("<h3 class=\"govuk-notification-banner__heading\">Saved</h3>".into()),
            ..NotificationBannerOptions::default()
        };
        let html = banner.render();
        assert!(html.as_str().starts_with(
            r#"<div class="govuk-notification-banner govuk-notification-banner--success" role="alert""#
        ));
        assert!(html.as_str().contains(">Success</h2>"));
    }

    #[test]
    fn phase_banner_composes_tag() {
        let banner = PhaseBannerOptions {
            tag: Some(TagOptions::text("Beta")),
            html: Some(r##"This is a new service. <a class="govuk-link" href="#">Feedback</a>"##.into()),
            ..PhaseBannerOptions::default()
        };
        assert_eq!(
            banner.render().as_str(),
            concat!(
                r#"<div class="govuk-phase-banner"><p class="govuk-phase-banner__content">"#,
                r#"<strong class="govuk-tag govuk-phase-banner__content__tag">Beta</strong>"#,
                r##"<span class="govuk-phase-banner__text">This is a new service. <a class="govuk-link" href="#">Feedback</a></span>"##,
                r#"</p></div>"#
            )
        );
    }
}
