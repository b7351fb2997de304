use serde::{Deserialize, Serialize};

use crate::error::ComponentResult;

/// Library-wide default texts and levels.
///
/// Every field has a default so a host only lists what it wants to change:
///
/// ```yaml
/// default_back_link_text: Yn ôl
/// default_error_message_prefix: Gwall
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub default_back_link_text: String,
    pub default_back_link_href: String,
    pub default_error_message_prefix: String,
    pub default_warning_text_icon_fallback: String,
    pub default_notification_banner_title: String,
    pub default_notification_banner_success_title: String,
    pub default_tabs_title: String,
    pub default_error_summary_title: String,
    pub default_pagination_landmark: String,
    pub default_pagination_previous_text: String,
    pub default_pagination_next_text: String,
    pub default_skip_link_text: String,
    pub default_skip_link_href: String,
    pub default_date_segment_labels: DateSegmentLabels,
    pub default_textarea_rows: u32,
    pub default_panel_heading_level: u8,
    pub default_accordion_heading_level: u8,
    pub default_notification_banner_heading_level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DateSegmentLabels {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl Default for DateSegmentLabels {
    fn default() -> Self {
        Self {
            day: "Day".to_string(),
            month: "Month".to_string(),
            year: "Year".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_back_link_text: "Back".to_string(),
            default_back_link_href: "#".to_string(),
            default_error_message_prefix: "Error".to_string(),
            default_warning_text_icon_fallback: "Warning".to_string(),
            default_notification_banner_title: "Important".to_string(),
            default_notification_banner_success_title: "Success".to_string(),
            default_tabs_title: "Contents".to_string(),
            default_error_summary_title: "There is a problem".to_string(),
            default_pagination_landmark: "Pagination".to_string(),
            default_pagination_previous_text: "Previous".to_string(),
            default_pagination_next_text: "Next".to_string(),
            default_skip_link_text: "Skip to main content".to_string(),
            default_skip_link_href: "#main-content".to_string(),
            default_date_segment_labels: DateSegmentLabels::default(),
            default_textarea_rows: 5,
            default_panel_heading_level: 1,
            default_accordion_heading_level: 2,
            default_notification_banner_heading_level: 2,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from YAML, keeping defaults for any field not listed.
    pub fn from_yaml(yaml: &str) -> ComponentResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(yaml)?;
        tracing::debug!("loaded component config");
        Ok(config)
    }
}

/// Clamp a heading level into `h1`..`h6`.
pub(crate) fn heading_tag(level: u8) -> &'static str {
    match level {
        0 | 1 => "h1",
        2 => "h2",
        3 => "h3",
        4 => "h4",
        5 => "h5",
        _ => "h6",
    }
}
