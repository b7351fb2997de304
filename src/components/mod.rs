//! GOV.UK Frontend components.
//!
//! Each component is an options record implementing [`Component`]. Records
//! are plain data: build them in Rust with struct update syntax, or load them
//! from YAML through [`crate::document`].

use crate::config::Config;
use crate::html::Markup;

mod accordion;
mod button;
mod checkboxes;
pub mod choices;
mod date_input;
mod details;
mod error_message;
mod error_summary;
mod field;
mod fieldset;
mod file_upload;
mod form_group;
mod hint;
mod input;
mod label;
mod links;
mod notices;
mod pagination;
mod radios;
mod select;
mod summary_list;
mod table;
mod tabs;
mod tag;
mod textarea;

pub use accordion::{AccordionOptions, AccordionSection};
pub use button::{ButtonElement, ButtonOptions};
pub use checkboxes::CheckboxesOptions;
pub use choices::{ChoiceBehaviour, ChoiceItem, ChoiceOption, ConditionalReveal};
pub use date_input::{default_date_items, DateInputItem, DateInputOptions};
pub use details::DetailsOptions;
pub use error_message::ErrorMessageOptions;
pub use error_summary::{
    error_summary_for, render_error_summary_for, ErrorSummaryItem, ErrorSummaryOptions,
};
pub use fieldset::{FieldsetOptions, LegendOptions};
pub use file_upload::FileUploadOptions;
pub use form_group::{form_group, FormGroupOptions};
pub use hint::HintOptions;
pub use input::{InputAffix, InputOptions};
pub use label::LabelOptions;
pub use links::{BackLinkOptions, BreadcrumbItem, BreadcrumbsOptions, SkipLinkOptions};
pub use notices::{
    InsetTextOptions, NotificationBannerOptions, PanelOptions, PhaseBannerOptions,
    WarningTextOptions,
};
pub use pagination::{PaginationItem, PaginationLink, PaginationOptions};
pub use radios::RadiosOptions;
pub use select::{SelectItem, SelectOptions};
pub use summary_list::{
    SummaryListAction, SummaryListActions, SummaryListOptions, SummaryListRow, SummaryListText,
};
pub use table::{CellFormat, TableCell, TableOptions};
pub use tabs::{TabItem, TabsOptions};
pub use tag::TagOptions;
pub use textarea::TextareaOptions;

/// A renderable component.
///
/// Rendering never fails: absent options produce omitted markup.
pub trait Component {
    fn render_with(&self, config: &Config) -> Markup;

    fn render(&self) -> Markup {
        self.render_with(&Config::default())
    }
}
