//! # GOV.UK Frontend components
//!
//! Server-side rendering of GOV.UK Frontend components to HTML strings.
//!
//! Every component takes an options record and renders compact markup that
//! follows the GOV.UK Frontend markup contracts: class lists, nested `data-*`
//! and `aria-*` attributes, generated ids and `aria-describedby` chains.
//!
//! ## Features
//! - One options record per component, merged recursively over defaults
//! - Field helpers that derive ids, names, values and errors from a model
//!   and form context
//! - Library-wide default texts through [`Config`]
//! - YAML documents describing components, rendered with [`render_yaml`]
//!
//! ## Example
//! ```
//! use govuk_components::components::{ButtonOptions, Component};
//!
//! let button = ButtonOptions {
//!     text: Some("Save and continue".into()),
//!     ..ButtonOptions::default()
//! };
//! assert!(button.render().as_str().starts_with("<button type=\"submit\""));
//! ```
//!
//! ## Example: field bound to a form
//! ```
//! use govuk_components::components::{Component, InputOptions};
//! use govuk_components::fields::text_field;
//! use govuk_components::model::{FieldContext, FieldValue, Record};
//!
//! let person = Record::new("person").with_value("email", FieldValue::Text("ada@example.com".into()));
//! let input = text_field("email", FieldContext::with_form(&person), InputOptions::default());
//! assert!(input.render().as_str().contains("name=\"person[email]\""));
//! ```

pub mod attributes;
pub mod classes;
pub mod components;
pub mod config;
pub mod described_by;
pub mod document;
pub mod error;
pub mod fields;
pub mod html;
pub mod identity;
pub mod merge;
pub mod model;
mod scalar;

// --- Core types ---
pub use attributes::{AttributeValue, Attributes};
pub use classes::ClassList;
pub use components::Component;
pub use config::Config;
pub use document::{ComponentSpec, FieldSpec, ModelSpec};
pub use error::{ComponentError, ComponentResult};
pub use html::{Element, Markup};
pub use identity::Identity;
pub use merge::Merge;
pub use model::{FieldContext, FieldValue, FormLike, ModelLike, Record};

// --- Entry points ---
pub use document::{parse_component, parse_document, render_yaml, render_yaml_with};
