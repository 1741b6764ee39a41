//! Typed template models for in-app content cards.
//!
//! Server-delivered card payloads arrive as loosely-typed nested maps. This
//! crate reads them into a permissive wire schema in one pass and then builds
//! immutable template models from it, so required-field enforcement and type
//! coercion live in a single place. A strict entry point for self-describing
//! JSON documents is exposed alongside the permissive one.
pub mod error;
pub mod schema;
pub mod template;
pub mod uimodels;

pub use error::TemplateError;
pub use schema::{RawContentMap, SmallImageSchema};
pub use template::{AepUiTemplate, AepUiTemplateType, SmallImageTemplate};
pub use uimodels::{AepButton, AepColor, AepDismissButton, AepFont, AepImage, AepText};
