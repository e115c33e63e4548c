//! Content for the folio portfolio page.
//!
//! Holds the single [`ContentPayload`] both delivery paths share, the rule
//! that splits request paths into assets and pages, and the templates that
//! wrap the payload into a full document or a bare page shell.

pub mod document;
pub mod payload;
pub mod portfolio;
pub mod request;

pub use document::{TemplateEngine, TemplateError, MOUNT_ID};
pub use payload::{contains_element_id, ContentPayload};
pub use request::{is_asset_path, RequestKind};
