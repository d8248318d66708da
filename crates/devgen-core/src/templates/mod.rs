//! Template sets: manifest, lookup, rendering and copying
//!
//! This module provides:
//! - The template set manifest (`template.yaml`) and its entry types
//! - Template lookup from the embedded set or a local directory
//! - Pure rendering of the package manifest template
//! - Verbatim copying of static templates into a project

pub mod copier;
pub mod manifest;
pub mod render;
pub mod store;

pub use copier::{copy_verbatim, write_file};
pub use manifest::{ConfigEntry, DependencySpec, ScriptEntry, TemplateSet};
pub use render::render;
pub use store::{TemplateSource, TemplateStore, TEMPLATE_SET_MANIFEST};
