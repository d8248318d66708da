//! devgen core - shared library for tooling scaffolding CLIs
//!
//! This library adds build, lint, format and test tooling to a JavaScript
//! project. It is driven by a [`Preset`] that a CLI binary supplies; the
//! preset ships a template set (config files, manifest template, script table
//! and development dependencies) and the core decides what to write.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Template lookup/rendering/copying, git
//!   lookup, package manager detection and dependency installation
//! - **Layer 2: Pipeline** - [`generator::run`] with an immutable
//!   [`GeneratorConfig`] and a [`RunState`] threaded through five stages
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use devgen_core::{generator, runtime, templates};
//!
//! let store = templates::TemplateStore::new(templates::TemplateSource::Local(dir));
//! let set = store.load_template_set().await?;
//! let config = generator::GeneratorConfig::new(project_root.clone(), set);
//! // `MyUi` implements `ui::Interaction`
//! let state = generator::run(
//!     &config,
//!     &store,
//!     &mut MyUi,
//!     &runtime::GitCli::new(project_root),
//!     &runtime::PackageManagerInstaller::new(runtime::PackageManager::Npm),
//! )
//! .await?;
//! ```

pub mod error;
pub mod generator;
pub mod preset;
pub mod runtime;
pub mod templates;
pub mod ui;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::GeneratorError;
pub use generator::{GeneratorConfig, ProjectMetadata, RunState};
pub use preset::Preset;
pub use runtime::PackageManager;
pub use templates::{ConfigEntry, TemplateSet, TemplateSource, TemplateStore};

#[cfg(feature = "tui")]
pub use tui::run;
