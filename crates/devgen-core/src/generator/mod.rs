//! The scaffolding pipeline
//!
//! A run moves strictly forward through five stages:
//!
//! 1. [`scan`] records which managed files already exist
//! 2. [`metadata`] asks for project metadata when there is no manifest
//! 3. [`package`] renders the manifest if needed and merges scripts into it
//! 4. [`config_files`] copies every missing config file and the entry point
//! 5. [`install`] installs the development dependencies
//!
//! Every stage reads the same immutable [`GeneratorConfig`] and records what it
//! did in one [`RunState`]. Writes are gated by the existence scan, so running
//! again over the same directory only produces warnings.

pub mod config_files;
pub mod install;
pub mod metadata;
pub mod package;
pub mod scan;

use crate::runtime::{DependencyInstaller, GitConfig};
use crate::templates::{TemplateSet, TemplateStore};
use crate::ui::Interaction;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub use metadata::ProjectMetadata;
pub use scan::ExistenceMap;

/// Inputs fixed for the lifetime of a run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Destination project directory
    pub root: PathBuf,

    /// Managed files, scripts and dependencies
    pub template_set: TemplateSet,

    /// Host for synthesized repository URLs
    pub repository_host: String,

    /// Leave dependency installation to the user
    pub skip_install: bool,
}

impl GeneratorConfig {
    pub fn new(root: PathBuf, template_set: TemplateSet) -> Self {
        Self {
            root,
            template_set,
            repository_host: "github.com".to_string(),
            skip_install: false,
        }
    }
}

/// What a run found and did, threaded through the stages
#[derive(Debug, Default)]
pub struct RunState {
    /// Result of the existence scan
    pub existing: ExistenceMap,

    /// Answers collected when the manifest was missing
    pub metadata: Option<ProjectMetadata>,

    /// Every file written, in write order
    pub written: Vec<PathBuf>,

    /// Config files left alone because they already existed
    pub skipped_files: Vec<String>,

    /// Scripts left alone because the manifest already defined them
    pub skipped_scripts: Vec<String>,

    /// Whether the installer ran
    pub installed: bool,
}

/// Run every stage against `config.root`
pub async fn run<I, G, D>(
    config: &GeneratorConfig,
    templates: &TemplateStore,
    ui: &mut I,
    git: &G,
    installer: &D,
) -> Result<RunState>
where
    I: Interaction,
    G: GitConfig,
    D: DependencyInstaller,
{
    tokio::fs::create_dir_all(&config.root)
        .await
        .with_context(|| format!("Failed to create directory: {}", config.root.display()))?;

    let mut state = RunState {
        existing: scan::scan(&config.root, &config.template_set.files),
        ..RunState::default()
    };

    metadata::collect(config, &mut state, ui, git)?;
    package::write_manifest(config, templates, &mut state, ui).await?;
    config_files::write_config_files(config, templates, &mut state, ui).await?;
    install::install_dependencies(config, &mut state, ui, installer).await?;

    Ok(state)
}
