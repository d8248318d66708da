//! Template lookup from the embedded set or a local directory
//!
//! Presets ship their template set inside the binary. A local directory can
//! replace it, which is how template authors iterate without rebuilding.

use super::manifest::TemplateSet;
use crate::error::GeneratorError;
use crate::preset::Preset;
use anyhow::{Context, Result};
use include_dir::Dir;
use std::path::PathBuf;
use tokio::fs;

/// Name of the template set manifest inside every set
pub const TEMPLATE_SET_MANIFEST: &str = "template.yaml";

/// Template source - either compiled into the binary or a local directory
#[derive(Debug, Clone)]
pub enum TemplateSource {
    Embedded(&'static Dir<'static>),
    Local(PathBuf),
}

impl TemplateSource {
    /// Pick the source for a preset: explicit directory, then the preset's
    /// environment variable, then the embedded set
    pub fn resolve<P: Preset>(preset: &P, template_dir: Option<PathBuf>) -> Self {
        if let Some(path) = template_dir {
            return Self::Local(path);
        }
        match std::env::var(preset.template_dir_env()) {
            Ok(path) if !path.is_empty() => Self::Local(PathBuf::from(path)),
            _ => Self::Embedded(preset.embedded_templates()),
        }
    }

    /// Human-readable description for log output
    pub fn describe(&self) -> String {
        match self {
            Self::Embedded(_) => "built-in templates".to_string(),
            Self::Local(path) => format!("local templates from {}", path.display()),
        }
    }
}

/// Reads templates by name from a [`TemplateSource`]
#[derive(Debug, Clone)]
pub struct TemplateStore {
    source: TemplateSource,
}

impl TemplateStore {
    pub fn new(source: TemplateSource) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    /// Read a template's raw bytes
    pub async fn read_bytes(&self, name: &str) -> Result<Vec<u8>> {
        match &self.source {
            TemplateSource::Embedded(dir) => dir
                .get_file(name)
                .map(|file| file.contents().to_vec())
                .ok_or_else(|| GeneratorError::TemplateNotFound(name.to_string()).into()),
            TemplateSource::Local(root) => {
                let path = root.join(name);
                if !path.is_file() {
                    return Err(GeneratorError::TemplateNotFound(path.display().to_string()).into());
                }
                fs::read(&path)
                    .await
                    .with_context(|| format!("Failed to read template: {}", path.display()))
            }
        }
    }

    /// Read a template as UTF-8 text
    pub async fn read_string(&self, name: &str) -> Result<String> {
        let bytes = self.read_bytes(name).await?;
        String::from_utf8(bytes).with_context(|| format!("Template is not valid UTF-8: {}", name))
    }

    /// Load and validate the set's template.yaml
    pub async fn load_template_set(&self) -> Result<TemplateSet> {
        let content = self.read_string(TEMPLATE_SET_MANIFEST).await?;
        let set = TemplateSet::from_yaml(&content)
            .with_context(|| format!("Failed to load {}", TEMPLATE_SET_MANIFEST))?;
        Ok(set)
    }
}
