//! Preset trait for CLI binaries
//!
//! Each binary implements this trait to plug its template set and defaults
//! into the shared generator.

use crate::runtime::check::PackageManager;
use include_dir::Dir;
use std::path::Path;

/// Configuration trait for the toolchains a binary can scaffold
///
/// Each preset defines:
/// - Identity (display name)
/// - The template set compiled into the binary
/// - Defaults used when git or the destination give no hint
/// - Post-run instructions
pub trait Preset: Clone + Send + Sync + 'static {
    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Template set shipped inside the binary
    fn embedded_templates(&self) -> &'static Dir<'static>;

    /// Environment variable naming a local template directory override
    fn template_dir_env(&self) -> &'static str;

    /// Host used when a repository URL has to be synthesized
    fn repository_host(&self) -> &'static str {
        "github.com"
    }

    /// Installer used when the destination has no lockfile
    fn default_package_manager(&self) -> PackageManager {
        PackageManager::Npm
    }

    /// Generate the "next steps" instructions after a run
    fn next_steps(&self, dir: &Path, package_manager: PackageManager) -> Vec<String>;
}
