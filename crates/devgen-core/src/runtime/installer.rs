//! Development dependency installation
//!
//! Runs the destination project's package manager once with the full
//! dependency list. Output goes straight to the terminal.

use crate::error::GeneratorError;
use crate::runtime::check::PackageManager;
use crate::templates::DependencySpec;
use anyhow::{Context, Result};
use colored::Colorize;
use std::future::Future;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// Installs packages as development dependencies of a project
pub trait DependencyInstaller {
    /// The command line that `install` will run, for display
    fn describe(&self, specs: &[DependencySpec]) -> String;

    /// Install every spec in one invocation; any failure is an error
    fn install(&self, root: &Path, specs: &[DependencySpec]) -> impl Future<Output = Result<()>>;
}

/// Installer backed by a package manager executable
#[derive(Debug, Clone, Copy)]
pub struct PackageManagerInstaller {
    package_manager: PackageManager,
}

impl PackageManagerInstaller {
    pub fn new(package_manager: PackageManager) -> Self {
        Self { package_manager }
    }

    pub fn package_manager(&self) -> PackageManager {
        self.package_manager
    }

    fn args<'a>(&self, specs: &'a [DependencySpec]) -> Vec<&'a str> {
        let mut args: Vec<&str> = self.package_manager.dev_install_args().to_vec();
        args.extend(specs.iter().map(DependencySpec::as_str));
        args
    }
}

impl DependencyInstaller for PackageManagerInstaller {
    fn describe(&self, specs: &[DependencySpec]) -> String {
        format!(
            "{} {}",
            self.package_manager.program(),
            self.args(specs).join(" ")
        )
    }

    async fn install(&self, root: &Path, specs: &[DependencySpec]) -> Result<()> {
        let cmd = self.describe(specs);
        println!();
        println!("{} {}", "Running:".dimmed(), cmd.yellow());
        println!();

        let status = TokioCommand::new(self.package_manager.program())
            .args(self.args(specs))
            .current_dir(root)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .with_context(|| {
                format!(
                    "Failed to start {}. Is it installed and on your PATH?",
                    self.package_manager.program()
                )
            })?;

        println!();
        if status.success() {
            Ok(())
        } else {
            Err(GeneratorError::InstallFailed {
                command: cmd,
                code: status.code(),
            }
            .into())
        }
    }
}
