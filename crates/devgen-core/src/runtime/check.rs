//! Package manager detection

use clap::ValueEnum;
use std::fmt;
use std::path::Path;
use std::process::Command;

/// Supported JavaScript package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

/// Lockfiles that pin a project to a package manager, in precedence order
const LOCKFILES: &[(&str, PackageManager)] = &[
    ("package-lock.json", PackageManager::Npm),
    ("yarn.lock", PackageManager::Yarn),
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("bun.lockb", PackageManager::Bun),
    ("bun.lock", PackageManager::Bun),
];

impl PackageManager {
    /// Name of the executable
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// Arguments preceding the package list in a dev-dependency install
    pub fn dev_install_args(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Npm => &["install", "--save-dev"],
            PackageManager::Yarn => &["add", "--dev"],
            PackageManager::Pnpm => &["add", "--save-dev"],
            PackageManager::Bun => &["add", "--dev"],
        }
    }

    /// Command that runs a manifest script, for next-step hints
    pub fn run_script(&self, script: &str) -> String {
        match self {
            PackageManager::Npm => format!("npm run {}", script),
            other => format!("{} {}", other.program(), script),
        }
    }

    /// Package manager implied by a lockfile in `root`, if any
    pub fn from_lockfile(root: &Path) -> Option<Self> {
        LOCKFILES
            .iter()
            .find(|(file, _)| root.join(file).is_file())
            .map(|(_, pm)| *pm)
    }

    /// Explicit choice, then lockfile, then `fallback`
    pub fn select(explicit: Option<Self>, root: &Path, fallback: Self) -> Self {
        explicit
            .or_else(|| Self::from_lockfile(root))
            .unwrap_or(fallback)
    }

    /// Installed version, if the executable is on PATH
    pub fn version(&self) -> Option<String> {
        let output = Command::new(self.program()).arg("--version").output();

        match output {
            Ok(out) if out.status.success() => {
                Some(String::from_utf8_lossy(&out.stdout).trim().to_string())
            }
            _ => None,
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program())
    }
}
