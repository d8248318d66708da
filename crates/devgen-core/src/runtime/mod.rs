//! External tools the generator talks to
//!
//! This module provides:
//! - Package manager detection (flag, lockfile, preset default)
//! - Git configuration lookup for prompt defaults
//! - Development dependency installation

pub mod check;
pub mod git;
pub mod installer;

pub use check::PackageManager;
pub use git::{GitCli, GitConfig, StaticGitConfig};
pub use installer::{DependencyInstaller, PackageManagerInstaller};
