//! Git configuration lookup
//!
//! Remote and committer identity are only ever used as prompt defaults, so a
//! missing git binary, a directory outside any repository, and an unset key
//! all read as `None`.

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::Command;

/// Read access to git configuration values
pub trait GitConfig {
    /// Value of a configuration key such as `user.name`
    fn get(&self, key: &str) -> Option<String>;

    /// URL of the `origin` remote
    fn origin_url(&self) -> Option<String> {
        self.get("remote.origin.url")
    }

    fn user_name(&self) -> Option<String> {
        self.get("user.name")
    }

    fn user_email(&self) -> Option<String> {
        self.get("user.email")
    }
}

/// Reads configuration through the `git` executable, scoped to a directory
#[derive(Debug, Clone)]
pub struct GitCli {
    root: PathBuf,
}

impl GitCli {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl GitConfig for GitCli {
    fn get(&self, key: &str) -> Option<String> {
        // The destination may not exist yet; fall back to global config
        let mut command = Command::new("git");
        if self.root.is_dir() {
            command.current_dir(&self.root);
        }

        let output = command.args(["config", "--get", key]).output().ok()?;
        if !output.status.success() {
            return None;
        }

        let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }
}

/// Fixed configuration values, for non-git contexts and tests
#[derive(Debug, Clone, Default)]
pub struct StaticGitConfig {
    values: HashMap<String, String>,
}

impl StaticGitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl GitConfig for StaticGitConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
