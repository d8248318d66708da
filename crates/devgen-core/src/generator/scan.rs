//! Existence scan over the managed files

use crate::templates::ConfigEntry;
use std::collections::HashMap;
use std::path::Path;

/// Which managed files were present when the run started, by logical key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExistenceMap {
    present: HashMap<String, bool>,
}

impl ExistenceMap {
    /// Whether the entry with `key` already existed; unknown keys read as absent
    pub fn exists(&self, key: &str) -> bool {
        self.present.get(key).copied().unwrap_or(false)
    }

    /// Number of entries found on disk
    pub fn present_count(&self) -> usize {
        self.present.values().filter(|p| **p).count()
    }

    pub fn len(&self) -> usize {
        self.present.len()
    }

    pub fn is_empty(&self) -> bool {
        self.present.is_empty()
    }
}

/// Probe `root/file` for every entry
///
/// An unreadable path counts as absent.
pub fn scan(root: &Path, entries: &[ConfigEntry]) -> ExistenceMap {
    let present = entries
        .iter()
        .map(|entry| (entry.key.clone(), root.join(&entry.file).exists()))
        .collect();
    ExistenceMap { present }
}
