//! Template set manifest types and parsing

use crate::error::GeneratorError;
use semver::VersionReq;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A file the generator manages, keyed by a logical flag name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    /// Logical flag name (e.g. `hasBabelConfig`)
    pub key: String,

    /// Destination filename relative to the project root
    pub file: String,

    /// Template source name, when it differs from `file`
    #[serde(default)]
    pub template: Option<String>,
}

impl ConfigEntry {
    /// Name of the template this entry is copied from
    pub fn template_name(&self) -> &str {
        self.template.as_deref().unwrap_or(&self.file)
    }
}

/// A named script merged into the manifest's `scripts` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptEntry {
    pub name: String,
    pub command: String,
}

/// A `name@range` development dependency specifier
///
/// The original string is kept and handed to the installer verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DependencySpec {
    spec: String,
    split: usize,
}

impl DependencySpec {
    /// Package name, including any `@scope/` prefix
    pub fn name(&self) -> &str {
        &self.spec[..self.split]
    }

    /// Semver range following the final `@`
    pub fn range(&self) -> &str {
        &self.spec[self.split + 1..]
    }

    pub fn as_str(&self) -> &str {
        &self.spec
    }
}

impl TryFrom<String> for DependencySpec {
    type Error = GeneratorError;

    fn try_from(spec: String) -> Result<Self, Self::Error> {
        // A leading '@' belongs to the scope, not the range separator
        let split = match spec.rfind('@') {
            Some(idx) if idx > 0 => idx,
            _ => {
                return Err(GeneratorError::InvalidTemplateSet(format!(
                    "dependency '{}' is not of the form name@range",
                    spec
                )))
            }
        };

        let range = &spec[split + 1..];
        VersionReq::parse(range).map_err(|e| {
            GeneratorError::InvalidTemplateSet(format!(
                "dependency '{}' has an invalid range: {}",
                spec, e
            ))
        })?;

        Ok(Self { spec, split })
    }
}

impl From<DependencySpec> for String {
    fn from(dep: DependencySpec) -> Self {
        dep.spec
    }
}

impl fmt::Display for DependencySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spec)
    }
}

/// Template set manifest (templates/<set>/template.yaml)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSet {
    /// Short name of the template set
    pub name: String,

    /// Description of the tooling the set provides
    #[serde(default)]
    pub description: String,

    /// Filename of the entry in `files` that is the package manifest
    pub manifest: String,

    /// Template the initial manifest is rendered from
    pub manifest_template: String,

    /// Default entry point, seeded into `src/` when that directory is missing
    pub entry_point: String,

    /// Managed files in scan and write order
    pub files: Vec<ConfigEntry>,

    /// Scripts merged into the manifest, in insertion order
    #[serde(default)]
    pub scripts: Vec<ScriptEntry>,

    /// Packages installed as development dependencies
    #[serde(default)]
    pub dev_dependencies: Vec<DependencySpec>,
}

impl TemplateSet {
    /// Parse and validate a template.yaml document
    pub fn from_yaml(content: &str) -> Result<Self, GeneratorError> {
        let set: TemplateSet = serde_yaml::from_str(content)
            .map_err(|e| GeneratorError::InvalidTemplateSet(e.to_string()))?;
        set.validate()?;
        Ok(set)
    }

    fn validate(&self) -> Result<(), GeneratorError> {
        let mut keys = HashSet::new();
        let mut files = HashSet::new();
        for entry in &self.files {
            if !keys.insert(entry.key.as_str()) {
                return Err(GeneratorError::InvalidTemplateSet(format!(
                    "duplicate key '{}'",
                    entry.key
                )));
            }
            if !files.insert(entry.file.as_str()) {
                return Err(GeneratorError::InvalidTemplateSet(format!(
                    "duplicate file '{}'",
                    entry.file
                )));
            }
        }

        if !files.contains(self.manifest.as_str()) {
            return Err(GeneratorError::InvalidTemplateSet(format!(
                "manifest '{}' is not listed in files",
                self.manifest
            )));
        }

        let mut scripts = HashSet::new();
        for script in &self.scripts {
            if !scripts.insert(script.name.as_str()) {
                return Err(GeneratorError::InvalidTemplateSet(format!(
                    "duplicate script '{}'",
                    script.name
                )));
            }
        }

        Ok(())
    }

    /// Logical key of the manifest's entry
    pub fn manifest_key(&self) -> &str {
        self.files
            .iter()
            .find(|e| e.file == self.manifest)
            .map_or(self.manifest.as_str(), |e| e.key.as_str())
    }

    /// Every entry except the manifest, in list order
    pub fn config_entries(&self) -> impl Iterator<Item = &ConfigEntry> {
        self.files.iter().filter(move |e| e.file != self.manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
name: sample
manifest: package.json
manifest_template: package.json.jinja
entry_point: index.js
files:
  - key: hasPackageJSON
    file: package.json
  - key: hasGitIgnore
    file: .gitignore
    template: .gitignore.template
  - key: hasPrettierConfig
    file: .prettierrc
scripts:
  - name: test
    command: jest
dev_dependencies:
  - "@babel/cli@^7.0.0"
  - "jest@^24.0.0"
"#;

    #[test]
    fn test_parse_sample_set() {
        let set = TemplateSet::from_yaml(SAMPLE).unwrap();
        assert_eq!(set.files.len(), 3);
        assert_eq!(set.manifest_key(), "hasPackageJSON");
        assert_eq!(set.scripts[0].command, "jest");
        assert_eq!(set.dev_dependencies[1].as_str(), "jest@^24.0.0");
    }

    #[test]
    fn test_config_entries_skip_manifest() {
        let set = TemplateSet::from_yaml(SAMPLE).unwrap();
        let files: Vec<&str> = set.config_entries().map(|e| e.file.as_str()).collect();
        assert_eq!(files, vec![".gitignore", ".prettierrc"]);
    }

    #[test]
    fn test_template_name_defaults_to_file() {
        let set = TemplateSet::from_yaml(SAMPLE).unwrap();
        assert_eq!(set.files[1].template_name(), ".gitignore.template");
        assert_eq!(set.files[2].template_name(), ".prettierrc");
    }

    #[test]
    fn test_scoped_dependency_spec() {
        let dep = DependencySpec::try_from("@babel/preset-env@^7.0.0".to_string()).unwrap();
        assert_eq!(dep.name(), "@babel/preset-env");
        assert_eq!(dep.range(), "^7.0.0");
        assert_eq!(dep.to_string(), "@babel/preset-env@^7.0.0");
    }

    #[test]
    fn test_invalid_dependency_specs() {
        assert!(DependencySpec::try_from("jest".to_string()).is_err());
        assert!(DependencySpec::try_from("@babel/cli".to_string()).is_err());
        assert!(DependencySpec::try_from("jest@not-a-range".to_string()).is_err());
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let yaml = SAMPLE.replace("key: hasGitIgnore", "key: hasPackageJSON");
        let err = TemplateSet::from_yaml(&yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate key"));
    }

    #[test]
    fn test_duplicate_file_rejected() {
        let yaml = SAMPLE.replace("file: .prettierrc", "file: .gitignore");
        let err = TemplateSet::from_yaml(&yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate file"));
    }

    #[test]
    fn test_unlisted_manifest_rejected() {
        let yaml = SAMPLE.replace("manifest: package.json", "manifest: composer.json");
        assert!(TemplateSet::from_yaml(&yaml).is_err());
    }
}
