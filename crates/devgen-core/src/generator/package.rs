//! Package manifest creation and script merge

use super::{GeneratorConfig, RunState};
use crate::error::GeneratorError;
use crate::templates::{render, write_file, ScriptEntry, TemplateStore};
use crate::ui::Interaction;
use anyhow::{anyhow, Context, Result};
use serde_json::{Map, Value};
use tokio::fs;

/// Result of merging a script table into a manifest
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScriptMerge {
    pub added: Vec<String>,
    pub skipped: Vec<String>,
}

/// Undo HTML escaping of angle brackets in a string `author` field
///
/// Authors are written as `Name <email>`; escaping templaters turn that into
/// `Name &lt;email&gt;`.
pub fn normalize_author(manifest: &mut Value) {
    if let Some(Value::String(author)) = manifest.get_mut("author") {
        if author.contains("&lt;") || author.contains("&gt;") {
            *author = author.replace("&lt;", "<").replace("&gt;", ">");
        }
    }
}

/// Add every script the manifest does not define yet, in table order
///
/// Existing scripts are never overwritten. Errors describe why the manifest
/// cannot hold scripts.
pub fn merge_scripts(
    manifest: &mut Value,
    scripts: &[ScriptEntry],
) -> Result<ScriptMerge, &'static str> {
    let object = manifest.as_object_mut().ok_or("is not a JSON object")?;

    let table = object
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()));
    if table.is_null() {
        *table = Value::Object(Map::new());
    }
    let table = table
        .as_object_mut()
        .ok_or("has a `scripts` field that is not an object")?;

    let mut merge = ScriptMerge::default();
    for script in scripts {
        if table.contains_key(&script.name) {
            merge.skipped.push(script.name.clone());
        } else {
            table.insert(script.name.clone(), Value::String(script.command.clone()));
            merge.added.push(script.name.clone());
        }
    }

    Ok(merge)
}

/// Pretty-print with two-space indentation and a trailing newline
pub fn to_manifest_string(manifest: &Value) -> Result<String> {
    let mut content =
        serde_json::to_string_pretty(manifest).context("Failed to serialize manifest")?;
    content.push('\n');
    Ok(content)
}

/// Render the manifest when it is missing, then merge scripts into it
pub async fn write_manifest<I: Interaction>(
    config: &GeneratorConfig,
    templates: &TemplateStore,
    state: &mut RunState,
    ui: &mut I,
) -> Result<()> {
    let set = &config.template_set;
    let rendered = !state.existing.exists(set.manifest_key());

    if rendered {
        let metadata = state
            .metadata
            .as_ref()
            .ok_or_else(|| anyhow!("Project metadata was not collected for {}", set.manifest))?;

        ui.step(&set.manifest)?;
        let source = templates.read_string(&set.manifest_template).await?;
        let content = render(&set.manifest_template, &source, metadata)?;
        let written = write_file(&config.root, &set.manifest, content.as_bytes()).await?;
        state.written.push(written);
    }

    let path = config.root.join(&set.manifest);
    let content = fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut manifest: Value =
        serde_json::from_str(&content).map_err(|source| GeneratorError::ManifestParse {
            path: path.clone(),
            source,
        })?;
    let original = manifest.clone();

    normalize_author(&mut manifest);
    let merge = merge_scripts(&mut manifest, &set.scripts).map_err(|reason| {
        GeneratorError::ManifestShape {
            path: path.clone(),
            reason,
        }
    })?;

    for name in &merge.skipped {
        ui.warning(&format!(
            "Script `{}` already exists in {}, leaving it unchanged.",
            name, set.manifest
        ))?;
    }
    state.skipped_scripts.extend(merge.skipped);

    // A rendered manifest is always reserialized: `tojson` escapes `<` and `>`
    if rendered || manifest != original {
        if !merge.added.is_empty() {
            ui.info(&format!(
                "Adding scripts to {}: {}",
                set.manifest,
                merge.added.join(", ")
            ))?;
        }
        let written = write_file(
            &config.root,
            &set.manifest,
            to_manifest_string(&manifest)?.as_bytes(),
        )
        .await?;
        if !state.written.contains(&written) {
            state.written.push(written);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table() -> Vec<ScriptEntry> {
        [("lint", "eslint src"), ("test", "jest")]
            .into_iter()
            .map(|(name, command)| ScriptEntry {
                name: name.to_string(),
                command: command.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_author_entities_are_unescaped() {
        let mut manifest = json!({ "author": "Name &lt;email@x.com&gt;" });
        normalize_author(&mut manifest);
        assert_eq!(manifest["author"], "Name <email@x.com>");
    }

    #[test]
    fn test_object_author_is_left_alone() {
        let mut manifest = json!({ "author": { "name": "Ada &lt;" } });
        let before = manifest.clone();
        normalize_author(&mut manifest);
        assert_eq!(manifest, before);
    }

    #[test]
    fn test_scripts_created_when_missing() {
        let mut manifest = json!({ "name": "engine" });
        let merge = merge_scripts(&mut manifest, &table()).unwrap();

        assert_eq!(merge.added, vec!["lint", "test"]);
        assert_eq!(manifest["scripts"]["lint"], "eslint src");
        assert_eq!(manifest["scripts"]["test"], "jest");
    }

    #[test]
    fn test_existing_script_is_kept() {
        let mut manifest = json!({ "scripts": { "test": "mocha" } });
        let merge = merge_scripts(&mut manifest, &table()).unwrap();

        assert_eq!(merge.skipped, vec!["test"]);
        assert_eq!(merge.added, vec!["lint"]);
        assert_eq!(manifest["scripts"]["test"], "mocha");
    }

    #[test]
    fn test_null_scripts_treated_as_missing() {
        let mut manifest = json!({ "scripts": null });
        let merge = merge_scripts(&mut manifest, &table()).unwrap();
        assert_eq!(merge.added.len(), 2);
    }

    #[test]
    fn test_non_object_manifest_rejected() {
        let mut manifest = json!(["not", "a", "manifest"]);
        assert!(merge_scripts(&mut manifest, &table()).is_err());

        let mut manifest = json!({ "scripts": "jest" });
        assert!(merge_scripts(&mut manifest, &table()).is_err());
    }

    #[tokio::test]
    async fn test_rendered_manifest_is_rewritten_without_escapes() {
        use crate::generator::scan::scan;
        use crate::generator::testing::RecordingUi;
        use crate::generator::{GeneratorConfig, ProjectMetadata};
        use crate::templates::{TemplateSet, TemplateSource};

        let tpl = tempfile::tempdir().unwrap();
        std::fs::write(
            tpl.path().join("package.json.jinja"),
            "{\n  \"name\": {{ package_name | tojson }},\n  \"author\": {{ author | tojson }}\n}\n",
        )
        .unwrap();
        let store = TemplateStore::new(TemplateSource::Local(tpl.path().to_path_buf()));

        // No scripts, so the merge itself changes nothing
        let set = TemplateSet::from_yaml(
            "name: t\nmanifest: package.json\nmanifest_template: package.json.jinja\n\
             entry_point: index.js\nfiles:\n  - key: hasPackageJSON\n    file: package.json\n",
        )
        .unwrap();
        let project = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::new(project.path().to_path_buf(), set);
        let mut state = RunState {
            existing: scan(project.path(), &config.template_set.files),
            metadata: Some(ProjectMetadata {
                package_name: "engine".to_string(),
                author: "Ada <ada@example.com>".to_string(),
                ..ProjectMetadata::default()
            }),
            ..RunState::default()
        };
        let mut ui = RecordingUi::default();

        write_manifest(&config, &store, &mut state, &mut ui)
            .await
            .unwrap();

        let content = std::fs::read_to_string(project.path().join("package.json")).unwrap();
        assert!(content.contains("\"author\": \"Ada <ada@example.com>\""));
        assert!(!content.contains("\\u003c"));
        assert_eq!(state.written.len(), 1);
    }

    #[test]
    fn test_field_order_preserved_with_two_space_indent() {
        let mut manifest: Value =
            serde_json::from_str(r#"{"name":"engine","version":"1.0.0","author":"Ada"}"#).unwrap();
        merge_scripts(&mut manifest, &table()).unwrap();

        let out = to_manifest_string(&manifest).unwrap();
        let name_at = out.find("\"name\"").unwrap();
        let version_at = out.find("\"version\"").unwrap();
        let scripts_at = out.find("\"scripts\"").unwrap();
        assert!(name_at < version_at && version_at < scripts_at);
        assert!(out.contains("\n  \"name\": \"engine\""));
        assert!(out.ends_with("}\n"));
    }
}
