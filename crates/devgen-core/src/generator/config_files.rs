//! Static config file and entry point copying

use super::{GeneratorConfig, RunState};
use crate::templates::{copy_verbatim, TemplateStore};
use crate::ui::Interaction;
use anyhow::Result;

/// Directory the default entry point is seeded into
pub const SOURCE_DIR: &str = "src";

/// Copy every missing config file, then seed `src/` if the project has none
///
/// Files found by the existence scan are reported and left untouched. Copies
/// run one after another and have all finished when this returns.
pub async fn write_config_files<I: Interaction>(
    config: &GeneratorConfig,
    templates: &TemplateStore,
    state: &mut RunState,
    ui: &mut I,
) -> Result<()> {
    for entry in config.template_set.config_entries() {
        if state.existing.exists(&entry.key) {
            ui.warning(&format!(
                "{} already exists. Please check if it's set up correctly.",
                entry.file
            ))?;
            state.skipped_files.push(entry.file.clone());
            continue;
        }

        ui.step(&entry.file)?;
        let written =
            copy_verbatim(templates, entry.template_name(), &config.root, &entry.file).await?;
        state.written.push(written);
    }

    if !config.root.join(SOURCE_DIR).exists() {
        let dest = format!("{}/{}", SOURCE_DIR, config.template_set.entry_point);
        ui.step(&dest)?;
        let written = copy_verbatim(
            templates,
            &config.template_set.entry_point,
            &config.root,
            &dest,
        )
        .await?;
        state.written.push(written);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::scan::scan;
    use crate::generator::testing::RecordingUi;
    use crate::templates::{TemplateSet, TemplateSource};
    use std::path::Path;

    const SET: &str = "name: t\nmanifest: package.json\nmanifest_template: package.json.jinja\n\
        entry_point: index.js\nfiles:\n\
        \x20 - key: hasPackageJSON\n    file: package.json\n\
        \x20 - key: hasPrettierConfig\n    file: .prettierrc\n\
        \x20 - key: hasGitIgnore\n    file: .gitignore\n    template: .gitignore.template\n";

    fn templates(dir: &Path) -> TemplateStore {
        std::fs::write(dir.join(".prettierrc"), b"{ \"semi\": false }\n").unwrap();
        std::fs::write(dir.join(".gitignore.template"), b"node_modules/\n").unwrap();
        std::fs::write(dir.join("index.js"), b"console.log('hi');\n").unwrap();
        TemplateStore::new(TemplateSource::Local(dir.to_path_buf()))
    }

    fn prepare(root: &Path) -> (GeneratorConfig, RunState) {
        let config = GeneratorConfig::new(root.to_path_buf(), TemplateSet::from_yaml(SET).unwrap());
        let state = RunState {
            existing: scan(root, &config.template_set.files),
            ..RunState::default()
        };
        (config, state)
    }

    #[tokio::test]
    async fn test_missing_files_copied_verbatim() {
        let tpl = tempfile::tempdir().unwrap();
        let store = templates(tpl.path());
        let project = tempfile::tempdir().unwrap();
        let (config, mut state) = prepare(project.path());
        let mut ui = RecordingUi::default();

        write_config_files(&config, &store, &mut state, &mut ui)
            .await
            .unwrap();

        assert_eq!(
            std::fs::read(project.path().join(".prettierrc")).unwrap(),
            b"{ \"semi\": false }\n"
        );
        assert_eq!(
            std::fs::read(project.path().join(".gitignore")).unwrap(),
            b"node_modules/\n"
        );
        assert_eq!(
            std::fs::read(project.path().join("src/index.js")).unwrap(),
            std::fs::read(tpl.path().join("index.js")).unwrap()
        );
        assert!(!project.path().join("package.json").exists());
        assert_eq!(state.written.len(), 3);
        assert!(ui.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_existing_files_warn_and_stay() {
        let tpl = tempfile::tempdir().unwrap();
        let store = templates(tpl.path());
        let project = tempfile::tempdir().unwrap();
        std::fs::write(project.path().join(".prettierrc"), b"{}").unwrap();
        let (config, mut state) = prepare(project.path());
        let mut ui = RecordingUi::default();

        write_config_files(&config, &store, &mut state, &mut ui)
            .await
            .unwrap();

        assert_eq!(std::fs::read(project.path().join(".prettierrc")).unwrap(), b"{}");
        assert_eq!(
            ui.warnings,
            vec![".prettierrc already exists. Please check if it's set up correctly."]
        );
        assert_eq!(state.skipped_files, vec![".prettierrc"]);
    }

    #[tokio::test]
    async fn test_existing_src_is_not_seeded() {
        let tpl = tempfile::tempdir().unwrap();
        let store = templates(tpl.path());
        let project = tempfile::tempdir().unwrap();
        std::fs::create_dir(project.path().join("src")).unwrap();
        let (config, mut state) = prepare(project.path());
        let mut ui = RecordingUi::default();

        write_config_files(&config, &store, &mut state, &mut ui)
            .await
            .unwrap();

        assert!(!project.path().join("src/index.js").exists());
    }
}
