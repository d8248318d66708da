//! Writing templates into the destination project

use crate::templates::store::TemplateStore;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Write `content` to `target_dir/dest`, creating parent directories
pub async fn write_file(target_dir: &Path, dest: &str, content: &[u8]) -> Result<PathBuf> {
    let target_path = target_dir.join(dest);
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(&target_path, content)
        .await
        .with_context(|| format!("Failed to write file: {}", target_path.display()))?;

    Ok(target_path)
}

/// Copy a template byte-for-byte to `target_dir/dest`
pub async fn copy_verbatim(
    store: &TemplateStore,
    template_name: &str,
    target_dir: &Path,
    dest: &str,
) -> Result<PathBuf> {
    let content = store.read_bytes(template_name).await?;
    write_file(target_dir, dest, &content).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::store::TemplateSource;

    #[tokio::test]
    async fn test_copy_creates_parent_directories() {
        let templates = tempfile::tempdir().unwrap();
        std::fs::write(templates.path().join("index.js"), b"main();\n").unwrap();
        let store = TemplateStore::new(TemplateSource::Local(templates.path().to_path_buf()));

        let project = tempfile::tempdir().unwrap();
        let written = copy_verbatim(&store, "index.js", project.path(), "src/index.js")
            .await
            .unwrap();

        assert_eq!(written, project.path().join("src/index.js"));
        assert_eq!(std::fs::read(&written).unwrap(), b"main();\n");
    }

    #[tokio::test]
    async fn test_copy_renames_template() {
        let templates = tempfile::tempdir().unwrap();
        std::fs::write(templates.path().join(".gitignore.template"), b"node_modules/\n").unwrap();
        let store = TemplateStore::new(TemplateSource::Local(templates.path().to_path_buf()));

        let project = tempfile::tempdir().unwrap();
        copy_verbatim(&store, ".gitignore.template", project.path(), ".gitignore")
            .await
            .unwrap();

        assert!(project.path().join(".gitignore").is_file());
        assert!(!project.path().join(".gitignore.template").exists());
    }
}
