//! Project metadata prompts and their defaults

use super::{GeneratorConfig, RunState};
use crate::runtime::GitConfig;
use crate::ui::Interaction;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use url::Url;

/// Author fallbacks when git has no identity configured
const FALLBACK_AUTHOR_NAME: &str = "Name";
const FALLBACK_AUTHOR_EMAIL: &str = "email@address.com";

/// Path segment for synthesized repository URLs when `user.name` is unset
const FALLBACK_REPOSITORY_OWNER: &str = "gituser";

/// Answers used to render a new package manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectMetadata {
    pub package_name: String,
    pub description: String,
    pub repository_url: String,
    pub author: String,
}

/// Collapse whitespace runs into single hyphens
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Default project name: the destination's directory name
pub fn default_project_name(root: &Path) -> String {
    // `file_name` is None for paths ending in `..`
    let resolved = root.canonicalize().ok();
    let base = root
        .file_name()
        .or_else(|| resolved.as_deref().and_then(Path::file_name))
        .map(|n| n.to_string_lossy().into_owned())
        .or_else(|| {
            std::env::current_dir()
                .ok()
                .and_then(|cwd| cwd.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
        .unwrap_or_default();

    let name = normalize_name(&base);
    if name.is_empty() {
        "project".to_string()
    } else {
        name
    }
}

/// Browsable HTTPS URL for a git remote
///
/// HTTP(S) remotes are returned unchanged. SSH remotes, in either scp form
/// (`git@host:group/proj.git`) or URL form (`ssh://git@host/group/proj.git`),
/// lose their user and `.git` suffix. Anything else (`file://`, `git://`,
/// local and drive-letter paths) gives `None`.
pub fn repository_url_from_remote(remote: &str) -> Option<String> {
    let remote = remote.trim();
    if remote.is_empty() {
        return None;
    }

    if remote.contains("://") {
        let url = Url::parse(remote).ok()?;
        return match url.scheme() {
            "http" | "https" => Some(remote.to_string()),
            "ssh" | "git+ssh" => https_url(url.host_str()?, url.path()),
            _ => None,
        };
    }

    // scp-like syntax: [user@]host:path
    let (user_host, path) = remote.split_once(':')?;
    let host = user_host.rsplit_once('@').map_or(user_host, |(_, h)| h);
    // A single letter is a Windows drive (C:\repos\proj.git)
    if host.len() < 2 || host.contains(['/', '\\']) || path.starts_with('\\') {
        return None;
    }
    https_url(host, path)
}

fn https_url(host: &str, path: &str) -> Option<String> {
    let path = path.trim_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);
    if path.is_empty() {
        return None;
    }
    Some(format!("https://{}/{}", host, path))
}

/// Default repository URL: derived from `origin`, else synthesized
pub fn default_repository_url<G: GitConfig>(git: &G, host: &str, project_name: &str) -> String {
    if let Some(url) = git
        .origin_url()
        .as_deref()
        .and_then(repository_url_from_remote)
    {
        return url;
    }

    let owner = git
        .user_name()
        .map(|n| normalize_name(&n))
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| FALLBACK_REPOSITORY_OWNER.to_string());
    format!("https://{}/{}/{}", host, owner, normalize_name(project_name))
}

/// Default author: `Name <email>` from the committer identity
pub fn default_author<G: GitConfig>(git: &G) -> String {
    let name = git
        .user_name()
        .unwrap_or_else(|| FALLBACK_AUTHOR_NAME.to_string());
    let email = git
        .user_email()
        .unwrap_or_else(|| FALLBACK_AUTHOR_EMAIL.to_string());
    format!("{} <{}>", name, email)
}

/// Ask for project metadata if the manifest does not exist yet
pub fn collect<I: Interaction, G: GitConfig>(
    config: &GeneratorConfig,
    state: &mut RunState,
    ui: &mut I,
    git: &G,
) -> Result<()> {
    if state.existing.exists(config.template_set.manifest_key()) {
        return Ok(());
    }

    let package_name = ui.input("Name of this project", &default_project_name(&config.root))?;
    let description = ui.input("Description of this project", "")?;
    let repository_url = ui.input(
        "Your repository url",
        &default_repository_url(git, &config.repository_host, &package_name),
    )?;
    let author = ui.input("Author of this project", &default_author(git))?;

    state.metadata = Some(ProjectMetadata {
        package_name,
        description,
        repository_url,
        author,
    });

    Ok(())
}
