//! Charm-style CLI prompts using cliclack

use crate::generator::{self, scan, GeneratorConfig, RunState};
use crate::preset::Preset;
use crate::runtime::{GitCli, PackageManager, PackageManagerInstaller};
use crate::templates::{TemplateSet, TemplateSource, TemplateStore};
use crate::ui::Interaction;
use anyhow::Result;
use std::path::{Component, Path, PathBuf};

/// CLI arguments for the init command
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Local directory to use for templates instead of the built-in set
    pub template_dir: Option<PathBuf>,

    /// Project directory to set up
    pub directory: Option<PathBuf>,

    /// Package manager to install dependencies with
    pub package_manager: Option<PackageManager>,

    /// Do not install development dependencies
    pub skip_install: bool,

    /// Accept every default (non-interactive mode)
    pub yes: bool,
}

/// cliclack-backed [`Interaction`]
#[derive(Debug, Clone, Copy)]
pub struct Cliclack {
    assume_defaults: bool,
}

impl Cliclack {
    pub fn new(assume_defaults: bool) -> Self {
        Self { assume_defaults }
    }
}

impl Interaction for Cliclack {
    fn input(&mut self, prompt: &str, default: &str) -> Result<String> {
        if self.assume_defaults {
            cliclack::log::info(format!("{}: {}", prompt, default))?;
            return Ok(default.to_string());
        }

        let value: String = cliclack::input(prompt)
            .default_input(default)
            .required(false)
            .interact()?;
        Ok(value)
    }

    fn info(&mut self, message: &str) -> Result<()> {
        cliclack::log::info(message)?;
        Ok(())
    }

    fn step(&mut self, message: &str) -> Result<()> {
        cliclack::log::step(format!("Writing {}...", message))?;
        Ok(())
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        cliclack::log::warning(message)?;
        Ok(())
    }
}

/// Run the generator with interactive prompts
pub async fn run<P: Preset>(preset: &P, args: InitArgs) -> Result<()> {
    cliclack::intro(preset.display_name())?;

    // Step 1: Destination
    let project_dir = select_directory(&args)?;

    // Step 2: Templates
    let templates = setup_templates(preset, &args.template_dir)?;
    let template_set = load_template_set(&templates).await?;

    // Step 3: Package manager (lockfile decides unless given)
    let package_manager = PackageManager::select(
        args.package_manager,
        &project_dir,
        preset.default_package_manager(),
    );
    let skip_install = args.skip_install || !check_package_manager(package_manager, &args)?;

    // Step 4: Run the pipeline
    let config = GeneratorConfig {
        root: project_dir.clone(),
        template_set,
        repository_host: preset.repository_host().to_string(),
        skip_install,
    };
    let mut ui = Cliclack::new(args.yes);
    let git = GitCli::new(project_dir.clone());
    let installer = PackageManagerInstaller::new(package_manager);

    let state = generator::run(&config, &templates, &mut ui, &git, &installer).await?;

    // Step 5: Summary and next steps
    print_summary(&state)?;
    print_next_steps(preset, &project_dir, package_manager)?;

    Ok(())
}

/// Print which managed files exist in a project, without changing anything
pub async fn status<P: Preset>(
    preset: &P,
    template_dir: Option<PathBuf>,
    directory: Option<PathBuf>,
) -> Result<()> {
    cliclack::intro(preset.display_name())?;

    let project_dir = resolve_dir(directory.as_deref().unwrap_or(Path::new(".")));
    let templates = setup_templates(preset, &template_dir)?;
    let template_set = load_template_set(&templates).await?;
    let existing = scan::scan(&project_dir, &template_set.files);

    for entry in &template_set.files {
        if existing.exists(&entry.key) {
            cliclack::log::success(format!("{} present", entry.file))?;
        } else {
            cliclack::log::warning(format!("{} missing", entry.file))?;
        }
    }

    cliclack::outro(format!(
        "{} of {} managed files present in {}",
        existing.present_count(),
        existing.len(),
        project_dir.display()
    ))?;

    Ok(())
}

fn resolve_dir(dir: &Path) -> PathBuf {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let joined = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        current_dir.join(dir)
    };

    // Lexical, so directories that do not exist yet resolve too
    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    resolved
}

fn select_directory(args: &InitArgs) -> Result<PathBuf> {
    // Use --directory flag if provided
    let path = if let Some(dir) = &args.directory {
        let p = resolve_dir(dir);
        cliclack::log::info(format!("Using directory: {}", p.display()))?;
        p
    } else if args.yes {
        resolve_dir(Path::new("."))
    } else {
        let input: String = cliclack::input("Project directory")
            .placeholder(".")
            .default_input(".")
            .interact()?;
        resolve_dir(Path::new(&input))
    };

    // Validate parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.exists() && parent != Path::new("") {
            anyhow::bail!("Parent directory does not exist: {}", parent.display());
        }
    }

    if path.exists() && !path.is_dir() {
        anyhow::bail!("Not a directory: {}", path.display());
    }

    Ok(path)
}

fn setup_templates<P: Preset>(preset: &P, template_dir: &Option<PathBuf>) -> Result<TemplateStore> {
    let source = TemplateSource::resolve(preset, template_dir.clone());
    cliclack::log::info(format!("Using {}", source.describe()))?;
    Ok(TemplateStore::new(source))
}

async fn load_template_set(templates: &TemplateStore) -> Result<TemplateSet> {
    let spinner = cliclack::spinner();
    spinner.start("Loading templates...");

    match templates.load_template_set().await {
        Ok(set) => {
            spinner.stop(format!("Template set: {} - {}", set.name, set.description));
            Ok(set)
        }
        Err(e) => {
            spinner.stop("Failed to load templates");
            Err(e)
        }
    }
}

/// Returns whether dependencies can be installed with `package_manager`
fn check_package_manager(package_manager: PackageManager, args: &InitArgs) -> Result<bool> {
    if args.skip_install {
        return Ok(false);
    }

    if let Some(version) = package_manager.version() {
        cliclack::log::success(format!("{} installed ({})", package_manager, version))?;
        return Ok(true);
    }

    cliclack::log::warning(format!("{} is not installed", package_manager))?;

    // In non-interactive mode, write files and leave installation to the user
    if args.yes {
        cliclack::log::info("Continuing without installing dependencies (--yes mode)")?;
        return Ok(false);
    }

    let confirm: bool = cliclack::confirm("Continue without installing dependencies?")
        .initial_value(true)
        .interact()?;

    if !confirm {
        anyhow::bail!("Setup cancelled.");
    }

    Ok(false)
}

fn print_summary(state: &RunState) -> Result<()> {
    let skipped = state.skipped_files.len() + state.skipped_scripts.len();
    if state.written.is_empty() {
        cliclack::log::info("Nothing to write, every managed file already exists")?;
    } else {
        cliclack::log::success(format!("Wrote {} file(s)", state.written.len()))?;
    }
    if skipped > 0 {
        cliclack::log::info(format!(
            "Left {} existing file(s) and script(s) untouched",
            skipped
        ))?;
    }
    if state.installed {
        cliclack::log::success("Development dependencies installed")?;
    }
    Ok(())
}

fn print_next_steps<P: Preset>(
    preset: &P,
    project_dir: &Path,
    package_manager: PackageManager,
) -> Result<()> {
    let steps = preset.next_steps(project_dir, package_manager);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
