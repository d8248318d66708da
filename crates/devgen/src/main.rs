//! devgen CLI - Babel, ESLint, Prettier and Jest tooling for Node.js projects

use anyhow::Result;
use clap::{Parser, Subcommand};
use devgen_core::tui::InitArgs;
use devgen_core::{PackageManager, Preset};
use include_dir::{include_dir, Dir};
use std::path::{Path, PathBuf};

/// Node.js template set, compiled into the binary
static NODE_TEMPLATES: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/../../templates/node");

/// Node.js preset
#[derive(Clone)]
pub struct NodePreset;

impl Preset for NodePreset {
    fn display_name(&self) -> &'static str {
        "devgen"
    }

    fn embedded_templates(&self) -> &'static Dir<'static> {
        &NODE_TEMPLATES
    }

    fn template_dir_env(&self) -> &'static str {
        "DEVGEN_TEMPLATE_DIR"
    }

    fn next_steps(&self, dir: &Path, package_manager: PackageManager) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // Step 1: cd to directory if not current
        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", dir.display()));
        }

        steps.push(format!(
            "{} to run the tests",
            package_manager.run_script("test")
        ));
        steps.push(format!(
            "{} to check src/",
            package_manager.run_script("lint")
        ));

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "devgen")]
#[command(about = "Add Babel, ESLint, Prettier and Jest tooling to a Node.js project")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write missing config files, merge scripts and install dev dependencies
    Init(CliInitArgs),
    /// Show which managed config files already exist
    Status(StatusArgs),
}

#[derive(Parser, Debug)]
pub struct CliInitArgs {
    /// Local directory to use for templates instead of the built-in set (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Project directory to set up
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Package manager to install with (defaults to the project's lockfile, then npm)
    #[arg(long = "package-manager", value_enum)]
    pub package_manager: Option<PackageManager>,

    /// Do not install development dependencies
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Accept every default (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliInitArgs> for InitArgs {
    fn from(args: CliInitArgs) -> Self {
        InitArgs {
            template_dir: args.template_dir,
            directory: args.directory,
            package_manager: args.package_manager,
            skip_install: args.skip_install,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Local directory to use for templates instead of the built-in set (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Project directory to inspect
    #[arg(short, long)]
    pub directory: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let preset = NodePreset;

    let result = match args.command {
        Some(Command::Init(init_args)) => devgen_core::run(&preset, init_args.into()).await,
        Some(Command::Status(status_args)) => {
            devgen_core::tui::status(&preset, status_args.template_dir, status_args.directory)
                .await
        }
        // No subcommand provided, default to init behavior (interactive mode)
        None => devgen_core::run(&preset, InitArgs::default()).await,
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
