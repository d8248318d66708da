//! Development dependency installation stage

use super::{GeneratorConfig, RunState};
use crate::runtime::DependencyInstaller;
use crate::ui::Interaction;
use anyhow::Result;

/// Install the template set's development dependencies in one call
pub async fn install_dependencies<I: Interaction, D: DependencyInstaller>(
    config: &GeneratorConfig,
    state: &mut RunState,
    ui: &mut I,
    installer: &D,
) -> Result<()> {
    let deps = &config.template_set.dev_dependencies;

    if config.skip_install {
        ui.info(&format!(
            "Skipping dependency installation. Run it yourself with: {}",
            installer.describe(deps)
        ))?;
        return Ok(());
    }

    if deps.is_empty() {
        ui.info("No development dependencies to install")?;
        return Ok(());
    }

    ui.info(&format!("Installing {} development dependencies...", deps.len()))?;
    installer.install(&config.root, deps).await?;
    state.installed = true;

    Ok(())
}
