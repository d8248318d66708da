//! Pure template rendering

use anyhow::{Context, Result};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

/// Render `source` with the values in `context`
///
/// Placeholders that are not present in `context` are an error. Output is not
/// auto-escaped; templates pick an escaping filter (e.g. `tojson`) per value.
pub fn render<S: Serialize>(name: &str, source: &str, context: &S) -> Result<String> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_keep_trailing_newline(true);

    let template = env
        .template_from_named_str(name, source)
        .with_context(|| format!("Failed to parse template: {}", name))?;
    template
        .render(context)
        .with_context(|| format!("Failed to render template: {}", name))
}
