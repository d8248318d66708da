//! User interaction seam
//!
//! The generator asks questions and reports progress through [`Interaction`].
//! The interactive implementation lives in `tui`.

use anyhow::Result;

/// Prompts and progress output used by the generator
pub trait Interaction {
    /// Ask a free-text question pre-filled with `default`
    fn input(&mut self, prompt: &str, default: &str) -> Result<String>;

    /// Neutral progress message
    fn info(&mut self, message: &str) -> Result<()>;

    /// A file being written
    fn step(&mut self, message: &str) -> Result<()>;

    /// Something skipped that the user should look at
    fn warning(&mut self, message: &str) -> Result<()>;
}
