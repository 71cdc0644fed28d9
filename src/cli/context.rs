use crate::delegate::OutputMode;
use crate::error::Result;
use crate::generator::{Generator, TemplatesRoot};
use crate::project::ensure_project_root;
use std::path::{Path, PathBuf};

/// Shared state for a single command invocation.
pub struct CommandContext {
    cwd: PathBuf,
    verbose: u8,
    templates_dir: Option<PathBuf>,
}

impl CommandContext {
    pub fn new(cwd: PathBuf, verbose: u8, templates_dir: Option<PathBuf>) -> Self {
        Self { cwd, verbose, templates_dir }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn verbose(&self) -> bool {
        self.verbose > 0
    }

    /// Delegated tools stream their output only when `-v` is given.
    pub fn output_mode(&self) -> OutputMode {
        if self.verbose() {
            OutputMode::Inherit
        } else {
            OutputMode::Capture
        }
    }

    /// Fails unless the working directory is a KIMU project.
    pub fn require_project(&self) -> Result<()> {
        ensure_project_root(&self.cwd)
    }

    /// Resolves the templates root. An explicit `--templates-dir` that does
    /// not exist falls through to the remaining candidates.
    pub fn templates_root(&self) -> Result<TemplatesRoot> {
        TemplatesRoot::resolve(&TemplatesRoot::candidates(self.templates_dir.as_deref()))
    }

    /// A generator writing into the working directory.
    pub fn generator(&self) -> Result<Generator> {
        Ok(Generator::new(self.templates_root()?, &self.cwd))
    }
}
