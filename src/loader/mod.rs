use crate::error::Result;
use crate::loader::interface::TemplateLoader;
use crate::loader::{git::GitLoader, local::LocalLoader};
use std::path::{Path, PathBuf};

pub mod git;
pub mod interface;
pub mod local;

/// Where a new project's files come from.
#[derive(Debug, PartialEq)]
pub enum TemplateSource {
    /// Local filesystem template path
    FileSystem(PathBuf),
    /// Git repository URL (HTTPS or SSH)
    Git(String),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
            TemplateSource::Git(repo) => write!(f, "git repository: '{repo}'"),
        }
    }
}

impl TemplateSource {
    /// Classifies a `--template` argument as a git URL or a local path.
    pub fn parse(s: &str) -> Self {
        if GitLoader::<&str>::is_git_url(s) {
            TemplateSource::Git(s.to_string())
        } else {
            TemplateSource::FileSystem(PathBuf::from(s))
        }
    }
}

/// Materializes a project template into `dest`.
///
/// # Arguments
/// * `s` - Git URL or local directory
/// * `dest` - Directory to populate; must not exist yet for git sources
///
/// # Returns
/// * `Result<TemplateSource>` - The source that was used
pub fn fetch_template<P: AsRef<Path>>(s: &str, dest: P) -> Result<TemplateSource> {
    let source = TemplateSource::parse(s);
    log::debug!("Fetching project template from {source}");

    match &source {
        TemplateSource::Git(repo) => GitLoader::new(repo.as_str()).load_into(dest.as_ref())?,
        TemplateSource::FileSystem(path) => LocalLoader::new(path).load_into(dest.as_ref())?,
    }
    Ok(source)
}
