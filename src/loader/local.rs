use crate::error::{Error, Result};
use crate::ioutils::copy_dir;
use crate::loader::interface::TemplateLoader;
use std::path::Path;

/// Loader for templates from the local filesystem.
pub struct LocalLoader<P: AsRef<Path>> {
    path: P,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    /// Creates a new LocalLoader instance.
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<P> {
    /// Copies the template directory, leaving out `.git`.
    fn load_into(&self, dest: &Path) -> Result<()> {
        let path = self.path.as_ref();
        if !path.is_dir() {
            return Err(Error::ProcessError {
                source_path: path.display().to_string(),
                e: "template directory does not exist".to_string(),
            });
        }

        let copied = copy_dir(path, dest)?;
        log::debug!("Copied {copied} file(s) from '{}'", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_template_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = LocalLoader::new(tmp.path().join("nope"))
            .load_into(&tmp.path().join("dest"))
            .unwrap_err();
        assert!(matches!(err, Error::ProcessError { .. }));
        assert!(!tmp.path().join("dest").exists());
    }
}
