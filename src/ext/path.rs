use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Extension trait for Path to provide conversion and resolution helpers
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains invalid Unicode characters.
    ///
    /// # Examples
    /// ```
    /// use kimu::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("src/extensions");
    /// assert_eq!(path.to_str_checked().unwrap(), "src/extensions");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Resolves a possibly relative path against `base`. Absolute paths are returned unchanged.
    ///
    /// # Examples
    /// ```
    /// use kimu::ext::PathExt;
    /// use std::path::{Path, PathBuf};
    ///
    /// let resolved = Path::new("src/modules").resolve_against("/project");
    /// assert_eq!(resolved, PathBuf::from("/project/src/modules"));
    /// ```
    fn resolve_against<B: AsRef<Path>>(&self, base: B) -> PathBuf;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    fn resolve_against<B: AsRef<Path>>(&self, base: B) -> PathBuf {
        if self.is_absolute() {
            self.to_path_buf()
        } else {
            base.as_ref().join(self)
        }
    }
}
