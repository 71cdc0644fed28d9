use crate::error::Result;
use std::path::Path;

/// A source that can populate a directory with project files.
pub trait TemplateLoader {
    /// Writes the template's files into `dest`.
    fn load_into(&self, dest: &Path) -> Result<()>;
}
