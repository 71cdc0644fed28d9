//! Inspection of an existing KIMU project on disk.

pub mod config;
pub mod doctor;
pub mod info;
pub mod installed;

use crate::constants::{
    EXTENSIONS_DIR, EXTENSIONS_MANIFEST_FILE, KIMU_CONFIG_FILE, MODULES_DIR,
    MODULES_MANIFEST_FILE, SRC_DIR,
};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

pub use config::KimuConfig;
pub use doctor::{run_diagnostics, CheckStatus, Diagnostic, DiagnosticCheck, DiagnosticSummary};
pub use info::{gather_project_info, ProjectInfoData};
pub use installed::{read_installed_packages, InstalledPackages};

/// Fails unless `root` holds a `kimu.config.json`.
pub fn ensure_project_root<P: AsRef<Path>>(root: P) -> Result<()> {
    let config = root.as_ref().join(KIMU_CONFIG_FILE);
    if config.is_file() {
        Ok(())
    } else {
        Err(Error::NotInProjectError { config_file: KIMU_CONFIG_FILE.to_string() })
    }
}

pub fn modules_manifest_path<P: AsRef<Path>>(root: P) -> PathBuf {
    root.as_ref().join(SRC_DIR).join(MODULES_DIR).join(MODULES_MANIFEST_FILE)
}

pub fn extensions_manifest_path<P: AsRef<Path>>(root: P) -> PathBuf {
    root.as_ref().join(SRC_DIR).join(EXTENSIONS_DIR).join(EXTENSIONS_MANIFEST_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn project_root_requires_config_file() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(
            ensure_project_root(tmp.path()),
            Err(Error::NotInProjectError { .. })
        ));
        std::fs::write(tmp.path().join(KIMU_CONFIG_FILE), "{}").unwrap();
        assert!(ensure_project_root(tmp.path()).is_ok());
    }

    #[test]
    fn manifest_paths_live_under_src() {
        assert_eq!(
            modules_manifest_path("/app"),
            PathBuf::from("/app/src/modules/modules-manifest.json")
        );
        assert_eq!(
            extensions_manifest_path("/app"),
            PathBuf::from("/app/src/extensions/extensions-manifest.json")
        );
    }
}
